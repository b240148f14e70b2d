//! `component`: component-scoped tokens.
//!
//! Field order: `component → part → property → variant → state → context`.
//! Only `part` is keyed by an upstream value (the component).

use crate::model::{FieldId, Framework, FrameworkModule, Term, TermList};

/// Returns the `component` framework module.
#[must_use]
pub fn module() -> FrameworkModule {
    let mut lists = vec![TermList {
        field: FieldId::Component,
        when: &[],
        terms: vec![
            Term::new("button", "Button"),
            Term::new("input", "Input"),
            Term::new("card", "Card"),
            Term::new("badge", "Badge"),
            Term::new("checkbox", "Checkbox"),
            Term::new("modal", "Modal"),
            Term::new("tabs", "Tabs"),
            Term::new("tooltip", "Tooltip"),
        ],
    }];
    lists.extend(part_lists());
    lists.extend(vec![
        TermList {
            field: FieldId::Property,
            when: &[],
            terms: vec![
                Term::new("background-color", "Background Color"),
                Term::new("text-color", "Text Color"),
                Term::new("border-color", "Border Color"),
                Term::new("border-width", "Border Width"),
                Term::new("border-radius", "Border Radius"),
                Term::new("padding-x", "Horizontal Padding"),
                Term::new("padding-y", "Vertical Padding"),
                Term::new("gap", "Gap"),
                Term::new("height", "Height"),
                Term::new("width", "Width"),
                Term::new("font-size", "Font Size"),
                Term::new("font-weight", "Font Weight"),
                Term::new("icon-size", "Icon Size"),
                Term::new("shadow", "Shadow"),
                Term::new("opacity", "Opacity"),
            ],
        },
        TermList {
            field: FieldId::Variant,
            when: &[],
            terms: vec![
                Term::new("primary", "Primary"),
                Term::new("secondary", "Secondary"),
                Term::new("tertiary", "Tertiary"),
                Term::new("danger", "Danger"),
                Term::new("ghost", "Ghost"),
            ],
        },
        TermList {
            field: FieldId::State,
            when: &[],
            terms: vec![
                Term::new("hover", "Hover"),
                Term::new("active", "Active"),
                Term::new("focus", "Focus"),
                Term::new("pressed", "Pressed"),
                Term::new("selected", "Selected"),
                Term::new("disabled", "Disabled"),
                Term::new("error", "Error"),
            ],
        },
        TermList {
            field: FieldId::Context,
            when: &[],
            terms: vec![
                Term::new("on-light", "On Light"),
                Term::new("on-dark", "On Dark"),
                Term::new("compact", "Compact"),
            ],
        },
    ]);

    FrameworkModule {
        framework: Framework::Component,
        label: "Component",
        comment: "Tokens scoped to one part of one component, e.g. the container \
                  background of a button.",
        lists,
        properties: vec![],
    }
}

fn part_lists() -> Vec<TermList> {
    fn parts(component: &'static [(FieldId, &'static str)], terms: Vec<Term>) -> TermList {
        TermList {
            field: FieldId::Part,
            when: component,
            terms,
        }
    }

    vec![
        parts(
            &[(FieldId::Component, "button")],
            vec![
                Term::new("container", "Container"),
                Term::new("label", "Label"),
                Term::new("icon", "Icon"),
                Term::new("focus-ring", "Focus Ring"),
            ],
        ),
        parts(
            &[(FieldId::Component, "input")],
            vec![
                Term::new("container", "Container"),
                Term::new("text", "Text"),
                Term::new("placeholder", "Placeholder"),
                Term::new("border", "Border"),
                Term::new("icon", "Icon"),
            ],
        ),
        parts(
            &[(FieldId::Component, "card")],
            vec![
                Term::new("container", "Container"),
                Term::new("header", "Header"),
                Term::new("body", "Body"),
                Term::new("footer", "Footer"),
            ],
        ),
        parts(
            &[(FieldId::Component, "badge")],
            vec![Term::new("container", "Container"), Term::new("label", "Label")],
        ),
        parts(
            &[(FieldId::Component, "checkbox")],
            vec![
                Term::new("box", "Box"),
                Term::new("checkmark", "Checkmark"),
                Term::new("label", "Label"),
            ],
        ),
        parts(
            &[(FieldId::Component, "modal")],
            vec![
                Term::new("backdrop", "Backdrop"),
                Term::new("container", "Container"),
                Term::new("header", "Header"),
                Term::new("body", "Body"),
                Term::new("footer", "Footer"),
            ],
        ),
        parts(
            &[(FieldId::Component, "tabs")],
            vec![
                Term::new("list", "List"),
                Term::new("tab", "Tab"),
                Term::new("indicator", "Indicator"),
                Term::new("panel", "Panel"),
            ],
        ),
        parts(
            &[(FieldId::Component, "tooltip")],
            vec![
                Term::new("container", "Container"),
                Term::new("text", "Text"),
                Term::new("arrow", "Arrow"),
            ],
        ),
    ]
}
