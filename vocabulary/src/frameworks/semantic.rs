//! `semantic`: intent-bearing aliases.
//!
//! Field order: `role → element → variant → emphasis → state → context`.
//! `element` and `state` lists are keyed by role.

use crate::model::{FieldId, Framework, FrameworkModule, Term, TermList};

/// Returns the `semantic` framework module.
#[must_use]
pub fn module() -> FrameworkModule {
    let mut lists = vec![TermList {
        field: FieldId::Role,
        when: &[],
        terms: vec![
            Term::described("surface", "Surface", "Backgrounds and containers."),
            Term::described("text", "Text", "Foreground text."),
            Term::described("border", "Border", "Strokes and dividers."),
            Term::described("icon", "Icon", "Icon foregrounds."),
            Term::described("action", "Action", "Interactive controls."),
            Term::described("feedback", "Feedback", "Status and messaging."),
        ],
    }];
    lists.extend(element_lists());
    lists.extend(state_lists());
    lists.extend(vec![
        TermList {
            field: FieldId::Variant,
            when: &[],
            terms: vec![
                Term::new("primary", "Primary"),
                Term::new("secondary", "Secondary"),
                Term::new("tertiary", "Tertiary"),
                Term::new("brand", "Brand"),
                Term::new("neutral", "Neutral"),
                Term::new("inverse", "Inverse"),
            ],
        },
        TermList {
            field: FieldId::Emphasis,
            when: &[],
            terms: vec![
                Term::described("subtle", "Subtle", "Lower emphasis."),
                Term::described("default", "Default", "Regular emphasis."),
                Term::described("strong", "Strong", "Higher emphasis."),
            ],
        },
        TermList {
            field: FieldId::Context,
            when: &[],
            terms: vec![
                Term::new("on-light", "On Light"),
                Term::new("on-dark", "On Dark"),
                Term::new("inverse", "Inverse"),
                Term::new("high-contrast", "High Contrast"),
            ],
        },
    ]);

    FrameworkModule {
        framework: Framework::Semantic,
        label: "Semantic",
        comment: "Aliases that describe intent (role and element) instead of value. \
                  Semantic tokens reference primitives.",
        lists,
        properties: vec![],
    }
}

fn element_lists() -> Vec<TermList> {
    vec![
        TermList {
            field: FieldId::Element,
            when: &[(FieldId::Role, "surface")],
            terms: vec![
                Term::new("page", "Page"),
                Term::new("card", "Card"),
                Term::new("raised", "Raised"),
                Term::new("overlay", "Overlay"),
            ],
        },
        TermList {
            field: FieldId::Element,
            when: &[(FieldId::Role, "text")],
            terms: vec![
                Term::new("body", "Body"),
                Term::new("heading", "Heading"),
                Term::new("caption", "Caption"),
                Term::new("label", "Label"),
                Term::new("link", "Link"),
            ],
        },
        TermList {
            field: FieldId::Element,
            when: &[(FieldId::Role, "border")],
            terms: vec![
                Term::new("container", "Container"),
                Term::new("divider", "Divider"),
                Term::new("input", "Input"),
                Term::new("focus-ring", "Focus Ring"),
            ],
        },
        TermList {
            field: FieldId::Element,
            when: &[(FieldId::Role, "icon")],
            terms: vec![
                Term::new("leading", "Leading"),
                Term::new("trailing", "Trailing"),
                Term::new("status", "Status"),
            ],
        },
        TermList {
            field: FieldId::Element,
            when: &[(FieldId::Role, "action")],
            terms: vec![
                Term::new("button", "Button"),
                Term::new("link", "Link"),
                Term::new("toggle", "Toggle"),
            ],
        },
        TermList {
            field: FieldId::Element,
            when: &[(FieldId::Role, "feedback")],
            terms: vec![
                Term::new("success", "Success"),
                Term::new("warning", "Warning"),
                Term::new("error", "Error"),
                Term::new("info", "Info"),
            ],
        },
    ]
}

fn state_lists() -> Vec<TermList> {
    vec![
        TermList {
            field: FieldId::State,
            when: &[(FieldId::Role, "surface")],
            terms: vec![
                Term::new("hover", "Hover"),
                Term::new("selected", "Selected"),
                Term::new("disabled", "Disabled"),
            ],
        },
        TermList {
            field: FieldId::State,
            when: &[(FieldId::Role, "text")],
            terms: vec![
                Term::new("hover", "Hover"),
                Term::new("visited", "Visited"),
                Term::new("disabled", "Disabled"),
            ],
        },
        TermList {
            field: FieldId::State,
            when: &[(FieldId::Role, "border")],
            terms: vec![
                Term::new("hover", "Hover"),
                Term::new("focus", "Focus"),
                Term::new("disabled", "Disabled"),
            ],
        },
        TermList {
            field: FieldId::State,
            when: &[(FieldId::Role, "icon")],
            terms: vec![
                Term::new("hover", "Hover"),
                Term::new("active", "Active"),
                Term::new("disabled", "Disabled"),
            ],
        },
        TermList {
            field: FieldId::State,
            when: &[(FieldId::Role, "action")],
            terms: vec![
                Term::new("hover", "Hover"),
                Term::new("active", "Active"),
                Term::new("focus", "Focus"),
                Term::new("pressed", "Pressed"),
                Term::new("disabled", "Disabled"),
            ],
        },
    ]
}
