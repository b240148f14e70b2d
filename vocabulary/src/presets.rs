//! Ready-made compositions offered as starting points.

use crate::model::{FieldId, Framework, Preset};

/// Returns every preset, grouped by framework.
#[must_use]
pub fn presets() -> Vec<Preset> {
    vec![
        Preset {
            label: "color/gray/500",
            framework: Framework::Primitive,
            fields: &[
                (FieldId::Property, "color"),
                (FieldId::Group, "gray"),
                (FieldId::Identifier, "500"),
            ],
            modifiers: &[],
        },
        Preset {
            label: "dimension/space/4",
            framework: Framework::Primitive,
            fields: &[
                (FieldId::Property, "dimension"),
                (FieldId::Group, "space"),
                (FieldId::Identifier, "4"),
            ],
            modifiers: &[],
        },
        Preset {
            label: "fontFamily/sans/inter",
            framework: Framework::Primitive,
            fields: &[
                (FieldId::Property, "fontFamily"),
                (FieldId::Group, "sans"),
                (FieldId::Identifier, "inter"),
            ],
            modifiers: &[],
        },
        Preset {
            label: "easing/standard",
            framework: Framework::Primitive,
            fields: &[(FieldId::Property, "easing"), (FieldId::Identifier, "standard")],
            modifiers: &[],
        },
        Preset {
            label: "text/body/primary",
            framework: Framework::Semantic,
            fields: &[
                (FieldId::Role, "text"),
                (FieldId::Element, "body"),
                (FieldId::Variant, "primary"),
            ],
            modifiers: &[],
        },
        Preset {
            label: "surface/card/default",
            framework: Framework::Semantic,
            fields: &[
                (FieldId::Role, "surface"),
                (FieldId::Element, "card"),
                (FieldId::Emphasis, "default"),
            ],
            modifiers: &[],
        },
        Preset {
            label: "action/button/primary/hover",
            framework: Framework::Semantic,
            fields: &[
                (FieldId::Role, "action"),
                (FieldId::Element, "button"),
                (FieldId::Variant, "primary"),
                (FieldId::State, "hover"),
            ],
            modifiers: &[],
        },
        Preset {
            label: "button/container/background-color",
            framework: Framework::Component,
            fields: &[
                (FieldId::Component, "button"),
                (FieldId::Part, "container"),
                (FieldId::Property, "background-color"),
            ],
            modifiers: &[],
        },
        Preset {
            label: "input/border/border-color/focus",
            framework: Framework::Component,
            fields: &[
                (FieldId::Component, "input"),
                (FieldId::Part, "border"),
                (FieldId::Property, "border-color"),
                (FieldId::State, "focus"),
            ],
            modifiers: &[],
        },
        Preset {
            label: "card/container/shadow/strong",
            framework: Framework::Component,
            fields: &[
                (FieldId::Component, "card"),
                (FieldId::Part, "container"),
                (FieldId::Property, "shadow"),
            ],
            modifiers: &["strong"],
        },
    ]
}
