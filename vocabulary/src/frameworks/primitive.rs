//! `primitive`: raw design values.
//!
//! Field order: `property → group → identifier`. `group` only exists for the
//! grouped properties (`color`, `dimension`, `shadow`, `fontFamily`); the
//! identifier's shape depends on both the property and the group.

use crate::model::{
    FieldId, Framework, FrameworkModule, IdentifierShape, PrimitiveProperty, Term, TermList,
};

const HUES: &[Term] = &[
    Term::new("gray", "Gray"),
    Term::new("red", "Red"),
    Term::new("orange", "Orange"),
    Term::new("yellow", "Yellow"),
    Term::new("green", "Green"),
    Term::new("teal", "Teal"),
    Term::new("blue", "Blue"),
    Term::new("purple", "Purple"),
    Term::new("pink", "Pink"),
];

const DIMENSION_GROUPS: &[Term] = &[
    Term::described("space", "Space", "Margins, paddings and gaps; may be negative."),
    Term::described("size", "Size", "Widths and heights."),
    Term::described("radius", "Radius", "Corner radii."),
    Term::described("border-width", "Border Width", "Stroke widths."),
];

const SHADOW_GROUPS: &[Term] = &[
    Term::described("elevation", "Elevation", "Drop shadows by elevation level."),
    Term::described("inset", "Inset", "Inner shadows."),
];

const FONT_STACKS: &[Term] = &[
    Term::new("sans", "Sans Serif"),
    Term::new("serif", "Serif"),
    Term::new("mono", "Monospace"),
];

/// Returns the `primitive` framework module.
#[must_use]
pub fn module() -> FrameworkModule {
    let properties = properties();
    let mut lists = vec![TermList {
        field: FieldId::Property,
        when: &[],
        terms: properties.iter().map(|p| p.term).collect(),
    }];
    lists.extend(group_lists());
    lists.extend(identifier_lists());

    FrameworkModule {
        framework: Framework::Primitive,
        label: "Primitive",
        comment: "Raw design values named by property, group and scale step. \
                  Primitive tokens are the only tokens that carry literal values.",
        lists,
        properties,
    }
}

fn properties() -> Vec<PrimitiveProperty> {
    vec![
        PrimitiveProperty {
            term: Term::described("color", "Color", "Palette colors by hue and step."),
            groups: HUES,
            shape: IdentifierShape::ColorStep,
            group_shapes: &[],
        },
        PrimitiveProperty {
            term: Term::described("dimension", "Dimension", "Lengths: spacing, sizing, radii, strokes."),
            groups: DIMENSION_GROUPS,
            shape: IdentifierShape::Numeric,
            group_shapes: &[("space", IdentifierShape::SignedNumeric)],
        },
        PrimitiveProperty {
            term: Term::described("shadow", "Shadow", "Box shadows."),
            groups: SHADOW_GROUPS,
            shape: IdentifierShape::Numeric,
            group_shapes: &[],
        },
        PrimitiveProperty {
            term: Term::described("fontFamily", "Font Family", "Typeface stacks."),
            groups: FONT_STACKS,
            shape: IdentifierShape::Enumerated,
            group_shapes: &[],
        },
        PrimitiveProperty {
            term: Term::new("fontSize", "Font Size"),
            groups: &[],
            shape: IdentifierShape::Numeric,
            group_shapes: &[],
        },
        PrimitiveProperty {
            term: Term::new("fontWeight", "Font Weight"),
            groups: &[],
            shape: IdentifierShape::Numeric,
            group_shapes: &[],
        },
        PrimitiveProperty {
            term: Term::new("lineHeight", "Line Height"),
            groups: &[],
            shape: IdentifierShape::Numeric,
            group_shapes: &[],
        },
        PrimitiveProperty {
            term: Term::new("letterSpacing", "Letter Spacing"),
            groups: &[],
            shape: IdentifierShape::SignedNumeric,
            group_shapes: &[],
        },
        PrimitiveProperty {
            term: Term::described("opacity", "Opacity", "Opacity percentages."),
            groups: &[],
            shape: IdentifierShape::Numeric,
            group_shapes: &[],
        },
        PrimitiveProperty {
            term: Term::described("duration", "Duration", "Transition durations in milliseconds."),
            groups: &[],
            shape: IdentifierShape::Numeric,
            group_shapes: &[],
        },
        PrimitiveProperty {
            term: Term::described("easing", "Easing", "Timing curves."),
            groups: &[],
            shape: IdentifierShape::Enumerated,
            group_shapes: &[],
        },
        PrimitiveProperty {
            term: Term::new("textCase", "Text Case"),
            groups: &[],
            shape: IdentifierShape::Enumerated,
            group_shapes: &[],
        },
        PrimitiveProperty {
            term: Term::new("textDecoration", "Text Decoration"),
            groups: &[],
            shape: IdentifierShape::Enumerated,
            group_shapes: &[],
        },
    ]
}

fn group_lists() -> Vec<TermList> {
    vec![
        TermList {
            field: FieldId::Group,
            when: &[(FieldId::Property, "color")],
            terms: HUES.to_vec(),
        },
        TermList {
            field: FieldId::Group,
            when: &[(FieldId::Property, "dimension")],
            terms: DIMENSION_GROUPS.to_vec(),
        },
        TermList {
            field: FieldId::Group,
            when: &[(FieldId::Property, "shadow")],
            terms: SHADOW_GROUPS.to_vec(),
        },
        TermList {
            field: FieldId::Group,
            when: &[(FieldId::Property, "fontFamily")],
            terms: FONT_STACKS.to_vec(),
        },
    ]
}

fn steps(values: &'static [&'static str]) -> Vec<Term> {
    values.iter().copied().map(|v| Term::new(v, v)).collect()
}

fn identifier_lists() -> Vec<TermList> {
    vec![
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "color")],
            terms: steps(&["50", "100", "200", "300", "400", "500", "600", "700", "800", "900"]),
        },
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "dimension"), (FieldId::Group, "space")],
            terms: steps(&[
                "neg-8", "neg-4", "neg-2", "0", "1", "2", "4", "6", "8", "12", "16", "24", "32",
                "48", "64",
            ]),
        },
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "dimension"), (FieldId::Group, "size")],
            terms: steps(&["16", "20", "24", "32", "40", "48", "64", "96", "128"]),
        },
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "dimension"), (FieldId::Group, "radius")],
            terms: steps(&["0", "2", "4", "8", "12", "16", "999"]),
        },
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "dimension"), (FieldId::Group, "border-width")],
            terms: steps(&["0", "1", "2", "4"]),
        },
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "shadow")],
            terms: steps(&["0", "1", "2", "3", "4", "5"]),
        },
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "fontFamily"), (FieldId::Group, "sans")],
            terms: vec![
                Term::new("inter", "Inter"),
                Term::new("roboto", "Roboto"),
                Term::described("system", "System UI", "Platform default sans-serif stack."),
            ],
        },
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "fontFamily"), (FieldId::Group, "serif")],
            terms: vec![
                Term::new("georgia", "Georgia"),
                Term::new("merriweather", "Merriweather"),
            ],
        },
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "fontFamily"), (FieldId::Group, "mono")],
            terms: vec![
                Term::new("jetbrains-mono", "JetBrains Mono"),
                Term::new("fira-code", "Fira Code"),
            ],
        },
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "fontSize")],
            terms: steps(&["12", "14", "16", "18", "20", "24", "32", "40", "48"]),
        },
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "fontWeight")],
            terms: steps(&["100", "200", "300", "400", "500", "600", "700", "800", "900"]),
        },
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "lineHeight")],
            terms: steps(&["100", "125", "150", "175", "200"]),
        },
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "letterSpacing")],
            terms: steps(&["neg-2", "neg-1", "0", "1", "2", "4"]),
        },
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "opacity")],
            terms: steps(&["0", "10", "25", "50", "75", "90", "100"]),
        },
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "duration")],
            terms: steps(&["50", "100", "150", "200", "300", "500", "800"]),
        },
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "easing")],
            terms: vec![
                Term::described("standard", "Standard", "Standard easing curve."),
                Term::described("emphasized", "Emphasized", "Stronger ease-in-out."),
                Term::described("decelerate", "Decelerate", "Entering elements."),
                Term::described("accelerate", "Accelerate", "Exiting elements."),
                Term::described("linear", "Linear", "Linear easing."),
            ],
        },
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "textCase")],
            terms: vec![
                Term::new("none", "None"),
                Term::new("uppercase", "Uppercase"),
                Term::new("lowercase", "Lowercase"),
                Term::new("capitalize", "Capitalize"),
            ],
        },
        TermList {
            field: FieldId::Identifier,
            when: &[(FieldId::Property, "textDecoration")],
            terms: vec![
                Term::new("none", "None"),
                Term::new("underline", "Underline"),
                Term::new("line-through", "Line Through"),
            ],
        },
    ]
}
