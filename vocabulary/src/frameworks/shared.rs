//! Vocabulary shared by every framework: suffix modifiers and prefix suggestions.

use crate::model::{PrefixSlot, PrefixTerms, Term};

/// Returns the free suffix modifiers.
#[must_use]
pub fn modifiers() -> Vec<Term> {
    vec![
        Term::described("hover", "Hover", "Hover state."),
        Term::described("active", "Active", "Active/pressed state."),
        Term::described("focus", "Focus", "Focus state."),
        Term::described("pressed", "Pressed", "Toggled-on state."),
        Term::described("selected", "Selected", "Selected state."),
        Term::described("disabled", "Disabled", "Disabled state."),
        Term::described("subtle", "Subtle", "Lower emphasis variant."),
        Term::described("strong", "Strong", "Higher emphasis variant."),
        Term::described("muted", "Muted", "De-emphasized variant."),
        Term::described("inverse", "Inverse", "For use on inverted surfaces."),
    ]
}

/// Returns the prefix suggestions, one entry per slot.
#[must_use]
pub fn prefixes() -> Vec<PrefixTerms> {
    vec![
        PrefixTerms {
            slot: PrefixSlot::System,
            terms: vec![
                Term::described("ds", "DS", "Generic design-system prefix."),
                Term::new("acme", "Acme"),
            ],
        },
        PrefixTerms {
            slot: PrefixSlot::Theme,
            terms: vec![
                Term::new("light", "Light"),
                Term::new("dark", "Dark"),
                Term::new("high-contrast", "High Contrast"),
            ],
        },
        PrefixTerms {
            slot: PrefixSlot::Domain,
            terms: vec![
                Term::new("marketing", "Marketing"),
                Term::new("product", "Product"),
                Term::new("admin", "Admin"),
            ],
        },
    ]
}
