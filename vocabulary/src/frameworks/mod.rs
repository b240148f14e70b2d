//! Framework vocabulary modules.
//!
//! Each sub-module encodes one framework's controlled vocabulary as Rust
//! static data. Modules are listed in tab order; see [`crate::Vocabulary::full`]
//! for the assembly sequence.

pub mod primitive;
pub mod semantic;
pub mod component;
pub mod shared;
