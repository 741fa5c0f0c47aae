//! Parsing module
//!
//! Parses BCP 47 language tags into [`LanguageTag`](crate::types::LanguageTag) and
//! the affix patterns used by the embedded locale data.

mod affix;
mod language_tag;

pub use affix::parse_affix_pattern;
pub use language_tag::parse_language_tag;
