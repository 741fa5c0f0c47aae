//! Locale-aware number formatting with named presets
//!
//! The presets (`currency-us`, `percent`, `number-grouped`, `number-ungrouped`)
//! each stand for a fixed options record that is handed to a locale-aware
//! [`NumberFormatter`]. Failures are returned as [`FormatError`].

pub mod error;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod preset;
pub mod types;

// Main API
pub use error::{ErrorKind, FormatError};
pub use formatter::{BuiltinProvider, NumberFormatProvider, NumberFormatter};
pub use locale::LocaleError;
pub use preset::{DEFAULT_LOCALE, format_intl_number, format_number, format_with_provider};
pub use types::*;

#[cfg(test)]
mod tests;
