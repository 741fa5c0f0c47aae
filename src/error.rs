//! Error types for preset formatting
//!
//! Every failure reaches the caller as a [`FormatError`]; [`FormatError::kind`]
//! lets callers branch on the failure category without matching messages.

use thiserror::Error;

use crate::locale::LocaleError;

/// Failure categories of a preset formatting call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is not a number
    Value,
    /// The style tag is not one of the presets
    Style,
    /// The formatting facility rejected the locale or the options
    Locale,
}

/// Error returned by the preset formatting functions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("Error - Value: Please enter a number.")]
    Value,

    #[error(
        "Error - Number Style: Please specify a valid number style, e.g. currency-us, percent, number-grouped, number-ungrouped. Got '{0}'."
    )]
    Style(String),

    #[error(transparent)]
    Locale(#[from] LocaleError),
}

impl FormatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormatError::Value => ErrorKind::Value,
            FormatError::Style(_) => ErrorKind::Style,
            FormatError::Locale(_) => ErrorKind::Locale,
        }
    }
}
