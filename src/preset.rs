//! Preset formatting functions
//!
//! The presets map onto a fixed [`FormatOptions`](crate::types::FormatOptions)
//! record each (see [`NumberStyle::options`]); the rendering itself is left to a
//! [`NumberFormatProvider`].

use crate::error::FormatError;
use crate::formatter::{BuiltinProvider, NumberFormatProvider};
use crate::types::{FormatRequest, NumberStyle};

/// Locale used when the caller does not pass one
pub const DEFAULT_LOCALE: &str = "en-us";

fn check_value(value: f64) -> Result<(), FormatError> {
    if value.is_nan() {
        return Err(FormatError::Value);
    }
    Ok(())
}

/// Format a number with a preset named by its style tag
///
/// # Arguments
/// * `value` - The number to format, must not be NaN
/// * `style` - One of `currency-us`, `percent`, `number-grouped`, `number-ungrouped`
/// * `min_fraction_digits` - Minimum number of fraction digits
/// * `locale` - Locale tag, e.g. [`DEFAULT_LOCALE`]
///
/// # Returns
/// * `Result<String, FormatError>` - The formatted number, or why it could not be formatted
///
/// # Examples
/// ```
/// use intl_number_format::{ErrorKind, format_intl_number};
///
/// assert_eq!(format_intl_number(1234.5, "currency-us", 2, "en-us").unwrap(), "$1,234.50");
///
/// let err = format_intl_number(42.0, "", 0, "en-us").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Style);
/// ```
pub fn format_intl_number(
    value: f64,
    style: &str,
    min_fraction_digits: u32,
    locale: &str,
) -> Result<String, FormatError> {
    check_value(value)?;
    let style: NumberStyle = style.parse()?;
    format_number(value, style, min_fraction_digits, locale)
}

/// Format a number with a preset
///
/// # Examples
/// ```
/// use intl_number_format::{NumberStyle, format_number};
///
/// assert_eq!(format_number(0.5, NumberStyle::Percent, 0, "en-us").unwrap(), "50%");
/// ```
pub fn format_number(
    value: f64,
    style: NumberStyle,
    min_fraction_digits: u32,
    locale: &str,
) -> Result<String, FormatError> {
    let request = FormatRequest::new(value, style)
        .min_fraction_digits(min_fraction_digits)
        .locale(locale);
    request.format()
}

/// Format a preset request with a caller-supplied formatting facility
pub fn format_with_provider<P>(provider: &P, request: &FormatRequest) -> Result<String, FormatError>
where
    P: NumberFormatProvider + ?Sized,
{
    check_value(request.value)?;

    let options = request.style.options(request.min_fraction_digits);
    tracing::trace!(
        style = %request.style,
        locale = %request.locale,
        min_fraction_digits = request.min_fraction_digits,
        "Formatting with preset"
    );

    provider
        .format(&request.locale, &options, request.value)
        .map_err(FormatError::from)
}

impl FormatRequest {
    /// Format this request with the built-in facility
    pub fn format(&self) -> Result<String, FormatError> {
        format_with_provider(&BuiltinProvider, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::locale::LocaleError;
    use crate::types::FormatOptions;
    use std::cell::RefCell;

    /// Records what the preset layer hands to the facility
    #[derive(Default)]
    struct RecordingProvider {
        calls: RefCell<Vec<(String, FormatOptions)>>,
    }

    impl NumberFormatProvider for RecordingProvider {
        fn format(
            &self,
            locale: &str,
            options: &FormatOptions,
            value: f64,
        ) -> Result<String, LocaleError> {
            self.calls
                .borrow_mut()
                .push((locale.to_string(), options.clone()));
            Ok(format!("<{value}>"))
        }
    }

    struct RejectingProvider;

    impl NumberFormatProvider for RejectingProvider {
        fn format(&self, _: &str, _: &FormatOptions, _: f64) -> Result<String, LocaleError> {
            Err(LocaleError::MissingCurrency)
        }
    }

    #[test]
    fn test_provider_output_is_returned_verbatim() {
        let provider = RecordingProvider::default();
        let request = FormatRequest::new(7.0, NumberStyle::NumberGrouped)
            .min_fraction_digits(3)
            .locale("fr");

        assert_eq!(format_with_provider(&provider, &request), Ok("<7>".to_string()));

        let calls = provider.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "fr");
        assert_eq!(calls[0].1, NumberStyle::NumberGrouped.options(3));
    }

    #[test]
    fn test_nan_never_reaches_provider() {
        let provider = RecordingProvider::default();
        let request = FormatRequest::new(f64::NAN, NumberStyle::Percent);

        let err = format_with_provider(&provider, &request).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(provider.calls.borrow().is_empty());
    }

    #[test]
    fn test_provider_errors_become_locale_errors() {
        let request = FormatRequest::new(1.0, NumberStyle::CurrencyUs);
        let err = format_with_provider(&RejectingProvider, &request).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Locale);
        assert_eq!(err, FormatError::Locale(LocaleError::MissingCurrency));
    }

    #[test]
    fn test_value_is_checked_before_style() {
        let err = format_intl_number(f64::NAN, "bogus-style", 0, DEFAULT_LOCALE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_request_defaults() {
        let request = FormatRequest::new(1.0, NumberStyle::CurrencyUs);
        assert_eq!(request.min_fraction_digits, 0);
        assert_eq!(request.locale, DEFAULT_LOCALE);
    }
}
