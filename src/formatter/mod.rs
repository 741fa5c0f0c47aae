//! Locale-aware number formatting module
//!
//! [`NumberFormatter`] is built once from a locale tag and a [`FormatOptions`]
//! record and then renders any number of values. Construction is where locale
//! tags and options are validated; rendering itself cannot fail.

mod digits;
mod grouping;

use crate::locale::{LocaleError, MAX_FRACTION_DIGITS, resolve_locale};
use crate::parser::parse_language_tag;
use crate::types::{
    AffixPattern, AffixToken, DisplayStyle, FormatOptions, Grouping, LocaleSettings,
    ResolvedOptions,
};

use digits::DecimalDigits;
use grouping::group_integer;

/// Locale-aware formatting facility behind the preset functions
pub trait NumberFormatProvider {
    /// Render `value` for `locale` with the given options
    fn format(
        &self,
        locale: &str,
        options: &FormatOptions,
        value: f64,
    ) -> Result<String, LocaleError>;
}

/// Provider backed by [`NumberFormatter`] and the embedded locale data
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider;

impl NumberFormatProvider for BuiltinProvider {
    fn format(
        &self,
        locale: &str,
        options: &FormatOptions,
        value: f64,
    ) -> Result<String, LocaleError> {
        Ok(NumberFormatter::new(locale, options)?.format(value))
    }
}

/// A number formatter bound to one locale and one set of options
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormatter {
    settings: LocaleSettings,
    resolved: ResolvedOptions,
}

impl NumberFormatter {
    /// Create a formatter for `locale` with the given options
    ///
    /// # Arguments
    /// * `locale` - BCP 47 language tag, matched case-insensitively
    /// * `options` - The options record
    ///
    /// # Returns
    /// * `Result<NumberFormatter, LocaleError>` - The formatter, or why the
    ///   locale or options were rejected
    ///
    /// # Examples
    /// ```
    /// use intl_number_format::formatter::NumberFormatter;
    /// use intl_number_format::types::{DisplayStyle, FormatOptions};
    ///
    /// let options = FormatOptions::new(DisplayStyle::Currency).with_currency("USD");
    /// let formatter = NumberFormatter::new("en-US", &options).unwrap();
    /// assert_eq!(formatter.format(-1234.5), "-$1,234.5");
    /// ```
    pub fn new(locale: &str, options: &FormatOptions) -> Result<Self, LocaleError> {
        let tag = parse_language_tag(locale).map_err(|reason| LocaleError::InvalidTag {
            tag: locale.to_string(),
            reason,
        })?;

        let minimum_fraction_digits = options.minimum_fraction_digits;
        if minimum_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(LocaleError::FractionDigitsOutOfRange(minimum_fraction_digits));
        }

        let currency = match options.style {
            DisplayStyle::Currency => {
                let code = options
                    .currency
                    .as_deref()
                    .ok_or(LocaleError::MissingCurrency)?;
                if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(LocaleError::InvalidCurrency(code.to_string()));
                }
                Some(code.to_ascii_uppercase())
            }
            _ => None,
        };

        let maximum_fraction_digits = minimum_fraction_digits
            .max(options.style.default_maximum_fraction_digits());

        let grouping = match options.use_grouping {
            Some(true) => Grouping::Always,
            Some(false) => Grouping::Off,
            None => Grouping::Auto,
        };

        let resolved_locale = resolve_locale(&tag);

        let resolved = ResolvedOptions {
            locale: resolved_locale.id,
            style: options.style,
            currency,
            minimum_fraction_digits,
            maximum_fraction_digits,
            grouping,
        };
        tracing::debug!(requested = %tag, options = ?resolved, "Created number formatter");

        Ok(Self {
            settings: resolved_locale.settings,
            resolved,
        })
    }

    /// The options as this formatter applies them
    pub fn resolved_options(&self) -> &ResolvedOptions {
        &self.resolved
    }

    /// Format a number
    ///
    /// NaN renders as the locale's NaN symbol and infinities as its infinity
    /// symbol, both inside the style's affixes. Negative values, including
    /// negative zero, carry the minus sign.
    pub fn format(&self, value: f64) -> String {
        let (number, negative) = if value.is_nan() {
            (self.settings.nan.clone(), false)
        } else if value.is_infinite() {
            (self.settings.infinity.clone(), value < 0.0)
        } else {
            (self.format_digits(value), value.is_sign_negative())
        };

        self.apply_pattern(&number, negative)
    }

    /// Rounded, grouped and localized digits of `|value|`
    fn format_digits(&self, value: f64) -> String {
        let mut digits = DecimalDigits::from_f64(value);
        if self.resolved.style == DisplayStyle::Percent {
            digits.scale_pow10(2);
        }
        digits.round(self.resolved.maximum_fraction_digits as usize);
        digits.set_minimum_fraction(self.resolved.minimum_fraction_digits as usize);

        let mut result = group_integer(digits.integer(), self.resolved.grouping, &self.settings);
        if !digits.fraction().is_empty() {
            result.push(self.settings.decimal_point);
            result.push_str(digits.fraction());
        }

        self.localize_digits(&result)
    }

    fn localize_digits(&self, ascii: &str) -> String {
        ascii
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => self.settings.digits[d as usize],
                None => c,
            })
            .collect()
    }

    fn pattern(&self) -> &AffixPattern {
        match self.resolved.style {
            DisplayStyle::Decimal => &self.settings.decimal_pattern,
            DisplayStyle::Percent => &self.settings.percent_pattern,
            DisplayStyle::Currency => &self.settings.currency_pattern,
        }
    }

    fn currency_symbol(&self) -> &str {
        match &self.resolved.currency {
            Some(code) => self.settings.currency_symbol(code),
            None => "",
        }
    }

    fn render_affix(&self, tokens: &[AffixToken], negative: bool) -> String {
        let mut out = String::new();
        for token in tokens {
            match token {
                AffixToken::Sign if negative => out.push(self.settings.minus_sign),
                AffixToken::Sign => {}
                AffixToken::CurrencySymbol => out.push_str(self.currency_symbol()),
                AffixToken::PercentSign => out.push_str(&self.settings.percent_sign),
                AffixToken::Literal(text) => out.push_str(text),
            }
        }
        out
    }

    /// Wrap the digits in the style's prefix and suffix
    fn apply_pattern(&self, number: &str, negative: bool) -> String {
        let pattern = self.pattern().for_sign(negative);
        let mut prefix = self.render_affix(&pattern.prefix, negative);
        let mut suffix = self.render_affix(&pattern.suffix, negative);

        // A symbol made of letters is kept apart from the digits
        if needs_currency_spacing(pattern.prefix.last(), number.chars().next(), || {
            self.currency_symbol().chars().last()
        }) {
            prefix.push('\u{a0}');
        }
        if needs_currency_spacing(pattern.suffix.first(), number.chars().last(), || {
            self.currency_symbol().chars().next()
        }) {
            suffix.insert(0, '\u{a0}');
        }

        if negative && !pattern.has_sign() && self.pattern().negative.is_none() {
            prefix.push(self.settings.minus_sign);
        }

        let mut result = String::with_capacity(prefix.len() + number.len() + suffix.len());
        result.push_str(&prefix);
        result.push_str(number);
        result.push_str(&suffix);
        result
    }
}

fn needs_currency_spacing(
    adjacent_token: Option<&AffixToken>,
    adjacent_number_char: Option<char>,
    symbol_edge: impl FnOnce() -> Option<char>,
) -> bool {
    matches!(adjacent_token, Some(AffixToken::CurrencySymbol))
        && adjacent_number_char.is_some_and(|c| c.is_numeric())
        && symbol_edge().is_some_and(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_affix_pattern;

    fn decimal() -> FormatOptions {
        FormatOptions::new(DisplayStyle::Decimal)
    }

    fn usd() -> FormatOptions {
        FormatOptions::new(DisplayStyle::Currency).with_currency("usd")
    }

    #[test]
    fn test_decimal_default_fraction_digits() {
        let formatter = NumberFormatter::new("en-US", &decimal()).unwrap();
        assert_eq!(formatter.format(1234.5), "1,234.5");
        assert_eq!(formatter.format(3.14159), "3.142");
        assert_eq!(formatter.format(0.0005), "0.001");
        assert_eq!(formatter.format(0.0004), "0");
    }

    #[test]
    fn test_currency_fraction_digits() {
        let formatter = NumberFormatter::new("en-US", &usd()).unwrap();
        assert_eq!(formatter.format(42.0), "$42");
        assert_eq!(formatter.format(42.126), "$42.13");
        assert_eq!(formatter.format(-0.5), "-$0.5");

        let formatter =
            NumberFormatter::new("en-US", &usd().with_minimum_fraction_digits(2)).unwrap();
        assert_eq!(formatter.format(42.0), "$42.00");
    }

    #[test]
    fn test_negative_zero_keeps_sign() {
        let formatter = NumberFormatter::new("en-US", &decimal()).unwrap();
        assert_eq!(formatter.format(-0.0), "-0");
        assert_eq!(formatter.format(-0.0001), "-0");
        assert_eq!(formatter.format(0.0), "0");
    }

    #[test]
    fn test_non_finite_values() {
        let formatter = NumberFormatter::new("en-US", &usd()).unwrap();
        assert_eq!(formatter.format(f64::INFINITY), "$∞");
        assert_eq!(formatter.format(f64::NEG_INFINITY), "-$∞");
        assert_eq!(formatter.format(f64::NAN), "$NaN");
    }

    #[test]
    fn test_currency_spacing_for_letter_symbols() {
        let options = FormatOptions::new(DisplayStyle::Currency).with_currency("CHF");
        let formatter = NumberFormatter::new("en-US", &options).unwrap();
        assert_eq!(formatter.format(1.5), "CHF\u{a0}1.5");

        let formatter = NumberFormatter::new("en-AU", &usd()).unwrap();
        assert_eq!(formatter.format(-3.0), "-USD\u{a0}3");
    }

    #[test]
    fn test_custom_settings() {
        let mut formatter = NumberFormatter::new("en-US", &usd()).unwrap();
        formatter.settings = LocaleSettings::default()
            .with_decimal_point(',')
            .with_thousands_separator('.')
            .with_currency_symbol("USD", "Dollar");
        assert_eq!(formatter.format(1234.5), "Dollar\u{a0}1.234,5");
        assert_eq!(formatter.format(-0.25), "-Dollar\u{a0}0,25");

        // A negative subpattern without a sign position replaces the minus sign
        let accounting = parse_affix_pattern("#\u{a0}¤;(#\u{a0}¤)").unwrap();
        formatter.settings.currency_pattern = accounting;
        assert_eq!(formatter.format(12.0), "12\u{a0}Dollar");
        assert_eq!(formatter.format(-12.0), "(12\u{a0}Dollar)");
    }

    #[test]
    fn test_resolved_options() {
        let formatter = NumberFormatter::new("de-at", &usd()).unwrap();
        let resolved = formatter.resolved_options();
        assert_eq!(resolved.locale, "de");
        assert_eq!(resolved.currency.as_deref(), Some("USD"));
        assert_eq!(resolved.minimum_fraction_digits, 0);
        assert_eq!(resolved.maximum_fraction_digits, 2);
        assert_eq!(resolved.grouping, Grouping::Auto);

        let options = FormatOptions::new(DisplayStyle::Percent).with_minimum_fraction_digits(4);
        let formatter = NumberFormatter::new("en", &options).unwrap();
        assert_eq!(formatter.resolved_options().maximum_fraction_digits, 4);
    }

    #[test]
    fn test_option_errors() {
        assert!(matches!(
            NumberFormatter::new("en-US", &FormatOptions::new(DisplayStyle::Currency)),
            Err(LocaleError::MissingCurrency)
        ));
        assert!(matches!(
            NumberFormatter::new(
                "en-US",
                &FormatOptions::new(DisplayStyle::Currency).with_currency("US$")
            ),
            Err(LocaleError::InvalidCurrency(_))
        ));
        assert!(matches!(
            NumberFormatter::new("en-US", &decimal().with_minimum_fraction_digits(101)),
            Err(LocaleError::FractionDigitsOutOfRange(101))
        ));
        assert!(matches!(
            NumberFormatter::new("en_US!", &decimal()),
            Err(LocaleError::InvalidTag { .. })
        ));
    }

    #[test]
    fn test_provider_delegates_to_formatter() {
        let provider = BuiltinProvider;
        assert_eq!(
            provider.format("en-US", &decimal().with_grouping(false), 1234567.0),
            Ok("1234567".to_string())
        );
        assert!(provider.format("", &decimal(), 1.0).is_err());
    }
}
