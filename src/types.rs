//! Type definitions for preset number formatting
//!
//! This module defines the presets callers pick from, the options record handed
//! to the formatting facility, and the locale data the facility renders with.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// One of the fixed formatting presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberStyle {
    /// US dollar currency (`currency-us`)
    CurrencyUs,
    /// Percentage, the value 1.0 renders as 100% (`percent`)
    Percent,
    /// Decimal with grouping separators (`number-grouped`)
    NumberGrouped,
    /// Decimal without grouping separators (`number-ungrouped`)
    NumberUngrouped,
}

impl NumberStyle {
    /// Every preset, in the order they are documented
    pub const ALL: [NumberStyle; 4] = [
        NumberStyle::CurrencyUs,
        NumberStyle::Percent,
        NumberStyle::NumberGrouped,
        NumberStyle::NumberUngrouped,
    ];

    /// The style tag callers use on the string-keyed surface
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberStyle::CurrencyUs => "currency-us",
            NumberStyle::Percent => "percent",
            NumberStyle::NumberGrouped => "number-grouped",
            NumberStyle::NumberUngrouped => "number-ungrouped",
        }
    }

    /// Build the options record this preset stands for
    pub fn options(&self, min_fraction_digits: u32) -> FormatOptions {
        match self {
            NumberStyle::CurrencyUs => FormatOptions {
                style: DisplayStyle::Currency,
                currency: Some("USD".to_string()),
                minimum_fraction_digits: min_fraction_digits,
                use_grouping: None,
            },
            NumberStyle::Percent => FormatOptions {
                style: DisplayStyle::Percent,
                currency: None,
                minimum_fraction_digits: min_fraction_digits,
                use_grouping: None,
            },
            NumberStyle::NumberGrouped => FormatOptions {
                style: DisplayStyle::Decimal,
                currency: None,
                minimum_fraction_digits: min_fraction_digits,
                use_grouping: Some(true),
            },
            NumberStyle::NumberUngrouped => FormatOptions {
                style: DisplayStyle::Decimal,
                currency: None,
                minimum_fraction_digits: min_fraction_digits,
                use_grouping: Some(false),
            },
        }
    }
}

impl fmt::Display for NumberStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberStyle {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumberStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| FormatError::Style(s.to_string()))
    }
}

/// The display kind understood by the formatting facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayStyle {
    /// Plain decimal number
    Decimal,
    /// Value multiplied by 100 with a percent sign
    Percent,
    /// Monetary amount with a currency symbol
    Currency,
}

impl DisplayStyle {
    /// Default upper bound on fraction digits for this display kind
    pub fn default_maximum_fraction_digits(&self) -> u32 {
        match self {
            DisplayStyle::Decimal => 3,
            DisplayStyle::Percent => 0,
            // Minor units of the currencies we carry symbols for
            DisplayStyle::Currency => 2,
        }
    }
}

/// Grouping strategy after options have been resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grouping {
    /// Group according to the locale's minimum grouping digits
    Auto,
    /// Group whenever the integer part is longer than one group
    Always,
    /// Never insert grouping separators
    Off,
}

/// Options record accepted by the formatting facility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Display kind
    pub style: DisplayStyle,
    /// ISO 4217 currency code, required for currency display
    pub currency: Option<String>,
    /// Minimum number of fraction digits shown
    pub minimum_fraction_digits: u32,
    /// Explicit grouping flag; `None` leaves it to the locale
    pub use_grouping: Option<bool>,
}

impl FormatOptions {
    /// Options for the given display kind with everything else defaulted
    pub fn new(style: DisplayStyle) -> Self {
        Self {
            style,
            currency: None,
            minimum_fraction_digits: 0,
            use_grouping: None,
        }
    }

    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency = Some(code.into());
        self
    }

    pub fn with_minimum_fraction_digits(mut self, digits: u32) -> Self {
        self.minimum_fraction_digits = digits;
        self
    }

    pub fn with_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = Some(use_grouping);
        self
    }
}

/// Options as the formatter actually applies them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Identifier of the locale data that was selected
    pub locale: String,
    /// Display kind
    pub style: DisplayStyle,
    /// Upper-cased currency code for currency display
    pub currency: Option<String>,
    /// Minimum number of fraction digits shown
    pub minimum_fraction_digits: u32,
    /// Maximum number of fraction digits shown; the value is rounded to it
    pub maximum_fraction_digits: u32,
    /// Grouping strategy
    pub grouping: Grouping,
}

/// A single preset formatting call
#[derive(Debug, Clone, PartialEq)]
pub struct FormatRequest {
    /// The number to format
    pub value: f64,
    /// The preset to apply
    pub style: NumberStyle,
    /// Minimum number of fraction digits
    pub min_fraction_digits: u32,
    /// Locale tag, e.g. "en-us"
    pub locale: String,
}

impl FormatRequest {
    /// A request with zero minimum fraction digits and the default locale
    pub fn new(value: f64, style: NumberStyle) -> Self {
        Self {
            value,
            style,
            min_fraction_digits: 0,
            locale: crate::preset::DEFAULT_LOCALE.to_string(),
        }
    }

    pub fn min_fraction_digits(mut self, digits: u32) -> Self {
        self.min_fraction_digits = digits;
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

/// A parsed BCP 47 language tag in canonical case
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageTag {
    /// Lower-case language subtag
    pub language: String,
    /// Title-case script subtag
    pub script: Option<String>,
    /// Upper-case region subtag
    pub region: Option<String>,
    /// Lower-case variant subtags
    pub variants: Vec<String>,
    /// Extension sequences such as "u-nu-latn", lower-case
    pub extensions: Vec<String>,
    /// Private use sequence such as "x-custom", lower-case
    pub private_use: Option<String>,
}

impl LanguageTag {
    /// Locale data identifiers to try, most specific first
    pub fn lookup_candidates(&self) -> Vec<String> {
        let mut candidates = Vec::with_capacity(4);
        match (&self.script, &self.region) {
            (Some(script), Some(region)) => {
                candidates.push(format!("{}-{}-{}", self.language, script, region));
                candidates.push(format!("{}-{}", self.language, region));
                candidates.push(format!("{}-{}", self.language, script));
            }
            (Some(script), None) => candidates.push(format!("{}-{}", self.language, script)),
            (None, Some(region)) => candidates.push(format!("{}-{}", self.language, region)),
            (None, None) => {}
        }
        candidates.push(self.language.clone());
        candidates
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        for variant in &self.variants {
            write!(f, "-{variant}")?;
        }
        for extension in &self.extensions {
            write!(f, "-{extension}")?;
        }
        if let Some(private_use) = &self.private_use {
            write!(f, "-{private_use}")?;
        }
        Ok(())
    }
}

/// A piece of the text around the number in a locale pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffixToken {
    /// Minus sign position, empty for non-negative values
    Sign,
    /// Currency symbol (¤)
    CurrencySymbol,
    /// Percent sign (%)
    PercentSign,
    /// Text copied to the output as is
    Literal(String),
}

/// Prefix and suffix around the formatted digits
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AffixPattern {
    /// Tokens before the number
    pub prefix: Vec<AffixToken>,
    /// Tokens after the number
    pub suffix: Vec<AffixToken>,
    /// Separate pattern for negative values, if the locale has one
    pub negative: Option<Box<AffixPattern>>,
}

impl AffixPattern {
    pub fn new(prefix: Vec<AffixToken>, suffix: Vec<AffixToken>) -> Self {
        Self {
            prefix,
            suffix,
            negative: None,
        }
    }

    pub fn with_negative(mut self, negative: AffixPattern) -> Self {
        self.negative = Some(Box::new(negative));
        self
    }

    /// Pattern to use for a value of the given sign
    pub fn for_sign(&self, negative: bool) -> &AffixPattern {
        match &self.negative {
            Some(pattern) if negative => pattern,
            _ => self,
        }
    }

    /// Whether the pattern places the minus sign itself
    pub fn has_sign(&self) -> bool {
        self.prefix
            .iter()
            .chain(self.suffix.iter())
            .any(|t| matches!(t, AffixToken::Sign))
    }
}

/// Locale-specific settings for number formatting
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSettings {
    /// Decimal separator
    pub decimal_point: char,
    /// Grouping separator
    pub thousands_separator: char,
    /// Minus sign
    pub minus_sign: char,
    /// Percent sign
    pub percent_sign: String,
    /// Rendering of infinite values
    pub infinity: String,
    /// Rendering of NaN
    pub nan: String,
    /// Digits zero through nine of the numbering system
    pub digits: [char; 10],
    /// Size of the group nearest the decimal separator
    pub primary_grouping: usize,
    /// Size of every further group
    pub secondary_grouping: usize,
    /// Digits required before the first separator when grouping is automatic
    pub minimum_grouping_digits: usize,
    /// Pattern for decimal display
    pub decimal_pattern: AffixPattern,
    /// Pattern for percent display
    pub percent_pattern: AffixPattern,
    /// Pattern for currency display
    pub currency_pattern: AffixPattern,
    /// Display symbols keyed by ISO 4217 code
    pub currency_symbols: BTreeMap<String, String>,
}

impl Default for LocaleSettings {
    /// Settings equivalent to en-US
    fn default() -> Self {
        let mut currency_symbols = BTreeMap::new();
        currency_symbols.insert("USD".to_string(), "$".to_string());

        Self {
            decimal_point: '.',
            thousands_separator: ',',
            minus_sign: '-',
            percent_sign: "%".to_string(),
            infinity: "∞".to_string(),
            nan: "NaN".to_string(),
            digits: ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
            primary_grouping: 3,
            secondary_grouping: 3,
            minimum_grouping_digits: 1,
            decimal_pattern: AffixPattern::new(vec![AffixToken::Sign], vec![]),
            percent_pattern: AffixPattern::new(
                vec![AffixToken::Sign],
                vec![AffixToken::PercentSign],
            ),
            currency_pattern: AffixPattern::new(
                vec![AffixToken::Sign, AffixToken::CurrencySymbol],
                vec![],
            ),
            currency_symbols,
        }
    }
}

impl LocaleSettings {
    pub fn with_decimal_point(mut self, c: char) -> Self {
        self.decimal_point = c;
        self
    }

    pub fn with_thousands_separator(mut self, c: char) -> Self {
        self.thousands_separator = c;
        self
    }

    pub fn with_currency_symbol(mut self, code: &str, symbol: impl Into<String>) -> Self {
        self.currency_symbols.insert(code.to_string(), symbol.into());
        self
    }

    pub fn with_grouping(mut self, primary: usize, secondary: usize) -> Self {
        self.primary_grouping = primary;
        self.secondary_grouping = secondary;
        self
    }

    /// Display symbol for a currency code, the code itself when unknown
    pub fn currency_symbol<'a>(&'a self, code: &'a str) -> &'a str {
        self.currency_symbols
            .get(code)
            .map(String::as_str)
            .unwrap_or(code)
    }
}
