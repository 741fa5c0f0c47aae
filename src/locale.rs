//! Locale support for number formatting
//!
//! This module loads the embedded locale data and resolves language tags to
//! the settings the formatter renders with.

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;

use crate::parser::parse_affix_pattern;
use crate::types::{AffixPattern, LanguageTag, LocaleSettings};

/// Locale used when no locale data matches a tag
pub const FALLBACK_LOCALE: &str = "en-US";

/// Upper bound accepted for minimum fraction digits
pub const MAX_FRACTION_DIGITS: u32 = 100;

/// Error type for locale and option resolution
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocaleError {
    /// The locale is not a well-formed language tag
    #[error("Incorrect locale information provided: '{tag}' ({reason})")]
    InvalidTag { tag: String, reason: String },
    /// Minimum fraction digits above [`MAX_FRACTION_DIGITS`]
    #[error(
        "minimumFractionDigits value is out of range: {0} (expected 0 to {max})",
        max = MAX_FRACTION_DIGITS
    )]
    FractionDigitsOutOfRange(u32),
    /// Currency display without a currency code
    #[error("Currency code is required with currency style.")]
    MissingCurrency,
    /// The currency code is not three letters
    #[error("Invalid currency code: '{0}'")]
    InvalidCurrency(String),
    /// An error occurred while parsing locale data
    #[error("Error parsing locale data: {0}")]
    ParseError(String),
}

type Result<T> = std::result::Result<T, LocaleError>;

/// Locale data selected for a language tag
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocale {
    /// Identifier of the matched locale data, e.g. "de" for "de-AT"
    pub id: String,
    /// Settings of the matched locale
    pub settings: LocaleSettings,
}

/// Represents a locale manager that provides access to locale-specific settings
pub struct LocaleManager {
    locale_settings: HashMap<String, LocaleSettings>,
}

// Global singleton for locale settings
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    /// Create a new locale manager with the embedded locale data
    fn new() -> Self {
        let mut manager = Self {
            locale_settings: HashMap::new(),
        };

        if let Err(e) = manager.load_embedded_data() {
            tracing::error!(error = %e, "Failed to load embedded locale data");
            manager.locale_settings.clear();
        }

        manager
    }

    fn load_embedded_data(&mut self) -> Result<()> {
        let locale_settings_toml = include_str!("locale/locale_settings.toml");
        self.parse_locale_settings(locale_settings_toml)
    }

    /// Parse the locale settings TOML data
    fn parse_locale_settings(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        let mut base_settings = LocaleSettings::default();
        if let Some(base) = table.get("base") {
            apply_locale_settings(&mut base_settings, base)?;
        }

        // Language tables first so regional tables can inherit from them
        let (languages, regional): (Vec<_>, Vec<_>) = table
            .iter()
            .filter(|(locale_id, _)| locale_id.as_str() != "base")
            .partition(|(locale_id, _)| !locale_id.contains('-'));

        for (locale_id, value) in languages.into_iter().chain(regional) {
            let parent = locale_id
                .split_once('-')
                .and_then(|(language, _)| self.locale_settings.get(language));
            let mut settings = parent.unwrap_or(&base_settings).clone();

            apply_locale_settings(&mut settings, value)?;
            tracing::trace!(locale = %locale_id, "Loaded locale settings");

            self.locale_settings.insert(locale_id.to_string(), settings);
        }

        Ok(())
    }

    /// Get the global locale manager instance
    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }

    fn get_locale_settings(&self, locale_id: &str) -> Option<&LocaleSettings> {
        self.locale_settings.get(locale_id)
    }
}

fn get_str<'a>(table: &'a toml::Table, key: &str) -> Option<&'a str> {
    table.get(key).and_then(|v| v.as_str())
}

fn get_char(table: &toml::Table, key: &str) -> Result<Option<char>> {
    match get_str(table, key) {
        Some(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Some(c)),
                _ => Err(LocaleError::ParseError(format!(
                    "{key} must be a single character, got '{s}'"
                ))),
            }
        }
        None => Ok(None),
    }
}

fn get_size(key: &str, value: &toml::Value) -> Result<usize> {
    value
        .as_integer()
        .and_then(|n| usize::try_from(n).ok())
        .filter(|n| *n > 0)
        .ok_or_else(|| LocaleError::ParseError(format!("{key} must be a positive integer")))
}

fn get_pattern(table: &toml::Table, key: &str) -> Result<Option<AffixPattern>> {
    get_str(table, key)
        .map(|s| parse_affix_pattern(s).map_err(LocaleError::ParseError))
        .transpose()
}

/// Apply the keys of one locale table over inherited settings
fn apply_locale_settings(settings: &mut LocaleSettings, value: &toml::Value) -> Result<()> {
    let table = value
        .as_table()
        .ok_or_else(|| LocaleError::ParseError("Locale setting is not a table".to_string()))?;

    if let Some(c) = get_char(table, "decimal")? {
        settings.decimal_point = c;
    }
    if let Some(c) = get_char(table, "group")? {
        settings.thousands_separator = c;
    }
    if let Some(c) = get_char(table, "minus")? {
        settings.minus_sign = c;
    }
    if let Some(s) = get_str(table, "percent_sign") {
        settings.percent_sign = s.to_string();
    }
    if let Some(s) = get_str(table, "infinity") {
        settings.infinity = s.to_string();
    }
    if let Some(s) = get_str(table, "nan") {
        settings.nan = s.to_string();
    }

    if let Some(digits) = get_str(table, "digits") {
        let chars: Vec<char> = digits.chars().collect();
        settings.digits = chars.try_into().map_err(|_| {
            LocaleError::ParseError(format!("digits must list exactly ten characters: '{digits}'"))
        })?;
    }

    if let Some(grouping) = table.get("grouping").and_then(|v| v.as_array()) {
        match grouping.as_slice() {
            [primary, secondary] => {
                settings.primary_grouping = get_size("grouping", primary)?;
                settings.secondary_grouping = get_size("grouping", secondary)?;
            }
            _ => {
                return Err(LocaleError::ParseError(
                    "grouping must be [primary, secondary]".to_string(),
                ));
            }
        }
    }
    if let Some(min_grouping) = table.get("min_grouping") {
        settings.minimum_grouping_digits = get_size("min_grouping", min_grouping)?;
    }

    if let Some(pattern) = get_pattern(table, "decimal_pattern")? {
        settings.decimal_pattern = pattern;
    }
    if let Some(pattern) = get_pattern(table, "percent_pattern")? {
        settings.percent_pattern = pattern;
    }
    if let Some(pattern) = get_pattern(table, "currency_pattern")? {
        settings.currency_pattern = pattern;
    }

    if let Some(currencies) = table.get("currencies").and_then(|v| v.as_table()) {
        for (code, symbol) in currencies {
            let symbol = symbol.as_str().ok_or_else(|| {
                LocaleError::ParseError(format!("Currency symbol for {code} is not a string"))
            })?;
            settings
                .currency_symbols
                .insert(code.to_string(), symbol.to_string());
        }
    }

    Ok(())
}

/// Get locale settings by locale data identifier (e.g., "en-US", "de")
pub fn get_locale_settings(locale_id: &str) -> Option<LocaleSettings> {
    LocaleManager::get().get_locale_settings(locale_id).cloned()
}

/// Select locale data for a parsed language tag
///
/// Candidates are tried from most to least specific; when none has data the
/// result is [`FALLBACK_LOCALE`].
pub fn resolve_locale(tag: &LanguageTag) -> ResolvedLocale {
    let manager = LocaleManager::get();

    for candidate in tag.lookup_candidates() {
        if let Some(settings) = manager.get_locale_settings(&candidate) {
            return ResolvedLocale {
                id: candidate,
                settings: settings.clone(),
            };
        }
    }

    tracing::debug!(
        requested = %tag,
        fallback = FALLBACK_LOCALE,
        "No locale data for tag, using fallback"
    );
    ResolvedLocale {
        id: FALLBACK_LOCALE.to_string(),
        settings: manager
            .get_locale_settings(FALLBACK_LOCALE)
            .cloned()
            .unwrap_or_default(),
    }
}

/// List all available locale identifiers, sorted
pub fn list_available_locales() -> Vec<String> {
    let mut locales: Vec<String> = LocaleManager::get()
        .locale_settings
        .keys()
        .cloned()
        .collect();
    locales.sort();
    locales
}
