use crate::types::{Grouping, LocaleSettings};

/// Whether an integer part of `len` digits gets separators
fn should_group(len: usize, grouping: Grouping, locale: &LocaleSettings) -> bool {
    match grouping {
        Grouping::Off => false,
        Grouping::Always => len > locale.primary_grouping,
        Grouping::Auto => len >= locale.primary_grouping + locale.minimum_grouping_digits,
    }
}

/// Insert the locale's grouping separator into an integer digit string
///
/// The group nearest the decimal separator has `primary_grouping` digits, every
/// group further left has `secondary_grouping` digits.
pub(crate) fn group_integer(integer: &str, grouping: Grouping, locale: &LocaleSettings) -> String {
    let len = integer.len();
    if !should_group(len, grouping, locale) {
        return integer.to_string();
    }

    let mut boundaries = Vec::new();
    let mut end = len - locale.primary_grouping;
    boundaries.push(end);
    while end > locale.secondary_grouping {
        end -= locale.secondary_grouping;
        boundaries.push(end);
    }

    let mut result = String::with_capacity(len + boundaries.len() * 3);
    let mut start = 0;
    for &boundary in boundaries.iter().rev() {
        result.push_str(&integer[start..boundary]);
        result.push(locale.thousands_separator);
        start = boundary;
    }
    result.push_str(&integer[start..]);
    result
}
