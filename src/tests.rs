use crate::*;

#[test]
fn test_currency_us() {
    assert_eq!(
        format_intl_number(1234.5, "currency-us", 2, "en-us").unwrap(),
        "$1,234.50"
    );
    // Zero minimum fraction digits, not the two a currency usually shows
    assert_eq!(
        format_intl_number(42.0, "currency-us", 0, DEFAULT_LOCALE).unwrap(),
        "$42"
    );
}

#[test]
fn test_percent() {
    assert_eq!(format_intl_number(0.5, "percent", 0, "en-us").unwrap(), "50%");
    assert_eq!(format_intl_number(0.07, "percent", 0, "en-us").unwrap(), "7%");
    assert_eq!(format_intl_number(0.1234, "percent", 1, "en-us").unwrap(), "12.3%");
    assert_eq!(format_intl_number(12.5, "percent", 0, "en-us").unwrap(), "1,250%");
}

#[test]
fn test_number_grouped() {
    assert_eq!(
        format_intl_number(1234567.0, "number-grouped", 0, "en-us").unwrap(),
        "1,234,567"
    );
    assert_eq!(
        format_intl_number(-9876.54321, "number-grouped", 0, "en-us").unwrap(),
        "-9,876.543"
    );
}

#[test]
fn test_number_ungrouped() {
    assert_eq!(
        format_intl_number(1234567.0, "number-ungrouped", 0, "en-us").unwrap(),
        "1234567"
    );
    assert_eq!(
        format_intl_number(1234567.0, "number-ungrouped", 2, "en-us").unwrap(),
        "1234567.00"
    );
}

#[test]
fn test_nan_is_value_error() {
    let err = format_intl_number(f64::NAN, "number-grouped", 0, DEFAULT_LOCALE).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    assert_eq!(err, FormatError::Value);
}

#[test]
fn test_unknown_style_is_style_error() {
    for style in ["bogus-style", "", "Percent", "currency", " percent"] {
        let err = format_intl_number(42.0, style, 0, DEFAULT_LOCALE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Style, "style '{style}'");
        assert_eq!(err, FormatError::Style(style.to_string()));
    }
}

#[test]
fn test_invalid_locale_is_locale_error() {
    for locale in ["", "not a locale", "en-", "e"] {
        let err = format_intl_number(42.0, "percent", 0, locale).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Locale, "locale '{locale}'");
    }

    let err = format_intl_number(42.0, "percent", 101, "en-us").unwrap_err();
    assert_eq!(
        err,
        FormatError::Locale(LocaleError::FractionDigitsOutOfRange(101))
    );
}

#[test]
fn test_output_characters_per_style() {
    let values = [0.0, 1.0, 0.25, 42.0, 1234.5, 98765.4321, 1e9];
    for style in NumberStyle::ALL {
        let allowed = |c: char| {
            c.is_ascii_digit()
                || c == '.'
                || c == ','
                || match style {
                    NumberStyle::CurrencyUs => c == '$',
                    NumberStyle::Percent => c == '%',
                    _ => false,
                }
        };
        for value in values {
            let out = format_number(value, style, 0, DEFAULT_LOCALE).unwrap();
            assert!(!out.is_empty());
            assert!(
                out.chars().all(allowed),
                "{style} rendered {value} as '{out}'"
            );
            if style == NumberStyle::NumberUngrouped {
                assert!(!out.contains(','));
            }
        }
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    for style in NumberStyle::ALL {
        let first = format_number(1234.5678, style, 1, "de-DE").unwrap();
        let second = format_number(1234.5678, style, 1, "de-DE").unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_style_tag_round_trip() {
    for style in NumberStyle::ALL {
        assert_eq!(style.as_str().parse::<NumberStyle>().unwrap(), style);
        assert_eq!(style.to_string(), style.as_str());
    }
}

#[test]
fn test_style_options() {
    let options = NumberStyle::CurrencyUs.options(2);
    assert_eq!(options.style, DisplayStyle::Currency);
    assert_eq!(options.currency.as_deref(), Some("USD"));
    assert_eq!(options.minimum_fraction_digits, 2);
    assert_eq!(options.use_grouping, None);

    assert_eq!(NumberStyle::Percent.options(0).style, DisplayStyle::Percent);
    assert_eq!(NumberStyle::NumberGrouped.options(0).use_grouping, Some(true));
    assert_eq!(NumberStyle::NumberUngrouped.options(0).use_grouping, Some(false));
    assert_eq!(NumberStyle::NumberUngrouped.options(5).currency, None);
}

#[test]
fn test_request_builder() {
    let out = FormatRequest::new(1234.5, NumberStyle::CurrencyUs)
        .min_fraction_digits(2)
        .format()
        .unwrap();
    assert_eq!(out, "$1,234.50");

    let out = FormatRequest::new(1234.5, NumberStyle::NumberGrouped)
        .locale("fr-FR")
        .format()
        .unwrap();
    assert_eq!(out, "1\u{202f}234,5");
}
