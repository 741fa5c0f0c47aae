use winnow::combinator::{alt, eof, opt, peek, preceded, repeat, terminated};
use winnow::token::{one_of, take_while};
use winnow::{ModalResult, Parser};

use crate::types::LanguageTag;

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Subtag separator
fn separator(input: &mut &str) -> ModalResult<char> {
    one_of('-').parse_next(input)
}

/// Succeeds without consuming when the current subtag ends here
fn boundary(input: &mut &str) -> ModalResult<()> {
    peek(alt((eof.void(), separator.void()))).parse_next(input)
}

fn language<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    terminated(
        alt((take_while(5..=8, is_alpha), take_while(2..=3, is_alpha))),
        boundary,
    )
    .parse_next(input)
}

fn script<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded(separator, terminated(take_while(4..=4, is_alpha), boundary)).parse_next(input)
}

fn region<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded(
        separator,
        terminated(
            alt((take_while(2..=2, is_alpha), take_while(3..=3, is_digit))),
            boundary,
        ),
    )
    .parse_next(input)
}

fn variant<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded(
        separator,
        terminated(
            alt((
                take_while(5..=8, is_alphanumeric),
                (one_of(is_digit), take_while(3..=3, is_alphanumeric)).take(),
            )),
            boundary,
        ),
    )
    .parse_next(input)
}

fn extension_subtags(input: &mut &str) -> ModalResult<()> {
    repeat(
        1..,
        preceded(separator, terminated(take_while(2..=8, is_alphanumeric), boundary)),
    )
    .parse_next(input)
}

/// Extension sequence without its leading separator, e.g. "u-nu-latn"
fn extension<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    let singleton = one_of(|c: char| c.is_ascii_alphanumeric() && !c.eq_ignore_ascii_case(&'x'));
    preceded(
        separator,
        (terminated(singleton, boundary), extension_subtags).take(),
    )
    .parse_next(input)
}

fn private_use_subtags(input: &mut &str) -> ModalResult<()> {
    repeat(
        1..,
        preceded(separator, terminated(take_while(1..=8, is_alphanumeric), boundary)),
    )
    .parse_next(input)
}

/// Private use sequence without its leading separator, e.g. "x-custom"
fn private_use<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded(
        separator,
        (terminated(one_of(['x', 'X']), boundary), private_use_subtags).take(),
    )
    .parse_next(input)
}

fn language_tag(input: &mut &str) -> ModalResult<LanguageTag> {
    let (language, script, region, variants, extensions, private_use): (
        &str,
        Option<&str>,
        Option<&str>,
        Vec<&str>,
        Vec<&str>,
        Option<&str>,
    ) = (
        language,
        opt(script),
        opt(region),
        repeat(0.., variant),
        repeat(0.., extension),
        opt(private_use),
    )
        .parse_next(input)?;

    Ok(LanguageTag {
        language: language.to_ascii_lowercase(),
        script: script.map(title_case),
        region: region.map(str::to_ascii_uppercase),
        variants: variants.into_iter().map(str::to_ascii_lowercase).collect(),
        extensions: extensions.into_iter().map(str::to_ascii_lowercase).collect(),
        private_use: private_use.map(str::to_ascii_lowercase),
    })
}

fn title_case(subtag: &str) -> String {
    let lower = subtag.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Parse a BCP 47 language tag
///
/// Subtags are separated by `-` and matched case-insensitively.
/// The result is in canonical case: lower-case language, title-case script,
/// upper-case region.
///
/// # Arguments
/// * `input_str` - The language tag to parse
///
/// # Returns
/// * `Result<LanguageTag, String>` - The parsed tag, or an error message
///
/// # Examples
/// ```
/// use intl_number_format::parser::parse_language_tag;
///
/// let tag = parse_language_tag("en-us").unwrap();
/// assert_eq!(tag.to_string(), "en-US");
/// ```
pub fn parse_language_tag(input_str: &str) -> Result<LanguageTag, String> {
    let mut input = input_str;

    let tag = language_tag
        .parse_next(&mut input)
        .map_err(|e| format!("Parse error: {e:?} at remaining input '{input}'"))?;

    if !input.is_empty() {
        return Err(format!(
            "Invalid subtag or trailing characters in language tag: '{input}'"
        ));
    }

    Ok(tag)
}
