use winnow::combinator::{alt, delimited, repeat};
use winnow::token::{any, literal, take_till};
use winnow::{ModalResult, Parser};

use crate::types::{AffixPattern, AffixToken};

#[derive(Debug, Clone, PartialEq)]
enum PatternPart {
    Number,
    /// Start of the negative subpattern
    Separator,
    Affix(AffixToken),
}

fn parse_quoted_literal(input: &mut &str) -> ModalResult<PatternPart> {
    delimited(literal("'"), take_till(0.., '\''), literal("'"))
        .map(|s: &str| PatternPart::Affix(AffixToken::Literal(s.to_string())))
        .parse_next(input)
}

fn parse_pattern_part(input: &mut &str) -> ModalResult<PatternPart> {
    alt((
        literal("#").value(PatternPart::Number),
        literal(";").value(PatternPart::Separator),
        literal("-").value(PatternPart::Affix(AffixToken::Sign)),
        literal("¤").value(PatternPart::Affix(AffixToken::CurrencySymbol)),
        literal("%").value(PatternPart::Affix(AffixToken::PercentSign)),
        parse_quoted_literal,
        any.map(|c: char| PatternPart::Affix(AffixToken::Literal(c.to_string()))),
    ))
    .parse_next(input)
}

/// Push a token, merging consecutive literals
fn push_token(tokens: &mut Vec<AffixToken>, token: AffixToken) {
    if let AffixToken::Literal(text) = &token {
        if let Some(AffixToken::Literal(last)) = tokens.last_mut() {
            last.push_str(text);
            return;
        }
    }
    tokens.push(token);
}

/// Build one subpattern from its parts
fn build_pattern(parts: &[PatternPart], input_str: &str) -> Result<AffixPattern, String> {
    let mut pattern = AffixPattern::default();
    let mut seen_number = false;
    for part in parts {
        match part {
            PatternPart::Number if seen_number => {
                return Err(format!(
                    "Pattern '{input_str}' contains more than one number placeholder"
                ));
            }
            PatternPart::Number => seen_number = true,
            PatternPart::Separator => {
                return Err(format!("Pattern '{input_str}' has more than one ';'"));
            }
            PatternPart::Affix(token) if seen_number => {
                push_token(&mut pattern.suffix, token.clone())
            }
            PatternPart::Affix(token) => push_token(&mut pattern.prefix, token.clone()),
        }
    }

    if !seen_number {
        return Err(format!(
            "Pattern '{input_str}' is missing the number placeholder '#'"
        ));
    }

    Ok(pattern)
}

/// Parse an affix pattern from locale data
///
/// `#` marks where the digits go and must appear exactly once. `-` is the sign
/// position, `¤` the currency symbol and `%` the percent sign; text in single
/// quotes and any other character is copied literally. An optional second
/// subpattern after `;` is used for negative values.
///
/// # Examples
/// ```
/// use intl_number_format::parser::parse_affix_pattern;
/// use intl_number_format::types::AffixToken;
///
/// let pattern = parse_affix_pattern("-#\u{a0}%").unwrap();
/// assert_eq!(pattern.prefix, vec![AffixToken::Sign]);
/// ```
pub fn parse_affix_pattern(input_str: &str) -> Result<AffixPattern, String> {
    let mut input = input_str;

    let parts: Vec<PatternPart> = repeat(0.., parse_pattern_part)
        .parse_next(&mut input)
        .map_err(|e| format!("Parse error: {e:?} at remaining input '{input}'"))?;

    match parts.iter().position(|p| *p == PatternPart::Separator) {
        Some(index) => {
            let positive = build_pattern(&parts[..index], input_str)?;
            let negative = build_pattern(&parts[index + 1..], input_str)?;
            Ok(positive.with_negative(negative))
        }
        None => build_pattern(&parts, input_str),
    }
}
