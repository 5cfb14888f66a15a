use nom::{
    bytes::complete::take_while1,
    combinator::{map, opt},
    IResult,
};

use tracing::trace;

use crate::error::DescriptorError;
use crate::token::{Span, Tag, Token};

/// Punctuation that separates abbreviations, as in `v.tr. ipf./pf.`.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | '/' | ',' | ';' | '(' | ')' | '-')
}

fn separators(input: &str) -> IResult<&str, Option<&str>> {
    opt(take_while1(is_separator))(input)
}

fn word(input: &str) -> IResult<&str, (&str, Tag)> {
    map(take_while1(|c: char| c.is_ascii_alphabetic()), |w: &str| (w, Tag::from_word(w)))(input)
}

/// Splits a descriptor into tagged abbreviations.
///
/// Characters that are neither ASCII letters nor separators (`+2`, `#`, digits)
/// are skipped; the abbreviations around them are kept.
pub fn tokenize(original_input: &str) -> Result<Vec<Token<'_>>, DescriptorError> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        if let Ok((rest, _)) = separators(input) {
            input = rest;
        }
        let Some(ch) = input.chars().next() else {
            break;
        };

        let start = original_input.len() - input.len();
        match word(input) {
            Ok((rest, (text, tag))) => {
                let end = original_input.len() - rest.len();
                result.push(Token { span: Span::new(start, end), text, tag });
                input = rest;
            }
            Err(_) => {
                trace!(?ch, offset = start, "skipping stray descriptor character");
                input = &input[ch.len_utf8()..];
            }
        }
    }

    if result.is_empty() {
        return Err(DescriptorError::Empty);
    }
    Ok(result)
}
