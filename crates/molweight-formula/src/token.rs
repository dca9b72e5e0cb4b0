//! Formula tokenizer.
//!
//! Splits a formula into element candidates, digit runs and brackets, in
//! reading order. No validity checks happen here: `Xx` is a perfectly good
//! element *candidate*, and characters that fit no class are kept as
//! [`Token::Unrecognized`] so the resolver can reject them by name.

use std::fmt;

use nom::{
    branch::alt,
    character::complete::{anychar, digit1, multispace0, one_of, satisfy},
    combinator::{map, opt, recognize},
    multi::many0,
    sequence::{pair, preceded},
    IResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An uppercase letter, optionally followed by one lowercase letter.
    Element(String),
    Digits(String),
    /// `(` or `[`
    GroupOpen(char),
    /// `)` or `]`
    GroupClose(char),
    /// Anything else, including `{` and `}`.
    Unrecognized(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Element(text) | Token::Digits(text) | Token::Unrecognized(text) => {
                f.write_str(text)
            }
            Token::GroupOpen(c) | Token::GroupClose(c) => write!(f, "{c}"),
        }
    }
}

fn element(input: &str) -> IResult<&str, Token> {
    map(
        recognize(pair(
            satisfy(|c| c.is_ascii_uppercase()),
            opt(satisfy(|c| c.is_ascii_lowercase())),
        )),
        |text: &str| Token::Element(text.to_string()),
    )(input)
}

fn digits(input: &str) -> IResult<&str, Token> {
    map(digit1, |text: &str| Token::Digits(text.to_string()))(input)
}

fn group_open(input: &str) -> IResult<&str, Token> {
    map(one_of("(["), Token::GroupOpen)(input)
}

fn group_close(input: &str) -> IResult<&str, Token> {
    map(one_of(")]"), Token::GroupClose)(input)
}

fn unrecognized(input: &str) -> IResult<&str, Token> {
    map(anychar, |c| Token::Unrecognized(c.to_string()))(input)
}

fn token(input: &str) -> IResult<&str, Token> {
    preceded(
        multispace0,
        alt((element, digits, group_open, group_close, unrecognized)),
    )(input)
}

/// Tokenize a formula.
///
/// Whitespace between tokens is skipped. Every other character ends up in
/// exactly one token, so this never fails.
pub fn tokenize(formula: &str) -> Vec<Token> {
    // `unrecognized` accepts any char, so `many0` only stops at the end of
    // input (possibly after trailing whitespace).
    many0(token)(formula)
        .map(|(_, tokens)| tokens)
        .unwrap_or_default()
}
