//! Group resolution: tokens → element counts.
//!
//! Tokens are walked right to left with a stack of multipliers. Reading
//! backwards, a subscript is always seen *before* the element or closing
//! bracket it belongs to, so a single pass can push a group's factor when its
//! closing bracket appears and pop it at the opener:
//!
//! ```text
//! Mg3(PO4)2   reversed: 2 ) 4 O P ( 3 Mg
//!
//! token  pending  stack    counts
//! 2      2        [1]
//! )      1        [1, 2]
//! 4      4        [1, 2]
//! O      1        [1, 2]   O=8
//! P      1        [1, 2]   O=8 P=2
//! (      1        [1]
//! 3      3        [1]
//! Mg     1        [1]      O=8 P=2 Mg=3
//! ```
//!
//! No tree is built; the stack depth equals the bracket nesting depth.

use std::collections::BTreeMap;

use crate::composition::Composition;
use crate::error::FormatError;
use crate::table::SymbolTable;
use crate::token::Token;
use crate::validate::SymbolValidator;

pub struct GroupResolver<'t, T: ?Sized> {
    validator: SymbolValidator<'t, T>,
}

impl<'t, T: SymbolTable + ?Sized> GroupResolver<'t, T> {
    pub fn new(table: &'t T) -> Self {
        Self {
            validator: SymbolValidator::new(table),
        }
    }

    pub fn resolve(&self, tokens: &[Token]) -> Result<Composition, FormatError> {
        let mut counts: BTreeMap<String, u32> = BTreeMap::new();
        // base entry is never popped
        let mut multipliers: Vec<u32> = vec![1];
        let mut pending: u32 = 1;

        for (index, token) in tokens.iter().enumerate().rev() {
            let factor = multipliers.last().copied().unwrap_or(1);

            match token {
                Token::Digits(digits) => {
                    pending = parse_subscript(digits)?;
                }
                Token::GroupClose(_) => {
                    let group_factor = factor
                        .checked_mul(pending)
                        .ok_or(FormatError::CountOverflow)?;
                    multipliers.push(group_factor);
                    pending = 1;
                }
                Token::GroupOpen(bracket) => {
                    if multipliers.len() <= 1 {
                        return Err(FormatError::UnmatchedOpener(*bracket));
                    }
                    multipliers.pop();
                    pending = 1;
                }
                Token::Element(candidate) => {
                    if let Some(Token::Element(previous)) =
                        index.checked_sub(1).and_then(|i| tokens.get(i))
                    {
                        self.validator.check_adjacent(previous, candidate)?;
                    }
                    let symbol = self.validator.validate(candidate)?;

                    let amount = pending
                        .checked_mul(factor)
                        .ok_or(FormatError::CountOverflow)?;
                    let count = counts.entry(symbol.to_string()).or_insert(0);
                    *count = count
                        .checked_add(amount)
                        .ok_or(FormatError::CountOverflow)?;
                    pending = 1;
                }
                Token::Unrecognized(text) => {
                    return Err(FormatError::InvalidToken(text.clone()));
                }
            }
        }

        if multipliers.len() > 1 {
            return Err(FormatError::UnbalancedGroups {
                unclosed: multipliers.len() - 1,
            });
        }
        if counts.is_empty() {
            return Err(FormatError::Empty);
        }

        Ok(Composition::from_counts(counts))
    }
}

fn parse_subscript(digits: &str) -> Result<u32, FormatError> {
    match digits.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(FormatError::InvalidSubscript(digits.to_string())),
    }
}
