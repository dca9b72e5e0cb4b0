//! The `CompoundParser` façade.
//!
//! One call runs the whole pipeline (tokenize → resolve + validate → weigh)
//! and ends in exactly one of two states: a [`Compound`] with its weight, or
//! a [`ParseError`]. Nothing partial survives a failure.

use serde::Serialize;

use crate::composition::{self, Composition};
use crate::error::ParseError;
use crate::resolve::GroupResolver;
use crate::table::SymbolTable;
use crate::token::tokenize;
use crate::weight::WeightAggregator;

/// A successfully parsed formula.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compound {
    formula: String,
    composition: Composition,
    weight: f64,
}

impl Compound {
    /// The formula as parsed (trimmed).
    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// Molecular weight in g/mol.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Outcome of [`CompoundParser::parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    Valid {
        composition: Composition,
        weight: f64,
    },
    Invalid {
        error: ParseError,
    },
}

impl ParseResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ParseResult::Valid { .. })
    }

    /// The resolved counts; empty for an invalid result.
    pub fn composition(&self) -> &Composition {
        match self {
            ParseResult::Valid { composition, .. } => composition,
            ParseResult::Invalid { .. } => &composition::EMPTY,
        }
    }

    /// Molecular weight in g/mol; `0.0` for an invalid result.
    pub fn weight(&self) -> f64 {
        match self {
            ParseResult::Valid { weight, .. } => *weight,
            ParseResult::Invalid { .. } => 0.0,
        }
    }

    pub fn error(&self) -> Option<&ParseError> {
        match self {
            ParseResult::Valid { .. } => None,
            ParseResult::Invalid { error } => Some(error),
        }
    }

    /// The user-facing error message, prefixed with its category.
    pub fn message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    pub fn into_result(self) -> Result<(Composition, f64), ParseError> {
        match self {
            ParseResult::Valid {
                composition,
                weight,
            } => Ok((composition, weight)),
            ParseResult::Invalid { error } => Err(error),
        }
    }
}

impl From<Result<Compound, ParseError>> for ParseResult {
    fn from(result: Result<Compound, ParseError>) -> Self {
        match result {
            Ok(compound) => ParseResult::Valid {
                composition: compound.composition,
                weight: compound.weight,
            },
            Err(error) => ParseResult::Invalid { error },
        }
    }
}

/// Parses formulas against an injected, read-only symbol table.
///
/// The parser holds no mutable state, so one instance can serve any number of
/// callers (and threads, when `T: Sync`).
#[derive(Debug, Clone)]
pub struct CompoundParser<T> {
    table: T,
}

impl<T: SymbolTable> CompoundParser<T> {
    pub fn new(table: T) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn parse(&self, formula: &str) -> ParseResult {
        self.compound(formula).into()
    }

    pub fn compound(&self, formula: &str) -> Result<Compound, ParseError> {
        let formula = formula.trim();
        let composition = self.composition(formula)?;
        let weight = WeightAggregator::new(&self.table).total(&composition)?;
        Ok(Compound {
            formula: formula.to_string(),
            composition,
            weight,
        })
    }

    /// Element counts only; the weight source is not consulted.
    pub fn composition(&self, formula: &str) -> Result<Composition, ParseError> {
        let tokens = tokenize(formula.trim());
        let composition = GroupResolver::new(&self.table).resolve(&tokens)?;
        Ok(composition)
    }
}
