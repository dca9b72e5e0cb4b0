//! Read-only element lookup consumed by the parser.
//!
//! The parser never owns element data. It is handed something that answers
//! two questions (is this a symbol? what does it weigh?) and treats it as
//! immutable for its whole lifetime. The standard periodic table lives in the
//! `molweight-elements` crate; plain maps work too, which keeps tests free of
//! the full dataset.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::Arc;

/// Element symbol → atomic weight lookup.
///
/// Lookups are case-sensitive: `"Na"` and `"NA"` are different keys.
pub trait SymbolTable {
    fn is_valid(&self, symbol: &str) -> bool;

    /// Atomic weight in g/mol, `None` for symbols the table does not know.
    fn atomic_weight(&self, symbol: &str) -> Option<f64>;
}

impl<T: SymbolTable + ?Sized> SymbolTable for &T {
    fn is_valid(&self, symbol: &str) -> bool {
        (**self).is_valid(symbol)
    }

    fn atomic_weight(&self, symbol: &str) -> Option<f64> {
        (**self).atomic_weight(symbol)
    }
}

impl<T: SymbolTable + ?Sized> SymbolTable for Arc<T> {
    fn is_valid(&self, symbol: &str) -> bool {
        (**self).is_valid(symbol)
    }

    fn atomic_weight(&self, symbol: &str) -> Option<f64> {
        (**self).atomic_weight(symbol)
    }
}

impl<S: BuildHasher> SymbolTable for HashMap<String, f64, S> {
    fn is_valid(&self, symbol: &str) -> bool {
        self.contains_key(symbol)
    }

    fn atomic_weight(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).copied()
    }
}

impl SymbolTable for BTreeMap<String, f64> {
    fn is_valid(&self, symbol: &str) -> bool {
        self.contains_key(symbol)
    }

    fn atomic_weight(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).copied()
    }
}
