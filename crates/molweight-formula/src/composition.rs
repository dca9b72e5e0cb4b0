//! Resolved element counts.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Element symbol → number of atoms, after distributing every group
/// subscript.
///
/// Only the resolver builds these, so a composition coming out of a
/// successful parse is never empty and never holds a zero count. Iteration is
/// alphabetical by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Composition(BTreeMap<String, u32>);

pub(crate) static EMPTY: Composition = Composition(BTreeMap::new());

impl Composition {
    pub(crate) fn from_counts(counts: BTreeMap<String, u32>) -> Self {
        debug_assert!(counts.values().all(|&count| count > 0));
        Self(counts)
    }

    pub fn get(&self, symbol: &str) -> Option<u32> {
        self.0.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.0.contains_key(symbol)
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.0.iter().map(|(symbol, count)| (symbol.as_str(), *count))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn total_atoms(&self) -> u64 {
        self.0.values().map(|&count| u64::from(count)).sum()
    }

    pub fn as_map(&self) -> &BTreeMap<String, u32> {
        &self.0
    }

    pub fn into_map(self) -> BTreeMap<String, u32> {
        self.0
    }
}

/// Compact empirical form, e.g. `CaH2O2` for `Ca(OH)2`.
impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, count) in self.iter() {
            if count == 1 {
                f.write_str(symbol)?;
            } else {
                write!(f, "{symbol}{count}")?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Composition {
    type Item = (&'a String, &'a u32);
    type IntoIter = std::collections::btree_map::Iter<'a, String, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
