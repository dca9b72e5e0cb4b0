//! Periodic table for molweight.
//!
//! [`PeriodicTable::standard`] is the dataset the CLI parses against: all 118
//! elements, built once on first use and read-only afterwards. Custom tables
//! (fewer elements, different weights) can be assembled with
//! [`PeriodicTable::from_elements`].

mod data;

use std::collections::HashMap;
use std::sync::OnceLock;

use molweight_formula::SymbolTable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: String,
    pub name: String,
    /// g/mol
    pub atomic_weight: f64,
}

impl Element {
    pub fn new(
        atomic_number: u8,
        symbol: impl Into<String>,
        name: impl Into<String>,
        atomic_weight: f64,
    ) -> Self {
        Self {
            atomic_number,
            symbol: symbol.into(),
            name: name.into(),
            atomic_weight,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PeriodicTable {
    elements: Vec<Element>,
    by_symbol: HashMap<String, usize>,
}

static STANDARD: OnceLock<PeriodicTable> = OnceLock::new();

impl PeriodicTable {
    /// The full standard table.
    pub fn standard() -> &'static PeriodicTable {
        STANDARD.get_or_init(|| {
            Self::from_elements(data::ELEMENTS.iter().map(|&(number, symbol, name, weight)| {
                Element::new(number, symbol, name, weight)
            }))
        })
    }

    /// Build a table from arbitrary elements. A repeated symbol replaces the
    /// earlier entry; iteration follows atomic number.
    pub fn from_elements(elements: impl IntoIterator<Item = Element>) -> Self {
        let mut unique: HashMap<String, Element> = HashMap::new();
        for element in elements {
            unique.insert(element.symbol.clone(), element);
        }

        let mut elements: Vec<Element> = unique.into_values().collect();
        elements.sort_by(|a, b| {
            a.atomic_number
                .cmp(&b.atomic_number)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });

        let by_symbol = elements
            .iter()
            .enumerate()
            .map(|(index, element)| (element.symbol.clone(), index))
            .collect();

        Self {
            elements,
            by_symbol,
        }
    }

    pub fn element(&self, symbol: &str) -> Option<&Element> {
        self.by_symbol
            .get(symbol)
            .and_then(|&index| self.elements.get(index))
    }

    pub fn by_number(&self, atomic_number: u8) -> Option<&Element> {
        self.elements
            .iter()
            .find(|element| element.atomic_number == atomic_number)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.iter()
    }
}

impl SymbolTable for PeriodicTable {
    fn is_valid(&self, symbol: &str) -> bool {
        self.by_symbol.contains_key(symbol)
    }

    fn atomic_weight(&self, symbol: &str) -> Option<f64> {
        self.element(symbol).map(|element| element.atomic_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn standard_table_has_every_element_once() {
        let table = PeriodicTable::standard();
        assert_eq!(table.len(), 118);
        for (index, element) in table.iter().enumerate() {
            assert_eq!(usize::from(element.atomic_number), index + 1);
            assert!(element.atomic_weight > 0.0, "{}", element.symbol);
        }
    }

    #[test]
    fn symbols_follow_iupac_casing() {
        for element in PeriodicTable::standard().iter() {
            let mut chars = element.symbol.chars();
            let first = chars.next().expect("non-empty symbol");
            assert!(first.is_ascii_uppercase(), "{}", element.symbol);
            assert!(chars.all(|c| c.is_ascii_lowercase()), "{}", element.symbol);
            assert!(element.symbol.len() <= 2, "{}", element.symbol);
        }
    }

    #[test]
    fn lookups_by_symbol_and_number() {
        let table = PeriodicTable::standard();
        let carbon = table.element("C").expect("carbon");
        assert_eq!(carbon.atomic_number, 6);
        assert_eq!(carbon.name, "Carbon");
        assert_abs_diff_eq!(carbon.atomic_weight, 12.011, epsilon = 1e-9);

        assert_eq!(table.by_number(26).map(|e| e.symbol.as_str()), Some("Fe"));
        assert!(table.element("Zz").is_none());
        assert!(table.by_number(0).is_none());
        assert!(table.by_number(119).is_none());
    }

    #[test]
    fn symbol_table_is_case_sensitive() {
        let table = PeriodicTable::standard();
        assert!(table.is_valid("Na"));
        assert!(!table.is_valid("NA"));
        assert!(!table.is_valid("na"));
        assert_eq!(table.atomic_weight("Cu"), Some(63.546));
        assert_eq!(table.atomic_weight("CU"), None);
    }

    #[test]
    fn custom_tables_replace_duplicates() {
        let table = PeriodicTable::from_elements([
            Element::new(8, "O", "Oxygen", 15.999),
            Element::new(1, "H", "Hydrogen", 1.0),
            Element::new(1, "H", "Hydrogen", 1.008),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.atomic_weight("H"), Some(1.008));
        assert_eq!(
            table.iter().map(|e| e.symbol.as_str()).collect::<Vec<_>>(),
            vec!["H", "O"]
        );
    }
}
