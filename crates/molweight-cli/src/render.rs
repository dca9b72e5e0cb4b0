//! Human-readable compound output shared by the one-shot commands and the menu.

use colored::Colorize;
use molweight_elements::PeriodicTable;
use molweight_formula::{suggest_casing, CompoundParser, ParseError, SymbolTable};

/// ```text
/// Ca(OH)2  74.092 g/mol
///   Ca  Calcium     1
///   H   Hydrogen    2
///   O   Oxygen      2
/// ```
pub fn compound_block<'a>(
    formula: &str,
    weight: f64,
    elements: impl IntoIterator<Item = (&'a str, u32)>,
    table: &PeriodicTable,
) -> String {
    let mut out = format!("{}  {:.3} g/mol\n", formula.bold(), weight);
    for (symbol, count) in elements {
        let name = table.element(symbol).map_or("", |e| e.name.as_str());
        out.push_str(&format!("  {symbol:<3} {name:<14} {count}\n"));
    }
    out
}

/// Error line plus a casing hint when the recased input would parse.
pub fn parse_failure<T: SymbolTable>(
    formula: &str,
    error: &ParseError,
    parser: &CompoundParser<T>,
) -> String {
    let mut out = format!("{} {}: {}\n", "error:".red().bold(), formula.trim(), error);
    if let Some(hint) = casing_hint(formula, parser) {
        out.push_str(&format!("{} did you mean `{}`?\n", "hint:".yellow(), hint));
    }
    out
}

fn casing_hint<T: SymbolTable>(formula: &str, parser: &CompoundParser<T>) -> Option<String> {
    let suggestion = suggest_casing(formula, parser.table());
    if suggestion.is_empty() || suggestion == formula.trim() {
        return None;
    }
    parser.parse(&suggestion).is_valid().then_some(suggestion)
}

pub fn element_row(symbol: &str, name: &str, atomic_number: u8, weight: f64) -> String {
    format!("{atomic_number:>3}  {symbol:<3} {name:<14} {weight:>12.6}")
}
