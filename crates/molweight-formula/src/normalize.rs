//! Best-effort recasing of sloppy input.
//!
//! Users type `nacl`, `-hcl` or `C6h12o6`. The parser is strict about
//! casing, so this produces a candidate the caller can offer back as a hint.
//! It is a guess, not a parse: the result still has to go through
//! [`CompoundParser`](crate::CompoundParser).

use crate::table::SymbolTable;
use crate::validate::iupac_case;

/// Rewrite `input` into IUPAC casing.
///
/// Characters other than ASCII letters, digits and `()[]` are dropped. For
/// each letter a valid two-letter symbol wins over a single letter, so
/// `nacl` becomes `NaCl` and `hcl` becomes `HCl`.
pub fn suggest_casing<T: SymbolTable + ?Sized>(input: &str, table: &T) -> String {
    let kept: Vec<char> = input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '(' | ')' | '[' | ']'))
        .collect();

    let mut out = String::with_capacity(kept.len());
    let mut i = 0;
    while i < kept.len() {
        let c = kept[i];
        if !c.is_ascii_alphabetic() {
            out.push(c);
            i += 1;
            continue;
        }

        if let Some(&next) = kept.get(i + 1).filter(|n| n.is_ascii_alphabetic()) {
            let pair = iupac_case(&format!("{c}{next}"));
            if table.is_valid(&pair) {
                out.push_str(&pair);
                i += 2;
                continue;
            }
        }

        out.push(c.to_ascii_uppercase());
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::testing::small_table;

    #[test]
    fn recases_common_inputs() {
        let table = small_table();
        assert_eq!(suggest_casing("-hcl", &table), "HCl");
        assert_eq!(suggest_casing(",hcl", &table), "HCl");
        assert_eq!(suggest_casing("+C6h12o6", &table), "C6H12O6");
        assert_eq!(suggest_casing("nacl", &table), "NaCl");
    }

    #[test]
    fn keeps_brackets_and_digits() {
        let table = small_table();
        assert_eq!(suggest_casing("ca(oh)2", &table), "Ca(OH)2");
        assert_eq!(suggest_casing("mg3[po4]2", &table), "Mg3[PO4]2");
    }

    #[test]
    fn prefers_two_letter_symbols_greedily() {
        let table = small_table();
        // `Co` exists, so the greedy reading wins
        assert_eq!(suggest_casing("co2", &table), "Co2");
        assert_eq!(suggest_casing("NA", &table), "Na");
    }

    #[test]
    fn empty_and_junk_inputs() {
        let table = small_table();
        assert_eq!(suggest_casing("", &table), "");
        assert_eq!(suggest_casing("-+.,", &table), "");
    }
}
