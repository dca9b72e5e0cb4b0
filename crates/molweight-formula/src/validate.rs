//! Element symbol validation.

use crate::error::FormatError;
use crate::table::SymbolTable;

/// Checks element candidates against a [`SymbolTable`].
///
/// Symbols are strict IUPAC casing. A two-letter candidate written in all
/// capitals (`CU`) is rejected outright when its capitalised form (`Cu`) is a
/// real element, rather than being read as something else.
pub struct SymbolValidator<'t, T: ?Sized> {
    table: &'t T,
}

impl<'t, T: SymbolTable + ?Sized> SymbolValidator<'t, T> {
    pub fn new(table: &'t T) -> Self {
        Self { table }
    }

    /// Validate a single element candidate, returning it unchanged on success.
    pub fn validate<'s>(&self, candidate: &'s str) -> Result<&'s str, FormatError> {
        if is_all_uppercase_pair(candidate) {
            let suggestion = iupac_case(candidate);
            if self.table.is_valid(&suggestion) {
                return Err(FormatError::AmbiguousSymbol {
                    token: candidate.to_string(),
                    suggestion,
                });
            }
        }

        if self.table.is_valid(candidate) {
            Ok(candidate)
        } else {
            Err(FormatError::UnrecognizedSymbol(candidate.to_string()))
        }
    }

    /// Check two single-letter candidates written back to back (`N`,`A`).
    ///
    /// The pair is ambiguous when its capitalised form is an element and at
    /// least one of the letters is not one on its own, so `NA` points at `Na`
    /// while `CO` stays carbon + oxygen.
    pub fn check_adjacent(&self, left: &str, right: &str) -> Result<(), FormatError> {
        if !is_single_uppercase(left) || !is_single_uppercase(right) {
            return Ok(());
        }

        let suggestion = format!("{left}{}", right.to_ascii_lowercase());
        let both_valid = self.table.is_valid(left) && self.table.is_valid(right);
        if !both_valid && self.table.is_valid(&suggestion) {
            return Err(FormatError::AmbiguousSymbol {
                token: format!("{left}{right}"),
                suggestion,
            });
        }
        Ok(())
    }
}

fn is_single_uppercase(s: &str) -> bool {
    s.len() == 1 && s.bytes().all(|b| b.is_ascii_uppercase())
}

fn is_all_uppercase_pair(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_uppercase())
}

/// First letter upper, the rest lower: `CU` → `Cu`.
pub(crate) fn iupac_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::testing::small_table;

    #[test]
    fn accepts_known_symbols_as_written() {
        let table = small_table();
        let validator = SymbolValidator::new(&table);
        assert_eq!(validator.validate("Na"), Ok("Na"));
        assert_eq!(validator.validate("O"), Ok("O"));
    }

    #[test]
    fn all_caps_pair_with_a_real_capitalised_form_is_ambiguous() {
        let table = small_table();
        let validator = SymbolValidator::new(&table);
        assert_eq!(
            validator.validate("CU"),
            Err(FormatError::AmbiguousSymbol {
                token: "CU".to_string(),
                suggestion: "Cu".to_string(),
            })
        );
    }

    #[test]
    fn unknown_symbols_are_unrecognized() {
        let table = small_table();
        let validator = SymbolValidator::new(&table);
        assert_eq!(
            validator.validate("Xx"),
            Err(FormatError::UnrecognizedSymbol("Xx".to_string()))
        );
        // `ZZ` has no element behind `Zz` either, so it is simply unknown.
        assert_eq!(
            validator.validate("ZZ"),
            Err(FormatError::UnrecognizedSymbol("ZZ".to_string()))
        );
        assert_eq!(
            validator.validate("na"),
            Err(FormatError::UnrecognizedSymbol("na".to_string()))
        );
    }

    #[test]
    fn adjacent_letters_flag_only_when_one_is_not_an_element() {
        let table = small_table();
        let validator = SymbolValidator::new(&table);

        assert_eq!(
            validator.check_adjacent("N", "A"),
            Err(FormatError::AmbiguousSymbol {
                token: "NA".to_string(),
                suggestion: "Na".to_string(),
            })
        );
        assert!(validator.check_adjacent("C", "O").is_ok());
        assert!(validator.check_adjacent("C", "U").is_ok());
        assert!(validator.check_adjacent("Ca", "O").is_ok());
        // neither `Q` nor `Qx` exist: nothing to point at
        assert!(validator.check_adjacent("H", "Q").is_ok());
    }

    #[test]
    fn iupac_case_capitalises_first_letter_only() {
        assert_eq!(iupac_case("CU"), "Cu");
        assert_eq!(iupac_case("na"), "Na");
        assert_eq!(iupac_case("h"), "H");
        assert_eq!(iupac_case(""), "");
    }
}
