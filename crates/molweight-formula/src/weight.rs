//! Molecular weight from a resolved composition.

use crate::composition::Composition;
use crate::error::UnexpectedError;
use crate::table::SymbolTable;

pub struct WeightAggregator<'t, T: ?Sized> {
    table: &'t T,
}

impl<'t, T: SymbolTable + ?Sized> WeightAggregator<'t, T> {
    pub fn new(table: &'t T) -> Self {
        Self { table }
    }

    /// Sum of `count × atomic weight` in g/mol.
    ///
    /// Every symbol here already passed validation, so a missing or
    /// non-positive weight means the table disagrees with itself.
    pub fn total(&self, composition: &Composition) -> Result<f64, UnexpectedError> {
        composition
            .iter()
            .try_fold(0.0_f64, |total, (symbol, count)| {
                match self.table.atomic_weight(symbol) {
                    Some(weight) if weight > 0.0 => Ok(total + weight * f64::from(count)),
                    _ => Err(UnexpectedError::MissingWeight(symbol.to_string())),
                }
            })
    }
}
