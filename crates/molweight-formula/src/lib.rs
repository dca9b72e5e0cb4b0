//! Chemical formula parsing and molecular weights.
//!
//! ```text
//! "Mg3(PO4)2" ──tokenize──► [Mg 3 ( P O 4 ) 2]
//!             ──resolve───► {Mg: 3, O: 8, P: 2}      (validated symbols)
//!             ──weigh─────► 262.855 g/mol
//! ```
//!
//! The crate owns the algorithm only. Element data comes in through the
//! [`SymbolTable`] trait (see `molweight-elements` for the standard periodic
//! table), and nothing here does I/O.
//!
//! ```
//! use std::collections::HashMap;
//! use molweight_formula::CompoundParser;
//!
//! let table: HashMap<String, f64> =
//!     [("H".to_string(), 1.008), ("O".to_string(), 15.999)].into_iter().collect();
//! let parser = CompoundParser::new(table);
//!
//! let water = parser.compound("H2O").unwrap();
//! assert_eq!(water.composition().get("H"), Some(2));
//! assert!((water.weight() - 18.015).abs() < 1e-9);
//!
//! assert!(!parser.parse("H2O)").is_valid());
//! ```

pub mod composition;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod resolve;
pub mod table;
pub mod token;
pub mod validate;
pub mod weight;

pub use composition::Composition;
pub use error::{FormatError, ParseError, UnexpectedError};
pub use normalize::suggest_casing;
pub use parser::{Compound, CompoundParser, ParseResult};
pub use resolve::GroupResolver;
pub use table::SymbolTable;
pub use token::{tokenize, Token};
pub use validate::SymbolValidator;
pub use weight::WeightAggregator;
