//! Static lookup tables
//!
//! Authored once, loaded at startup and never mutated.

pub mod concepts;
pub mod formulas;
pub mod symbols;
pub mod synonyms;

pub use formulas::{chemical_expansion, formula_context, physics_expansion, FormulaContext};
pub use synonyms::SynonymTable;
