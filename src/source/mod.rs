//! Local tabular source.
//!
//! A source workbook is loaded once into a list of [`TabularSheet`]s —
//! immutable, uniform-width matrices of scalar values — which the transfer
//! tasks then share read-only. Cell normalization happens here: missing
//! values become the empty string and temporal values their canonical
//! string form, so the rest of the crate performs no type coercion.

// Submodule declarations
pub mod types;
mod workbook;

// Re-exports
pub use types::{Scalar, TabularSheet};
pub use workbook::load_sheets;
