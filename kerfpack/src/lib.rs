//! Packing engine for cutting rectangular pieces out of identical stock sheets,
//! accounting for the material lost to every cut (kerf) and allowing 90° rotation.

/// Entities modelling a cutting job and its result
pub mod entities;

/// Axis-aligned rectangles and the predicates the packers rely on
pub mod geometry;

/// Placement strategies, one per [`Algorithm`](packers::Algorithm)
pub mod packers;

/// Multi-sheet allocation loop driving a packer until every unit is placed
pub mod allocation;

/// Utilization and waste statistics derived from a finished layout
pub mod stats;

/// Importing jobs into and exporting layouts out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use allocation::{CalcOptions, calculate, calculate_with};
#[doc(inline)]
pub use error::{CalcError, ErrorKind};
