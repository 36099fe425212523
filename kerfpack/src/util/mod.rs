/// Checks on the state of sheets and layouts, used in `debug_assert!()` blocks and tests.
pub mod assertions;

mod fpa;

#[doc(inline)]
pub use fpa::FPA;
