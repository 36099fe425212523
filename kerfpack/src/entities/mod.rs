mod job;
mod layout;
mod piece;
mod placed_piece;
mod sheet;
mod unit;

#[doc(inline)]
pub use job::DimensionGroup;

#[doc(inline)]
pub use job::Job;

#[doc(inline)]
pub use layout::LayoutResult;

#[doc(inline)]
pub use piece::Piece;

#[doc(inline)]
pub use piece::SheetSpec;

#[doc(inline)]
pub use placed_piece::PlacedPiece;

#[doc(inline)]
pub use sheet::Sheet;

#[doc(inline)]
pub use unit::Orientation;

#[doc(inline)]
pub use unit::PieceUnit;

#[doc(inline)]
pub use unit::UnitLabel;
