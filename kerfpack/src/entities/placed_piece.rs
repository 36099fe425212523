use crate::entities::PieceUnit;
use crate::entities::UnitLabel;
use crate::geometry::Rect;

/// Represents a [`PieceUnit`] that has been placed on a [`Sheet`](crate::entities::Sheet)
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedPiece {
    /// Index of the unit in the queue of the calculation that placed it
    pub unit_index: usize,
    pub label: UnitLabel,
    pub name: Option<String>,
    /// Area the piece occupies, after the rotation decision and without kerf
    pub rect: Rect,
    pub rotated: bool,
}

impl PlacedPiece {
    pub fn new(unit: &PieceUnit, rect: Rect, rotated: bool) -> Self {
        PlacedPiece {
            unit_index: unit.index,
            label: unit.label(),
            name: unit.name.clone(),
            rect,
            rotated,
        }
    }

    pub fn piece_id(&self) -> u64 {
        self.label.piece_id
    }

    pub fn area(&self) -> f64 {
        self.rect.area()
    }

    /// Area reserved on the sheet: the piece plus its kerf margin on the right and bottom.
    pub fn footprint(&self, kerf: f64) -> Rect {
        self.rect.with_kerf(kerf)
    }
}
