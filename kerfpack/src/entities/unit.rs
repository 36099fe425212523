use std::fmt::{Display, Formatter};

use crate::entities::Piece;

/// A single placeable instance of a [`Piece`].
/// Each unit is placed at most once and chooses its orientation independently.
#[derive(Clone, Debug, PartialEq)]
pub struct PieceUnit {
    /// Position of the unit in the queue the allocation loop built, unique within a calculation
    pub index: usize,
    pub piece_id: u64,
    /// Which copy of the piece this is, `None` if the piece was not expanded
    pub copy: Option<usize>,
    pub name: Option<String>,
    pub width: f64,
    pub height: f64,
}

impl PieceUnit {
    pub fn new(index: usize, piece: &Piece, copy: Option<usize>) -> Self {
        PieceUnit {
            index,
            piece_id: piece.id,
            copy,
            name: piece.name.clone(),
            width: piece.width,
            height: piece.height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Both orientations of the unit: as given, then rotated by 90°.
    pub fn orientations(&self) -> [Orientation; 2] {
        [
            Orientation {
                width: self.width,
                height: self.height,
                rotated: false,
            },
            Orientation {
                width: self.height,
                height: self.width,
                rotated: true,
            },
        ]
    }

    /// Label of the unit: the piece id, suffixed with the copy number for expanded units.
    pub fn label(&self) -> UnitLabel {
        UnitLabel {
            piece_id: self.piece_id,
            copy: self.copy,
        }
    }
}

/// Width and height a unit occupies on the sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnitLabel {
    pub piece_id: u64,
    pub copy: Option<usize>,
}

impl Display for UnitLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.copy {
            Some(copy) => write!(f, "{}_{}", self.piece_id, copy),
            None => write!(f, "{}", self.piece_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        let piece = Piece::new(12, 10.0, 20.0, 3);
        assert_eq!(PieceUnit::new(0, &piece, Some(2)).label().to_string(), "12_2");
        assert_eq!(PieceUnit::new(0, &piece, None).label().to_string(), "12");
    }

    #[test]
    fn rotated_orientation_swaps_dimensions() {
        let unit = PieceUnit::new(0, &Piece::new(1, 10.0, 20.0, 1), None);
        let [upright, rotated] = unit.orientations();
        assert_eq!((upright.width, upright.height, upright.rotated), (10.0, 20.0, false));
        assert_eq!((rotated.width, rotated.height, rotated.rotated), (20.0, 10.0, true));
    }
}
