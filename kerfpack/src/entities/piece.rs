use serde::{Deserialize, Serialize};

/// A rectangular piece to be cut, requested `quantity` times.
/// Pieces are never mutated by a calculation: where a unit ends up is recorded in a
/// [`PlacedPiece`](crate::entities::PlacedPiece).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub width: f64,
    pub height: f64,
    pub quantity: usize,
}

impl Piece {
    pub fn new(id: u64, width: f64, height: f64, quantity: usize) -> Self {
        Piece {
            id,
            name: None,
            width,
            height,
            quantity,
        }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Piece {
            name: Some(name.into()),
            ..self
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True if the piece, together with its kerf margin, fits on an empty sheet
    /// in at least one of its two orientations.
    pub fn fits_sheet(&self, sheet: &SheetSpec, kerf: f64) -> bool {
        let fits = |w: f64, h: f64| w + kerf <= sheet.width && h + kerf <= sheet.height;
        fits(self.width, self.height) || fits(self.height, self.width)
    }
}

/// Dimensions of the stock sheets. Every sheet of a job has the same size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SheetSpec {
    pub width: f64,
    pub height: f64,
}

impl SheetSpec {
    pub fn new(width: f64, height: f64) -> Self {
        SheetSpec { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_in_either_orientation() {
        let sheet = SheetSpec::new(1000.0, 600.0);
        assert!(Piece::new(1, 600.0, 1000.0, 1).fits_sheet(&sheet, 0.0));
        assert!(!Piece::new(2, 1001.0, 10.0, 1).fits_sheet(&sheet, 0.0));
    }

    #[test]
    fn kerf_counts_against_the_sheet_edge() {
        let sheet = SheetSpec::new(500.0, 500.0);
        let piece = Piece::new(1, 500.0, 200.0, 1);
        assert!(piece.fits_sheet(&sheet, 0.0));
        assert!(!piece.fits_sheet(&sheet, 3.0));
    }
}
