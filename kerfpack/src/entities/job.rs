use crate::entities::{Piece, SheetSpec};
use crate::error::CalcError;
use crate::packers::Algorithm;

/// A validated cutting job: the pieces to cut, the stock sheet size, the blade kerf and the
/// placement algorithm to use.
///
/// Constructing a [`Job`] through [`Job::new`] guarantees every precondition of the engine,
/// most importantly that every piece fits an empty sheet in at least one orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct Job {
    pub pieces: Vec<Piece>,
    pub sheet: SheetSpec,
    pub kerf: f64,
    pub algorithm: Algorithm,
}

impl Job {
    pub fn new(
        pieces: Vec<Piece>,
        sheet: SheetSpec,
        kerf: f64,
        algorithm: Algorithm,
    ) -> Result<Self, CalcError> {
        let job = Job {
            pieces,
            sheet,
            kerf,
            algorithm,
        };
        job.validate()?;
        Ok(job)
    }

    /// Checks the job against the engine's input contract.
    /// Reports the first violation found, in piece order.
    pub fn validate(&self) -> Result<(), CalcError> {
        let SheetSpec { width, height } = self.sheet;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(CalcError::InvalidSheet { width, height });
        }
        if !(self.kerf.is_finite() && self.kerf >= 0.0) {
            return Err(CalcError::InvalidKerf(self.kerf));
        }
        if self.pieces.is_empty() {
            return Err(CalcError::EmptyPieceList);
        }
        for piece in &self.pieces {
            let invalid = |reason| CalcError::InvalidPiece {
                piece_id: piece.id,
                reason,
            };
            if !(piece.width.is_finite() && piece.width > 0.0) {
                return Err(invalid("width must be a finite value > 0"));
            }
            if !(piece.height.is_finite() && piece.height > 0.0) {
                return Err(invalid("height must be a finite value > 0"));
            }
            if piece.quantity == 0 {
                return Err(invalid("quantity must be at least 1"));
            }
            if !piece.fits_sheet(&self.sheet, self.kerf) {
                return Err(CalcError::PieceTooLarge {
                    piece_id: piece.id,
                    width: piece.width,
                    height: piece.height,
                    sheet_width: width,
                    sheet_height: height,
                    kerf: self.kerf,
                });
            }
        }
        Ok(())
    }

    /// Total number of requested units, summed over all piece quantities.
    pub fn total_unit_qty(&self) -> usize {
        self.pieces.iter().map(|p| p.quantity).sum()
    }

    /// Total requested area (mm²), summed over all piece quantities.
    pub fn total_piece_area(&self) -> f64 {
        self.pieces.iter().map(|p| p.area() * p.quantity as f64).sum()
    }

    /// Groups the pieces by identical dimensions, in order of first appearance.
    pub fn dimension_groups(&self) -> Vec<DimensionGroup> {
        let mut groups: Vec<DimensionGroup> = vec![];
        for piece in &self.pieces {
            match groups
                .iter_mut()
                .find(|g| g.width == piece.width && g.height == piece.height)
            {
                Some(group) => {
                    group.count += piece.quantity;
                    group.piece_ids.push(piece.id);
                }
                None => groups.push(DimensionGroup {
                    width: piece.width,
                    height: piece.height,
                    count: piece.quantity,
                    piece_ids: vec![piece.id],
                }),
            }
        }
        groups
    }
}

/// Pieces sharing the same `width x height`, with their summed quantity.
#[derive(Clone, Debug, PartialEq)]
pub struct DimensionGroup {
    pub width: f64,
    pub height: f64,
    pub count: usize,
    pub piece_ids: Vec<u64>,
}

impl DimensionGroup {
    pub fn key(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}
