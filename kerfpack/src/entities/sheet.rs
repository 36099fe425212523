use itertools::Itertools;

use crate::entities::{PlacedPiece, SheetSpec};
use crate::geometry::Rect;
use crate::geometry::geo_traits::{AlmostCollidesWith, AlmostEncloses};

/// A [`Sheet`] is a stock sheet on which units are being (or have been) placed.
///
/// Packers that track free space (MaxRects, Guillotine) keep their free-rectangle set in
/// [`Sheet::free_rects`]; grid-searching packers leave it empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Sheet {
    /// 1-based, in order of opening
    pub id: usize,
    pub spec: SheetSpec,
    pub kerf: f64,
    /// Placed pieces, in placement order
    pub placed_pieces: Vec<PlacedPiece>,
    /// Regions not yet reserved by any piece or kerf margin
    pub free_rects: Vec<Rect>,
}

impl Sheet {
    /// A new sheet without any tracked free space.
    pub fn new(id: usize, spec: SheetSpec, kerf: f64) -> Self {
        Sheet {
            id,
            spec,
            kerf,
            placed_pieces: vec![],
            free_rects: vec![],
        }
    }

    /// A new sheet whose free space is a single rectangle covering the whole sheet.
    pub fn with_free_space(id: usize, spec: SheetSpec, kerf: f64) -> Self {
        Sheet {
            free_rects: vec![Rect::sheet(spec.width, spec.height)],
            ..Sheet::new(id, spec, kerf)
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::sheet(self.spec.width, self.spec.height)
    }

    pub fn place(&mut self, placed_piece: PlacedPiece) {
        self.placed_pieces.push(placed_piece);
    }

    /// True if no pieces are placed
    pub fn is_empty(&self) -> bool {
        self.placed_pieces.is_empty()
    }

    /// The sum of the areas of the pieces placed on the sheet, kerf excluded.
    pub fn used_area(&self) -> f64 {
        self.placed_pieces.iter().map(|pp| pp.area()).sum()
    }

    pub fn waste_area(&self) -> f64 {
        self.spec.area() - self.used_area()
    }

    /// Ratio of the used area to the area of the sheet, between 0 and 1.
    pub fn density(&self) -> f64 {
        self.used_area() / self.spec.area()
    }

    /// Kerf-expanded footprints of all placed pieces.
    pub fn footprints(&self) -> impl Iterator<Item = Rect> + Clone + '_ {
        self.placed_pieces.iter().map(|pp| pp.footprint(self.kerf))
    }

    /// Returns true if every piece lies within the sheet and no two kerf-expanded footprints overlap.
    /// Both checks tolerate floating point drift from decimal dimensions.
    pub fn is_feasible(&self) -> bool {
        let bounds = self.bounds();
        let in_bounds = self
            .placed_pieces
            .iter()
            .all(|pp| bounds.almost_encloses(&pp.rect));
        let disjoint = self
            .footprints()
            .tuple_combinations()
            .all(|(a, b)| !a.almost_collides_with(&b));
        in_bounds && disjoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Piece, PieceUnit};

    fn sheet_with(kerf: f64, rects: &[Rect]) -> Sheet {
        let mut sheet = Sheet::new(1, SheetSpec::new(100.0, 100.0), kerf);
        for (i, r) in rects.iter().enumerate() {
            let unit = PieceUnit::new(i, &Piece::new(i as u64, r.width, r.height, 1), None);
            sheet.place(PlacedPiece::new(&unit, *r, false));
        }
        sheet
    }

    #[test]
    fn kerf_margin_separates_neighbours() {
        let left = Rect::new(0.0, 0.0, 40.0, 40.0);
        assert!(sheet_with(2.0, &[left, Rect::new(42.0, 0.0, 10.0, 10.0)]).is_feasible());
        assert!(!sheet_with(2.0, &[left, Rect::new(41.0, 0.0, 10.0, 10.0)]).is_feasible());
        assert!(sheet_with(0.0, &[left, Rect::new(40.0, 0.0, 10.0, 10.0)]).is_feasible());
    }

    #[test]
    fn pieces_must_stay_on_the_sheet() {
        assert!(!sheet_with(0.0, &[Rect::new(95.0, 0.0, 10.0, 10.0)]).is_feasible());
        // the kerf margin of a piece may reach past the edge
        assert!(sheet_with(3.0, &[Rect::new(90.0, 90.0, 10.0, 10.0)]).is_feasible());
    }

    #[test]
    fn free_space_starts_as_the_whole_sheet() {
        let spec = SheetSpec::new(300.0, 200.0);
        assert_eq!(Sheet::with_free_space(1, spec, 0.0).free_rects, vec![Rect::sheet(300.0, 200.0)]);
        assert!(Sheet::new(1, spec, 0.0).free_rects.is_empty());
    }
}
