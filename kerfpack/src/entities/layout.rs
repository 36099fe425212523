use crate::entities::{PlacedPiece, Sheet, SheetSpec};
use crate::packers::Algorithm;
use crate::stats::LayoutStats;

/// Outcome of a single calculation: the opened sheets, in order of opening, and the
/// statistics derived from them. Never modified after it is returned.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutResult {
    pub algorithm: Algorithm,
    pub sheet: SheetSpec,
    pub kerf: f64,
    pub sheets: Vec<Sheet>,
    pub stats: LayoutStats,
}

impl LayoutResult {
    pub fn new(algorithm: Algorithm, sheet: SheetSpec, kerf: f64, sheets: Vec<Sheet>) -> Self {
        let stats = LayoutStats::compute(&sheets, sheet);
        LayoutResult {
            algorithm,
            sheet,
            kerf,
            sheets,
            stats,
        }
    }

    pub fn sheets_used(&self) -> usize {
        self.sheets.len()
    }

    /// All placed pieces, sheet by sheet in placement order.
    pub fn placed_pieces(&self) -> impl Iterator<Item = (&Sheet, &PlacedPiece)> {
        self.sheets
            .iter()
            .flat_map(|s| s.placed_pieces.iter().map(move |pp| (s, pp)))
    }

    pub fn placed_unit_count(&self) -> usize {
        self.sheets.iter().map(|s| s.placed_pieces.len()).sum()
    }
}
