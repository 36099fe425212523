use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// External representation of a [`Piece`](crate::entities::Piece).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPiece {
    /// Unique identifier of the piece
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Width in mm
    pub width: f64,
    /// Height in mm
    pub height: f64,
    /// Number of units requested, 1 if not specified
    #[serde(default = "default_quantity")]
    pub quantity: usize,
}

fn default_quantity() -> usize {
    1
}

/// External representation of a [`Job`](crate::entities::Job).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtJob {
    pub sheet_width: f64,
    pub sheet_height: f64,
    /// Blade width in mm, 0 if not specified
    #[serde(default)]
    pub kerf: f64,
    /// Algorithm selector, `maxrects` if not specified or not recognized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    pub pieces: Vec<ExtPiece>,
}

/// External representation of a [`LayoutResult`](crate::entities::LayoutResult).
/// Areas are reported in m², rounded to 3 decimals, percentages to 1 decimal.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLayoutResult {
    pub algorithm: String,
    pub sheet_width: f64,
    pub sheet_height: f64,
    pub kerf: f64,
    pub stats: ExtStats,
    pub summary: ExtPieceSummary,
    pub sheets: Vec<ExtSheet>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtStats {
    pub sheets_used: usize,
    pub placed_units: usize,
    pub total_used_area: f64,
    pub total_waste_area: f64,
    pub utilization: f64,
    pub waste_percentage: f64,
    pub efficiency: f64,
}

/// Requested pieces of the job, independent of how they were placed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPieceSummary {
    pub total_units: usize,
    /// Summed area of all requested units, in m²
    pub total_area: f64,
    pub groups: Vec<ExtDimensionGroup>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtDimensionGroup {
    /// `{width}x{height}`
    pub key: String,
    pub count: usize,
    pub piece_ids: Vec<u64>,
}

/// External representation of a [`Sheet`](crate::entities::Sheet).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSheet {
    pub id: usize,
    pub width: f64,
    pub height: f64,
    pub used_area: f64,
    pub waste_area: f64,
    pub utilization: f64,
    pub placed_pieces: Vec<ExtPlacedPiece>,
    /// Free space left on the sheet, absent for packers that do not track it
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub free_rects: Vec<Rect>,
}

/// External representation of a [`PlacedPiece`](crate::entities::PlacedPiece).
/// `(x, y)` is the top-left corner, width and height are after rotation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedPiece {
    /// `{piece_id}_{copy}` for expanded units, the bare piece id otherwise
    pub label: String,
    pub piece_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
}
