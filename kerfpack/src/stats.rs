use crate::entities::{Sheet, SheetSpec};

/// Square millimeters in a square meter, the reporting unit for areas.
pub const MM2_PER_M2: f64 = 1_000_000.0;

/// Converts an area in mm² to m².
pub fn to_square_meters(area_mm2: f64) -> f64 {
    area_mm2 / MM2_PER_M2
}

/// Used and wasted area of a single sheet. Areas in mm².
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetStats {
    pub sheet_id: usize,
    pub placed_pieces: usize,
    pub used_area: f64,
    pub waste_area: f64,
    /// Percentage of the sheet covered by pieces
    pub utilization: f64,
}

impl SheetStats {
    pub fn compute(sheet: &Sheet) -> Self {
        let used_area = sheet.used_area();
        SheetStats {
            sheet_id: sheet.id,
            placed_pieces: sheet.placed_pieces.len(),
            used_area,
            waste_area: sheet.waste_area(),
            utilization: used_area / sheet.spec.area() * 100.0,
        }
    }
}

/// Aggregate statistics over all sheets of a layout. Areas in mm², ratios in percent.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutStats {
    pub sheets_used: usize,
    pub total_used_area: f64,
    pub total_waste_area: f64,
    pub utilization: f64,
    /// Derived from the waste total, independently of `utilization`
    pub waste_percentage: f64,
    /// Same definition as `utilization`
    pub efficiency: f64,
    pub per_sheet: Vec<SheetStats>,
}

impl LayoutStats {
    /// Every sheet is assumed to share the dimensions of `spec`.
    /// An empty sheet list yields all-zero statistics.
    pub fn compute(sheets: &[Sheet], spec: SheetSpec) -> Self {
        let per_sheet: Vec<SheetStats> = sheets.iter().map(SheetStats::compute).collect();

        let total_used_area = per_sheet.iter().map(|s| s.used_area).sum::<f64>();
        let total_waste_area = per_sheet.iter().map(|s| s.waste_area).sum::<f64>();
        let total_sheet_area = sheets.len() as f64 * spec.area();

        let (utilization, waste_percentage) = match total_sheet_area > 0.0 {
            true => (
                total_used_area / total_sheet_area * 100.0,
                total_waste_area / total_sheet_area * 100.0,
            ),
            false => (0.0, 0.0),
        };

        LayoutStats {
            sheets_used: sheets.len(),
            total_used_area,
            total_waste_area,
            utilization,
            waste_percentage,
            efficiency: utilization,
            per_sheet,
        }
    }

    pub fn total_used_area_m2(&self) -> f64 {
        to_square_meters(self.total_used_area)
    }

    pub fn total_waste_area_m2(&self) -> f64 {
        to_square_meters(self.total_waste_area)
    }
}
