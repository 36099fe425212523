use crate::entities::{Job, LayoutResult, PlacedPiece, Sheet};
use crate::io::ext_repr::{
    ExtDimensionGroup, ExtLayoutResult, ExtPieceSummary, ExtPlacedPiece, ExtSheet, ExtStats,
};
use crate::stats::{LayoutStats, SheetStats, to_square_meters};

/// Exports a layout out of the library, together with a summary of the job it was calculated for.
pub fn export(job: &Job, layout: &LayoutResult) -> ExtLayoutResult {
    ExtLayoutResult {
        algorithm: layout.algorithm.to_string(),
        sheet_width: layout.sheet.width,
        sheet_height: layout.sheet.height,
        kerf: layout.kerf,
        stats: export_stats(&layout.stats, layout.placed_unit_count()),
        summary: export_summary(job),
        sheets: layout
            .sheets
            .iter()
            .zip(layout.stats.per_sheet.iter())
            .map(|(sheet, stats)| export_sheet(sheet, stats))
            .collect(),
    }
}

pub fn export_stats(stats: &LayoutStats, placed_units: usize) -> ExtStats {
    ExtStats {
        sheets_used: stats.sheets_used,
        placed_units,
        total_used_area: round_area(stats.total_used_area),
        total_waste_area: round_area(stats.total_waste_area),
        utilization: round_percentage(stats.utilization),
        waste_percentage: round_percentage(stats.waste_percentage),
        efficiency: round_percentage(stats.efficiency),
    }
}

pub fn export_summary(job: &Job) -> ExtPieceSummary {
    ExtPieceSummary {
        total_units: job.total_unit_qty(),
        total_area: round_area(job.total_piece_area()),
        groups: job
            .dimension_groups()
            .into_iter()
            .map(|g| ExtDimensionGroup {
                key: g.key(),
                count: g.count,
                piece_ids: g.piece_ids,
            })
            .collect(),
    }
}

pub fn export_sheet(sheet: &Sheet, stats: &SheetStats) -> ExtSheet {
    ExtSheet {
        id: sheet.id,
        width: sheet.spec.width,
        height: sheet.spec.height,
        used_area: round_area(stats.used_area),
        waste_area: round_area(stats.waste_area),
        utilization: round_percentage(stats.utilization),
        placed_pieces: sheet.placed_pieces.iter().map(export_placed_piece).collect(),
        free_rects: sheet.free_rects.clone(),
    }
}

pub fn export_placed_piece(pp: &PlacedPiece) -> ExtPlacedPiece {
    ExtPlacedPiece {
        label: pp.label.to_string(),
        piece_id: pp.piece_id(),
        name: pp.name.clone(),
        x: pp.rect.x,
        y: pp.rect.y,
        width: pp.rect.width,
        height: pp.rect.height,
        rotated: pp.rotated,
    }
}

/// mm² to m², 3 decimals
fn round_area(area_mm2: f64) -> f64 {
    round_to(to_square_meters(area_mm2), 3)
}

/// 1 decimal
fn round_percentage(pct: f64) -> f64 {
    round_to(pct, 1)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate;
    use crate::entities::{Piece, SheetSpec};
    use crate::packers::Algorithm;

    #[test]
    fn rounds_like_the_display() {
        assert_eq!(round_area(1_234_567.0), 1.235);
        assert_eq!(round_percentage(66.666_666), 66.7);
        assert_eq!(round_percentage(100.0), 100.0);
    }

    #[test]
    fn exports_labels_and_summary() {
        let pieces = vec![
            Piece::new(1, 500.0, 500.0, 2).with_name("shelf"),
            Piece::new(2, 250.0, 400.0, 1),
        ];
        let job = Job::new(pieces, SheetSpec::new(1000.0, 1000.0), 0.0, Algorithm::MaxRects).unwrap();
        let layout = calculate(&job).unwrap();
        let ext = export(&job, &layout);

        assert_eq!(ext.algorithm, "maxrects");
        assert_eq!(ext.stats.sheets_used, 1);
        assert_eq!(ext.stats.placed_units, 3);
        assert_eq!(ext.stats.total_used_area, 0.6);
        assert_eq!(ext.stats.utilization, 60.0);
        assert_eq!(ext.stats.waste_percentage, 40.0);

        let labels = ext.sheets[0]
            .placed_pieces
            .iter()
            .map(|pp| pp.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["1_0", "1_1", "2_0"]);
        assert_eq!(ext.sheets[0].placed_pieces[0].name.as_deref(), Some("shelf"));

        assert_eq!(ext.summary.total_units, 3);
        assert_eq!(ext.summary.total_area, 0.6);
        assert_eq!(ext.summary.groups.len(), 2);
        assert_eq!(ext.summary.groups[0].key, "500x500");
    }
}
