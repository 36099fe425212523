use itertools::Itertools;
use log::error;

use crate::entities::{LayoutResult, Sheet};
use crate::geometry::Rect;
use crate::geometry::geo_traits::{AlmostCollidesWith, AlmostEncloses, Encloses};
use crate::stats::LayoutStats;
use crate::util::FPA;

//Various checks to verify correctness of the state of the engine
//Used in debug_assert!() blocks and tests

/// No free rectangle lies within another one.
pub fn free_rects_are_maximal(free_rects: &[Rect]) -> bool {
    for (i, j) in (0..free_rects.len()).tuple_combinations() {
        let (a, b) = (&free_rects[i], &free_rects[j]);
        if a.encloses(b) || b.encloses(a) {
            error!("free rectangle {a:?} ({i}) and {b:?} ({j}) are nested");
            return false;
        }
    }
    true
}

/// No free rectangle overlaps the kerf-expanded footprint of a placed piece,
/// and every free rectangle lies within the sheet, both up to rounding.
pub fn free_rects_avoid_pieces(sheet: &Sheet) -> bool {
    let bounds = sheet.bounds();
    for fr in &sheet.free_rects {
        if !bounds.almost_encloses(fr) {
            error!("free rectangle {fr:?} exceeds sheet {}", sheet.id);
            return false;
        }
        if let Some(fp) = sheet.footprints().find(|fp| fp.almost_collides_with(fr)) {
            error!("free rectangle {fr:?} overlaps footprint {fp:?} on sheet {}", sheet.id);
            return false;
        }
    }
    true
}

/// Every sheet holds at least one piece, ids are 1-based and consecutive,
/// and no sheet has overlapping or out-of-bounds pieces.
pub fn layout_is_feasible(layout: &LayoutResult) -> bool {
    layout.sheets.iter().enumerate().all(|(i, sheet)| {
        let ok = sheet.id == i + 1 && !sheet.is_empty() && sheet.is_feasible();
        if !ok {
            error!("sheet {} (position {i}) is not feasible", sheet.id);
        }
        ok
    })
}

/// Utilization lies within [0, 100] and complements the waste percentage.
pub fn stats_are_consistent(stats: &LayoutStats) -> bool {
    if stats.sheets_used == 0 {
        return stats.utilization == 0.0 && stats.waste_percentage == 0.0;
    }
    let in_range = FPA(stats.utilization) >= FPA(0.0) && FPA(stats.utilization) <= FPA(100.0);
    let complementary = FPA(stats.utilization + stats.waste_percentage) == FPA(100.0);
    let sheets_match = stats.per_sheet.len() == stats.sheets_used;
    in_range && complementary && sheets_match
}
