use ordered_float::OrderedFloat;

use crate::entities::{PieceUnit, PlacedPiece, Sheet, SheetSpec};
use crate::geometry::Rect;
use crate::packers::{Packer, Placement};
use crate::util::{FPA, assertions};

/// Guillotine packer: every placement cuts its free rectangle edge to edge into a right and a
/// bottom remainder. Units go where they leave the least free area behind.
#[derive(Clone, Copy, Debug, Default)]
pub struct GuillotinePacker;

impl Packer for GuillotinePacker {
    fn open_sheet(&self, id: usize, spec: SheetSpec, kerf: f64) -> Sheet {
        Sheet::with_free_space(id, spec, kerf)
    }

    fn find_placement(&self, sheet: &Sheet, unit: &PieceUnit) -> Option<Placement> {
        find_best_area_fit(&sheet.free_rects, unit, sheet.kerf)
    }

    fn place(&self, sheet: &mut Sheet, unit: &PieceUnit, placement: Placement) {
        let idx = placement
            .free_rect_idx
            .expect("guillotine placements always originate from a free rectangle");
        split_free_rectangle(&mut sheet.free_rects, idx, placement.rect, sheet.kerf);
        sheet.place(PlacedPiece::new(unit, placement.rect, placement.rotated));

        debug_assert!(assertions::free_rects_avoid_pieces(sheet));
    }
}

/// Finds the free rectangle and orientation leaving the least area unused.
/// The first candidate wins exact ties.
pub fn find_best_area_fit(free_rects: &[Rect], unit: &PieceUnit, kerf: f64) -> Option<Placement> {
    free_rects
        .iter()
        .enumerate()
        .flat_map(|(idx, fr)| unit.orientations().map(|o| (idx, fr, o)))
        .filter_map(|(idx, fr, o)| {
            let required_w = o.width + kerf;
            let required_h = o.height + kerf;
            if required_w > fr.width || required_h > fr.height {
                return None;
            }
            let area_fit = OrderedFloat(fr.area() - required_w * required_h);
            let placement = Placement {
                rect: Rect::new(fr.x, fr.y, o.width, o.height),
                rotated: o.rotated,
                free_rect_idx: Some(idx),
            };
            Some((area_fit, placement))
        })
        .min_by_key(|(area_fit, _)| *area_fit)
        .map(|(_, placement)| placement)
}

/// Replaces the free rectangle at `idx` by the part right of the used area (full height)
/// and the part below it (as wide as the used area). Empty remainders, up to rounding, are dropped.
pub fn split_free_rectangle(free_rects: &mut Vec<Rect>, idx: usize, used: Rect, kerf: f64) {
    let fr = free_rects.remove(idx);
    let used_w = used.width + kerf;
    let used_h = used.height + kerf;

    let right_w = fr.width - used_w;
    let bottom_h = fr.height - used_h;

    if FPA(right_w) > FPA(0.0) {
        free_rects.push(Rect::new(fr.x + used_w, fr.y, right_w, fr.height));
    }
    if FPA(bottom_h) > FPA(0.0) {
        free_rects.push(Rect::new(fr.x, fr.y + used_h, used_w, bottom_h));
    }
}
