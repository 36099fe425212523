use ordered_float::OrderedFloat;

use crate::entities::{PieceUnit, PlacedPiece, Sheet, SheetSpec};
use crate::geometry::Rect;
use crate::geometry::geo_traits::{CollidesWith, Encloses};
use crate::packers::{Packer, Placement};
use crate::util::{FPA, assertions};

/// Maximal-rectangles packer: keeps every maximal free rectangle of the sheet,
/// places units by best short side fit.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxRectsPacker;

impl Packer for MaxRectsPacker {
    fn open_sheet(&self, id: usize, spec: SheetSpec, kerf: f64) -> Sheet {
        Sheet::with_free_space(id, spec, kerf)
    }

    fn find_placement(&self, sheet: &Sheet, unit: &PieceUnit) -> Option<Placement> {
        find_best_rect(&sheet.free_rects, unit, sheet.kerf)
    }

    fn place(&self, sheet: &mut Sheet, unit: &PieceUnit, placement: Placement) {
        let split = update_free_rectangles(&sheet.free_rects, placement.rect, sheet.kerf);
        sheet.free_rects = prune_free_rectangles(split);
        sheet.place(PlacedPiece::new(unit, placement.rect, placement.rotated));

        debug_assert!(assertions::free_rects_are_maximal(&sheet.free_rects));
        debug_assert!(assertions::free_rects_avoid_pieces(sheet));
    }
}

/// Finds the free rectangle and orientation leaving the smallest short side leftover,
/// with the long side leftover as tiebreak. The first candidate wins exact ties.
pub fn find_best_rect(free_rects: &[Rect], unit: &PieceUnit, kerf: f64) -> Option<Placement> {
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
            let leftover_w = fr.width - required_w;
            let leftover_h = fr.height - required_h;
            let short_side_fit = OrderedFloat(f64::min(leftover_w, leftover_h));
            let long_side_fit = OrderedFloat(f64::max(leftover_w, leftover_h));
            let placement = Placement {
                rect: Rect::new(fr.x, fr.y, o.width, o.height),
                rotated: o.rotated,
                free_rect_idx: Some(idx),
            };
            Some(((short_side_fit, long_side_fit), placement))
        })
        // min_by_key keeps the first of equally scored candidates
        .min_by_key(|(score, _)| *score)
        .map(|(_, placement)| placement)
}

/// Splits every free rectangle overlapped by `used` (grown by the kerf) into the up to four
/// maximal slices left, right, above and below it. Untouched rectangles are kept as is.
/// Slices thinner than the rounding tolerance are not kept.
pub fn update_free_rectangles(free_rects: &[Rect], used: Rect, kerf: f64) -> Vec<Rect> {
    let used = used.with_kerf(kerf);
    let mut split = Vec::with_capacity(free_rects.len() + 4);

    for fr in free_rects {
        if !fr.collides_with(&used) {
            split.push(*fr);
            continue;
        }
        if FPA(used.x) > FPA(fr.x) && used.x < fr.x_max() {
            split.push(Rect::new(fr.x, fr.y, used.x - fr.x, fr.height));
        }
        if FPA(used.x_max()) < FPA(fr.x_max()) {
            split.push(Rect::new(
                used.x_max(),
                fr.y,
                fr.x_max() - used.x_max(),
                fr.height,
            ));
        }
        if FPA(used.y) > FPA(fr.y) && used.y < fr.y_max() {
            split.push(Rect::new(fr.x, fr.y, fr.width, used.y - fr.y));
        }
        if FPA(used.y_max()) < FPA(fr.y_max()) {
            split.push(Rect::new(
                fr.x,
                used.y_max(),
                fr.width,
                fr.y_max() - used.y_max(),
            ));
        }
    }
    split
}

/// Removes every free rectangle enclosed by another one.
/// Of a group of identical rectangles only the first survives.
pub fn prune_free_rectangles(free_rects: Vec<Rect>) -> Vec<Rect> {
    let is_redundant = |i: usize, fr: &Rect| {
        free_rects
            .iter()
            .enumerate()
            .any(|(j, other)| j != i && other.encloses(fr) && (other != fr || j < i))
    };
    free_rects
        .iter()
        .enumerate()
        .filter(|&(i, fr)| !is_redundant(i, fr))
        .map(|(_, fr)| *fr)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Piece;

    fn unit(width: f64, height: f64) -> PieceUnit {
        PieceUnit::new(0, &Piece::new(1, width, height, 1), Some(0))
    }

    #[test]
    fn short_side_fit_prefers_tightest_orientation() {
        let free = [Rect::new(0.0, 0.0, 1000.0, 600.0)];
        // upright leaves (697, 197), rotated leaves (597, 297)
        let p = find_best_rect(&free, &unit(300.0, 400.0), 3.0).unwrap();
        assert_eq!(p.rect, Rect::new(0.0, 0.0, 300.0, 400.0));
        assert!(!p.rotated);

        let p = find_best_rect(&free, &unit(580.0, 100.0), 0.0).unwrap();
        // rotated leaves (900, 20) which beats upright (420, 500)
        assert!(p.rotated);
        assert_eq!(p.rect, Rect::new(0.0, 0.0, 100.0, 580.0));
    }

    #[test]
    fn long_side_breaks_ties() {
        let free = [
            Rect::new(0.0, 0.0, 110.0, 500.0),
            Rect::new(200.0, 0.0, 110.0, 300.0),
        ];
        let p = find_best_rect(&free, &unit(100.0, 100.0), 0.0).unwrap();
        assert_eq!(p.free_rect_idx, Some(1));
    }

    #[test]
    fn exact_ties_keep_first_candidate() {
        let free = [Rect::new(0.0, 0.0, 200.0, 200.0), Rect::new(300.0, 0.0, 200.0, 200.0)];
        let p = find_best_rect(&free, &unit(100.0, 100.0), 0.0).unwrap();
        assert_eq!(p.free_rect_idx, Some(0));
        assert!(!p.rotated);
    }

    #[test]
    fn kerf_must_fit_inside_the_free_rect() {
        let free = [Rect::new(0.0, 0.0, 100.0, 100.0)];
        assert!(find_best_rect(&free, &unit(100.0, 50.0), 0.0).is_some());
        assert!(find_best_rect(&free, &unit(100.0, 50.0), 0.5).is_none());
    }

    #[test]
    fn split_with_kerf_matches_hand_computed_set() {
        let sheet = Rect::new(0.0, 0.0, 1000.0, 600.0);
        let after_first = prune_free_rectangles(update_free_rectangles(
            &[sheet],
            Rect::new(0.0, 0.0, 300.0, 400.0),
            3.0,
        ));
        assert_eq!(
            after_first,
            vec![
                Rect::new(303.0, 0.0, 697.0, 600.0),
                Rect::new(0.0, 403.0, 1000.0, 197.0),
            ]
        );

        let split = update_free_rectangles(&after_first, Rect::new(0.0, 403.0, 700.0, 150.0), 3.0);
        assert_eq!(
            split,
            vec![
                Rect::new(703.0, 0.0, 297.0, 600.0),
                Rect::new(303.0, 0.0, 697.0, 403.0),
                Rect::new(303.0, 556.0, 697.0, 44.0),
                Rect::new(703.0, 403.0, 297.0, 197.0),
                Rect::new(0.0, 556.0, 1000.0, 44.0),
            ]
        );
        assert_eq!(
            prune_free_rectangles(split),
            vec![
                Rect::new(703.0, 0.0, 297.0, 600.0),
                Rect::new(303.0, 0.0, 697.0, 403.0),
                Rect::new(0.0, 556.0, 1000.0, 44.0),
            ]
        );
    }

    #[test]
    fn interior_placement_yields_four_slices() {
        let split = update_free_rectangles(
            &[Rect::new(0.0, 0.0, 100.0, 100.0)],
            Rect::new(40.0, 30.0, 10.0, 20.0),
            2.0,
        );
        assert_eq!(
            split,
            vec![
                Rect::new(0.0, 0.0, 40.0, 100.0),
                Rect::new(52.0, 0.0, 48.0, 100.0),
                Rect::new(0.0, 0.0, 100.0, 30.0),
                Rect::new(0.0, 52.0, 100.0, 48.0),
            ]
        );
    }

    #[test]
    fn untouched_free_rects_are_kept() {
        let free = [Rect::new(0.0, 0.0, 50.0, 50.0), Rect::new(60.0, 0.0, 40.0, 50.0)];
        let split = update_free_rectangles(&free, Rect::new(0.0, 0.0, 50.0, 10.0), 0.0);
        assert_eq!(split[0], Rect::new(0.0, 10.0, 50.0, 40.0));
        assert_eq!(split[1], Rect::new(60.0, 0.0, 40.0, 50.0));
    }

    #[test]
    fn pruning_keeps_one_of_duplicates() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = Rect::new(1.0, 1.0, 2.0, 2.0);
        let other = Rect::new(20.0, 0.0, 5.0, 5.0);
        let pruned = prune_free_rectangles(vec![inner, a, other, a]);
        assert_eq!(pruned, vec![a, other]);
    }

    #[test]
    fn decimal_slices_are_checked_with_tolerance() {
        let mut sheet = MaxRectsPacker.open_sheet(1, SheetSpec::new(610.3, 407.7), 3.8);
        // only fits upright
        let u = unit(500.0, 102.8);
        let p = find_best_rect(&sheet.free_rects, &u, sheet.kerf).unwrap();
        MaxRectsPacker.place(&mut sheet, &u, p);

        assert_eq!(sheet.free_rects.len(), 2);
        assert!(sheet.free_rects.iter().any(|fr| fr.y_max() > 407.7));
        assert!(assertions::free_rects_avoid_pieces(&sheet));
    }

    #[test]
    fn rounding_slivers_are_dropped() {
        let fr = Rect::new(0.0, 0.0, 0.8, 10.0);
        // 0.1 + 0.7 ends just short of 0.8
        let split = update_free_rectangles(&[fr], Rect::new(0.1, 0.0, 0.7, 10.0), 0.0);
        assert_eq!(split, vec![Rect::new(0.0, 0.0, 0.1, 10.0)]);
    }
}
