use crate::entities::{PieceUnit, PlacedPiece, Sheet, SheetSpec};
use crate::geometry::Rect;
use crate::geometry::geo_traits::CollidesWith;
use crate::packers::{Packer, Placement};

/// Bottom-left packer: searches integer grid positions for the lowest, then leftmost spot
/// where a unit's kerf-expanded footprint clears every piece already on the sheet.
/// Keeps no free-space bookkeeping.
#[derive(Clone, Copy, Debug, Default)]
pub struct BottomLeftPacker;

impl Packer for BottomLeftPacker {
    fn open_sheet(&self, id: usize, spec: SheetSpec, kerf: f64) -> Sheet {
        Sheet::new(id, spec, kerf)
    }

    fn find_placement(&self, sheet: &Sheet, unit: &PieceUnit) -> Option<Placement> {
        find_bottom_left_position(sheet, unit)
    }

    fn place(&self, sheet: &mut Sheet, unit: &PieceUnit, placement: Placement) {
        sheet.place(PlacedPiece::new(unit, placement.rect, placement.rotated));
    }
}

/// Returns the feasible integer position with the smallest `y`, then the smallest `x`,
/// over both orientations of `unit`. On a tie between orientations the upright one is kept.
///
/// Equivalent to testing every grid position in row-major order. A candidate colliding with
/// a footprint keeps colliding until its left edge passes that footprint's right edge,
/// so the scan jumps there directly.
pub fn find_bottom_left_position(sheet: &Sheet, unit: &PieceUnit) -> Option<Placement> {
    let kerf = sheet.kerf;
    let footprints = sheet.footprints().collect::<Vec<_>>();
    let mut best: Option<Placement> = None;

    for o in unit.orientations() {
        let required_w = o.width + kerf;
        let required_h = o.height + kerf;
        if required_w > sheet.spec.width || required_h > sheet.spec.height {
            continue;
        }
        let max_x = sheet.spec.width - required_w;
        let max_y = sheet.spec.height - required_h;

        let mut y = 0.0;
        'rows: while y <= max_y {
            if best.is_some_and(|b| y > b.rect.y) {
                break;
            }
            let mut x = 0.0;
            while x <= max_x {
                let candidate = Rect::new(x, y, required_w, required_h);
                match footprints.iter().find(|fp| candidate.collides_with(*fp)) {
                    Some(blocker) => x = f64::max(x + 1.0, blocker.x_max().ceil()),
                    None => {
                        let improves = best.is_none_or(|b| (y, x) < (b.rect.y, b.rect.x));
                        if improves {
                            best = Some(Placement {
                                rect: Rect::new(x, y, o.width, o.height),
                                rotated: o.rotated,
                                free_rect_idx: None,
                            });
                        }
                        // the leftmost feasible position of this row is found
                        break 'rows;
                    }
                }
            }
            y += 1.0;
        }
    }
    best
}
