use std::cmp::Reverse;

use ordered_float::OrderedFloat;

use crate::entities::{PieceUnit, Sheet, SheetSpec};
use crate::packers::{BottomLeftPacker, Packer, Placement};

/// Bottom-left placement over a queue sorted by decreasing unit area.
#[derive(Clone, Copy, Debug, Default)]
pub struct BestFitPacker;

impl Packer for BestFitPacker {
    fn open_sheet(&self, id: usize, spec: SheetSpec, kerf: f64) -> Sheet {
        BottomLeftPacker.open_sheet(id, spec, kerf)
    }

    fn find_placement(&self, sheet: &Sheet, unit: &PieceUnit) -> Option<Placement> {
        BottomLeftPacker.find_placement(sheet, unit)
    }

    fn place(&self, sheet: &mut Sheet, unit: &PieceUnit, placement: Placement) {
        BottomLeftPacker.place(sheet, unit, placement)
    }

    /// Largest units first. Units of equal area keep their relative order.
    fn order_queue(&self, queue: &mut Vec<PieceUnit>) {
        queue.sort_by_key(|u| Reverse(OrderedFloat(u.area())));
    }
}
