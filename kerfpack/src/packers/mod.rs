use std::fmt::{Display, Formatter};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::entities::{PieceUnit, Sheet, SheetSpec};
use crate::geometry::Rect;

mod best_fit;
mod bottom_left;
mod guillotine;
mod maxrects;

#[doc(inline)]
pub use best_fit::BestFitPacker;
#[doc(inline)]
pub use bottom_left::{BottomLeftPacker, find_bottom_left_position};
#[doc(inline)]
pub use guillotine::{GuillotinePacker, find_best_area_fit, split_free_rectangle};
#[doc(inline)]
pub use maxrects::{MaxRectsPacker, find_best_rect, prune_free_rectangles, update_free_rectangles};

/// The placement algorithms the engine offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Maximal free rectangles, best short side fit
    #[default]
    #[serde(rename = "maxrects")]
    MaxRects,
    /// Guillotine splits, best area fit
    Guillotine,
    /// Integer grid search for the lowest, then leftmost position
    BottomLeft,
    /// Bottom-left search over units sorted by decreasing area
    BestFit,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::MaxRects,
        Algorithm::Guillotine,
        Algorithm::BottomLeft,
        Algorithm::BestFit,
    ];

    pub fn selector(&self) -> &'static str {
        match self {
            Algorithm::MaxRects => "maxrects",
            Algorithm::Guillotine => "guillotine",
            Algorithm::BottomLeft => "bottom_left",
            Algorithm::BestFit => "best_fit",
        }
    }

    /// Resolves a selector string. Unknown selectors fall back to [`Algorithm::MaxRects`].
    pub fn from_selector(selector: &str) -> Algorithm {
        match Algorithm::ALL
            .into_iter()
            .find(|a| a.selector() == selector.trim())
        {
            Some(algorithm) => algorithm,
            None => {
                warn!("unknown algorithm selector {selector:?}, falling back to maxrects");
                Algorithm::MaxRects
            }
        }
    }

    /// Whether a piece with quantity N enters the unit queue as N units (true)
    /// or as a single unit regardless of its quantity (false).
    pub fn expands_quantities(&self) -> bool {
        matches!(self, Algorithm::MaxRects)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.selector())
    }
}

/// Where and in which orientation a unit would be placed on a sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Area covered by the piece, without kerf
    pub rect: Rect,
    pub rotated: bool,
    /// Index of the free rectangle the placement was found in, for free-space packers
    pub free_rect_idx: Option<usize>,
}

/// A placement strategy operating on one sheet at a time.
///
/// The allocation loop opens sheets through [`Packer::open_sheet`], asks for a position with
/// [`Packer::find_placement`] and commits it with [`Packer::place`].
pub trait Packer {
    fn open_sheet(&self, id: usize, spec: SheetSpec, kerf: f64) -> Sheet;

    /// Searches the sheet for a position for `unit`, `None` if it does not fit in its current state.
    fn find_placement(&self, sheet: &Sheet, unit: &PieceUnit) -> Option<Placement>;

    /// Places `unit` on the sheet and updates the sheet's free space accordingly.
    fn place(&self, sheet: &mut Sheet, unit: &PieceUnit, placement: Placement);

    /// Reorders the unit queue once, before the first sheet is opened.
    fn order_queue(&self, _queue: &mut Vec<PieceUnit>) {}
}
