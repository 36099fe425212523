use crate::geometry::geo_traits::{AlmostCollidesWith, AlmostEncloses, CollidesWith, Encloses};
use crate::util::FPA;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in sheet-local coordinates.
/// `(x, y)` is the top-left corner, `x` grows to the right and `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a full sheet, anchored at the origin.
    pub fn sheet(width: f64, height: f64) -> Self {
        Rect::new(0.0, 0.0, width, height)
    }

    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns a copy of `self` grown by `kerf` on its right and bottom side only.
    /// The top-left corner stays put: the blade margin is reserved after a piece, never before it.
    pub fn with_kerf(self, kerf: f64) -> Self {
        Rect {
            width: self.width + kerf,
            height: self.height + kerf,
            ..self
        }
    }

    /// Returns the same rectangle mirrored over the main diagonal (x <-> y, width <-> height).
    pub fn transposed(self) -> Self {
        Rect::new(self.y, self.x, self.height, self.width)
    }
}

impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        !(self.x >= other.x_max()
            || self.x_max() <= other.x
            || self.y >= other.y_max()
            || self.y_max() <= other.y)
    }
}

impl Encloses<Rect> for Rect {
    #[inline(always)]
    fn encloses(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.x_max() >= other.x_max()
            && self.y_max() >= other.y_max()
    }
}

impl AlmostCollidesWith<Rect> for Rect {
    #[inline(always)]
    fn almost_collides_with(&self, other: &Rect) -> bool {
        FPA(f64::max(self.x, other.x)) < FPA(f64::min(self.x_max(), other.x_max()))
            && FPA(f64::max(self.y, other.y)) < FPA(f64::min(self.y_max(), other.y_max()))
    }
}

impl AlmostEncloses<Rect> for Rect {
    #[inline(always)]
    fn almost_encloses(&self, other: &Rect) -> bool {
        FPA(self.x) <= FPA(other.x)
            && FPA(self.y) <= FPA(other.y)
            && FPA(self.x_max()) >= FPA(other.x_max())
            && FPA(self.y_max()) >= FPA(other.y_max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 5.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 5.0);
        let corner = Rect::new(10.0, 10.0, 1.0, 1.0);
        assert!(!a.collides_with(&right));
        assert!(!a.collides_with(&below));
        assert!(!a.collides_with(&corner));
    }

    #[test]
    fn overlap_collides_both_ways() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(a.collides_with(&b));
        assert!(b.collides_with(&a));
    }

    #[test]
    fn enclosure_is_boundary_inclusive() {
        let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(outer.encloses(&outer));
        assert!(outer.encloses(&Rect::new(0.0, 5.0, 10.0, 5.0)));
        assert!(!outer.encloses(&Rect::new(0.0, 5.0, 10.0, 5.1)));
        assert!(!Rect::new(1.0, 1.0, 2.0, 2.0).encloses(&outer));
    }

    #[test]
    fn rounding_drift_is_tolerated() {
        let sheet = Rect::sheet(610.3, 407.7);
        // rounding drift pushes the far edges just past the sheet
        let drifted = Rect::new(169.6 + 1e-12, 249.6 + 1e-12, 160.5, 158.1);
        assert!(!sheet.encloses(&drifted));
        assert!(sheet.almost_encloses(&drifted));
        assert!(!sheet.almost_encloses(&Rect::new(500.0, 300.0, 110.4, 107.7)));

        let left = Rect::new(0.0, 0.0, 3.2 + 0.1, 10.0);
        let sliver = Rect::new(3.3 - 1e-12, 0.0, 5.0, 10.0);
        assert!(left.collides_with(&sliver));
        assert!(!left.almost_collides_with(&sliver));
        assert!(left.almost_collides_with(&Rect::new(3.2, 0.0, 5.0, 10.0)));
    }

    #[test]
    fn kerf_grows_right_and_bottom_only() {
        let r = Rect::new(4.0, 6.0, 10.0, 20.0).with_kerf(3.0);
        assert_eq!(r, Rect::new(4.0, 6.0, 13.0, 23.0));
    }

    #[test]
    fn transposing_swaps_axes() {
        let r = Rect::new(1.0, 2.0, 30.0, 40.0);
        assert_eq!(r.transposed(), Rect::new(2.0, 1.0, 40.0, 30.0));
        assert_eq!(r.transposed().transposed(), r);
    }
}
