/// Trait for types that can detect collisions between `Self` and `T`.
///
/// A collision requires an overlap with positive area: shapes that merely touch along an edge
/// or in a corner do not collide.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can fully enclose a `T`, boundary included.
pub trait Encloses<T> {
    fn encloses(&self, other: &T) -> bool;
}

/// [`CollidesWith`] with floating point tolerance: overlaps within the [`FPA`](crate::util::FPA)
/// tolerance do not count as a collision.
pub trait AlmostCollidesWith<T> {
    fn almost_collides_with(&self, other: &T) -> bool;
}

/// [`Encloses`] with floating point tolerance: edges poking out by no more than the
/// [`FPA`](crate::util::FPA) tolerance still count as enclosed.
pub trait AlmostEncloses<T> {
    fn almost_encloses(&self, other: &T) -> bool;
}
