pub mod distance;
pub mod error;
pub mod point;
pub mod rectangle;

pub use error::{GeometryError, Result};
pub use point::Point;
pub use rectangle::Rectangle;

/// The single scalar type used for every coordinate and measure.
pub type FloatSize = f64;

/// Types implementing this trait can be checked for intersections with `Rhs`
pub trait Intersecting<Rhs = Self> {
    type IntersectionShape;
    /// Returns `true` if `self` intersects with `other`.
    fn intersects(&self, other: &Rhs) -> bool;
    /// Produce the shape of the intersection, if possible
    fn intersection(&self, other: &Rhs) -> Option<Self::IntersectionShape>;
    /// Returns true if `other` is completely contained within the confines of this shape
    fn contains(&self, other: &Rhs) -> bool;
}

/// Can produce a hyper-volume and a margin
pub trait HasVolume {
    /// Product of all side lengths
    fn size(&self) -> FloatSize;

    /// Sum of all edge lengths of the shape
    ///
    /// Used by split heuristics, where it only matters in comparisons.
    fn margin(&self) -> FloatSize;
}

pub trait Extending<Rhs = Self>
where
    Rhs: HasVolume,
{
    /// Produces a new geometry of the given type
    /// that is like `geometry`, but extended to fit `self`
    fn extend(&self, geometry: Rhs) -> Rhs;

    /// Same is extend, but only return how much the volume grew
    fn extend_size(&self, geometry: Rhs) -> FloatSize {
        let original_size = geometry.size();
        let extended = self.extend(geometry);
        extended.size() - original_size
    }
}

pub trait Bounding<const D: usize>: Sized {
    /// Calculate a rectangle that contains all `entries`
    ///
    /// Returns `None` if there are no entries to bound.
    fn bound_all<'a>(entries: impl IntoIterator<Item = &'a Self>) -> Option<Rectangle<D>>
    where
        Self: 'a;
}
