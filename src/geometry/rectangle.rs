use super::{error::*, *};
use approx::AbsDiffEq;
use itertools::{izip, Itertools};
use std::fmt;

/// A closed, axis-aligned box `[low_1, high_1] x ... x [low_D, high_D]`
///
/// Every way of constructing a rectangle guarantees `low_i <= high_i` in all dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle<const D: usize> {
    low_corner: Point<D>,
    high_corner: Point<D>,
}

impl<const D: usize> Rectangle<D> {
    /// Caller must guarantee `low_corner <= high_corner`.
    pub(crate) fn new_unchecked(low_corner: Point<D>, high_corner: Point<D>) -> Self {
        Rectangle {
            low_corner,
            high_corner,
        }
    }

    /// Creates a rectangle spanning `lengths` from its most negative `corner`
    ///
    /// # Errors
    ///
    /// Fails with [InvalidLength](GeometryError::InvalidLength), carrying the first
    /// offending value, if any length is not strictly positive.
    /// Fails with [InvertedCorners](GeometryError::InvertedCorners) if `corner` has a
    /// coordinate that does not end up below the opposite corner (i.e. NaN).
    pub fn from_corner_and_lengths(corner: Point<D>, lengths: [FloatSize; D]) -> Result<Self> {
        if let Some(&length) = lengths.iter().find(|length| !(**length > 0.0)) {
            log::debug!("Rejecting rectangle at {corner} with side length {length}");
            return InvalidLengthSnafu { length }.fail();
        }
        let mut high_corner = corner;
        for (high, length) in high_corner.coords.iter_mut().zip(lengths.iter()) {
            *high += length;
        }
        Rectangle::from_corners(corner, high_corner)
    }

    /// Creates a rectangle from its two extreme corners
    ///
    /// Sides of length zero are allowed.
    ///
    /// # Errors
    ///
    /// Fails with [InvertedCorners](GeometryError::InvertedCorners) if `low` exceeds `high`
    /// in any dimension.
    pub fn from_corners(low: Point<D>, high: Point<D>) -> Result<Self> {
        for (dimension, (&l, &h)) in low.coords.iter().zip(high.coords.iter()).enumerate() {
            if !(l <= h) {
                log::debug!("Rejecting rectangle with corners {low} and {high}");
                return InvertedCornersSnafu {
                    dimension,
                    low: l,
                    high: h,
                }
                .fail();
            }
        }
        Ok(Rectangle {
            low_corner: low,
            high_corner: high,
        })
    }

    pub fn low(&self) -> &Point<D> {
        &self.low_corner
    }

    pub fn high(&self) -> &Point<D> {
        &self.high_corner
    }

    pub fn center(&self) -> Point<D> {
        (self.low_corner + self.high_corner) * 0.5
    }

    /// # Panics
    ///
    /// If `dimension >= D`.
    pub fn side_length(&self, dimension: usize) -> FloatSize {
        self.high_corner[dimension] - self.low_corner[dimension]
    }

    fn side_lengths(&self) -> impl Iterator<Item = FloatSize> + '_ {
        self.low_corner
            .coords
            .iter()
            .zip(self.high_corner.coords.iter())
            .map(|(low, high)| high - low)
    }

    /// The hyper-volume, i.e. the product of all side lengths
    pub fn size(&self) -> FloatSize {
        self.side_lengths().product()
    }

    /// The sum of the lengths of all edges
    pub fn margin(&self) -> FloatSize {
        // A D-dimensional box has D * 2^(D-1) edges,
        // 2^(D-1) of which are parallel to each axis.
        let parallel_edges = FloatSize::powi(2.0, D as i32 - 1);
        parallel_edges * self.side_lengths().sum::<FloatSize>()
    }

    /// Returns `true` if `point` lies inside or on the boundary of `self`.
    pub fn contains_point(&self, point: &Point<D>) -> bool {
        izip!(
            self.low_corner.coords.iter(),
            self.high_corner.coords.iter(),
            point.coords.iter()
        )
        .all(|(low, high, p)| low <= p && p <= high)
    }

    /// Returns `true` if `other` lies completely inside `self`, boundaries included.
    pub fn contains_rect(&self, other: &Rectangle<D>) -> bool {
        // both satisfy low <= high,
        // so checking the outer ends is sufficient
        izip!(
            self.low_corner.coords.iter(),
            self.high_corner.coords.iter(),
            other.low_corner.coords.iter(),
            other.high_corner.coords.iter()
        )
        .all(|(low1, high1, low2, high2)| low1 <= low2 && high2 <= high1)
    }

    /// Grows `self` until it also covers `other`.
    pub fn enlarge_in_place(&mut self, other: &Rectangle<D>) {
        for (low1, high1, low2, high2) in izip!(
            self.low_corner.coords.iter_mut(),
            self.high_corner.coords.iter_mut(),
            other.low_corner.coords.iter(),
            other.high_corner.coords.iter()
        ) {
            if *low1 > *low2 {
                *low1 = *low2;
            }
            if *high1 < *high2 {
                *high1 = *high2;
            }
        }
    }

    /// The smallest rectangle containing both `self` and `other`
    #[must_use]
    pub fn bounding_box(&self, other: &Rectangle<D>) -> Rectangle<D> {
        let mut r = *self;
        r.enlarge_in_place(other);
        r
    }

    /// How much the volume of `self` would grow, if it were enlarged to cover `other`
    pub fn enlargement(&self, other: &Rectangle<D>) -> FloatSize {
        self.bounding_box(other).size() - self.size()
    }

    pub fn assert_legal(&self) {
        assert!(
            self.low_corner <= self.high_corner,
            "Rectangle {} is illegal!",
            self
        );
    }
}

/// Same as [Intersecting::intersects] for two rectangles
pub fn intersects<const D: usize>(r1: &Rectangle<D>, r2: &Rectangle<D>) -> bool {
    r1.intersects(r2)
}

/// Same as [Rectangle::bounding_box]
pub fn bounding_box<const D: usize>(r1: &Rectangle<D>, r2: &Rectangle<D>) -> Rectangle<D> {
    r1.bounding_box(r2)
}

impl<const D: usize> fmt::Display for Rectangle<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sides = self
            .low_corner
            .coords
            .iter()
            .zip(self.high_corner.coords.iter())
            .map(|(low, high)| format!("[{low:.2}, {high:.2}]"))
            .join("x");
        write!(f, "{sides}")
    }
}

impl<const D: usize> AbsDiffEq for Rectangle<D> {
    type Epsilon = FloatSize;

    fn default_epsilon() -> Self::Epsilon {
        FloatSize::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.low_corner.abs_diff_eq(&other.low_corner, epsilon)
            && self.high_corner.abs_diff_eq(&other.high_corner, epsilon)
    }
}

impl<const D: usize> HasVolume for Rectangle<D> {
    fn size(&self) -> FloatSize {
        Rectangle::size(self)
    }

    fn margin(&self) -> FloatSize {
        Rectangle::margin(self)
    }
}

impl<const D: usize> Intersecting<Point<D>> for Rectangle<D> {
    type IntersectionShape = Point<D>;

    fn intersects(&self, other: &Point<D>) -> bool {
        self.contains_point(other)
    }

    fn intersection(&self, other: &Point<D>) -> Option<Self::IntersectionShape> {
        if self.contains_point(other) {
            Some(*other)
        } else {
            None
        }
    }

    fn contains(&self, other: &Point<D>) -> bool {
        self.contains_point(other)
    }
}

impl<const D: usize> Intersecting for Rectangle<D> {
    type IntersectionShape = Rectangle<D>;

    /// Touching rectangles do *not* intersect.
    fn intersects(&self, other: &Rectangle<D>) -> bool {
        // There are only two cases of non-overlap per dimension:
        //
        //     1. a1------b1
        //                    a2------b2
        //
        //     2.             a1------b1
        //        a2------b2
        izip!(
            self.low_corner.coords.iter(),
            self.high_corner.coords.iter(),
            other.low_corner.coords.iter(),
            other.high_corner.coords.iter()
        )
        .all(|(low1, high1, low2, high2)| !(high2 <= low1 || high1 <= low2))
    }

    fn intersection(&self, other: &Rectangle<D>) -> Option<Self::IntersectionShape> {
        if !self.intersects(other) {
            // Rectangles do not overlap, or overlap has a volume of zero
            return None;
        }
        let mut low_corner = self.low_corner;
        let mut high_corner = self.high_corner;
        for (low, high, other_low, other_high) in izip!(
            low_corner.coords.iter_mut(),
            high_corner.coords.iter_mut(),
            other.low_corner.coords.iter(),
            other.high_corner.coords.iter()
        ) {
            *low = low.max(*other_low);
            *high = high.min(*other_high);
        }
        let r = Rectangle {
            low_corner,
            high_corner,
        };
        if cfg!(test) {
            r.assert_legal();
        }
        Some(r)
    }

    fn contains(&self, other: &Rectangle<D>) -> bool {
        self.contains_rect(other)
    }
}

impl<const D: usize> Extending<Rectangle<D>> for Rectangle<D> {
    fn extend(&self, geometry: Rectangle<D>) -> Rectangle<D> {
        geometry.bounding_box(self)
    }
}

impl<const D: usize> Bounding<D> for Rectangle<D> {
    fn bound_all<'a>(entries: impl IntoIterator<Item = &'a Self>) -> Option<Rectangle<D>>
    where
        Self: 'a,
    {
        let mut entries = entries.into_iter();
        let Some(first) = entries.next() else {
            log::trace!("Asked to bound an empty set of rectangles");
            return None;
        };
        let mut r = *first;
        for other in entries {
            r.enlarge_in_place(other);
        }
        if cfg!(test) {
            r.assert_legal();
        }
        Some(r)
    }
}
