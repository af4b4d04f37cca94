use super::{error::*, *};
use approx::{abs_diff_eq, AbsDiffEq};
use itertools::{izip, Itertools};
use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Index, Mul, Neg, Sub},
};

/// A location in `D`-dimensional Euclidean space
///
/// Points are plain values: every operation produces a new point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const D: usize> {
    pub coords: [FloatSize; D],
}

impl<const D: usize> Point<D> {
    pub const fn new(coords: [FloatSize; D]) -> Self {
        Point { coords }
    }

    /// The point with all coordinates at zero
    pub const fn origin() -> Self {
        Point { coords: [0.0; D] }
    }

    pub const fn dimensions(&self) -> usize {
        D
    }

    pub fn coords(&self) -> &[FloatSize; D] {
        &self.coords
    }

    /// Euclidean distance between `self` and `other`
    pub fn dist(&self, other: &Self) -> FloatSize {
        let diff = *self - *other;
        diff.dot(&diff).sqrt()
    }

    /// Inner product
    pub fn dot(&self, other: &Self) -> FloatSize {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Multiplies every coordinate with `factor`
    pub fn scale(&self, factor: FloatSize) -> Self {
        Point {
            coords: self.coords.map(|c| factor * c),
        }
    }

    pub fn norm(&self) -> FloatSize {
        self.dot(self).sqrt()
    }

    /// The vector of length one pointing in the same direction as `self`
    ///
    /// Coordinates are divided by the largest absolute coordinate first,
    /// so very large and very small (even subnormal) vectors still normalise.
    ///
    /// # Errors
    ///
    /// Fails with [ZeroNorm](GeometryError::ZeroNorm) if `self` has no direction,
    /// i.e. it is the origin.
    /// Fails with [NonFiniteVector](GeometryError::NonFiniteVector) if any coordinate
    /// is infinite or NaN.
    pub fn unit(&self) -> Result<Self> {
        if !self.coords.iter().all(|c| c.is_finite()) {
            log::debug!("Refusing to normalise {self}, it is not finite");
            return NonFiniteVectorSnafu.fail();
        }
        let largest = self.coords.iter().fold(0.0, |acc: FloatSize, c| acc.max(c.abs()));
        if largest == 0.0 {
            log::debug!("Refusing to normalise {self}, it has no direction");
            return ZeroNormSnafu.fail();
        }
        let rescaled = Point {
            coords: self.coords.map(|c| c / largest),
        };
        Ok(rescaled.scale(1.0 / rescaled.norm()))
    }

    /// Projects `self` in the direction of `direction`
    ///
    /// The result is `unit(direction) * dot(self, direction)`.
    ///
    /// # Errors
    ///
    /// Fails like [unit](Point::unit) on `direction`.
    pub fn proj(&self, direction: &Self) -> Result<Self> {
        Ok(direction.unit()?.scale(self.dot(direction)))
    }

    /// Produces the cube centred at `self` with sides of length `2 * tolerance`
    ///
    /// A `tolerance` of zero produces a degenerate rectangle containing only `self`.
    ///
    /// # Errors
    ///
    /// Fails with [InvalidTolerance](GeometryError::InvalidTolerance) if `tolerance`
    /// is negative or not finite, as the result would not be a legal rectangle.
    /// Fails with [InvertedCorners](GeometryError::InvertedCorners) if `self` has a NaN coordinate.
    pub fn to_rect(&self, tolerance: FloatSize) -> Result<Rectangle<D>> {
        if !(tolerance.is_finite() && tolerance >= 0.0) {
            log::debug!("Refusing to build a query box around {self} with tolerance {tolerance}");
            return InvalidToleranceSnafu { tolerance }.fail();
        }
        let low_corner = Point {
            coords: self.coords.map(|c| c - tolerance),
        };
        let high_corner = Point {
            coords: self.coords.map(|c| c + tolerance),
        };
        Rectangle::from_corners(low_corner, high_corner)
    }
}

impl<const D: usize> From<[FloatSize; D]> for Point<D> {
    fn from(coords: [FloatSize; D]) -> Self {
        Point { coords }
    }
}

impl<const D: usize> Index<usize> for Point<D> {
    type Output = FloatSize;

    fn index(&self, dimension: usize) -> &Self::Output {
        &self.coords[dimension]
    }
}

impl<const D: usize> Add for Point<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut sum = self;
        for (s, r) in sum.coords.iter_mut().zip(rhs.coords.iter()) {
            *s += r;
        }
        sum
    }
}

impl<const D: usize> Sub for Point<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut diff = self;
        for (d, r) in diff.coords.iter_mut().zip(rhs.coords.iter()) {
            *d -= r;
        }
        diff
    }
}

impl<const D: usize> Mul<FloatSize> for Point<D> {
    type Output = Self;

    fn mul(self, rhs: FloatSize) -> Self::Output {
        self.scale(rhs)
    }
}

impl<const D: usize> Neg for Point<D> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

/// Component-wise order
///
/// Two points are only comparable if no pair of coordinates disagrees on the direction.
impl<const D: usize> PartialOrd for Point<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let mut res = Ordering::Equal;
        for (a, b) in self.coords.iter().zip(other.coords.iter()) {
            match (res, a.partial_cmp(b)?) {
                (_, Ordering::Equal) => (),
                (Ordering::Equal, dim_res) => res = dim_res,
                (overall, dim_res) if overall == dim_res => (),
                _ => return None,
            }
        }
        Some(res)
    }
}

impl<const D: usize> fmt::Display for Point<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coords = self.coords.iter().map(|c| format!("{c:.6}")).join(", ");
        write!(f, "({coords})")
    }
}

impl<const D: usize> AbsDiffEq for Point<D> {
    type Epsilon = FloatSize;

    fn default_epsilon() -> Self::Epsilon {
        FloatSize::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const D: usize> Intersecting for Point<D> {
    type IntersectionShape = Point<D>;

    fn intersects(&self, other: &Point<D>) -> bool {
        self == other
    }

    fn intersection(&self, other: &Point<D>) -> Option<Self::IntersectionShape> {
        if self == other {
            Some(*self)
        } else {
            None
        }
    }

    fn contains(&self, other: &Point<D>) -> bool {
        abs_diff_eq!(self, other)
    }
}

impl<const D: usize> Intersecting<Rectangle<D>> for Point<D> {
    type IntersectionShape = Point<D>;

    fn intersects(&self, other: &Rectangle<D>) -> bool {
        other.contains_point(self)
    }

    fn intersection(&self, other: &Rectangle<D>) -> Option<Self::IntersectionShape> {
        other.intersection(self)
    }

    fn contains(&self, other: &Rectangle<D>) -> bool {
        // only possible for a zero-sized rectangle
        abs_diff_eq!(self, other.low()) && abs_diff_eq!(self, other.high())
    }
}

impl<const D: usize> Extending<Rectangle<D>> for Point<D> {
    fn extend(&self, geometry: Rectangle<D>) -> Rectangle<D> {
        if geometry.contains_point(self) {
            // already included
            geometry
        } else {
            let mut r = geometry;
            r.enlarge_in_place(&Rectangle::new_unchecked(*self, *self));
            if cfg!(test) {
                r.assert_legal();
            }
            r
        }
    }
}

impl<const D: usize> Bounding<D> for Point<D> {
    fn bound_all<'a>(entries: impl IntoIterator<Item = &'a Self>) -> Option<Rectangle<D>>
    where
        Self: 'a,
    {
        let mut entries = entries.into_iter();
        let Some(first) = entries.next() else {
            log::trace!("Asked to bound an empty set of points");
            return None;
        };
        let mut low = first.coords;
        let mut high = first.coords;
        for p in entries {
            for (l, h, c) in izip!(low.iter_mut(), high.iter_mut(), p.coords.iter()) {
                *l = l.min(*c);
                *h = h.max(*c);
            }
        }
        let r = Rectangle::new_unchecked(Point::new(low), Point::new(high));
        if cfg!(test) {
            r.assert_legal();
        }
        Some(r)
    }
}
