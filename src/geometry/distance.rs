//! Pruning bounds for nearest-neighbour search
//!
//! Both metrics are implemented per "Nearest Neighbor Queries" by
//! N. Roussopoulos, S. Kelley and F. Vincent, ACM SIGMOD, pages 71-79, 1995.
//!
//! They return *squared* distances, so they can be compared with each other
//! (and with squared point distances) without taking roots.
use super::*;
use itertools::izip;

/// Squared distance from `point` to the closest point of `rectangle`
///
/// Zero if `point` lies inside or on the boundary of `rectangle`.
/// This is Definition 2 (MINDIST) of the paper.
pub fn min_dist<const D: usize>(point: &Point<D>, rectangle: &Rectangle<D>) -> FloatSize {
    izip!(
        point.coords.iter(),
        rectangle.low().coords.iter(),
        rectangle.high().coords.iter()
    )
    .map(|(&p, &low, &high)| {
        if p < low {
            squared(p - low)
        } else if p > high {
            squared(p - high)
        } else {
            0.0
        }
    })
    .sum()
}

/// The minimum over all faces of the maximum squared distance from `point` to that face
///
/// If `rectangle` is the minimal bounding box of some objects, then at least one
/// of them is within this (squared) distance of `point`.
/// This is Definition 4 (MINMAXDIST) of the paper.
///
/// Returns infinity for zero-dimensional geometry.
pub fn min_max_dist<const D: usize>(point: &Point<D>, rectangle: &Rectangle<D>) -> FloatSize {
    // By definition
    //   MinMaxDist(p, r) = min_k (|p_k - rm_k|^2 + sum_{i != k} |p_i - rM_i|^2)
    // where rm_k is the face nearer to p_k and rM_i the face further from p_i.
    let faces: [(FloatSize, FloatSize); D] = std::array::from_fn(|k| {
        nearer_and_further_face(point[k], rectangle.low()[k], rectangle.high()[k])
    });

    // Precomputing S = sum_i |p_i - rM_i|^2 makes this linear in D.
    let far_sum: FloatSize = point
        .coords
        .iter()
        .zip(faces.iter())
        .map(|(&p, &(_, far))| squared(p - far))
        .sum();

    point
        .coords
        .iter()
        .zip(faces.iter())
        .map(|(&p, &(near, far))| far_sum - squared(p - far) + squared(p - near))
        .fold(FloatSize::INFINITY, FloatSize::min)
}

/// Returns `(near, far)` faces of the interval `[low, high]` as seen from `p`
///
/// At the exact midpoint both faces are equally far, so either choice gives the same distances.
#[inline(always)]
fn nearer_and_further_face(p: FloatSize, low: FloatSize, high: FloatSize) -> (FloatSize, FloatSize) {
    if p <= (low + high) / 2.0 {
        (low, high)
    } else {
        (high, low)
    }
}

#[inline(always)]
fn squared(d: FloatSize) -> FloatSize {
    d * d
}

impl<const D: usize> Point<D> {
    /// See [min_dist]
    pub fn min_dist(&self, rectangle: &Rectangle<D>) -> FloatSize {
        min_dist(self, rectangle)
    }

    /// See [min_max_dist]
    pub fn min_max_dist(&self, rectangle: &Rectangle<D>) -> FloatSize {
        min_max_dist(self, rectangle)
    }
}
