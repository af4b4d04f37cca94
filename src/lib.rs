//! Geometric primitives for R-tree style spatial indices over `D`-dimensional space.
//!
//! ```
//! use rtree_geometry::prelude::*;
//!
//! let r = Rectangle::from_corner_and_lengths(Point::new([0.0, 0.0]), [2.0, 2.0])?;
//! let p = Point::new([3.0, 1.0]);
//! assert_eq!(1.0, p.min_dist(&r));
//! assert!(p.min_max_dist(&r) >= p.min_dist(&r));
//! # Ok::<(), GeometryError>(())
//! ```

pub mod geometry;
pub mod prelude;

pub use geometry::{distance, GeometryError, Point, Rectangle, Result};
