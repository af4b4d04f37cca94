//! Prelude module for convenient imports
//!
//! Brings the geometry types and the traits their methods live on into scope:
//!
//! ```
//! use rtree_geometry::prelude::*;
//! ```

pub use crate::geometry::{
    Bounding,
    Extending,
    FloatSize,
    GeometryError,
    HasVolume,
    Intersecting,
    Point,
    Rectangle,
};
