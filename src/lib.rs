//! Distance, proximity and map-plane polygon queries over game-world
//! positions.
//!
//! Positions are [`Point3`] with `y` as height. Horizontal queries and
//! polygon queries work in the `x`/`z` plane, where polygon vertices are
//! [`Point2`] values. The [`host`] module adapts these routines to a
//! dynamically-typed embedding host.

pub mod error;
pub mod host;
pub mod math;

pub use error::{CallError, ConversionError, Error, Result};
pub use host::{HostFunction, HostValue};
pub use math::distance_2d::point_to_segment_dist;
pub use math::distance_3d::{
    distance, distance_squared, horizontal_distance, horizontal_distance_squared, is_close,
    is_close_horiz,
};
pub use math::heading::position_from_position_rotation;
pub use math::polygon_2d::{
    distance_to_polygon, is_point_in_polygon, point_in_polygon_2d, signed_distance_to_polygon,
};
pub use math::{Point2, Point3, Vector3};
