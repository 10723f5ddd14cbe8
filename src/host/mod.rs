//! Boundary adapter for embedding hosts.
//!
//! An embedding scripting environment hands over dynamically-typed values.
//! This module turns them into points, rotation vectors and polygons,
//! rejecting malformed input before it reaches the geometry routines, and
//! dispatches calls by their host-facing names.

mod dispatch;
mod value;

pub use dispatch::{call, HostFunction};
pub use value::HostValue;
