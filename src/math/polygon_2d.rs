//! Map-plane polygon queries.
//!
//! Polygons are closed rings of [`Point2`] vertices lying in the horizontal
//! plane. A query position is projected onto that plane by taking its `x` and
//! `z`; height never participates.

use super::distance_2d::point_to_segment_dist;
use super::{Point2, Point3};

/// Even-odd point-in-polygon test on raw 2D coordinates (W. Randolph
/// Franklin's ray casting).
///
/// A horizontal ray is cast from `(px, py)` toward +x and every edge it
/// crosses flips the result. Points exactly on an edge may land on either
/// side. Degenerate rings are not rejected; an empty slice is outside.
#[must_use]
pub fn point_in_polygon_2d(px: f64, py: f64, polygon: &[Point2]) -> bool {
    let Some(mut prev) = polygon.last() else {
        return false;
    };

    let mut inside = false;
    for vert in polygon {
        // The straddle check guarantees vert.y != prev.y, so the division is safe.
        if (vert.y > py) != (prev.y > py)
            && px < (prev.x - vert.x) * (py - vert.y) / (prev.y - vert.y) + vert.x
        {
            inside = !inside;
        }
        prev = vert;
    }
    inside
}

/// Returns `true` if the `(x, z)` projection of `pos` lies inside `polygon`.
///
/// See [`point_in_polygon_2d`] for the boundary behavior.
#[must_use]
pub fn is_point_in_polygon(pos: &Point3, polygon: &[Point2]) -> bool {
    point_in_polygon_2d(pos.x, pos.z, polygon)
}

/// Minimum distance from the `(x, z)` projection of `pos` to the boundary of
/// `polygon`.
///
/// Every edge, including the closing edge from the last vertex back to the
/// first, is measured as a finite segment. The result is never negative,
/// even for points inside the polygon; see [`signed_distance_to_polygon`].
///
/// An empty polygon yields `f64::MAX`. Edge distances are folded with
/// [`f64::min`], which skips NaN, so a NaN coordinate in `pos` also yields
/// `f64::MAX` rather than NaN.
#[must_use]
pub fn distance_to_polygon(pos: &Point3, polygon: &[Point2]) -> f64 {
    let n = polygon.len();
    (0..n).fold(f64::MAX, |min_dist, i| {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];
        min_dist.min(point_to_segment_dist(pos.x, pos.z, a.x, a.y, b.x, b.y))
    })
}

/// Distance to the boundary of `polygon`, negated when the `(x, z)`
/// projection of `pos` is inside it.
///
/// Shares the `f64::MAX` results of [`distance_to_polygon`] for empty
/// polygons and NaN positions.
#[must_use]
pub fn signed_distance_to_polygon(pos: &Point3, polygon: &[Point2]) -> f64 {
    let dist = distance_to_polygon(pos, polygon);
    if is_point_in_polygon(pos, polygon) {
        -dist
    } else {
        dist
    }
}
