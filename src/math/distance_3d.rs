use super::Point3;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(p1: &Point3, p2: &Point3) -> f64 {
    distance_squared(p1, p2).sqrt()
}

/// Squared Euclidean distance between two points.
///
/// Prefer this over [`distance`] for threshold comparisons and ordering.
#[must_use]
pub fn distance_squared(p1: &Point3, p2: &Point3) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    let dz = p1.z - p2.z;
    dx * dx + dy * dy + dz * dz
}

/// Distance between two points in the x/z plane. Height (`y`) is ignored.
#[must_use]
pub fn horizontal_distance(p1: &Point3, p2: &Point3) -> f64 {
    horizontal_distance_squared(p1, p2).sqrt()
}

/// Squared distance between two points in the x/z plane.
#[must_use]
pub fn horizontal_distance_squared(p1: &Point3, p2: &Point3) -> f64 {
    let dx = p1.x - p2.x;
    let dz = p1.z - p2.z;
    dx * dx + dz * dz
}

/// Returns `true` if `p2` lies within `threshold` of `p1`.
///
/// The boundary is inclusive. Compared in squared space, so no square root
/// is taken. Any NaN in the inputs yields `false`.
#[must_use]
pub fn is_close(p1: &Point3, p2: &Point3, threshold: f64) -> bool {
    distance_squared(p1, p2) <= threshold * threshold
}

/// Horizontal counterpart of [`is_close`].
#[must_use]
pub fn is_close_horiz(p1: &Point3, p2: &Point3, threshold: f64) -> bool {
    horizontal_distance_squared(p1, p2) <= threshold * threshold
}
