/// Returns the minimum distance from point `(px, py)` to the line segment
/// from `(ax, ay)` to `(bx, by)`.
///
/// The scalar projection of the point onto the segment is clamped to the
/// endpoints, so points beyond either end measure to that endpoint. A
/// zero-length segment measures to `(ax, ay)` without dividing.
#[must_use]
pub fn point_to_segment_dist(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    // Fraction of the segment the point projects onto. -1 sends a
    // degenerate segment to its start point.
    #[allow(clippy::float_cmp)]
    let t = if len_sq == 0.0 {
        -1.0
    } else {
        ((px - ax) * dx + (py - ay) * dy) / len_sq
    };

    let (closest_x, closest_y) = if t < 0.0 {
        (ax, ay)
    } else if t > 1.0 {
        (bx, by)
    } else {
        (ax + t * dx, ay + t * dy)
    };

    ((px - closest_x).powi(2) + (py - closest_y).powi(2)).sqrt()
}
