use super::{Point3, Vector3};

/// Advances `pos` by `distance` along the heading given by the yaw of
/// `rotation`.
///
/// `rotation` is `(yaw, pitch, roll)` in degrees; only yaw is read. Yaw 0
/// points along +z and positive yaw turns toward +x. Height is unchanged and
/// yaw is not normalized.
#[must_use]
pub fn position_from_position_rotation(pos: &Point3, rotation: &Vector3, distance: f64) -> Point3 {
    let angle = rotation.x.to_radians();
    Point3::new(
        pos.x + angle.sin() * distance,
        pos.y,
        pos.z + angle.cos() * distance,
    )
}
