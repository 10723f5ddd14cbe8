pub mod distance_2d;
pub mod distance_3d;
pub mod heading;
pub mod polygon_2d;

/// 2D point type. Polygon vertices in the map plane: `x` pairs with a
/// position's `x`, `y` pairs with a position's `z`.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type. `y` is height.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type. Also carries `(yaw, pitch, roll)` rotations in degrees.
pub type Vector3 = nalgebra::Vector3<f64>;
