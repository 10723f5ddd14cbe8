use std::fmt;
use std::str::FromStr;

use crate::error::{CallError, ConversionError, Result};
use crate::math::distance_3d::{
    distance, distance_squared, horizontal_distance, horizontal_distance_squared, is_close,
    is_close_horiz,
};
use crate::math::heading::position_from_position_rotation;
use crate::math::polygon_2d::{distance_to_polygon, is_point_in_polygon, signed_distance_to_polygon};
use crate::math::{Point2, Point3, Vector3};

use super::HostValue;

/// A geometry routine exported to the host under its host-facing name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostFunction {
    Distance,
    DistanceSquared,
    HorizDistance,
    HorizDistanceSquared,
    IsClose,
    IsCloseHoriz,
    PosFromPosRot,
    IsPointInPolygon,
    DistanceToPolygon,
    SignedDistanceToPolygon,
}

impl HostFunction {
    /// Every exported routine, in registration order.
    pub const ALL: [HostFunction; 10] = [
        Self::Distance,
        Self::DistanceSquared,
        Self::HorizDistance,
        Self::HorizDistanceSquared,
        Self::IsClose,
        Self::IsCloseHoriz,
        Self::PosFromPosRot,
        Self::IsPointInPolygon,
        Self::DistanceToPolygon,
        Self::SignedDistanceToPolygon,
    ];

    /// The name the host calls this routine by.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Distance => "calcDistance",
            Self::DistanceSquared => "calcDistanceSquared",
            Self::HorizDistance => "calcHorizDistance",
            Self::HorizDistanceSquared => "calcHorizDistanceSquared",
            Self::IsClose => "isClose",
            Self::IsCloseHoriz => "isCloseHoriz",
            Self::PosFromPosRot => "calcPosFromPosRot",
            Self::IsPointInPolygon => "isPointInPolygon",
            Self::DistanceToPolygon => "calcDistanceToPolygon",
            Self::SignedDistanceToPolygon => "calcSignedDistanceToPolygon",
        }
    }

    /// Number of positional arguments the routine takes.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Distance
            | Self::DistanceSquared
            | Self::HorizDistance
            | Self::HorizDistanceSquared
            | Self::IsPointInPolygon
            | Self::DistanceToPolygon
            | Self::SignedDistanceToPolygon => 2,
            Self::IsClose | Self::IsCloseHoriz | Self::PosFromPosRot => 3,
        }
    }

    /// Usage text shown to host scripts.
    #[must_use]
    pub fn doc(self) -> &'static str {
        match self {
            Self::Distance => {
                "calcDistance(pos1, pos2)\npos1, pos2 - tuple3\nReturns the distance between two points."
            }
            Self::DistanceSquared => {
                "calcDistanceSquared(pos1, pos2)\npos1, pos2 - tuple3\nReturns the squared distance between two points."
            }
            Self::HorizDistance => {
                "calcHorizDistance(pos1, pos2)\npos1, pos2 - tuple3\nReturns the horizontal distance between two points."
            }
            Self::HorizDistanceSquared => {
                "calcHorizDistanceSquared(pos1, pos2)\npos1, pos2 - tuple3\nReturns the squared horizontal distance between two points."
            }
            Self::IsClose => {
                "isClose(pos1, pos2, distance)\npos1, pos2 - tuple3\ndistance - float\nChecks if pos2 is within distance of pos1."
            }
            Self::IsCloseHoriz => {
                "isCloseHoriz(pos1, pos2, distance)\npos1, pos2 - tuple3\ndistance - float\nChecks if pos2 is within distance of pos1 horizontally."
            }
            Self::PosFromPosRot => {
                "calcPosFromPosRot(pos, rot, distance)\npos, rot - tuple3\ndistance - float\nReturns pos advanced by distance along the yaw of rot."
            }
            Self::IsPointInPolygon => {
                "isPointInPolygon(pos, polygon)\npos - tuple3\npolygon - list of tuple2\nChecks if pos is inside polygon (x/z plane)."
            }
            Self::DistanceToPolygon => {
                "calcDistanceToPolygon(pos, polygon)\npos - tuple3\npolygon - list of tuple2\nReturns the distance from pos to the polygon's boundary (never negative)."
            }
            Self::SignedDistanceToPolygon => {
                "calcSignedDistanceToPolygon(pos, polygon)\npos - tuple3\npolygon - list of tuple2\nReturns the distance to the polygon's boundary, negative inside."
            }
        }
    }

    /// Converts `args`, runs the routine and converts the result back.
    ///
    /// # Errors
    ///
    /// Returns `CallError::ArgumentCount` if the number of arguments is wrong
    /// and `CallError::Argument` for the first argument that fails to convert.
    pub fn call(self, args: &[HostValue]) -> Result<HostValue> {
        let function = self.name();
        if args.len() != self.arity() {
            return Err(CallError::ArgumentCount {
                function,
                expected: self.arity(),
                found: args.len(),
            }
            .into());
        }
        tracing::trace!(function, "dispatching host call");

        let a = Args { function, values: args };
        let out: HostValue = match self {
            Self::Distance => distance(&a.point3(0)?, &a.point3(1)?).into(),
            Self::DistanceSquared => distance_squared(&a.point3(0)?, &a.point3(1)?).into(),
            Self::HorizDistance => horizontal_distance(&a.point3(0)?, &a.point3(1)?).into(),
            Self::HorizDistanceSquared => {
                horizontal_distance_squared(&a.point3(0)?, &a.point3(1)?).into()
            }
            Self::IsClose => is_close(&a.point3(0)?, &a.point3(1)?, a.float(2)?).into(),
            Self::IsCloseHoriz => is_close_horiz(&a.point3(0)?, &a.point3(1)?, a.float(2)?).into(),
            Self::PosFromPosRot => {
                position_from_position_rotation(&a.point3(0)?, &a.vector3(1)?, a.float(2)?).into()
            }
            Self::IsPointInPolygon => is_point_in_polygon(&a.point3(0)?, &a.polygon(1)?).into(),
            Self::DistanceToPolygon => distance_to_polygon(&a.point3(0)?, &a.polygon(1)?).into(),
            Self::SignedDistanceToPolygon => {
                signed_distance_to_polygon(&a.point3(0)?, &a.polygon(1)?).into()
            }
        };
        Ok(out)
    }
}

impl fmt::Display for HostFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HostFunction {
    type Err = CallError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|func| func.name() == s)
            .ok_or_else(|| CallError::UnknownFunction(s.to_owned()))
    }
}

/// Looks up `name` and calls it with `args`.
///
/// # Errors
///
/// Returns `CallError::UnknownFunction` for a name the host does not export,
/// otherwise whatever [`HostFunction::call`] returns.
pub fn call(name: &str, args: &[HostValue]) -> Result<HostValue> {
    let func: HostFunction = name.parse()?;
    func.call(args)
}

/// Positional arguments of one call, converted on demand.
struct Args<'a> {
    function: &'static str,
    values: &'a [HostValue],
}

impl Args<'_> {
    fn convert<T>(
        &self,
        index: usize,
        f: impl FnOnce(&HostValue) -> std::result::Result<T, ConversionError>,
    ) -> std::result::Result<T, CallError> {
        f(&self.values[index]).map_err(|source| {
            tracing::debug!(function = self.function, index, %source, "rejected host argument");
            CallError::Argument {
                function: self.function,
                index,
                source,
            }
        })
    }

    fn float(&self, index: usize) -> std::result::Result<f64, CallError> {
        self.convert(index, HostValue::as_float)
    }

    fn point3(&self, index: usize) -> std::result::Result<Point3, CallError> {
        self.convert(index, HostValue::to_point3)
    }

    fn vector3(&self, index: usize) -> std::result::Result<Vector3, CallError> {
        self.convert(index, HostValue::to_vector3)
    }

    fn polygon(&self, index: usize) -> std::result::Result<Vec<Point2>, CallError> {
        self.convert(index, HostValue::to_polygon)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::host::value::tests::{float, point_value, polygon_value};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const UNIT_SQUARE: [(f64, f64); 4] = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

    fn as_f64(v: &HostValue) -> f64 {
        match v {
            HostValue::Float(x) => *x,
            other => panic!("expected float, got {other:?}"),
        }
    }

    fn as_point(v: &HostValue) -> Point3 {
        v.to_point3().unwrap()
    }

    fn coord() -> impl Strategy<Value = f64> {
        0.0..2000.0f64
    }

    /// Convex kite around `(cx, cz)` with one vertex on each axis direction.
    fn convex_quad() -> impl Strategy<Value = Vec<(f64, f64)>> {
        (coord(), coord(), [1.0..500.0f64, 1.0..500.0, 1.0..500.0, 1.0..500.0]).prop_map(
            |(cx, cz, [east, north, west, south])| {
                vec![
                    (cx + east, cz),
                    (cx, cz + north),
                    (cx - west, cz),
                    (cx, cz - south),
                ]
            },
        )
    }

    #[test]
    fn names_round_trip() {
        for func in HostFunction::ALL {
            assert_eq!(func.name().parse::<HostFunction>().unwrap(), func);
            assert_eq!(func.to_string(), func.name());
            assert!(func.doc().starts_with(func.name()));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = call("calcVolume", &[]).unwrap_err();
        assert!(matches!(
            err,
            Error::Call(CallError::UnknownFunction(ref name)) if name == "calcVolume"
        ));
    }

    #[test]
    fn calc_distance() {
        let r = call(
            "calcDistance",
            &[point_value(0.0, 0.0, 0.0), point_value(3.0, 0.0, 4.0)],
        )
        .unwrap();
        assert_relative_eq!(as_f64(&r), 5.0);
    }

    #[test]
    fn is_close_boundary() {
        let args = [point_value(0.0, 0.0, 0.0), point_value(3.0, 0.0, 4.0), float(5.0)];
        assert_eq!(call("isClose", &args).unwrap(), HostValue::Bool(true));

        let args = [point_value(0.0, 9.0, 0.0), point_value(3.0, 0.0, 4.0), HostValue::Int(5)];
        assert_eq!(call("isClose", &args).unwrap(), HostValue::Bool(false));
        assert_eq!(call("isCloseHoriz", &args).unwrap(), HostValue::Bool(true));
    }

    #[test]
    fn pos_from_pos_rot_returns_tuple() {
        let r = call(
            "calcPosFromPosRot",
            &[point_value(0.0, 5.0, 0.0), point_value(90.0, 0.0, 0.0), float(10.0)],
        )
        .unwrap();
        let p = as_point(&r);
        assert_relative_eq!(p.x, 10.0);
        assert_relative_eq!(p.y, 5.0);
        assert!(p.z.abs() < 1e-12);
    }

    #[test]
    fn polygon_calls() {
        let square = polygon_value(&UNIT_SQUARE);
        let center = point_value(0.5, 0.0, 0.5);

        assert_eq!(
            call("isPointInPolygon", &[center.clone(), square.clone()]).unwrap(),
            HostValue::Bool(true)
        );
        let d = call("calcDistanceToPolygon", &[center.clone(), square.clone()]).unwrap();
        assert_relative_eq!(as_f64(&d), 0.5);
        let d = call("calcSignedDistanceToPolygon", &[center, square]).unwrap();
        assert_relative_eq!(as_f64(&d), -0.5);
    }

    #[test]
    fn argument_count_is_checked() {
        let err = HostFunction::IsClose
            .call(&[point_value(0.0, 0.0, 0.0), point_value(1.0, 1.0, 1.0)])
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Call(CallError::ArgumentCount {
                function: "isClose",
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn bad_argument_is_located() {
        let err = call(
            "calcHorizDistance",
            &[point_value(0.0, 0.0, 0.0), HostValue::Tuple(vec![float(1.0), float(2.0)])],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Call(CallError::Argument {
                function: "calcHorizDistance",
                index: 1,
                source: ConversionError::WrongArity { expected: 3, found: 2 },
            })
        ));
        assert_eq!(
            err.to_string(),
            "calcHorizDistance() argument 1: expected 3 coordinates, found 2"
        );
    }

    #[test]
    fn empty_polygon_fails_at_the_boundary() {
        let err = call(
            "calcDistanceToPolygon",
            &[point_value(0.0, 0.0, 0.0), HostValue::List(vec![])],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Call(CallError::Argument {
                source: ConversionError::EmptyPolygon,
                ..
            })
        ));
    }

    const CLOSE: f64 = 50.0;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn matches_reference_formulas(
            (x1, y1, z1) in (coord(), coord(), coord()),
            (x2, y2, z2) in (coord(), coord(), coord()),
            (yaw, pitch, roll) in (0.0..360.0f64, 0.0..360.0f64, 0.0..360.0f64),
            dist in coord(),
        ) {
            let p1 = point_value(x1, y1, z1);
            let p2 = point_value(x2, y2, z2);
            let pair = [p1.clone(), p2.clone()];

            let (dx, dy, dz) = (x1 - x2, y1 - y2, z1 - z2);
            let sq = dx * dx + dy * dy + dz * dz;
            let horiz_sq = dx * dx + dz * dz;

            assert_relative_eq!(as_f64(&call("calcDistanceSquared", &pair).unwrap()), sq);
            assert_relative_eq!(as_f64(&call("calcDistance", &pair).unwrap()), sq.sqrt());
            assert_relative_eq!(as_f64(&call("calcHorizDistanceSquared", &pair).unwrap()), horiz_sq);
            assert_relative_eq!(as_f64(&call("calcHorizDistance", &pair).unwrap()), horiz_sq.sqrt());

            let close_args = [p1.clone(), p2, float(CLOSE)];
            prop_assert_eq!(
                call("isClose", &close_args).unwrap(),
                HostValue::Bool(sq <= CLOSE * CLOSE)
            );
            prop_assert_eq!(
                call("isCloseHoriz", &close_args).unwrap(),
                HostValue::Bool(horiz_sq <= CLOSE * CLOSE)
            );

            let moved = as_point(
                &call(
                    "calcPosFromPosRot",
                    &[p1, point_value(yaw, pitch, roll), float(dist)],
                )
                .unwrap(),
            );
            let angle = yaw.to_radians();
            assert_relative_eq!(moved.x, x1 + angle.sin() * dist);
            assert_relative_eq!(moved.y, y1);
            assert_relative_eq!(moved.z, z1 + angle.cos() * dist);
        }

        #[test]
        fn polygon_calls_match_core(
            (x, y, z) in (coord(), coord(), coord()),
            quad in convex_quad(),
        ) {
            let pos = Point3::new(x, y, z);
            let verts: Vec<Point2> = quad.iter().map(|&(vx, vz)| Point2::new(vx, vz)).collect();
            let args = [point_value(x, y, z), polygon_value(&quad)];

            let inside = is_point_in_polygon(&pos, &verts);
            let dist = distance_to_polygon(&pos, &verts);
            prop_assert_eq!(call("isPointInPolygon", &args).unwrap(), HostValue::Bool(inside));
            prop_assert_eq!(
                as_f64(&call("calcDistanceToPolygon", &args).unwrap()).to_bits(),
                dist.to_bits()
            );

            let signed = as_f64(&call("calcSignedDistanceToPolygon", &args).unwrap());
            prop_assert!(dist >= 0.0);
            prop_assert_eq!(signed.abs().to_bits(), dist.to_bits());
            if dist > 0.0 {
                prop_assert_eq!(signed < 0.0, inside);
            }
        }
    }
}
