use crate::error::ConversionError;
use crate::math::{Point2, Point3, Vector3};

/// A dynamically-typed value as seen by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Float(f64),
    Int(i64),
    Bool(bool),
    Tuple(Vec<HostValue>),
    List(Vec<HostValue>),
}

impl HostValue {
    /// Host-facing name of this value's type, used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::Bool(_) => "bool",
            Self::Tuple(_) => "tuple",
            Self::List(_) => "list",
        }
    }

    /// Reads a number. Integers widen to `f64`.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::NotANumber` for booleans and sequences.
    /// Booleans are rejected even though hosts that model `bool` as an
    /// integer subtype (Python) would read `True` as `1.0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Result<f64, ConversionError> {
        match self {
            Self::Float(v) => Ok(*v),
            Self::Int(v) => Ok(*v as f64),
            other => Err(ConversionError::NotANumber {
                found: other.type_name(),
            }),
        }
    }

    /// Borrows the items of a tuple or list.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::NotASequence` for scalars.
    pub fn as_sequence(&self) -> Result<&[HostValue], ConversionError> {
        match self {
            Self::Tuple(items) | Self::List(items) => Ok(items),
            other => Err(ConversionError::NotASequence {
                found: other.type_name(),
            }),
        }
    }

    /// Reads a sequence of exactly `N` numbers.
    fn coords<const N: usize>(&self) -> Result<[f64; N], ConversionError> {
        let items = self.as_sequence()?;
        if items.len() != N {
            return Err(ConversionError::WrongArity {
                expected: N,
                found: items.len(),
            });
        }
        let mut out = [0.0; N];
        for (slot, item) in out.iter_mut().zip(items) {
            *slot = item.as_float()?;
        }
        Ok(out)
    }

    /// Converts an `(x, y, z)` sequence into a point.
    ///
    /// # Errors
    ///
    /// Returns a `ConversionError` unless this is a sequence of three numbers.
    pub fn to_point3(&self) -> Result<Point3, ConversionError> {
        let [x, y, z] = self.coords::<3>()?;
        Ok(Point3::new(x, y, z))
    }

    /// Converts a `(yaw, pitch, roll)` sequence into a rotation vector.
    ///
    /// # Errors
    ///
    /// Returns a `ConversionError` unless this is a sequence of three numbers.
    pub fn to_vector3(&self) -> Result<Vector3, ConversionError> {
        let [x, y, z] = self.coords::<3>()?;
        Ok(Vector3::new(x, y, z))
    }

    /// Converts an `(x, y)` sequence into a polygon vertex.
    ///
    /// # Errors
    ///
    /// Returns a `ConversionError` unless this is a sequence of two numbers.
    pub fn to_point2(&self) -> Result<Point2, ConversionError> {
        let [x, y] = self.coords::<2>()?;
        Ok(Point2::new(x, y))
    }

    /// Converts a sequence of `(x, y)` vertices into a polygon.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::EmptyPolygon` for an empty sequence and
    /// `ConversionError::Vertex` naming the first malformed vertex.
    pub fn to_polygon(&self) -> Result<Vec<Point2>, ConversionError> {
        let items = self.as_sequence()?;
        if items.is_empty() {
            return Err(ConversionError::EmptyPolygon);
        }
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.to_point2().map_err(|e| ConversionError::Vertex {
                    index,
                    source: Box::new(e),
                })
            })
            .collect()
    }
}

impl From<f64> for HostValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for HostValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Point3> for HostValue {
    fn from(p: Point3) -> Self {
        Self::Tuple(vec![Self::Float(p.x), Self::Float(p.y), Self::Float(p.z)])
    }
}
