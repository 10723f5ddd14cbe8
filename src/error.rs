use thiserror::Error;

/// Top-level error type for fieldgeo.
///
/// The geometry routines themselves are total; errors only arise where
/// loosely-typed host values are converted into points and polygons.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Call(#[from] CallError),
}

/// Errors raised while converting a host value into a geometry value.
#[derive(Debug, Error, PartialEq)]
pub enum ConversionError {
    #[error("expected a number, found {found}")]
    NotANumber { found: &'static str },

    #[error("expected a sequence, found {found}")]
    NotASequence { found: &'static str },

    #[error("expected {expected} coordinates, found {found}")]
    WrongArity { expected: usize, found: usize },

    #[error("polygon has no vertices")]
    EmptyPolygon,

    #[error("invalid polygon vertex {index}: {source}")]
    Vertex {
        index: usize,
        #[source]
        source: Box<ConversionError>,
    },
}

/// Errors raised while dispatching a named host call.
#[derive(Debug, Error, PartialEq)]
pub enum CallError {
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("{function}() takes {expected} arguments ({found} given)")]
    ArgumentCount {
        function: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{function}() argument {index}: {source}")]
    Argument {
        function: &'static str,
        index: usize,
        #[source]
        source: ConversionError,
    },
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
