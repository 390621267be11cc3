use crate::types::FeatureType;

/// The result returned by many methods within the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The outcome of a failed coordinate validation.
///
/// There is a single kind, so callers can compare against it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("a position in the deepest level of coordinates has more than 2 values")]
    CoordinateTooManyValues,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("geometry field `{field}` failed validation")]
    InvalidField {
        field: &'static str,
        #[source]
        source: ValidationError,
    },
    #[error("Expected a {expected} geometry, found {found}")]
    FeatureTypeMismatch {
        expected: FeatureType,
        found: FeatureType,
    },
    #[error("A position must hold exactly 2 values to be converted, found {0}")]
    PositionArity(usize),
    #[error("Error decoding WKB geometry")]
    GeomDecodeError,
    #[error("Error encoding WKB geometry")]
    GeomEncodeError,
    #[error("Unsupported WKB geometry type {0}")]
    UnsupportedGeometryType(u32),
    #[error("Unsupported geometry type {0}")]
    UnsupportedGeoType(&'static str),
    #[error("Unknown geometry type name {0:?}")]
    UnknownFeatureType(String),
    #[error("I/O error while reading or writing a geometry")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "sqlite")]
    #[error("Error when accessing the SQLite database")]
    SQLiteError(#[from] rusqlite::Error),
}
