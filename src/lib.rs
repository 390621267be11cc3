//! GeoJSON geometry fields (Point, LineString, Polygon and their Multi- variants) for
//! embedding in larger records, with coordinate-shape validation.
//!
//! Every field serializes as a GeoJSON geometry object with a `type` and a `coordinates`
//! key. Validation is never run implicitly, call `validate` when a value should be checked.
//!
//! ```
//! use geojson_fields::{LineStringField, PolygonField};
//!
//! let line = LineStringField::new(vec![vec![40.0, 5.0], vec![41.0, 6.0]]);
//! assert!(line.validate().is_ok());
//!
//! let polygon = PolygonField::new(vec![vec![
//!     vec![0.0, 0.0],
//!     vec![3.0, 6.0],
//!     vec![6.0, 1.0],
//!     vec![0.0, 0.0],
//! ]]);
//! assert!(polygon.validate().is_ok());
//! ```
extern crate self as geojson_fields;

pub mod geo;
pub mod gpkg_wkb;
pub mod result;
pub mod types;
pub mod validate;

#[doc(inline)]
pub use geojson_fields_derive::GeometryRecord;
pub use gpkg_wkb::{GeoPackageWKB, WkbField, DEFAULT_SRS_ID};
pub use result::{Error, Result, ValidationError};
pub use types::{
    FeatureType, GeometryField, LineStringField, MultiLineStringField, MultiPointField,
    MultiPolygonField, PointField, PolygonField, Position,
};
pub use validate::{Validate, Violation, MAX_POSITION_VALUES};

/// A record that embeds one or more geometry fields.
///
/// Usually derived, see [GeometryRecord](geojson_fields_derive::GeometryRecord) for the
/// attributes the derive understands.
pub trait GeometryRecord {
    /// The name and declared geometry type of each geometry field, in declaration order.
    fn geometry_fields() -> &'static [(&'static str, FeatureType)];

    /// Check every geometry field of the record, stopping at the first failure.
    /// Fields holding `None` are skipped.
    fn validate_geometry(&self) -> Result<()>;
}

#[doc(hidden)]
pub fn check_record_field<F: Validate>(
    field: &'static str,
    expected: FeatureType,
    value: &F,
) -> Result<()> {
    types::check_feature_type(expected, value.feature_type())?;
    value
        .validate()
        .map_err(|source| Error::InvalidField { field, source })
}
