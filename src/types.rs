use crate::result::{Error, ValidationError};
use crate::validate::{find_oversized, Coordinates, Validate, Violation, MAX_POSITION_VALUES};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single coordinate tuple, conventionally `[longitude, latitude]`.
pub type Position = Vec<f64>;

/// The GeoJSON geometry type names, serialized with their exact casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
}

impl FeatureType {
    pub const ALL: [FeatureType; 6] = [
        FeatureType::Point,
        FeatureType::LineString,
        FeatureType::Polygon,
        FeatureType::MultiPoint,
        FeatureType::MultiLineString,
        FeatureType::MultiPolygon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureType::Point => "Point",
            FeatureType::LineString => "LineString",
            FeatureType::Polygon => "Polygon",
            FeatureType::MultiPoint => "MultiPoint",
            FeatureType::MultiLineString => "MultiLineString",
            FeatureType::MultiPolygon => "MultiPolygon",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownFeatureType(s.to_owned()))
    }
}

// the shape every field takes on the wire, before the discriminator is checked
#[derive(Deserialize)]
struct RawField<C> {
    #[serde(rename = "type")]
    feature_type: FeatureType,
    coordinates: C,
}

pub(crate) fn check_feature_type(expected: FeatureType, found: FeatureType) -> Result<(), Error> {
    if expected == found {
        Ok(())
    } else {
        Err(Error::FeatureTypeMismatch { expected, found })
    }
}

// every field is the same two-key record, only the nesting depth and discriminator change,
// so the struct, constructor and serde impls all come from here
macro_rules! geometry_field {
    ($(#[$meta:meta])* $name:ident, $variant:ident, $coords:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize)]
        pub struct $name {
            #[serde(rename = "type")]
            feature_type: FeatureType,
            pub coordinates: $coords,
        }

        impl $name {
            /// The discriminator every value of this field carries.
            pub const FEATURE_TYPE: FeatureType = FeatureType::$variant;

            #[doc = concat!("Returns a new `", stringify!($name), "` holding the provided coordinates.")]
            ///
            /// The coordinates are not validated, call [validate](Self::validate) for that.
            pub fn new(coordinates: $coords) -> Self {
                Self {
                    feature_type: Self::FEATURE_TYPE,
                    coordinates,
                }
            }

            #[inline]
            pub fn feature_type(&self) -> FeatureType {
                self.feature_type
            }

            /// Returns an error if the coordinates break the shape rules of this geometry type.
            #[inline]
            pub fn validate(&self) -> Result<(), ValidationError> {
                Validate::validate(self)
            }

            #[inline]
            pub fn find_violation(&self) -> Option<Violation> {
                Validate::find_violation(self)
            }

            pub fn into_coordinates(self) -> $coords {
                self.coordinates
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = RawField::<$coords>::deserialize(deserializer)?;
                check_feature_type(Self::FEATURE_TYPE, raw.feature_type).map_err(D::Error::custom)?;
                Ok(Self::new(raw.coordinates))
            }
        }

        impl From<$name> for GeometryField {
            fn from(field: $name) -> Self {
                GeometryField::$variant(field)
            }
        }

        impl TryFrom<GeometryField> for $name {
            type Error = Error;

            fn try_from(field: GeometryField) -> Result<Self, Self::Error> {
                match field {
                    GeometryField::$variant(inner) => Ok(inner),
                    other => Err(Error::FeatureTypeMismatch {
                        expected: Self::FEATURE_TYPE,
                        found: other.feature_type(),
                    }),
                }
            }
        }
    };
}

// fields whose only rule is the innermost position length
macro_rules! validate_innermost {
    ($($t:ty),*) => {
        $(
            impl Validate for $t {
                #[inline]
                fn feature_type(&self) -> FeatureType {
                    self.feature_type
                }

                fn find_violation(&self) -> Option<Violation> {
                    find_oversized(&self.coordinates)
                }

                fn position_count(&self) -> usize {
                    self.coordinates.position_count()
                }
            }
        )*
    };
}

geometry_field!(
    /// Holds the value of a Point
    PointField,
    Point,
    Position
);
geometry_field!(
    /// Holds the value of a LineString
    LineStringField,
    LineString,
    Vec<Position>
);
geometry_field!(
    /// Holds the value of a Polygon, one list of positions per ring
    PolygonField,
    Polygon,
    Vec<Vec<Position>>
);
geometry_field!(
    /// Holds the value of a MultiPoint
    MultiPointField,
    MultiPoint,
    Vec<Position>
);
geometry_field!(
    /// Holds the value of a MultiLineString
    MultiLineStringField,
    MultiLineString,
    Vec<Vec<Position>>
);
geometry_field!(
    /// Holds the value of a MultiPolygon, one ring of positions per polygon
    MultiPolygonField,
    MultiPolygon,
    Vec<Vec<Position>>
);

validate_innermost!(
    PointField,
    PolygonField,
    MultiPointField,
    MultiLineStringField,
    MultiPolygonField
);

impl Validate for LineStringField {
    #[inline]
    fn feature_type(&self) -> FeatureType {
        self.feature_type
    }

    // the outer sequence is held to the same limit as a position before the positions are scanned
    fn find_violation(&self) -> Option<Violation> {
        if self.coordinates.len() > MAX_POSITION_VALUES {
            return Some(Violation {
                path: Vec::new(),
                len: self.coordinates.len(),
            });
        }
        find_oversized(&self.coordinates)
    }

    fn position_count(&self) -> usize {
        self.coordinates.position_count()
    }
}

/// Any one of the geometry fields.
///
/// Serialized exactly like the field it wraps. When deserializing, the variant is
/// picked by both the `type` key and the nesting depth of `coordinates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeometryField {
    Point(PointField),
    LineString(LineStringField),
    Polygon(PolygonField),
    MultiPoint(MultiPointField),
    MultiLineString(MultiLineStringField),
    MultiPolygon(MultiPolygonField),
}

macro_rules! dispatch {
    ($self:expr, $f:ident => $body:expr) => {
        match $self {
            GeometryField::Point($f) => $body,
            GeometryField::LineString($f) => $body,
            GeometryField::Polygon($f) => $body,
            GeometryField::MultiPoint($f) => $body,
            GeometryField::MultiLineString($f) => $body,
            GeometryField::MultiPolygon($f) => $body,
        }
    };
}
pub(crate) use dispatch;

impl GeometryField {
    pub fn feature_type(&self) -> FeatureType {
        Validate::feature_type(self)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        Validate::validate(self)
    }

    pub fn find_violation(&self) -> Option<Violation> {
        Validate::find_violation(self)
    }
}

impl Validate for GeometryField {
    fn feature_type(&self) -> FeatureType {
        dispatch!(self, f => f.feature_type)
    }

    fn find_violation(&self) -> Option<Violation> {
        dispatch!(self, f => Validate::find_violation(f))
    }

    fn position_count(&self) -> usize {
        dispatch!(self, f => Validate::position_count(f))
    }
}
