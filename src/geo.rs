//! Conversions between the geometry fields and [geo_types] geometries.
//!
//! Going to a field never fails. Going back requires every position to hold exactly
//! an x and a y value.
use crate::result::{Error, Result};
use crate::types::*;
use geo_types::{Coord, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

fn position_from_coord(c: Coord<f64>) -> Position {
    vec![c.x, c.y]
}

fn coord_from_position(p: &[f64]) -> Result<Coord<f64>> {
    match p {
        [x, y] => Ok(Coord { x: *x, y: *y }),
        _ => Err(Error::PositionArity(p.len())),
    }
}

fn positions_from_line(line: LineString<f64>) -> Vec<Position> {
    line.0.into_iter().map(position_from_coord).collect()
}

fn line_from_positions(positions: &[Position]) -> Result<LineString<f64>> {
    positions
        .iter()
        .map(|p| coord_from_position(p))
        .collect::<Result<Vec<_>>>()
        .map(LineString::new)
}

fn rings_from_polygon(polygon: Polygon<f64>) -> Vec<Vec<Position>> {
    let (exterior, interiors) = polygon.into_inner();
    std::iter::once(exterior)
        .chain(interiors)
        .map(positions_from_line)
        .collect()
}

fn polygon_from_rings(rings: &[Vec<Position>]) -> Result<Polygon<f64>> {
    let mut lines = rings.iter().map(|r| line_from_positions(r));
    let exterior = lines.next().transpose()?.unwrap_or_else(|| LineString::new(Vec::new()));
    let interiors = lines.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

impl From<Point<f64>> for PointField {
    fn from(point: Point<f64>) -> Self {
        PointField::new(position_from_coord(point.0))
    }
}

impl From<LineString<f64>> for LineStringField {
    fn from(line: LineString<f64>) -> Self {
        LineStringField::new(positions_from_line(line))
    }
}

impl From<Polygon<f64>> for PolygonField {
    fn from(polygon: Polygon<f64>) -> Self {
        PolygonField::new(rings_from_polygon(polygon))
    }
}

impl From<MultiPoint<f64>> for MultiPointField {
    fn from(points: MultiPoint<f64>) -> Self {
        MultiPointField::new(points.0.into_iter().map(|p| position_from_coord(p.0)).collect())
    }
}

impl From<MultiLineString<f64>> for MultiLineStringField {
    fn from(lines: MultiLineString<f64>) -> Self {
        MultiLineStringField::new(lines.0.into_iter().map(positions_from_line).collect())
    }
}

// a multipolygon field only has room for one ring per polygon
impl TryFrom<MultiPolygon<f64>> for MultiPolygonField {
    type Error = Error;

    fn try_from(polygons: MultiPolygon<f64>) -> Result<Self> {
        polygons
            .0
            .into_iter()
            .map(|p| {
                if p.interiors().is_empty() {
                    Ok(positions_from_line(p.into_inner().0))
                } else {
                    Err(Error::UnsupportedGeoType("Polygon with interior rings in a MultiPolygon"))
                }
            })
            .collect::<Result<Vec<_>>>()
            .map(MultiPolygonField::new)
    }
}

impl TryFrom<&PointField> for Point<f64> {
    type Error = Error;

    fn try_from(field: &PointField) -> Result<Self> {
        coord_from_position(&field.coordinates).map(Point)
    }
}

impl TryFrom<&LineStringField> for LineString<f64> {
    type Error = Error;

    fn try_from(field: &LineStringField) -> Result<Self> {
        line_from_positions(&field.coordinates)
    }
}

impl TryFrom<&PolygonField> for Polygon<f64> {
    type Error = Error;

    fn try_from(field: &PolygonField) -> Result<Self> {
        polygon_from_rings(&field.coordinates)
    }
}

impl TryFrom<&MultiPointField> for MultiPoint<f64> {
    type Error = Error;

    fn try_from(field: &MultiPointField) -> Result<Self> {
        field
            .coordinates
            .iter()
            .map(|p| coord_from_position(p).map(Point))
            .collect::<Result<Vec<_>>>()
            .map(MultiPoint)
    }
}

impl TryFrom<&MultiLineStringField> for MultiLineString<f64> {
    type Error = Error;

    fn try_from(field: &MultiLineStringField) -> Result<Self> {
        field
            .coordinates
            .iter()
            .map(|l| line_from_positions(l))
            .collect::<Result<Vec<_>>>()
            .map(MultiLineString)
    }
}

impl TryFrom<&MultiPolygonField> for MultiPolygon<f64> {
    type Error = Error;

    fn try_from(field: &MultiPolygonField) -> Result<Self> {
        field
            .coordinates
            .iter()
            .map(|ring| line_from_positions(ring).map(|exterior| Polygon::new(exterior, vec![])))
            .collect::<Result<Vec<_>>>()
            .map(MultiPolygon)
    }
}

impl TryFrom<Geometry<f64>> for GeometryField {
    type Error = Error;

    fn try_from(geom: Geometry<f64>) -> Result<Self> {
        Ok(match geom {
            Geometry::Point(p) => PointField::from(p).into(),
            Geometry::Line(l) => LineStringField::from(LineString::from(vec![l.start, l.end])).into(),
            Geometry::LineString(ls) => LineStringField::from(ls).into(),
            Geometry::Polygon(poly) => PolygonField::from(poly).into(),
            Geometry::MultiPoint(mp) => MultiPointField::from(mp).into(),
            Geometry::MultiLineString(mls) => MultiLineStringField::from(mls).into(),
            Geometry::MultiPolygon(mp) => MultiPolygonField::try_from(mp)?.into(),
            Geometry::Rect(r) => PolygonField::from(r.to_polygon()).into(),
            Geometry::Triangle(t) => PolygonField::from(t.to_polygon()).into(),
            Geometry::GeometryCollection(_) => {
                return Err(Error::UnsupportedGeoType("GeometryCollection"))
            }
        })
    }
}

impl TryFrom<&GeometryField> for Geometry<f64> {
    type Error = Error;

    fn try_from(field: &GeometryField) -> Result<Self> {
        Ok(match field {
            GeometryField::Point(f) => Geometry::Point(f.try_into()?),
            GeometryField::LineString(f) => Geometry::LineString(f.try_into()?),
            GeometryField::Polygon(f) => Geometry::Polygon(f.try_into()?),
            GeometryField::MultiPoint(f) => Geometry::MultiPoint(f.try_into()?),
            GeometryField::MultiLineString(f) => Geometry::MultiLineString(f.try_into()?),
            GeometryField::MultiPolygon(f) => Geometry::MultiPolygon(f.try_into()?),
        })
    }
}
