use crate::result::{Error, Result};
use crate::types::*;
use crate::types::{check_feature_type, dispatch};
use crate::validate::Validate;
use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Read, Write};

/// The SRS id written into every GeoPackage geometry header: WGS 84 longitude/latitude.
pub const DEFAULT_SRS_ID: i32 = 4326;

/// A trait containing methods for encoding geometry fields according to the GeoPackage [specifcation](https://www.geopackage.org/spec130/#gpb_spec)
///
/// This is the binary form used when a field is stored as a blob. With the `sqlite`
/// feature, the rusqlite `ToSql` and `FromSql` impls for every field are built on it.
pub trait GeoPackageWKB: Sized {
    fn to_gpkg_wkb(&self) -> Result<Vec<u8>>;
    fn from_gpkg_wkb(bytes: &[u8]) -> Result<Self>;
}

/// Reading and writing a field as plain well-known binary.
///
/// Positions must hold exactly 2 values, apart from an empty point, which is written
/// as `NaN NaN` as is customary. The reverse also holds, so a point whose coordinates
/// are both `NaN` is read back as an empty point.
pub trait WkbField: Sized {
    fn write_as_wkb(&self, w: &mut impl Write) -> Result<()>;
    fn read_from_wkb(r: &mut impl Read) -> Result<Self>;

    fn to_wkb(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_as_wkb(&mut buf)?;
        Ok(buf)
    }

    fn from_wkb(bytes: &[u8]) -> Result<Self> {
        Self::read_from_wkb(&mut Cursor::new(bytes))
    }
}

fn wkb_code(t: FeatureType) -> u32 {
    match t {
        FeatureType::Point => 1,
        FeatureType::LineString => 2,
        FeatureType::Polygon => 3,
        FeatureType::MultiPoint => 4,
        FeatureType::MultiLineString => 5,
        FeatureType::MultiPolygon => 6,
    }
}

fn feature_type_for_code(code: u32) -> Result<FeatureType> {
    FeatureType::ALL
        .into_iter()
        .find(|t| wkb_code(*t) == code)
        .ok_or(Error::UnsupportedGeometryType(code))
}

enum EnvelopeType {
    Missing,
    XY,
    XYM,
    XYZ,
    XYZM,
}

impl EnvelopeType {
    fn len(&self) -> usize {
        match self {
            EnvelopeType::Missing => 0,
            EnvelopeType::XY => 32,
            EnvelopeType::XYZ | EnvelopeType::XYM => 48,
            EnvelopeType::XYZM => 64,
        }
    }
}

struct GPKGGeomFlags {
    extended: bool,
    empty_geom: bool,
    little_endian: bool,
    envelope: EnvelopeType,
}

impl GPKGGeomFlags {
    // https://www.geopackage.org/spec130/#flags_layout
    fn from_byte(b: u8) -> Result<Self> {
        let extended = ((b >> 5) & 1) > 0;
        let empty_geom = ((b >> 4) & 1) > 0;
        let little_endian = (b & 1) > 0;
        let envelope = match (b >> 1) & 0b111 {
            0 => EnvelopeType::Missing,
            1 => EnvelopeType::XY,
            2 => EnvelopeType::XYZ,
            3 => EnvelopeType::XYM,
            4 => EnvelopeType::XYZM,
            _ => return Err(Error::GeomDecodeError),
        };
        Ok(GPKGGeomFlags {
            extended,
            empty_geom,
            little_endian,
            envelope,
        })
    }

    fn to_byte(&self) -> u8 {
        let envelope_val = match self.envelope {
            EnvelopeType::Missing => 0,
            EnvelopeType::XY => 1,
            EnvelopeType::XYZ => 2,
            EnvelopeType::XYM => 3,
            EnvelopeType::XYZM => 4,
        };
        let mut flags = 0u8;
        flags |= (self.extended as u8) << 5;
        flags |= (self.empty_geom as u8) << 4;
        flags |= envelope_val << 1;
        flags |= self.little_endian as u8;
        flags
    }
}

impl<T: WkbField + Validate> GeoPackageWKB for T {
    fn to_gpkg_wkb(&self) -> Result<Vec<u8>> {
        let mut header: Vec<u8> = Vec::new();
        // magic number that is GP in ASCII
        header.extend_from_slice(&[0x47, 0x50]);
        // version number, 0 means version 1
        header.push(0);
        let flags = GPKGGeomFlags {
            extended: false,
            empty_geom: self.position_count() == 0,
            little_endian: true,
            envelope: EnvelopeType::Missing,
        };
        header.push(flags.to_byte());
        header.write_i32::<LittleEndian>(DEFAULT_SRS_ID)?;
        self.write_as_wkb(&mut header)?;
        Ok(header)
    }

    fn from_gpkg_wkb(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 8 || bytes[0..2] != [0x47, 0x50] {
            return Err(Error::GeomDecodeError);
        }
        let flags = GPKGGeomFlags::from_byte(bytes[3])?;
        let mut r = Cursor::new(&bytes[4..]);
        let srs = match flags.little_endian {
            true => r.read_i32::<LittleEndian>()?,
            false => r.read_i32::<BigEndian>()?,
        };
        log::trace!(
            "gpkg header: srs {}, envelope {} bytes, empty {}, extended {}",
            srs,
            flags.envelope.len(),
            flags.empty_geom,
            flags.extended
        );
        let geom_start = 8 + flags.envelope.len();
        if bytes.len() < geom_start {
            return Err(Error::GeomDecodeError);
        }
        T::from_wkb(&bytes[geom_start..])
    }
}

// plain coordinate sequences, always written little endian

fn write_position(w: &mut impl Write, p: &[f64]) -> Result<()> {
    match p {
        [x, y] => {
            w.write_f64::<LittleEndian>(*x)?;
            w.write_f64::<LittleEndian>(*y)?;
            Ok(())
        }
        _ => Err(Error::PositionArity(p.len())),
    }
}

// element counts are u32 on the wire
fn write_count(w: &mut impl Write, len: usize) -> Result<()> {
    let count = u32::try_from(len).map_err(|_| Error::GeomEncodeError)?;
    w.write_u32::<LittleEndian>(count)?;
    Ok(())
}

fn write_positions(w: &mut impl Write, positions: &[Position]) -> Result<()> {
    write_count(w, positions.len())?;
    for p in positions {
        write_position(w, p)?;
    }
    Ok(())
}

fn write_rings(w: &mut impl Write, rings: &[Vec<Position>]) -> Result<()> {
    write_count(w, rings.len())?;
    for ring in rings {
        write_positions(w, ring)?;
    }
    Ok(())
}

fn read_position<T: ByteOrder, U: Read>(r: &mut U) -> Result<Position> {
    let x = r.read_f64::<T>()?;
    let y = r.read_f64::<T>()?;
    Ok(vec![x, y])
}

fn read_positions<T: ByteOrder, U: Read>(r: &mut U) -> Result<Vec<Position>> {
    let num_points = r.read_u32::<T>()?;
    // the count comes off the wire, so it only bounds the loop, not the allocation
    let mut out_vec = Vec::new();
    for _ in 0..num_points {
        out_vec.push(read_position::<T, _>(r)?);
    }
    Ok(out_vec)
}

fn read_rings<T: ByteOrder, U: Read>(r: &mut U) -> Result<Vec<Vec<Position>>> {
    let num_rings = r.read_u32::<T>()?;
    let mut out_vec = Vec::new();
    for _ in 0..num_rings {
        out_vec.push(read_positions::<T, _>(r)?);
    }
    Ok(out_vec)
}

/// Reads the byte order flag and geometry type that start every WKB geometry.
/// Returns whether the body is little endian, and the type code.
fn read_header(r: &mut impl Read) -> Result<(bool, u32)> {
    let little_endian = match r.read_u8()? {
        0 => false,
        1 => true,
        _ => return Err(Error::GeomDecodeError),
    };
    let geom_type = match little_endian {
        true => r.read_u32::<LittleEndian>()?,
        false => r.read_u32::<BigEndian>()?,
    };
    log::trace!("wkb header: type {}, little endian {}", geom_type, little_endian);
    Ok((little_endian, geom_type))
}

// a trait meant to be used internally for the body that follows the WKB header
trait WKBBytesRaw: Sized {
    fn write_as_bytes(&self, w: &mut impl Write) -> Result<()>;
    fn read_from_bytes<T: ByteOrder, U: Read>(r: &mut U) -> Result<Self>;
}

impl WKBBytesRaw for PointField {
    fn write_as_bytes(&self, w: &mut impl Write) -> Result<()> {
        if self.coordinates.is_empty() {
            w.write_f64::<LittleEndian>(f64::NAN)?;
            w.write_f64::<LittleEndian>(f64::NAN)?;
            return Ok(());
        }
        write_position(w, &self.coordinates)
    }

    fn read_from_bytes<T: ByteOrder, U: Read>(r: &mut U) -> Result<Self> {
        let position = read_position::<T, _>(r)?;
        if position.iter().all(|v| v.is_nan()) {
            return Ok(PointField::new(Vec::new()));
        }
        Ok(PointField::new(position))
    }
}

impl WKBBytesRaw for LineStringField {
    fn write_as_bytes(&self, w: &mut impl Write) -> Result<()> {
        write_positions(w, &self.coordinates)
    }

    fn read_from_bytes<T: ByteOrder, U: Read>(r: &mut U) -> Result<Self> {
        Ok(LineStringField::new(read_positions::<T, _>(r)?))
    }
}

impl WKBBytesRaw for PolygonField {
    fn write_as_bytes(&self, w: &mut impl Write) -> Result<()> {
        write_rings(w, &self.coordinates)
    }

    fn read_from_bytes<T: ByteOrder, U: Read>(r: &mut U) -> Result<Self> {
        Ok(PolygonField::new(read_rings::<T, _>(r)?))
    }
}

// multipolygon members are polygons with exactly one ring
fn single_ring(polygon: PolygonField) -> Result<Vec<Position>> {
    let mut rings = polygon.into_coordinates();
    if rings.len() > 1 {
        return Err(Error::UnsupportedGeoType(
            "Polygon with interior rings in a MultiPolygon",
        ));
    }
    Ok(rings.pop().unwrap_or_default())
}

// multi geometries hold complete WKB geometries, each with its own header
macro_rules! multi_wkb_raw {
    ($t:ty, $member:ty, |$inner:ident| $wrap:expr, |$m:ident| $unwrap:expr) => {
        impl WKBBytesRaw for $t {
            fn write_as_bytes(&self, w: &mut impl Write) -> Result<()> {
                write_count(w, self.coordinates.len())?;
                for $inner in &self.coordinates {
                    let member: $member = $wrap;
                    member.write_as_wkb(w)?;
                }
                Ok(())
            }

            fn read_from_bytes<T: ByteOrder, U: Read>(r: &mut U) -> Result<Self> {
                let num_members = r.read_u32::<T>()?;
                let mut out_vec = Vec::new();
                for _ in 0..num_members {
                    let $m = <$member>::read_from_wkb(r)?;
                    out_vec.push($unwrap?);
                }
                Ok(<$t>::new(out_vec))
            }
        }
    };
}

multi_wkb_raw!(
    MultiPointField,
    PointField,
    |p| PointField::new(p.clone()),
    |member| Ok::<_, Error>(member.into_coordinates())
);
multi_wkb_raw!(
    MultiLineStringField,
    LineStringField,
    |l| LineStringField::new(l.clone()),
    |member| Ok::<_, Error>(member.into_coordinates())
);
multi_wkb_raw!(
    MultiPolygonField,
    PolygonField,
    |ring| PolygonField::new(vec![ring.clone()]),
    |member| single_ring(member)
);

// implementation of WkbField for a type that has an implementation of WKBBytesRaw
macro_rules! full_wkb {
    ($($t:ty),*) => {
        $(
            impl WkbField for $t {
                fn write_as_wkb(&self, w: &mut impl Write) -> Result<()> {
                    // we will always write as little endian
                    w.write_u8(1)?;
                    w.write_u32::<LittleEndian>(wkb_code(<$t>::FEATURE_TYPE))?;
                    self.write_as_bytes(w)
                }

                fn read_from_wkb(r: &mut impl Read) -> Result<Self> {
                    let (little_endian, geom_type) = read_header(r)?;
                    check_feature_type(<$t>::FEATURE_TYPE, feature_type_for_code(geom_type)?)?;
                    match little_endian {
                        false => Self::read_from_bytes::<BigEndian, _>(r),
                        true => Self::read_from_bytes::<LittleEndian, _>(r),
                    }
                }
            }
        )*
    };
}

full_wkb!(
    PointField,
    LineStringField,
    PolygonField,
    MultiPointField,
    MultiLineStringField,
    MultiPolygonField
);

impl WkbField for GeometryField {
    fn write_as_wkb(&self, w: &mut impl Write) -> Result<()> {
        dispatch!(self, f => f.write_as_wkb(w))
    }

    fn read_from_wkb(r: &mut impl Read) -> Result<Self> {
        // the header decides the variant, so it is read here and replayed to the variant reader
        let mut header = [0u8; 5];
        r.read_exact(&mut header)?;
        let (_, geom_type) = read_header(&mut &header[..])?;
        let mut body = (&header[..]).chain(r);
        Ok(match feature_type_for_code(geom_type)? {
            FeatureType::Point => PointField::read_from_wkb(&mut body)?.into(),
            FeatureType::LineString => LineStringField::read_from_wkb(&mut body)?.into(),
            FeatureType::Polygon => PolygonField::read_from_wkb(&mut body)?.into(),
            FeatureType::MultiPoint => MultiPointField::read_from_wkb(&mut body)?.into(),
            FeatureType::MultiLineString => MultiLineStringField::read_from_wkb(&mut body)?.into(),
            FeatureType::MultiPolygon => MultiPolygonField::read_from_wkb(&mut body)?.into(),
        })
    }
}

#[cfg(feature = "sqlite")]
mod sql {
    use super::GeoPackageWKB;
    use crate::result::Error;
    use crate::types::*;
    use rusqlite::types::{FromSql, FromSqlResult, ToSqlOutput, ValueRef};
    use rusqlite::ToSql;

    // once there is a GeoPackageWKB impl for the type
    // the to/from sql impls are really simple, so the macro
    // should help with boilerplate
    macro_rules! impl_gpkg_sql_wkb {
        ($($t:ty),*) => {
           $(
                impl ToSql for $t {
                    #[inline]
                    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                        Ok(ToSqlOutput::from(self.to_gpkg_wkb().map_err(|e| {
                            log::debug!("encoding {} for sqlite failed: {}", self.feature_type(), e);
                            rusqlite::Error::ToSqlConversionFailure(Box::new(Error::GeomEncodeError))
                        })?))
                    }
                }

                impl FromSql for $t {
                    #[inline]
                    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                        let bytes = value.as_blob()?;
                        <$t>::from_gpkg_wkb(bytes)
                            .map_err(|e| rusqlite::types::FromSqlError::Other(Box::new(e)))
                    }
                }
           )*
        };
    }

    impl_gpkg_sql_wkb! {
        PointField,
        LineStringField,
        PolygonField,
        MultiPointField,
        MultiLineStringField,
        MultiPolygonField,
        GeometryField
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_point() {
        let mut manual_buf = Vec::new();
        // little endian
        manual_buf.write_u8(1).unwrap();
        // geom type flag
        manual_buf.write_u32::<LittleEndian>(1).unwrap();
        manual_buf.write_f64::<LittleEndian>(-105.0).unwrap();
        manual_buf.write_f64::<LittleEndian>(40.0).unwrap();

        let point = PointField::new(vec![-105.0, 40.0]);
        let auto_buf = point.to_wkb().unwrap();

        assert_eq!(manual_buf, auto_buf);

        // lets also make sure we can read in our own output
        assert_eq!(PointField::from_wkb(&auto_buf).unwrap(), point);
    }

    #[test]
    fn read_big_endian_line() {
        let mut be_buf = Vec::new();
        be_buf.write_u8(0).unwrap();
        be_buf.write_u32::<BigEndian>(2).unwrap();
        be_buf.write_u32::<BigEndian>(2).unwrap();
        for v in [40.0, 5.0, 41.0, 6.0] {
            be_buf.write_f64::<BigEndian>(v).unwrap();
        }

        let line = LineStringField::from_wkb(&be_buf).unwrap();
        assert_eq!(line, LineStringField::new(vec![vec![40.0, 5.0], vec![41.0, 6.0]]));
    }

    #[test]
    fn empty_point_is_nan() {
        let buf = PointField::new(vec![]).to_wkb().unwrap();
        assert_eq!(buf.len(), 21);
        assert!(f64::from_le_bytes(buf[5..13].try_into().unwrap()).is_nan());
        assert_eq!(PointField::from_wkb(&buf).unwrap().coordinates, Vec::<f64>::new());
    }

    #[test]
    fn nan_point_reads_back_empty() {
        let buf = PointField::new(vec![f64::NAN, f64::NAN]).to_wkb().unwrap();
        assert_eq!(buf, PointField::new(vec![]).to_wkb().unwrap());
        assert!(PointField::from_wkb(&buf).unwrap().coordinates.is_empty());
    }

    #[test]
    fn counts_must_fit_in_u32() {
        let mut buf = Vec::new();
        write_count(&mut buf, u32::MAX as usize).unwrap();
        assert_eq!(buf, u32::MAX.to_le_bytes());
        #[cfg(target_pointer_width = "64")]
        assert!(matches!(
            write_count(&mut Vec::new(), u32::MAX as usize + 1),
            Err(Error::GeomEncodeError)
        ));
    }

    #[test]
    fn three_value_positions_are_refused() {
        let field = MultiPointField::new(vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0]]);
        assert!(matches!(field.to_wkb(), Err(Error::PositionArity(3))));
    }

    #[test]
    fn multi_geometries_round_trip() {
        let multi_point = MultiPointField::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(
            MultiPointField::from_wkb(&multi_point.to_wkb().unwrap()).unwrap(),
            multi_point
        );

        let rings = vec![
            vec![vec![0.0, 0.0], vec![3.0, 6.0], vec![6.0, 1.0], vec![0.0, 0.0]],
            vec![vec![1.0, 1.0], vec![2.0, 2.0]],
        ];
        let multi_line = MultiLineStringField::new(rings.clone());
        assert_eq!(
            MultiLineStringField::from_wkb(&multi_line.to_wkb().unwrap()).unwrap(),
            multi_line
        );
        let multi_polygon = MultiPolygonField::new(rings);
        let buf = multi_polygon.to_wkb().unwrap();
        // count, then a polygon header and a ring count of one for each member
        assert_eq!(&buf[5..9], &2u32.to_le_bytes());
        assert_eq!(&buf[9..14], &[1, 3, 0, 0, 0]);
        assert_eq!(&buf[14..18], &1u32.to_le_bytes());
        assert_eq!(MultiPolygonField::from_wkb(&buf).unwrap(), multi_polygon);
    }

    #[test]
    fn wrong_type_code() {
        let buf = PointField::new(vec![1.0, 2.0]).to_wkb().unwrap();
        assert!(matches!(
            LineStringField::from_wkb(&buf),
            Err(Error::FeatureTypeMismatch {
                expected: FeatureType::LineString,
                found: FeatureType::Point
            })
        ));

        let mut unknown = buf.clone();
        unknown[1] = 7;
        assert!(matches!(
            PointField::from_wkb(&unknown),
            Err(Error::UnsupportedGeometryType(7))
        ));

        let mut bad_order = buf;
        bad_order[0] = 2;
        assert!(matches!(
            PointField::from_wkb(&bad_order),
            Err(Error::GeomDecodeError)
        ));
    }

    #[test]
    fn truncated_input() {
        let buf = PolygonField::new(vec![vec![vec![0.0, 0.0], vec![1.0, 1.0]]])
            .to_wkb()
            .unwrap();
        assert!(matches!(
            PolygonField::from_wkb(&buf[..buf.len() - 4]),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn geometry_field_dispatches_on_header() {
        let fields: Vec<GeometryField> = vec![
            PointField::new(vec![1.0, 2.0]).into(),
            LineStringField::new(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).into(),
            PolygonField::new(vec![vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 0.0]]]).into(),
            MultiPointField::new(vec![]).into(),
            MultiPolygonField::new(vec![vec![vec![0.0, 0.0]]]).into(),
        ];
        for field in fields {
            let buf = field.to_wkb().unwrap();
            assert_eq!(GeometryField::from_wkb(&buf).unwrap(), field);
        }
    }

    #[test]
    fn gpkg_header() {
        let point = PointField::new(vec![-105.0, 40.0]);
        let blob = point.to_gpkg_wkb().unwrap();
        assert_eq!(&blob[0..4], &[0x47, 0x50, 0, 0b0000_0001]);
        assert_eq!(&blob[4..8], &4326i32.to_le_bytes());
        assert_eq!(&blob[8..], &point.to_wkb().unwrap()[..]);
        assert_eq!(PointField::from_gpkg_wkb(&blob).unwrap(), point);

        let empty = LineStringField::new(vec![]).to_gpkg_wkb().unwrap();
        assert_eq!(empty[3], 0b0001_0001);
    }

    #[test]
    fn gpkg_envelope_is_skipped() {
        let line = LineStringField::new(vec![vec![0.0, 0.0], vec![2.0, 1.0]]);
        let mut blob = vec![0x47, 0x50, 0, 0b0000_0011];
        blob.extend_from_slice(&4326i32.to_le_bytes());
        for v in [0.0f64, 2.0, 0.0, 1.0] {
            blob.extend_from_slice(&v.to_le_bytes());
        }
        blob.extend(line.to_wkb().unwrap());
        assert_eq!(
            GeometryField::from_gpkg_wkb(&blob).unwrap(),
            GeometryField::from(line)
        );
    }

    #[test]
    fn gpkg_rejects_bad_blobs() {
        assert!(matches!(
            PointField::from_gpkg_wkb(b"XX\0\x01\0\0\0\0"),
            Err(Error::GeomDecodeError)
        ));
        // envelope code 5 does not exist
        assert!(matches!(
            PointField::from_gpkg_wkb(&[0x47, 0x50, 0, 0b0000_1011, 0, 0, 0, 0]),
            Err(Error::GeomDecodeError)
        ));
        assert!(matches!(
            PointField::from_gpkg_wkb(&[0x47, 0x50, 0]),
            Err(Error::GeomDecodeError)
        ));
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sql_tests {
    use crate::types::*;
    use rusqlite::{params, Connection};
    use tempfile::tempdir;

    #[test]
    fn store_and_load_fields() {
        let dir = tempdir().unwrap();
        let filename = dir.path().join("fields.db");
        let conn = Connection::open(&filename).unwrap();
        conn.execute("CREATE TABLE shapes (id INTEGER PRIMARY KEY, geom BLOB NOT NULL)", [])
            .unwrap();

        let polygon = PolygonField::new(vec![vec![
            vec![0.0, 0.0],
            vec![3.0, 6.0],
            vec![6.0, 1.0],
            vec![0.0, 0.0],
        ]]);
        let point: GeometryField = PointField::new(vec![40.0, 5.0]).into();
        conn.execute("INSERT INTO shapes (id, geom) VALUES (?1, ?2)", params![1, polygon])
            .unwrap();
        conn.execute("INSERT INTO shapes (id, geom) VALUES (?1, ?2)", params![2, point])
            .unwrap();

        let retrieved: PolygonField = conn
            .query_row("SELECT geom FROM shapes WHERE id = 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(retrieved, polygon);
        let retrieved: GeometryField = conn
            .query_row("SELECT geom FROM shapes WHERE id = 2", [], |row| row.get(0))
            .unwrap();
        assert_eq!(retrieved, point);

        let wrong: rusqlite::Result<LineStringField> =
            conn.query_row("SELECT geom FROM shapes WHERE id = 2", [], |row| row.get(0));
        assert!(wrong.is_err());
    }

    #[test]
    fn oversized_positions_fail_to_bind() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE shapes (geom BLOB)", []).unwrap();
        let point = PointField::new(vec![1.0, 2.0, 3.0]);
        assert!(conn
            .execute("INSERT INTO shapes (geom) VALUES (?1)", params![point])
            .is_err());
    }
}
