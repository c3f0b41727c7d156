//! Map source geometries onto `SDO_GTYPE` codes for the write path.

use geo_traits::{GeometryTrait, GeometryType};

use crate::codes::GeometryKind;
use crate::gtype::GType;

/// The [`GeometryKind`] of a source geometry.
///
/// `None`, and geometry types without an `SDO_GEOMETRY` counterpart (`Rect`, `Triangle`, `Line`),
/// map to [`GeometryKind::Unknown`].
pub fn geometry_kind<G: GeometryTrait>(geom: Option<&G>) -> GeometryKind {
    let Some(geom) = geom else {
        return GeometryKind::Unknown;
    };
    match geom.as_type() {
        GeometryType::Point(_) => GeometryKind::Point,
        GeometryType::LineString(_) => GeometryKind::Line,
        GeometryType::Polygon(_) => GeometryKind::Polygon,
        GeometryType::MultiPoint(_) => GeometryKind::MultiPoint,
        GeometryType::MultiLineString(_) => GeometryKind::MultiLine,
        GeometryType::MultiPolygon(_) => GeometryKind::MultiPolygon,
        GeometryType::GeometryCollection(_) => GeometryKind::Collection,
        GeometryType::Rect(_) | GeometryType::Triangle(_) | GeometryType::Line(_) => {
            GeometryKind::Unknown
        }
    }
}

/// The full GTYPE code for a source geometry.
///
/// Measured geometries keep the measure in their last coordinate slot.
pub fn gtype_of<G: GeometryTrait>(geom: &G) -> i32 {
    GType::from_dimensions(geom.dim(), geometry_kind(Some(geom))).code()
}
