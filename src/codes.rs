//! Code tables of the `SDO_GEOMETRY` storage format.
//!
//! The numeric values are persisted by the database and must never change.

#![allow(non_upper_case_globals)]

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Oracle type name of the geometry object.
pub const TYPE_GEOMETRY: &str = "MDSYS.SDO_GEOMETRY";

/// Oracle type name of the element directory array.
pub const TYPE_ELEM_INFO_ARRAY: &str = "MDSYS.SDO_ELEM_INFO_ARRAY";

/// Oracle type name of the ordinate array.
pub const TYPE_ORDINATE_ARRAY: &str = "MDSYS.SDO_ORDINATE_ARRAY";

/// Oracle type name of the direct point record.
pub const TYPE_POINT_TYPE: &str = "MDSYS.SDO_POINT_TYPE";

/// SRID value meaning "no spatial reference".
pub const SRID_NULL: i32 = -1;

/// Geometry type, stored in the last two digits (`TT`) of a GTYPE.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum GeometryKind {
    Unknown = 0,
    Point = 1,
    /// Line or curve
    Line = 2,
    Polygon = 3,
    Collection = 4,
    MultiPoint = 5,
    /// Multi line or multi curve
    MultiLine = 6,
    MultiPolygon = 7,
}

impl GeometryKind {
    /// Look up a kind from a `TT` code, mapping codes outside the table to
    /// [`GeometryKind::Unknown`].
    pub fn from_code(code: i32) -> Self {
        Self::try_from(code).unwrap_or(Self::Unknown)
    }

    /// The `TT` code of this kind.
    pub fn code(&self) -> i32 {
        (*self).into()
    }
}

/// The `SDO_ETYPE` of an element directory triplet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum ElementType {
    Point = 1,
    Line = 2,
    /// Polygon ring whose role (shell or hole) is given by its orientation. Deprecated.
    Polygon = 3,
    /// Counter-clockwise exterior polygon ring.
    PolygonExterior = 1003,
    /// Clockwise interior polygon ring.
    PolygonInterior = 2003,
}

/// The `SDO_INTERPRETATION` of an element directory triplet.
///
/// Only [`Interpretation::Straight`] and [`Interpretation::Rectangle`] map onto simple
/// features. Arcs and circles are listed so they can be recognized and refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum Interpretation {
    /// Straight-segment point, line string or polygon ring.
    Straight = 1,
    Arc = 2,
    /// Two-point bounding box shorthand.
    Rectangle = 3,
    Circle = 4,
}

impl Interpretation {
    pub const Point: Interpretation = Interpretation::Straight;
    pub const LineString: Interpretation = Interpretation::Straight;
    pub const Polygon: Interpretation = Interpretation::Straight;

    /// Whether this interpretation maps onto simple features.
    pub fn is_supported(&self) -> bool {
        matches!(self, Interpretation::Straight | Interpretation::Rectangle)
    }
}
