//! Composing and decomposing `SDO_GTYPE` codes.
//!
//! A GTYPE packs three values as `D * 1000 + L * 100 + TT`:
//!
//! - `D`, the coordinate dimension (2, 3 or 4)
//! - `L`, the measure dimension: 0 when the geometry is not measured, otherwise the (1-based)
//!   coordinate slot holding the measure
//! - `TT`, the [`GeometryKind`] code
//!
//! Decomposition uses truncating division, so `compose(decompose(code)) == code` holds for every
//! `i32`, negative values included.

use geo_traits::Dimensions;

use crate::codes::GeometryKind;

/// Compute the GTYPE code for the given dimension, measure dimension and geometry type code.
///
/// No validation is performed. Arithmetic wraps rather than panicking on overflow.
pub fn compose(dim: i32, measure_dim: i32, geom_type: i32) -> i32 {
    dim.wrapping_mul(1000)
        .wrapping_add(measure_dim.wrapping_mul(100))
        .wrapping_add(geom_type)
}

/// Split a GTYPE code into `(dim, measure_dim, geom_type)`.
pub fn decompose(gtype: i32) -> (i32, i32, i32) {
    (gtype_dim(gtype), gtype_measure_dim(gtype), gtype_geom_type(gtype))
}

/// The coordinate dimension (`D`) of a GTYPE.
pub fn gtype_dim(gtype: i32) -> i32 {
    gtype / 1000
}

/// The measure dimension (`L`) of a GTYPE.
///
/// 0 for geometries without a measure.
pub fn gtype_measure_dim(gtype: i32) -> i32 {
    (gtype % 1000) / 100
}

/// The geometry type code (`TT`) of a GTYPE.
pub fn gtype_geom_type(gtype: i32) -> i32 {
    gtype % 100
}

/// A decomposed GTYPE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GType {
    pub dim: i32,
    pub measure_dim: i32,
    pub geom_type: i32,
}

impl GType {
    pub fn new(dim: i32, measure_dim: i32, geom_type: i32) -> Self {
        Self {
            dim,
            measure_dim,
            geom_type,
        }
    }

    /// Build a GType for a coordinate layout and geometry kind.
    ///
    /// Measured layouts store the measure in the last slot.
    pub fn from_dimensions(dims: Dimensions, kind: GeometryKind) -> Self {
        let (dim, measure_dim) = match dims {
            Dimensions::Xy => (2, 0),
            Dimensions::Xyz => (3, 0),
            Dimensions::Xym => (3, 3),
            Dimensions::Xyzm => (4, 4),
            Dimensions::Unknown(n) => (i32::try_from(n).unwrap_or(0), 0),
        };
        Self::new(dim, measure_dim, kind.code())
    }

    /// The packed GTYPE code.
    pub fn code(&self) -> i32 {
        compose(self.dim, self.measure_dim, self.geom_type)
    }

    /// The geometry kind, [`GeometryKind::Unknown`] for codes outside the table.
    pub fn kind(&self) -> GeometryKind {
        GeometryKind::from_code(self.geom_type)
    }

    /// The coordinate layout described by this GType.
    ///
    /// A 4D geometry measured in its third slot has no named layout and is reported as
    /// `Unknown(4)`.
    pub fn dimensions(&self) -> Dimensions {
        match (self.dim, self.measure_dim) {
            (2, 0) => Dimensions::Xy,
            (3, 0) => Dimensions::Xyz,
            (3, 3) => Dimensions::Xym,
            (4, 0) | (4, 4) => Dimensions::Xyzm,
            (dim, _) => Dimensions::Unknown(usize::try_from(dim).unwrap_or(0)),
        }
    }
}

impl From<i32> for GType {
    fn from(gtype: i32) -> Self {
        let (dim, measure_dim, geom_type) = decompose(gtype);
        Self::new(dim, measure_dim, geom_type)
    }
}

impl From<GType> for i32 {
    fn from(value: GType) -> Self {
        value.code()
    }
}
