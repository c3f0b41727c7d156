//! The `SDO_GEOMETRY` container and its storage record.

use std::fmt;

use geo_traits::Dimensions;
use serde::{Deserialize, Serialize};

use crate::codes::{GeometryKind, SRID_NULL};
use crate::elem_info::{ElemInfo, Triplet, TRIPLET_SIZE};
use crate::eq::{elem_info_eq, ordinates_eq};
use crate::error::{Result, SdoError};
use crate::gtype::GType;

/// The five storage fields of an `SDO_GEOMETRY` value, as read from or written to the database.
///
/// NaN values in `point` and `ordinates` (an absent measure or Z) serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SdoParts {
    pub gtype: i32,
    pub srid: i32,
    #[serde(default, with = "nan_as_null")]
    pub point: Option<Vec<f64>>,
    pub elem_info: Option<Vec<i32>>,
    #[serde(default, with = "nan_as_null")]
    pub ordinates: Option<Vec<f64>>,
}

mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        values: &Option<Vec<f64>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        values
            .as_ref()
            .map(|values| {
                values
                    .iter()
                    .map(|value| (!value.is_nan()).then_some(*value))
                    .collect::<Vec<_>>()
            })
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<f64>>, D::Error> {
        let values = Option::<Vec<Option<f64>>>::deserialize(deserializer)?;
        Ok(values.map(|values| {
            values
                .into_iter()
                .map(|value| value.unwrap_or(f64::NAN))
                .collect()
        }))
    }
}

/// The contents of an Oracle `SDO_GEOMETRY` value.
///
/// The coordinate dimension, measure dimension and geometry type are derived from the GTYPE
/// once, on construction. The value is immutable afterwards.
///
/// Equality compares the GTYPE and the three arrays, ignoring the SRID. NaN ordinates compare
/// equal to each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "SdoParts", into = "SdoParts")]
pub struct SdoGeometry {
    gtype: i32,
    srid: i32,
    point: Option<Vec<f64>>,
    elem_info: Option<Vec<i32>>,
    ordinates: Option<Vec<f64>>,
    geom_type: i32,
    ord_dim: i32,
    lrs_dim: i32,
}

impl SdoGeometry {
    /// Create a new geometry from the raw storage fields.
    ///
    /// This never fails. A malformed element directory is kept as-is and read through the
    /// bounds-safe accessors; use [`SdoGeometry::try_new`] to reject it instead.
    pub fn new(
        gtype: i32,
        srid: i32,
        point: Option<Vec<f64>>,
        elem_info: Option<Vec<i32>>,
        ordinates: Option<Vec<f64>>,
    ) -> Self {
        if let Some(elem_info) = &elem_info {
            if elem_info.len() % TRIPLET_SIZE != 0 {
                log::debug!(
                    "SDO_ELEM_INFO of length {} has a partial trailing triplet",
                    elem_info.len()
                );
            }
        }
        let gtype_parts = GType::from(gtype);
        Self {
            gtype,
            srid,
            point,
            elem_info,
            ordinates,
            geom_type: gtype_parts.geom_type,
            ord_dim: gtype_parts.dim,
            lrs_dim: gtype_parts.measure_dim,
        }
    }

    /// Create a geometry described by an element directory and ordinates.
    pub fn with_elements(gtype: i32, srid: i32, elem_info: Vec<i32>, ordinates: Vec<f64>) -> Self {
        Self::new(gtype, srid, None, Some(elem_info), Some(ordinates))
    }

    /// Create a geometry stored as a direct point.
    pub fn with_point(gtype: i32, srid: i32, point: Vec<f64>) -> Self {
        Self::new(gtype, srid, Some(point), None, None)
    }

    /// Create a new geometry, validating the storage fields.
    ///
    /// # Errors
    ///
    /// - the element directory length is not a multiple of 3
    /// - a starting offset is below 1 or decreases
    /// - both a direct point and an element directory are present, or neither is present while
    ///   ordinates are
    /// - the direct point does not hold 3 or 4 values
    pub fn try_new(
        gtype: i32,
        srid: i32,
        point: Option<Vec<f64>>,
        elem_info: Option<Vec<i32>>,
        ordinates: Option<Vec<f64>>,
    ) -> Result<Self> {
        match (&point, &elem_info) {
            (Some(_), Some(_)) => return Err(SdoError::PointAndElements),
            (None, None) if ordinates.is_some() => return Err(SdoError::PointAndElements),
            _ => {}
        }

        if let Some(point) = &point {
            if !(3..=4).contains(&point.len()) {
                return Err(SdoError::InvalidPoint(point.len()));
            }
        }

        if let Some(elem_info) = &elem_info {
            if elem_info.len() % TRIPLET_SIZE != 0 {
                return Err(SdoError::MalformedElemInfo(elem_info.len()));
            }
            let mut prev = 1;
            for (element, chunk) in elem_info.chunks_exact(TRIPLET_SIZE).enumerate() {
                let offset = chunk[0];
                if offset < prev {
                    return Err(SdoError::InvalidStartingOffset { element, offset });
                }
                prev = offset;
            }
        }

        Ok(Self::new(gtype, srid, point, elem_info, ordinates))
    }

    /// The packed GTYPE code.
    pub fn gtype(&self) -> i32 {
        self.gtype
    }

    /// The SRID, or [`SRID_NULL`].
    pub fn srid(&self) -> i32 {
        self.srid
    }

    /// The SRID, or `None` for [`SRID_NULL`].
    pub fn srid_opt(&self) -> Option<i32> {
        (self.srid != SRID_NULL).then_some(self.srid)
    }

    pub fn point(&self) -> Option<&[f64]> {
        self.point.as_deref()
    }

    pub fn elem_info(&self) -> Option<&[i32]> {
        self.elem_info.as_deref()
    }

    pub fn ordinates(&self) -> Option<&[f64]> {
        self.ordinates.as_deref()
    }

    /// The geometry type code (`TT`) of the GTYPE.
    pub fn geom_type(&self) -> i32 {
        self.geom_type
    }

    /// The geometry type of the GTYPE, [`GeometryKind::Unknown`] for codes outside the table.
    pub fn kind(&self) -> GeometryKind {
        GeometryKind::from_code(self.geom_type)
    }

    /// The coordinate dimension (`D`) of the GTYPE.
    pub fn ord_dim(&self) -> i32 {
        self.ord_dim
    }

    /// The measure dimension (`L`) of the GTYPE; 0 if the geometry is not measured.
    pub fn lrs_dim(&self) -> i32 {
        self.lrs_dim
    }

    /// The coordinate layout of this geometry.
    pub fn dimensions(&self) -> Dimensions {
        GType::new(self.ord_dim, self.lrs_dim, self.geom_type).dimensions()
    }

    /// Whether this is an unmeasured point stored through the direct point shortcut.
    pub fn is_compact_point(&self) -> bool {
        self.lrs_dim == 0
            && self.geom_type == GeometryKind::Point.code()
            && self.point.is_some()
            && self.elem_info.is_none()
    }

    /// The number of ordinates, 0 if there are none.
    pub fn ordinate_len(&self) -> usize {
        self.ordinates.as_ref().map_or(0, Vec::len)
    }

    /// A bounds-safe view of the element directory.
    ///
    /// An absent directory reads as an empty one.
    pub fn elements(&self) -> ElemInfo<'_> {
        ElemInfo::new(self.elem_info().unwrap_or_default(), self.ordinate_len())
    }

    /// The number of complete triplets in the element directory.
    pub fn num_elements(&self) -> usize {
        self.elements().num_elements()
    }

    /// The 1-based starting offset of an element.
    ///
    /// For an index past the last triplet this is `ordinate_len() + 1`.
    pub fn starting_offset(&self, elem_index: usize) -> i32 {
        self.elements().starting_offset(elem_index)
    }

    /// The `SDO_ETYPE` of an element, or -1 if out of range.
    pub fn etype(&self, elem_index: usize) -> i32 {
        self.elements().etype(elem_index)
    }

    /// The `SDO_INTERPRETATION` of an element, or -1 if out of range.
    pub fn interpretation(&self, elem_index: usize) -> i32 {
        self.elements().interpretation(elem_index)
    }

    pub fn triplet(&self, elem_index: usize) -> Option<Triplet> {
        self.elements().triplet(elem_index)
    }

    /// The ordinates belonging to an element.
    pub fn element_ordinates(&self, elem_index: usize) -> Option<&[f64]> {
        let range = self.elements().ordinate_range(elem_index)?;
        self.ordinates.as_ref()?.get(range)
    }

    /// Consume this geometry, returning its storage fields.
    pub fn into_parts(self) -> SdoParts {
        SdoParts {
            gtype: self.gtype,
            srid: self.srid,
            point: self.point,
            elem_info: self.elem_info,
            ordinates: self.ordinates,
        }
    }
}

impl From<SdoParts> for SdoGeometry {
    fn from(value: SdoParts) -> Self {
        Self::new(
            value.gtype,
            value.srid,
            value.point,
            value.elem_info,
            value.ordinates,
        )
    }
}

impl From<SdoGeometry> for SdoParts {
    fn from(value: SdoGeometry) -> Self {
        value.into_parts()
    }
}

impl PartialEq for SdoGeometry {
    fn eq(&self, other: &Self) -> bool {
        self.gtype == other.gtype
            && ordinates_eq(self.point(), other.point())
            && elem_info_eq(self.elem_info(), other.elem_info())
            && ordinates_eq(self.ordinates(), other.ordinates())
    }
}

fn write_grouped<T: fmt::Debug>(
    f: &mut fmt::Formatter<'_>,
    values: Option<&[T]>,
    group: usize,
) -> fmt::Result {
    let Some(values) = values else {
        return f.write_str("null");
    };
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
            if group > 0 && i % group == 0 {
                f.write_str("  ")?;
            }
        }
        write!(f, "{value:?}")?;
    }
    Ok(())
}

impl fmt::Display for SdoGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GTYPE={} SRID={} ELEM_INFO=", self.gtype, self.srid)?;
        write_grouped(f, self.elem_info(), TRIPLET_SIZE)?;
        f.write_str(" ORDS=")?;
        write_grouped(f, self.ordinates(), usize::try_from(self.ord_dim).unwrap_or(0))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{
        collection, collection_elem_info, collection_ordinates, compact_point, measured_line,
    };

    #[test]
    fn derives_gtype_fields() {
        let geom = collection();
        assert_eq!(geom.gtype(), 2004);
        assert_eq!(geom.ord_dim(), 2);
        assert_eq!(geom.lrs_dim(), 0);
        assert_eq!(geom.geom_type(), 4);
        assert_eq!(geom.kind(), GeometryKind::Collection);
        assert_eq!(geom.dimensions(), Dimensions::Xy);

        let measured = SdoGeometry::with_point(4401, SRID_NULL, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(measured.ord_dim(), 4);
        assert_eq!(measured.lrs_dim(), 4);
        assert_eq!(measured.kind(), GeometryKind::Point);
        assert_eq!(measured.dimensions(), Dimensions::Xyzm);
    }

    #[test]
    fn srid() {
        assert_eq!(collection().srid_opt(), Some(8307));
        let geom = SdoGeometry::with_point(2001, SRID_NULL, vec![1.0, 2.0, f64::NAN]);
        assert_eq!(geom.srid(), -1);
        assert_eq!(geom.srid_opt(), None);
    }

    #[test]
    fn element_accessors() {
        let geom = collection();
        assert_eq!(geom.num_elements(), 3);
        assert_eq!(geom.etype(1), 1003);
        assert_eq!(geom.etype(2), 2003);
        assert_eq!(geom.interpretation(2), 1);
        assert_eq!(geom.etype(3), -1);
        assert_eq!(geom.interpretation(3), -1);
        assert_eq!(geom.starting_offset(2), 15);
        assert_eq!(geom.starting_offset(3), geom.ordinate_len() as i32 + 1);
        assert_eq!(geom.ordinate_len(), 22);
    }

    #[test]
    fn element_ordinates() {
        let geom = collection();
        let ordinates = collection_ordinates();
        assert_eq!(geom.element_ordinates(0), Some(&ordinates[0..4]));
        assert_eq!(geom.element_ordinates(2), Some(&ordinates[14..22]));
        assert_eq!(geom.element_ordinates(3), None);
        assert_eq!(compact_point().element_ordinates(0), None);
    }

    #[test]
    fn absent_arrays() {
        let geom = compact_point();
        assert_eq!(geom.num_elements(), 0);
        assert_eq!(geom.ordinate_len(), 0);
        assert_eq!(geom.starting_offset(0), 1);
        assert_eq!(geom.etype(0), -1);
        assert!(geom.triplet(0).is_none());
    }

    #[test]
    fn malformed_elem_info_is_kept() {
        let geom = SdoGeometry::with_elements(2002, SRID_NULL, vec![1, 2, 1, 5], vec![0.0; 6]);
        assert_eq!(geom.num_elements(), 1);
        assert_eq!(geom.elem_info().unwrap().len(), 4);
        assert_eq!(geom.etype(1), -1);
    }

    #[test]
    fn compact_point_detection() {
        assert!(compact_point().is_compact_point());

        // measured point
        let geom = SdoGeometry::with_point(3301, SRID_NULL, vec![1.0, 2.0, 3.0]);
        assert!(!geom.is_compact_point());

        // point stored through the element directory
        let geom = SdoGeometry::with_elements(2001, SRID_NULL, vec![1, 1, 1], vec![1.0, 2.0]);
        assert!(!geom.is_compact_point());

        // both populated
        let geom = SdoGeometry::new(
            2001,
            SRID_NULL,
            Some(vec![1.0, 2.0, f64::NAN]),
            Some(vec![1, 1, 1]),
            Some(vec![1.0, 2.0]),
        );
        assert!(!geom.is_compact_point());

        // not a point
        let geom = SdoGeometry::with_point(2002, SRID_NULL, vec![1.0, 2.0, f64::NAN]);
        assert!(!geom.is_compact_point());

        // no point at all
        let geom = SdoGeometry::new(2001, SRID_NULL, None, None, None);
        assert!(!geom.is_compact_point());
    }

    #[test]
    fn equality_ignores_srid() {
        let a = collection();
        let b = SdoGeometry::with_elements(
            2004,
            SRID_NULL,
            collection_elem_info(),
            collection_ordinates(),
        );
        assert_eq!(a, b);
        assert_ne!(a.srid(), b.srid());
    }

    #[test]
    fn equality_tolerates_nan() {
        let a = SdoGeometry::with_elements(
            3302,
            SRID_NULL,
            vec![1, 2, 1],
            vec![0.0, 0.0, f64::NAN, 1.0, 1.0, 5.0],
        );
        let b = a.clone();
        assert_eq!(a, b);

        let c = SdoGeometry::with_elements(
            3302,
            SRID_NULL,
            vec![1, 2, 1],
            vec![0.0, 0.0, 0.0, 1.0, 1.0, 5.0],
        );
        assert_ne!(a, c);

        let p = SdoGeometry::with_point(2001, 4326, vec![1.0, 2.0, f64::NAN]);
        let q = SdoGeometry::with_point(2001, 8307, vec![1.0, 2.0, f64::NAN]);
        assert_eq!(p, q);
    }

    #[test]
    fn equality_differences() {
        let a = collection();

        let other_gtype = SdoGeometry::with_elements(
            3004,
            8307,
            collection_elem_info(),
            collection_ordinates(),
        );
        assert_ne!(a, other_gtype);

        let mut elem_info = collection_elem_info();
        elem_info[4] = 3;
        let other_elem_info =
            SdoGeometry::with_elements(2004, 8307, elem_info, collection_ordinates());
        assert_ne!(a, other_elem_info);

        let no_ordinates =
            SdoGeometry::new(2004, 8307, None, Some(collection_elem_info()), None);
        assert_ne!(a, no_ordinates);

        let with_point = SdoGeometry::new(
            2004,
            8307,
            Some(vec![0.0, 0.0, 0.0]),
            Some(collection_elem_info()),
            Some(collection_ordinates()),
        );
        assert_ne!(a, with_point);
    }

    #[test]
    fn display() {
        let geom = SdoGeometry::with_elements(
            2003,
            8307,
            vec![1, 1003, 1, 9, 2003, 1],
            vec![0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 0.0, 1.0, 1.0, 2.0, 2.0],
        );
        assert_eq!(
            geom.to_string(),
            "GTYPE=2003 SRID=8307 ELEM_INFO=1,1003,1,  9,2003,1 \
             ORDS=0.0,0.0,  10.0,0.0,  10.0,10.0,  0.0,0.0,  1.0,1.0,  2.0,2.0"
        );
    }

    #[test]
    fn display_null_arrays() {
        let geom = SdoGeometry::with_point(3001, SRID_NULL, vec![1.0, 2.0, f64::NAN]);
        assert_eq!(geom.to_string(), "GTYPE=3001 SRID=-1 ELEM_INFO=null ORDS=null");

        let geom = SdoGeometry::with_elements(3001, 0, vec![1, 1, 1], vec![1.0, 2.0, f64::NAN]);
        assert_eq!(geom.to_string(), "GTYPE=3001 SRID=0 ELEM_INFO=1,1,1 ORDS=1.0,2.0,NaN");
    }

    #[test]
    fn display_zero_dimension() {
        let geom = SdoGeometry::with_elements(1, SRID_NULL, vec![1, 1, 1], vec![1.0, 2.0]);
        assert_eq!(geom.to_string(), "GTYPE=1 SRID=-1 ELEM_INFO=1,1,1 ORDS=1.0,2.0");
    }

    #[test]
    fn try_new_accepts_valid() {
        let geom = SdoGeometry::try_new(
            2004,
            8307,
            None,
            Some(collection_elem_info()),
            Some(collection_ordinates()),
        )
        .unwrap();
        assert_eq!(geom, collection());

        let point = SdoGeometry::try_new(2001, SRID_NULL, Some(vec![1.0, 2.0, f64::NAN]), None, None)
            .unwrap();
        assert!(point.is_compact_point());

        assert!(SdoGeometry::try_new(2000, SRID_NULL, None, None, None).is_ok());
        assert!(SdoGeometry::try_new(2000, SRID_NULL, None, Some(vec![]), Some(vec![])).is_ok());
    }

    #[test]
    fn try_new_rejects_malformed() {
        assert_eq!(
            SdoGeometry::try_new(2002, SRID_NULL, None, Some(vec![1, 2]), Some(vec![0.0; 4]))
                .unwrap_err(),
            SdoError::MalformedElemInfo(2)
        );
        assert_eq!(
            SdoGeometry::try_new(
                2006,
                SRID_NULL,
                None,
                Some(vec![5, 2, 1, 1, 2, 1]),
                Some(vec![0.0; 8])
            )
            .unwrap_err(),
            SdoError::InvalidStartingOffset {
                element: 1,
                offset: 1
            }
        );
        assert_eq!(
            SdoGeometry::try_new(2002, SRID_NULL, None, Some(vec![0, 2, 1]), Some(vec![0.0; 4]))
                .unwrap_err(),
            SdoError::InvalidStartingOffset {
                element: 0,
                offset: 0
            }
        );
        assert_eq!(
            SdoGeometry::try_new(
                2001,
                SRID_NULL,
                Some(vec![1.0, 2.0, 3.0]),
                Some(vec![1, 1, 1]),
                Some(vec![1.0, 2.0])
            )
            .unwrap_err(),
            SdoError::PointAndElements
        );
        assert_eq!(
            SdoGeometry::try_new(2002, SRID_NULL, None, None, Some(vec![1.0, 2.0])).unwrap_err(),
            SdoError::PointAndElements
        );
        assert_eq!(
            SdoGeometry::try_new(2001, SRID_NULL, Some(vec![1.0, 2.0]), None, None).unwrap_err(),
            SdoError::InvalidPoint(2)
        );
    }

    #[test]
    fn parts_round_trip() {
        let geom = collection();
        let parts = geom.clone().into_parts();
        assert_eq!(parts.gtype, 2004);
        assert_eq!(parts.srid, 8307);
        assert_eq!(parts.elem_info, Some(collection_elem_info()));
        assert_eq!(SdoGeometry::from(parts), geom);
    }

    #[test]
    fn serde_json() {
        let geom = collection();
        let json = serde_json::to_string(&geom).unwrap();
        assert!(json.contains("\"gtype\":2004"));
        assert!(!json.contains("ord_dim"));

        let back: SdoGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, geom);
        assert_eq!(back.srid(), 8307);
        assert_eq!(back.ord_dim(), 2);
        assert_eq!(back.kind(), GeometryKind::Collection);
    }

    #[test]
    fn serde_json_nan() {
        let point = compact_point();
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"point\":[1.0,2.0,null]"));
        let back: SdoGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, point);
        assert!(back.point().unwrap()[2].is_nan());
        assert!(back.is_compact_point());

        let line = measured_line();
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"point\":null"));
        let back: SdoGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
        assert!(back.ordinates().unwrap()[5].is_nan());
        assert_eq!(back.lrs_dim(), 3);
    }
}
