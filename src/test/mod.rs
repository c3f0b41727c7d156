use crate::codes::SRID_NULL;
use crate::SdoGeometry;

/// A line string followed by a polygon with one hole.
pub(crate) fn collection_elem_info() -> Vec<i32> {
    vec![1, 2, 1, 5, 1003, 1, 15, 2003, 1]
}

pub(crate) fn collection_ordinates() -> Vec<f64> {
    vec![
        0., 0., 1., 1., // line
        2., 2., 8., 2., 8., 8., 2., 8., 2., 2., // exterior, counter-clockwise
        4., 4., 4., 6., 6., 6., 4., 4., // interior, clockwise
    ]
}

pub(crate) fn collection() -> SdoGeometry {
    SdoGeometry::with_elements(2004, 8307, collection_elem_info(), collection_ordinates())
}

pub(crate) fn compact_point() -> SdoGeometry {
    SdoGeometry::with_point(2001, SRID_NULL, vec![1., 2., f64::NAN])
}

/// A measured line string whose middle vertex has no measure.
pub(crate) fn measured_line() -> SdoGeometry {
    SdoGeometry::with_elements(
        3302,
        SRID_NULL,
        vec![1, 2, 1],
        vec![0., 0., 0., 5., 0., f64::NAN, 10., 0., 10.],
    )
}
