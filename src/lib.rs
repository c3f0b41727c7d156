//! An in-memory model of the Oracle Spatial `SDO_GEOMETRY` storage structure.
//!
//! An `SDO_GEOMETRY` value is made of a packed classification code (the GTYPE), an SRID, an
//! optional direct point, a flat element directory of `(offset, etype, interpretation)` triplets
//! and a flat ordinate array. [`SdoGeometry`] holds these fields, derives the coordinate
//! dimension, measure dimension and geometry type from the GTYPE, and provides bounds-safe
//! access to the element directory.
//!
//! ```
//! use sdo_geometry::{gtype, SdoGeometry};
//!
//! let geom = SdoGeometry::with_elements(
//!     gtype::compose(2, 0, 3),
//!     8307,
//!     vec![1, 1003, 1],
//!     vec![0., 0., 4., 0., 4., 4., 0., 0.],
//! );
//! assert_eq!(geom.num_elements(), 1);
//! assert_eq!(geom.etype(0), 1003);
//! assert_eq!(geom.starting_offset(1), 9);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use codes::{ElementType, GeometryKind, Interpretation, SRID_NULL};
pub use error::{Result, SdoError};
pub use geometry::{SdoGeometry, SdoParts};

pub mod classify;
pub mod codes;
pub mod elem_info;
pub mod eq;
pub mod error;
pub mod geometry;
pub mod gtype;
#[cfg(test)]
pub(crate) mod test;
