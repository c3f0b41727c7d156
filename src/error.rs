//! Defines [`SdoError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
///
/// Only the strict constructor [`SdoGeometry::try_new`][crate::SdoGeometry::try_new] produces
/// these. The permissive read path never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SdoError {
    /// `SDO_ELEM_INFO` length is not a multiple of 3.
    #[error("SDO_ELEM_INFO length {0} is not a multiple of 3")]
    MalformedElemInfo(usize),

    /// A starting offset is below 1 or smaller than the one before it.
    #[error("Invalid starting offset {offset} for element {element}")]
    InvalidStartingOffset { element: usize, offset: i32 },

    /// The direct point and the element directory are both present, or both absent while
    /// ordinates are present.
    #[error("Exactly one of SDO_POINT or SDO_ELEM_INFO must be present")]
    PointAndElements,

    /// The direct point does not hold 3 or 4 values.
    #[error("SDO_POINT must hold 3 or 4 values, got {0}")]
    InvalidPoint(usize),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, SdoError>;
