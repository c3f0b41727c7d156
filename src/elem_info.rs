//! Indexed access to `SDO_ELEM_INFO` triplets.
//!
//! The element directory is a flat array of `(starting offset, etype, interpretation)`
//! triplets. Out-of-range lookups never panic: they return `-1`, or for the starting offset
//! of [`ElemInfo`] a "virtual" offset one past the end of the ordinates.

use crate::codes::{ElementType, Interpretation};

/// Width of one element directory record.
pub const TRIPLET_SIZE: usize = 3;

/// Extract the starting offset (`SDO_STARTING_OFFSET`) of a triplet.
///
/// Starting offsets are 1-based indexes into the ordinate array. Returns -1 if the triplet index
/// is out of range.
pub fn starting_offset(elem_info: &[i32], triplet_index: usize) -> i32 {
    field(elem_info, triplet_index, 0).unwrap_or(-1)
}

/// Extract the `SDO_ETYPE` of a triplet, or -1 if the triplet index is out of range.
pub fn etype(elem_info: &[i32], triplet_index: usize) -> i32 {
    field(elem_info, triplet_index, 1).unwrap_or(-1)
}

/// Extract the `SDO_INTERPRETATION` of a triplet, or -1 if the triplet index is out of range.
pub fn interpretation(elem_info: &[i32], triplet_index: usize) -> i32 {
    field(elem_info, triplet_index, 2).unwrap_or(-1)
}

fn field(elem_info: &[i32], triplet_index: usize, slot: usize) -> Option<i32> {
    let idx = triplet_index.checked_mul(TRIPLET_SIZE)?.checked_add(slot)?;
    elem_info.get(idx).copied()
}

/// One decoded element directory record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triplet {
    pub starting_offset: i32,
    pub etype: i32,
    pub interpretation: i32,
}

impl Triplet {
    /// The element type, if the code is in the table.
    pub fn element_type(&self) -> Option<ElementType> {
        ElementType::try_from(self.etype).ok()
    }

    /// The interpretation, if the code is in the table.
    pub fn interpretation(&self) -> Option<Interpretation> {
        Interpretation::try_from(self.interpretation).ok()
    }
}

/// A borrowed view of an element directory together with the length of the ordinate array it
/// indexes into.
#[derive(Debug, Clone, Copy)]
pub struct ElemInfo<'a> {
    elem_info: &'a [i32],
    ordinate_len: usize,
}

impl<'a> ElemInfo<'a> {
    pub fn new(elem_info: &'a [i32], ordinate_len: usize) -> Self {
        Self {
            elem_info,
            ordinate_len,
        }
    }

    /// The number of complete triplets. A trailing partial triplet is not counted.
    pub fn num_elements(&self) -> usize {
        self.elem_info.len() / TRIPLET_SIZE
    }

    /// The starting offset of the given triplet.
    ///
    /// Past the last triplet this returns `ordinate_len + 1`, so the ordinate range of element
    /// `i` is always `starting_offset(i)..starting_offset(i + 1)`.
    pub fn starting_offset(&self, elem_index: usize) -> i32 {
        field(self.elem_info, elem_index, 0).unwrap_or_else(|| self.virtual_end())
    }

    /// The `SDO_ETYPE` of the given triplet, or -1 if out of range.
    pub fn etype(&self, elem_index: usize) -> i32 {
        etype(self.elem_info, elem_index)
    }

    /// The `SDO_INTERPRETATION` of the given triplet, or -1 if out of range.
    pub fn interpretation(&self, elem_index: usize) -> i32 {
        interpretation(self.elem_info, elem_index)
    }

    /// The complete triplet at `elem_index`, or `None` if out of range.
    pub fn triplet(&self, elem_index: usize) -> Option<Triplet> {
        Some(Triplet {
            starting_offset: field(self.elem_info, elem_index, 0)?,
            etype: field(self.elem_info, elem_index, 1)?,
            interpretation: field(self.elem_info, elem_index, 2)?,
        })
    }

    /// Iterate over the complete triplets.
    pub fn triplets(&self) -> impl Iterator<Item = Triplet> + 'a {
        self.elem_info
            .chunks_exact(TRIPLET_SIZE)
            .map(|chunk| Triplet {
                starting_offset: chunk[0],
                etype: chunk[1],
                interpretation: chunk[2],
            })
    }

    /// The 0-based half-open ordinate range of the given element.
    ///
    /// Returns `None` if the element does not exist, or its offsets do not describe a range
    /// within the ordinates.
    pub fn ordinate_range(&self, elem_index: usize) -> Option<std::ops::Range<usize>> {
        if elem_index >= self.num_elements() {
            return None;
        }
        let start = usize::try_from(self.starting_offset(elem_index)).ok()?;
        let end = usize::try_from(self.starting_offset(elem_index + 1)).ok()?;
        if start < 1 || end < start || end > self.ordinate_len + 1 {
            return None;
        }
        Some(start - 1..end - 1)
    }

    fn virtual_end(&self) -> i32 {
        i32::try_from(self.ordinate_len)
            .unwrap_or(i32::MAX)
            .saturating_add(1)
    }
}
