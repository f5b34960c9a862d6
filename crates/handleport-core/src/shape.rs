use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Shape of a descriptor slot. `None` dims are unknown or dynamic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TensorShape {
    pub dims: SmallVec<[Option<i64>; 6]>,
    /// When set, the rank itself is unknown and `dims` is empty.
    pub unknown_rank: bool,
}

impl TensorShape {
    /// Rank-zero shape.
    pub fn scalar() -> Self {
        Self::default()
    }

    /// Build from concrete sizes; a negative size marks the dimension
    /// unknown, matching the wire convention.
    pub fn from_dims(dims: &[i64]) -> Self {
        Self {
            dims: dims.iter().map(|d| (*d >= 0).then_some(*d)).collect(),
            unknown_rank: false,
        }
    }

    pub fn unknown() -> Self {
        Self {
            dims: SmallVec::new(),
            unknown_rank: true,
        }
    }

    pub fn rank(&self) -> Option<usize> {
        (!self.unknown_rank).then_some(self.dims.len())
    }

    /// Total element count, when every dimension is known.
    pub fn num_elements(&self) -> Option<i64> {
        if self.unknown_rank {
            return None;
        }
        self.dims.iter().try_fold(1i64, |acc, d| d.map(|d| acc * d))
    }

    pub fn is_fully_defined(&self) -> bool {
        !self.unknown_rank && self.dims.iter().all(|d| d.is_some())
    }
}

impl fmt::Display for TensorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unknown_rank {
            return f.write_str("<unknown>");
        }
        f.write_str("[")?;
        for (i, dim) in self.dims.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match dim {
                Some(size) => write!(f, "{size}")?,
                None => f.write_str("?")?,
            }
        }
        f.write_str("]")
    }
}
