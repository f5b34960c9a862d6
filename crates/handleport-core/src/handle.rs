use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dtype::DType;
use crate::shape::TensorShape;

/// One (dtype, shape) slot carried by a descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtypeAndShape {
    pub dtype: DType,
    #[serde(default)]
    pub shape: TensorShape,
}

/// In-process form of a resource handle descriptor.
///
/// Field-for-field mirror of the wire record, with typed dtypes and
/// shapes in place of raw wire values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceHandle {
    pub device: String,
    pub container: String,
    pub name: String,
    pub hash_code: u64,
    pub maybe_type_name: String,
    pub dtypes_and_shapes: Vec<DtypeAndShape>,
}

impl fmt::Display for DtypeAndShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.dtype, self.shape)
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "device: {:?}, container: {:?}, name: {:?}, hash_code: {}",
            self.device, self.container, self.name, self.hash_code
        )?;
        if !self.maybe_type_name.is_empty() {
            write!(f, ", type: {}", self.maybe_type_name)?;
        }
        f.write_str(", slots: [")?;
        for (i, slot) in self.dtypes_and_shapes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{slot}")?;
        }
        f.write_str("]")
    }
}
