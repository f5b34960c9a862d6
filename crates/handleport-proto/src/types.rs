//! Wire message types for resource handle descriptors.
//!
//! These are hand-maintained prost declarations. Tags are wire
//! identifiers and must never be reassigned to a different field.

use prost::{Enumeration, Message};

/// Element type of a tensor slot.
///
/// Values follow the TensorFlow `DataType` enumeration. `Invalid` is the
/// reserved zero value and never describes a real element type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum DataType {
    Invalid = 0,
    Float = 1,
    Double = 2,
    Int32 = 3,
    Uint8 = 4,
    Int16 = 5,
    Int8 = 6,
    String = 7,
    Complex64 = 8,
    Int64 = 9,
    Bool = 10,
    Qint8 = 11,
    Quint8 = 12,
    Qint32 = 13,
    Bfloat16 = 14,
    Qint16 = 15,
    Quint16 = 16,
    Uint16 = 17,
    Complex128 = 18,
    Half = 19,
    Resource = 20,
    Variant = 21,
    Uint32 = 22,
    Uint64 = 23,
}

/// One dimension of a [`TensorShapeProto`]. A `size` of `-1` means the
/// dimension is unknown or dynamic.
#[derive(Clone, PartialEq, Message)]
pub struct TensorShapeDim {
    #[prost(int64, tag = "1")]
    pub size: i64,

    /// Optional dimension label, e.g. `"batch"`.
    #[prost(string, tag = "2")]
    pub name: String,
}

/// Shape of a tensor slot: an ordered dimension list, or nothing at all
/// when `unknown_rank` is set (in which case `dim` must be empty).
#[derive(Clone, PartialEq, Message)]
pub struct TensorShapeProto {
    #[prost(message, repeated, tag = "2")]
    pub dim: Vec<TensorShapeDim>,

    #[prost(bool, tag = "3")]
    pub unknown_rank: bool,
}

/// An element type paired with the shape it applies to.
#[derive(Clone, PartialEq, Message)]
pub struct DtypeAndShape {
    #[prost(enumeration = "DataType", tag = "1")]
    pub dtype: i32,

    /// Absent shape decodes the same as an empty (scalar) shape.
    #[prost(message, optional, tag = "2")]
    pub shape: Option<TensorShapeProto>,
}

/// Descriptor for a handle to a resource: placement and naming fields
/// plus the dtype/shape slots the resource exposes.
///
/// Scalar fields follow proto3 semantics: there is no presence bit, so a
/// field holding its default value is indistinguishable on the wire from
/// one that was never set.
#[derive(Clone, PartialEq, Message)]
pub struct ResourceHandleProto {
    /// Device on which the resource lives, e.g. `"/job:worker/replica:0"`.
    #[prost(string, tag = "1")]
    pub device: String,

    /// Container in which the resource is grouped.
    #[prost(string, tag = "2")]
    pub container: String,

    /// Name of the resource within its container.
    #[prost(string, tag = "3")]
    pub name: String,

    /// Opaque code identifying the resource's concrete type.
    #[prost(uint64, tag = "4")]
    pub hash_code: u64,

    /// Human-readable type name, when one is known.
    #[prost(string, tag = "5")]
    pub maybe_type_name: String,

    /// Dtype/shape slots, in insertion order. Order is significant.
    #[prost(message, repeated, tag = "6")]
    pub dtypes_and_shapes: Vec<DtypeAndShape>,
}
