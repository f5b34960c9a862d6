//! Conversions between domain values and their wire records.
//!
//! Domain to wire is total. Wire to domain fails only on a dtype value
//! this build does not know; an absent shape message becomes the scalar
//! shape, and dimension labels carried on the wire are not modeled here.

use handleport_proto as pb;

use crate::dtype::DType;
use crate::error::HandleError;
use crate::handle::{DtypeAndShape, ResourceHandle};
use crate::shape::TensorShape;

impl From<&TensorShape> for pb::TensorShapeProto {
    fn from(shape: &TensorShape) -> Self {
        pb::TensorShapeProto {
            dim: shape
                .dims
                .iter()
                .map(|size| pb::TensorShapeDim {
                    size: size.unwrap_or(-1),
                    name: String::new(),
                })
                .collect(),
            unknown_rank: shape.unknown_rank,
        }
    }
}

impl From<pb::TensorShapeProto> for TensorShape {
    fn from(proto: pb::TensorShapeProto) -> Self {
        TensorShape {
            dims: proto
                .dim
                .iter()
                .map(|dim| (dim.size >= 0).then_some(dim.size))
                .collect(),
            unknown_rank: proto.unknown_rank,
        }
    }
}

impl From<&DtypeAndShape> for pb::DtypeAndShape {
    fn from(slot: &DtypeAndShape) -> Self {
        pb::DtypeAndShape {
            dtype: slot.dtype.to_wire(),
            shape: Some((&slot.shape).into()),
        }
    }
}

impl TryFrom<pb::DtypeAndShape> for DtypeAndShape {
    type Error = HandleError;

    fn try_from(proto: pb::DtypeAndShape) -> Result<Self, Self::Error> {
        Ok(DtypeAndShape {
            dtype: DType::from_wire(proto.dtype)?,
            shape: proto.shape.map(TensorShape::from).unwrap_or_default(),
        })
    }
}

impl From<&ResourceHandle> for pb::ResourceHandleProto {
    fn from(handle: &ResourceHandle) -> Self {
        pb::ResourceHandleProto {
            device: handle.device.clone(),
            container: handle.container.clone(),
            name: handle.name.clone(),
            hash_code: handle.hash_code,
            maybe_type_name: handle.maybe_type_name.clone(),
            dtypes_and_shapes: handle.dtypes_and_shapes.iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<pb::ResourceHandleProto> for ResourceHandle {
    type Error = HandleError;

    fn try_from(proto: pb::ResourceHandleProto) -> Result<Self, Self::Error> {
        Ok(ResourceHandle {
            device: proto.device,
            container: proto.container,
            name: proto.name,
            hash_code: proto.hash_code,
            maybe_type_name: proto.maybe_type_name,
            dtypes_and_shapes: proto
                .dtypes_and_shapes
                .into_iter()
                .map(DtypeAndShape::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}
