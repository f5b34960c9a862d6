//! Encode, decode and merge for descriptor wire records.
//!
//! The codec is stateless: every call is an independent transform over
//! its inputs, safe to run from any thread.

use prost::Message;
use thiserror::Error;

use crate::types::ResourceHandleProto;

/// Errors surfaced by the wire codec.
#[derive(Debug, Error)]
pub enum WireError {
    /// Truncated buffer, invalid varint continuation, or a length prefix
    /// overrunning the remaining input.
    #[error("malformed descriptor input: {0}")]
    MalformedInput(#[from] prost::DecodeError),
}

/// Encode a message to its binary wire form.
///
/// Fields are written in ascending tag order and scalar fields holding
/// their default value are omitted, so equal inputs produce byte-identical
/// output. Repeated entries are always emitted, one per element in
/// insertion order. Encoding never fails.
pub fn encode<M: Message>(msg: &M) -> Vec<u8> {
    msg.encode_to_vec()
}

/// Decode a message from a binary buffer.
///
/// Unknown field numbers are skipped rather than rejected, so buffers
/// written by a newer schema revision still decode. Missing optional
/// fields come back default-filled. Malformed input fails with
/// [`WireError::MalformedInput`]; it is never silently truncated.
pub fn decode<M: Message + Default>(buf: &[u8]) -> Result<M, WireError> {
    M::decode(buf).map_err(|err| {
        tracing::debug!(error = %err, len = buf.len(), "descriptor decode failed");
        WireError::MalformedInput(err)
    })
}

/// Merge `overlay` into `base` with standard protobuf merge semantics:
/// a scalar field set in the overlay replaces the base value (a default
/// scalar is indistinguishable from unset and leaves the base alone),
/// and the repeated slot list is concatenated base-then-overlay, never
/// replaced wholesale.
pub fn merge(mut base: ResourceHandleProto, overlay: ResourceHandleProto) -> ResourceHandleProto {
    if !overlay.device.is_empty() {
        base.device = overlay.device;
    }
    if !overlay.container.is_empty() {
        base.container = overlay.container;
    }
    if !overlay.name.is_empty() {
        base.name = overlay.name;
    }
    if overlay.hash_code != 0 {
        base.hash_code = overlay.hash_code;
    }
    if !overlay.maybe_type_name.is_empty() {
        base.maybe_type_name = overlay.maybe_type_name;
    }
    base.dtypes_and_shapes.extend(overlay.dtypes_and_shapes);
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DataType, DtypeAndShape};

    fn slot(dtype: DataType) -> DtypeAndShape {
        DtypeAndShape {
            dtype: dtype as i32,
            shape: None,
        }
    }

    #[test]
    fn merge_keeps_base_when_overlay_unset() {
        let base = ResourceHandleProto {
            device: "/job:ps/replica:0".to_string(),
            hash_code: 7,
            ..Default::default()
        };
        let merged = merge(base.clone(), ResourceHandleProto::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn merge_overlay_scalars_win() {
        let base = ResourceHandleProto {
            device: "/job:ps/replica:0".to_string(),
            container: "train".to_string(),
            hash_code: 7,
            ..Default::default()
        };
        let overlay = ResourceHandleProto {
            device: "/job:worker/replica:1".to_string(),
            hash_code: 11,
            ..Default::default()
        };

        let merged = merge(base, overlay);
        assert_eq!(merged.device, "/job:worker/replica:1");
        assert_eq!(merged.container, "train");
        assert_eq!(merged.hash_code, 11);
    }

    #[test]
    fn merge_concatenates_slots() {
        let base = ResourceHandleProto {
            dtypes_and_shapes: vec![slot(DataType::Float), slot(DataType::Int64)],
            ..Default::default()
        };
        let overlay = ResourceHandleProto {
            dtypes_and_shapes: vec![slot(DataType::Bool)],
            ..Default::default()
        };

        let merged = merge(base, overlay);
        let dtypes: Vec<i32> = merged.dtypes_and_shapes.iter().map(|s| s.dtype).collect();
        assert_eq!(
            dtypes,
            vec![
                DataType::Float as i32,
                DataType::Int64 as i32,
                DataType::Bool as i32
            ]
        );
    }
}
