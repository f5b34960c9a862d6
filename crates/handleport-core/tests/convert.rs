use handleport_core::{DType, DtypeAndShape, HandleError, ResourceHandle, TensorShape};
use handleport_proto as pb;

fn worker_handle() -> ResourceHandle {
    ResourceHandle {
        device: "/job:worker/replica:0".to_string(),
        container: "infer".to_string(),
        name: "handle_7".to_string(),
        hash_code: 123_456_789,
        maybe_type_name: "Var".to_string(),
        dtypes_and_shapes: vec![
            DtypeAndShape {
                dtype: DType::F32,
                shape: TensorShape::from_dims(&[3, 4]),
            },
            DtypeAndShape {
                dtype: DType::I64,
                shape: TensorShape::from_dims(&[-1, 2]),
            },
            DtypeAndShape {
                dtype: DType::Variant,
                shape: TensorShape::unknown(),
            },
        ],
    }
}

#[test]
fn domain_round_trips_through_wire() {
    let handle = worker_handle();
    let proto = pb::ResourceHandleProto::from(&handle);
    let back = ResourceHandle::try_from(proto).expect("known dtypes convert");
    assert_eq!(back, handle);
}

#[test]
fn wire_round_trips_through_codec_and_domain() {
    let handle = worker_handle();
    let bytes = pb::codec::encode(&pb::ResourceHandleProto::from(&handle));
    let proto: pb::ResourceHandleProto = pb::codec::decode(&bytes).expect("valid buffer");
    let back = ResourceHandle::try_from(proto).expect("known dtypes convert");
    assert_eq!(back, handle);
}

#[test]
fn dynamic_dims_map_to_negative_sizes() {
    let shape = TensorShape::from_dims(&[-1, 4]);
    let proto = pb::TensorShapeProto::from(&shape);
    assert_eq!(proto.dim[0].size, -1);
    assert_eq!(proto.dim[1].size, 4);
    assert_eq!(TensorShape::from(proto), shape);
}

#[test]
fn absent_wire_shape_becomes_scalar() {
    let slot = DtypeAndShape::try_from(pb::DtypeAndShape {
        dtype: pb::DataType::Float as i32,
        shape: None,
    })
    .expect("known dtype converts");
    assert_eq!(slot.shape, TensorShape::scalar());
}

#[test]
fn unrecognized_dtype_is_an_error() {
    let proto = pb::ResourceHandleProto {
        dtypes_and_shapes: vec![pb::DtypeAndShape {
            dtype: 9_999,
            shape: None,
        }],
        ..Default::default()
    };

    assert_eq!(
        ResourceHandle::try_from(proto),
        Err(HandleError::UnknownDtype(9_999))
    );
}

#[test]
fn dtype_wire_values_match_schema() {
    assert_eq!(DType::F32.to_wire(), 1);
    assert_eq!(DType::Str.to_wire(), 7);
    assert_eq!(DType::Resource.to_wire(), 20);
    assert_eq!(DType::U64.to_wire(), 23);
    assert_eq!(DType::from_wire(19), Ok(DType::F16));
    assert_eq!(DType::from_wire(0), Ok(DType::Invalid));
}

#[test]
fn json_surface_round_trips() {
    let handle = worker_handle();
    let json = serde_json::to_string(&handle).expect("serializes");
    let back: ResourceHandle = serde_json::from_str(&json).expect("parses");
    assert_eq!(back, handle);
}

#[test]
fn json_defaults_fill_missing_fields() {
    let handle: ResourceHandle =
        serde_json::from_str(r#"{"name": "handle_7"}"#).expect("parses");
    assert_eq!(handle.name, "handle_7");
    assert_eq!(handle.device, "");
    assert_eq!(handle.hash_code, 0);
    assert!(handle.dtypes_and_shapes.is_empty());
}
