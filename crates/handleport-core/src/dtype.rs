use std::fmt;

use handleport_proto::DataType;
use serde::{Deserialize, Serialize};

use crate::error::HandleError;

/// Element type of a descriptor slot.
///
/// Covers every wire [`DataType`] value, including the reserved zero
/// value, so any decodable descriptor converts without loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DType {
    Invalid,
    F32,
    F64,
    F16,
    BF16,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    Bool,
    Str,
    Complex64,
    Complex128,
    QI8,
    QU8,
    QI16,
    QU16,
    QI32,
    Resource,
    Variant,
}

impl DType {
    /// Interpret a raw wire enum value.
    pub fn from_wire(raw: i32) -> Result<Self, HandleError> {
        DataType::try_from(raw)
            .map(Self::from)
            .map_err(|_| HandleError::UnknownDtype(raw))
    }

    pub fn to_wire(self) -> i32 {
        DataType::from(self) as i32
    }
}

impl From<DataType> for DType {
    fn from(value: DataType) -> Self {
        match value {
            DataType::Invalid => DType::Invalid,
            DataType::Float => DType::F32,
            DataType::Double => DType::F64,
            DataType::Int32 => DType::I32,
            DataType::Uint8 => DType::U8,
            DataType::Int16 => DType::I16,
            DataType::Int8 => DType::I8,
            DataType::String => DType::Str,
            DataType::Complex64 => DType::Complex64,
            DataType::Int64 => DType::I64,
            DataType::Bool => DType::Bool,
            DataType::Qint8 => DType::QI8,
            DataType::Quint8 => DType::QU8,
            DataType::Qint32 => DType::QI32,
            DataType::Bfloat16 => DType::BF16,
            DataType::Qint16 => DType::QI16,
            DataType::Quint16 => DType::QU16,
            DataType::Uint16 => DType::U16,
            DataType::Complex128 => DType::Complex128,
            DataType::Half => DType::F16,
            DataType::Resource => DType::Resource,
            DataType::Variant => DType::Variant,
            DataType::Uint32 => DType::U32,
            DataType::Uint64 => DType::U64,
        }
    }
}

impl From<DType> for DataType {
    fn from(value: DType) -> Self {
        match value {
            DType::Invalid => DataType::Invalid,
            DType::F32 => DataType::Float,
            DType::F64 => DataType::Double,
            DType::I32 => DataType::Int32,
            DType::U8 => DataType::Uint8,
            DType::I16 => DataType::Int16,
            DType::I8 => DataType::Int8,
            DType::Str => DataType::String,
            DType::Complex64 => DataType::Complex64,
            DType::I64 => DataType::Int64,
            DType::Bool => DataType::Bool,
            DType::QI8 => DataType::Qint8,
            DType::QU8 => DataType::Quint8,
            DType::QI32 => DataType::Qint32,
            DType::BF16 => DataType::Bfloat16,
            DType::QI16 => DataType::Qint16,
            DType::QU16 => DataType::Quint16,
            DType::U16 => DataType::Uint16,
            DType::Complex128 => DataType::Complex128,
            DType::F16 => DataType::Half,
            DType::Resource => DataType::Resource,
            DType::Variant => DataType::Variant,
            DType::U32 => DataType::Uint32,
            DType::U64 => DataType::Uint64,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DType::Invalid => "invalid",
            DType::F32 => "f32",
            DType::F64 => "f64",
            DType::F16 => "f16",
            DType::BF16 => "bf16",
            DType::I8 => "i8",
            DType::I16 => "i16",
            DType::I32 => "i32",
            DType::I64 => "i64",
            DType::U8 => "u8",
            DType::U16 => "u16",
            DType::U32 => "u32",
            DType::U64 => "u64",
            DType::Bool => "bool",
            DType::Str => "string",
            DType::Complex64 => "complex64",
            DType::Complex128 => "complex128",
            DType::QI8 => "qi8",
            DType::QU8 => "qu8",
            DType::QI16 => "qi16",
            DType::QU16 => "qu16",
            DType::QI32 => "qi32",
            DType::Resource => "resource",
            DType::Variant => "variant",
        };
        f.write_str(name)
    }
}
