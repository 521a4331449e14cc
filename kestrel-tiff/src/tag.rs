use std::ops::Range;
use std::sync::{Arc, OnceLock};

use kestrel_common::exif::TagId;
use kestrel_common::math::*;
use serde::ser::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::{display_string, ByteOrder, DataType, Materialize, Rational, Reader, TypeCategory, Value};

/// Where the bytes of a tag value are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOffset {
    /// Stored in the last four bytes of the record, at this position
    Inline(u32),
    /// Stored at this absolute offset
    Offset(u32),
}

/// One entry of a directory
///
/// The location of the value is validated when the tag is decoded. The
/// conversion of the value happens either right away or on first access,
/// depending on [`Materialize`], and is stored afterwards.
pub struct Tag {
    id: TagId,
    data_type: DataType,
    count: u32,
    value_offset: ValueOffset,
    order: ByteOrder,
    source: Arc<[u8]>,
    bytes: Range<usize>,
    value: OnceLock<Value>,
}

impl std::fmt::Debug for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tag")
            .field("id", &self.id)
            .field("data_type", &self.data_type)
            .field("count", &self.count)
            .field("value_offset", &self.value_offset)
            .field("value", &self.value.get())
            .finish()
    }
}

impl Tag {
    /// Decodes the 12 byte record at the cursor of `reader`
    pub fn decode(reader: &mut Reader, mode: Materialize) -> Result<Self> {
        let position = reader.position().u32()?;
        let id = TagId(reader.read_u16()?);
        let data_type = DataType::from(reader.read_u16()?);
        let count = reader.read_u32()?;
        let value_or_offset = reader.read_u32()?;

        let len = data_type
            .size()
            .safe_mul(count)
            .map_err(|_| Error::InvalidCount {
                tag: id.0,
                data_type,
                count,
            })?;

        if len == 0 {
            return Err(Error::EmptyValue { tag: id.0 });
        }

        let value_offset = if len <= 4 {
            ValueOffset::Inline(position.safe_add(8)?)
        } else {
            ValueOffset::Offset(value_or_offset)
        };

        let start = match value_offset {
            ValueOffset::Inline(x) | ValueOffset::Offset(x) => x,
        };

        let out_of_bounds = || Error::OutOfBounds {
            tag: id.0,
            offset: start,
            len,
            available: reader.len(),
        };

        let start = start.usize()?;
        let end = start.safe_add(len.usize()?).map_err(|_| out_of_bounds())?;
        if end > reader.len() {
            return Err(out_of_bounds());
        }

        let tag = Self {
            id,
            data_type,
            count,
            value_offset,
            order: reader.order(),
            source: reader.data().clone(),
            bytes: start..end,
            value: OnceLock::new(),
        };

        if mode == Materialize::Eager {
            tag.value()?;
        }

        Ok(tag)
    }

    pub fn id(&self) -> TagId {
        self.id
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn category(&self) -> TypeCategory {
        self.data_type.category()
    }

    /// Number of components
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn value_offset(&self) -> ValueOffset {
        self.value_offset
    }

    /// Absolute offset of the value if it is not stored inline
    pub fn offset(&self) -> Option<u32> {
        match self.value_offset {
            ValueOffset::Offset(offset) => Some(offset),
            ValueOffset::Inline(_) => None,
        }
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Untouched bytes of the value
    pub fn raw(&self) -> &[u8] {
        self.source.get(self.bytes.clone()).unwrap_or_default()
    }

    /// Buffer the tag was decoded from
    pub fn source(&self) -> &Arc<[u8]> {
        &self.source
    }

    pub fn is_materialized(&self) -> bool {
        self.value.get().is_some()
    }

    /// Converted value
    ///
    /// Converted on first call if the tag was decoded lazily. Concurrent
    /// first calls might both convert, only one result is kept.
    pub fn value(&self) -> Result<&Value> {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        let value = Value::decode(self.data_type, self.count, self.raw(), self.order)?;
        Ok(self.value.get_or_init(|| value))
    }

    pub fn ints(&self) -> Result<&[i64]> {
        match self.value()? {
            Value::Int(values) => Ok(values),
            _ => Err(self.mismatch(TypeCategory::Int)),
        }
    }

    pub fn floats(&self) -> Result<&[f64]> {
        match self.value()? {
            Value::Float(values) => Ok(values),
            _ => Err(self.mismatch(TypeCategory::Float)),
        }
    }

    pub fn rationals(&self) -> Result<&[Rational]> {
        match self.value()? {
            Value::Rational(values) => Ok(values),
            _ => Err(self.mismatch(TypeCategory::Rational)),
        }
    }

    /// Bytes of an undefined value
    pub fn undefined(&self) -> Result<&[u8]> {
        match self.value()? {
            Value::Undefined(bytes) => Ok(bytes),
            _ => Err(self.mismatch(TypeCategory::Undefined)),
        }
    }

    pub fn int(&self, index: usize) -> Result<i64> {
        component(self.ints()?, index)
    }

    pub fn float(&self, index: usize) -> Result<f64> {
        component(self.floats()?, index)
    }

    pub fn rational(&self, index: usize) -> Result<Rational> {
        component(self.rationals()?, index)
    }

    /// Display form of a string value
    ///
    /// Trailing NULL bytes are removed and only printable characters are
    /// kept. Returns an empty string if the result is not valid UTF-8, use
    /// [`Self::string_bytes`] to access the bytes.
    pub fn string(&self) -> Result<String> {
        self.string_bytes().map(display_string)
    }

    /// String value without trailing NULL bytes
    pub fn string_bytes(&self) -> Result<&[u8]> {
        match self.value()? {
            Value::String(bytes) => Ok(bytes),
            _ => Err(self.mismatch(TypeCategory::String)),
        }
    }

    fn mismatch(&self, expected: TypeCategory) -> Error {
        Error::TypeMismatch {
            expected,
            actual: self.data_type,
        }
    }
}

fn component<T: Copy>(values: &[T], index: usize) -> Result<T> {
    values.get(index).copied().ok_or(Error::IndexOutOfRange {
        index,
        count: values.len(),
    })
}

/// Canonical JSON form of the value
impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.value().map_err(serde::ser::Error::custom)? {
            Value::Int(values) => values.serialize(serializer),
            Value::Float(values) => values.serialize(serializer),
            Value::Rational(values) => serializer.collect_seq(values.iter().map(ToString::to_string)),
            Value::String(bytes) | Value::Undefined(bytes) => {
                serializer.serialize_str(&display_string(bytes))
            }
            Value::Other(_) => serializer.serialize_str(&format!(
                "Unknown tag type '{}'",
                self.data_type.u16()
            )),
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{{Id: {:X}, Val: {value}}}", self.id.0)
    }
}
