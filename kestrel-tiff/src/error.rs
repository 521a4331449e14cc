use kestrel_common::math::MathError;

use crate::{DataType, TypeCategory};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown byte order marker {0:?}")]
    BadByteOrderMarker([u8; 2]),
    #[error("Magic number is {0:#06x} instead of 0x002a")]
    BadMagicNumber(u16),
    #[error("TIFF header is truncated")]
    TruncatedHeader,
    #[error("Directory offset {offset} lies beyond the {len} byte buffer")]
    TruncatedContainer { offset: u32, len: usize },
    #[error("Directory at offset {0} is part of a loop")]
    DirectoryLoop(u32),
    #[error("Directory chain longer than {0} directories")]
    TooManyDirectories(usize),
    #[error("Reading {len} bytes at offset {offset} exceeds the {available} byte buffer")]
    ShortRead {
        offset: usize,
        len: usize,
        available: usize,
    },
    #[error("Value of tag {tag:#06x} at offset {offset} with {len} bytes exceeds the {available} byte buffer")]
    OutOfBounds {
        tag: u16,
        offset: u32,
        len: u32,
        available: usize,
    },
    #[error("Tag {tag:#06x}: count {count} of type {data_type:?} overflows the value length")]
    InvalidCount {
        tag: u16,
        data_type: DataType,
        count: u32,
    },
    #[error("Tag {tag:#06x} has an empty value")]
    EmptyValue { tag: u16 },
    #[error("{actual} bytes do not hold {count} values of type {data_type:?}")]
    Conversion {
        data_type: DataType,
        count: u32,
        actual: usize,
    },
    #[error("Expected a value of category {expected} but tag has type {actual:?}")]
    TypeMismatch {
        expected: TypeCategory,
        actual: DataType,
    },
    #[error("Index {index} is out of range for {count} values")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("Rational {0}/{1} has a zero denominator")]
    DivideByZero(i64, i64),
    #[error("Math: {0}")]
    Math(#[from] MathError),
}
