use kestrel_common::math::*;

use crate::error::{Error, Result};
use crate::{ByteOrder, DataType, TypeCategory};

/// Fraction as stored in the file
///
/// Numerator and denominator are kept unreduced. A zero denominator is
/// valid storage, only operations that need the quotient fail on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
}

impl Rational {
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Fraction in lowest terms with a positive denominator
    ///
    /// ```
    /// # use kestrel_tiff::Rational;
    /// assert_eq!(Rational::new(10, -4).reduced().unwrap(), Rational::new(-5, 2));
    /// assert!(Rational::new(1, 0).reduced().is_err());
    /// ```
    pub fn reduced(self) -> Result<Self> {
        if self.denominator == 0 {
            return Err(Error::DivideByZero(self.numerator, self.denominator));
        }

        let gcd = gcd(self.numerator.unsigned_abs(), self.denominator.unsigned_abs());
        let mut numerator = i64::try_from(self.numerator.unsigned_abs().safe_div(gcd)?)
            .map_err(|_| MathError::ConversionFailed(None))?;
        let denominator = i64::try_from(self.denominator.unsigned_abs().safe_div(gcd)?)
            .map_err(|_| MathError::ConversionFailed(None))?;

        if (self.numerator < 0) != (self.denominator < 0) {
            numerator = numerator.checked_neg().ok_or(MathError::ConversionFailed(None))?;
        }

        Ok(Self::new(numerator, denominator))
    }

    pub fn to_f64(self) -> Result<f64> {
        if self.denominator == 0 {
            return Err(Error::DivideByZero(self.numerator, self.denominator));
        }

        Ok((self.numerator as f64).safe_div(self.denominator as f64)?)
    }
}

impl std::fmt::Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while let Some(r) = a.checked_rem(b) {
        a = b;
        b = r;
    }
    a
}

/// Decoded components of a tag
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(Vec<i64>),
    Float(Vec<f64>),
    Rational(Vec<Rational>),
    /// Bytes without trailing NULL bytes
    String(Vec<u8>),
    Undefined(Vec<u8>),
    /// Bytes of a type this decoder does not know
    Other(Vec<u8>),
}

impl Value {
    /// Converts raw bytes into `count` components of `data_type`
    ///
    /// The number of bytes has to match the type width times `count` exactly.
    pub fn decode(data_type: DataType, count: u32, raw: &[u8], order: ByteOrder) -> Result<Self> {
        let expected = data_type.size().safe_mul(count)?.usize()?;
        if raw.len() != expected {
            return Err(Error::Conversion {
                data_type,
                count,
                actual: raw.len(),
            });
        }

        Ok(match data_type {
            DataType::Byte => Self::Int(raw.iter().map(|x| i64::from(*x)).collect()),
            DataType::SByte => Self::Int(
                raw.iter()
                    .map(|x| i64::from(i8::from_ne_bytes([*x])))
                    .collect(),
            ),
            DataType::Short => Self::Int(
                chunks::<2>(raw)
                    .map(|x| i64::from(order.u16(x)))
                    .collect(),
            ),
            DataType::SShort => Self::Int(
                chunks::<2>(raw)
                    .map(|x| i64::from(order.i16(x)))
                    .collect(),
            ),
            DataType::Long => Self::Int(
                chunks::<4>(raw)
                    .map(|x| i64::from(order.u32(x)))
                    .collect(),
            ),
            DataType::SLong => Self::Int(
                chunks::<4>(raw)
                    .map(|x| i64::from(order.i32(x)))
                    .collect(),
            ),
            DataType::Rational => Self::Rational(
                chunks::<8>(raw)
                    .map(|[a, b, c, d, e, f, g, h]| {
                        Rational::new(
                            i64::from(order.u32([a, b, c, d])),
                            i64::from(order.u32([e, f, g, h])),
                        )
                    })
                    .collect(),
            ),
            DataType::SRational => Self::Rational(
                chunks::<8>(raw)
                    .map(|[a, b, c, d, e, f, g, h]| {
                        Rational::new(
                            i64::from(order.i32([a, b, c, d])),
                            i64::from(order.i32([e, f, g, h])),
                        )
                    })
                    .collect(),
            ),
            DataType::Float => Self::Float(
                chunks::<4>(raw)
                    .map(|x| f64::from(order.f32(x)))
                    .collect(),
            ),
            DataType::Double => Self::Float(chunks::<8>(raw).map(|x| order.f64(x)).collect()),
            DataType::Ascii => {
                let end = raw
                    .iter()
                    .rposition(|x| *x != 0)
                    .map_or(0, |i| i.saturating_add(1));
                Self::String(raw.get(..end).unwrap_or_default().to_vec())
            }
            DataType::Undefined => Self::Undefined(raw.to_vec()),
            DataType::Unknown(_) => Self::Other(raw.to_vec()),
        })
    }

    pub fn category(&self) -> TypeCategory {
        match self {
            Self::Int(_) => TypeCategory::Int,
            Self::Float(_) => TypeCategory::Float,
            Self::Rational(_) => TypeCategory::Rational,
            Self::String(_) => TypeCategory::String,
            Self::Undefined(_) => TypeCategory::Undefined,
            Self::Other(_) => TypeCategory::Other,
        }
    }
}

fn chunks<const N: usize>(raw: &[u8]) -> impl Iterator<Item = [u8; N]> + '_ {
    raw.chunks_exact(N).filter_map(|x| x.try_into().ok())
}

/// Printable text for display purposes
///
/// Keeps only printable bytes. If the remaining bytes are not valid UTF-8,
/// an empty string is returned. Use the raw bytes for programmatic access.
///
/// ```
/// # use kestrel_tiff::display_string;
/// assert_eq!(display_string(b"Canon\0"), "Canon");
/// assert_eq!(display_string("Caf\u{e9}\n".as_bytes()), "Caf\u{e9}");
/// assert_eq!(display_string(&[b'a', 0xE9, b'b']), "");
/// ```
pub fn display_string(bytes: &[u8]) -> String {
    let printable = bytes
        .iter()
        .copied()
        .filter(|x| is_printable(*x))
        .collect::<Vec<_>>();

    String::from_utf8(printable).unwrap_or_default()
}

/// Whether the byte, read as Latin-1 character, is printable
fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7E | 0xA1..=0xAC | 0xAE..=0xFF)
}
