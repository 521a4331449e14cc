use std::ops::Range;
use std::sync::Arc;

use kestrel_common::math::*;

use crate::error::{Error, Result};

/// Byte order of all multi-byte fields in a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    /// Byte order for the `II` or `MM` marker at the start of a container
    pub fn from_marker(marker: [u8; 2]) -> Option<Self> {
        match &marker {
            b"II" => Some(Self::LittleEndian),
            b"MM" => Some(Self::BigEndian),
            _ => None,
        }
    }

    pub fn marker(self) -> [u8; 2] {
        match self {
            Self::LittleEndian => *b"II",
            Self::BigEndian => *b"MM",
        }
    }

    pub fn u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::LittleEndian => u16::from_le_bytes(bytes),
            Self::BigEndian => u16::from_be_bytes(bytes),
        }
    }

    pub fn i16(self, bytes: [u8; 2]) -> i16 {
        match self {
            Self::LittleEndian => i16::from_le_bytes(bytes),
            Self::BigEndian => i16::from_be_bytes(bytes),
        }
    }

    pub fn u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::LittleEndian => u32::from_le_bytes(bytes),
            Self::BigEndian => u32::from_be_bytes(bytes),
        }
    }

    pub fn i32(self, bytes: [u8; 4]) -> i32 {
        match self {
            Self::LittleEndian => i32::from_le_bytes(bytes),
            Self::BigEndian => i32::from_be_bytes(bytes),
        }
    }

    pub fn f32(self, bytes: [u8; 4]) -> f32 {
        f32::from_bits(self.u32(bytes))
    }

    pub fn f64(self, bytes: [u8; 8]) -> f64 {
        match self {
            Self::LittleEndian => f64::from_le_bytes(bytes),
            Self::BigEndian => f64::from_be_bytes(bytes),
        }
    }
}

/// Cursor over a shared, fully loaded buffer
///
/// Directory and tag headers are consumed sequentially via [`Self::read`]
/// while values and sub-directories are addressed absolutely via
/// [`Self::read_at`]. Neither ever pads or truncates: a read either returns
/// exactly the requested bytes or fails with [`Error::ShortRead`].
#[derive(Clone)]
pub struct Reader {
    data: Arc<[u8]>,
    position: usize,
    order: ByteOrder,
}

impl std::fmt::Debug for Reader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reader")
            .field("data", &format!("{} bytes", self.data.len()))
            .field("position", &self.position)
            .field("order", &self.order)
            .finish()
    }
}

impl Reader {
    pub fn new(data: Arc<[u8]>, order: ByteOrder) -> Self {
        Self {
            data,
            position: 0,
            order,
        }
    }

    pub fn data(&self) -> &Arc<[u8]> {
        &self.data
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn set_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to an absolute offset
    ///
    /// Seeking past the end is allowed, the next read will fail.
    pub fn seek(&mut self, offset: u32) -> Result<()> {
        self.position = offset.usize()?;
        Ok(())
    }

    /// Reads `len` bytes at the cursor and advances it
    pub fn read(&mut self, len: usize) -> Result<&[u8]> {
        let range = self.range(self.position, len)?;
        self.position = range.end;
        Ok(self.data.get(range).unwrap_or_default())
    }

    /// Reads `len` bytes at an absolute offset without moving the cursor
    pub fn read_at(&self, offset: u32, len: u32) -> Result<&[u8]> {
        let range = self.range(offset.usize()?, len.usize()?)?;
        Ok(self.data.get(range).unwrap_or_default())
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut bytes = [0; N];
        bytes.copy_from_slice(self.read(N)?);
        Ok(bytes)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_array()?;
        Ok(self.order.u16(bytes))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_array()?;
        Ok(self.order.u32(bytes))
    }

    fn range(&self, offset: usize, len: usize) -> Result<Range<usize>> {
        let short_read = || Error::ShortRead {
            offset,
            len,
            available: self.data.len(),
        };

        let end = offset.safe_add(len).map_err(|_| short_read())?;
        if end > self.data.len() {
            return Err(short_read());
        }

        Ok(offset..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader() -> Reader {
        Reader::new(Arc::from(vec![0, 1, 2, 3, 4, 5]), ByteOrder::BigEndian)
    }

    #[test]
    fn sequential_and_absolute() {
        let mut r = reader();
        assert_eq!(r.read(2).unwrap(), &[0, 1]);
        assert_eq!(r.read_at(4, 2).unwrap(), &[4, 5]);
        assert_eq!(r.position(), 2);
        assert_eq!(r.read_u16().unwrap(), 0x0203);
        assert_eq!(r.position(), 4);
    }

    #[test]
    fn never_short() {
        let mut r = reader();
        assert!(matches!(
            r.read_at(4, 3),
            Err(Error::ShortRead {
                offset: 4,
                len: 3,
                available: 6
            })
        ));
        assert!(r.read_at(u32::MAX, 2).is_err());

        r.seek(5).unwrap();
        assert!(r.read_u16().is_err());
        // Failed reads keep the cursor
        assert_eq!(r.position(), 5);
        assert_eq!(r.read(1).unwrap(), &[5]);
    }

    #[test]
    fn byte_order() {
        assert_eq!(ByteOrder::LittleEndian.u16([1, 2]), 0x0201);
        assert_eq!(ByteOrder::BigEndian.u32([1, 2, 3, 4]), 0x01020304);
        assert_eq!(ByteOrder::LittleEndian.i16([0xFE, 0xFF]), -2);
        assert_eq!(ByteOrder::from_marker(*b"MM"), Some(ByteOrder::BigEndian));
        assert_eq!(ByteOrder::from_marker(*b"XX"), None);
    }
}
