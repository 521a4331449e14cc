//! Decoding of TIFF containers as used for Exif data
//!
//! A container starts with a byte order marker and the magic number `42`,
//! followed by a chain of [`Directory`]s. Each directory holds [`Tag`]s whose
//! values are stored inline or at an absolute offset into the container.
//!
//! ```
//! # use kestrel_tiff::Tiff;
//! let data = [
//!     b'I', b'I', 42, 0, 8, 0, 0, 0, // header
//!     1, 0, // one entry
//!     0x12, 0x01, 3, 0, 1, 0, 0, 0, 6, 0, 0, 0, // Orientation = 6
//!     0, 0, 0, 0, // last directory
//! ];
//! let tiff = Tiff::decode(data.to_vec()).unwrap();
//! let tag = &tiff.directories()[0].tags()[0];
//! assert_eq!(tag.int(0).unwrap(), 6);
//! ```

mod data_type;
mod directory;
pub mod error;
mod reader;
mod tag;
mod value;

use std::collections::HashSet;
use std::sync::Arc;

pub use data_type::{DataType, TypeCategory};
pub use directory::Directory;
pub use error::{Error, Result};
use kestrel_common::math::*;
pub use reader::{ByteOrder, Reader};
pub use tag::{Tag, ValueOffset};
pub use value::{display_string, Rational, Value};

const LE_MAGIC_BYTES: &[u8] = b"II*\0";
const BE_MAGIC_BYTES: &[u8] = b"MM\0*";

const MAGIC_NUMBER: u16 = 42;
const HEADER_LEN: usize = 8;

/// Smallest possible directory: an entry count of zero and the next offset
pub const MIN_DIRECTORY_SIZE: usize = 6;

/// When tag values are converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Materialize {
    /// While decoding the directory
    #[default]
    Eager,
    /// On first access of the value
    Lazy,
}

/// Decoded TIFF container
#[derive(Debug, Clone)]
pub struct Tiff {
    data: Arc<[u8]>,
    order: ByteOrder,
    directories: Vec<Directory>,
    mode: Materialize,
}

impl Tiff {
    pub fn decode(data: impl Into<Arc<[u8]>>) -> Result<Self> {
        Self::decode_with(data, Materialize::default())
    }

    /// Decodes header and the complete directory chain
    ///
    /// The number of directories is limited by the buffer size and every
    /// directory offset may only occur once.
    pub fn decode_with(data: impl Into<Arc<[u8]>>, mode: Materialize) -> Result<Self> {
        let data: Arc<[u8]> = data.into();

        if data.len() < HEADER_LEN {
            return Err(Error::TruncatedHeader);
        }

        let mut reader = Reader::new(data.clone(), ByteOrder::LittleEndian);
        let marker = reader.read_array::<2>()?;
        let order = ByteOrder::from_marker(marker).ok_or(Error::BadByteOrderMarker(marker))?;
        reader.set_order(order);

        let magic = reader.read_u16()?;
        if magic != MAGIC_NUMBER {
            return Err(Error::BadMagicNumber(magic));
        }

        let first = reader.read_u32()?;

        let mut tiff = Self {
            data,
            order,
            directories: Vec::new(),
            mode,
        };

        let max_directories = tiff.data.len().safe_div(MIN_DIRECTORY_SIZE)?;
        let mut visited = HashSet::new();
        let mut offset = first;

        while offset != 0 {
            if !visited.insert(offset) {
                return Err(Error::DirectoryLoop(offset));
            }
            if tiff.directories.len() >= max_directories {
                return Err(Error::TooManyDirectories(max_directories));
            }

            tracing::debug!("Reading directory {} at {offset}", tiff.directories.len());
            let (directory, next) = tiff.directory_at(offset)?;
            tiff.directories.push(directory);
            offset = next;
        }

        Ok(tiff)
    }

    /// Checks for the byte order marker and the magic number
    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(LE_MAGIC_BYTES) || data.starts_with(BE_MAGIC_BYTES)
    }

    /// Decodes a single directory at an absolute offset
    ///
    /// Used for sub-directories that are referenced by pointer tags instead
    /// of being part of the chain.
    pub fn directory_at(&self, offset: u32) -> Result<(Directory, u32)> {
        if offset.usize()? >= self.data.len() {
            return Err(Error::TruncatedContainer {
                offset,
                len: self.data.len(),
            });
        }

        let mut reader = self.reader();
        reader.seek(offset)?;
        Directory::decode(&mut reader, self.mode)
    }

    /// New reader over the container in its byte order
    pub fn reader(&self) -> Reader {
        Reader::new(self.data.clone(), self.order)
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn mode(&self) -> Materialize {
        self.mode
    }

    /// Directories of the chain, starting with IFD0
    pub fn directories(&self) -> &[Directory] {
        &self.directories
    }

    pub fn into_directories(self) -> Vec<Directory> {
        self.directories
    }

    /// Bytes the container was decoded from
    pub fn raw(&self) -> &[u8] {
        &self.data
    }

    pub fn data(&self) -> &Arc<[u8]> {
        &self.data
    }
}
