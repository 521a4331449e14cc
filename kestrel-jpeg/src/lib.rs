//! Locate the Exif segment in JPEG streams
//!
//! The stream is scanned marker by marker without loading it completely.
//! Segments that are not of interest are skipped by their declared length.
//!
//! ```
//! let jpeg = [
//!     0xFF, 0xD8, // SOI
//!     0xFF, 0xE1, 0x00, 0x0A, b'E', b'x', b'i', b'f', 0, 0, b'I', b'I', // APP1
//!     0xFF, 0xD9, // EOI
//! ];
//! let exif = kestrel_jpeg::exif_data(jpeg.as_slice()).unwrap();
//! assert_eq!(exif, b"II");
//! ```

mod segments;

use std::io::{BufRead, BufReader, Read};

pub use segments::{Marker, Segment};

pub const EXIF_IDENTIFIER_STRING: &[u8] = b"Exif\0\0";
pub const MARKER_START: u8 = 0xFF;

const MAGIC_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF];

pub type Result<T> = std::result::Result<T, Error>;

/// Checks for the start of image marker
pub fn is_filetype(data: &[u8]) -> bool {
    data.starts_with(MAGIC_BYTES)
}

/// Payload of the first Exif APP1 segment without the `Exif\0\0` identifier
pub fn exif_data(reader: impl Read) -> Result<Vec<u8>> {
    Scanner::new(reader).exif()
}

/// Header of a segment in the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    marker: Marker,
    pos: u64,
    /// Payload length without the length field, `None` for stand-alone markers
    len: Option<u16>,
}

/// Sequential reader of JPEG segments
#[derive(Debug)]
pub struct Scanner<R> {
    reader: BufReader<R>,
    pos: u64,
    finished: bool,
}

impl<R: Read> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            pos: 0,
            finished: false,
        }
    }

    /// Number of bytes consumed
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Next segment including its payload
    ///
    /// Returns `None` after the end of image marker or the end of the stream.
    pub fn next_segment(&mut self) -> Result<Option<Segment>> {
        let Some(header) = self.next_header()? else {
            return Ok(None);
        };

        let data = match header.len {
            Some(len) => self.read_payload(len)?,
            None => Vec::new(),
        };

        Ok(Some(Segment::new(header.marker, header.pos, data)))
    }

    /// Payload of the first APP1 segment with Exif data
    ///
    /// Other APP1 segments, like XMP, are skipped.
    pub fn exif(&mut self) -> Result<Vec<u8>> {
        while let Some(header) = self.next_header()? {
            let Some(len) = header.len else {
                continue;
            };

            if header.marker != Marker::APP1 {
                self.skip_payload(len)?;
                continue;
            }

            let data = self.read_payload(len)?;
            if let Some(exif) = data.strip_prefix(EXIF_IDENTIFIER_STRING) {
                tracing::debug!("Found Exif segment at byte {}", header.pos);
                return Ok(exif.to_vec());
            }

            tracing::debug!("Skipping APP1 segment without Exif data at {}", header.pos);
        }

        Err(Error::NoExifSegment)
    }

    fn next_header(&mut self) -> Result<Option<Header>> {
        if self.finished {
            return Ok(None);
        }

        loop {
            if !self.skip_to_marker_start()? {
                self.finished = true;
                return Ok(None);
            }
            let pos = self.pos.saturating_sub(1);

            // Any number of fill bytes can precede the marker
            let byte = loop {
                match self.read_byte()? {
                    Some(MARKER_START) => continue,
                    Some(byte) => break Some(byte),
                    None => break None,
                }
            };

            let Some(byte) = byte else {
                self.finished = true;
                return Ok(None);
            };

            // Stuffed zero byte within entropy coded data
            if byte == 0 {
                continue;
            }

            let marker = Marker::from(byte);
            if marker == Marker::EOI {
                self.finished = true;
                return Ok(None);
            }

            if marker.is_standalone() {
                return Ok(Some(Header {
                    marker,
                    pos,
                    len: None,
                }));
            }

            let len = self.read_length()?;
            return Ok(Some(Header {
                marker,
                pos,
                len: Some(len),
            }));
        }
    }

    /// Advances behind the next `0xFF` byte, returns `false` at the end
    fn skip_to_marker_start(&mut self) -> Result<bool> {
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                return Ok(false);
            }

            match buf.iter().position(|x| *x == MARKER_START) {
                Some(i) => {
                    self.consume(i.saturating_add(1));
                    return Ok(true);
                }
                None => {
                    let n = buf.len();
                    self.consume(n);
                }
            }
        }
    }

    /// Reads the segment length and returns the payload length
    fn read_length(&mut self) -> Result<u16> {
        let mut bytes = Vec::with_capacity(2);
        let actual = (&mut self.reader).take(2).read_to_end(&mut bytes)?;
        self.advance(actual);

        let bytes: [u8; 2] = bytes.try_into().map_err(|_| Error::TruncatedSegment {
            expected: 2,
            actual: actual.try_into().unwrap_or(u64::MAX),
        })?;

        let len = u16::from_be_bytes(bytes);
        len.checked_sub(2).ok_or(Error::InvalidSegmentLength(len))
    }

    fn read_payload(&mut self, len: u16) -> Result<Vec<u8>> {
        let mut data = Vec::with_capacity(usize::from(len));
        let actual = (&mut self.reader)
            .take(u64::from(len))
            .read_to_end(&mut data)?;
        self.advance(actual);

        if actual != usize::from(len) {
            return Err(Error::TruncatedSegment {
                expected: u64::from(len),
                actual: actual.try_into().unwrap_or(u64::MAX),
            });
        }

        Ok(data)
    }

    fn skip_payload(&mut self, len: u16) -> Result<()> {
        let actual = std::io::copy(
            &mut (&mut self.reader).take(u64::from(len)),
            &mut std::io::sink(),
        )?;
        self.pos = self.pos.saturating_add(actual);

        if actual != u64::from(len) {
            return Err(Error::TruncatedSegment {
                expected: u64::from(len),
                actual,
            });
        }

        Ok(())
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0];
        match self.reader.read_exact(&mut byte) {
            Ok(()) => {
                self.advance(1);
                Ok(Some(byte[0]))
            }
            Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn consume(&mut self, n: usize) {
        self.reader.consume(n);
        self.advance(n);
    }

    fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n.try_into().unwrap_or(u64::MAX));
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Segment truncated: expected {expected} bytes but only {actual} available")]
    TruncatedSegment { expected: u64, actual: u64 },
    #[error("Segment length {0} is smaller than the length field")]
    InvalidSegmentLength(u16),
    #[error("No APP1 segment with Exif data found")]
    NoExifSegment,
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
}
