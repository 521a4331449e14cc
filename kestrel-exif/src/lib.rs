//! Exif metadata from JPEG and TIFF files
//!
//! [`Exif`] resolves the primary directory and the Exif, GPS and
//! Interoperability sub-directories of a TIFF container into a flat map of
//! named fields. Vendor maker notes are added by the parsers of a
//! [`Registry`](makernote::Registry).
//!
//! ```
//! # use kestrel_exif::Exif;
//! # use kestrel_common::field;
//! let data = [
//!     b'M', b'M', 0, 42, 0, 0, 0, 8, // header
//!     0, 1, // one entry
//!     0x01, 0x12, 0, 3, 0, 0, 0, 1, 0, 6, 0, 0, // Orientation = 6
//!     0, 0, 0, 0, // last directory
//! ];
//! let exif = Exif::decode(data.as_slice()).unwrap();
//! assert_eq!(exif.get("Orientation").unwrap().int(0).unwrap(), 6);
//! assert_eq!(exif.field::<field::Orientation>().unwrap().int(0).unwrap(), 6);
//! assert!(exif.get("Model").is_err());
//! ```

pub mod error;
mod exif;
pub mod makernote;

pub use error::{Error, Result};
pub use exif::Exif;
pub use kestrel_tiff::{Materialize, Tag};
