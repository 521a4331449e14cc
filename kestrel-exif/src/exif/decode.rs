use std::io::Read;
use std::sync::Arc;

use kestrel_common::exif::{field_name, Namespace, TagId};
use kestrel_common::math::*;
use kestrel_tiff::{ByteOrder, Materialize, Tiff};

use super::Exif;
use crate::error::Result;
use crate::makernote::Registry;

/// Pointer tags in the order their directories are loaded
///
/// The Interoperability pointer is stored in the Exif directory, so it is
/// only found after that one is loaded.
const POINTERS: [TagId; 3] = [
    TagId::EXIF_IFD_POINTER,
    TagId::GPS_INFO_IFD_POINTER,
    TagId::INTEROPERABILITY_IFD_POINTER,
];

impl Exif {
    /// Decodes JPEG or TIFF data
    ///
    /// Uses the global maker note [`Registry`] and converts all values
    /// right away.
    pub fn decode(reader: impl Read) -> Result<Self> {
        Self::decode_with(reader, Registry::global(), Materialize::default())
    }

    /// Decodes JPEG or TIFF data with explicit settings
    ///
    /// Data starting with a TIFF byte order marker is decoded directly,
    /// everything else is searched for a JPEG Exif segment.
    pub fn decode_with(
        mut reader: impl Read,
        registry: &Registry,
        mode: Materialize,
    ) -> Result<Self> {
        let mut head = [0; 2];
        if let Err(err) = reader.read_exact(&mut head) {
            return Err(if err.kind() == std::io::ErrorKind::UnexpectedEof {
                kestrel_tiff::Error::TruncatedHeader.into()
            } else {
                err.into()
            });
        }

        let data = if ByteOrder::from_marker(head).is_some() {
            tracing::debug!("Reading TIFF data");
            let mut data = head.to_vec();
            reader.read_to_end(&mut data)?;
            data
        } else {
            tracing::debug!("Searching JPEG for Exif segment");
            kestrel_jpeg::exif_data(head.as_slice().chain(reader))?
        };

        Self::from_tiff_with(data, registry, mode)
    }

    /// Decodes a TIFF container
    pub fn from_bytes(data: impl Into<Arc<[u8]>>) -> Result<Self> {
        Self::from_tiff_with(data, Registry::global(), Materialize::default())
    }

    pub fn from_tiff_with(
        data: impl Into<Arc<[u8]>>,
        registry: &Registry,
        mode: Materialize,
    ) -> Result<Self> {
        let tiff = Tiff::decode_with(data, mode)?;
        let mut exif = Self::resolve(tiff)?;

        let n = registry.apply(&mut exif);
        tracing::debug!("Loaded {n} maker note fields");

        Ok(exif)
    }

    /// Names the fields of IFD0 and of the directories it points to
    ///
    /// Any failure in a sub-directory fails the whole document.
    fn resolve(tiff: Tiff) -> Result<Self> {
        let ifd0 = tiff.directories().first().cloned().unwrap_or_default();

        let mut exif = Self {
            tiff,
            fields: Default::default(),
        };

        exif.load_directory(&ifd0, Namespace::Tiff);

        for pointer in POINTERS {
            let Some(namespace) = pointer.sub_directory() else {
                continue;
            };

            let name = field_name(pointer, Namespace::Tiff);
            let Some(tag) = exif.fields.get(&name) else {
                tracing::debug!("No '{name}' in document");
                continue;
            };

            let offset = tag.int(0)?.u32().map_err(kestrel_tiff::Error::from)?;
            tracing::debug!("Loading {namespace:?} directory at {offset}");

            let (directory, _) = exif.tiff.directory_at(offset)?;
            exif.load_directory(&directory, namespace);
        }

        Ok(exif)
    }
}
