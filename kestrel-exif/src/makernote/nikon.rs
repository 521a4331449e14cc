use kestrel_common::exif::Namespace;
use kestrel_common::math::*;
use kestrel_tiff::{Directory, Tiff};

use super::{MakerNote, MakerNoteParser};
use crate::error::MakerNoteError;

const NIKON_V1_SIGNATURE: &[u8] = b"Nikon\0\x01\0";
const NIKON_V3_SIGNATURE: &[u8] = b"Nikon\0\x02";

/// Length of the type 1 header, same as its signature
const NIKON_V1_HEADER_LEN: u32 = 8;

/// Start of the embedded TIFF container in type 3 maker notes
const NIKON_V3_TIFF_START: usize = 10;

/// Nikon maker notes with the type 1 header
///
/// The directory starts after the eight byte header. Offsets are relative to
/// the start of the TIFF container.
#[derive(Debug, Clone, Copy, Default)]
pub struct NikonV1;

impl MakerNoteParser for NikonV1 {
    fn name(&self) -> &'static str {
        "Nikon type 1"
    }

    fn namespace(&self) -> Namespace {
        Namespace::Nikon1
    }

    fn applies(&self, note: &MakerNote) -> bool {
        note.data().starts_with(NIKON_V1_SIGNATURE)
    }

    fn parse(&self, note: &MakerNote) -> Result<Option<Directory>, MakerNoteError> {
        let Some(offset) = note.tag().offset() else {
            return Err(MakerNoteError::TooShort(note.data().len()));
        };

        let offset = offset
            .safe_add(NIKON_V1_HEADER_LEN)
            .map_err(kestrel_tiff::Error::from)?;

        let (directory, _) = note.tiff().directory_at(offset)?;
        Ok(Some(directory))
    }
}

/// Nikon maker notes with an embedded TIFF container (type 3)
///
/// The header is followed by a complete TIFF container with its own byte
/// order. Offsets are relative to the embedded container.
#[derive(Debug, Clone, Copy, Default)]
pub struct NikonV3;

impl MakerNoteParser for NikonV3 {
    fn name(&self) -> &'static str {
        "Nikon type 3"
    }

    fn namespace(&self) -> Namespace {
        Namespace::Nikon
    }

    fn applies(&self, note: &MakerNote) -> bool {
        note.data().starts_with(NIKON_V3_SIGNATURE)
            && note
                .data()
                .get(NIKON_V3_TIFF_START..)
                .is_some_and(Tiff::is_filetype)
    }

    fn parse(&self, note: &MakerNote) -> Result<Option<Directory>, MakerNoteError> {
        let data = note
            .data()
            .get(NIKON_V3_TIFF_START..)
            .ok_or(MakerNoteError::TooShort(note.data().len()))?;

        let tiff = Tiff::decode_with(data.to_vec(), note.tiff().mode())?;
        Ok(tiff.into_directories().into_iter().next())
    }
}
