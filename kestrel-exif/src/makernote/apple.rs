use std::sync::Arc;

use kestrel_common::exif::Namespace;
use kestrel_tiff::{ByteOrder, Directory, Reader};

use super::{MakerNote, MakerNoteParser};
use crate::error::MakerNoteError;

const APPLE_SIGNATURE: &[u8] = b"Apple iOS\0";
const BYTE_ORDER_MARKER: usize = 12;
const DIRECTORY_START: u32 = 14;

/// Apple maker notes
///
/// Byte order marker after the signature, followed by a directory whose
/// offsets are relative to the start of the maker note.
#[derive(Debug, Clone, Copy, Default)]
pub struct Apple;

impl MakerNoteParser for Apple {
    fn name(&self) -> &'static str {
        "Apple"
    }

    fn namespace(&self) -> Namespace {
        Namespace::Apple
    }

    fn applies(&self, note: &MakerNote) -> bool {
        note.data().starts_with(APPLE_SIGNATURE)
    }

    fn parse(&self, note: &MakerNote) -> Result<Option<Directory>, MakerNoteError> {
        let data = note.data();

        let mut marker = [0; 2];
        marker.copy_from_slice(
            data.get(BYTE_ORDER_MARKER..BYTE_ORDER_MARKER.saturating_add(2))
                .ok_or(MakerNoteError::TooShort(data.len()))?,
        );
        let order = ByteOrder::from_marker(marker).ok_or(MakerNoteError::ByteOrder(marker))?;

        let mut reader = Reader::new(Arc::from(data), order);
        reader.seek(DIRECTORY_START)?;
        let (directory, _) = Directory::decode(&mut reader, note.tiff().mode())?;

        Ok(Some(directory))
    }
}
