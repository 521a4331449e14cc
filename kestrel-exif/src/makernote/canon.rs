use kestrel_common::exif::Namespace;
use kestrel_tiff::Directory;

use super::{MakerNote, MakerNoteParser};
use crate::error::MakerNoteError;

/// Canon maker notes
///
/// A directory without header. Offsets inside are relative to the start of
/// the TIFF container, not to the maker note.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canon;

impl MakerNoteParser for Canon {
    fn name(&self) -> &'static str {
        "Canon"
    }

    fn namespace(&self) -> Namespace {
        Namespace::Canon
    }

    fn applies(&self, note: &MakerNote) -> bool {
        note.make().is_some_and(|make| make.starts_with("Canon"))
    }

    fn parse(&self, note: &MakerNote) -> Result<Option<Directory>, MakerNoteError> {
        let Some(offset) = note.tag().offset() else {
            return Err(MakerNoteError::TooShort(note.data().len()));
        };

        let (directory, _) = note.tiff().directory_at(offset)?;
        Ok(Some(directory))
    }
}
