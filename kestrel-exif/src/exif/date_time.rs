use kestrel_common::field;

use super::Exif;
use crate::error::{Error, Result};

const DATE_TIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

impl Exif {
    /// Time the image was taken
    ///
    /// Uses DateTimeOriginal and falls back to DateTime if it is missing.
    /// Exif does not store a time zone with these fields.
    pub fn date_time(&self) -> Result<chrono::NaiveDateTime> {
        let tag = match self.field::<field::DateTimeOriginal>() {
            Err(Error::FieldNotPresent(_)) => self.field::<field::DateTime>()?,
            tag => tag?,
        };

        let value = tag.string()?;
        Ok(chrono::NaiveDateTime::parse_from_str(
            value.trim(),
            DATE_TIME_FORMAT,
        )?)
    }
}
