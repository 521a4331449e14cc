#[cfg(feature = "chrono")]
mod date_time;
mod decode;
mod gps;
mod render;

use std::collections::BTreeMap;
use std::sync::Arc;

use kestrel_common::exif::{field_name, is_known_field_name, Field, Namespace, TagId};
use kestrel_common::field;
use kestrel_common::math::*;
use kestrel_tiff::{Directory, Tag, Tiff};

use crate::error::{Error, Result};

/// Named fields of an Exif container
///
/// Tags are shared with the directories of the underlying [`Tiff`] and
/// the maker note directories.
#[derive(Debug, Clone)]
pub struct Exif {
    tiff: Tiff,
    fields: BTreeMap<String, Arc<Tag>>,
}

impl Exif {
    /// Tag of field `name`
    ///
    /// Fails with [`Error::InvalidFieldName`] if no namespace knows the name
    /// and with [`Error::FieldNotPresent`] if the name is valid but the
    /// field does not exist in this document.
    pub fn get(&self, name: &str) -> Result<&Tag> {
        if let Some(tag) = self.fields.get(name) {
            return Ok(tag);
        }

        if is_known_field_name(name) {
            Err(Error::FieldNotPresent(name.to_string()))
        } else {
            Err(Error::InvalidFieldName(name.to_string()))
        }
    }

    pub fn field<F: Field>(&self) -> Result<&Tag> {
        self.get(F::NAME)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Calls `visitor` for every field, sorted by name
    ///
    /// Stops at the first error returned by `visitor` and returns it.
    pub fn walk<E>(
        &self,
        mut visitor: impl FnMut(&str, &Tag) -> std::result::Result<(), E>,
    ) -> std::result::Result<(), E> {
        for (name, tag) in &self.fields {
            visitor(name, tag)?;
        }

        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Tag>)> {
        self.fields.iter().map(|(name, tag)| (name.as_str(), tag))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Adds all tags of `directory` named via the table of `namespace`
    ///
    /// Returns the number of added tags. Existing fields with the same name
    /// are replaced.
    pub fn load_directory(&mut self, directory: &Directory, namespace: Namespace) -> usize {
        for tag in directory {
            let name = field_name(tag.id(), namespace);
            tracing::debug!("Loading field '{name}'");
            self.fields.insert(name, tag.clone());
        }

        directory.len()
    }

    pub fn tiff(&self) -> &Tiff {
        &self.tiff
    }

    /// Bytes of the TIFF container the fields were decoded from
    pub fn raw(&self) -> &[u8] {
        self.tiff.raw()
    }

    /// Camera manufacturer
    pub fn make(&self) -> Option<String> {
        self.field::<field::Make>().ok()?.string().ok()
    }

    /// Camera model
    pub fn model(&self) -> Option<String> {
        self.field::<field::Model>().ok()?.string().ok()
    }

    /// Embedded JPEG preview image from the second directory
    pub fn jpeg_thumbnail(&self) -> Result<&[u8]> {
        let thumbnail = self.tiff.directories().get(1);
        let lookup = |id: TagId| {
            thumbnail
                .and_then(|dir| dir.get(id))
                .ok_or_else(|| Error::FieldNotPresent(field_name(id, Namespace::Tiff)))
        };

        let offset = lookup(field::ThumbnailJPEGInterchangeFormat::TAG)?.int(0)?;
        let len = lookup(field::ThumbnailJPEGInterchangeFormatLength::TAG)?.int(0)?;

        let offset = offset.usize().map_err(kestrel_tiff::Error::from)?;
        let len = len.usize().map_err(kestrel_tiff::Error::from)?;
        let end = offset.safe_add(len).map_err(kestrel_tiff::Error::from)?;

        self.raw().get(offset..end).ok_or_else(|| {
            kestrel_tiff::Error::ShortRead {
                offset,
                len,
                available: self.raw().len(),
            }
            .into()
        })
    }
}
