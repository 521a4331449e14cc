use std::sync::Arc;

use kestrel_common::exif::TagId;

use crate::error::Result;
use crate::{Materialize, Reader, Tag};

/// Image file directory (IFD)
///
/// Tags are kept in the order they are stored in.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    tags: Vec<Arc<Tag>>,
}

impl Directory {
    /// Decodes the directory at the cursor of `reader`
    ///
    /// Returns the directory and the offset of the next directory, where `0`
    /// terminates the chain. Fails as a whole if any tag fails.
    pub fn decode(reader: &mut Reader, mode: Materialize) -> Result<(Self, u32)> {
        let n_entries = reader.read_u16()?;
        tracing::debug!(
            "Reading directory with {n_entries} entries at byte {}",
            reader.position()
        );

        let tags = (0..n_entries)
            .map(|_| Tag::decode(reader, mode).map(Arc::new))
            .collect::<Result<Vec<_>>>()?;

        let next = reader.read_u32()?;
        tracing::debug!("Next directory offset: {next}");

        Ok((Self { tags }, next))
    }

    pub fn tags(&self) -> &[Arc<Tag>] {
        &self.tags
    }

    /// First tag with `id`
    pub fn get(&self, id: TagId) -> Option<&Arc<Tag>> {
        self.tags.iter().find(|tag| tag.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Tag>> {
        self.tags.iter()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Arc<Tag>;
    type IntoIter = std::slice::Iter<'a, Arc<Tag>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
