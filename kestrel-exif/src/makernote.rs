//! Vendor specific maker notes
//!
//! The MakerNote field holds a blob in a vendor defined format. Most vendors
//! store a directory in it, but with different headers and different bases
//! for offsets. Every format is handled by a [`MakerNoteParser`].

mod apple;
mod canon;
mod nikon;

use std::sync::LazyLock;

use kestrel_common::exif::Namespace;
use kestrel_common::field;
use kestrel_tiff::{Directory, Tag, Tiff};

pub use apple::Apple;
pub use canon::Canon;
pub use nikon::{NikonV1, NikonV3};

use crate::error::MakerNoteError;
use crate::Exif;

/// Decoder for the maker note format of one vendor
pub trait MakerNoteParser: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &'static str;

    /// Namespace used to name the decoded tags
    fn namespace(&self) -> Namespace;

    /// Whether the maker note is in this parser's format
    fn applies(&self, note: &MakerNote) -> bool;

    /// Decodes the maker note
    ///
    /// `Ok(None)` signals a recognized but unsupported variant.
    fn parse(&self, note: &MakerNote) -> Result<Option<Directory>, MakerNoteError>;
}

/// Maker note and the context needed to decode it
#[derive(Debug)]
pub struct MakerNote<'a> {
    make: Option<String>,
    tag: &'a Tag,
    tiff: &'a Tiff,
}

impl<'a> MakerNote<'a> {
    /// Maker note of the document, if present
    pub fn from_exif(exif: &'a Exif) -> Option<Self> {
        let tag = exif.field::<field::MakerNote>().ok()?;

        Some(Self {
            make: exif.make(),
            tag,
            tiff: exif.tiff(),
        })
    }

    /// Value of the Make field
    pub fn make(&self) -> Option<&str> {
        self.make.as_deref()
    }

    pub fn tag(&self) -> &Tag {
        self.tag
    }

    /// Bytes of the maker note
    pub fn data(&self) -> &[u8] {
        self.tag.raw()
    }

    /// Container the maker note is stored in
    pub fn tiff(&self) -> &Tiff {
        self.tiff
    }
}

/// List of maker note parsers
///
/// Parsers are tried in the order they are registered. The first one that
/// applies decodes the maker note, even if it fails.
#[derive(Debug)]
pub struct Registry {
    parsers: Vec<Box<dyn MakerNoteParser>>,
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::default);

impl Default for Registry {
    /// Registry with all parsers of this crate
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(Canon)
            .register(NikonV1)
            .register(NikonV3)
            .register(Apple);
        registry
    }
}

impl Registry {
    /// Registry without parsers, maker notes are ignored
    pub fn empty() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Shared default registry
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    pub fn register(&mut self, parser: impl MakerNoteParser + 'static) -> &mut Self {
        self.parsers.push(Box::new(parser));
        self
    }

    pub fn parsers(&self) -> impl Iterator<Item = &dyn MakerNoteParser> {
        self.parsers.iter().map(|x| x.as_ref())
    }

    /// Adds the maker note fields to `exif`
    ///
    /// Returns the number of added fields. Failures are logged and result in
    /// no added fields.
    pub fn apply(&self, exif: &mut Exif) -> usize {
        let parsed = {
            let Some(note) = MakerNote::from_exif(exif) else {
                return 0;
            };

            let Some(parser) = self.parsers().find(|parser| parser.applies(&note)) else {
                tracing::debug!("No parser for maker note of make {:?}", note.make());
                return 0;
            };

            // Vendor fields must not replace standard ones
            if !parser.namespace().is_maker_note() {
                tracing::info!(
                    "Parser {} uses non maker note namespace {:?}",
                    parser.name(),
                    parser.namespace()
                );
                return 0;
            }

            tracing::debug!("Decoding maker note as {}", parser.name());
            match parser.parse(&note) {
                Ok(Some(directory)) => Some((directory, parser.namespace())),
                Ok(None) => {
                    tracing::debug!("Unsupported {} maker note", parser.name());
                    None
                }
                Err(err) => {
                    tracing::info!("Failed to decode {} maker note: {err}", parser.name());
                    None
                }
            }
        };

        match parsed {
            Some((directory, namespace)) => exif.load_directory(&directory, namespace),
            None => 0,
        }
    }
}
