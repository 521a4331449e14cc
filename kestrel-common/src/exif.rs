use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Numeric identifier of a tag within its directory
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct TagId(pub u16);

impl TagId {
    pub const MAKE: Self = Self(0x010F);
    pub const JPEG_INTERCHANGE_FORMAT: Self = Self(0x0201);
    pub const JPEG_INTERCHANGE_FORMAT_LENGTH: Self = Self(0x0202);
    pub const MAKER_NOTE: Self = Self(0x927C);

    pub const EXIF_IFD_POINTER: Self = Self(0x8769);
    pub const GPS_INFO_IFD_POINTER: Self = Self(0x8825);
    pub const INTEROPERABILITY_IFD_POINTER: Self = Self(0xA005);

    /// Namespace of the directory this pointer tag leads to
    ///
    /// See 4.6.3 in v2.2 standard
    pub fn sub_directory(&self) -> Option<Namespace> {
        match *self {
            Self::EXIF_IFD_POINTER => Some(Namespace::Exif),
            Self::GPS_INFO_IFD_POINTER => Some(Namespace::Gps),
            Self::INTEROPERABILITY_IFD_POINTER => Some(Namespace::Interoperability),
            _ => None,
        }
    }
}

/// Naming scope of tag ids
///
/// The primary directory and the Exif sub-directory share one name table.
/// Maker note namespaces carry their vendor as name prefix.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Namespace {
    /// IFD0
    Tiff,
    Exif,
    Gps,
    Interoperability,
    Canon,
    /// Nikon maker notes with the type 1 header
    Nikon1,
    /// Nikon maker notes with an embedded TIFF header (type 3)
    Nikon,
    Apple,
}

impl Namespace {
    pub const ALL: [Self; 8] = [
        Self::Tiff,
        Self::Exif,
        Self::Gps,
        Self::Interoperability,
        Self::Canon,
        Self::Nikon1,
        Self::Nikon,
        Self::Apple,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Tiff => "Tiff",
            Self::Exif => "Exif",
            Self::Gps => "GPS",
            Self::Interoperability => "Interoperability",
            Self::Canon => "Canon",
            Self::Nikon1 => "Nikon1",
            Self::Nikon => "Nikon",
            Self::Apple => "Apple",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.name() == name)
    }

    /// Namespace whose name table is used for this namespace
    pub fn table(self) -> Self {
        match self {
            Self::Tiff => Self::Exif,
            other => other,
        }
    }

    /// Whether tags in this namespace come from a vendor maker note
    ///
    /// ```
    /// # use kestrel_common::exif::Namespace;
    /// assert!(Namespace::Nikon1.is_maker_note());
    /// assert!(!Namespace::Gps.is_maker_note());
    /// ```
    pub fn is_maker_note(self) -> bool {
        matches!(
            self,
            Self::Canon | Self::Nikon1 | Self::Nikon | Self::Apple
        )
    }
}

/// A field with a known name
///
/// Implemented by the marker types in [`crate::field`].
pub trait Field {
    const NAME: &'static str;
    const TAG: TagId;
    const NAMESPACE: Namespace;
}

static NAMES_BY_TAG: LazyLock<HashMap<(TagId, Namespace), &'static str>> = LazyLock::new(|| {
    crate::field::FIELDS
        .iter()
        .map(|(tag, ns, name)| ((TagId(*tag), ns.table()), *name))
        .collect()
});

static NAMES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| crate::field::FIELDS.iter().map(|(_, _, name)| *name).collect());

/// Name of the field with `tag` in namespace `ns`, if it is in the tables
pub fn lookup_field_name(tag: TagId, ns: Namespace) -> Option<&'static str> {
    NAMES_BY_TAG.get(&(tag, ns.table())).copied()
}

/// Name for a tag: the table name or a synthesized one
///
/// ```
/// # use kestrel_common::exif::*;
/// assert_eq!(field_name(TagId(0x110), Namespace::Tiff), "Model");
/// assert_eq!(field_name(TagId(0x9999), Namespace::Exif), "Exif.0x9999");
/// assert_eq!(field_name(TagId(0x9), Namespace::Canon), "Canon.OwnerName");
/// ```
pub fn field_name(tag: TagId, ns: Namespace) -> String {
    match lookup_field_name(tag, ns) {
        Some(name) => name.to_string(),
        None => unknown_field_name(tag, ns),
    }
}

pub fn unknown_field_name(tag: TagId, ns: Namespace) -> String {
    format!("{}.0x{:04X}", ns.name(), tag.0)
}

/// Parses names created by [`unknown_field_name`]
///
/// ```
/// # use kestrel_common::exif::*;
/// assert_eq!(
///     parse_unknown_field_name("GPS.0x00FF"),
///     Some((TagId(0xFF), Namespace::Gps))
/// );
/// assert_eq!(parse_unknown_field_name("Foo.0x00FF"), None);
/// assert_eq!(parse_unknown_field_name("Exif.Model"), None);
/// ```
pub fn parse_unknown_field_name(name: &str) -> Option<(TagId, Namespace)> {
    let (ns, id) = name.split_once('.')?;
    let ns = Namespace::from_name(ns)?;
    let hex = id.strip_prefix("0x")?;
    if hex.len() != 4 {
        return None;
    }
    let id = u16::from_str_radix(hex, 16).ok()?;

    Some((TagId(id), ns))
}

/// Whether `name` can occur in a document
///
/// True for all names from the tables and for synthesized names of known
/// namespaces.
pub fn is_known_field_name(name: &str) -> bool {
    NAMES.contains(name) || parse_unknown_field_name(name).is_some()
}
