//! Building blocks shared by the kestrel crates
//!
//! Checked arithmetic for offsets and lengths read from untrusted files, the
//! `convertible_enum!` macro for numeric codes, tag identifiers with their
//! namespaces, the field name tables, and GPS helpers.

pub mod exif;
pub mod field;
pub mod geography;
pub mod math;
pub mod utils;
