use kestrel_common::geography::InvalidHemisphere;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("TIFF: {0}")]
    Tiff(#[from] kestrel_tiff::Error),
    #[error("JPEG: {0}")]
    Jpeg(#[from] kestrel_jpeg::Error),
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid field name '{0}'")]
    InvalidFieldName(String),
    #[error("Field '{0}' is not present")]
    FieldNotPresent(String),
    #[error("Field '{field}' expected {expected} values, found {actual}")]
    WrongCount {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("GPS: {0}")]
    Hemisphere(#[from] InvalidHemisphere),
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "chrono")]
    #[error("Date: {0}")]
    DateTime(#[from] chrono::ParseError),
}

/// Failures of maker note parsers
///
/// These never leave the [`Registry`](crate::makernote::Registry).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MakerNoteError {
    #[error("TIFF: {0}")]
    Tiff(#[from] kestrel_tiff::Error),
    #[error("Maker note is too short: {0} bytes")]
    TooShort(usize),
    #[error("Unknown byte order marker {0:?}")]
    ByteOrder([u8; 2]),
}
