use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Exif;
use crate::error::Result;

impl Exif {
    /// All fields as JSON object, sorted by name
    ///
    /// ```
    /// # use kestrel_exif::Exif;
    /// let data = [
    ///     b'I', b'I', 42, 0, 8, 0, 0, 0, // header
    ///     1, 0, // one entry
    ///     0x0E, 0xA2, 5, 0, 1, 0, 0, 0, 26, 0, 0, 0, // FocalPlaneXResolution
    ///     0, 0, 0, 0, // last directory
    ///     72, 0, 0, 0, 1, 0, 0, 0, // 72/1
    /// ];
    /// let exif = Exif::from_bytes(data.to_vec()).unwrap();
    /// assert_eq!(
    ///     exif.to_json().unwrap(),
    ///     serde_json::json!({ "FocalPlaneXResolution": ["72/1"] })
    /// );
    /// ```
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Serialize for Exif {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, tag) in self.iter() {
            map.serialize_entry(name, &**tag)?;
        }
        map.end()
    }
}

/// One `name: value` line per field
impl std::fmt::Display for Exif {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, tag) in self.iter() {
            let value = serde_json::to_string(&**tag).map_err(|_| std::fmt::Error)?;
            writeln!(f, "{name}: {value}")?;
        }

        Ok(())
    }
}
