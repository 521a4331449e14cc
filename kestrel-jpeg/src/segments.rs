kestrel_common::utils::convertible_enum!(
    #[repr(u8)]
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Marker {
        /// For temporary use in arithmetic coding
        TEM = 0x01,
        SOF0 = 0xC0,
        SOF1 = 0xC1,
        SOF2 = 0xC2,
        /// Define Huffman table
        DHT = 0xC4,
        RST0 = 0xD0,
        RST1 = 0xD1,
        RST2 = 0xD2,
        RST3 = 0xD3,
        RST4 = 0xD4,
        RST5 = 0xD5,
        RST6 = 0xD6,
        RST7 = 0xD7,
        /// Start of image
        SOI = 0xD8,
        /// End of image
        EOI = 0xD9,
        /// Start of scan
        SOS = 0xDA,
        DQT = 0xDB,
        APP0 = 0xE0,
        /// Exif, XMP
        APP1 = 0xE1,
        /// ICC color profile
        APP2 = 0xE2,
        APP13 = 0xED,
        APP14 = 0xEE,
        /// Comment
        COM = 0xFE,
    }
);

impl Marker {
    /// Markers that are not followed by a length field
    pub fn is_standalone(self) -> bool {
        let code = u8::from(self);
        matches!(code, 0x01 | 0xD0..=0xD9)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    marker: Marker,
    pos: u64,
    data: Vec<u8>,
}

impl Segment {
    pub(crate) fn new(marker: Marker, pos: u64, data: Vec<u8>) -> Self {
        Self { marker, pos, data }
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Position of the marker in the stream
    pub fn pos(&self) -> u64 {
        self.pos
    }

    /// Payload after the length field
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
