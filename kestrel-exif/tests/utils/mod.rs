#![allow(dead_code)]

#[path = "../../../kestrel-tiff/tests/utils/mod.rs"]
mod tiff;

pub use tiff::{
    u16_bytes, u32_bytes, ByteOrder, Data, DataType, Entry, Next, TiffBuilder, ORDERS,
};

/// Short value as stored inline in an entry
pub fn inline_short(order: ByteOrder, value: u16) -> [u8; 4] {
    let [a, b] = u16_bytes(order, value);
    [a, b, 0, 0]
}

/// Directory without TIFF header as stored in maker notes
pub fn directory_bytes(order: ByteOrder, entries: &[(u16, DataType, u32, [u8; 4])]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&u16_bytes(order, entries.len() as u16));
    for (id, data_type, count, value) in entries {
        data.extend_from_slice(&u16_bytes(order, *id));
        data.extend_from_slice(&u16_bytes(order, data_type.u16()));
        data.extend_from_slice(&u32_bytes(order, *count));
        data.extend_from_slice(value);
    }
    data.extend_from_slice(&[0; 4]);
    data
}

/// IFD0 with Make and Model, pointing to an Exif directory with a maker note
pub fn with_maker_note(order: ByteOrder, make: &str, maker_note: &[u8]) -> Vec<u8> {
    let mut builder = TiffBuilder::new(order);
    let exif = builder.directory();
    builder
        .ascii(0, 0x10F, make)
        .ascii(0, 0x110, "Model X")
        .pointer(0, 0x8769, exif)
        .rationals(exif, 0x829A, &[(1, 250)])
        .undefined(exif, 0x927C, maker_note);
    builder.build()
}
