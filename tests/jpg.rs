use kestrel_exif::makernote::Registry;
use kestrel_exif::{Exif, Materialize};
use kestrel_jpeg::{Marker, Scanner, EXIF_IDENTIFIER_STRING};

/// Big endian TIFF container with Orientation and Model
fn tiff() -> Vec<u8> {
    let mut data = vec![b'M', b'M', 0, 42, 0, 0, 0, 8];
    data.extend_from_slice(&[0, 2]);
    data.extend_from_slice(&[0x01, 0x12, 0, 3, 0, 0, 0, 1, 0, 1, 0, 0]);
    data.extend_from_slice(&[0x01, 0x10, 0, 2, 0, 0, 0, 9, 0, 0, 0, 38]);
    data.extend_from_slice(&[0, 0, 0, 0]);
    data.extend_from_slice(b"iPhone 6\0");
    data
}

fn segment(marker: u8, payload: &[u8]) -> Vec<u8> {
    let len = u16::try_from(payload.len() + 2).unwrap();
    let mut data = vec![0xFF, marker];
    data.extend_from_slice(&len.to_be_bytes());
    data.extend_from_slice(payload);
    data
}

fn jpeg() -> Vec<u8> {
    let mut exif = EXIF_IDENTIFIER_STRING.to_vec();
    exif.extend(tiff());

    let mut xmp = b"http://ns.adobe.com/xap/1.0/\0".to_vec();
    xmp.extend_from_slice(b"<x:xmpmeta xmlns:x=\"adobe:ns:meta/\"/>");

    let mut data = vec![0xFF, 0xD8];
    data.extend(segment(0xE0, b"JFIF\0\x01\x01\0\0\x01\0\x01\0\0"));
    data.extend(segment(0xE1, &xmp));
    data.extend(segment(0xE1, &exif));
    data.extend(segment(0xDB, &[0; 65]));
    data.extend(segment(0xDA, &[1, 1, 0, 0, 63, 0]));
    data.extend_from_slice(&[0x12, 0xFF, 0x00, 0x34]);
    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}

#[test]
fn exif() {
    let data = jpeg();
    assert!(kestrel_jpeg::is_filetype(&data));

    let exif = Exif::decode(data.as_slice()).unwrap();
    assert_eq!(exif.get("Orientation").unwrap().int(0).unwrap(), 1);
    assert_eq!(exif.model(), Some(String::from("iPhone 6")));
    assert_eq!(exif.raw(), tiff().as_slice());
}

#[test]
fn same_as_tiff() {
    let from_jpeg =
        Exif::decode_with(jpeg().as_slice(), &Registry::empty(), Materialize::Lazy).unwrap();
    let from_tiff = Exif::decode(tiff().as_slice()).unwrap();

    assert_eq!(from_jpeg.to_json().unwrap(), from_tiff.to_json().unwrap());
    assert_eq!(
        from_jpeg.to_json().unwrap(),
        serde_json::json!({ "Model": "iPhone 6", "Orientation": [1] })
    );
}

#[test]
fn segments() {
    let data = jpeg();
    let mut scanner = Scanner::new(data.as_slice());

    let mut markers = Vec::new();
    let mut app1 = Vec::new();
    while let Some(segment) = scanner.next_segment().unwrap() {
        markers.push(segment.marker());
        if segment.marker() == Marker::APP1 {
            app1.push(segment.into_data());
        }
    }

    assert_eq!(
        markers,
        [
            Marker::SOI,
            Marker::APP0,
            Marker::APP1,
            Marker::APP1,
            Marker::DQT,
            Marker::SOS,
        ]
    );

    assert!(app1[0].starts_with(b"http://ns.adobe.com/xap/1.0/\0"));
    assert_eq!(app1[1].strip_prefix(EXIF_IDENTIFIER_STRING), Some(tiff().as_slice()));
}
