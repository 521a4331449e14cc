use std::io::Read;

use kestrel_jpeg::*;

fn segment(marker: u8, payload: &[u8]) -> Vec<u8> {
    let len = u16::try_from(payload.len() + 2).unwrap();
    let mut data = vec![0xFF, marker];
    data.extend_from_slice(&len.to_be_bytes());
    data.extend_from_slice(payload);
    data
}

fn exif_payload(tiff: &[u8]) -> Vec<u8> {
    let mut payload = EXIF_IDENTIFIER_STRING.to_vec();
    payload.extend_from_slice(tiff);
    payload
}

/// Hands out at most one byte per read
struct Trickle<'a>(&'a [u8]);

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match (self.0.split_first(), buf.first_mut()) {
            (Some((byte, rest)), Some(slot)) => {
                *slot = *byte;
                self.0 = rest;
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

fn jpeg() -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8];
    data.extend(segment(0xE0, b"JFIF\0\x01\x02"));
    data.extend(segment(0xE1, b"http://ns.adobe.com/xap/1.0/\0<x:xmpmeta/>"));
    data.extend(segment(0xE1, &exif_payload(b"MM\0*\0\0\0\x08")));
    data.extend(segment(0xDB, &[0; 65]));
    data.extend([0xFF, 0xD9]);
    data
}

#[test]
fn finds_exif_after_xmp() {
    let data = jpeg();
    assert!(is_filetype(&data));
    assert_eq!(exif_data(data.as_slice()).unwrap(), b"MM\0*\0\0\0\x08");
}

#[test]
fn marker_across_reads() {
    let data = jpeg();
    assert_eq!(
        exif_data(Trickle(&data)).unwrap(),
        b"MM\0*\0\0\0\x08"
    );
}

#[test]
fn fill_bytes_and_standalone_markers() {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xFF, 0xFF];
    data.extend(segment(0xFE, b"comment"));
    data.extend([0xFF, 0xD0, 0xFF, 0x00]);
    data.extend(segment(0xE1, &exif_payload(b"II*\0")));

    assert_eq!(exif_data(data.as_slice()).unwrap(), b"II*\0");
}

#[test]
fn segments() {
    let data = jpeg();
    let mut scanner = Scanner::new(data.as_slice());

    let mut markers = Vec::new();
    while let Some(segment) = scanner.next_segment().unwrap() {
        markers.push((segment.marker(), segment.pos()));
    }

    assert_eq!(
        markers,
        vec![
            (Marker::SOI, 0),
            (Marker::APP0, 2),
            (Marker::APP1, 13),
            (Marker::APP1, 58),
            (Marker::DQT, 76),
        ]
    );
    assert_eq!(scanner.position(), data.len() as u64);
}

#[test]
fn truncated_app1() {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE1, 0x01, 0x00];
    data.extend_from_slice(b"Exif\0\0II*\0");

    assert!(matches!(
        exif_data(data.as_slice()),
        Err(Error::TruncatedSegment {
            expected: 254,
            actual: 10
        })
    ));
}

#[test]
fn truncated_other_segment() {
    let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 1, 2, 3];

    assert!(matches!(
        exif_data(data.as_slice()),
        Err(Error::TruncatedSegment {
            expected: 14,
            actual: 3
        })
    ));
}

#[test]
fn truncated_length() {
    let data = [0xFF, 0xD8, 0xFF, 0xE1, 0x00];

    assert!(matches!(
        exif_data(data.as_slice()),
        Err(Error::TruncatedSegment {
            expected: 2,
            actual: 1
        })
    ));
}

#[test]
fn invalid_length() {
    let data = [0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x01, 0xFF, 0xD9];

    assert!(matches!(
        exif_data(data.as_slice()),
        Err(Error::InvalidSegmentLength(1))
    ));
}

#[test]
fn no_exif() {
    let mut data = vec![0xFF, 0xD8];
    data.extend(segment(0xE1, b"http://ns.adobe.com/xap/1.0/\0"));
    data.extend([0xFF, 0xD9]);
    // Nothing after the end of image is considered
    data.extend(segment(0xE1, &exif_payload(b"II*\0")));

    assert!(matches!(
        exif_data(data.as_slice()),
        Err(Error::NoExifSegment)
    ));
    assert!(matches!(
        exif_data([0xFF, 0xD8].as_slice()),
        Err(Error::NoExifSegment)
    ));
}
