mod utils;

use std::sync::Arc;

use kestrel_common::exif::TagId;
use utils::*;

#[test]
fn directory_round_trip() {
    for order in ORDERS {
        let mut builder = TiffBuilder::new(order);
        let second = builder.directory();
        builder
            .shorts(0, 0x112, &[1])
            .ascii(0, 0x10F, "Nikon")
            .longs(0, 0x100, &[4000])
            .shorts(second, 0x103, &[6])
            .chain(0, second);
        let offsets = builder.directory_offsets();
        let data: Arc<[u8]> = builder.build().into();

        let mut reader = Reader::new(data, order);
        reader.seek(offsets[0]).unwrap();
        let (directory, next) = Directory::decode(&mut reader, Materialize::Eager).unwrap();

        let ids = directory.iter().map(|x| x.id().0).collect::<Vec<_>>();
        assert_eq!(ids, vec![0x112, 0x10F, 0x100]);
        assert_eq!(next, offsets[second]);
        assert_eq!(directory.get(TagId(0x10F)).unwrap().string().unwrap(), "Nikon");
        assert!(directory.get(TagId(0x101)).is_none());

        let (directory, next) = Directory::decode(&mut reader, Materialize::Eager).unwrap();
        assert_eq!(directory.len(), 1);
        assert_eq!(next, 0);
    }
}

#[test]
fn chain() {
    let mut builder = TiffBuilder::new(ByteOrder::BigEndian);
    let thumbnail = builder.directory();
    builder
        .ascii(0, 0x110, "D70")
        .longs(thumbnail, 0x201, &[1234])
        .chain(0, thumbnail);

    let tiff = Tiff::decode(builder.build()).unwrap();
    assert_eq!(tiff.order(), ByteOrder::BigEndian);
    assert_eq!(tiff.directories().len(), 2);
    assert_eq!(
        tiff.directories()[1].get(TagId(0x201)).unwrap().int(0).unwrap(),
        1234
    );
    assert!(Tiff::is_filetype(tiff.raw()));
}

#[test]
fn header_errors() {
    assert_eq!(Tiff::decode(b"II*\0".to_vec()).unwrap_err(), Error::TruncatedHeader);
    assert_eq!(
        Tiff::decode(b"XX*\0\x08\0\0\0".to_vec()).unwrap_err(),
        Error::BadByteOrderMarker(*b"XX")
    );
    assert_eq!(
        Tiff::decode(b"II+\0\x08\0\0\0".to_vec()).unwrap_err(),
        Error::BadMagicNumber(43)
    );
    assert!(!Tiff::is_filetype(b"\xFF\xD8\xFF"));
}

#[test]
fn empty_chain() {
    let tiff = Tiff::decode(b"MM\0*\0\0\0\0".to_vec()).unwrap();
    assert!(tiff.directories().is_empty());
    assert_eq!(tiff.order(), ByteOrder::BigEndian);
}

#[test]
fn truncated_container() {
    let mut builder = TiffBuilder::new(ByteOrder::LittleEndian);
    builder.shorts(0, 0x112, &[1]).next_raw(0, 5000);
    let data = builder.build();
    let len = data.len();

    assert_eq!(
        Tiff::decode(data).unwrap_err(),
        Error::TruncatedContainer { offset: 5000, len }
    );

    // First offset points past the end
    assert_eq!(
        Tiff::decode(b"II*\0\x09\0\0\0".to_vec()).unwrap_err(),
        Error::TruncatedContainer { offset: 9, len: 8 }
    );
}

#[test]
fn truncated_directory() {
    let mut data = TiffBuilder::new(ByteOrder::LittleEndian)
        .shorts(0, 0x112, &[1])
        .build();
    data.truncate(data.len() - 6);

    assert!(matches!(
        Tiff::decode(data).unwrap_err(),
        Error::ShortRead { .. }
    ));
}

#[test]
fn directory_loop() {
    let mut builder = TiffBuilder::new(ByteOrder::LittleEndian);
    let second = builder.directory();
    builder
        .shorts(0, 0x112, &[1])
        .shorts(second, 0x112, &[1])
        .chain(0, second)
        .chain(second, 0);
    let offsets = builder.directory_offsets();

    assert_eq!(
        Tiff::decode(builder.build()).unwrap_err(),
        Error::DirectoryLoop(offsets[0])
    );

    let mut builder = TiffBuilder::new(ByteOrder::BigEndian);
    builder.shorts(0, 0x112, &[1]).chain(0, 0);
    assert_eq!(Tiff::decode(builder.build()).unwrap_err(), Error::DirectoryLoop(8));
}

#[test]
fn too_many_directories() {
    // Overlapping empty directories every four bytes, each pointing to the
    // next one, without ever revisiting an offset
    let mut data = vec![0_u8; 200];
    data[..8].copy_from_slice(b"II*\0\x08\0\0\0");
    for offset in (8..=188).step_by(4) {
        data[offset + 2] = u8::try_from(offset + 4).unwrap();
    }

    assert_eq!(
        Tiff::decode(data).unwrap_err(),
        Error::TooManyDirectories(200 / MIN_DIRECTORY_SIZE)
    );
}

#[test]
fn lazy_equals_eager() {
    let mut builder = TiffBuilder::new(ByteOrder::BigEndian);
    builder
        .ascii(0, 0x110, "Canon EOS 5D")
        .rationals(0, 0x920A, &[(50, 1), (7, 0)])
        .shorts(0, 0x112, &[8])
        .undefined(0, 0x9000, b"0230");
    let data = builder.build();

    let eager = Tiff::decode_with(data.clone(), Materialize::Eager).unwrap();
    let lazy = Tiff::decode_with(data, Materialize::Lazy).unwrap();
    assert_eq!(lazy.mode(), Materialize::Lazy);

    let eager_tags = eager.directories()[0].tags();
    let lazy_tags = lazy.directories()[0].tags();
    assert_eq!(eager_tags.len(), lazy_tags.len());

    for (eager, lazy) in eager_tags.iter().zip(lazy_tags) {
        assert!(eager.is_materialized());
        assert!(!lazy.is_materialized());
        assert_eq!(eager.id(), lazy.id());
        assert_eq!(eager.value().unwrap(), lazy.value().unwrap());
        assert!(lazy.is_materialized());
        assert_eq!(eager.to_string(), lazy.to_string());
    }
}

#[test]
fn lazy_across_threads() {
    let mut builder = TiffBuilder::new(ByteOrder::LittleEndian);
    builder.longs(0, 0x100, &[1, 2, 3, 4]);
    let tiff = Tiff::decode_with(builder.build(), Materialize::Lazy).unwrap();
    let tag = tiff.directories()[0].tags()[0].clone();

    let handles = (0..4)
        .map(|_| {
            let tag = tag.clone();
            std::thread::spawn(move || tag.ints().unwrap().to_vec())
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec![1, 2, 3, 4]);
    }
}

#[test]
fn nested_directory() {
    let mut builder = TiffBuilder::new(ByteOrder::LittleEndian);
    let exif = builder.directory();
    builder
        .pointer(0, 0x8769, exif)
        .rationals(exif, 0x829A, &[(1, 250)]);
    let offsets = builder.directory_offsets();
    let tiff = Tiff::decode(builder.build()).unwrap();

    // Only IFD0 is part of the chain
    assert_eq!(tiff.directories().len(), 1);
    let pointer = tiff.directories()[0].get(TagId(0x8769)).unwrap();
    let offset = u32::try_from(pointer.int(0).unwrap()).unwrap();
    assert_eq!(offset, offsets[exif]);

    let (directory, next) = tiff.directory_at(offset).unwrap();
    assert_eq!(next, 0);
    assert_eq!(
        directory.get(TagId(0x829A)).unwrap().rational(0).unwrap(),
        Rational::new(1, 250)
    );

    let len = tiff.raw().len();
    assert_eq!(
        tiff.directory_at(u32::MAX).unwrap_err(),
        Error::TruncatedContainer {
            offset: u32::MAX,
            len
        }
    );
}
