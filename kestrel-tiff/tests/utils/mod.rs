#![allow(dead_code)]

pub use kestrel_tiff::*;

/// Value part of an entry before layout
#[derive(Debug, Clone)]
pub enum Data {
    /// Encoded value, placed inline or in the data area
    Bytes(Vec<u8>),
    /// Value or offset field written as is
    Raw(u32),
    /// Offset of another directory of the builder
    Directory(usize),
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub id: u16,
    pub data_type: u16,
    pub count: u32,
    pub data: Data,
}

#[derive(Debug, Clone)]
pub enum Next {
    End,
    Directory(usize),
    Raw(u32),
}

/// Writes TIFF containers for tests
///
/// Directories are laid out in order after the header, values that don't
/// fit into an entry follow after the last directory. Directory 0 is the
/// one the header points to.
#[derive(Debug, Clone)]
pub struct TiffBuilder {
    pub order: ByteOrder,
    directories: Vec<(Vec<Entry>, Next)>,
}

impl TiffBuilder {
    pub fn new(order: ByteOrder) -> Self {
        Self {
            order,
            directories: vec![(Vec::new(), Next::End)],
        }
    }

    /// Adds an empty directory and returns its index
    pub fn directory(&mut self) -> usize {
        self.directories.push((Vec::new(), Next::End));
        self.directories.len() - 1
    }

    pub fn chain(&mut self, from: usize, to: usize) -> &mut Self {
        self.directories[from].1 = Next::Directory(to);
        self
    }

    pub fn next_raw(&mut self, dir: usize, offset: u32) -> &mut Self {
        self.directories[dir].1 = Next::Raw(offset);
        self
    }

    pub fn entry(&mut self, dir: usize, entry: Entry) -> &mut Self {
        self.directories[dir].0.push(entry);
        self
    }

    pub fn bytes(
        &mut self,
        dir: usize,
        id: u16,
        data_type: DataType,
        count: u32,
        bytes: Vec<u8>,
    ) -> &mut Self {
        self.entry(
            dir,
            Entry {
                id,
                data_type: data_type.u16(),
                count,
                data: Data::Bytes(bytes),
            },
        )
    }

    pub fn raw(
        &mut self,
        dir: usize,
        id: u16,
        data_type: u16,
        count: u32,
        value_offset: u32,
    ) -> &mut Self {
        self.entry(
            dir,
            Entry {
                id,
                data_type,
                count,
                data: Data::Raw(value_offset),
            },
        )
    }

    pub fn pointer(&mut self, dir: usize, id: u16, target: usize) -> &mut Self {
        self.entry(
            dir,
            Entry {
                id,
                data_type: DataType::Long.u16(),
                count: 1,
                data: Data::Directory(target),
            },
        )
    }

    pub fn shorts(&mut self, dir: usize, id: u16, values: &[u16]) -> &mut Self {
        let bytes = values.iter().flat_map(|x| u16_bytes(self.order, *x)).collect();
        self.bytes(dir, id, DataType::Short, values.len() as u32, bytes)
    }

    pub fn longs(&mut self, dir: usize, id: u16, values: &[u32]) -> &mut Self {
        let bytes = values.iter().flat_map(|x| u32_bytes(self.order, *x)).collect();
        self.bytes(dir, id, DataType::Long, values.len() as u32, bytes)
    }

    /// ASCII value with terminating NULL
    pub fn ascii(&mut self, dir: usize, id: u16, value: &str) -> &mut Self {
        let mut bytes = value.as_bytes().to_vec();
        bytes.push(0);
        let count = bytes.len() as u32;
        self.bytes(dir, id, DataType::Ascii, count, bytes)
    }

    pub fn rationals(&mut self, dir: usize, id: u16, values: &[(u32, u32)]) -> &mut Self {
        let bytes = values
            .iter()
            .flat_map(|(n, d)| [u32_bytes(self.order, *n), u32_bytes(self.order, *d)])
            .flatten()
            .collect();
        self.bytes(dir, id, DataType::Rational, values.len() as u32, bytes)
    }

    pub fn undefined(&mut self, dir: usize, id: u16, bytes: &[u8]) -> &mut Self {
        self.bytes(dir, id, DataType::Undefined, bytes.len() as u32, bytes.to_vec())
    }

    /// Absolute offsets of all directories
    pub fn directory_offsets(&self) -> Vec<u32> {
        let mut offsets = Vec::new();
        let mut pos = 8;
        for (entries, _) in &self.directories {
            offsets.push(pos);
            pos += 2 + 12 * entries.len() as u32 + 4;
        }
        offsets
    }

    pub fn build(&self) -> Vec<u8> {
        let order = self.order;
        let offsets = self.directory_offsets();
        let mut data_area_pos = offsets.last().copied().unwrap_or(8)
            + 2
            + 12 * self.directories.last().map_or(0, |x| x.0.len()) as u32
            + 4;

        let mut data = Vec::new();
        data.extend_from_slice(&order.marker());
        data.extend_from_slice(&u16_bytes(order, 42));
        data.extend_from_slice(&u32_bytes(order, 8));

        let mut data_area = Vec::new();

        for (entries, next) in &self.directories {
            data.extend_from_slice(&u16_bytes(order, entries.len() as u16));
            for entry in entries {
                data.extend_from_slice(&u16_bytes(order, entry.id));
                data.extend_from_slice(&u16_bytes(order, entry.data_type));
                data.extend_from_slice(&u32_bytes(order, entry.count));
                match &entry.data {
                    Data::Bytes(bytes) if bytes.len() <= 4 => {
                        let mut inline = bytes.clone();
                        inline.resize(4, 0);
                        data.extend_from_slice(&inline);
                    }
                    Data::Bytes(bytes) => {
                        data.extend_from_slice(&u32_bytes(order, data_area_pos));
                        data_area.extend_from_slice(bytes);
                        data_area_pos += bytes.len() as u32;
                    }
                    Data::Raw(value) => data.extend_from_slice(&u32_bytes(order, *value)),
                    Data::Directory(index) => {
                        data.extend_from_slice(&u32_bytes(order, offsets[*index]))
                    }
                }
            }
            let next = match next {
                Next::End => 0,
                Next::Directory(index) => offsets[*index],
                Next::Raw(offset) => *offset,
            };
            data.extend_from_slice(&u32_bytes(order, next));
        }

        data.extend_from_slice(&data_area);
        data
    }
}

pub fn u16_bytes(order: ByteOrder, value: u16) -> [u8; 2] {
    match order {
        ByteOrder::LittleEndian => value.to_le_bytes(),
        ByteOrder::BigEndian => value.to_be_bytes(),
    }
}

pub fn u32_bytes(order: ByteOrder, value: u32) -> [u8; 4] {
    match order {
        ByteOrder::LittleEndian => value.to_le_bytes(),
        ByteOrder::BigEndian => value.to_be_bytes(),
    }
}

pub fn u64_bytes(order: ByteOrder, value: u64) -> [u8; 8] {
    match order {
        ByteOrder::LittleEndian => value.to_le_bytes(),
        ByteOrder::BigEndian => value.to_be_bytes(),
    }
}

pub const ORDERS: [ByteOrder; 2] = [ByteOrder::LittleEndian, ByteOrder::BigEndian];
