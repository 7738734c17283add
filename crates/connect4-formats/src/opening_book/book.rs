//! In-memory opening book

use crate::opening_book::error::Result;
use crate::opening_book::layout::{BookLayout, KEY_SIZE, check_len};
use crate::opening_book::record::BookRecord;
use binrw::io::Cursor;
use binrw::{BinRead, BinWrite};

/// A fully loaded opening book
///
/// Records are kept in file order regardless of the layout they were read
/// from, so `parse(build(book, layout), layout) == book` for both layouts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OpeningBook {
    /// Records in file order
    pub records: Vec<BookRecord>,
}

impl OpeningBook {
    /// Create a book from records
    pub fn new(records: Vec<BookRecord>) -> Self {
        Self { records }
    }

    /// Parse a book of exactly `entries` records stored in `layout`
    pub fn parse(data: &[u8], layout: BookLayout, entries: usize) -> Result<Self> {
        check_len(data.len() as u64, entries)?;

        let records = match layout {
            BookLayout::Interleaved => {
                let mut cursor = Cursor::new(data);
                let mut records = Vec::with_capacity(entries);
                for _ in 0..entries {
                    records.push(BookRecord::read(&mut cursor)?);
                }
                records
            }
            BookLayout::Bucketed => {
                let (keys, values) = data.split_at(entries * KEY_SIZE);
                keys.chunks_exact(KEY_SIZE)
                    .zip(values)
                    .map(|(key, &value)| {
                        BookRecord::from_le_key([key[0], key[1], key[2], key[3]], value)
                    })
                    .collect()
            }
        };

        Ok(Self { records })
    }

    /// Serialize the book in `layout`
    pub fn build(&self, layout: BookLayout) -> Result<Vec<u8>> {
        let mut data = Vec::with_capacity(self.serialized_size());

        match layout {
            BookLayout::Interleaved => {
                let mut cursor = Cursor::new(&mut data);
                for record in &self.records {
                    record.write(&mut cursor)?;
                }
            }
            BookLayout::Bucketed => {
                for record in &self.records {
                    data.extend_from_slice(&record.le_key());
                }
                data.extend(self.records.iter().map(|r| r.value));
            }
        }

        Ok(data)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialized size in bytes, identical for both layouts
    pub fn serialized_size(&self) -> usize {
        self.records.len() * crate::opening_book::layout::RECORD_SIZE
    }

    /// Value of the first record with the given numeric key
    pub fn lookup(&self, key: u32) -> Option<u8> {
        self.records
            .iter()
            .find(|r| r.key_u32() == key)
            .map(|r| r.value)
    }
}
