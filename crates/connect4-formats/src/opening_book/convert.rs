//! Conversion between the interleaved and bucketed book layouts
//!
//! The forward conversion makes two passes over the interleaved source:
//!
//! 1. **Key pass**: for every record, the four key bytes are written in
//!    reverse order (big-endian to little-endian).
//! 2. **Value pass**: for every record, the value byte is written unchanged.
//!
//! No value byte is written before every key has been written. The inverse
//! conversion rebuilds the interleaved file byte for byte.

use crate::opening_book::book::OpeningBook;
use crate::opening_book::error::{BookError, Result};
use crate::opening_book::layout::{BookLayout, KEY_SIZE, RECORD_SIZE, check_len};
use crate::opening_book::record::BookRecord;
use binrw::BinRead;
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use tracing::debug;

/// Convert an interleaved big-endian book held in memory to the bucketed layout
pub fn convert_bytes(data: &[u8], entries: usize) -> Result<Vec<u8>> {
    OpeningBook::parse(data, BookLayout::Interleaved, entries)?.build(BookLayout::Bucketed)
}

/// Convert a bucketed little-endian book held in memory back to the interleaved layout
pub fn restore_bytes(data: &[u8], entries: usize) -> Result<Vec<u8>> {
    OpeningBook::parse(data, BookLayout::Bucketed, entries)?.build(BookLayout::Interleaved)
}

/// Stream an interleaved book from `reader` into `writer` in the bucketed layout
///
/// The source is read from its current position and must hold exactly
/// `entries` records after it. The length is checked before anything is
/// written. Only one record is held in memory at a time; the source is
/// traversed twice.
///
/// Read failures report the source offset of the record being read, write
/// failures the number of bytes `writer` accepted before failing.
pub fn convert_stream<R, W>(reader: &mut R, writer: &mut W, entries: usize) -> Result<()>
where
    R: Read + Seek,
    W: Write,
{
    let layout = BookLayout::Interleaved;
    let start = checked_start(reader, entries)?;
    let mut reader = BufReader::new(reader);
    let mut writer = BufWriter::new(CountingWriter::new(writer));

    debug!(entries, "writing key pass");
    for index in 0..entries {
        let record = read_record(&mut reader, start + layout.key_offset(index) as u64)?;
        write_out(&mut writer, &record.le_key())?;
    }

    rewind(&mut reader, start)?;

    debug!(entries, "writing value pass");
    for index in 0..entries {
        let record = read_record(&mut reader, start + layout.key_offset(index) as u64)?;
        write_out(&mut writer, &[record.value])?;
    }

    finish(&mut writer)
}

/// Stream a bucketed book from `reader` into `writer` in the interleaved layout
///
/// The value region is read up front (one byte per entry), then the keys are
/// streamed and paired with their values.
pub fn restore_stream<R, W>(reader: &mut R, writer: &mut W, entries: usize) -> Result<()>
where
    R: Read + Seek,
    W: Write,
{
    let layout = BookLayout::Bucketed;
    let start = checked_start(reader, entries)?;
    let values_offset = start + layout.value_offset(0, entries) as u64;

    let mut reader = BufReader::new(reader);
    let mut writer = BufWriter::new(CountingWriter::new(writer));

    debug!(entries, "reading value region");
    rewind(&mut reader, values_offset)?;
    let mut values = vec![0u8; entries];
    reader
        .read_exact(&mut values)
        .map_err(|source| BookError::Read {
            offset: values_offset,
            source,
        })?;

    debug!(entries, "interleaving keys and values");
    rewind(&mut reader, start)?;
    let mut key = [0u8; KEY_SIZE];
    for (index, &value) in values.iter().enumerate() {
        let offset = start + layout.key_offset(index) as u64;
        reader
            .read_exact(&mut key)
            .map_err(|source| BookError::Read { offset, source })?;

        let record = BookRecord::from_le_key(key, value);
        let mut bytes = [0u8; RECORD_SIZE];
        bytes[..KEY_SIZE].copy_from_slice(&record.key);
        bytes[KEY_SIZE] = record.value;
        write_out(&mut writer, &bytes)?;
    }

    finish(&mut writer)
}

/// Writer that counts the bytes its inner writer has accepted
struct CountingWriter<W> {
    inner: W,
    written: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

/// Check the remaining stream length against `entries` and return the start position
fn checked_start<R: Seek>(reader: &mut R, entries: usize) -> Result<u64> {
    let start = reader
        .stream_position()
        .map_err(|source| BookError::Read { offset: 0, source })?;
    let end = reader
        .seek(SeekFrom::End(0))
        .map_err(|source| BookError::Read { offset: start, source })?;

    check_len(end.saturating_sub(start), entries)?;
    rewind(reader, start)?;

    Ok(start)
}

fn rewind<R: Seek>(reader: &mut R, offset: u64) -> Result<()> {
    reader
        .seek(SeekFrom::Start(offset))
        .map(|_| ())
        .map_err(|source| BookError::Read { offset, source })
}

fn read_record<R: Read + Seek>(reader: &mut R, offset: u64) -> Result<BookRecord> {
    BookRecord::read(reader).map_err(|e| match e {
        binrw::Error::Io(source) => BookError::Read { offset, source },
        other => other.into(),
    })
}

fn write_out<W: Write>(writer: &mut BufWriter<CountingWriter<W>>, bytes: &[u8]) -> Result<()> {
    match writer.write_all(bytes) {
        Ok(()) => Ok(()),
        Err(source) => Err(BookError::Write {
            offset: writer.get_ref().written,
            source,
        }),
    }
}

fn finish<W: Write>(writer: &mut BufWriter<CountingWriter<W>>) -> Result<()> {
    match writer.flush() {
        Ok(()) => Ok(()),
        Err(source) => Err(BookError::Write {
            offset: writer.get_ref().written,
            source,
        }),
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    const SOURCE: [u8; 10] = [0x01, 0x02, 0x03, 0x04, 0xAA, 0x05, 0x06, 0x07, 0x08, 0xBB];
    const CONVERTED: [u8; 10] = [0x04, 0x03, 0x02, 0x01, 0x08, 0x07, 0x06, 0x05, 0xAA, 0xBB];

    /// Source of `entries` records whose bytes are all distinct (mod 256)
    fn sequential_source(entries: usize) -> Vec<u8> {
        (0..entries * RECORD_SIZE).map(|i| i as u8).collect()
    }

    #[test]
    fn test_convert_bytes_concrete() {
        assert_eq!(convert_bytes(&SOURCE, 2).unwrap(), CONVERTED);
    }

    #[test]
    fn test_restore_bytes_concrete() {
        assert_eq!(restore_bytes(&CONVERTED, 2).unwrap(), SOURCE);
    }

    #[test]
    fn test_convert_stream_concrete() {
        let mut reader = Cursor::new(SOURCE.to_vec());
        let mut output: Vec<u8> = Vec::new();

        convert_stream(&mut reader, &mut output, 2).expect("Should convert");

        assert_eq!(output, CONVERTED);
    }

    #[test]
    fn test_restore_stream_concrete() {
        let mut reader = Cursor::new(CONVERTED.to_vec());
        let mut output: Vec<u8> = Vec::new();

        restore_stream(&mut reader, &mut output, 2).expect("Should restore");

        assert_eq!(output, SOURCE);
    }

    #[test]
    fn test_stream_matches_in_memory() {
        let source = sequential_source(37);
        let mut output: Vec<u8> = Vec::new();

        convert_stream(&mut Cursor::new(&source), &mut output, 37).unwrap();

        assert_eq!(output, convert_bytes(&source, 37).unwrap());
    }

    #[test]
    fn test_key_and_value_positions() {
        let entries = 20;
        let source = sequential_source(entries);
        let output = convert_bytes(&source, entries).unwrap();

        assert_eq!(output.len(), source.len());
        for i in 0..entries {
            assert_eq!(output[4 * i], source[5 * i + 3]);
            assert_eq!(output[4 * i + 1], source[5 * i + 2]);
            assert_eq!(output[4 * i + 2], source[5 * i + 1]);
            assert_eq!(output[4 * i + 3], source[5 * i]);
            assert_eq!(output[4 * entries + i], source[5 * i + 4]);
        }
    }

    #[test]
    fn test_stream_starts_at_current_position() {
        let mut data = vec![0xEE, 0xEE, 0xEE];
        data.extend_from_slice(&SOURCE);
        let mut reader = Cursor::new(data);
        reader.set_position(3);

        let mut output: Vec<u8> = Vec::new();
        convert_stream(&mut reader, &mut output, 2).unwrap();

        assert_eq!(output, CONVERTED);
    }

    #[test]
    fn test_truncated_stream_writes_nothing() {
        let mut reader = Cursor::new(SOURCE[..7].to_vec());
        let mut output: Vec<u8> = Vec::new();

        let err = convert_stream(&mut reader, &mut output, 2).unwrap_err();

        assert!(matches!(
            err,
            BookError::TruncatedSource {
                expected: 10,
                actual: 7,
                ..
            }
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn test_zero_entries_rejected() {
        assert!(matches!(
            convert_bytes(&[], 0),
            Err(BookError::ZeroEntries)
        ));
        assert!(matches!(
            restore_stream(&mut Cursor::new(Vec::<u8>::new()), &mut Vec::<u8>::new(), 0),
            Err(BookError::ZeroEntries)
        ));
    }

    /// Destination that accepts `limit` bytes and then reports a full disk
    struct FullAfter {
        limit: usize,
        accepted: Vec<u8>,
    }

    impl Write for FullAfter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let room = self.limit - self.accepted.len();
            if room == 0 {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::StorageFull,
                    "No space left on device",
                ));
            }
            let n = room.min(buf.len());
            self.accepted.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_reports_destination_offset() {
        let source = sequential_source(1000);
        let mut full = FullAfter {
            limit: 1234,
            accepted: Vec::new(),
        };

        let err = convert_stream(&mut Cursor::new(&source), &mut full, 1000).unwrap_err();

        assert!(matches!(err, BookError::Write { offset: 1234, .. }));
        assert!(err.to_string().contains("destination byte offset 1234"));
        assert_eq!(full.accepted.len(), 1234);
    }

    #[test]
    fn test_restore_write_failure_reports_destination_offset() {
        let converted = convert_bytes(&sequential_source(1000), 1000).unwrap();
        let mut full = FullAfter {
            limit: 77,
            accepted: Vec::new(),
        };

        let err = restore_stream(&mut Cursor::new(&converted), &mut full, 1000).unwrap_err();

        assert!(matches!(err, BookError::Write { offset: 77, .. }));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use proptest::test_runner::TestCaseError;

        /// Generate an interleaved book with its entry count
        fn interleaved_book() -> impl Strategy<Value = (Vec<u8>, usize)> {
            (1usize..=200).prop_flat_map(|entries| {
                (
                    prop::collection::vec(any::<u8>(), entries * RECORD_SIZE),
                    Just(entries),
                )
            })
        }

        proptest! {
            /// Restoring a converted book yields the input bytes
            #[test]
            fn convert_then_restore_is_identity((source, entries) in interleaved_book()) {
                let converted = convert_bytes(&source, entries).map_err(|e| TestCaseError::fail(e.to_string()))?;
                let restored = restore_bytes(&converted, entries).map_err(|e| TestCaseError::fail(e.to_string()))?;

                prop_assert_eq!(converted.len(), source.len());
                prop_assert_eq!(restored, source);
            }

            /// Streaming and in-memory conversion agree
            #[test]
            fn stream_agrees_with_bytes((source, entries) in interleaved_book()) {
                let mut streamed: Vec<u8> = Vec::new();
                convert_stream(&mut Cursor::new(&source), &mut streamed, entries).map_err(|e| TestCaseError::fail(e.to_string()))?;

                let mut restored: Vec<u8> = Vec::new();
                restore_stream(&mut Cursor::new(&streamed), &mut restored, entries).map_err(|e| TestCaseError::fail(e.to_string()))?;

                prop_assert_eq!(&streamed, &convert_bytes(&source, entries).map_err(|e| TestCaseError::fail(e.to_string()))?);
                prop_assert_eq!(restored, source);
            }

            /// Any source of the wrong length is rejected
            #[test]
            fn wrong_length_rejected(entries in 1usize..=50, delta in 1usize..5, shorter in any::<bool>()) {
                let len = if shorter { entries * RECORD_SIZE - delta } else { entries * RECORD_SIZE + delta };
                let source = vec![0u8; len];

                let err = convert_bytes(&source, entries).map_err(|e| e.is_format_error());
                prop_assert_eq!(err, Err(true));
            }
        }
    }
}
