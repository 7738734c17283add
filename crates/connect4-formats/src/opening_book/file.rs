//! File-to-file book conversion with atomic replacement

use crate::opening_book::convert::{convert_stream, restore_stream};
use crate::opening_book::error::{BookError, Result};
use crate::opening_book::layout::{BookLayout, check_len};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Convert the interleaved big-endian book at `source` into a bucketed book at `destination`
///
/// The source length is validated before anything is written. Output goes to
/// a temporary file beside `destination` which is renamed over it only once
/// every byte has been flushed; on failure the temporary file is removed and
/// `destination` is left as it was.
pub fn convert_file(source: &Path, destination: &Path, entries: usize) -> Result<()> {
    transform_file(source, destination, entries, BookLayout::Interleaved)
}

/// Convert the bucketed little-endian book at `source` back into an interleaved book
pub fn restore_file(source: &Path, destination: &Path, entries: usize) -> Result<()> {
    transform_file(source, destination, entries, BookLayout::Bucketed)
}

fn transform_file(
    source: &Path,
    destination: &Path,
    entries: usize,
    from: BookLayout,
) -> Result<()> {
    let mut input = File::open(source).map_err(|e| BookError::io(source, e))?;
    let metadata = input.metadata().map_err(|e| BookError::io(source, e))?;
    if !metadata.is_file() {
        return Err(BookError::io(
            source,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }
    let actual = metadata.len();
    check_len(actual, entries)?;

    debug!(
        source = %source.display(),
        destination = %destination.display(),
        entries,
        "converting {} book to {}",
        from,
        from.counterpart()
    );

    let temp_path = temp_path_for(destination);
    let result = write_temp(&temp_path, |output| {
        match from {
            BookLayout::Interleaved => convert_stream(&mut input, output, entries),
            BookLayout::Bucketed => restore_stream(&mut input, output, entries),
        }
        .map_err(|e| match e {
            BookError::Read { .. } => e.in_file(source),
            BookError::Write { .. } => e.in_file(destination),
            other => other,
        })
    })
    .and_then(|()| fs::rename(&temp_path, destination).map_err(|e| BookError::io(destination, e)));

    if let Err(e) = result {
        if let Err(cleanup) = fs::remove_file(&temp_path) {
            if cleanup.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %temp_path.display(), "failed to remove temporary file: {cleanup}");
            }
        }
        return Err(e);
    }

    info!(
        destination = %destination.display(),
        entries,
        bytes = actual,
        "wrote {} book",
        from.counterpart()
    );

    Ok(())
}

/// Create `path`, hand it to `fill`, then sync it
///
/// `fill` is expected to buffer and flush its own writes.
fn write_temp(path: &Path, fill: impl FnOnce(&mut File) -> Result<()>) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| BookError::io(path, e))?;

    fill(&mut file)?;

    file.sync_all().map_err(|e| BookError::io(path, e))
}

/// Hidden sibling of `destination` used while writing
fn temp_path_for(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map_or_else(|| "book".into(), |n| n.to_string_lossy().into_owned());

    destination.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}
