use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use assetseed_core::Document;

use crate::errors::GenerationError;

/// `asset-NNN.json` for a 1-based index.
pub fn document_file_name(index: usize) -> String {
    format!("asset-{index:03}.json")
}

/// Index encoded in an `asset-NNN.json` name; `None` for any other file.
pub fn document_file_index(file_name: &str) -> Option<usize> {
    let digits = file_name.strip_prefix("asset-")?.strip_suffix(".json")?;
    if digits.len() < 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Write a document as pretty-printed JSON (two-space indent), returning bytes written.
pub fn write_document_json(path: &Path, document: &Document) -> Result<u64, GenerationError> {
    let writer = BufWriter::new(File::create(path)?);
    let mut counting = CountingWriter::new(writer);
    serde_json::to_writer_pretty(&mut counting, document)?;
    counting.flush()?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
