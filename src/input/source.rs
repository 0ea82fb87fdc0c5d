//! Line source for gzipped JSONL feeds
//!
//! Decompresses a gzip stream (including concatenated members) and yields it
//! one `\n`-terminated line at a time without buffering the whole feed.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;

use flate2::read::MultiGzDecoder;

use crate::error::EstimatorError;

/// Read buffer for the decompressed stream
const READ_BUFFER_SIZE: usize = 256 * 1024;

/// Where the gzipped feed comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Lazy iterator over the lines of a gzipped text stream
///
/// Lines keep their trailing newline. Bytes that are not valid UTF-8 are
/// dropped from the line rather than replaced.
pub struct GzLines<R: Read> {
    reader: BufReader<MultiGzDecoder<R>>,
    buf: Vec<u8>,
}

impl<R: Read> GzLines<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: BufReader::with_capacity(READ_BUFFER_SIZE, MultiGzDecoder::new(inner)),
            buf: Vec::new(),
        }
    }
}

impl<R: Read> Iterator for GzLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => Some(Ok(decode_ignoring_invalid(&self.buf))),
            Err(e) => Some(Err(e)),
        }
    }
}

/// Decode UTF-8, silently skipping invalid byte sequences
pub fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.utf8_chunks().map(|chunk| chunk.valid()).collect(),
    }
}

/// Open the line source
///
/// A missing or unreadable file is an error here. A stream that is not gzip
/// surfaces as an error from the first line read.
pub fn open_lines(source: &InputSource) -> Result<GzLines<Box<dyn Read>>, EstimatorError> {
    let reader: Box<dyn Read> = match source {
        InputSource::Stdin => Box::new(io::stdin().lock()),
        InputSource::File(path) => {
            let file = File::open(path).map_err(|source| EstimatorError::OpenInput {
                path: path.clone(),
                source,
            })?;
            Box::new(file)
        }
    };

    log::debug!("Reading gzipped JSONL from {}", source);
    Ok(GzLines::new(reader))
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
