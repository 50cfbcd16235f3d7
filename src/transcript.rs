use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Reads the whole transcript. A file which doesn't exist is read as an
/// empty transcript.
///
/// spamdyke logs the raw SMTP dialogue, which isn't always UTF-8, so the
/// content is kept as bytes.
pub fn read_transcript(path: &Path) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => {
            debug!(path = %path.display(), bytes = bytes.len(), "read transcript");
            Ok(bytes)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "transcript not found, treating it as empty");
            Ok(Vec::new())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

/// Splits on `\n` only, so a `\r` before it stays with the line.
pub fn lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    content
        .split_inclusive(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\n").unwrap_or(line))
}
