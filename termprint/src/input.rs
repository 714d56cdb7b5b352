//! Read transcripts from a file or stdin.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use tracing::debug;

use crate::error::{Error, Result};

/// Read the whole transcript from `path`, or from stdin when `path` is `None` or `-`.
///
/// # Errors
///
/// Will return `Err` when the source could not be read or is not valid UTF-8
pub fn read_transcript(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => read_transcript_from(io::stdin().lock(), "stdin"),
        Some(path) => {
            let bytes = fs::read(Path::new(path))?;
            let content = decode(bytes, path)?;
            debug!(path, bytes = content.len(), "transcript read from file");
            Ok(content)
        }
    }
}

/// Read a whole transcript from `reader`. `source` names it in errors.
fn read_transcript_from(mut reader: impl Read, source: &str) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let content = decode(bytes, source)?;
    debug!(source, bytes = content.len(), "transcript read");
    Ok(content)
}

fn decode(bytes: Vec<u8>, source: &str) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| Error::Input(format!("{source} is not valid UTF-8: {e}")))
}
