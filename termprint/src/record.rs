//! Records handed over to an external record store.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_derive::{Deserialize, Serialize};
use termprint_core::ParsedConsole;

use crate::error::Result;

/// A parsed transcript with its note and timestamps, in the JSON shape the
/// record store expects. Persisting it is up to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleRecord {
    pub id: String,
    pub prompt: String,
    pub command: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Milliseconds since the Unix epoch of the last edit
    pub timestamp: u64,
    /// Milliseconds since the Unix epoch of the creation
    pub created_at: u64,
}

impl ConsoleRecord {
    /// Build a new record from a split transcript.
    ///
    /// # Errors
    ///
    /// Will return `Err` when the system clock is before the Unix epoch
    pub fn new(parsed: ParsedConsole, note: Option<String>) -> Result<Self> {
        let now = u64::try_from(SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis())
            .unwrap_or(u64::MAX);
        Ok(Self::with_id(
            uuid::Uuid::new_v4().to_string(),
            parsed,
            note,
            now,
        ))
    }

    #[must_use]
    pub fn with_id(id: String, parsed: ParsedConsole, note: Option<String>, now: u64) -> Self {
        Self {
            id,
            prompt: parsed.prompt,
            command: parsed.command,
            output: parsed.output,
            note: note.filter(|n| !n.trim().is_empty()),
            timestamp: now,
            created_at: now,
        }
    }
}
