//! Message transcripts handed over by the messaging client as JSON.
//!
//! A transcript is a JSON array of message records in display order.

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::message::Message;

pub fn parse_transcript(path: &Path, content: &str) -> Result<Vec<Message>, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_transcript(path: &Path) -> Result<Vec<Message>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let messages = parse_transcript(path, &content)?;
    tracing::info!(path = %path.display(), count = messages.len(), "loaded transcript");
    Ok(messages)
}
