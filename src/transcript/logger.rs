// Append-only transcript store
//
// One JSON line per exchange, appended to transcript.jsonl under the
// configured directory. The service only writes; the file exists for
// operators to inspect.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::types::InteractionRecord;

pub struct TranscriptLogger {
    path: PathBuf,
}

impl TranscriptLogger {
    /// Create a logger rooted at `dir`, creating the directory if needed
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create transcript directory: {}", dir.display()))?;

        Ok(Self {
            path: dir.join("transcript.jsonl"),
        })
    }

    /// Append one exchange as a JSON line
    pub fn log(&self, record: &InteractionRecord) -> Result<()> {
        let line = serde_json::to_string(record).context("Failed to serialize interaction record")?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open transcript file: {}", self.path.display()))?;

        writeln!(file, "{}", line)
            .with_context(|| format!("Failed to append to {}", self.path.display()))?;

        Ok(())
    }

    /// Short SHA-256 digest of a message, for request logs that must not
    /// carry user text
    pub fn hash_message(message: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(message.as_bytes());
        let digest = format!("{:x}", hasher.finalize());
        digest[..16].to_string()
    }
}
