// Configuration structs

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bind address for the HTTP server
    pub bind_address: String,

    /// Directory for the transcript store
    pub transcript_dir: PathBuf,

    /// Optional path to a crisis keywords JSON file; built-in phrases
    /// are used when unset
    pub crisis_keywords_path: Option<PathBuf>,

    /// Optional path to a tone lexicon JSON file; built-in triggers
    /// are used when unset
    pub tone_lexicon_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));

        Self {
            bind_address: "127.0.0.1:8000".to_string(),
            transcript_dir: home.join(".solace/transcripts"),
            crisis_keywords_path: None,
            tone_lexicon_path: None,
        }
    }
}
