// Keyword-based tone classifier

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const ANXIOUS_TRIGGERS: &[&str] = &["anxious", "anxiety", "worried", "nervous"];
const DOWN_TRIGGERS: &[&str] = &["sad", "down", "low", "depressed", "upset"];
const FRUSTRATED_TRIGGERS: &[&str] = &["angry", "frustrated", "irritated"];

/// Coarse emotional category, used only to pick the validation phrase of a
/// supportive reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Anxious,
    Down,
    Frustrated,
    Overwhelmed,
}

impl Tone {
    /// Label interpolated into the validation segment
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Anxious => "anxious",
            Tone::Down => "down",
            Tone::Frustrated => "frustrated",
            Tone::Overwhelmed => "overwhelmed",
        }
    }
}

/// Trigger phrases per tone. Overwhelmed has no triggers: it is the fallback
/// when nothing matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneLexicon {
    pub anxious: Vec<String>,
    pub down: Vec<String>,
    pub frustrated: Vec<String>,
}

impl Default for ToneLexicon {
    fn default() -> Self {
        fn owned(phrases: &[&str]) -> Vec<String> {
            phrases.iter().map(|s| s.to_string()).collect()
        }

        Self {
            anxious: owned(ANXIOUS_TRIGGERS),
            down: owned(DOWN_TRIGGERS),
            frustrated: owned(FRUSTRATED_TRIGGERS),
        }
    }
}

impl ToneLexicon {
    /// Load a tone lexicon from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read tone lexicon file: {}", path.display()))?;

        let mut lexicon: ToneLexicon =
            serde_json::from_str(&contents).context("Failed to parse tone lexicon JSON")?;
        lexicon.normalize();

        Ok(lexicon)
    }

    fn normalize(&mut self) {
        for set in [&mut self.anxious, &mut self.down, &mut self.frustrated] {
            for phrase in set.iter_mut() {
                *phrase = phrase.to_lowercase();
            }
        }
    }

    /// Classify a message into a tone.
    ///
    /// Trigger sets are tested in fixed priority order: Anxious, then Down,
    /// then Frustrated. The first set with a substring hit wins, so a message
    /// matching both an anxiety and a sadness trigger classifies as Anxious.
    pub fn classify(&self, message: &str) -> Tone {
        let lowered = message.to_lowercase();

        if Self::any_match(&lowered, &self.anxious) {
            return Tone::Anxious;
        }
        if Self::any_match(&lowered, &self.down) {
            return Tone::Down;
        }
        if Self::any_match(&lowered, &self.frustrated) {
            return Tone::Frustrated;
        }

        Tone::Overwhelmed
    }

    fn any_match(lowered: &str, phrases: &[String]) -> bool {
        phrases.iter().any(|phrase| lowered.contains(phrase.as_str()))
    }
}
