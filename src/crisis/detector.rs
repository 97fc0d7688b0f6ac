// Crisis keyword detector

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Built-in phrase list, used when no keywords file is configured.
const DEFAULT_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "self harm",
    "self-harm",
    "harm myself",
    "want to die",
    "die",
    "end it all",
];

/// The configured crisis phrases. Fixed after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisKeywords {
    pub phrases: Vec<String>,
}

impl Default for CrisisKeywords {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CrisisDetector {
    keywords: CrisisKeywords,
}

impl CrisisDetector {
    /// Create a detector. Phrases are normalized to lowercase once here so
    /// detection only lowercases the message.
    pub fn new(mut keywords: CrisisKeywords) -> Self {
        for phrase in &mut keywords.phrases {
            *phrase = phrase.to_lowercase();
        }
        Self { keywords }
    }

    /// Load crisis keywords from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read crisis keywords file: {}", path.display()))?;

        let keywords: CrisisKeywords =
            serde_json::from_str(&contents).context("Failed to parse crisis keywords JSON")?;

        Ok(Self::new(keywords))
    }

    /// Detect whether a message contains any crisis phrase.
    ///
    /// Matching is case-insensitive substring search with no word-boundary
    /// checks: a phrase embedded in a larger word still matches ("die" inside
    /// "diesel"). Total over all inputs; the empty string matches nothing.
    pub fn detect(&self, message: &str) -> bool {
        let lowered = message.to_lowercase();

        for phrase in &self.keywords.phrases {
            if lowered.contains(phrase.as_str()) {
                tracing::warn!("Crisis detected: phrase '{}'", phrase);
                return true;
            }
        }

        false
    }

    /// Get all configured phrases (for display purposes)
    pub fn phrases(&self) -> &[String] {
        &self.keywords.phrases
    }
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self::new(CrisisKeywords::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crisis_detection() {
        let detector = CrisisDetector::default();

        assert!(detector.detect("I'm thinking about suicide"));
        assert!(detector.detect("I want to kill myself"));
        assert!(!detector.detect("What is the meaning of life?"));
    }

    #[test]
    fn test_case_insensitive() {
        let detector = CrisisDetector::default();

        assert!(detector.detect("SUICIDE"));
        assert!(detector.detect("SuIcIdE"));
        assert!(detector.detect("I Want To Die"));
    }

    #[test]
    fn test_no_word_boundaries() {
        let detector = CrisisDetector::default();

        // "die" matches inside a larger word
        assert!(detector.detect("my diesel engine broke"));
    }

    #[test]
    fn test_empty_message() {
        let detector = CrisisDetector::default();

        assert!(!detector.detect(""));
    }

    #[test]
    fn test_custom_keywords_normalized() {
        let detector = CrisisDetector::new(CrisisKeywords {
            phrases: vec!["Hurt Myself".to_string()],
        });

        assert!(detector.detect("i might hurt myself"));
        assert_eq!(detector.phrases(), &["hurt myself".to_string()]);
    }
}
