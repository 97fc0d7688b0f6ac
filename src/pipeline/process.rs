// Message processing pipeline
//
// Orchestrates crisis detection, tone classification, and reply composition.
// Pure and total: the only state is the two keyword tables, fixed at
// construction, so a shared instance can serve any number of concurrent
// requests without coordination.

use crate::crisis::CrisisDetector;
use crate::response;
use crate::tone::ToneLexicon;

/// Outcome of processing one message.
///
/// Invariant: `is_crisis == true` means `text` is exactly the fixed crisis
/// message; `is_crisis == false` means `text` follows the supportive template.
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub is_crisis: bool,
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    detector: CrisisDetector,
    lexicon: ToneLexicon,
}

impl Pipeline {
    pub fn new(detector: CrisisDetector, lexicon: ToneLexicon) -> Self {
        Self { detector, lexicon }
    }

    /// Process one message into a reply.
    ///
    /// The crisis path short-circuits: no tone classification runs there, the
    /// reply is the fixed safety message. Callers pass an already-trimmed,
    /// validated message; this function accepts any string including empty.
    pub fn process(&self, message: &str) -> Reply {
        if self.detector.detect(message) {
            return Reply {
                text: response::crisis_reply().to_string(),
                is_crisis: true,
            };
        }

        let tone = self.lexicon.classify(message);

        Reply {
            text: response::supportive_reply(tone),
            is_crisis: false,
        }
    }

    /// Get the crisis detector (for display purposes)
    pub fn detector(&self) -> &CrisisDetector {
        &self.detector
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(CrisisDetector::default(), ToneLexicon::default())
    }
}
