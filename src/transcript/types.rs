// Transcript data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored chat exchange. Rows are appended and never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub timestamp: DateTime<Utc>,
    /// User message, original casing preserved
    pub message: String,
    /// Reply returned to the user
    pub reply: String,
    pub is_crisis: bool,
}

impl InteractionRecord {
    pub fn new(message: String, reply: String, is_crisis: bool) -> Self {
        Self {
            timestamp: Utc::now(),
            message,
            reply,
            is_crisis,
        }
    }
}
