// Transcript module
// Public interface for the append-only interaction store

mod logger;
mod types;

pub use logger::TranscriptLogger;
pub use types::InteractionRecord;
