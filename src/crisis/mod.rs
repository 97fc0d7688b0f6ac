// Crisis module
// Public interface for the keyword safety layer

mod detector;

pub use detector::{CrisisDetector, CrisisKeywords};
