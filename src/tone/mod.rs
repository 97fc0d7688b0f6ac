// Tone module
// Public interface for tone classification

mod classifier;

pub use classifier::{Tone, ToneLexicon};
