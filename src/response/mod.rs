// Response module
// Public interface for reply composition

mod composer;

pub use composer::{crisis_reply, supportive_reply};
