// Pipeline module
// Public interface for message processing

mod process;

pub use process::{Pipeline, Reply};
