//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, LineSink)
//! but are themselves concrete structs, not traits.

mod tree;
mod words;

pub use tree::{TreeService, STDIN_MARKER};
pub use words::{OutputFormat, WordService};
