//! rstree: box-drawing tree rendering and word-frequency vectors
//!
//! Layers, innermost first:
//! - [`domain`]: tree model, rendering strategies, JSON decoding, word counting
//! - [`application`]: services orchestrating the domain over I/O traits
//! - [`infrastructure`]: filesystem and line sink implementations, DI container
//! - [`cli`]: clap front-end

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
