//! Preroll command-line front end
//!
//! ```text
//! preroll parse reply.txt            formatted document
//! preroll section reply.txt --id ID  one section
//! preroll budget reply.txt --tier low
//! preroll scenes | characters reply.txt
//! preroll export reply.txt --out DIR
//! preroll prompt | generate --prompt TEXT [--type ...]
//! ```
//!
//! Replies are read from a file or stdin; saved `{"output": ...}`
//! envelopes are unwrapped first.

#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod export;
pub mod input;
pub mod logging;

pub use cli::command;
pub use commands::execute;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
