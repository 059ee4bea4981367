//! Preroll Generation Client
//!
//! Talks to the generation service that turns a creative brief into a
//! production document reply.
//!
//! # Flow
//!
//! 1. [`GenerationParams`] and a brief are composed into the prompt text and
//!    checked against the configured length limit
//! 2. `{prompt, params}` is posted to `{api_base}/generate`
//! 3. The `{output}` / `{detail}` [`Envelope`] becomes the raw reply or a
//!    [`ClientError`]
//!
//! The reply itself is handed to `preroll-parse` unchanged.

#![warn(unreachable_pub)]

// Core modules
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod params;
pub mod prompt;

// Re-exports for convenience
pub use client::{GenerationClient, GenerationRequest, Generator, HttpGenerationClient};
pub use config::ClientConfig;
pub use envelope::Envelope;
pub use error::{ClientError, Result};
pub use params::{GenerationParams, GenerationType, UnknownGenerationType};
pub use prompt::{compose_prompt, summarize_prompt};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
