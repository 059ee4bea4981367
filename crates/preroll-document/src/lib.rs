//! Preroll Document Model
//!
//! The canonical, renderable form of a generation reply.
//!
//! # Core Concepts
//!
//! - [`Section`]: titled, bulleted unit with a positional [`SectionId`]
//! - [`CanonicalResult`]: ordered sections plus the original reply
//! - [`Payload`]: generic section list or the nine-key [`LegacyFixedFields`]
//! - [`CharacterRole`], [`BudgetTierSlice`]: specialised records
//!
//! # Example
//!
//! ```rust
//! use preroll_document::{CanonicalResult, ParseRoute, Section};
//!
//! let doc = CanonicalResult::from_sections(
//!     vec![Section::new(0, "Scene Objective", vec!["Establish stakes".into()])],
//!     ParseRoute::JsonSections,
//!     "{...}",
//! );
//! assert!(doc.section("scene-objective-0").is_some());
//! ```

#![warn(unreachable_pub)]

// Core modules
mod budget;
mod character;
mod key;
mod legacy;
mod result;
mod section;

// Re-exports
pub use budget::{BudgetTier, BudgetTierSlice, UnknownTierError};
pub use character::CharacterRole;
pub use key::{SectionFlavor, SectionKey};
pub use legacy::{LegacyField, LegacyFixedFields};
pub use result::{CanonicalResult, ParseRoute, Payload};
pub use section::{slugify, Section, SectionId, PLACEHOLDER};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
