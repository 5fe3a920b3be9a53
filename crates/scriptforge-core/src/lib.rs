//! # scriptforge-core - Core Domain Types
//!
//! Foundation crate for ScriptForge. Provides the snippet generator, the
//! configuration extractor, the static tutorial catalog, the page fragment
//! model with its presentation renderers, and error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Snippet Generation (`generator`)
//! - [`GenerationConfig`] - Options controlling code generation
//! - [`Dimension`], [`MovementKind`] - Generation option enums
//! - [`generator::render()`] - Pure config-to-snippet function
//!
//! ### Configuration Extraction (`form`)
//! - [`RawConfigInput`] - Raw option values as read from the configurator
//! - [`form::extract()`] - Normalize raw values into a [`GenerationConfig`]
//!
//! ### Catalog (`catalog`)
//! - [`TutorialCard`], [`CategoryCard`], [`PostRow`] - Read-only display records
//!
//! ### Pages (`page`, `render`, `reveal`)
//! - [`Element`] - In-memory element tree with HTML serialization
//! - [`render::render_featured()`] and friends - Idempotent list renderers
//! - [`RevealObserver`] - One-shot scroll-reveal state machine
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use scriptforge_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod form;
pub mod generator;
pub mod logging;
pub mod page;
pub mod render;
pub mod reveal;

/// Prelude for common imports used throughout all ScriptForge crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{CategoryCard, PostRow, TutorialCard, CSHARP_POSTS, FEATURED_TUTORIALS, UNITY_CATEGORIES};
pub use error::{Error, Result};
pub use form::RawConfigInput;
pub use generator::{Dimension, GenerationConfig, MovementKind, DEFAULT_CLASS_NAME};
pub use page::Element;
pub use reveal::{RevealObserver, REVEAL_CLASS, REVEAL_THRESHOLD, VISIBLE_CLASS};
