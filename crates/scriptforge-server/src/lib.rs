//! # scriptforge-server - HTTP Surface
//!
//! The site server: `GET /health`, `POST /api/chat`, and static assets from
//! the public directory. Also bakes the site's HTML pages from the static
//! catalog so the served pages carry their rendered lists.
//!
//! Depends on [`scriptforge_core`] for domain types and
//! [`scriptforge_ai`] for the chat relay.
//!
//! ## Public API
//!
//! ### Configuration (`config`)
//! - [`ServerConfig`] - Port, public directory, and credential from the environment
//!
//! ### Routing (`routes`)
//! - [`serve()`] - Bind and run the server until shutdown
//! - [`routes::build_router()`] - Router construction (used directly by tests)
//! - [`AppState`] - Shared request state (the optional relay)
//!
//! ### Pages (`pages`)
//! - [`pages::bake_pages()`] - Write the rendered site pages into the public directory

pub mod config;
pub mod pages;
pub mod routes;

// Public API re-exports
pub use config::{ServerConfig, DEFAULT_PORT, DEFAULT_PUBLIC_DIR};
pub use routes::{serve, AppState, NOT_CONFIGURED_MESSAGE, REQUEST_FAILED_MESSAGE};
