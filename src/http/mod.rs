//! HTTP server module.
//!
//! Exposes the students collection as a REST API over axum. Handlers parse
//! and validate request bodies, delegate to the repository layer, and map
//! outcomes onto the JSON success and error envelopes.

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod dto;

#[cfg(feature = "http-server")]
pub use router::create_router;

#[cfg(feature = "http-server")]
pub use state::AppState;
