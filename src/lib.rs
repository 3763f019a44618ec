//! # Students API
//!
//! REST service over a single schemaless collection of student documents.
//!
//! Students are ordered JSON objects with a store-assigned `_id`; nothing
//! else about their shape is constrained. The HTTP layer exposes CRUD
//! operations plus a collection-wide merge, and the storage layer hides the
//! concrete backend behind a repository trait.
//!
//! ## Architecture
//!
//! - [`model`]: student identifier and record types
//! - [`db`]: repository trait, backends, and backend selection
//! - [`http`]: axum-based HTTP server and request handlers

pub mod db;
pub mod model;

#[cfg(feature = "http-server")]
pub mod http;
