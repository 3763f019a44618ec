//! Repository implementations.
//!
//! Concrete backends for the `StudentRepository` trait:
//! - `mongo`: MongoDB implementation
//! - `local`: in-memory implementation for unit testing and local development
#[cfg(feature = "local-repo")]
pub mod local;
#[cfg(feature = "mongo-repo")]
pub mod mongo;

#[cfg(feature = "local-repo")]
pub use local::LocalRepository;
#[cfg(feature = "mongo-repo")]
pub use mongo::{MongoConfig, MongoRepository};
