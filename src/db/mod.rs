//! Document storage for the students collection.
//!
//! The module follows the Repository pattern: HTTP handlers talk to the
//! [`StudentRepository`] trait and a factory picks the concrete backend at
//! startup.
//!
//! - `repository`: trait definition for collection operations
//! - `repositories::mongo`: MongoDB implementation (`mongo-repo` feature)
//! - `repositories::local`: in-memory implementation for tests and local
//!   development (`local-repo` feature)
//! - `factory`: backend selection from the environment or a config file
//! - `repo_config`: TOML configuration file support

#[cfg(not(any(feature = "mongo-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod error;
pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;

pub use error::{RepositoryError, RepositoryResult};
pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
#[cfg(feature = "mongo-repo")]
pub use repositories::{MongoConfig, MongoRepository};
pub use repository::StudentRepository;
