//! Repository factory for dependency injection.
//!
//! Creates repository instances from runtime configuration and hands them
//! out as trait objects, so callers never name a concrete backend.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::error::{RepositoryError, RepositoryResult};
use super::repo_config::RepositoryConfig;
#[cfg(feature = "local-repo")]
use super::repositories::LocalRepository;
#[cfg(feature = "mongo-repo")]
use super::repositories::{MongoConfig, MongoRepository};
use super::repository::StudentRepository;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// MongoDB implementation
    Mongo,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("mongo", "mongodb", "local").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment.
    ///
    /// Reads the `STORE_BACKEND` environment variable. When unset, defaults
    /// to Mongo if `MONGODB_URI` is present, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("STORE_BACKEND") {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var("MONGODB_URI").is_ok() {
            Self::Mongo
        } else {
            Self::Local
        }
    }
}

/// Factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use students_api::db::RepositoryFactory;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let repo = RepositoryFactory::from_env().await?;
///     let students = repo.list_students().await?;
///     Ok(())
/// }
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository of the given type.
    ///
    /// The Mongo backend reads its connection settings from the environment;
    /// see [`MongoConfig::from_env`].
    pub async fn create(
        repo_type: RepositoryType,
    ) -> RepositoryResult<Arc<dyn StudentRepository>> {
        match repo_type {
            RepositoryType::Mongo => {
                #[cfg(feature = "mongo-repo")]
                {
                    let config = MongoConfig::from_env();
                    let repo = Self::create_mongo(&config).await?;
                    Ok(repo as Arc<dyn StudentRepository>)
                }
                #[cfg(not(feature = "mongo-repo"))]
                {
                    Err(RepositoryError::configuration(
                        "Mongo repository feature not enabled",
                    ))
                }
            }
            RepositoryType::Local => {
                #[cfg(feature = "local-repo")]
                {
                    Ok(Self::create_local())
                }
                #[cfg(not(feature = "local-repo"))]
                {
                    Err(RepositoryError::configuration(
                        "Local repository feature not enabled",
                    ))
                }
            }
        }
    }

    /// Create a MongoDB repository from explicit configuration.
    #[cfg(feature = "mongo-repo")]
    pub async fn create_mongo(config: &MongoConfig) -> RepositoryResult<Arc<MongoRepository>> {
        let repo = MongoRepository::connect(config).await?;
        Ok(Arc::new(repo))
    }

    /// Create an in-memory local repository.
    #[cfg(feature = "local-repo")]
    pub fn create_local() -> Arc<dyn StudentRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a repository from environment configuration.
    ///
    /// Backend selection follows [`RepositoryType::from_env`].
    pub async fn from_env() -> RepositoryResult<Arc<dyn StudentRepository>> {
        Self::create(RepositoryType::from_env()).await
    }

    /// Create a repository from a TOML configuration file.
    pub async fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn StudentRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config).await
    }

    async fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn StudentRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        match repo_type {
            RepositoryType::Mongo => {
                #[cfg(feature = "mongo-repo")]
                {
                    let mongo_config = config.to_mongo_config()?.ok_or_else(|| {
                        RepositoryError::configuration(
                            "Mongo repository requires a [mongo] section",
                        )
                    })?;
                    let repo = Self::create_mongo(&mongo_config).await?;
                    Ok(repo as Arc<dyn StudentRepository>)
                }
                #[cfg(not(feature = "mongo-repo"))]
                {
                    Err(RepositoryError::configuration(
                        "Mongo repository feature not enabled",
                    ))
                }
            }
            RepositoryType::Local => {
                #[cfg(feature = "local-repo")]
                {
                    Ok(Self::create_local())
                }
                #[cfg(not(feature = "local-repo"))]
                {
                    Err(RepositoryError::configuration(
                        "Local repository feature not enabled",
                    ))
                }
            }
        }
    }
}
