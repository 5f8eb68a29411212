//! Port trait definitions
//!
//! Infrastructure adapters implement these so the services never see HTTP details:
//! - CatalogRepository: product listing, counting and lookups
//! - ContentRepository: post listing, counting and lookups
//! - RepositoryProvider: per-call construction of the two repositories

pub mod catalog_repository;
pub mod content_repository;
pub mod repository_provider;

pub use catalog_repository::CatalogRepository;
pub use content_repository::ContentRepository;
pub use repository_provider::RepositoryProvider;
