//! Summary provider storage.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers / SummaryFeed                            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (crate::services)                        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────┐   ┌─────────────────┐
//!     │  LocalRepository (in-memory) │◄──│  DatasetLoader  │
//!     └──────────────────────────────┘   └─────────────────┘
//! ```

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod checksum;
pub mod loader;
pub mod models;
pub mod repositories;
pub mod repository;

pub use checksum::calculate_checksum;
pub use loader::{DatasetLoader, FileReport, LoadError, LoadReport};
pub use repositories::LocalRepository;
pub use repository::{
    ErrorContext, FullRepository, RepositoryError, RepositoryResult, RosterRepository,
    SummaryRepository,
};
