//! Repository trait definitions for the summary provider.
//!
//! - [`error`]: Error types for repository operations
//! - [`summary`]: Summary lookups served to consumers
//! - [`roster`]: Inserts used when importing a dataset
//!
//! For code that needs both sides, use the [`FullRepository`] bound:
//!
//! ```ignore
//! async fn import_and_read<R: FullRepository>(repo: &R, id: PlayerId) -> RepositoryResult<()> {
//!     repo.store_player(PlayerRecord { id, name: "A".into() }).await?;
//!     let summary = repo.get_player_summary(id).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod roster;
pub mod summary;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

pub use roster::RosterRepository;
pub use summary::SummaryRepository;

/// Composite trait bound for a complete repository implementation.
pub trait FullRepository: SummaryRepository + RosterRepository {}

impl<T> FullRepository for T where T: SummaryRepository + RosterRepository {}
