//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the repository. They are generic
//! over [`SummaryRepository`](crate::db::SummaryRepository), so they accept both
//! concrete repositories and `dyn FullRepository`.

pub mod shot_chart;
pub mod summary;
pub mod summary_feed;
pub mod validation;

pub use shot_chart::{build_shot_chart, get_shot_chart};
pub use summary::{
    fetch_player_summary, fetch_validated_summary, health_check, list_players, SummaryError,
};
pub use summary_feed::{SubscriptionId, SummaryEvent, SummaryFeed};
pub use validation::validate_summary;
