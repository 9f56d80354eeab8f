pub mod court;
pub mod macros;
pub mod summary;

pub use court::*;
pub use macros::{GameId, PlayerId, TeamId};
pub use summary::*;
