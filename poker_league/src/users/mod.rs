//! Player profiles and statistics.
//!
//! Profiles are created lazily on first contact (a registration or a
//! profile fetch) and never deleted. Statistics and the rating are
//! only ever changed by the results processor.

pub mod directory;
pub mod errors;
pub mod models;

pub use directory::{ProfileUpdate, UserDirectory};
pub use errors::{DirectoryError, DirectoryResult};
pub use models::{HistoryEntry, INITIAL_RATING, User, UserId, UserStats};
