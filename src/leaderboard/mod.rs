//! Leaderboard
//!
//! Fetch, normalization and view state for the ranked XP table.
//!
//! Normalization is a pure function over the envelope's `data`, so the
//! browser and the CLI render identical rows from identical payloads.

mod fetch;
mod normalize;
mod state;

pub use fetch::{
    cancellable, load, load_cancellable, LoadError, LoadHandle, FETCH_FAILED_MESSAGE,
    NETWORK_ERROR_MESSAGE,
};
pub use normalize::{
    is_current_user, normalize, CurrentUserInfo, Leaderboard, LeaderboardEntry, Podium,
    BANNER_RANK_THRESHOLD,
};
pub use state::{LeaderboardAction, LeaderboardState};
