//! Leaderboard view state

use serde::Serialize;

use super::normalize::{is_current_user, CurrentUserInfo, Leaderboard, LeaderboardEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardAction {
    Started,
    Loaded(Leaderboard),
    Failed(String),
    /// The view went away mid-request
    Cancelled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardState {
    pub entries: Vec<LeaderboardEntry>,
    pub current_user: Option<CurrentUserInfo>,
    pub loading: bool,
    pub error: Option<String>,
}

impl LeaderboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(mut self, action: LeaderboardAction) -> Self {
        match action {
            LeaderboardAction::Started => {
                self.loading = true;
                self.error = None;
            }
            LeaderboardAction::Loaded(board) => {
                self.loading = false;
                // An empty fetch keeps whatever rows were already shown
                if !board.entries.is_empty() {
                    self.entries = board.entries;
                }
                if board.current_user.is_some() {
                    self.current_user = board.current_user;
                }
            }
            LeaderboardAction::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            LeaderboardAction::Cancelled => {}
        }
        self
    }

    /// "No data yet" placeholder
    pub fn is_empty_view(&self) -> bool {
        !self.loading && self.error.is_none() && self.entries.is_empty()
    }

    pub fn is_current_user(&self, entry: &LeaderboardEntry) -> bool {
        is_current_user(entry, self.current_user.as_ref())
    }

    pub fn shows_rank_banner(&self) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(CurrentUserInfo::shows_rank_banner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::normalize;
    use serde_json::json;

    fn loaded(data: serde_json::Value) -> LeaderboardAction {
        LeaderboardAction::Loaded(normalize(&data))
    }

    #[test]
    fn test_load_cycle() {
        let state = LeaderboardState::new().reduce(LeaderboardAction::Started);
        assert!(state.loading);
        assert!(!state.is_empty_view());

        let state = state.reduce(loaded(json!([{"name": "a", "xp": 3}])));
        assert!(!state.loading);
        assert_eq!(state.entries.len(), 1);
        assert!(!state.is_empty_view());
    }

    #[test]
    fn test_empty_result_keeps_entries() {
        let state = LeaderboardState::new()
            .reduce(loaded(json!([{"name": "a"}, {"name": "b"}])))
            .reduce(LeaderboardAction::Started)
            .reduce(loaded(json!([])));
        assert_eq!(state.entries.len(), 2);
        assert!(!state.loading);
    }

    #[test]
    fn test_error_keeps_entries() {
        let state = LeaderboardState::new()
            .reduce(loaded(json!([{"name": "a"}])))
            .reduce(LeaderboardAction::Started)
            .reduce(LeaderboardAction::Failed("HTTP 500".into()));
        assert_eq!(state.error.as_deref(), Some("HTTP 500"));
        assert_eq!(state.entries.len(), 1);
        assert!(!state.is_empty_view());

        let state = state.reduce(LeaderboardAction::Started);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_cancel_is_noop() {
        let before = LeaderboardState::new().reduce(LeaderboardAction::Started);
        let after = before.clone().reduce(LeaderboardAction::Cancelled);
        assert_eq!(before, after);
    }

    #[test]
    fn test_empty_view() {
        assert!(LeaderboardState::new().is_empty_view());
        let state = LeaderboardState::new().reduce(LeaderboardAction::Failed("x".into()));
        assert!(!state.is_empty_view());
    }

    #[test]
    fn test_banner_and_highlight() {
        let state = LeaderboardState::new().reduce(loaded(json!({
            "leaderboard": [{"userId": "u1"}, {"userId": "u2"}],
            "currentUser": {"userId": "u2", "rank": 11}
        })));
        assert!(state.shows_rank_banner());
        assert!(!state.is_current_user(&state.entries[0]));
        assert!(state.is_current_user(&state.entries[1]));
    }
}
