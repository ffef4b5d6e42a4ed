//! Payload normalization
//!
//! The leaderboard endpoint has shipped several row shapes. Every field is
//! read from a list of candidate locations; the first non-null candidate of
//! a usable type wins.
//!
//! ```text
//! data: [ row, ... ]
//! data: { leaderboard: [ row, ... ], currentUser: { ... } }
//!
//! row:  { user: { userId, userProfile: { username, avatarUrl } },
//!         totalPoints, profileUrl }
//!   or  { username | name, xp | points, avatarUrl, userId }
//! ```

use serde::Serialize;
use serde_json::Value;

/// Ranks above this are off the first screen and get the sticky banner
pub const BANNER_RANK_THRESHOLD: u64 = 10;

/// One ranked row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub name: String,
    pub xp: u64,
    pub avatar_url: Option<String>,
    pub user_id: Option<String>,
    /// Position in the server's order, starting at 1
    pub rank: usize,
}

impl LeaderboardEntry {
    pub fn podium(&self) -> Option<Podium> {
        Podium::for_rank(self.rank)
    }
}

/// The viewer's own standing, sent next to the rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserInfo {
    pub name: String,
    pub xp: u64,
    pub avatar_url: Option<String>,
    pub user_id: Option<String>,
    pub rank: u64,
}

impl CurrentUserInfo {
    pub fn shows_rank_banner(&self) -> bool {
        self.rank > BANNER_RANK_THRESHOLD
    }
}

/// Styling tier for the top three rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Podium {
    Gold,
    Silver,
    Bronze,
}

impl Podium {
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Podium::Gold),
            2 => Some(Podium::Silver),
            3 => Some(Podium::Bronze),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Podium::Gold => "gold",
            Podium::Silver => "silver",
            Podium::Bronze => "bronze",
        }
    }
}

/// Normalized result of one fetch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
    pub current_user: Option<CurrentUserInfo>,
}

impl Leaderboard {
    /// Whether `entry` is the viewer. Both ids must be present.
    pub fn is_current_user(&self, entry: &LeaderboardEntry) -> bool {
        is_current_user(entry, self.current_user.as_ref())
    }

    pub fn shows_rank_banner(&self) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(CurrentUserInfo::shows_rank_banner)
    }
}

pub fn is_current_user(entry: &LeaderboardEntry, current: Option<&CurrentUserInfo>) -> bool {
    match (entry.user_id.as_deref(), current.and_then(|c| c.user_id.as_deref())) {
        (Some(row), Some(me)) => row == me,
        _ => false,
    }
}

/// Normalize the envelope's `data` value. Pure: same input, same output.
pub fn normalize(data: &Value) -> Leaderboard {
    let rows: &[Value] = match data {
        Value::Array(rows) => rows,
        Value::Object(_) => data
            .get("leaderboard")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default(),
        _ => &[],
    };

    let entries = rows
        .iter()
        .enumerate()
        .map(|(index, row)| normalize_row(index, row))
        .collect();

    let current_user = data
        .get("currentUser")
        .filter(|cu| cu.is_object())
        .map(normalize_current_user);

    Leaderboard {
        entries,
        current_user,
    }
}

fn normalize_row(index: usize, row: &Value) -> LeaderboardEntry {
    let profile = lookup(row, &["user", "userProfile"]);

    LeaderboardEntry {
        name: first_string(&[
            profile.and_then(|p| p.get("username")),
            row.get("username"),
            row.get("name"),
        ])
        .unwrap_or_else(|| format!("Player {}", index + 1)),
        xp: first_number(&[row.get("totalPoints"), row.get("xp"), row.get("points")]),
        avatar_url: first_string(&[
            row.get("profileUrl"),
            profile.and_then(|p| p.get("avatarUrl")),
            row.get("avatarUrl"),
        ]),
        user_id: first_id(&[lookup(row, &["user", "userId"]), row.get("userId")]),
        rank: index + 1,
    }
}

fn normalize_current_user(cu: &Value) -> CurrentUserInfo {
    CurrentUserInfo {
        name: first_string(&[cu.get("username"), cu.get("name")])
            .unwrap_or_else(|| "You".to_string()),
        xp: first_number(&[cu.get("totalPoints"), cu.get("xp")]),
        avatar_url: first_string(&[cu.get("avatarUrl")]),
        user_id: first_id(&[cu.get("userId")]),
        rank: first_number(&[cu.get("rank")]),
    }
}

fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(key))
}

fn present<'a, 'b>(candidates: &'b [Option<&'a Value>]) -> impl Iterator<Item = &'a Value> + 'b {
    candidates.iter().flatten().copied().filter(|v| !v.is_null())
}

fn first_string(candidates: &[Option<&Value>]) -> Option<String> {
    present(candidates).find_map(|v| v.as_str().map(str::to_string))
}

fn first_id(candidates: &[Option<&Value>]) -> Option<String> {
    present(candidates).find_map(|v| match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// The first non-null candidate decides, even when it does not coerce
fn first_number(candidates: &[Option<&Value>]) -> u64 {
    present(candidates).next().map(coerce_count).unwrap_or(0)
}

fn coerce_count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u
            } else if n.is_i64() {
                0
            } else {
                n.as_f64().map(clamp_float).unwrap_or(0)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(clamp_float))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn clamp_float(f: f64) -> u64 {
    if f.is_finite() && f > 0.0 {
        f.trunc() as u64
    } else {
        0
    }
}
