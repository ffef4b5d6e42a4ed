//! Route Table
//!
//! Typed routes for every page of the client, plus the [`Navigation`] value
//! that flows return instead of driving a router themselves.

use std::fmt;

/// A page of the application
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/` (renders the login page)
    Home,
    Login,
    Register,
    Dashboard,
    /// `/lessons` - level overview
    Lessons,
    /// `/lessons/map`
    LessonMap,
    /// `/lessons/:levelId` - sublessons of one level
    Level { level_id: String },
    /// `/lessons/:levelId/materials/:materialId`
    Material { level_id: String, material_id: String },
    /// `/lessons/:levelId/exercises`
    Exercises { level_id: String },
    Leaderboard,
    Conversation,
    Profile,
    /// `/oauth2/success` - target of the server-side OAuth redirect
    OAuthSuccess,
    /// Anything else; keeps the requested path for display
    NotFound(String),
}

impl Route {
    /// Parse a browser path (query string and fragment are ignored)
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["dashboard"] => Route::Dashboard,
            ["lessons"] => Route::Lessons,
            ["lessons", "map"] => Route::LessonMap,
            ["lessons", level] => Route::Level {
                level_id: decode_segment(level),
            },
            ["lessons", level, "materials", material] => Route::Material {
                level_id: decode_segment(level),
                material_id: decode_segment(material),
            },
            ["lessons", level, "exercises"] => Route::Exercises {
                level_id: decode_segment(level),
            },
            ["leaderboard"] => Route::Leaderboard,
            ["conversation"] => Route::Conversation,
            ["profile"] => Route::Profile,
            ["oauth2", "success"] => Route::OAuthSuccess,
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Lessons => "/lessons".to_string(),
            Route::LessonMap => "/lessons/map".to_string(),
            Route::Level { level_id } => format!("/lessons/{}", urlencoding::encode(level_id)),
            Route::Material {
                level_id,
                material_id,
            } => format!(
                "/lessons/{}/materials/{}",
                urlencoding::encode(level_id),
                urlencoding::encode(material_id)
            ),
            Route::Exercises { level_id } => {
                format!("/lessons/{}/exercises", urlencoding::encode(level_id))
            }
            Route::Leaderboard => "/leaderboard".to_string(),
            Route::Conversation => "/conversation".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::OAuthSuccess => "/oauth2/success".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Whether the page is only reachable with a stored session token
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::Lessons
                | Route::LessonMap
                | Route::Level { .. }
                | Route::Material { .. }
                | Route::Exercises { .. }
                | Route::Leaderboard
                | Route::Conversation
                | Route::Profile
        )
    }

    /// Redirect to the login page when an authenticated view is opened
    /// without a session. Returns `None` when the route may render.
    pub fn gate(&self, has_session: bool) -> Option<Navigation> {
        if self.requires_session() && !has_session {
            Some(Navigation::to(Route::Login))
        } else {
            None
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

/// A navigation side effect, returned by flows as a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub query: Vec<(String, String)>,
}

impl Navigation {
    /// Navigate to a route without query parameters
    pub fn to(route: Route) -> Self {
        Self {
            route,
            query: Vec::new(),
        }
    }

    /// Append a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// First value for a query key
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Path plus encoded query string, ready for the router
    pub fn href(&self) -> String {
        let mut href = self.route.path();
        if !self.query.is_empty() {
            let pairs: Vec<String> = self
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect();
            href.push('?');
            href.push_str(&pairs.join("&"));
        }
        href
    }

    /// Parse an href produced by [`Navigation::href`] (or typed by a user)
    pub fn parse(href: &str) -> Self {
        let (path, query) = href.split_once('?').unwrap_or((href, ""));
        Self {
            route: Route::parse(path),
            query: parse_query(query),
        }
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Split a query string (with or without the leading `?`) into pairs
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_segment(k), decode_segment(&v.replace('+', " ")))
        })
        .collect()
}
