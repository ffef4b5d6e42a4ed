//! Dashboard summary and sidebar menu

use serde::Serialize;

use crate::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub display_name: &'static str,
    pub current_level: &'static str,
    pub level_progress: u8,
    pub streak_days: u32,
    pub global_rank: u32,
}

impl DashboardSummary {
    pub fn greeting(&self) -> String {
        format!("WELCOME BACK, {}!", self.display_name)
    }
}

/// Placeholder figures until the backend serves a profile
pub fn dashboard_summary() -> DashboardSummary {
    DashboardSummary {
        display_name: "Nicko",
        current_level: "Level 1: Beginner",
        level_progress: 45,
        streak_days: 200,
        global_rank: 5,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuId {
    Dashboard,
    Lessons,
    Leaderboard,
    Conversation,
    Profile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: MenuId,
    pub label: &'static str,
    pub path: &'static str,
}

impl MenuItem {
    /// Whether this entry should be highlighted for `route`
    pub fn is_active(&self, route: &Route) -> bool {
        active_menu(route) == Some(self.id)
    }
}

pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        id: MenuId::Dashboard,
        label: "Dashboard",
        path: "/dashboard",
    },
    MenuItem {
        id: MenuId::Lessons,
        label: "Lessons",
        path: "/lessons",
    },
    MenuItem {
        id: MenuId::Leaderboard,
        label: "Leaderboard",
        path: "/leaderboard",
    },
    MenuItem {
        id: MenuId::Conversation,
        label: "AI Conversation",
        path: "/conversation",
    },
    MenuItem {
        id: MenuId::Profile,
        label: "Profile",
        path: "/profile",
    },
];

/// Sidebar section a route belongs to
pub fn active_menu(route: &Route) -> Option<MenuId> {
    match route {
        Route::Dashboard => Some(MenuId::Dashboard),
        Route::Lessons
        | Route::LessonMap
        | Route::Level { .. }
        | Route::Material { .. }
        | Route::Exercises { .. } => Some(MenuId::Lessons),
        Route::Leaderboard => Some(MenuId::Leaderboard),
        Route::Conversation => Some(MenuId::Conversation),
        Route::Profile => Some(MenuId::Profile),
        _ => None,
    }
}
