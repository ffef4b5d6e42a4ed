//! Levels, the lesson map, sublessons and reading materials

use serde::Serialize;

use crate::routes::Route;

/// A course level on the `/lessons` page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub locked: bool,
    /// Percent complete; only tracked for unlocked levels
    pub progress: Option<u8>,
    pub lock_message: Option<&'static str>,
}

impl Level {
    pub fn button_text(&self) -> &'static str {
        if self.locked {
            "Locked"
        } else {
            "Start Learn"
        }
    }

    /// Where "Start Learn" goes; locked levels go nowhere
    pub fn start_route(&self) -> Option<Route> {
        (!self.locked).then_some(Route::LessonMap)
    }
}

pub fn levels() -> Vec<Level> {
    vec![
        Level {
            id: 1,
            title: "Level 1: Beginner",
            description: "Start your journey! Basic words & phrases.",
            locked: false,
            progress: Some(45),
            lock_message: None,
        },
        Level {
            id: 2,
            title: "Level 2: Intermediate",
            description: "Conversational skills. Speak with confidence.",
            locked: true,
            progress: None,
            lock_message: Some("Unlock by completing Level 2"),
        },
        Level {
            id: 3,
            title: "Level 3: Advanced",
            description: "Mastery & fluency. Complex topics.",
            locked: true,
            progress: None,
            lock_message: Some("Unlock by completing Level 3"),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LessonStatus {
    Completed,
    InProgress,
    Locked,
}

impl LessonStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonStatus::Completed => "completed",
            LessonStatus::InProgress => "in-progress",
            LessonStatus::Locked => "locked",
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, LessonStatus::Locked)
    }
}

/// A node on the learning map
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapLesson {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub status: LessonStatus,
}

impl MapLesson {
    /// Opening a node; locked nodes are disabled
    pub fn route(&self, level_id: &str) -> Option<Route> {
        (!self.status.is_locked()).then(|| Route::Level {
            level_id: level_id.to_string(),
        })
    }
}

pub fn learning_map() -> Vec<MapLesson> {
    vec![
        MapLesson {
            id: 1,
            title: "Lesson 1",
            description: "Introduction",
            status: LessonStatus::Completed,
        },
        MapLesson {
            id: 2,
            title: "Lesson 2",
            description: "Basic Phrases",
            status: LessonStatus::InProgress,
        },
        MapLesson {
            id: 3,
            title: "Lesson 3",
            description: "Conversations",
            status: LessonStatus::Locked,
        },
        MapLesson {
            id: 4,
            title: "Lesson 4",
            description: "Advanced",
            status: LessonStatus::Locked,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SublessonKind {
    Material,
    Exercise,
}

/// An entry on a level's sublesson list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sublesson {
    pub id: u32,
    pub title: &'static str,
    pub kind: SublessonKind,
}

impl Sublesson {
    /// Target of the "Start" button
    pub fn route(&self, level_id: &str) -> Route {
        match self.kind {
            SublessonKind::Material => Route::Material {
                level_id: level_id.to_string(),
                material_id: self.id.to_string(),
            },
            SublessonKind::Exercise => Route::Exercises {
                level_id: level_id.to_string(),
            },
        }
    }
}

pub fn sublessons() -> Vec<Sublesson> {
    vec![
        Sublesson {
            id: 1,
            title: "Judul materi",
            kind: SublessonKind::Material,
        },
        Sublesson {
            id: 2,
            title: "Judul Soal",
            kind: SublessonKind::Exercise,
        },
    ]
}

/// Reading material
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: u32,
    pub title: &'static str,
    pub content: &'static str,
    pub level_id: u32,
    pub order: u32,
}

const MATERIALS: &[Material] = &[
    Material {
        id: 1,
        title: "Pengenalan Bahasa",
        content: "Materi tentang pengenalan bahasa...",
        level_id: 1,
        order: 1,
    },
    Material {
        id: 2,
        title: "Tata Bahasa Dasar",
        content: "Materi tentang tata bahasa dasar...",
        level_id: 1,
        order: 2,
    },
];

/// Look a material up by the id from the URL
pub fn material(material_id: &str) -> Option<&'static Material> {
    let id: u32 = material_id.trim().parse().ok()?;
    MATERIALS.iter().find(|m| m.id == id)
}

pub fn materials_for_level(level_id: u32) -> Vec<&'static Material> {
    let mut found: Vec<_> = MATERIALS.iter().filter(|m| m.level_id == level_id).collect();
    found.sort_by_key(|m| m.order);
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_first_level_unlocked() {
        let levels = levels();
        assert_eq!(levels.len(), 3);
        assert_eq!(levels[0].start_route(), Some(Route::LessonMap));
        assert_eq!(levels[0].button_text(), "Start Learn");
        assert_eq!(levels[0].progress, Some(45));
        assert!(levels[1..].iter().all(|l| l.locked && l.start_route().is_none()));
    }

    #[test]
    fn test_map_statuses() {
        let map = learning_map();
        let statuses: Vec<&str> = map.iter().map(|l| l.status.as_str()).collect();
        assert_eq!(statuses, vec!["completed", "in-progress", "locked", "locked"]);
        assert!(map[2].route("1").is_none());
        assert_eq!(
            map[1].route("1"),
            Some(Route::Level {
                level_id: "1".into()
            })
        );
    }

    #[test]
    fn test_sublesson_routes() {
        let subs = sublessons();
        assert_eq!(subs[0].route("1").path(), "/lessons/1/materials/1");
        assert_eq!(subs[1].route("1").path(), "/lessons/1/exercises");
    }

    #[test]
    fn test_material_lookup() {
        assert_eq!(material("2").map(|m| m.title), Some("Tata Bahasa Dasar"));
        assert!(material("99").is_none());
        assert!(material("abc").is_none());

        let ids: Vec<u32> = materials_for_level(1).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(materials_for_level(2).is_empty());
    }
}
