//! Static Content
//!
//! Mock data behind the presentation pages, plus the small reducers that
//! drive their local interactions. Nothing here talks to the network.

pub mod conversation;
pub mod dashboard;
pub mod exercises;
pub mod lessons;

pub use conversation::{ChatMessage, Conversation, ConversationAction, Speaker};
pub use dashboard::{active_menu, dashboard_summary, DashboardSummary, MenuId, MenuItem, MENU_ITEMS};
pub use exercises::{ExerciseAction, ExerciseSession, Question, QuestionType, TOTAL_QUESTIONS};
pub use lessons::{
    learning_map, levels, material, materials_for_level, sublessons, LessonStatus, Level,
    MapLesson, Material, Sublesson, SublessonKind,
};
