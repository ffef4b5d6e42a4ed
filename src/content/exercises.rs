//! Speaking exercises
//!
//! A fixed-length session walks through numbered questions. Only the
//! first few slots have text so far; the rest show a placeholder.

use serde::Serialize;

pub const TOTAL_QUESTIONS: u32 = 10;

/// Shown for slots without a question yet
pub const QUESTION_PLACEHOLDER: &str = "Question coming soon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Voice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    #[serde(rename = "type")]
    pub kind: QuestionType,
}

const QUESTION_BANK: &[Question] = &[
    Question {
        id: 1,
        text: "what does \"Good morning\" mean in indonesian?",
        kind: QuestionType::Voice,
    },
    Question {
        id: 2,
        text: "How do you say \"Thank you\" in Indonesian?",
        kind: QuestionType::Voice,
    },
    Question {
        id: 3,
        text: "Translate \"How are you?\" to Indonesian",
        kind: QuestionType::Voice,
    },
];

pub fn question(number: u32) -> Option<&'static Question> {
    QUESTION_BANK.iter().find(|q| q.id == number)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseAction {
    Next,
    Back,
    ToggleMicrophone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSession {
    /// 1-based
    pub current: u32,
    pub total: u32,
    pub listening: bool,
}

impl Default for ExerciseSession {
    fn default() -> Self {
        Self {
            current: 1,
            total: TOTAL_QUESTIONS,
            listening: false,
        }
    }
}

impl ExerciseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(mut self, action: ExerciseAction) -> Self {
        match action {
            ExerciseAction::Next if self.current < self.total => self.current += 1,
            ExerciseAction::Back if self.current > 1 => self.current -= 1,
            ExerciseAction::ToggleMicrophone => self.listening = !self.listening,
            _ => {}
        }
        self
    }

    pub fn question(&self) -> Option<&'static Question> {
        question(self.current)
    }

    pub fn question_text(&self) -> &'static str {
        self.question().map(|q| q.text).unwrap_or(QUESTION_PLACEHOLDER)
    }

    pub fn progress_percent(&self) -> f64 {
        f64::from(self.current) / f64::from(self.total) * 100.0
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_is_clamped() {
        let session = ExerciseSession::new().reduce(ExerciseAction::Back);
        assert_eq!(session.current, 1);
        assert!(session.is_first());

        let session = (0..20).fold(session, |s, _| s.reduce(ExerciseAction::Next));
        assert_eq!(session.current, TOTAL_QUESTIONS);
        assert!(session.is_last());

        let session = session.reduce(ExerciseAction::Back);
        assert_eq!(session.current, 9);
    }

    #[test]
    fn test_question_text_and_progress() {
        let session = ExerciseSession::new();
        assert_eq!(
            session.question_text(),
            "what does \"Good morning\" mean in indonesian?"
        );
        assert!((session.progress_percent() - 10.0).abs() < f64::EPSILON);

        let session = session
            .reduce(ExerciseAction::Next)
            .reduce(ExerciseAction::Next)
            .reduce(ExerciseAction::Next);
        assert_eq!(session.current, 4);
        assert_eq!(session.question_text(), QUESTION_PLACEHOLDER);
    }

    #[test]
    fn test_microphone_toggle() {
        let session = ExerciseSession::new().reduce(ExerciseAction::ToggleMicrophone);
        assert!(session.listening);
        assert!(!session.reduce(ExerciseAction::ToggleMicrophone).listening);
    }
}
