use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a question
pub type QuestionId = Uuid;

/// Lifecycle state of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionStatus {
    Pending,
    Escalated,
    Answered,
}

/// A user-submitted question as the dashboard sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question_id: QuestionId,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub username: Option<String>,
    pub message: String,
    #[serde(default = "default_status")]
    pub status: QuestionStatus,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

fn default_status() -> QuestionStatus {
    QuestionStatus::Pending
}

impl Question {
    /// Create a pending guest question with a fresh id
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            question_id: Uuid::new_v4(),
            user_id: None,
            username: None,
            message: message.into(),
            status: QuestionStatus::Pending,
            timestamp: Utc::now(),
        }
    }

    /// Attach an author
    pub fn with_author(mut self, user_id: Uuid, username: impl Into<String>) -> Self {
        self.user_id = Some(user_id);
        self.username = Some(username.into());
        self
    }

    pub fn with_status(mut self, status: QuestionStatus) -> Self {
        self.status = status;
        self
    }

    /// Author name shown to reviewers
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("Guest")
    }
}
