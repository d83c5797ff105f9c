use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub created_at: OffsetDateTime,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password_hash: String,
        is_staff: bool,
        is_superuser: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password_hash,
            is_staff,
            is_superuser,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: Uuid,
    pub question_text: String,
    pub published_at: OffsetDateTime,
}

impl Question {
    pub fn new(question_text: impl Into<String>, published_at: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            question_text: question_text.into(),
            published_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Choice {
    pub id: Uuid,
    pub question_id: Uuid,
    pub choice_text: String,
    pub votes: i32,
}

impl Choice {
    /// New choice for a question, starting with no votes.
    pub fn new(question_id: Uuid, choice_text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            question_id,
            choice_text: choice_text.into(),
            votes: 0,
        }
    }
}
