//! Configuration types for demo data generation.

use serde::{Deserialize, Serialize};
use time::Duration;

/// Configuration for seeding operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of questions to generate.
    pub question_count: usize,

    /// Number of choices attached to each question.
    pub choices_per_question: usize,

    /// Length of generated question text.
    pub question_text_len: usize,

    /// Length of generated choice text.
    pub choice_text_len: usize,

    /// Questions are published at a uniformly random moment within this
    /// window ending at the current time.
    pub publish_window: Duration,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            question_count: 100,
            choices_per_question: 3,
            question_text_len: 10,
            choice_text_len: 5,
            publish_window: Duration::days(10),
        }
    }
}
