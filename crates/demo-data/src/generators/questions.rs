//! Question and choice generation.

use polls::models::{Choice, Question};
use rand::Rng;
use time::{Duration, OffsetDateTime};

use crate::config::SeedConfig;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Random lowercase ASCII string, each character drawn independently and
/// uniformly with replacement. Collisions across calls are acceptable.
pub fn random_lowercase(len: usize, rng: &mut impl Rng) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Generates questions with random text and publication timestamps, plus
/// the choices attached to each.
pub struct QuestionGenerator {
    config: SeedConfig,
}

impl QuestionGenerator {
    /// Creates a new generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: SeedConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: SeedConfig) -> Self {
        Self { config }
    }

    /// Generates a single question, published at a uniformly random moment
    /// within the configured window ending now.
    pub fn generate(&self, rng: &mut impl Rng) -> Question {
        let text = random_lowercase(self.config.question_text_len, rng);
        let published_at = self.random_publish_time(rng);
        Question::new(text, published_at)
    }

    /// Generates the configured number of choices for a question.
    pub fn generate_choices(&self, question: &Question, rng: &mut impl Rng) -> Vec<Choice> {
        (0..self.config.choices_per_question)
            .map(|_| {
                Choice::new(
                    question.id,
                    random_lowercase(self.config.choice_text_len, rng),
                )
            })
            .collect()
    }

    /// Uniform over `[now - window, now)` at one-second granularity.
    fn random_publish_time(&self, rng: &mut impl Rng) -> OffsetDateTime {
        let start = OffsetDateTime::now_utc() - self.config.publish_window;
        let window_secs = self.config.publish_window.whole_seconds();
        start + Duration::seconds(rng.gen_range(0..window_secs))
    }
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_text_is_lowercase_with_fixed_length() {
        let question_gen = QuestionGenerator::new();
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let question = question_gen.generate(&mut rng);
            assert_eq!(question.question_text.len(), 10);
            assert!(
                question
                    .question_text
                    .chars()
                    .all(|c| c.is_ascii_lowercase())
            );
        }
    }

    #[test]
    fn publish_time_falls_within_window() {
        let question_gen = QuestionGenerator::new();
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let before = OffsetDateTime::now_utc();
            let question = question_gen.generate(&mut rng);
            assert!(question.published_at >= before - Duration::days(10));
            assert!(question.published_at < OffsetDateTime::now_utc());
        }
    }

    #[test]
    fn choices_reference_their_question() {
        let question_gen = QuestionGenerator::new();
        let mut rng = rand::thread_rng();

        let question = question_gen.generate(&mut rng);
        let choices = question_gen.generate_choices(&question, &mut rng);

        assert_eq!(choices.len(), 3);
        for choice in &choices {
            assert_eq!(choice.question_id, question.id);
            assert_eq!(choice.choice_text.len(), 5);
            assert!(choice.choice_text.chars().all(|c| c.is_ascii_lowercase()));
            assert_eq!(choice.votes, 0);
        }
    }

    #[test]
    fn respects_custom_lengths() {
        let question_gen = QuestionGenerator::with_config(SeedConfig {
            question_text_len: 24,
            choice_text_len: 2,
            ..Default::default()
        });
        let mut rng = rand::thread_rng();

        let question = question_gen.generate(&mut rng);
        assert_eq!(question.question_text.len(), 24);

        let choices = question_gen.generate_choices(&question, &mut rng);
        assert!(choices.iter().all(|c| c.choice_text.len() == 2));
    }
}
