//! Database seeding utilities.

use polls::database::Database;
use polls::errors::AppError;
use rand::Rng;
use tracing::info;

use crate::config::SeedConfig;
use crate::generators::{QuestionGenerator, demo_users};

/// Counts of records created by a seeding run.
#[derive(Debug, Clone, Copy)]
pub struct SeedSummary {
    pub users: usize,
    pub questions: usize,
    pub choices: usize,
}

/// Clears and repopulates the demo dataset.
///
/// The database handle is passed in explicitly, so the seeder can run
/// against any store a caller hands it, e.g. a scratch database in tests.
pub struct Seeder {
    db: Database,
    config: SeedConfig,
}

impl Seeder {
    /// Creates a new seeder with the default configuration.
    pub fn new(db: Database) -> Self {
        Self {
            db,
            config: SeedConfig::default(),
        }
    }

    /// Sets the seeding configuration.
    pub fn with_config(mut self, config: SeedConfig) -> Self {
        self.config = config;
        self
    }

    /// Wipes and repopulates users, questions, and choices.
    ///
    /// **WARNING**: This deletes all existing records in those tables. No
    /// enclosing transaction wraps the run; a failure part-way leaves the
    /// deletes and inserts applied so far committed.
    pub async fn run(&self, rng: &mut impl Rng) -> Result<SeedSummary, AppError> {
        if self.db.any_users().await? {
            self.db.delete_all_users().await?;
            info!("Users cleared.");
        }

        let users = self.seed_users().await?;
        info!("Users created");

        if self.db.any_questions().await? || self.db.any_choices().await? {
            // Child table first: choices reference questions.
            self.db.delete_all_choices().await?;
            self.db.delete_all_questions().await?;
            info!("Questions and choices cleared.");
        }

        let (questions, choices) = self.seed_questions(rng).await?;
        info!("Questions created");

        Ok(SeedSummary {
            users,
            questions,
            choices,
        })
    }

    /// Inserts the three fixed demo accounts.
    async fn seed_users(&self) -> Result<usize, AppError> {
        let users = demo_users()?;

        for user in &users {
            self.db.create_user(user).await?;
        }

        Ok(users.len())
    }

    /// Inserts the configured number of questions, each with its choices.
    async fn seed_questions(&self, rng: &mut impl Rng) -> Result<(usize, usize), AppError> {
        let question_gen = QuestionGenerator::with_config(self.config.clone());
        let mut choices = 0;

        for _ in 0..self.config.question_count {
            let question = question_gen.generate(rng);
            self.db.create_question(&question).await?;

            for choice in question_gen.generate_choices(&question, rng) {
                self.db.create_choice(&choice).await?;
                choices += 1;
            }
        }

        Ok((self.config.question_count, choices))
    }
}
