//! Demo data seeding for the polls backend.
//!
//! This crate wipes and repopulates the database with demo content: the
//! three fixed demo accounts plus a batch of randomly generated questions,
//! each with a fixed number of choices.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use demo_data::prelude::*;
//! use polls::database::Database;
//!
//! let mut rng = rand::thread_rng();
//! let summary = Seeder::new(Database::new(pool)).run(&mut rng).await?;
//! assert_eq!(summary.users, 3);
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedSummary, Seeder};
    pub use crate::generators::{QuestionGenerator, demo_users};
}
