//! Database integration for seeding demo data.
//!
//! The [`Seeder`] clears existing records and inserts the generated demo
//! dataset through the typed persistence layer.

mod seeder;

pub use seeder::{SeedSummary, Seeder};
