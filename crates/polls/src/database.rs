use crate::errors::AppError;
use crate::models::{Choice, Question, User};
use sqlx::PgPool;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_user(&self, user: &User) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, is_staff, is_superuser, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.is_staff)
        .bind(user.is_superuser)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn all_users(&self) -> Result<Vec<User>, AppError> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            SELECT id, username, password_hash, is_staff, is_superuser, created_at
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn any_users(&self) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users)")
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    /// Removes every user record, returning how many were deleted.
    pub async fn delete_all_users(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM users").execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    pub async fn create_question(&self, question: &Question) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO questions (id, question_text, published_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(question.id)
        .bind(&question.question_text)
        .bind(question.published_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn all_questions(&self) -> Result<Vec<Question>, AppError> {
        let questions: Vec<Question> = sqlx::query_as(
            r#"
            SELECT id, question_text, published_at
            FROM questions
            ORDER BY published_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn any_questions(&self) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM questions)")
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    pub async fn delete_all_questions(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM questions")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn create_choice(&self, choice: &Choice) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO choices (id, question_id, choice_text, votes)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(choice.id)
        .bind(choice.question_id)
        .bind(&choice.choice_text)
        .bind(choice.votes)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn all_choices(&self) -> Result<Vec<Choice>, AppError> {
        let choices: Vec<Choice> = sqlx::query_as(
            r#"
            SELECT id, question_id, choice_text, votes
            FROM choices
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(choices)
    }

    pub async fn any_choices(&self) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM choices)")
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    pub async fn delete_all_choices(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM choices")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
