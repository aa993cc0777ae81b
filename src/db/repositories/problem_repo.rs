//! Solved problem repository

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{NewSolvedProblem, SolvedProblem},
};

/// Repository for solved problem database operations
pub struct SolvedProblemRepository;

impl SolvedProblemRepository {
    /// Replace a student's solved problems with a freshly computed snapshot
    pub async fn replace_for_student(
        tx: &mut Transaction<'_, Postgres>,
        student_id: &Uuid,
        problems: &[NewSolvedProblem],
    ) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM solved_problems WHERE student_id = $1"#)
            .bind(student_id)
            .execute(&mut **tx)
            .await?;

        for problem in problems {
            sqlx::query(
                r#"
                INSERT INTO solved_problems (student_id, problem_id, rating, solved_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(student_id)
            .bind(&problem.problem_id)
            .bind(problem.rating)
            .bind(problem.solved_at)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    /// List a student's solves within a time window, newest first
    pub async fn list_in_window(
        pool: &PgPool,
        student_id: &Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<SolvedProblem>> {
        let problems = sqlx::query_as::<_, SolvedProblem>(
            r#"
            SELECT * FROM solved_problems
            WHERE student_id = $1 AND solved_at >= $2 AND solved_at <= $3
            ORDER BY solved_at DESC
            "#,
        )
        .bind(student_id)
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await?;

        Ok(problems)
    }

    /// Count a student's solves within a time window
    pub async fn count_in_window(
        pool: &PgPool,
        student_id: &Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM solved_problems
            WHERE student_id = $1 AND solved_at >= $2 AND solved_at <= $3
            "#,
        )
        .bind(student_id)
        .bind(from)
        .bind(to)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// List a student's full solve history, newest first
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: &Uuid,
    ) -> AppResult<Vec<SolvedProblem>> {
        let problems = sqlx::query_as::<_, SolvedProblem>(
            r#"
            SELECT * FROM solved_problems
            WHERE student_id = $1
            ORDER BY solved_at DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(pool)
        .await?;

        Ok(problems)
    }
}
