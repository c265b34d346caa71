use crate::domain::{models::comment::Comment, ports::CommentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

pub struct SqliteCommentRepo {
    pool: SqlitePool,
}

impl SqliteCommentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepo {
    async fn create(&self, c: &Comment) -> Result<Comment, AppError> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (id, name, email, comment, rating, approved, page, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&c.id).bind(&c.name).bind(&c.email).bind(&c.comment)
            .bind(c.rating).bind(c.approved).bind(&c.page).bind(c.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_approved_by_page(&self, page: &str) -> Result<Vec<Comment>, AppError> {
        sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE page = ? AND approved = 1 ORDER BY created_at DESC, rowid DESC").bind(page).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<Comment>, AppError> {
        sqlx::query_as::<_, Comment>("SELECT * FROM comments ORDER BY created_at DESC, rowid DESC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn approve(&self, id: &str) -> Result<Option<Comment>, AppError> {
        sqlx::query_as::<_, Comment>("UPDATE comments SET approved = 1 WHERE id = ? RETURNING *").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_pending(&self) -> Result<i64, AppError> {
        let result = sqlx::query("SELECT COUNT(*) as count FROM comments WHERE approved = 0").fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.get::<i64, _>("count"))
    }
}
