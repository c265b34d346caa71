use crate::domain::{models::blog::Blog, ports::BlogRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

pub struct SqliteBlogRepo {
    pool: SqlitePool,
}

impl SqliteBlogRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for SqliteBlogRepo {
    async fn create(&self, b: &Blog) -> Result<Blog, AppError> {
        sqlx::query_as::<_, Blog>(
            "INSERT INTO blogs (id, title, content, excerpt, author, image, tags, featured, published, publish_date, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&b.id).bind(&b.title).bind(&b.content).bind(&b.excerpt).bind(&b.author).bind(&b.image)
            .bind(&b.tags).bind(b.featured).bind(b.published).bind(b.publish_date).bind(b.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Blog>, AppError> {
        sqlx::query_as::<_, Blog>("SELECT * FROM blogs WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_published(&self) -> Result<Vec<Blog>, AppError> {
        sqlx::query_as::<_, Blog>("SELECT * FROM blogs WHERE published = 1 ORDER BY publish_date DESC, rowid DESC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_featured(&self, limit: i64) -> Result<Vec<Blog>, AppError> {
        sqlx::query_as::<_, Blog>("SELECT * FROM blogs WHERE published = 1 AND featured = 1 ORDER BY rowid ASC LIMIT ?").bind(limit).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<Blog>, AppError> {
        sqlx::query_as::<_, Blog>("SELECT * FROM blogs ORDER BY publish_date DESC, rowid DESC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, b: &Blog) -> Result<Option<Blog>, AppError> {
        sqlx::query_as::<_, Blog>(
            "UPDATE blogs SET title=?, content=?, excerpt=?, author=?, image=?, tags=?, featured=?, published=?, publish_date=?
             WHERE id=?
             RETURNING *"
        )
            .bind(&b.title).bind(&b.content).bind(&b.excerpt).bind(&b.author).bind(&b.image)
            .bind(&b.tags).bind(b.featured).bind(b.published).bind(b.publish_date)
            .bind(&b.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = ?").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let result = sqlx::query("SELECT COUNT(*) as count FROM blogs").fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.get::<i64, _>("count"))
    }
}
