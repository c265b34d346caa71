use crate::domain::{models::destination::Destination, ports::DestinationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub struct SqliteDestinationRepo {
    pool: SqlitePool,
}

impl SqliteDestinationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DestinationRepository for SqliteDestinationRepo {
    async fn create(&self, d: &Destination) -> Result<Destination, AppError> {
        sqlx::query_as::<_, Destination>(
            "INSERT INTO destinations (id, name, description, location, image, best_time_to_visit, activities, price_range, featured, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&d.id).bind(&d.name).bind(&d.description).bind(&d.location).bind(&d.image)
            .bind(&d.best_time_to_visit).bind(&d.activities).bind(d.price_range).bind(d.featured).bind(d.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Destination>, AppError> {
        sqlx::query_as::<_, Destination>("SELECT * FROM destinations WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_many(&self, ids: &[String]) -> Result<Vec<Destination>, AppError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM destinations WHERE id IN (");
        let mut separated = query.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
        separated.push_unseparated(")");
        query.build_query_as::<Destination>().fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Destination>, AppError> {
        sqlx::query_as::<_, Destination>("SELECT * FROM destinations ORDER BY created_at DESC, rowid DESC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_featured(&self, limit: i64) -> Result<Vec<Destination>, AppError> {
        sqlx::query_as::<_, Destination>("SELECT * FROM destinations WHERE featured = 1 ORDER BY rowid ASC LIMIT ?").bind(limit).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, d: &Destination) -> Result<Option<Destination>, AppError> {
        sqlx::query_as::<_, Destination>(
            "UPDATE destinations SET name=?, description=?, location=?, image=?, best_time_to_visit=?, activities=?, price_range=?, featured=?
             WHERE id=?
             RETURNING *"
        )
            .bind(&d.name).bind(&d.description).bind(&d.location).bind(&d.image)
            .bind(&d.best_time_to_visit).bind(&d.activities).bind(d.price_range).bind(d.featured)
            .bind(&d.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM destinations WHERE id = ?").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected() > 0)
    }
}
