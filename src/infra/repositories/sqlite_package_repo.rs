use crate::domain::{models::package::Package, ports::PackageRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

pub struct SqlitePackageRepo {
    pool: SqlitePool,
}

impl SqlitePackageRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PackageRepository for SqlitePackageRepo {
    async fn create(&self, p: &Package) -> Result<Package, AppError> {
        sqlx::query_as::<_, Package>(
            "INSERT INTO packages (id, title, description, destinations, duration, price, inclusions, exclusions, itinerary, images, featured, available, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&p.id).bind(&p.title).bind(&p.description).bind(&p.destinations).bind(&p.duration)
            .bind(p.price).bind(&p.inclusions).bind(&p.exclusions).bind(&p.itinerary).bind(&p.images)
            .bind(p.featured).bind(p.available).bind(p.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Package>, AppError> {
        sqlx::query_as::<_, Package>("SELECT * FROM packages WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_many(&self, ids: &[String]) -> Result<Vec<Package>, AppError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM packages WHERE id IN (");
        let mut separated = query.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
        separated.push_unseparated(")");
        query.build_query_as::<Package>().fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Package>, AppError> {
        sqlx::query_as::<_, Package>("SELECT * FROM packages ORDER BY created_at DESC, rowid DESC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_featured(&self, limit: i64) -> Result<Vec<Package>, AppError> {
        sqlx::query_as::<_, Package>("SELECT * FROM packages WHERE featured = 1 ORDER BY rowid ASC LIMIT ?").bind(limit).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, p: &Package) -> Result<Option<Package>, AppError> {
        sqlx::query_as::<_, Package>(
            "UPDATE packages SET title=?, description=?, destinations=?, duration=?, price=?, inclusions=?, exclusions=?, itinerary=?, images=?, featured=?, available=?
             WHERE id=?
             RETURNING *"
        )
            .bind(&p.title).bind(&p.description).bind(&p.destinations).bind(&p.duration).bind(p.price)
            .bind(&p.inclusions).bind(&p.exclusions).bind(&p.itinerary).bind(&p.images)
            .bind(p.featured).bind(p.available)
            .bind(&p.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM packages WHERE id = ?").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let result = sqlx::query("SELECT COUNT(*) as count FROM packages").fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.get::<i64, _>("count"))
    }
}
