use crate::domain::models::{
    destination::Destination, package::Package, blog::Blog, comment::Comment,
    booking::{Booking, BookingStatus},
};
use crate::error::AppError;
use async_trait::async_trait;

// Update methods return `None` when the id does not exist; delete methods
// report whether a document was removed.

#[async_trait]
pub trait DestinationRepository: Send + Sync {
    async fn create(&self, destination: &Destination) -> Result<Destination, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Destination>, AppError>;
    async fn find_many(&self, ids: &[String]) -> Result<Vec<Destination>, AppError>;
    async fn list(&self) -> Result<Vec<Destination>, AppError>;
    async fn list_featured(&self, limit: i64) -> Result<Vec<Destination>, AppError>;
    async fn update(&self, destination: &Destination) -> Result<Option<Destination>, AppError>;
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

#[async_trait]
pub trait PackageRepository: Send + Sync {
    async fn create(&self, package: &Package) -> Result<Package, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Package>, AppError>;
    async fn find_many(&self, ids: &[String]) -> Result<Vec<Package>, AppError>;
    async fn list(&self) -> Result<Vec<Package>, AppError>;
    async fn list_featured(&self, limit: i64) -> Result<Vec<Package>, AppError>;
    async fn update(&self, package: &Package) -> Result<Option<Package>, AppError>;
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn create(&self, blog: &Blog) -> Result<Blog, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Blog>, AppError>;
    async fn list_published(&self) -> Result<Vec<Blog>, AppError>;
    async fn list_featured(&self, limit: i64) -> Result<Vec<Blog>, AppError>;
    async fn list_all(&self) -> Result<Vec<Blog>, AppError>;
    async fn update(&self, blog: &Blog) -> Result<Option<Blog>, AppError>;
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, comment: &Comment) -> Result<Comment, AppError>;
    async fn list_approved_by_page(&self, page: &str) -> Result<Vec<Comment>, AppError>;
    async fn list_all(&self) -> Result<Vec<Comment>, AppError>;
    async fn approve(&self, id: &str) -> Result<Option<Comment>, AppError>;
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
    async fn count_pending(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn list_all(&self) -> Result<Vec<Booking>, AppError>;
    async fn update_status(&self, id: &str, status: BookingStatus) -> Result<Option<Booking>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

/// Decides whether a presented admin credential is acceptable. Route logic
/// only sees the outcome, so the scheme behind it can be swapped freely.
#[async_trait]
pub trait AdminAuthenticator: Send + Sync {
    async fn validate_credential(&self, credential: &str) -> Result<bool, AppError>;
}
