use std::sync::Arc;
use crate::domain::ports::{
    DestinationRepository, PackageRepository, BlogRepository, CommentRepository,
    BookingRepository, AdminAuthenticator,
};
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub destination_repo: Arc<dyn DestinationRepository>,
    pub package_repo: Arc<dyn PackageRepository>,
    pub blog_repo: Arc<dyn BlogRepository>,
    pub comment_repo: Arc<dyn CommentRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub admin_auth: Arc<dyn AdminAuthenticator>,
    pub templates: Arc<Tera>,
}
