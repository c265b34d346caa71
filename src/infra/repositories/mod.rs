pub mod sqlite_destination_repo;
pub mod sqlite_package_repo;
pub mod sqlite_blog_repo;
pub mod sqlite_comment_repo;
pub mod sqlite_booking_repo;
