pub mod health;
pub mod destination;
pub mod package;
pub mod blog;
pub mod comment;
pub mod booking;
pub mod stats;
pub mod site;
pub mod admin_panel;
