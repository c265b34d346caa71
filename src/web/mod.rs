pub mod views;
pub mod admin;
pub mod render;
