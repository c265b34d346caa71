pub mod schema;
pub mod expansion;
