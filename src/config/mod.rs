pub mod database;
pub mod environment;

pub use database::{init_db, init_schema, DbPool};
