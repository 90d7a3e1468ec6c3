pub mod auth;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod payments;
pub mod validation;

pub use db::create_pool;
