pub mod conversations;
pub mod gigs;
pub mod messages;
pub mod orders;
pub mod reviews;
pub mod users;

use sea_orm::{Database, DatabaseConnection, DbErr, TransactionError};
use std::env;

/// Create a SeaORM database connection pool from the `DATABASE_URL` env var.
pub async fn create_pool() -> DatabaseConnection {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    Database::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

/// Collapse a transaction wrapper error back into the inner `DbErr`.
pub(crate) fn flatten_txn_err(err: TransactionError<DbErr>) -> DbErr {
    match err {
        TransactionError::Connection(e) => e,
        TransactionError::Transaction(e) => e,
    }
}
