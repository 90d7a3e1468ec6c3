pub use sea_orm_migration::prelude::*;

mod m20250715_000001_create_users_table;
mod m20250715_000002_create_gigs_table;
mod m20250715_000003_create_orders_table;
mod m20250715_000004_create_reviews_table;
mod m20250715_000005_create_conversations_table;
mod m20250715_000006_create_messages_table;
mod m20250716_000001_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250715_000001_create_users_table::Migration),
            Box::new(m20250715_000002_create_gigs_table::Migration),
            Box::new(m20250715_000003_create_orders_table::Migration),
            Box::new(m20250715_000004_create_reviews_table::Migration),
            Box::new(m20250715_000005_create_conversations_table::Migration),
            Box::new(m20250715_000006_create_messages_table::Migration),
            Box::new(m20250716_000001_add_lookup_indexes::Migration),
        ]
    }
}
