use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `orders` table and its columns.
///
/// `payment_intent` is unique; order confirmation is keyed on it alone.
#[derive(DeriveIden)]
pub enum Orders {
    Table,
    Id,
    GigId,
    BuyerId,
    SellerId,
    Title,
    Price,
    Image,
    PaymentIntent,
    IsCompleted,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Gigs {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Orders::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Orders::GigId).uuid().not_null())
                    .col(ColumnDef::new(Orders::BuyerId).uuid().not_null())
                    .col(ColumnDef::new(Orders::SellerId).uuid().not_null())
                    .col(ColumnDef::new(Orders::Title).string().not_null())
                    .col(ColumnDef::new(Orders::Price).integer().not_null())
                    .col(ColumnDef::new(Orders::Image).string())
                    .col(
                        ColumnDef::new(Orders::PaymentIntent)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Orders::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Orders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_gig")
                            .from(Orders::Table, Orders::GigId)
                            .to(Gigs::Table, Gigs::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_buyer")
                            .from(Orders::Table, Orders::BuyerId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_seller")
                            .from(Orders::Table, Orders::SellerId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}
