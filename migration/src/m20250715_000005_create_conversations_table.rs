use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `conversations` table and its columns.
#[derive(DeriveIden)]
pub enum Conversations {
    Table,
    Id,
    SellerId,
    BuyerId,
    LastMessage,
    ReadBySeller,
    ReadByBuyer,
    CreatedAt,
    UpdatedAt,
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
                    .table(Conversations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Conversations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Conversations::SellerId).uuid().not_null())
                    .col(ColumnDef::new(Conversations::BuyerId).uuid().not_null())
                    .col(ColumnDef::new(Conversations::LastMessage).text())
                    .col(
                        ColumnDef::new(Conversations::ReadBySeller)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Conversations::ReadByBuyer)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Conversations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Conversations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conversations_seller")
                            .from(Conversations::Table, Conversations::SellerId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conversations_buyer")
                            .from(Conversations::Table, Conversations::BuyerId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One conversation per (seller, buyer) pair; creation is find-or-create.
        manager
            .create_index(
                Index::create()
                    .name("uniq_conversations_seller_buyer")
                    .table(Conversations::Table)
                    .col(Conversations::SellerId)
                    .col(Conversations::BuyerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Conversations::Table).to_owned())
            .await
    }
}
