use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Gigs {
    Table,
    UserId,
    Category,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    BuyerId,
    SellerId,
    IsCompleted,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    GigId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Messages {
    Table,
    ConversationId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_gigs_user_id")
                    .table(Gigs::Table)
                    .col(Gigs::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_gigs_category")
                    .table(Gigs::Table)
                    .col(Gigs::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_buyer_completed")
                    .table(Orders::Table)
                    .col(Orders::BuyerId)
                    .col(Orders::IsCompleted)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_seller_completed")
                    .table(Orders::Table)
                    .col(Orders::SellerId)
                    .col(Orders::IsCompleted)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_gig_created")
                    .table(Reviews::Table)
                    .col(Reviews::GigId)
                    .col(Reviews::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_messages_conversation_created")
                    .table(Messages::Table)
                    .col(Messages::ConversationId)
                    .col(Messages::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_messages_conversation_created").table(Messages::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_reviews_gig_created").table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_orders_seller_completed").table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_orders_buyer_completed").table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_gigs_category").table(Gigs::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_gigs_user_id").table(Gigs::Table).to_owned())
            .await
    }
}
