use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `gigs` table and its columns.
#[derive(DeriveIden)]
pub enum Gigs {
    Table,
    Id,
    UserId,
    Title,
    ShortTitle,
    Description,
    ShortDesc,
    Category,
    Price,
    DeliveryTime,
    RevisionNumber,
    Features,
    Cover,
    Images,
    TotalStars,
    StarNumber,
    Sales,
    CreatedAt,
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
                    .table(Gigs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Gigs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Gigs::UserId).uuid().not_null())
                    .col(ColumnDef::new(Gigs::Title).string().not_null())
                    .col(ColumnDef::new(Gigs::ShortTitle).string().not_null())
                    .col(ColumnDef::new(Gigs::Description).text().not_null())
                    .col(ColumnDef::new(Gigs::ShortDesc).text().not_null())
                    .col(ColumnDef::new(Gigs::Category).string().not_null())
                    .col(ColumnDef::new(Gigs::Price).integer().not_null())
                    .col(ColumnDef::new(Gigs::DeliveryTime).integer().not_null())
                    .col(ColumnDef::new(Gigs::RevisionNumber).integer().not_null())
                    .col(ColumnDef::new(Gigs::Features).json_binary().not_null())
                    .col(ColumnDef::new(Gigs::Cover).string().not_null())
                    .col(ColumnDef::new(Gigs::Images).json_binary().not_null())
                    .col(
                        ColumnDef::new(Gigs::TotalStars)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Gigs::StarNumber)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Gigs::Sales).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Gigs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gigs_user")
                            .from(Gigs::Table, Gigs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gigs::Table).to_owned())
            .await
    }
}
