use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listing::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Listing::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Listing::Kind).string().not_null())
                    .col(ColumnDef::new(Listing::Category).string().not_null())
                    .col(ColumnDef::new(Listing::Details).text().not_null())
                    .col(ColumnDef::new(Listing::Rate).double().not_null())
                    .col(ColumnDef::new(Listing::Unit).string().not_null())
                    .col(ColumnDef::new(Listing::City).string().not_null())
                    .col(ColumnDef::new(Listing::UserName).string().not_null())
                    .col(
                        ColumnDef::new(Listing::Views)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Listing::Clicks)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Listing::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 列表始终按创建时间倒序返回
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_listings_created_at")
                    .table(Listing::Table)
                    .col(Listing::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_listings_kind")
                    .table(Listing::Table)
                    .col(Listing::Kind)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_listings_kind").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_listings_created_at").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Listing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Listing {
    #[sea_orm(iden = "listings")]
    Table,
    Id,
    Kind,
    Category,
    Details,
    Rate,
    Unit,
    City,
    UserName,
    Views,
    Clicks,
    CreatedAt,
}
