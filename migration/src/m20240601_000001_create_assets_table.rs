use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create assets table holding the tradable asset catalog
        manager
            .create_table(
                Table::create()
                    .table(Assets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assets::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assets::Symbol).string_len(24).not_null())
                    .col(ColumnDef::new(Assets::Name).string_len(128).not_null())
                    .col(ColumnDef::new(Assets::Image).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Assets::Status)
                            .string_len(8)
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(Assets::CurrentPrice).decimal_len(20, 8).null())
                    .col(
                        ColumnDef::new(Assets::PriceChangePercentage24h)
                            .decimal_len(10, 4)
                            .null(),
                    )
                    .col(ColumnDef::new(Assets::MarketCapRank).integer().null())
                    .col(
                        ColumnDef::new(Assets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Assets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index on symbol for lookup and search
        manager
            .create_index(
                Index::create()
                    .name("idx_assets_symbol")
                    .table(Assets::Table)
                    .col(Assets::Symbol)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Create index on status
        manager
            .create_index(
                Index::create()
                    .name("idx_assets_status")
                    .table(Assets::Table)
                    .col(Assets::Status)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Create composite index on status and symbol
        manager
            .create_index(
                Index::create()
                    .name("idx_assets_status_symbol")
                    .table(Assets::Table)
                    .col(Assets::Status)
                    .col(Assets::Symbol)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Create index on market_cap_rank for rank-ordered listings
        manager
            .create_index(
                Index::create()
                    .name("idx_assets_market_cap_rank")
                    .table(Assets::Table)
                    .col(Assets::MarketCapRank)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    Id,
    Symbol,
    Name,
    Image,
    Status,
    CurrentPrice,
    PriceChangePercentage24h,
    MarketCapRank,
    CreatedAt,
    UpdatedAt,
}
