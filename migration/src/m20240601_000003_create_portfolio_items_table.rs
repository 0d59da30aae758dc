use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create the portfolio_items table
        manager
            .create_table(
                Table::create()
                    .table(PortfolioItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PortfolioItems::AssetId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioItems::Quantity)
                            .decimal_len(28, 8)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioItems::AvgPrice)
                            .decimal_len(20, 8)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PortfolioItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_items_asset_id")
                            .from(PortfolioItems::Table, PortfolioItems::AssetId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create unique index on asset_id: at most one holding per asset
        manager
            .create_index(
                Index::create()
                    .unique()
                    .name("idx_portfolio_items_asset_id_unique")
                    .table(PortfolioItems::Table)
                    .col(PortfolioItems::AssetId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortfolioItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PortfolioItems {
    Table,
    Id,
    AssetId,
    Quantity,
    AvgPrice,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    Id,
}
