//! Create vacations table

use sea_orm_migration::prelude::*;

use super::m20250101_000003_create_countries::Countries;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vacations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vacations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vacations::CountryId).integer().not_null())
                    .col(ColumnDef::new(Vacations::Description).text().not_null())
                    .col(ColumnDef::new(Vacations::StartDate).date().not_null())
                    .col(ColumnDef::new(Vacations::EndDate).date().not_null())
                    // Price in cents
                    .col(ColumnDef::new(Vacations::PriceCents).big_integer().not_null())
                    .col(
                        ColumnDef::new(Vacations::ImageFilename)
                            .string_len(255)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vacations_country")
                            .from(Vacations::Table, Vacations::CountryId)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vacations_start_date")
                    .table(Vacations::Table)
                    .col(Vacations::StartDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vacations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Vacations {
    Table,
    Id,
    CountryId,
    Description,
    StartDate,
    EndDate,
    PriceCents,
    ImageFilename,
}
