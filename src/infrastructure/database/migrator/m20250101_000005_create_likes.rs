//! Create likes table

use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_users::Users;
use super::m20250101_000004_create_vacations::Vacations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Likes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Likes::UserId).integer().not_null())
                    .col(ColumnDef::new(Likes::VacationId).integer().not_null())
                    // One like per (user, vacation)
                    .primary_key(Index::create().col(Likes::UserId).col(Likes::VacationId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_user")
                            .from(Likes::Table, Likes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_vacation")
                            .from(Likes::Table, Likes::VacationId)
                            .to(Vacations::Table, Vacations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_likes_vacation")
                    .table(Likes::Table)
                    .col(Likes::VacationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Likes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Likes {
    Table,
    UserId,
    VacationId,
}
