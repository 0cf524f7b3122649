use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scientists::Table)
                    .col(pk_auto(Scientists::Id))
                    .col(string(Scientists::Name))
                    .col(string(Scientists::FieldOfStudy))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scientists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Scientists {
    Table,
    Id,
    Name,
    FieldOfStudy,
}
