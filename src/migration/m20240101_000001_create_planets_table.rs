use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .col(pk_auto(Planets::Id))
                    .col(string_null(Planets::Name))
                    .col(big_integer_null(Planets::DistanceFromEarth))
                    .col(string_null(Planets::NearestStar))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Planets {
    Table,
    Id,
    Name,
    DistanceFromEarth,
    NearestStar,
}
