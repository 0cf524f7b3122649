use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Missions::Table)
                    .col(
                        ColumnDef::new(Missions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Missions::Name).string().not_null())
                    .col(ColumnDef::new(Missions::ScientistId).integer().not_null())
                    .col(ColumnDef::new(Missions::PlanetId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_missions_scientist_id_scientists")
                            .from(Missions::Table, Missions::ScientistId)
                            .to(Scientists::Table, Scientists::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_missions_planet_id_planets")
                            .from(Missions::Table, Missions::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Missions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Missions {
    Table,
    Id,
    Name,
    ScientistId,
    PlanetId,
}

#[derive(DeriveIden)]
enum Scientists {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Planets {
    Table,
    Id,
}
