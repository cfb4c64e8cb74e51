use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Client companies; elemento_pep is the code reports reference
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Companies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Companies::NombreCompany).string().not_null())
                    .col(
                        ColumnDef::new(Companies::ElementoPep)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AreasTrabajos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AreasTrabajos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AreasTrabajos::NombreArea).string().not_null())
                    .col(ColumnDef::new(AreasTrabajos::AreaCliente).integer())
                    .col(ColumnDef::new(AreasTrabajos::CompanyId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_area_company")
                            .from(AreasTrabajos::Table, AreasTrabajos::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuarios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Usuarios::DocumentoId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Usuarios::NombreUsuario).string().not_null())
                    .col(ColumnDef::new(Usuarios::Email).string().unique_key())
                    .col(
                        ColumnDef::new(Usuarios::Rol)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Usuarios::PasswordHash).string().not_null())
                    .to_owned(),
            )
            .await?;

        // No foreign keys on cliente / area_trabajo: reads join tolerantly
        manager
            .create_table(
                Table::create()
                    .table(Reportes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reportes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Reportes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Reportes::Horas).double().not_null())
                    .col(ColumnDef::new(Reportes::FechaTrabajada).date())
                    .col(ColumnDef::new(Reportes::Cliente).string().not_null())
                    .col(ColumnDef::new(Reportes::DocumentoId).big_integer().not_null())
                    .col(ColumnDef::new(Reportes::AreaTrabajo).string())
                    .col(
                        ColumnDef::new(Reportes::Aprobado)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reportes_documento")
                    .table(Reportes::Table)
                    .col(Reportes::DocumentoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reportes_cliente")
                    .table(Reportes::Table)
                    .col(Reportes::Cliente)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reportes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AreasTrabajos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
    NombreCompany,
    ElementoPep,
}

#[derive(DeriveIden)]
enum AreasTrabajos {
    Table,
    Id,
    NombreArea,
    AreaCliente,
    CompanyId,
}

#[derive(DeriveIden)]
enum Usuarios {
    Table,
    Id,
    DocumentoId,
    NombreUsuario,
    Email,
    Rol,
    PasswordHash,
}

#[derive(DeriveIden)]
enum Reportes {
    Table,
    Id,
    CreatedAt,
    Horas,
    FechaTrabajada,
    Cliente,
    DocumentoId,
    AreaTrabajo,
    Aprobado,
}
