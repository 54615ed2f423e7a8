//! Migration: Create the services table.
//!
//! Services are owned by a profile and removed with it. The category
//! column is constrained to the fixed set of care categories.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Services::ProfileId).integer().not_null())
                    .col(
                        ColumnDef::new(Services::ServiceType)
                            .string()
                            .not_null()
                            .check(Expr::col(Services::ServiceType).is_in([
                                "childcare",
                                "elderly_care",
                                "tutoring",
                                "housekeeping",
                                "pet_care",
                            ])),
                    )
                    .col(ColumnDef::new(Services::Description).text().null())
                    .col(
                        ColumnDef::new(Services::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_services_profile_id")
                            .from(Services::Table, Services::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The search path looks up active services per profile
        manager
            .create_index(
                Index::create()
                    .name("idx_services_profile_active")
                    .table(Services::Table)
                    .col(Services::ProfileId)
                    .col(Services::IsActive)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Services {
    Table,
    Id,
    ProfileId,
    ServiceType,
    Description,
    IsActive,
}

#[derive(Iden)]
enum Profiles {
    Table,
    Id,
}
