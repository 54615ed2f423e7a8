//! Migration: Create the profiles table.
//!
//! One profile per user, removed together with its user. The hourly rate
//! column carries two fractional digits.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Profiles::UserId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Profiles::Bio).text().null())
                    .col(ColumnDef::new(Profiles::ProfileImageUrl).string().null())
                    .col(ColumnDef::new(Profiles::HourlyRate).decimal_len(18, 2).null())
                    .col(ColumnDef::new(Profiles::YearsOfExperience).integer().null())
                    .col(ColumnDef::new(Profiles::Languages).string().null())
                    .col(
                        ColumnDef::new(Profiles::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Profiles::VerifiedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profiles_user_id")
                            .from(Profiles::Table, Profiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Profiles {
    Table,
    Id,
    UserId,
    Bio,
    ProfileImageUrl,
    HourlyRate,
    YearsOfExperience,
    Languages,
    IsVerified,
    VerifiedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
