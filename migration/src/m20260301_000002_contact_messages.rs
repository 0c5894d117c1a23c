use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactMessage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactMessage::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContactMessage::Name).string().not_null())
                    .col(ColumnDef::new(ContactMessage::Email).string().not_null())
                    .col(
                        ColumnDef::new(ContactMessage::Subject)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(ContactMessage::Message).text().not_null())
                    .col(
                        ColumnDef::new(ContactMessage::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contact_messages_created_at")
                    .table(ContactMessage::Table)
                    .col(ContactMessage::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_contact_messages_created_at")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ContactMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContactMessage {
    #[sea_orm(iden = "contact_messages")]
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    CreatedAt,
}
