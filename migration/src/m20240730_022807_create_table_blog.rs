use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPost::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogPost::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BlogPost::Title)
                            .string_len(250)
                            .unique_key()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BlogPost::Subtitle).string_len(250).not_null())
                    .col(ColumnDef::new(BlogPost::Date).string_len(250).not_null())
                    .col(ColumnDef::new(BlogPost::Body).text().not_null())
                    .col(ColumnDef::new(BlogPost::Author).string_len(250).not_null())
                    .col(ColumnDef::new(BlogPost::ImgUrl).string_len(250).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BlogPost {
    Table,
    Id,
    Title,
    Subtitle,
    Date,
    Body,
    Author,
    ImgUrl,
}
