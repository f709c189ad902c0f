use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create genre table
        manager
            .create_table(
                Table::create()
                    .table(Genre::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Genre::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Genre::Name).string().not_null())
                    .col(ColumnDef::new(Genre::NameSlug).string().not_null())
                    .col(ColumnDef::new(Genre::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Genre::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create person table
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Person::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Person::Name).string().not_null())
                    .col(ColumnDef::new(Person::NameSlug).string().not_null())
                    .col(ColumnDef::new(Person::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Person::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create label table
        manager
            .create_table(
                Table::create()
                    .table(Label::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Label::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Label::Name).string().not_null())
                    .col(ColumnDef::new(Label::NameSlug).string().not_null())
                    .col(ColumnDef::new(Label::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Label::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create album table
        manager
            .create_table(
                Table::create()
                    .table(Album::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Album::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Album::Name).string().not_null())
                    .col(ColumnDef::new(Album::NameSlug).string().not_null())
                    .col(ColumnDef::new(Album::ReleasedAt).date().null())
                    .col(ColumnDef::new(Album::LabelId).big_integer().null())
                    .col(ColumnDef::new(Album::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Album::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_album_label_id")
                            .from(Album::Table, Album::LabelId)
                            .to(Label::Table, Label::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create song table
        manager
            .create_table(
                Table::create()
                    .table(Song::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Song::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Song::Index).integer().not_null())
                    .col(ColumnDef::new(Song::Title).string().not_null())
                    .col(ColumnDef::new(Song::TitleSlug).string().not_null())
                    .col(ColumnDef::new(Song::LengthSecs).integer().not_null())
                    .col(ColumnDef::new(Song::IsSingle).boolean().not_null())
                    .col(ColumnDef::new(Song::AlbumId).big_integer().not_null())
                    .col(ColumnDef::new(Song::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Song::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_album_id")
                            .from(Song::Table, Song::AlbumId)
                            .to(Album::Table, Album::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique slug indexes back the conflict translation on create
        manager
            .create_index(
                Index::create()
                    .name("idx_genre_name_slug")
                    .table(Genre::Table)
                    .col(Genre::NameSlug)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_person_name_slug")
                    .table(Person::Table)
                    .col(Person::NameSlug)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_label_name_slug")
                    .table(Label::Table)
                    .col(Label::NameSlug)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_album_name_slug")
                    .table(Album::Table)
                    .col(Album::NameSlug)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_song_title_slug")
                    .table(Song::Table)
                    .col(Song::TitleSlug)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_song_album_id")
                    .table(Song::Table)
                    .col(Song::AlbumId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Song::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Album::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Label::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Person::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Genre::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Genre {
    Table,
    Id,
    Name,
    NameSlug,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Person {
    Table,
    Id,
    Name,
    NameSlug,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Label {
    Table,
    Id,
    Name,
    NameSlug,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Album {
    Table,
    Id,
    Name,
    NameSlug,
    ReleasedAt,
    LabelId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Song {
    Table,
    Id,
    Index,
    Title,
    TitleSlug,
    LengthSecs,
    IsSingle,
    AlbumId,
    CreatedAt,
    UpdatedAt,
}
