use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create song_genre table
        manager
            .create_table(
                Table::create()
                    .table(SongGenre::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(SongGenre::SongId).big_integer().not_null())
                    .col(ColumnDef::new(SongGenre::GenreId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(SongGenre::SongId)
                            .col(SongGenre::GenreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_genre_song_id")
                            .from(SongGenre::Table, SongGenre::SongId)
                            .to(Song::Table, Song::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_genre_genre_id")
                            .from(SongGenre::Table, SongGenre::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create song_producer table
        manager
            .create_table(
                Table::create()
                    .table(SongProducer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SongProducer::SongId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SongProducer::PersonId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SongProducer::SongId)
                            .col(SongProducer::PersonId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_producer_song_id")
                            .from(SongProducer::Table, SongProducer::SongId)
                            .to(Song::Table, Song::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_producer_person_id")
                            .from(SongProducer::Table, SongProducer::PersonId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create song_writer table
        manager
            .create_table(
                Table::create()
                    .table(SongWriter::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(SongWriter::SongId).big_integer().not_null())
                    .col(
                        ColumnDef::new(SongWriter::PersonId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SongWriter::SongId)
                            .col(SongWriter::PersonId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_writer_song_id")
                            .from(SongWriter::Table, SongWriter::SongId)
                            .to(Song::Table, Song::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_writer_person_id")
                            .from(SongWriter::Table, SongWriter::PersonId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create song_featuring table
        manager
            .create_table(
                Table::create()
                    .table(SongFeaturing::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SongFeaturing::SongId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SongFeaturing::PersonId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SongFeaturing::SongId)
                            .col(SongFeaturing::PersonId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_featuring_song_id")
                            .from(SongFeaturing::Table, SongFeaturing::SongId)
                            .to(Song::Table, Song::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_featuring_person_id")
                            .from(SongFeaturing::Table, SongFeaturing::PersonId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create lyric table
        manager
            .create_table(
                Table::create()
                    .table(Lyric::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Lyric::SongId).big_integer().not_null())
                    .col(ColumnDef::new(Lyric::Verse).integer().not_null())
                    .col(ColumnDef::new(Lyric::Text).text().not_null())
                    .primary_key(Index::create().col(Lyric::SongId).col(Lyric::Verse))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lyric_song_id")
                            .from(Lyric::Table, Lyric::SongId)
                            .to(Song::Table, Song::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lyric::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(SongFeaturing::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(SongWriter::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(SongProducer::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(SongGenre::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Song {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Genre {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Person {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum SongGenre {
    Table,
    SongId,
    GenreId,
}

#[derive(DeriveIden)]
enum SongProducer {
    Table,
    SongId,
    PersonId,
}

#[derive(DeriveIden)]
enum SongWriter {
    Table,
    SongId,
    PersonId,
}

#[derive(DeriveIden)]
enum SongFeaturing {
    Table,
    SongId,
    PersonId,
}

#[derive(DeriveIden)]
enum Lyric {
    Table,
    SongId,
    Verse,
    Text,
}
