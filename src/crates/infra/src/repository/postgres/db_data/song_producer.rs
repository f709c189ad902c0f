use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Default)]
#[sea_orm(table_name = "song_producer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[sea_orm(column_type = "BigInteger")]
    pub song_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    #[sea_orm(column_type = "BigInteger")]
    pub person_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Song,
    Person,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Song => Entity::belongs_to(super::song::Entity)
                .from(Column::SongId)
                .to(super::song::Column::Id)
                .into(),
            Self::Person => Entity::belongs_to(super::person::Entity)
                .from(Column::PersonId)
                .to(super::person::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
