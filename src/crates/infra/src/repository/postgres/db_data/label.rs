use domain::label::Label;
use domain::value::LabelId;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Default)]
#[sea_orm(table_name = "label")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[sea_orm(column_type = "BigInteger")]
    pub id: i64,
    pub name: String,
    pub name_slug: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Album,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Album => Entity::has_many(super::album::Entity)
                .from(Column::Id)
                .to(super::album::Column::LabelId)
                .into(),
        }
    }
}

impl Related<super::album::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Album.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Label {
    fn from(model: Model) -> Self {
        Label {
            id: LabelId::from(model.id),
            name: model.name,
            name_slug: model.name_slug,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
