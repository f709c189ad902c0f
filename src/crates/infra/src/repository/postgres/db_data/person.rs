use domain::person::Person;
use domain::value::PersonId;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Default)]
#[sea_orm(table_name = "person")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[sea_orm(column_type = "BigInteger")]
    pub id: i64,
    pub name: String,
    pub name_slug: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

// People are reached from songs through the three join tables; the
// `Linked` definitions live on the song entity.
#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Person {
    fn from(model: Model) -> Self {
        Person {
            id: PersonId::from(model.id),
            name: model.name,
            name_slug: model.name_slug,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
