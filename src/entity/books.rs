//! 图书实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub author_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::authors::Entity",
        from = "Column::AuthorId",
        to = "super::authors::Column::Id",
        on_delete = "SetNull"
    )]
    Author,
}

impl Related<super::authors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl super::ModelName for Entity {
    const MODEL_NAME: &'static str = "book";
}

impl Model {
    pub fn into_book(self) -> crate::models::books::entities::Book {
        crate::models::books::entities::Book {
            id: self.id,
            title: self.title,
            author: self.author_id,
        }
    }
}
