//! 作者实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::books::Entity")]
    Books,
}

impl Related<super::books::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Books.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl super::ModelName for Entity {
    const MODEL_NAME: &'static str = "author";
}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_author(self) -> crate::models::authors::entities::Author {
        crate::models::authors::entities::Author {
            id: self.id,
            name: self.name,
        }
    }
}
