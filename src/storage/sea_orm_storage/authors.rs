//! 作者存储操作

use super::SeaOrmStorage;
use super::lookup::Filters;
use crate::entity::authors::{ActiveModel, Column, Entity as Authors};
use crate::errors::{AppError, Result};
use crate::models::{
    Lookup,
    authors::{
        entities::Author,
        requests::{AuthorFilter, CreateAuthorRequest},
    },
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

fn author_filters(filter: AuthorFilter) -> Filters<Authors> {
    let mut filters = Vec::new();
    if let Some(id) = filter.id {
        filters.push((Column::Id, id.into()));
    }
    if let Some(name) = filter.name {
        filters.push((Column::Name, name.into()));
    }
    filters
}

impl SeaOrmStorage {
    /// 创建作者
    pub async fn create_author_impl(&self, req: CreateAuthorRequest) -> Result<Author> {
        let model = ActiveModel {
            name: Set(req.name),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("创建作者失败: {e}")))?;

        Ok(result.into_author())
    }

    /// 按条件获取唯一作者
    pub async fn get_author_impl(&self, filter: AuthorFilter) -> Result<Lookup<Author>> {
        let lookup = self.get_object::<Authors>(author_filters(filter)).await?;
        Ok(lookup.map(|m| m.into_author()))
    }

    /// 列出全部作者
    pub async fn list_authors_impl(&self) -> Result<Vec<Author>> {
        let authors = Authors::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询作者列表失败: {e}")))?;

        Ok(authors.into_iter().map(|m| m.into_author()).collect())
    }
}
