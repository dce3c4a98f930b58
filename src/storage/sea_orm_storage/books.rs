//! 图书存储操作

use super::SeaOrmStorage;
use super::lookup::Filters;
use crate::entity::books::{ActiveModel, Column, Entity as Books};
use crate::errors::{AppError, Result};
use crate::models::{
    Lookup,
    books::{
        entities::Book,
        requests::{BookFilter, CreateBookRequest},
    },
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

fn book_filters(filter: BookFilter) -> Filters<Books> {
    let mut filters = Vec::new();
    if let Some(id) = filter.id {
        filters.push((Column::Id, id.into()));
    }
    if let Some(title) = filter.title {
        filters.push((Column::Title, title.into()));
    }
    if let Some(author) = filter.author {
        filters.push((Column::AuthorId, author.into()));
    }
    filters
}

impl SeaOrmStorage {
    /// 创建图书
    pub async fn create_book_impl(&self, req: CreateBookRequest) -> Result<Book> {
        let model = ActiveModel {
            title: Set(req.title),
            author_id: Set(req.author),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("创建图书失败: {e}")))?;

        Ok(result.into_book())
    }

    pub async fn get_book_impl(&self, filter: BookFilter) -> Result<Lookup<Book>> {
        let lookup = self.get_object::<Books>(book_filters(filter)).await?;
        Ok(lookup.map(|m| m.into_book()))
    }

    pub async fn list_books_impl(&self) -> Result<Vec<Book>> {
        let books = Books::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询图书列表失败: {e}")))?;

        Ok(books.into_iter().map(|m| m.into_book()).collect())
    }
}
