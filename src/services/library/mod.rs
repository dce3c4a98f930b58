pub mod create;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use super::common::{api_config_from, storage_from};
use crate::config::ApiConfig;
use crate::storage::Storage;

/// 图书馆服务：作者与图书
pub struct LibraryService {
    storage: Option<Arc<dyn Storage>>,
}

impl LibraryService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from(request),
        }
    }

    pub(crate) fn get_api_config(&self, request: &HttpRequest) -> ApiConfig {
        api_config_from(request)
    }

    // 创建作者
    pub async fn create_author(
        &self,
        payload: Value,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_author(self, payload, request).await
    }

    // 创建图书
    pub async fn create_book(
        &self,
        payload: Value,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_book(self, payload, request).await
    }

    pub async fn get_author(
        &self,
        author_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_author(self, author_id, request).await
    }

    pub async fn get_book(&self, book_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_book(self, book_id, request).await
    }

    pub async fn list_authors(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_authors(self, request).await
    }

    pub async fn list_books(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_books(self, request).await
    }
}
