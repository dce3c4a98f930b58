use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::LibraryService;
use crate::models::authors::requests::AuthorFilter;
use crate::serializers::{AuthorSerializer, BookSerializer, ModelSerializer, primary_key_value};
use crate::services::common::{reference_exists, storage_error, validation_failed};

pub async fn create_author(
    service: &LibraryService,
    payload: Value,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let api = service.get_api_config(request);

    let author_data = match AuthorSerializer::deserialize(&payload) {
        Ok(data) => data,
        Err(errors) => return Ok(validation_failed(&errors, &api)),
    };

    match storage.create_author(author_data).await {
        Ok(author) => {
            info!("Author {} created (id {})", author.name, author.id);
            Ok(HttpResponse::Created().json(author))
        }
        Err(e) => Ok(storage_error("Author creation failed", &e)),
    }
}

pub async fn create_book(
    service: &LibraryService,
    payload: Value,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let api = service.get_api_config(request);

    let validated = BookSerializer::deserialize(&payload);
    let mut errors = validated.as_ref().err().cloned().unwrap_or_default();

    // 作者可为空；给出且类型正确时检查是否存在，与其他字段错误一起返回
    if let Some(author_id) = primary_key_value(&payload, "author") {
        match reference_exists(storage.get_author(AuthorFilter::by_id(author_id)).await) {
            Ok(true) => {}
            Ok(false) => errors.add_invalid_pk("author", author_id),
            Err(e) => return Ok(storage_error("Book creation failed", &e)),
        }
    }

    let book_data = match validated {
        Ok(data) if errors.is_empty() => data,
        _ => {
            errors.sort_by_declaration(BookSerializer::FIELDS);
            return Ok(validation_failed(&errors, &api));
        }
    };

    match storage.create_book(book_data).await {
        Ok(book) => {
            info!("Book {} created (id {})", book.title, book.id);
            Ok(HttpResponse::Created().json(book))
        }
        Err(e) => Ok(storage_error("Book creation failed", &e)),
    }
}
