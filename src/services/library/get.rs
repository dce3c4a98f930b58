use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LibraryService;
use crate::models::authors::requests::AuthorFilter;
use crate::models::books::requests::BookFilter;
use crate::services::common::respond_lookup;

pub async fn get_author(
    service: &LibraryService,
    author_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let result = storage.get_author(AuthorFilter::by_id(author_id)).await;
    Ok(respond_lookup(result, "Failed to get author"))
}

pub async fn get_book(
    service: &LibraryService,
    book_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let result = storage.get_book(BookFilter::by_id(book_id)).await;
    Ok(respond_lookup(result, "Failed to get book"))
}
