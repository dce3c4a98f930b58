use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LibraryService;
use crate::services::common::respond_list;

pub async fn list_authors(
    service: &LibraryService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    Ok(respond_list(storage.list_authors().await, "Failed to list authors"))
}

pub async fn list_books(
    service: &LibraryService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    Ok(respond_list(storage.list_books().await, "Failed to list books"))
}
