use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use super::method_not_allowed;
use crate::services::LibraryService;

// 懒加载的全局 LIBRARY_SERVICE 实例
static LIBRARY_SERVICE: Lazy<LibraryService> = Lazy::new(LibraryService::new_lazy);

// HTTP处理程序
pub async fn create_book(req: HttpRequest, payload: web::Json<Value>) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE.create_book(payload.into_inner(), &req).await
}

pub async fn create_author(
    req: HttpRequest,
    payload: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE.create_author(payload.into_inner(), &req).await
}

pub async fn get_book(req: HttpRequest, book_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE.get_book(book_id.into_inner(), &req).await
}

pub async fn get_author(req: HttpRequest, author_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE.get_author(author_id.into_inner(), &req).await
}

pub async fn list_books(req: HttpRequest) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE.list_books(&req).await
}

pub async fn list_authors(req: HttpRequest) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE.list_authors(&req).await
}

// 配置路由
pub fn configure_library_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/createBook/")
            .route(web::post().to(create_book))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/createAuthor/")
            .route(web::post().to(create_author))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource(r"/book/{book_id:\d+}/")
            .route(web::get().to(get_book))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource(r"/author/{author_id:\d+}/")
            .route(web::get().to(get_author))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/books/")
            .route(web::get().to(list_books))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/authors/")
            .route(web::get().to(list_authors))
            .default_service(web::to(method_not_allowed)),
    );
}
