pub mod library;

pub mod school;

pub use library::configure_library_routes;
pub use school::configure_school_routes;

use actix_web::{HttpRequest, HttpResponse};

use crate::models::ErrorDetail;

/// 资源存在但方法未注册
pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ErrorDetail::new(format!(
        "Method \"{}\" not allowed.",
        req.method()
    )))
}

/// 未匹配任何路由
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorDetail::new("Not found."))
}
