//! 请求参数提取失败时的统一响应
//!
//! 响应体沿用 `{"detail": "..."}` 结构。

use actix_web::{
    HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, PathError},
};
use tracing::debug;

use crate::models::ErrorDetail;

/// JSON 请求体错误
///
/// - Content-Type 不是 JSON：415
/// - 请求体超过限制：413
/// - 其他解析失败：400，`JSON parse error - ...`
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("JSON payload rejected for {}: {}", req.path(), err);

    let response = match &err {
        JsonPayloadError::ContentType => {
            let content_type = req
                .headers()
                .get(actix_web::http::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("");
            HttpResponse::UnsupportedMediaType().json(ErrorDetail::new(format!(
                "Unsupported media type \"{content_type}\" in request."
            )))
        }
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            HttpResponse::PayloadTooLarge().json(ErrorDetail::new("Request body is too large."))
        }
        JsonPayloadError::Deserialize(e) => {
            HttpResponse::BadRequest().json(ErrorDetail::new(format!("JSON parse error - {e}")))
        }
        _ => HttpResponse::BadRequest().json(ErrorDetail::new(err.to_string())),
    };

    InternalError::from_response(err, response).into()
}

/// 路径参数无法解析（如超出范围的 id）一律按资源不存在处理
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!("Path parameter rejected for {}: {}", req.path(), err);
    let response = HttpResponse::NotFound().json(ErrorDetail::new("Not found."));
    InternalError::from_response(err, response).into()
}
