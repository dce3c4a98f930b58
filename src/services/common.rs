//! 服务层通用响应构造

use actix_web::{HttpRequest, HttpResponse, http::StatusCode, web};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, warn};

use crate::config::{ApiConfig, AppConfig};
use crate::errors::{AppError, Result};
use crate::models::{ErrorDetail, Lookup};
use crate::serializers::FieldErrors;
use crate::storage::Storage;

/// 从应用数据中取出存储实例
pub(crate) fn storage_from(request: &HttpRequest) -> actix_web::Result<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Storage not found in app data"))
}

/// 接口行为配置，优先使用应用数据中注册的配置
pub(crate) fn api_config_from(request: &HttpRequest) -> ApiConfig {
    request
        .app_data::<web::Data<ApiConfig>>()
        .map(|data| data.get_ref().clone())
        .unwrap_or_else(|| AppConfig::get().api.clone())
}

/// 序列化校验失败，状态码由配置决定（默认 404）
pub(crate) fn validation_failed(errors: &FieldErrors, api: &ApiConfig) -> HttpResponse {
    let status =
        StatusCode::from_u16(api.validation_error_status).unwrap_or(StatusCode::NOT_FOUND);
    HttpResponse::build(status).json(errors)
}

/// 存储层错误转为响应，状态码取自错误类型
pub(crate) fn storage_error(context: &str, e: &AppError) -> HttpResponse {
    let status = e.status_code();
    if status.is_server_error() {
        error!("{context}: {e}");
    } else {
        warn!("{context}: {e}");
    }
    HttpResponse::build(status).json(ErrorDetail::new(format!("{context}: {}", e.message())))
}

/// 单条查询结果转为响应：命中 200，未找到原样返回 404 结构
pub(crate) fn respond_lookup<T: Serialize>(result: Result<Lookup<T>>, context: &str) -> HttpResponse {
    match result {
        Ok(Lookup::Found(record)) => HttpResponse::Ok().json(record),
        Ok(Lookup::NotFound(not_found)) => not_found.into_response(),
        Err(e) => storage_error(context, &e),
    }
}

pub(crate) fn respond_list<T: Serialize>(result: Result<Vec<T>>, context: &str) -> HttpResponse {
    match result {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => storage_error(context, &e),
    }
}

/// 外键引用是否存在
pub(crate) fn reference_exists<T>(result: Result<Lookup<T>>) -> Result<bool> {
    result.map(|lookup| lookup.is_found())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::{Value, json};

    async fn body_json(response: HttpResponse) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_storage_error_uses_variant_status() {
        let (status, body) = body_json(storage_error(
            "Failed to get student",
            &AppError::database_operation("disk I/O error"),
        ))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"detail": "Failed to get student: disk I/O error"}));

        let (status, _) = body_json(storage_error(
            "Failed to list courses",
            &AppError::database_connection("connection refused"),
        ))
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (status, body) = body_json(storage_error(
            "Failed to get enrollment",
            &AppError::not_found("enrollment 9"),
        ))
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Failed to get enrollment: enrollment 9"}));
    }
}
