use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SchoolService;
use crate::models::Lookup;
use crate::models::students::requests::StudentFilter;
use crate::services::common::storage_error;

/// 找到同名学生，把年龄改为配置值并保存，返回纯文本问候
///
/// 同名学生多于一个时按查找错误处理（500）。
pub async fn greet(
    service: &SchoolService,
    name: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let api = service.get_api_config(request);

    let mut student = match storage.get_student(StudentFilter::by_name(name)).await {
        Ok(Lookup::Found(student)) => student,
        Ok(Lookup::NotFound(not_found)) => return Ok(not_found.into_response()),
        Err(e) => return Ok(storage_error("Greeting lookup failed", &e)),
    };

    student.age = api.greeting_age;
    match storage.save_student(student).await {
        Ok(saved) => {
            info!("Greeted student {} (id {})", saved.name, saved.id);
            Ok(HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Hello your age is {}", saved.age)))
        }
        Err(e) => Ok(storage_error("Failed to save student", &e)),
    }
}
