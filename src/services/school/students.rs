use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::SchoolService;
use crate::entity::{ModelName, students::Entity as Students};
use crate::models::students::requests::StudentFilter;
use crate::models::{Lookup, NotFound};
use crate::serializers::{ModelSerializer, StudentSerializer};
use crate::services::common::{respond_list, respond_lookup, storage_error, validation_failed};

pub async fn create_student(
    service: &SchoolService,
    payload: Value,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let api = service.get_api_config(request);

    let student_data = match StudentSerializer::deserialize(&payload) {
        Ok(data) => data,
        Err(errors) => return Ok(validation_failed(&errors, &api)),
    };

    match storage.create_student(student_data).await {
        Ok(student) => {
            info!("Student {} created (id {})", student.name, student.id);
            Ok(HttpResponse::Created().json(student))
        }
        Err(e) => Ok(storage_error("Student creation failed", &e)),
    }
}

pub async fn list_students(
    service: &SchoolService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    Ok(respond_list(storage.list_students().await, "Failed to list students"))
}

pub async fn get_student(
    service: &SchoolService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let result = storage.get_student(StudentFilter::by_id(student_id)).await;
    Ok(respond_lookup(result, "Failed to get student"))
}

/// 整体更新：请求须携带全部可写字段，id 与 created_at 保持不变
pub async fn update_student(
    service: &SchoolService,
    student_id: i64,
    payload: Value,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let api = service.get_api_config(request);

    let mut student = match storage.get_student(StudentFilter::by_id(student_id)).await {
        Ok(Lookup::Found(student)) => student,
        Ok(Lookup::NotFound(not_found)) => return Ok(not_found.into_response()),
        Err(e) => return Ok(storage_error("Failed to get student", &e)),
    };

    let update = match StudentSerializer::deserialize(&payload) {
        Ok(data) => data,
        Err(errors) => return Ok(validation_failed(&errors, &api)),
    };

    student.name = update.name;
    student.age = update.age;
    student.dob = update.dob;
    student.is_active = update.is_active;

    match storage.save_student(student).await {
        Ok(saved) => {
            info!("Student {} updated", saved.id);
            Ok(HttpResponse::Ok().json(saved))
        }
        Err(e) => Ok(storage_error("Student update failed", &e)),
    }
}

pub async fn delete_student(
    service: &SchoolService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_student(student_id).await {
        Ok(true) => {
            info!("Student {} deleted", student_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(NotFound::new(Students::MODEL_NAME).into_response()),
        Err(e) => Ok(storage_error("Student deletion failed", &e)),
    }
}
