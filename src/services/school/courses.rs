use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::SchoolService;
use crate::entity::{ModelName, courses::Entity as Courses};
use crate::models::NotFound;
use crate::models::courses::requests::CourseFilter;
use crate::serializers::{CourseSerializer, ModelSerializer};
use crate::services::common::{respond_list, respond_lookup, storage_error, validation_failed};

pub async fn create_course(
    service: &SchoolService,
    payload: Value,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let api = service.get_api_config(request);

    let course_data = match CourseSerializer::deserialize(&payload) {
        Ok(data) => data,
        Err(errors) => return Ok(validation_failed(&errors, &api)),
    };

    match storage.create_course(course_data).await {
        Ok(course) => {
            info!("Course {} created (id {})", course.name, course.id);
            Ok(HttpResponse::Created().json(course))
        }
        Err(e) => Ok(storage_error("Course creation failed", &e)),
    }
}

pub async fn list_courses(
    service: &SchoolService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    Ok(respond_list(storage.list_courses().await, "Failed to list courses"))
}

pub async fn get_course(
    service: &SchoolService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let result = storage.get_course(CourseFilter::by_id(course_id)).await;
    Ok(respond_lookup(result, "Failed to get course"))
}

pub async fn delete_course(
    service: &SchoolService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_course(course_id).await {
        Ok(true) => {
            info!("Course {} deleted", course_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(NotFound::new(Courses::MODEL_NAME).into_response()),
        Err(e) => Ok(storage_error("Course deletion failed", &e)),
    }
}
