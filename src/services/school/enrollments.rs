use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::SchoolService;
use crate::entity::{ModelName, enrollments::Entity as Enrollments};
use crate::models::NotFound;
use crate::models::courses::requests::CourseFilter;
use crate::models::enrollments::requests::EnrollmentFilter;
use crate::models::students::requests::StudentFilter;
use crate::serializers::{EnrollmentSerializer, ModelSerializer, primary_key_value};
use crate::services::common::{
    reference_exists, respond_list, respond_lookup, storage_error, validation_failed,
};

pub async fn create_enrollment(
    service: &SchoolService,
    payload: Value,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let api = service.get_api_config(request);

    let validated = EnrollmentSerializer::deserialize(&payload);
    let mut errors = validated.as_ref().err().cloned().unwrap_or_default();

    // 外键存在性与字段校验一起报告
    if let Some(student_id) = primary_key_value(&payload, "student") {
        match reference_exists(storage.get_student(StudentFilter::by_id(student_id)).await) {
            Ok(true) => {}
            Ok(false) => errors.add_invalid_pk("student", student_id),
            Err(e) => return Ok(storage_error("Enrollment creation failed", &e)),
        }
    }
    if let Some(course_id) = primary_key_value(&payload, "course") {
        match reference_exists(storage.get_course(CourseFilter::by_id(course_id)).await) {
            Ok(true) => {}
            Ok(false) => errors.add_invalid_pk("course", course_id),
            Err(e) => return Ok(storage_error("Enrollment creation failed", &e)),
        }
    }

    let enrollment_data = match validated {
        Ok(data) if errors.is_empty() => data,
        _ => {
            errors.sort_by_declaration(EnrollmentSerializer::FIELDS);
            return Ok(validation_failed(&errors, &api));
        }
    };

    match storage.create_enrollment(enrollment_data).await {
        Ok(enrollment) => {
            info!(
                "Student {} enrolled in course {} (id {})",
                enrollment.student, enrollment.course, enrollment.id
            );
            Ok(HttpResponse::Created().json(enrollment))
        }
        Err(e) => Ok(storage_error("Enrollment creation failed", &e)),
    }
}

pub async fn list_enrollments(
    service: &SchoolService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    Ok(respond_list(
        storage.list_enrollments().await,
        "Failed to list enrollments",
    ))
}

pub async fn get_enrollment(
    service: &SchoolService,
    enrollment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let result = storage
        .get_enrollment(EnrollmentFilter::by_id(enrollment_id))
        .await;
    Ok(respond_lookup(result, "Failed to get enrollment"))
}

pub async fn delete_enrollment(
    service: &SchoolService,
    enrollment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_enrollment(enrollment_id).await {
        Ok(true) => {
            info!("Enrollment {} deleted", enrollment_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(NotFound::new(Enrollments::MODEL_NAME).into_response()),
        Err(e) => Ok(storage_error("Enrollment deletion failed", &e)),
    }
}
