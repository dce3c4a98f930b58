pub mod courses;
pub mod enrollments;
pub mod greeting;
pub mod students;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use super::common::{api_config_from, storage_from};
use crate::config::ApiConfig;
use crate::storage::Storage;

/// 学校服务：学生、课程、选课，以及问候接口
pub struct SchoolService {
    storage: Option<Arc<dyn Storage>>,
}

impl SchoolService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from(request),
        }
    }

    pub(crate) fn get_api_config(&self, request: &HttpRequest) -> ApiConfig {
        api_config_from(request)
    }

    // 按姓名问候学生，并写回配置的年龄
    pub async fn greet(&self, name: String, request: &HttpRequest) -> ActixResult<HttpResponse> {
        greeting::greet(self, name, request).await
    }

    // 学生
    pub async fn create_student(
        &self,
        payload: Value,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        students::create_student(self, payload, request).await
    }

    pub async fn list_students(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        students::list_students(self, request).await
    }

    pub async fn get_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        students::get_student(self, student_id, request).await
    }

    pub async fn update_student(
        &self,
        student_id: i64,
        payload: Value,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        students::update_student(self, student_id, payload, request).await
    }

    pub async fn delete_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        students::delete_student(self, student_id, request).await
    }

    // 课程
    pub async fn create_course(
        &self,
        payload: Value,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::create_course(self, payload, request).await
    }

    pub async fn list_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        courses::list_courses(self, request).await
    }

    pub async fn get_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::get_course(self, course_id, request).await
    }

    pub async fn delete_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::delete_course(self, course_id, request).await
    }

    // 选课
    pub async fn create_enrollment(
        &self,
        payload: Value,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        enrollments::create_enrollment(self, payload, request).await
    }

    pub async fn list_enrollments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        enrollments::list_enrollments(self, request).await
    }

    pub async fn get_enrollment(
        &self,
        enrollment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        enrollments::get_enrollment(self, enrollment_id, request).await
    }

    pub async fn delete_enrollment(
        &self,
        enrollment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        enrollments::delete_enrollment(self, enrollment_id, request).await
    }
}
