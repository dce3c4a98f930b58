use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use super::method_not_allowed;
use crate::services::SchoolService;

// 懒加载的全局 SCHOOL_SERVICE 实例
static SCHOOL_SERVICE: Lazy<SchoolService> = Lazy::new(SchoolService::new_lazy);

pub async fn greet(req: HttpRequest, name: web::Path<String>) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE.greet(name.into_inner(), &req).await
}

// 学生管理
pub async fn list_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE.list_students(&req).await
}

pub async fn create_student(
    req: HttpRequest,
    payload: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE.create_student(payload.into_inner(), &req).await
}

pub async fn get_student(req: HttpRequest, student_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE.get_student(student_id.into_inner(), &req).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: web::Path<i64>,
    payload: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE
        .update_student(student_id.into_inner(), payload.into_inner(), &req)
        .await
}

pub async fn delete_student(
    req: HttpRequest,
    student_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE
        .delete_student(student_id.into_inner(), &req)
        .await
}

// 课程管理
pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE.list_courses(&req).await
}

pub async fn create_course(
    req: HttpRequest,
    payload: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE.create_course(payload.into_inner(), &req).await
}

pub async fn get_course(req: HttpRequest, course_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE.get_course(course_id.into_inner(), &req).await
}

pub async fn delete_course(
    req: HttpRequest,
    course_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE.delete_course(course_id.into_inner(), &req).await
}

// 选课管理
pub async fn list_enrollments(req: HttpRequest) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE.list_enrollments(&req).await
}

pub async fn create_enrollment(
    req: HttpRequest,
    payload: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE
        .create_enrollment(payload.into_inner(), &req)
        .await
}

pub async fn get_enrollment(
    req: HttpRequest,
    enrollment_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE
        .get_enrollment(enrollment_id.into_inner(), &req)
        .await
}

pub async fn delete_enrollment(
    req: HttpRequest,
    enrollment_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE
        .delete_enrollment(enrollment_id.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_school_routes(cfg: &mut web::ServiceConfig) {
    // 旧版问候接口
    cfg.service(
        web::resource("/hello/{name}/")
            .route(web::get().to(greet))
            .default_service(web::to(method_not_allowed)),
    );

    // 后台管理
    cfg.service(
        web::scope("/admin")
            .service(
                web::resource("/students/")
                    .route(web::get().to(list_students))
                    .route(web::post().to(create_student))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource(r"/students/{student_id:\d+}/")
                    .route(web::get().to(get_student))
                    .route(web::put().to(update_student))
                    .route(web::delete().to(delete_student))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/courses/")
                    .route(web::get().to(list_courses))
                    .route(web::post().to(create_course))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource(r"/courses/{course_id:\d+}/")
                    .route(web::get().to(get_course))
                    .route(web::delete().to(delete_course))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/enrollments/")
                    .route(web::get().to(list_enrollments))
                    .route(web::post().to(create_enrollment))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource(r"/enrollments/{enrollment_id:\d+}/")
                    .route(web::get().to(get_enrollment))
                    .route(web::delete().to(delete_enrollment))
                    .default_service(web::to(method_not_allowed)),
            ),
    );
}
