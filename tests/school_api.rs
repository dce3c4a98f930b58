#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use rust_helloworld::config::ApiConfig;
use serde_json::{Value, json};

fn alice() -> Value {
    json!({"name": "Alice", "age": 19, "dob": "2005-04-01"})
}

#[actix_web::test]
async fn test_greeting_updates_age() {
    let storage = common::memory_storage().await;
    let app = test_app!(storage);

    let req = test::TestRequest::post()
        .uri("/admin/students/")
        .set_json(alice())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["age"], 19);
    assert_eq!(created["is_active"], true);

    let req = test::TestRequest::get().uri("/hello/Alice/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body, "Hello your age is 40");

    let req = test::TestRequest::get().uri("/admin/students/1/").to_request();
    let stored: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored["age"], 40);
    assert_eq!(stored["created_at"], created["created_at"]);
}

#[actix_web::test]
async fn test_greeting_age_is_configurable() {
    let storage = common::memory_storage().await;
    let api = ApiConfig {
        greeting_age: 25,
        ..ApiConfig::default()
    };
    let app = test_app!(storage, api);

    let req = test::TestRequest::post()
        .uri("/admin/students/")
        .set_json(alice())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/hello/Alice").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "Hello your age is 25");
}

#[actix_web::test]
async fn test_greeting_unknown_student() {
    let storage = common::memory_storage().await;
    let app = test_app!(storage);

    let req = test::TestRequest::get().uri("/hello/Nobody/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"student": "Not found"}));
}

#[actix_web::test]
async fn test_greeting_ambiguous_name() {
    let storage = common::memory_storage().await;
    let app = test_app!(storage);

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/admin/students/")
            .set_json(alice())
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/hello/Alice/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_update_student_keeps_identity() {
    let storage = common::memory_storage().await;
    let app = test_app!(storage);

    let req = test::TestRequest::post()
        .uri("/admin/students/")
        .set_json(alice())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri("/admin/students/1/")
        .set_json(json!({
            "name": "Alice Liddell",
            "age": 20,
            "dob": "2005-04-01",
            "is_active": false
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["name"], "Alice Liddell");
    assert_eq!(updated["is_active"], false);
    assert_eq!(updated["created_at"], created["created_at"]);

    let req = test::TestRequest::put()
        .uri("/admin/students/7/")
        .set_json(alice())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"student": "Not found"}));
}

#[actix_web::test]
async fn test_enrollment_requires_existing_references() {
    let storage = common::memory_storage().await;
    let app = test_app!(storage);

    let req = test::TestRequest::post()
        .uri("/admin/enrollments/")
        .set_json(json!({
            "student": 5,
            "course": 6,
            "enroll_date": "2024-09-01T09:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "course": ["Invalid pk \"6\" - object does not exist."],
            "student": ["Invalid pk \"5\" - object does not exist."]
        })
    );
}

#[actix_web::test]
async fn test_enrollment_reference_errors_merge_with_field_errors() {
    let storage = common::memory_storage().await;
    let app = test_app!(storage);

    let req = test::TestRequest::post()
        .uri("/admin/courses/")
        .set_json(json!({"name": "Databases", "description": "Relational modelling"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/admin/enrollments/")
        .set_json(json!({
            "enroll_date": "next tuesday",
            "course": 1,
            "student": 5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = test::read_body(resp).await;
    assert_eq!(
        body,
        concat!(
            r#"{"student":["Invalid pk \"5\" - object does not exist."],"#,
            r#""enroll_date":["Datetime has wrong format. Use one of these formats instead: "#,
            r#"YYYY-MM-DDThh:mm[:ss[.uuuuuu]][+HH:MM|-HH:MM|Z]."]}"#
        )
    );
}

#[actix_web::test]
async fn test_fetch_and_delete_course_and_enrollment() {
    let storage = common::memory_storage().await;
    let app = test_app!(storage);

    let req = test::TestRequest::post()
        .uri("/admin/students/")
        .set_json(alice())
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/admin/courses/")
        .set_json(json!({"name": "Compilers", "description": "Parsing to codegen"}))
        .to_request();
    let course: Value = test::call_and_read_body_json(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/admin/enrollments/")
        .set_json(json!({
            "student": 1,
            "course": 1,
            "enroll_date": "2024-09-01T09:00:00Z",
            "is_active": false
        }))
        .to_request();
    let enrollment: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get().uri("/admin/courses/1/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, course);
    assert_eq!(
        fetched,
        json!({"id": 1, "name": "Compilers", "description": "Parsing to codegen"})
    );

    let req = test::TestRequest::get()
        .uri("/admin/enrollments/1/")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, enrollment);
    assert_eq!(
        fetched,
        json!({
            "id": 1,
            "student": 1,
            "course": 1,
            "enroll_date": "2024-09-01T09:00:00Z",
            "is_active": false
        })
    );

    let req = test::TestRequest::delete()
        .uri("/admin/enrollments/1/")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::get()
        .uri("/admin/enrollments/1/")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"enrollment": "Not found"}));

    let req = test::TestRequest::delete()
        .uri("/admin/enrollments/1/")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    // 删除选课不影响学生与课程
    let req = test::TestRequest::get().uri("/admin/students/1/").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    let req = test::TestRequest::get().uri("/admin/courses/1/").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_deleting_student_cascades_enrollments() {
    let storage = common::memory_storage().await;
    let app = test_app!(storage);

    let req = test::TestRequest::post()
        .uri("/admin/students/")
        .set_json(alice())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/admin/courses/")
        .set_json(json!({"name": "Databases", "description": "Relational modelling"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::post()
        .uri("/admin/enrollments/")
        .set_json(json!({
            "student": 1,
            "course": 1,
            "enroll_date": "2024-09-01T09:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let enrollment: Value = test::read_body_json(resp).await;
    assert_eq!(enrollment["student"], 1);
    assert_eq!(enrollment["course"], 1);
    assert_eq!(enrollment["is_active"], true);

    let req = test::TestRequest::delete()
        .uri("/admin/students/1/")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::get()
        .uri("/admin/enrollments/1/")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"enrollment": "Not found"}));

    // 课程保留
    let req = test::TestRequest::get().uri("/admin/courses/").to_request();
    let courses: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(courses.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::delete()
        .uri("/admin/students/1/")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"student": "Not found"}));
}

#[actix_web::test]
async fn test_deleting_course_cascades_enrollments() {
    let storage = common::memory_storage().await;
    let app = test_app!(storage);

    let req = test::TestRequest::post()
        .uri("/admin/students/")
        .set_json(alice())
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/admin/courses/")
        .set_json(json!({"name": "Algebra", "description": "Groups and rings"}))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/admin/enrollments/")
        .set_json(json!({"student": 1, "course": 1, "enroll_date": "2024-09-01T09:00"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::delete().uri("/admin/courses/1/").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::get().uri("/admin/enrollments/").to_request();
    let enrollments: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(enrollments, json!([]));

    let req = test::TestRequest::get().uri("/admin/students/").to_request();
    let students: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(students.as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn test_invalid_student_payload() {
    let storage = common::memory_storage().await;
    let app = test_app!(storage);

    let req = test::TestRequest::post()
        .uri("/admin/students/")
        .set_json(json!({"name": "", "age": "old", "dob": "01/04/2005"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], json!(["This field may not be blank."]));
    assert_eq!(body["age"], json!(["A valid integer is required."]));
    assert!(body["dob"][0].as_str().unwrap_or_default().starts_with("Date has wrong format."));
}
