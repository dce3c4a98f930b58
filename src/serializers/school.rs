use serde_json::Value;

use super::{FieldErrors, FieldReader, ModelSerializer};
use crate::models::{
    courses::requests::CreateCourseRequest, enrollments::requests::CreateEnrollmentRequest,
    students::requests::CreateStudentRequest,
};

const NAME_MAX_LENGTH: usize = 100;

pub struct StudentSerializer;

impl ModelSerializer for StudentSerializer {
    type Validated = CreateStudentRequest;
    const FIELDS: &'static [&'static str] = &["name", "age", "dob", "is_active"];

    fn deserialize(data: &Value) -> Result<CreateStudentRequest, FieldErrors> {
        let mut fields = FieldReader::new(data)?;
        let name = fields.char("name", NAME_MAX_LENGTH);
        let age = fields.integer_i32("age");
        let dob = fields.date("dob");
        let is_active = fields.boolean("is_active", true);

        match (name, age, dob, is_active) {
            (Some(name), Some(age), Some(dob), Some(is_active)) => Ok(CreateStudentRequest {
                name,
                age,
                dob,
                is_active,
            }),
            _ => Err(fields.into_errors()),
        }
    }
}

pub struct CourseSerializer;

impl ModelSerializer for CourseSerializer {
    type Validated = CreateCourseRequest;
    const FIELDS: &'static [&'static str] = &["name", "description"];

    fn deserialize(data: &Value) -> Result<CreateCourseRequest, FieldErrors> {
        let mut fields = FieldReader::new(data)?;
        let name = fields.char("name", NAME_MAX_LENGTH);
        let description = fields.text("description");

        match (name, description) {
            (Some(name), Some(description)) => Ok(CreateCourseRequest { name, description }),
            _ => Err(fields.into_errors()),
        }
    }
}

pub struct EnrollmentSerializer;

impl ModelSerializer for EnrollmentSerializer {
    type Validated = CreateEnrollmentRequest;
    const FIELDS: &'static [&'static str] = &["student", "course", "enroll_date", "is_active"];

    fn deserialize(data: &Value) -> Result<CreateEnrollmentRequest, FieldErrors> {
        let mut fields = FieldReader::new(data)?;
        let student = fields.primary_key("student");
        let course = fields.primary_key("course");
        let enroll_date = fields.datetime("enroll_date");
        let is_active = fields.boolean("is_active", true);

        match (student, course, enroll_date, is_active) {
            (Some(student), Some(course), Some(enroll_date), Some(is_active)) => {
                Ok(CreateEnrollmentRequest {
                    student,
                    course,
                    enroll_date,
                    is_active,
                })
            }
            _ => Err(fields.into_errors()),
        }
    }
}
