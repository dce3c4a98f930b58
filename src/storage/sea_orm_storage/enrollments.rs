//! 选课存储操作

use super::SeaOrmStorage;
use super::lookup::Filters;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{AppError, Result};
use crate::models::{
    Lookup,
    enrollments::{
        entities::Enrollment,
        requests::{CreateEnrollmentRequest, EnrollmentFilter},
    },
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

fn enrollment_filters(filter: EnrollmentFilter) -> Filters<Enrollments> {
    let mut filters = Vec::new();
    if let Some(id) = filter.id {
        filters.push((Column::Id, id.into()));
    }
    if let Some(student) = filter.student {
        filters.push((Column::StudentId, student.into()));
    }
    if let Some(course) = filter.course {
        filters.push((Column::CourseId, course.into()));
    }
    filters
}

impl SeaOrmStorage {
    /// 创建选课记录，学生与课程须已存在（由外键约束兜底）
    pub async fn create_enrollment_impl(&self, req: CreateEnrollmentRequest) -> Result<Enrollment> {
        let model = ActiveModel {
            student_id: Set(req.student),
            course_id: Set(req.course),
            enroll_date: Set(req.enroll_date),
            is_active: Set(req.is_active),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("创建选课记录失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    pub async fn get_enrollment_impl(&self, filter: EnrollmentFilter) -> Result<Lookup<Enrollment>> {
        let lookup = self
            .get_object::<Enrollments>(enrollment_filters(filter))
            .await?;
        Ok(lookup.map(|m| m.into_enrollment()))
    }

    pub async fn list_enrollments_impl(&self) -> Result<Vec<Enrollment>> {
        let enrollments = Enrollments::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询选课列表失败: {e}")))?;

        Ok(enrollments
            .into_iter()
            .map(|m| m.into_enrollment())
            .collect())
    }

    pub async fn delete_enrollment_impl(&self, id: i64) -> Result<bool> {
        let result = Enrollments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("删除选课记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::models::courses::requests::CreateCourseRequest;
    use crate::models::students::requests::CreateStudentRequest;
    use chrono::{NaiveDate, TimeZone, Utc};

    async fn memory_storage() -> SeaOrmStorage {
        SeaOrmStorage::connect(&DatabaseConfig {
            url: "sqlite::memory:".into(),
            pool_size: 1,
            timeout: 5,
        })
        .await
        .expect("in-memory storage")
    }

    async fn seed_course(storage: &SeaOrmStorage, name: &str) -> i64 {
        storage
            .create_course_impl(CreateCourseRequest {
                name: name.into(),
                description: String::new(),
            })
            .await
            .unwrap()
            .id
    }

    fn enroll(student: i64, course: i64) -> CreateEnrollmentRequest {
        CreateEnrollmentRequest {
            student,
            course,
            enroll_date: Utc.with_ymd_and_hms(2024, 9, 1, 9, 0, 0).unwrap(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_lookup_by_student() {
        let storage = memory_storage().await;
        let student = storage
            .create_student_impl(CreateStudentRequest {
                name: "Bob".into(),
                age: 21,
                dob: NaiveDate::from_ymd_opt(2003, 1, 15).unwrap(),
                is_active: true,
            })
            .await
            .unwrap();
        let algebra = seed_course(&storage, "Algebra").await;
        let physics = seed_course(&storage, "Physics").await;

        let first = storage
            .create_enrollment_impl(enroll(student.id, algebra))
            .await
            .unwrap();
        let lookup = storage
            .get_enrollment_impl(EnrollmentFilter::by_student(student.id))
            .await
            .unwrap();
        assert_eq!(lookup, Lookup::Found(first));

        storage
            .create_enrollment_impl(enroll(student.id, physics))
            .await
            .unwrap();
        let err = storage
            .get_enrollment_impl(EnrollmentFilter::by_student(student.id))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");
    }

    #[tokio::test]
    async fn test_foreign_keys_enforced() {
        let storage = memory_storage().await;
        let course = seed_course(&storage, "Algebra").await;

        let err = storage
            .create_enrollment_impl(enroll(404, course))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E003");
    }
}
