// 创建选课请求，student 与 course 须指向已存在的记录
#[derive(Debug, Clone, PartialEq)]
pub struct CreateEnrollmentRequest {
    pub student: i64,
    pub course: i64,
    pub enroll_date: chrono::DateTime<chrono::Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct EnrollmentFilter {
    pub id: Option<i64>,
    pub student: Option<i64>,
    pub course: Option<i64>,
}

impl EnrollmentFilter {
    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn by_student(student: i64) -> Self {
        Self {
            student: Some(student),
            ..Default::default()
        }
    }
}
