use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    // 学生主键
    pub student: i64,
    // 课程主键
    pub course: i64,
    pub enroll_date: chrono::DateTime<chrono::Utc>,
    pub is_active: bool,
}
