// 创建或整体更新学生的请求（经序列化器校验后）
#[derive(Debug, Clone, PartialEq)]
pub struct CreateStudentRequest {
    pub name: String,
    pub age: i32,
    pub dob: chrono::NaiveDate,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl StudentFilter {
    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}
