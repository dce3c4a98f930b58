#[derive(Debug, Clone, PartialEq)]
pub struct CreateCourseRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl CourseFilter {
    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}
