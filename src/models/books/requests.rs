// 创建图书请求（经序列化器校验后）
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub author: Option<i64>,
}

impl BookFilter {
    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}
