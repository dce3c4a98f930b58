// 创建作者请求（经序列化器校验后）
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAuthorRequest {
    pub name: String,
}

// 作者查询条件，所有已设置的字段按相等匹配
#[derive(Debug, Clone, Default)]
pub struct AuthorFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl AuthorFilter {
    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}
