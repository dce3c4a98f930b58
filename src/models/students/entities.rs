use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    // 学生ID
    pub id: i64,
    // 姓名
    pub name: String,
    // 年龄
    pub age: i32,
    // 出生日期
    pub dob: chrono::NaiveDate,
    // 是否在读
    pub is_active: bool,
    // 创建时间，仅在首次保存时写入
    pub created_at: chrono::DateTime<chrono::Utc>,
}
