//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod authors;
pub mod books;
pub mod courses;
pub mod enrollments;
pub mod students;

/// 实体的小写模型名，用于 `{"<model>": "Not found"}` 响应
pub trait ModelName {
    const MODEL_NAME: &'static str;
}
