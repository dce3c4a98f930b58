//! 模型序列化器
//!
//! 每个实体一个序列化器，把请求 JSON 校验并转换为创建请求，
//! 失败时返回按字段聚合的 [`FieldErrors`]。响应记录由 `models` 中的业务实体
//! 直接通过 serde 输出。
//!
//! `id` 与服务端维护的字段（如 `created_at`）为只读，入站时忽略。
//! 外键字段在这里只校验类型，记录是否存在由服务层结合存储检查，
//! 检查结果并入同一份错误后按 [`ModelSerializer::FIELDS`] 排序。

pub mod fields;
mod library;
mod school;

use serde_json::Value;

pub use fields::{FieldErrors, FieldReader, NON_FIELD_ERRORS, primary_key_value};
pub use library::{AuthorSerializer, BookSerializer};
pub use school::{CourseSerializer, EnrollmentSerializer, StudentSerializer};

pub trait ModelSerializer {
    /// 校验通过后的入站数据
    type Validated;
    /// 可写字段，按声明顺序
    const FIELDS: &'static [&'static str];

    fn deserialize(data: &Value) -> Result<Self::Validated, FieldErrors>;
}
