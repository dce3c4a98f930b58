use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::errors::Result;
use crate::models::{
    Lookup,
    authors::{
        entities::Author,
        requests::{AuthorFilter, CreateAuthorRequest},
    },
    books::{
        entities::Book,
        requests::{BookFilter, CreateBookRequest},
    },
    courses::{
        entities::Course,
        requests::{CourseFilter, CreateCourseRequest},
    },
    enrollments::{
        entities::Enrollment,
        requests::{CreateEnrollmentRequest, EnrollmentFilter},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentFilter},
    },
};

pub mod sea_orm_storage;

/// 单条查询统一返回 [`Lookup`]：命中一条记录，或带实体名的未找到结果。
/// 多条命中视为错误。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 作者管理方法
    // 创建作者
    async fn create_author(&self, author: CreateAuthorRequest) -> Result<Author>;
    // 按条件获取唯一作者
    async fn get_author(&self, filter: AuthorFilter) -> Result<Lookup<Author>>;
    // 列出全部作者
    async fn list_authors(&self) -> Result<Vec<Author>>;

    /// 图书管理方法
    async fn create_book(&self, book: CreateBookRequest) -> Result<Book>;
    async fn get_book(&self, filter: BookFilter) -> Result<Lookup<Book>>;
    async fn list_books(&self) -> Result<Vec<Book>>;

    /// 学生管理方法
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student(&self, filter: StudentFilter) -> Result<Lookup<Student>>;
    async fn list_students(&self) -> Result<Vec<Student>>;
    // 以完整字段覆盖并保存，created_at 保持不变
    async fn save_student(&self, student: Student) -> Result<Student>;
    // 删除学生，其选课记录级联删除
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course(&self, filter: CourseFilter) -> Result<Lookup<Course>>;
    async fn list_courses(&self) -> Result<Vec<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 选课管理方法
    async fn create_enrollment(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment>;
    async fn get_enrollment(&self, filter: EnrollmentFilter) -> Result<Lookup<Enrollment>>;
    async fn list_enrollments(&self) -> Result<Vec<Enrollment>>;
    async fn delete_enrollment(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

/// 使用指定数据库配置创建存储（测试与工具使用）
pub async fn create_storage_with(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}
