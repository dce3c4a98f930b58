//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod authors;
mod books;
mod courses;
mod enrollments;
mod lookup;
mod students;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{AppError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    /// 连接数据库并执行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| AppError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + 外键约束）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AppError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            // 级联删除依赖外键约束
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size.max(1))
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| AppError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| AppError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AppError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite:, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 作者模块
    async fn create_author(&self, author: CreateAuthorRequest) -> Result<Author> {
        self.create_author_impl(author).await
    }

    async fn get_author(&self, filter: AuthorFilter) -> Result<Lookup<Author>> {
        self.get_author_impl(filter).await
    }

    async fn list_authors(&self) -> Result<Vec<Author>> {
        self.list_authors_impl().await
    }

    // 图书模块
    async fn create_book(&self, book: CreateBookRequest) -> Result<Book> {
        self.create_book_impl(book).await
    }

    async fn get_book(&self, filter: BookFilter) -> Result<Lookup<Book>> {
        self.get_book_impl(filter).await
    }

    async fn list_books(&self) -> Result<Vec<Book>> {
        self.list_books_impl().await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student(&self, filter: StudentFilter) -> Result<Lookup<Student>> {
        self.get_student_impl(filter).await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn save_student(&self, student: Student) -> Result<Student> {
        self.save_student_impl(student).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course(&self, filter: CourseFilter) -> Result<Lookup<Course>> {
        self.get_course_impl(filter).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    // 选课模块
    async fn create_enrollment(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment> {
        self.create_enrollment_impl(enrollment).await
    }

    async fn get_enrollment(&self, filter: EnrollmentFilter) -> Result<Lookup<Enrollment>> {
        self.get_enrollment_impl(filter).await
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>> {
        self.list_enrollments_impl().await
    }

    async fn delete_enrollment(&self, id: i64) -> Result<bool> {
        self.delete_enrollment_impl(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite::memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("data/app.db").unwrap(),
            "sqlite://data/app.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/db").unwrap(),
            "postgres://u:p@localhost/db"
        );
        assert!(SeaOrmStorage::build_database_url("redis://localhost").is_err());
    }
}
