//! HelloWorld - 教学用 CRUD 后端服务
//!
//! 基于 Actix Web 与 SeaORM 构建：图书馆（作者、图书）与学校（学生、课程、选课）两组数据。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义与单条查找结果
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `serializers`: 请求校验与字段错误
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod serializers;
pub mod services;
pub mod storage;
pub mod utils;
