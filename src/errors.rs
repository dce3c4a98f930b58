//! 统一错误处理模块
//!
//! 存储层只产生下列错误；服务层据此决定响应状态码。

use actix_web::http::StatusCode;
use std::fmt;

/// 定义错误类型的宏
///
/// 每个变体携带：错误代码、类型名称、对应的 HTTP 状态码。
/// 同时生成 snake_case 的便捷构造函数。
macro_rules! define_app_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $status:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum AppError {
            $($variant(String),)*
        }

        impl AppError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(AppError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AppError::$variant(_) => $type_name,)*
                }
            }

            /// 作为响应返回时的状态码
            pub fn status_code(&self) -> StatusCode {
                match self {
                    $(AppError::$variant(_) => StatusCode::$status,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(AppError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl AppError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AppError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_app_errors! {
    DatabaseConfig("E001", "Database Configuration Error", INTERNAL_SERVER_ERROR),
    DatabaseConnection("E002", "Database Connection Error", SERVICE_UNAVAILABLE),
    DatabaseOperation("E003", "Database Operation Error", INTERNAL_SERVER_ERROR),
    // 写入时记录已被删除
    NotFound("E004", "Resource Not Found", NOT_FOUND),
    // 按条件查找唯一记录却命中多条
    MultipleObjectsReturned("E005", "Multiple Objects Returned", INTERNAL_SERVER_ERROR),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code(), self.error_type(), self.message())
    }
}

impl std::error::Error for AppError {}

pub type Result<T> = std::result::Result<T, AppError>;
