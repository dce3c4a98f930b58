#![allow(dead_code)]

use std::sync::Arc;

use rust_helloworld::config::DatabaseConfig;
use rust_helloworld::storage::{Storage, create_storage_with};

/// 每个测试独立的内存数据库
pub async fn memory_storage() -> Arc<dyn Storage> {
    create_storage_with(&DatabaseConfig {
        url: "sqlite::memory:".into(),
        pool_size: 1,
        timeout: 5,
    })
    .await
    .expect("in-memory storage")
}

/// 按服务端相同的方式组装应用
macro_rules! test_app {
    ($storage:expr) => {
        test_app!($storage, rust_helloworld::config::ApiConfig::default())
    };
    ($storage:expr, $api:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::NormalizePath::new(
                    actix_web::middleware::TrailingSlash::Always,
                ))
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler(rust_helloworld::utils::json_error_handler),
                )
                .app_data(
                    actix_web::web::PathConfig::default()
                        .error_handler(rust_helloworld::utils::path_error_handler),
                )
                .app_data(actix_web::web::Data::new($storage.clone()))
                .app_data(actix_web::web::Data::new($api))
                .configure(rust_helloworld::routes::configure_library_routes)
                .configure(rust_helloworld::routes::configure_school_routes)
                .default_service(actix_web::web::to(rust_helloworld::routes::not_found)),
        )
        .await
    };
}
