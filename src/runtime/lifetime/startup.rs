use crate::errors::Result;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 记录启动时的数据概况
async fn log_dataset_summary(storage: &Arc<dyn Storage>) {
    let authors = storage.list_authors().await.map(|v| v.len());
    let books = storage.list_books().await.map(|v| v.len());
    let students = storage.list_students().await.map(|v| v.len());

    match (authors, books, students) {
        (Ok(authors), Ok(books), Ok(students)) => debug!(
            "Dataset loaded: {} author(s), {} book(s), {} student(s)",
            authors, books, students
        ),
        _ => warn!("Failed to summarize dataset, continuing startup"),
    }
}

/// 准备服务器启动的上下文
/// 连接数据库并完成迁移
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    log_dataset_summary(&storage).await;

    Ok(StartupContext { storage })
}
