use tokio::signal;
use tracing::{error, warn};

/// 等待 Ctrl+C，监听失败时直接返回以触发关闭
pub async fn listen_for_shutdown() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        return;
    }
    warn!("Shutdown signal received, initiating graceful shutdown...");
}
