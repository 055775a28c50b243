//! Shelfview - 图书目录浏览前端

use std::sync::Arc;

use shelfview::application::{CatalogApiPort, CatalogStore, LoadCatalog, SessionManagerPort};
use shelfview::config::{load_config, print_config};
use shelfview::infrastructure::adapters::{HttpCatalogClient, HttpCatalogClientConfig};
use shelfview::infrastructure::http::{AppState, HttpServer, ServerConfig};
use shelfview::infrastructure::memory::InMemorySessionManager;
use shelfview::infrastructure::render::{AssetUrls, HtmlRenderer};
use shelfview::infrastructure::worker::{SessionSweeper, SessionSweeperConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},shelfview={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Shelfview - 图书目录浏览");
    print_config(&config);

    // 创建目录客户端
    let catalog_config = HttpCatalogClientConfig::new(config.catalog.base_url.clone())
        .with_timeout(config.catalog.timeout_secs);
    let catalog: Arc<dyn CatalogApiPort> = Arc::new(HttpCatalogClient::new(catalog_config)?);

    if !catalog.health_check().await {
        tracing::warn!(url = %config.catalog.base_url, "Catalog service is not reachable yet");
    }

    // 创建渲染器和会话注册表
    let renderer = Arc::new(HtmlRenderer::new(
        AssetUrls::new(config.catalog.asset_base_url()),
        config.view.list_cover_limit,
    ));
    let session_manager: Arc<dyn SessionManagerPort> = Arc::new(InMemorySessionManager::new());

    let state = AppState::new(
        session_manager.clone(),
        catalog,
        CatalogStore::new().shared(),
        renderer,
        config.view.sort_key(),
    );

    // 初始加载：各分区独立，失败不阻止启动
    let report = state.load_catalog_handler.handle(LoadCatalog).await;
    if !report.is_complete() {
        tracing::warn!(report = ?report, "Catalog loaded with failures");
    }

    // 启动会话清理
    let sweeper = SessionSweeper::new(
        SessionSweeperConfig {
            idle_timeout_secs: config.session.idle_timeout_secs,
            interval_secs: config.session.sweep_interval_secs,
        },
        session_manager,
    );
    tokio::spawn(sweeper.run());

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
