//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "SHELFVIEW";

/// 会话超时与清理间隔上限（10 年）
const MAX_SESSION_SECS: u64 = 10 * 365 * 24 * 3600;

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `SHELFVIEW_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `SHELFVIEW_SERVER__PORT=8080`
/// - `SHELFVIEW_CATALOG__BASE_URL=http://library:5001`
/// - `SHELFVIEW_CATALOG__TIMEOUT_SECS=10`
/// - `SHELFVIEW_VIEW__DEFAULT_SORT=author-asc`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("catalog.base_url", "http://localhost:5001")?
        .set_default("catalog.timeout_secs", 0)?
        .set_default("view.default_sort", "title-asc")?
        .set_default("view.list_cover_limit", 4)?
        .set_default("session.idle_timeout_secs", 86400)?
        .set_default("session.sweep_interval_secs", 3600)?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: SHELFVIEW_CATALOG__BASE_URL=http://library:5001
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.catalog.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Catalog base URL cannot be empty".to_string(),
        ));
    }

    if config.view.list_cover_limit == 0 {
        return Err(ConfigError::ValidationError(
            "List cover limit must be at least 1".to_string(),
        ));
    }

    if !config.view.sort_key().is_known() {
        return Err(ConfigError::ValidationError(format!(
            "Unknown default sort: {}",
            config.view.default_sort
        )));
    }

    if config.session.idle_timeout_secs == 0 || config.session.sweep_interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Session timeout and sweep interval must be greater than 0".to_string(),
        ));
    }

    if config.session.idle_timeout_secs > MAX_SESSION_SECS
        || config.session.sweep_interval_secs > MAX_SESSION_SECS
    {
        return Err(ConfigError::ValidationError(format!(
            "Session timeout and sweep interval must not exceed {} seconds",
            MAX_SESSION_SECS
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Catalog URL: {}", config.catalog.base_url);
    tracing::info!("Asset Base URL: {}", config.catalog.asset_base_url());
    if config.catalog.timeout_secs > 0 {
        tracing::info!("Catalog Timeout: {}s", config.catalog.timeout_secs);
    } else {
        tracing::info!("Catalog Timeout: none");
    }
    tracing::info!("Default Sort: {}", config.view.default_sort);
    tracing::info!("List Cover Limit: {}", config.view.list_cover_limit);
    tracing::info!("Session Idle Timeout: {}s", config.session.idle_timeout_secs);
    tracing::info!("Session Sweep Interval: {}s", config.session.sweep_interval_secs);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
