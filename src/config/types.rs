//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::domain::search::SortKey;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 目录服务配置
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// 视图配置
    #[serde(default)]
    pub view: ViewConfig,

    /// 会话配置
    #[serde(default)]
    pub session: SessionConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 目录服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// 目录 API 基础 URL
    #[serde(default = "default_catalog_url")]
    pub base_url: String,

    /// 封面/下载链接的 URL 前缀，未设置时使用 base_url
    #[serde(default)]
    pub asset_base_url: Option<String>,

    /// 请求超时时间（秒），0 表示不设超时
    #[serde(default)]
    pub timeout_secs: u64,
}

fn default_catalog_url() -> String {
    "http://localhost:5001".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_catalog_url(),
            asset_base_url: None,
            timeout_secs: 0,
        }
    }
}

impl CatalogConfig {
    /// 浏览器访问封面/下载使用的前缀
    pub fn asset_base_url(&self) -> &str {
        self.asset_base_url.as_deref().unwrap_or(&self.base_url)
    }
}

/// 视图配置
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    /// 新会话的排序方式
    #[serde(default = "default_sort")]
    pub default_sort: String,

    /// 作者/系列条目最多显示的封面数
    #[serde(default = "default_list_cover_limit")]
    pub list_cover_limit: usize,
}

fn default_sort() -> String {
    "title-asc".to_string()
}

fn default_list_cover_limit() -> usize {
    4
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            list_cover_limit: default_list_cover_limit(),
        }
    }
}

impl ViewConfig {
    pub fn sort_key(&self) -> SortKey {
        SortKey::parse(&self.default_sort)
    }
}

/// 会话配置
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// 空闲超时（秒）
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    /// 清理间隔（秒）
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

fn default_idle_timeout() -> u64 {
    86400 // 24 小时
}

fn default_sweep_interval() -> u64 {
    3600 // 1 小时
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: default_idle_timeout(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
