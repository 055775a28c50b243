//! Application State
//!
//! 所有请求共享：会话注册表、目录服务、目录加载命令

use std::sync::Arc;

use crate::application::{
    // Controller services
    CatalogServices,
    // Command handlers
    LoadCatalogHandler,
    // Ports
    CatalogApiPort, SessionManagerPort, ViewRenderer,
    // Store
    SharedCatalogStore,
};
use crate::domain::search::SortKey;

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub session_manager: Arc<dyn SessionManagerPort>,

    // ========== Shared Data ==========
    pub store: SharedCatalogStore,
    /// 新会话使用的排序
    pub default_sort: SortKey,

    // ========== Command Handlers ==========
    pub load_catalog_handler: LoadCatalogHandler,

    // ========== Controller Services ==========
    pub services: CatalogServices,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        session_manager: Arc<dyn SessionManagerPort>,
        catalog: Arc<dyn CatalogApiPort>,
        store: SharedCatalogStore,
        renderer: Arc<dyn ViewRenderer>,
        default_sort: SortKey,
    ) -> Self {
        Self {
            session_manager,
            store: store.clone(),
            default_sort,
            load_catalog_handler: LoadCatalogHandler::new(catalog.clone(), store.clone()),
            services: CatalogServices::new(catalog, store, renderer),
        }
    }

    pub fn renderer(&self) -> &dyn ViewRenderer {
        self.services.renderer.as_ref()
    }
}
