//! Catalog Adapter - 外部目录 API 客户端实现

mod fake_catalog_client;
mod http_catalog_client;

pub use fake_catalog_client::{FakeCatalogClient, FakeEndpoint};
pub use http_catalog_client::*;
