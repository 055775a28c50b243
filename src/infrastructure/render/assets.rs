//! 封面与下载链接

use crate::domain::catalog::{BookId, FileId};

/// 目录服务的资源地址前缀
#[derive(Debug, Clone)]
pub struct AssetUrls {
    base: String,
}

impl AssetUrls {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn cover(&self, id: BookId) -> String {
        format!("{}/api/cover/{}", self.base, id)
    }

    pub fn download(&self, id: FileId) -> String {
        format!("{}/api/download/{}", self.base, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let assets = AssetUrls::new("http://books.local/");
        assert_eq!(assets.cover(BookId::new(3)), "http://books.local/api/cover/3");
        assert_eq!(
            assets.download(FileId::new(9)),
            "http://books.local/api/download/9"
        );
    }

    #[test]
    fn test_empty_base_gives_relative_urls() {
        assert_eq!(AssetUrls::new("").cover(BookId::new(1)), "/api/cover/1");
    }
}
