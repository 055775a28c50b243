//! Catalog Commands

/// 加载（或重新加载）目录
///
/// 书目与两份性别名单分别获取，任一失败不影响其他分区。
#[derive(Debug, Clone, Default)]
pub struct LoadCatalog;
