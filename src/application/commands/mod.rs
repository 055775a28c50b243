//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：目录加载是唯一的写操作（整体替换）

mod catalog_commands;

pub mod handlers;

pub use catalog_commands::*;
