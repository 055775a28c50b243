//! Navigation/Interaction Controller
//!
//! 显式的视图状态（ViewState）由控制器持有，
//! 事件驱动过滤/排序与渲染，结果挂载到 Page。

mod events;
mod page;
mod services;
mod state;
mod view_controller;

pub use events::ViewEvent;
pub use page::{MountPoint, Page};
pub use services::CatalogServices;
pub use state::{ListKind, Screen, ViewState};
pub use view_controller::ViewController;
