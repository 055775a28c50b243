//! HTTP Handlers

mod ping;
mod reload;
mod view;

pub use ping::*;
pub use reload::*;
pub use view::*;
