//! GUI组件模块 - 包含各种UI组件的实现

pub mod app_renderer;
pub use app_renderer::UserAction;
pub mod crumb_rows;

// 重新导出主要组件
pub use app_renderer::AppRenderer;
pub use crumb_rows::{render_crumb_rows, RowAction};
