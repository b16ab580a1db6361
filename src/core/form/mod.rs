//! 面包屑设置表单
//!
//! - `session`：编辑会话（行数、未保存输入、字段错误）
//! - `view`：由配置和会话生成的页面视图
//! - `controller`：加载、增删行、验证与保存
//! - `summary`：保存后的确认信息
//! - `actions`：命令行使用的非交互式操作

pub mod actions;
pub mod controller;
pub mod session;
pub mod submission;
pub mod summary;
pub mod view;

pub use actions::SettingsOverview;
pub use controller::{BreadcrumbSettingsForm, SubmitOutcome, FORM_ID};
pub use session::FormSession;
pub use submission::FormSubmission;
pub use view::{CrumbFieldset, FormView, RowEditor, TextField};
