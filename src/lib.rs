//! 前置面包屑配置库
//!
//! 管理插入在自动生成的面包屑之前的一组前置面包屑（英文/法文名称与链接），
//! 以及是否在首页显示当前页面面包屑的开关。
//!
//! ## 功能特性
//!
//! - 可增删行的设置表单（会话内保留未保存的输入）
//! - 保存前验证全部行并累积字段错误
//! - 基于 TOML 的配置存储，整体原子替换
//! - 英文 / 法文界面文案
//!
//! ## 使用示例
//!
//! ```
//! use leading_crumbs::app::config::manager::MemoryConfigStore;
//! use leading_crumbs::{
//!     BreadcrumbSettingsForm, CrumbRow, FixedLanguage, FormSubmission, Locale,
//! };
//!
//! let mut form = BreadcrumbSettingsForm::new(
//!     MemoryConfigStore::new(),
//!     FixedLanguage(Locale::En),
//! );
//! let session = form.open_session()?;
//! let submission = FormSubmission::new(
//!     true,
//!     vec![CrumbRow::filled(
//!         "Home",
//!         "https://example.org",
//!         "Accueil",
//!         "https://example.org/fr",
//!     )],
//! );
//! let outcome = form.submit(session, submission)?;
//! assert!(outcome.is_saved());
//! # Ok::<(), leading_crumbs::BreadcrumbError>(())
//! ```

pub mod app;
pub mod core;
pub mod ui;
pub mod utils;

// 重新导出主要功能
pub use crate::app::config::types::{
    BreadcrumbEntry, BreadcrumbSettings, CrumbField, CrumbRow,
    EnglishCrumb, FrenchCrumb, SETTINGS_NAME,
};
pub use crate::app::config::validator::{FieldError, FieldErrorKind};
pub use crate::app::error::types::{BreadcrumbError, Result};
pub use crate::app::i18n::{
    EnvLanguage, FixedLanguage, LanguageProvider, Locale,
};
pub use crate::core::form::{
    BreadcrumbSettingsForm, FormSession, FormSubmission,
    FormView, SettingsOverview, SubmitOutcome,
};
