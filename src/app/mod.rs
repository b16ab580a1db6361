//! 应用层：配置、错误、日志与多语言支持

pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
