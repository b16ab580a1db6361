//! 多语言模块
//!
//! 仅支持英文和法文两种语言，语言只影响界面文案

pub mod catalog;
pub mod locale;

pub use catalog::Text;
pub use locale::{
    EnvLanguage, FixedLanguage, LanguageProvider, Locale,
};
