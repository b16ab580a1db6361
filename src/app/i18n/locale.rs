//! 语言区域与语言提供者

use std::fmt;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// 英文
    #[default]
    En,
    /// 法文
    Fr,
}

impl Locale {
    /// 语言代码
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// 从语言代码解析，支持 `fr`、`fr-CA`、`fr_CA.UTF-8` 等形式
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "fr" => Some(Locale::Fr),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 语言提供者，只用于选择界面文案的语言
pub trait LanguageProvider {
    /// 当前语言
    fn current_locale(&self) -> Locale;
}

/// 固定语言
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLanguage(pub Locale);

impl LanguageProvider for FixedLanguage {
    fn current_locale(&self) -> Locale {
        self.0
    }
}

/// 从环境变量（`LC_ALL`、`LC_MESSAGES`、`LANG`）读取语言，默认英文
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvLanguage;

impl EnvLanguage {
    const VARS: [&'static str; 3] =
        ["LC_ALL", "LC_MESSAGES", "LANG"];
}

impl LanguageProvider for EnvLanguage {
    fn current_locale(&self) -> Locale {
        Self::VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .and_then(|value| Locale::from_code(&value))
            .unwrap_or_default()
    }
}
