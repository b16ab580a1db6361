use std::io;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum BreadcrumbError {
    /// 文件读写错误
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 配置错误
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// 配置文档解析错误
    #[error("Failed to parse settings document: {0}")]
    Parse(#[from] toml::de::Error),

    /// 配置文档序列化错误
    #[error("Failed to serialize settings document: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// GUI 相关错误
    #[error("GUI error: {0}")]
    Gui(String),
}

impl From<anyhow::Error> for BreadcrumbError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(io_error) =
            err.downcast_ref::<std::io::Error>()
        {
            return BreadcrumbError::Io(
                std::io::Error::new(
                    io_error.kind(),
                    err.to_string(),
                ),
            );
        }
        BreadcrumbError::config(err.to_string())
    }
}

impl BreadcrumbError {
    /// 创建配置错误
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// 结果类型别名
pub type Result<T> =
    std::result::Result<T, BreadcrumbError>;
pub type AppError = BreadcrumbError;
