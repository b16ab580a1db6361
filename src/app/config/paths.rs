//! 配置路径管理模块
//! 负责确定配置文档所在的目录

use crate::app::error::types::{BreadcrumbError, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// 平台配置目录下使用的子目录名
const APP_DIR_NAME: &str = "leading-crumbs";

/// 配置路径管理器
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    config_dir: PathBuf,
}

impl ConfigPaths {
    /// 创建新的配置路径管理器
    ///
    /// # 参数
    /// * `document_name` - 配置文档名称，用于查找已存在的配置文件
    ///
    /// # 示例
    /// ```
    /// use leading_crumbs::app::config::paths::ConfigPaths;
    /// let paths = ConfigPaths::new("pre_breadcrumbs.settings").unwrap();
    /// assert!(paths
    ///     .document_file("pre_breadcrumbs.settings")
    ///     .to_string_lossy()
    ///     .ends_with("pre_breadcrumbs.settings.toml"));
    /// ```
    pub fn new(document_name: &str) -> Result<Self> {
        let config_dir =
            Self::locate_config_dir(document_name)?;

        Ok(Self { config_dir })
    }

    /// 使用指定目录（相对路径会被转换为绝对路径）
    pub fn with_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let config_dir = dir
            .as_ref()
            .absolutize()
            .map_err(|e| {
                BreadcrumbError::config(format!(
                    "Failed to resolve config directory {:?}: {}",
                    dir.as_ref(),
                    e
                ))
            })?
            .into_owned();

        Ok(Self { config_dir })
    }

    /// 获取配置目录
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// 获取指定配置文档的文件路径
    pub fn document_file(&self, name: &str) -> PathBuf {
        self.config_dir.join(format!("{name}.toml"))
    }

    /// 确保配置目录存在
    pub fn ensure_config_dir_exists(&self) -> Result<()> {
        if !self.config_dir.exists() {
            std::fs::create_dir_all(&self.config_dir)?;
            tracing::info!(
                "Created config directory: {:?}",
                self.config_dir
            );
        }
        Ok(())
    }

    /// 查找配置目录
    ///
    /// 依次检查工作目录、可执行文件目录，均不存在配置文件时
    /// 使用平台配置目录
    fn locate_config_dir(
        document_name: &str,
    ) -> Result<PathBuf> {
        let file_name = format!("{document_name}.toml");

        let current_dir = std::env::current_dir()
            .map_err(|e| BreadcrumbError::config(
                format!("Failed to get current directory: {}", e)
            ))?;

        if current_dir.join(&file_name).exists() {
            tracing::info!("Using config directory: {:?}", current_dir);
            return Ok(current_dir);
        }

        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                if exe_dir.join(&file_name).exists() {
                    tracing::info!("Found config file in executable directory: {:?}", exe_dir);
                    return Ok(exe_dir.to_path_buf());
                }
            }
        }

        if let Some(platform_dir) = dirs::config_dir() {
            let app_dir = platform_dir.join(APP_DIR_NAME);
            tracing::info!("Using platform config directory: {:?}", app_dir);
            return Ok(app_dir);
        }

        tracing::info!("Using config directory: {:?}", current_dir);
        Ok(current_dir)
    }
}
