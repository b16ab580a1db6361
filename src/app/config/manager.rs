//! 配置存储模块
//! 负责按名称读取、编辑和原子替换配置文档

use anyhow::Context;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

use super::paths::ConfigPaths;
use super::types::{
    BreadcrumbSettings, EnglishCrumb, FrenchCrumb,
};
use crate::app::error::types::{BreadcrumbError, Result};

/// 配置存储
///
/// 每个文档按名称整体读写，多个会话并发保存时后写入者覆盖先写入者。
pub trait ConfigStore {
    /// 读取文档，不存在时返回 `None`
    fn get(
        &self,
        name: &str,
    ) -> Result<Option<BreadcrumbSettings>>;

    /// 原子地替换整个文档
    fn replace(
        &mut self,
        name: &str,
        settings: &BreadcrumbSettings,
    ) -> Result<()>;

    /// 获取可编辑的文档句柄，文档不存在时从默认值开始
    fn get_editable(
        &mut self,
        name: &str,
    ) -> Result<EditableSettings<'_, Self>> {
        let settings = self.get(name)?.unwrap_or_default();
        Ok(EditableSettings {
            store: self,
            name: name.to_string(),
            settings,
        })
    }
}

/// 可编辑的配置文档句柄，调用 [`EditableSettings::save`] 后才会写回存储
pub struct EditableSettings<'a, S: ConfigStore + ?Sized> {
    store: &'a mut S,
    name: String,
    settings: BreadcrumbSettings,
}

impl<S: ConfigStore + ?Sized> EditableSettings<'_, S> {
    /// 当前（尚未保存的）文档内容
    pub fn settings(&self) -> &BreadcrumbSettings {
        &self.settings
    }

    /// 设置英文面包屑
    pub fn set_english(
        &mut self,
        entries: Vec<EnglishCrumb>,
    ) -> &mut Self {
        self.settings.en = entries;
        self
    }

    /// 设置法文面包屑
    pub fn set_french(
        &mut self,
        entries: Vec<FrenchCrumb>,
    ) -> &mut Self {
        self.settings.fr = entries;
        self
    }

    /// 设置首页面包屑开关
    pub fn set_front_page_crumb(
        &mut self,
        enabled: bool,
    ) -> &mut Self {
        self.settings.front_page_crumb = Some(enabled);
        self
    }

    /// 保存文档
    pub fn save(self) -> Result<BreadcrumbSettings> {
        self.store.replace(&self.name, &self.settings)?;
        Ok(self.settings)
    }
}

/// 基于 TOML 文件的配置存储，每个文档对应目录中的一个 `<name>.toml`
#[derive(Debug, Clone)]
pub struct TomlConfigStore {
    config_paths: ConfigPaths,
}

impl TomlConfigStore {
    /// 创建新的配置存储
    ///
    /// # 示例
    /// ```no_run
    /// use leading_crumbs::app::config::manager::TomlConfigStore;
    /// use leading_crumbs::app::config::paths::ConfigPaths;
    /// let paths = ConfigPaths::new("pre_breadcrumbs.settings")?;
    /// let store = TomlConfigStore::new(paths);
    /// # Ok::<(), leading_crumbs::BreadcrumbError>(())
    /// ```
    pub fn new(config_paths: ConfigPaths) -> Self {
        Self { config_paths }
    }

    /// 指定文档的文件路径
    pub fn document_file(&self, name: &str) -> PathBuf {
        self.config_paths.document_file(name)
    }
}

impl ConfigStore for TomlConfigStore {
    fn get(
        &self,
        name: &str,
    ) -> Result<Option<BreadcrumbSettings>> {
        let config_file = self.document_file(name);

        if !config_file.exists() {
            tracing::info!(
                "Settings document not found, using defaults: {:?}",
                config_file
            );
            return Ok(None);
        }

        let content = fs::read_to_string(&config_file)
            .with_context(|| {
                format!(
                    "Failed to read settings document: {:?}",
                    config_file
                )
            })?;

        let settings: BreadcrumbSettings =
            toml::from_str(&content).map_err(|e| {
                tracing::error!(
                    "Failed to parse settings document {:?}: {}",
                    config_file,
                    e
                );
                BreadcrumbError::Parse(e)
            })?;

        tracing::info!(
            "Settings document loaded: {:?}",
            config_file
        );
        Ok(Some(settings))
    }

    fn replace(
        &mut self,
        name: &str,
        settings: &BreadcrumbSettings,
    ) -> Result<()> {
        // 确保配置目录存在
        self.config_paths.ensure_config_dir_exists()?;

        let content = toml::to_string_pretty(settings)?;

        // 每次写入使用独立的临时文件，再整体替换目标文件
        let config_file = self.document_file(name);
        let mut temp_file =
            NamedTempFile::new_in(self.config_paths.config_dir())
                .context("Failed to create temporary settings file")?;
        temp_file.write_all(content.as_bytes()).with_context(|| {
            format!(
                "Failed to write settings document: {:?}",
                temp_file.path()
            )
        })?;
        temp_file
            .persist(&config_file)
            .map_err(|e| e.error)
            .with_context(|| {
                format!(
                    "Failed to replace settings document: {:?}",
                    config_file
                )
            })?;

        tracing::info!(
            "Settings document saved: {:?}",
            config_file
        );
        Ok(())
    }
}

/// 内存配置存储
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    documents: HashMap<String, BreadcrumbSettings>,
}

impl MemoryConfigStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 以一个已有文档初始化存储
    pub fn with_document(
        name: &str,
        settings: BreadcrumbSettings,
    ) -> Self {
        let mut store = Self::new();
        store.documents.insert(name.to_string(), settings);
        store
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(
        &self,
        name: &str,
    ) -> Result<Option<BreadcrumbSettings>> {
        Ok(self.documents.get(name).cloned())
    }

    fn replace(
        &mut self,
        name: &str,
        settings: &BreadcrumbSettings,
    ) -> Result<()> {
        self.documents
            .insert(name.to_string(), settings.clone());
        Ok(())
    }
}
