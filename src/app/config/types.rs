use serde::{Deserialize, Serialize};
use std::fmt;

/// 面包屑配置文档的固定名称
pub const SETTINGS_NAME: &str = "pre_breadcrumbs.settings";

/// 表单中面包屑字段组的键
pub const FIELDSET_KEY: &str = "pre_breadcrumbs";

/// 英文面包屑条目（配置文档中 `en` 数组的一项）
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct EnglishCrumb {
    /// 面包屑名称
    #[serde(
        rename = "en_crumb",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
    /// 面包屑链接
    #[serde(
        rename = "en_url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
}

/// 法文面包屑条目（配置文档中 `fr` 数组的一项）
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct FrenchCrumb {
    /// 面包屑名称
    #[serde(
        rename = "fr_crumb",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
    /// 面包屑链接
    #[serde(
        rename = "fr_url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
}

/// 名称 + 链接形式的面包屑
pub trait CrumbLink {
    /// 面包屑名称
    fn label(&self) -> Option<&str>;
    /// 面包屑链接
    fn url(&self) -> Option<&str>;

    /// 按插入顺序返回非空字段值
    fn filled_values(&self) -> Vec<&str> {
        [self.label(), self.url()]
            .into_iter()
            .flatten()
            .filter(|value| !value.is_empty())
            .collect()
    }
}

impl CrumbLink for EnglishCrumb {
    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl CrumbLink for FrenchCrumb {
    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// 持久化的面包屑配置文档
///
/// `en` 与 `fr` 按下标一一对应，但作为两个独立数组存储，
/// 读取时容忍长度不一致。
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct BreadcrumbSettings {
    /// 是否在首页显示当前页面的面包屑；缺省视为开启
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_page_crumb: Option<bool>,
    /// 英文面包屑
    #[serde(default)]
    pub en: Vec<EnglishCrumb>,
    /// 法文面包屑
    #[serde(default)]
    pub fr: Vec<FrenchCrumb>,
}

impl BreadcrumbSettings {
    /// 首页面包屑开关，未设置时为 `true`
    pub fn front_page_crumb_enabled(&self) -> bool {
        self.front_page_crumb.unwrap_or(true)
    }

    /// 统计名称非空的英文条目数量
    pub fn named_english_count(&self) -> usize {
        self.en
            .iter()
            .filter(|crumb| {
                crumb
                    .label
                    .as_deref()
                    .is_some_and(|label| !label.is_empty())
            })
            .count()
    }

    /// 读取指定行、指定字段的已保存值
    pub fn value_at(
        &self,
        row: usize,
        field: CrumbField,
    ) -> Option<&str> {
        match field {
            CrumbField::EnCrumb => self
                .en
                .get(row)
                .and_then(|c| c.label.as_deref()),
            CrumbField::EnUrl => {
                self.en.get(row).and_then(|c| c.url.as_deref())
            }
            CrumbField::FrCrumb => self
                .fr
                .get(row)
                .and_then(|c| c.label.as_deref()),
            CrumbField::FrUrl => {
                self.fr.get(row).and_then(|c| c.url.as_deref())
            }
        }
    }

    /// 将两个语言数组合并为完整的行记录，较短一侧以空字符串补齐
    pub fn entries(&self) -> Vec<BreadcrumbEntry> {
        let len = self.en.len().max(self.fr.len());
        (0..len)
            .map(|row| {
                let value = |field| {
                    self.value_at(row, field)
                        .unwrap_or_default()
                        .to_string()
                };
                BreadcrumbEntry {
                    english_label: value(CrumbField::EnCrumb),
                    english_url: value(CrumbField::EnUrl),
                    french_label: value(CrumbField::FrCrumb),
                    french_url: value(CrumbField::FrUrl),
                }
            })
            .collect()
    }
}

/// 一行完整的面包屑（英文名称/链接 + 法文名称/链接）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreadcrumbEntry {
    pub english_label: String,
    pub english_url: String,
    pub french_label: String,
    pub french_url: String,
}

/// 行内四个可编辑字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrumbField {
    /// 英文名称
    EnCrumb,
    /// 英文链接
    EnUrl,
    /// 法文名称
    FrCrumb,
    /// 法文链接
    FrUrl,
}

impl CrumbField {
    /// 按表单显示顺序排列的全部字段
    pub const ALL: [CrumbField; 4] = [
        CrumbField::EnCrumb,
        CrumbField::EnUrl,
        CrumbField::FrCrumb,
        CrumbField::FrUrl,
    ];

    /// 表单提交中使用的字段键
    pub fn key(self) -> &'static str {
        match self {
            CrumbField::EnCrumb => "en_crumb",
            CrumbField::EnUrl => "en_url",
            CrumbField::FrCrumb => "fr_crumb",
            CrumbField::FrUrl => "fr_url",
        }
    }

    /// 表单树中的完整字段名，如 `pre_breadcrumbs[0][en_url]`
    pub fn tree_name(self, row: usize) -> String {
        format!("{FIELDSET_KEY}[{row}][{}]", self.key())
    }
}

impl fmt::Display for CrumbField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 提交的一行数据，字段缺失时为 `None`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrumbRow {
    pub en_crumb: Option<String>,
    pub en_url: Option<String>,
    pub fr_crumb: Option<String>,
    pub fr_url: Option<String>,
}

impl CrumbRow {
    /// 四个字段均存在的行
    pub fn filled(
        en_crumb: impl Into<String>,
        en_url: impl Into<String>,
        fr_crumb: impl Into<String>,
        fr_url: impl Into<String>,
    ) -> Self {
        Self {
            en_crumb: Some(en_crumb.into()),
            en_url: Some(en_url.into()),
            fr_crumb: Some(fr_crumb.into()),
            fr_url: Some(fr_url.into()),
        }
    }

    /// 读取字段
    pub fn get(&self, field: CrumbField) -> Option<&str> {
        match field {
            CrumbField::EnCrumb => self.en_crumb.as_deref(),
            CrumbField::EnUrl => self.en_url.as_deref(),
            CrumbField::FrCrumb => self.fr_crumb.as_deref(),
            CrumbField::FrUrl => self.fr_url.as_deref(),
        }
    }

    /// 写入字段
    pub fn set(
        &mut self,
        field: CrumbField,
        value: impl Into<String>,
    ) {
        let slot = match field {
            CrumbField::EnCrumb => &mut self.en_crumb,
            CrumbField::EnUrl => &mut self.en_url,
            CrumbField::FrCrumb => &mut self.fr_crumb,
            CrumbField::FrUrl => &mut self.fr_url,
        };
        *slot = Some(value.into());
    }

    /// 四个字段均缺失或为空
    pub fn is_blank(&self) -> bool {
        CrumbField::ALL
            .iter()
            .all(|&field| self.get(field).unwrap_or_default().is_empty())
    }

    /// 拆分为英文、法文两部分
    pub fn split(&self) -> (EnglishCrumb, FrenchCrumb) {
        (
            EnglishCrumb {
                label: self.en_crumb.clone(),
                url: self.en_url.clone(),
            },
            FrenchCrumb {
                label: self.fr_crumb.clone(),
                url: self.fr_url.clone(),
            },
        )
    }
}

