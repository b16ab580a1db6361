//! 表单视图模型
//!
//! 由已保存的配置和编辑会话生成，界面层只负责把它画出来并回写编辑的值

use super::session::FormSession;
use super::submission::FormSubmission;
use crate::app::config::types::{
    BreadcrumbSettings, CrumbField, CrumbRow,
};
use crate::app::i18n::catalog::{field_error, field_title};
use crate::app::i18n::{Locale, Text};

/// 面包屑字段组的包裹元素 id，增删行时只重建该区域
pub const FIELDSET_WRAPPER_ID: &str = "crumbs-fieldset-wrapper";

/// 整个设置页面
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    /// 说明文字
    pub description: String,
    /// 首页面包屑开关
    pub front_page_crumb: CheckboxField,
    /// 面包屑行区域
    pub crumbs: CrumbFieldset,
    /// 保存按钮文字
    pub save_label: String,
}

/// 复选框
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxField {
    pub title: String,
    pub value: bool,
}

/// 面包屑行区域
#[derive(Debug, Clone, PartialEq)]
pub struct CrumbFieldset {
    /// 包裹元素 id
    pub wrapper_id: &'static str,
    /// 标题
    pub title: String,
    /// 各行编辑器
    pub rows: Vec<RowEditor>,
    /// “增加一行”按钮文字
    pub add_label: String,
    /// “删除一行”按钮文字，只有一行时为 `None`
    pub remove_label: Option<String>,
}

/// 单行编辑器
#[derive(Debug, Clone, PartialEq)]
pub struct RowEditor {
    /// 行下标
    pub index: usize,
    /// 按显示顺序排列的四个字段
    pub fields: Vec<TextField>,
}

/// 文本字段
#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    pub field: CrumbField,
    /// 表单树中的名称
    pub name: String,
    pub title: String,
    pub value: String,
    /// 验证错误
    pub error: Option<String>,
}

impl FormView {
    /// 生成整个页面
    pub fn render(
        settings: &BreadcrumbSettings,
        session: &FormSession,
        locale: Locale,
    ) -> Self {
        let front_page_crumb = session
            .pending()
            .map(|input| input.front_page_crumb)
            .unwrap_or_else(|| {
                settings.front_page_crumb_enabled()
            });

        Self {
            description: Text::Description
                .in_locale(locale)
                .to_string(),
            front_page_crumb: CheckboxField {
                title: Text::FrontPageCrumb
                    .in_locale(locale)
                    .to_string(),
                value: front_page_crumb,
            },
            crumbs: CrumbFieldset::render(
                settings, session, locale,
            ),
            save_label: Text::Save.in_locale(locale).to_string(),
        }
    }

    /// 将（可能已编辑的）页面转换回提交数据
    pub fn to_submission(&self) -> FormSubmission {
        FormSubmission::new(
            self.front_page_crumb.value,
            self.crumbs.to_rows(),
        )
    }

    /// 是否有字段带错误
    pub fn has_errors(&self) -> bool {
        self.crumbs
            .rows
            .iter()
            .flat_map(|row| &row.fields)
            .any(|field| field.error.is_some())
    }

    /// 按表单树名称查找字段
    pub fn field(&self, name: &str) -> Option<&TextField> {
        self.crumbs
            .rows
            .iter()
            .flat_map(|row| &row.fields)
            .find(|field| field.name == name)
    }
}

impl CrumbFieldset {
    /// 只生成面包屑行区域
    pub fn render(
        settings: &BreadcrumbSettings,
        session: &FormSession,
        locale: Locale,
    ) -> Self {
        let rows = (0..session.row_count())
            .map(|index| {
                RowEditor::render(index, settings, session, locale)
            })
            .collect();

        Self {
            wrapper_id: FIELDSET_WRAPPER_ID,
            title: Text::FieldsetTitle
                .in_locale(locale)
                .to_string(),
            rows,
            add_label: Text::AddOne.in_locale(locale).to_string(),
            remove_label: session.can_remove().then(|| {
                Text::RemoveOne.in_locale(locale).to_string()
            }),
        }
    }

    /// 行数
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 是否显示“删除一行”
    pub fn can_remove(&self) -> bool {
        self.remove_label.is_some()
    }

    /// 将各行转换为提交数据，四个字段均视为存在
    pub fn to_rows(&self) -> Vec<CrumbRow> {
        self.rows.iter().map(RowEditor::to_row).collect()
    }
}

impl RowEditor {
    fn render(
        index: usize,
        settings: &BreadcrumbSettings,
        session: &FormSession,
        locale: Locale,
    ) -> Self {
        let pending_row = session
            .pending()
            .and_then(|input| input.rows.get(index));

        let fields = CrumbField::ALL
            .iter()
            .map(|&field| {
                let value = pending_row
                    .and_then(|row| row.get(field))
                    .or_else(|| settings.value_at(index, field))
                    .unwrap_or_default()
                    .to_string();
                let error = session
                    .errors()
                    .iter()
                    .find(|e| e.row == index && e.field == field)
                    .map(|e| field_error(locale, e.kind).to_string());

                TextField {
                    field,
                    name: field.tree_name(index),
                    title: field_title(locale, field, index),
                    value,
                    error,
                }
            })
            .collect();

        Self { index, fields }
    }

    /// 转换为提交行
    pub fn to_row(&self) -> CrumbRow {
        let mut row = CrumbRow::default();
        for field in &self.fields {
            row.set(field.field, field.value.clone());
        }
        row
    }

    /// 按字段取可编辑的值
    pub fn value_mut(
        &mut self,
        field: CrumbField,
    ) -> Option<&mut String> {
        self.fields
            .iter_mut()
            .find(|f| f.field == field)
            .map(|f| &mut f.value)
    }
}
