//! 表单编辑会话
//!
//! 保存一次编辑过程中的行数、未保存输入和上一次提交的字段错误。
//! 会话在保存成功后丢弃，下一次打开表单时重新从配置计算行数。

use super::submission::FormSubmission;
use crate::app::config::types::BreadcrumbSettings;
use crate::app::config::validator::FieldError;

/// 最少保留的行数
pub const MIN_ROWS: usize = 1;

/// 表单编辑会话
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    row_count: usize,
    pending: Option<FormSubmission>,
    errors: Vec<FieldError>,
}

impl FormSession {
    /// 以指定行数创建会话，行数至少为 1
    pub fn new(row_count: usize) -> Self {
        Self {
            row_count: row_count.max(MIN_ROWS),
            pending: None,
            errors: Vec::new(),
        }
    }

    /// 根据已保存的配置创建会话
    pub fn from_settings(settings: &BreadcrumbSettings) -> Self {
        let row_count = derive_row_count(settings);
        tracing::debug!(
            "Derived {} breadcrumb row(s) from settings",
            row_count
        );
        Self::new(row_count)
    }

    /// 当前行数
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// 增加一行
    pub fn add_row(&mut self) -> usize {
        self.row_count += 1;
        tracing::debug!("Added row, now {}", self.row_count);
        self.row_count
    }

    /// 删除一行，只剩一行时不做任何事
    pub fn remove_row(&mut self) -> usize {
        if self.row_count > MIN_ROWS {
            self.row_count -= 1;
            tracing::debug!(
                "Removed row, now {}",
                self.row_count
            );
        }
        self.row_count
    }

    /// 是否允许删除行
    pub fn can_remove(&self) -> bool {
        self.row_count > MIN_ROWS
    }

    /// 保留未保存的输入，重建表单时优先使用
    pub fn retain_input(&mut self, input: FormSubmission) {
        self.pending = Some(input);
    }

    /// 未保存的输入
    pub fn pending(&self) -> Option<&FormSubmission> {
        self.pending.as_ref()
    }

    /// 上一次提交的字段错误
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// 使行数与提交的行保持一致
    pub(crate) fn sync_row_count(&mut self, rows: usize) {
        self.row_count = rows.max(MIN_ROWS);
    }

    pub(crate) fn set_errors(&mut self, errors: Vec<FieldError>) {
        self.errors = errors;
    }

    pub(crate) fn clear_errors(&mut self) {
        self.errors.clear();
    }
}

/// 已保存配置中名称非空的英文条目数，没有时为 1
pub fn derive_row_count(settings: &BreadcrumbSettings) -> usize {
    match settings.named_english_count() {
        0 => MIN_ROWS,
        count => count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::types::EnglishCrumb;

    fn named(label: &str) -> EnglishCrumb {
        EnglishCrumb {
            label: Some(label.to_string()),
            url: None,
        }
    }

    #[test]
    fn test_row_count_from_empty_settings() {
        let session =
            FormSession::from_settings(&BreadcrumbSettings::default());
        assert_eq!(session.row_count(), 1);
        assert!(!session.can_remove());
    }

    #[test]
    fn test_row_count_ignores_unnamed_entries() {
        let settings = BreadcrumbSettings {
            en: vec![
                named("Home"),
                named(""),
                EnglishCrumb::default(),
                named("Docs"),
            ],
            ..Default::default()
        };
        assert_eq!(derive_row_count(&settings), 2);
    }

    #[test]
    fn test_add_and_remove_rows() {
        let mut session = FormSession::new(1);
        assert_eq!(session.add_row(), 2);
        assert_eq!(session.add_row(), 3);
        assert_eq!(session.remove_row(), 2);
        assert_eq!(session.remove_row(), 1);
        assert_eq!(session.remove_row(), 1);
        assert_eq!(session.remove_row(), 1);
    }

    #[test]
    fn test_new_never_below_minimum() {
        assert_eq!(FormSession::new(0).row_count(), 1);
    }
}
