//! 非交互式表单操作
//!
//! 与图形界面走同一条路径：打开会话、生成页面、增删行、提交。
//! 提交前去掉四个字段都为空的行，空配置上的占位行不会被当作输入。

use std::fmt;

use super::controller::{BreadcrumbSettingsForm, SubmitOutcome};
use super::session::{derive_row_count, FormSession};
use super::view::FormView;
use crate::app::config::manager::ConfigStore;
use crate::app::config::types::{
    BreadcrumbEntry, CrumbField, CrumbRow,
};
use crate::app::error::types::Result;
use crate::app::i18n::LanguageProvider;

/// 已保存配置的概览
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsOverview {
    /// 首页面包屑开关
    pub front_page_crumb: bool,
    /// 打开表单时的行数
    pub row_count: usize,
    /// 按顺序排列的条目
    pub entries: Vec<BreadcrumbEntry>,
}

impl fmt::Display for SettingsOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "front_page_crumb: {}", self.front_page_crumb)?;
        write!(f, "rows: {}", self.row_count)?;
        for (index, entry) in self.entries.iter().enumerate() {
            write!(
                f,
                "\n[{index}] en: {} <{}> | fr: {} <{}>",
                entry.english_label,
                entry.english_url,
                entry.french_label,
                entry.french_url
            )?;
        }
        Ok(())
    }
}

impl<S: ConfigStore, L: LanguageProvider> BreadcrumbSettingsForm<S, L> {
    /// 读取配置概览
    pub fn overview(&self) -> Result<SettingsOverview> {
        let settings = self.load_settings()?;
        Ok(SettingsOverview {
            front_page_crumb: settings.front_page_crumb_enabled(),
            row_count: derive_row_count(&settings),
            entries: settings.entries(),
        })
    }

    /// 在末尾追加一行并保存
    ///
    /// 最后一行为空（例如首次打开时的占位行）时直接填入，不再增加新行。
    pub fn append_entry(
        &mut self,
        entry: CrumbRow,
    ) -> Result<SubmitOutcome> {
        let mut session = self.open_session()?;
        let mut view = self.build(&session)?;

        let has_placeholder = view
            .crumbs
            .rows
            .last()
            .is_some_and(|editor| editor.to_row().is_blank());
        if !has_placeholder {
            view.crumbs = self
                .add_row(&mut session, Some(view.to_submission()))?;
        }

        if let Some(editor) = view.crumbs.rows.last_mut() {
            for field in CrumbField::ALL {
                if let (Some(slot), Some(value)) =
                    (editor.value_mut(field), entry.get(field))
                {
                    *slot = value.to_string();
                }
            }
        }

        self.submit_view(session, &view)
    }

    /// 删除最后一行并保存，只剩一行时保持不变
    pub fn remove_last_entry(&mut self) -> Result<SubmitOutcome> {
        let mut session = self.open_session()?;
        let mut view = self.build(&session)?;

        view.crumbs = self
            .remove_row(&mut session, Some(view.to_submission()))?;

        self.submit_view(session, &view)
    }

    /// 设置首页面包屑开关并保存
    pub fn set_front_page_crumb(
        &mut self,
        enabled: bool,
    ) -> Result<SubmitOutcome> {
        let session = self.open_session()?;
        let mut view = self.build(&session)?;
        view.front_page_crumb.value = enabled;

        self.submit_view(session, &view)
    }

    fn submit_view(
        &mut self,
        session: FormSession,
        view: &FormView,
    ) -> Result<SubmitOutcome> {
        let submission = view.to_submission().without_blank_rows();
        self.submit(session, submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::manager::MemoryConfigStore;
    use crate::app::i18n::{FixedLanguage, Locale};

    #[test]
    fn test_overview_display() {
        let form = BreadcrumbSettingsForm::new(
            MemoryConfigStore::new(),
            FixedLanguage(Locale::En),
        );
        let overview = form.overview().unwrap();
        assert_eq!(
            overview.to_string(),
            "front_page_crumb: true\nrows: 1"
        );
    }
}
