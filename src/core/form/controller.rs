//! 面包屑设置表单控制器
//!
//! 负责加载配置、生成视图、增删行、验证和保存

use super::session::FormSession;
use super::submission::FormSubmission;
use super::summary::summarize;
use super::view::{CrumbFieldset, FormView};
use crate::app::config::manager::ConfigStore;
use crate::app::config::types::{
    BreadcrumbSettings, SETTINGS_NAME,
};
use crate::app::config::validator::{
    CrumbValidator, FieldError,
};
use crate::app::error::types::Result;
use crate::app::i18n::{LanguageProvider, Locale, Text};

/// 表单 id
pub const FORM_ID: &str = "pre_breadcrumbs_settings";

/// 提交结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 保存成功，会话已丢弃
    Saved {
        /// 通用的保存成功提示
        notice: String,
        /// 确认信息
        message: String,
        /// 写入的配置
        settings: BreadcrumbSettings,
    },
    /// 验证失败，配置未改动；会话保留输入和错误
    Rejected(FormSession),
}

impl SubmitOutcome {
    /// 字段错误（保存成功时为空）
    pub fn errors(&self) -> &[FieldError] {
        match self {
            SubmitOutcome::Saved { .. } => &[],
            SubmitOutcome::Rejected(session) => session.errors(),
        }
    }

    /// 是否保存成功
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved { .. })
    }
}

/// 面包屑设置表单
pub struct BreadcrumbSettingsForm<S, L> {
    store: S,
    language: L,
}

impl<S: ConfigStore, L: LanguageProvider> BreadcrumbSettingsForm<S, L> {
    /// 创建表单
    pub fn new(store: S, language: L) -> Self {
        Self { store, language }
    }

    /// 表单 id
    pub fn form_id(&self) -> &'static str {
        FORM_ID
    }

    /// 表单可编辑的配置文档名称
    pub fn editable_config_names(&self) -> &'static [&'static str] {
        &[SETTINGS_NAME]
    }

    /// 配置存储
    pub fn store(&self) -> &S {
        &self.store
    }

    /// 当前界面语言
    pub fn locale(&self) -> Locale {
        self.language.current_locale()
    }

    /// 读取已保存的配置，不存在时使用默认值
    pub fn load_settings(&self) -> Result<BreadcrumbSettings> {
        Ok(self.store.get(SETTINGS_NAME)?.unwrap_or_default())
    }

    /// 首次打开表单：根据已保存的配置确定行数
    pub fn open_session(&self) -> Result<FormSession> {
        let settings = self.load_settings()?;
        Ok(FormSession::from_settings(&settings))
    }

    /// 生成整个页面
    pub fn build(&self, session: &FormSession) -> Result<FormView> {
        let settings = self.load_settings()?;
        Ok(FormView::render(&settings, session, self.locale()))
    }

    /// 只生成面包屑行区域
    pub fn build_rows(
        &self,
        session: &FormSession,
    ) -> Result<CrumbFieldset> {
        let settings = self.load_settings()?;
        Ok(CrumbFieldset::render(
            &settings,
            session,
            self.locale(),
        ))
    }

    /// “增加一行”：保留未保存的输入，行数加一，返回重建后的行区域
    pub fn add_row(
        &self,
        session: &mut FormSession,
        input: Option<FormSubmission>,
    ) -> Result<CrumbFieldset> {
        Self::keep_input(session, input);
        session.add_row();
        self.build_rows(session)
    }

    /// “删除一行”：行数减一（至少保留一行），返回重建后的行区域
    pub fn remove_row(
        &self,
        session: &mut FormSession,
        input: Option<FormSubmission>,
    ) -> Result<CrumbFieldset> {
        Self::keep_input(session, input);
        session.remove_row();
        self.build_rows(session)
    }

    /// 验证提交，返回全部字段错误
    pub fn validate(
        &self,
        submission: &FormSubmission,
    ) -> Vec<FieldError> {
        CrumbValidator::validate_rows(&submission.rows)
    }

    /// 提交表单：验证通过则保存并丢弃会话，否则返回带错误的会话
    pub fn submit(
        &mut self,
        mut session: FormSession,
        submission: FormSubmission,
    ) -> Result<SubmitOutcome> {
        let errors = self.validate(&submission);
        if !errors.is_empty() {
            tracing::warn!(
                "Breadcrumb settings rejected with {} error(s)",
                errors.len()
            );
            session.sync_row_count(submission.rows.len());
            session.retain_input(submission);
            session.set_errors(errors);
            return Ok(SubmitOutcome::Rejected(session));
        }

        let (message, settings) = self.persist(&submission)?;
        let notice =
            Text::ConfigSaved.in_locale(self.locale()).to_string();
        Ok(SubmitOutcome::Saved {
            notice,
            message,
            settings,
        })
    }

    /// 保存已验证的提交，返回确认信息和写入的配置
    pub fn persist(
        &mut self,
        submission: &FormSubmission,
    ) -> Result<(String, BreadcrumbSettings)> {
        let (english, french) = submission.flatten();
        let locale = self.locale();

        let mut config =
            self.store.get_editable(SETTINGS_NAME)?;
        config
            .set_english(english)
            .set_french(french)
            .set_front_page_crumb(submission.front_page_crumb);
        let settings = config.save()?;

        tracing::info!(
            "Saved {} leading breadcrumb row(s)",
            submission.rows.len()
        );

        let message = summarize(locale, &settings.en, &settings.fr);
        Ok((message, settings))
    }

    fn keep_input(
        session: &mut FormSession,
        input: Option<FormSubmission>,
    ) {
        if let Some(input) = input {
            session.retain_input(input);
        }
        session.clear_errors();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::manager::MemoryConfigStore;
    use crate::app::config::types::CrumbRow;
    use crate::app::i18n::FixedLanguage;

    fn form() -> BreadcrumbSettingsForm<MemoryConfigStore, FixedLanguage>
    {
        BreadcrumbSettingsForm::new(
            MemoryConfigStore::new(),
            FixedLanguage(Locale::En),
        )
    }

    #[test]
    fn test_form_identity() {
        let form = form();
        assert_eq!(form.form_id(), "pre_breadcrumbs_settings");
        assert_eq!(
            form.editable_config_names(),
            &["pre_breadcrumbs.settings"]
        );
    }

    #[test]
    fn test_rejected_submission_keeps_input() {
        let mut form = form();
        let session = form.open_session().unwrap();
        let submission = FormSubmission::new(
            true,
            vec![CrumbRow::filled("A", "short", "B", "short")],
        );

        let outcome =
            form.submit(session, submission.clone()).unwrap();
        let SubmitOutcome::Rejected(session) = outcome else {
            panic!("submission should be rejected");
        };
        assert_eq!(session.errors().len(), 4);
        assert_eq!(session.pending(), Some(&submission));
        assert!(form.store().get(SETTINGS_NAME).unwrap().is_none());
    }

    #[test]
    fn test_saved_outcome_carries_notice() {
        let mut form = form();
        let session = form.open_session().unwrap();
        let outcome = form
            .submit(
                session,
                FormSubmission::new(
                    true,
                    vec![CrumbRow::filled(
                        "Home",
                        "https://example.org",
                        "Accueil",
                        "https://example.org/fr",
                    )],
                ),
            )
            .unwrap();

        let SubmitOutcome::Saved { notice, .. } = outcome else {
            panic!("submission should be saved");
        };
        assert_eq!(notice, "The configuration options have been saved.");
    }

    #[test]
    fn test_add_row_clears_previous_errors() {
        let mut form = form();
        let session = form.open_session().unwrap();
        let outcome = form
            .submit(
                session,
                FormSubmission::new(
                    true,
                    vec![CrumbRow::filled("A", "", "", "")],
                ),
            )
            .unwrap();
        let SubmitOutcome::Rejected(mut session) = outcome else {
            panic!("submission should be rejected");
        };

        let rows = form.add_row(&mut session, None).unwrap();
        assert_eq!(rows.row_count(), 2);
        assert!(session.errors().is_empty());
        assert_eq!(rows.rows[0].fields[0].value, "A");
    }
}
