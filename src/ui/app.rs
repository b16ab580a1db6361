//! GUI主应用程序模块

use eframe::egui;

use crate::app::config::manager::TomlConfigStore;
use crate::app::error::types::{AppError, Result};
use crate::app::i18n::{FixedLanguage, Text};
use crate::core::form::{
    BreadcrumbSettingsForm, FormSession, FormView,
    SubmitOutcome,
};

use super::components::{AppRenderer, UserAction};
use super::widgets::banner::StatusBanner;

/// GUI 使用的表单类型
pub type SettingsForm =
    BreadcrumbSettingsForm<TomlConfigStore, FixedLanguage>;

/// GUI 应用程序
pub struct BreadcrumbsApp {
    form: SettingsForm,
    session: FormSession,
    view: FormView,
    banner: Option<StatusBanner>,
}

impl BreadcrumbsApp {
    /// 打开表单并生成首个页面
    pub fn new(form: SettingsForm) -> Result<Self> {
        let session = form.open_session()?;
        let view = form.build(&session)?;

        Ok(Self {
            form,
            session,
            view,
            banner: None,
        })
    }

    /// 增加一行，只重建行区域
    fn add_row(&mut self) {
        let input = self.view.to_submission();
        match self.form.add_row(&mut self.session, Some(input)) {
            Ok(rows) => self.view.crumbs = rows,
            Err(e) => self.show_error(e),
        }
    }

    /// 删除一行，只重建行区域
    fn remove_row(&mut self) {
        let input = self.view.to_submission();
        match self
            .form
            .remove_row(&mut self.session, Some(input))
        {
            Ok(rows) => self.view.crumbs = rows,
            Err(e) => self.show_error(e),
        }
    }

    /// 保存配置
    fn save(&mut self) {
        let submission = self.view.to_submission();
        let outcome = match self
            .form
            .submit(self.session.clone(), submission)
        {
            Ok(outcome) => outcome,
            Err(e) => {
                self.show_error(e);
                return;
            }
        };

        match outcome {
            SubmitOutcome::Saved {
                notice, message, ..
            } => {
                // 保存成功后丢弃会话，按新配置重新打开表单
                match self.reopen() {
                    Ok(()) => {
                        self.banner = Some(StatusBanner::status(
                            format!("{notice}\n{message}"),
                        ));
                    }
                    Err(e) => self.show_error(e),
                }
            }
            SubmitOutcome::Rejected(session) => {
                self.session = session;
                match self.form.build(&self.session) {
                    Ok(view) => {
                        self.view = view;
                        self.banner = Some(StatusBanner::error(
                            Text::FixErrors
                                .in_locale(self.form.locale()),
                        ));
                    }
                    Err(e) => self.show_error(e),
                }
            }
        }
    }

    fn reopen(&mut self) -> Result<()> {
        let session = self.form.open_session()?;
        self.view = self.form.build(&session)?;
        self.session = session;
        Ok(())
    }

    fn show_error(&mut self, error: AppError) {
        tracing::error!("Breadcrumb settings error: {}", error);
        self.banner = Some(StatusBanner::error(error.to_string()));
    }
}

impl eframe::App for BreadcrumbsApp {
    fn update(
        &mut self,
        ctx: &egui::Context,
        _frame: &mut eframe::Frame,
    ) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(Text::Title.in_locale(self.form.locale()));
            ui.separator();
            ui.add_space(8.0);

            let action = AppRenderer::render_settings(
                ui,
                &mut self.view,
                self.banner.as_ref(),
            );

            // 处理用户动作
            match action {
                UserAction::AddRow => self.add_row(),
                UserAction::RemoveRow => self.remove_row(),
                UserAction::Save => self.save(),
                UserAction::DismissBanner => {
                    self.banner = None;
                }
                UserAction::None => {}
            }
        });
    }
}

/// 启动 GUI 应用程序
pub fn run_gui(form: SettingsForm) -> Result<()> {
    let title = Text::Title.in_locale(form.locale());
    let app = BreadcrumbsApp::new(form)?;

    let viewport_builder = egui::ViewportBuilder::default()
        .with_inner_size([560.0, 720.0])
        .with_min_inner_size([420.0, 480.0])
        .with_resizable(true)
        .with_title(title);

    let options = eframe::NativeOptions {
        viewport: viewport_builder,
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| {
        tracing::error!("GUI startup failed: {}", e);
        AppError::Gui(e.to_string())
    })?;

    Ok(())
}
