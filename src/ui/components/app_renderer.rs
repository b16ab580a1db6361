//! 应用渲染器模块
//!
//! 负责渲染面包屑设置页面

use eframe::egui;

use super::crumb_rows::{render_crumb_rows, RowAction};
use crate::core::form::view::FormView;
use crate::ui::widgets::banner::StatusBanner;

/// 用户动作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    None,
    AddRow,
    RemoveRow,
    Save,
    DismissBanner,
}

/// 应用渲染器
pub struct AppRenderer;

impl AppRenderer {
    /// 渲染设置页面，返回用户动作
    pub fn render_settings(
        ui: &mut egui::Ui,
        view: &mut FormView,
        banner: Option<&StatusBanner>,
    ) -> UserAction {
        let mut action = UserAction::None;

        if let Some(banner) = banner {
            if banner.show(ui) {
                action = UserAction::DismissBanner;
            }
            ui.add_space(8.0);
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(&view.description);
                ui.add_space(8.0);

                ui.checkbox(
                    &mut view.front_page_crumb.value,
                    &view.front_page_crumb.title,
                );
                ui.add_space(12.0);

                match render_crumb_rows(ui, &mut view.crumbs) {
                    RowAction::AddRow => {
                        action = UserAction::AddRow;
                    }
                    RowAction::RemoveRow => {
                        action = UserAction::RemoveRow;
                    }
                    RowAction::None => {}
                }

                ui.add_space(20.0);
                ui.separator();

                if ui.button(&view.save_label).clicked() {
                    action = UserAction::Save;
                }
            });

        action
    }
}
