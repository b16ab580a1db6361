//! 面包屑行编辑组件

use crate::core::form::view::{CrumbFieldset, RowEditor};

/// 面包屑行区域上的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    None,
    AddRow,
    RemoveRow,
}

/// 渲染单行的四个文本框
fn render_row_editor(ui: &mut egui::Ui, row: &mut RowEditor) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        for field in row.fields.iter_mut() {
            ui.label(&field.title);
            ui.add(
                egui::TextEdit::multiline(&mut field.value)
                    .id_salt(&field.name)
                    .desired_rows(2)
                    .desired_width(f32::INFINITY),
            );
            if let Some(error) = &field.error {
                ui.colored_label(egui::Color32::RED, error);
            }
            ui.add_space(4.0);
        }
    });
}

/// 渲染面包屑行区域，返回用户操作
pub fn render_crumb_rows(
    ui: &mut egui::Ui,
    fieldset: &mut CrumbFieldset,
) -> RowAction {
    let mut action = RowAction::None;

    ui.strong(&fieldset.title);
    ui.separator();
    ui.add_space(5.0);

    for row in fieldset.rows.iter_mut() {
        render_row_editor(ui, row);
        ui.add_space(5.0);
    }

    ui.horizontal(|ui| {
        if ui.button(&fieldset.add_label).clicked() {
            action = RowAction::AddRow;
        }
        if let Some(label) = &fieldset.remove_label {
            if ui.button(label).clicked() {
                action = RowAction::RemoveRow;
            }
        }
    });

    action
}
