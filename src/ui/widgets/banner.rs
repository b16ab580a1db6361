//! 消息横幅组件
//!
//! 显示保存成功的确认信息或错误提示

use eframe::egui;

/// 横幅类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    /// 状态信息（保存成功）
    Status,
    /// 错误
    Error,
}

/// 消息横幅
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    kind: BannerKind,
    text: String,
}

impl StatusBanner {
    /// 状态信息横幅
    pub fn status(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Status,
            text: text.into(),
        }
    }

    /// 错误横幅
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }

    /// 渲染横幅，返回是否点击了关闭
    pub fn show(&self, ui: &mut egui::Ui) -> bool {
        let (fill, text_color) = match self.kind {
            BannerKind::Status => (
                egui::Color32::from_rgb(223, 240, 216),
                egui::Color32::from_rgb(60, 118, 61),
            ),
            BannerKind::Error => (
                egui::Color32::from_rgb(242, 222, 222),
                egui::Color32::from_rgb(169, 68, 66),
            ),
        };

        let mut dismissed = false;
        egui::Frame::none()
            .fill(fill)
            .inner_margin(8.0)
            .rounding(4.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(&self.text)
                                .color(text_color),
                        )
                        .wrap(),
                    );
                    ui.with_layout(
                        egui::Layout::right_to_left(
                            egui::Align::Center,
                        ),
                        |ui| {
                            if ui.small_button("×").clicked() {
                                dismissed = true;
                            }
                        },
                    );
                });
            });
        dismissed
    }
}
