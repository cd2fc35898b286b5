use eframe::egui;

use crate::config::NoticeStyle;
use crate::ui::state::{Notice, NoticeKind};

/// Vẽ thông báo hiện tại; trả về `true` khi người dùng đóng nó.
pub fn render(ctx: &egui::Context, notice: &Notice, style: NoticeStyle) -> bool {
    match style {
        NoticeStyle::Toast => render_toast(ctx, notice),
        NoticeStyle::Alert => render_alert(ctx, notice),
    }
}

fn colors(kind: NoticeKind) -> (egui::Color32, &'static str) {
    match kind {
        NoticeKind::Success => (egui::Color32::from_rgb(22, 101, 52), "✓"),
        NoticeKind::Error => (egui::Color32::from_rgb(153, 27, 27), "!"),
    }
}

fn render_toast(ctx: &egui::Context, notice: &Notice) -> bool {
    let (color, icon) = colors(notice.kind);
    let mut closed = false;

    egui::Area::new(egui::Id::new("feedback_notice"))
        .anchor(egui::Align2::RIGHT_TOP, [-24.0, 24.0])
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(color, icon);
                    ui.colored_label(color, notice.message.as_str());
                    if ui.small_button("✕").clicked() {
                        closed = true;
                    }
                });
            });
        });

    closed
}

fn render_alert(ctx: &egui::Context, notice: &Notice) -> bool {
    let (color, icon) = colors(notice.kind);
    let mut closed = false;

    egui::Window::new("Feedback")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(color, icon);
                ui.label(notice.message.as_str());
            });
            if ui.button("OK").clicked() {
                closed = true;
            }
        });

    closed
}
