use eframe::egui;

use crate::ui::state::AppState;

pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.heading("Recent feedback");
    ui.separator();

    if state.order.is_empty() {
        ui.label(
            egui::RichText::new("No feedback yet. Be the first to share your thoughts.").weak(),
        );
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for entry in state.entries_in_order() {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&entry.name).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&entry.date_label).weak());
                });
            });
            ui.label(entry.message.as_str());
            ui.separator();
        }
    });
}
