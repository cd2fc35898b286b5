use eframe::egui;

use crate::ui::state::{AppState, MESSAGE_COUNTER_LIMIT, MIN_MESSAGE_CHARS, message_length};

/// Vẽ form; trả về `true` khi người dùng bấm gửi và form hợp lệ.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    ui.heading("Submit your feedback");
    ui.label(
        egui::RichText::new(
            "Please be specific so we can act on your input. Fields marked with * are required.",
        )
        .weak(),
    );
    ui.add_space(8.0);

    ui.label("Full name *");
    ui.add(
        egui::TextEdit::singleline(&mut state.name_input)
            .hint_text("e.g., Jane Doe")
            .desired_width(f32::INFINITY),
    );

    ui.add_space(4.0);
    ui.label("Feedback *");
    ui.add(
        egui::TextEdit::multiline(&mut state.message_input)
            .hint_text("What worked well? What could be improved?")
            .desired_rows(5)
            .desired_width(f32::INFINITY),
    );

    let length = message_length(&state.message_input);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("Minimum {MIN_MESSAGE_CHARS} characters")).small());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let counter = egui::RichText::new(format!("{length} / {MESSAGE_COUNTER_LIMIT}")).small();
            if length < MIN_MESSAGE_CHARS {
                ui.label(counter.color(egui::Color32::RED));
            } else {
                ui.label(counter.weak());
            }
        });
    });

    ui.add_space(8.0);
    let label = if state.loading {
        "Submitting..."
    } else {
        "Send Feedback"
    };

    ui.add_enabled(state.can_submit(), egui::Button::new(label))
        .clicked()
}
