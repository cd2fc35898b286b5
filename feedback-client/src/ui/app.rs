use chrono::Utc;
use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent};
use crate::config::NoticeStyle;

use super::components::{feedback_form, feedback_list, notice};
use super::state::AppState;

pub struct FeedbackApp {
    state: AppState,
    command_sender: mpsc::Sender<ApiCommand>,
    event_receiver: mpsc::Receiver<ApiEvent>,
}

impl FeedbackApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<ApiCommand>,
        event_receiver: mpsc::Receiver<ApiEvent>,
        notice_style: NoticeStyle,
    ) -> Self {
        let app = Self {
            state: AppState::new(notice_style),
            command_sender,
            event_receiver,
        };

        // Tải danh sách một lần khi mở app
        app.send_command(ApiCommand::FetchFeedback);
        app
    }

    fn handle_api_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            if let Some(follow_up) = self.state.apply_event(event, Utc::now()) {
                self.send_command(follow_up);
            }
        }
    }

    fn send_command(&self, command: ApiCommand) {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to API worker: {err}");
        }
    }

    fn submit(&mut self) {
        let Some(command) = self.state.begin_submit() else {
            return;
        };

        if let Err(err) = self.command_sender.try_send(command) {
            log::error!("Error submitting feedback: {err}");
            self.state
                .apply_event(ApiEvent::SubmitFailed(err.to_string()), Utc::now());
        }
    }
}

impl eframe::App for FeedbackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_api_events();
        self.state.expire_notice(Utc::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("We value your feedback");
                ui.label("Share your experience or suggestions. Your input helps us improve.");
            });
            ui.separator();

            if feedback_form::render(ui, &mut self.state) {
                self.submit();
            }

            ui.add_space(16.0);
            feedback_list::render(ui, &self.state);
        });

        let style = self.state.notice_style;
        let closed = self
            .state
            .notice
            .as_ref()
            .is_some_and(|current| notice::render(ctx, current, style));
        if closed {
            self.state.dismiss_notice();
        }

        ctx.request_repaint();
    }
}
