use std::collections::HashMap;

use chrono::{DateTime, Duration, Local, Utc};

use crate::common::{ApiCommand, ApiEvent, FeedbackRecord};
use crate::config::NoticeStyle;

/// Số ký tự tối thiểu của góp ý (chỉ kiểm tra phía client).
pub const MIN_MESSAGE_CHARS: usize = 10;
/// Chỉ để hiển thị bộ đếm, không chặn nhập.
pub const MESSAGE_COUNTER_LIMIT: usize = 500;
pub const TOAST_DURATION_MS: i64 = 4000;

pub const SUCCESS_NOTICE: &str = "Thank you, your feedback has been submitted.";
pub const ERROR_NOTICE: &str = "Unable to submit feedback. Please try again later.";

/// Name trimmed non-empty and message trimmed to at least [`MIN_MESSAGE_CHARS`].
pub fn is_form_valid(name: &str, message: &str) -> bool {
    !name.trim().is_empty() && message_length(message) >= MIN_MESSAGE_CHARS
}

pub fn message_length(message: &str) -> usize {
    message.trim().chars().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub shown_at: DateTime<Utc>,
}

/// Một dòng trong danh sách đã được định dạng sẵn để vẽ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub name: String,
    pub message: String,
    pub date_label: String,
}

impl From<&FeedbackRecord> for FeedbackEntry {
    fn from(record: &FeedbackRecord) -> Self {
        Self {
            name: record.name.clone(),
            message: record.message.clone(),
            date_label: record
                .created_at
                .with_timezone(&Local)
                .format("%Y-%m-%d")
                .to_string(),
        }
    }
}

/// Trạng thái cục bộ của UI.
pub struct AppState {
    pub name_input: String,
    pub message_input: String,
    /// Map id -> entry đã render
    pub entries: HashMap<String, FeedbackEntry>,
    /// Thứ tự server trả về (không tự sắp xếp lại)
    pub order: Vec<String>,
    /// Đang có một lần gửi chưa xong
    pub loading: bool,
    pub notice: Option<Notice>,
    pub notice_style: NoticeStyle,
}

impl AppState {
    pub fn new(notice_style: NoticeStyle) -> Self {
        Self {
            name_input: String::new(),
            message_input: String::new(),
            entries: HashMap::new(),
            order: Vec::new(),
            loading: false,
            notice: None,
            notice_style,
        }
    }

    pub fn is_form_valid(&self) -> bool {
        is_form_valid(&self.name_input, &self.message_input)
    }

    pub fn can_submit(&self) -> bool {
        self.is_form_valid() && !self.loading
    }

    /// Starts a submission if the form allows it. Fields are sent verbatim.
    pub fn begin_submit(&mut self) -> Option<ApiCommand> {
        if !self.can_submit() {
            return None;
        }

        self.loading = true;
        Some(ApiCommand::SubmitFeedback {
            name: self.name_input.clone(),
            message: self.message_input.clone(),
        })
    }

    /// Applies a worker event; returns a follow-up command when one is due.
    pub fn apply_event(&mut self, event: ApiEvent, now: DateTime<Utc>) -> Option<ApiCommand> {
        match event {
            ApiEvent::FeedbackLoaded(records) => {
                self.replace_feedback(&records);
                None
            }
            ApiEvent::FeedbackLoadFailed(reason) => {
                log::warn!("Keeping previous feedback list: {reason}");
                None
            }
            ApiEvent::SubmitSucceeded(record) => {
                log::info!("Feedback {} submitted", record.id);
                self.loading = false;
                self.name_input.clear();
                self.message_input.clear();
                self.show_notice(SUCCESS_NOTICE, NoticeKind::Success, now);
                Some(ApiCommand::FetchFeedback)
            }
            ApiEvent::SubmitFailed(reason) => {
                log::warn!("Feedback not submitted: {reason}");
                self.loading = false;
                self.show_notice(ERROR_NOTICE, NoticeKind::Error, now);
                None
            }
        }
    }

    pub fn replace_feedback(&mut self, records: &[FeedbackRecord]) {
        self.entries = records
            .iter()
            .map(|record| (record.id.clone(), FeedbackEntry::from(record)))
            .collect();
        self.order = records.iter().map(|record| record.id.clone()).collect();
    }

    pub fn entries_in_order(&self) -> impl Iterator<Item = &FeedbackEntry> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    pub fn show_notice(&mut self, message: &str, kind: NoticeKind, now: DateTime<Utc>) {
        self.notice = Some(Notice {
            message: message.to_string(),
            kind,
            shown_at: now,
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Toasts hide themselves after [`TOAST_DURATION_MS`]; alerts wait for the user.
    pub fn expire_notice(&mut self, now: DateTime<Utc>) {
        if self.notice_style != NoticeStyle::Toast {
            return;
        }

        let expired = self.notice.as_ref().is_some_and(|notice| {
            now.signed_duration_since(notice.shown_at) >= Duration::milliseconds(TOAST_DURATION_MS)
        });
        if expired {
            self.notice = None;
        }
    }
}
