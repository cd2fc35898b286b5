/// Lệnh UI gửi xuống tầng mạng.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCommand {
    /// Tải lại toàn bộ danh sách góp ý (mới nhất trước)
    FetchFeedback,
    SubmitFeedback {
        name: String,
        message: String,
    },
}
