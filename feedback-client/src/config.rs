use std::env;

use clap::ValueEnum;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/feedback";
const API_URL_ENV: &str = "FEEDBACK_API_URL";

/// Cách hiển thị thông báo sau khi gửi góp ý.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum NoticeStyle {
    /// Góc màn hình, tự ẩn sau 4 giây
    #[default]
    Toast,
    /// Hộp thoại, phải bấm OK
    Alert,
}

/// `--api-url` beats `FEEDBACK_API_URL`, which beats the default.
pub fn resolve_api_url(cli_value: Option<String>) -> String {
    pick_api_url(cli_value, env::var(API_URL_ENV).ok())
}

fn pick_api_url(cli_value: Option<String>, env_value: Option<String>) -> String {
    let url = cli_value
        .or(env_value)
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| {
            log::info!("{API_URL_ENV} not set, using default: {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_string()
        });

    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_value_wins() {
        assert_eq!(
            pick_api_url(Some("http://a/api/feedback".into()), Some("http://b".into())),
            "http://a/api/feedback"
        );
    }

    #[test]
    fn env_then_default() {
        assert_eq!(pick_api_url(None, Some("http://b/api/feedback/".into())), "http://b/api/feedback");
        assert_eq!(pick_api_url(None, None), DEFAULT_API_URL);
        assert_eq!(pick_api_url(Some("  ".into()), None), DEFAULT_API_URL);
    }
}
