mod common;
mod config;
mod network;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use network::FeedbackApiClient;
use tokio::sync::mpsc;
use ui::FeedbackApp;

use config::NoticeStyle;

#[derive(Parser)]
#[command(
    name = "feedback-client",
    version,
    about = "Desktop client for the feedback board"
)]
struct Cli {
    /// Feedback API endpoint (falls back to FEEDBACK_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
    /// How submit results are announced
    #[arg(long, value_enum, default_value_t = NoticeStyle::Toast)]
    notice: NoticeStyle,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let endpoint = config::resolve_api_url(cli.api_url);

    // 1. Tạo các kênh giao tiếp (Channels)
    // UI -> Network
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Network -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    // 2. Khởi chạy API worker (Chạy ngầm)
    let worker_endpoint = endpoint.clone();
    tokio::spawn(async move {
        FeedbackApiClient::new(worker_endpoint, event_tx, cmd_rx)
            .run()
            .await;
    });

    // 3. Khởi chạy UI (Chạy trên Main Thread)
    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);
    let notice_style = cli.notice;

    eframe::run_native(
        "Feedback Board",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("FeedbackApp should only be initialized once");

            log::info!("Client started against {endpoint}");

            Ok(Box::new(FeedbackApp::new(
                cc,
                cmd_tx.clone(),
                event_receiver,
                notice_style,
            )))
        }),
    )
}
