use std::sync::Arc;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use feedback_board::api;
use feedback_board::config::{self, AppConfig};
use feedback_board::service::FeedbackService;
use feedback_board::storage::{FeedbackDatabase, FeedbackStore};

#[derive(Parser)]
#[command(
    name = "feedback_board",
    version,
    about = "Feedback collection API server"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Serve the HTTP API (default)
    Serve,
    /// Print stored feedback, newest first, and exit
    List,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config).apply_env();

    // 1. Mở kết nối storage (tường minh, không dùng global)
    let store = match FeedbackDatabase::open(&app_config.storage_target()) {
        Ok(store) => Arc::new(store),
        Err(err) => {
            log::error!("Failed to open feedback store {}: {err}", app_config.database_url);
            std::process::exit(1);
        }
    };
    log::info!("Feedback store opened at {}", app_config.database_url);

    let service = FeedbackService::new(store.clone());

    let result = match cli.mode.unwrap_or(Mode::Serve) {
        Mode::Serve => run_server(&app_config, service).await,
        Mode::List => print_feedback(service).await,
    };

    // 2. Đóng storage trước khi thoát
    if let Err(err) = store.close() {
        log::error!("Failed to close feedback store: {err}");
    }

    if let Err(err) = result {
        log::error!("{err}");
        std::process::exit(1);
    }
}

async fn run_server(
    app_config: &AppConfig,
    service: FeedbackService,
) -> Result<(), Box<dyn std::error::Error>> {
    api::serve(app_config, service).await?;
    log::info!("Server shut down");
    Ok(())
}

async fn print_feedback(service: FeedbackService) -> Result<(), Box<dyn std::error::Error>> {
    let records = service.list().await?;
    if records.is_empty() {
        println!("No feedback yet.");
        return Ok(());
    }

    for record in records {
        println!(
            "[{}] {} ({}): {}",
            record.created_at.format("%Y-%m-%d %H:%M:%S"),
            record.name,
            record.id,
            record.message
        );
    }
    Ok(())
}
