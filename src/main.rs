// src/main.rs
use clap::Parser;
use live_scoreboard::app::run_interactive;
use live_scoreboard::cli::{Args, is_config_update};
use live_scoreboard::commands::{
    handle_config_update_command, handle_export_command, handle_list_config_command,
    handle_once_command, prepare_session, state_file_path,
};
use live_scoreboard::config::Config;
use live_scoreboard::error::AppError;
use live_scoreboard::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Config problems should not prevent logging from coming up
    let config = Config::load().await;
    let (log_file_path, _guard) = setup_logging(&args, config.as_ref().ok()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return handle_config_update_command(&args).await;
    }

    let config = config?;

    if args.export.is_some() {
        return handle_export_command(&args, &config).await;
    }

    if args.once {
        return handle_once_command(&args, &config).await;
    }

    let state_path = state_file_path(&args, &config);
    let session = prepare_session(&args, &config, &state_path).await?;
    tracing::info!(
        "Starting interactive scoreboard, session file {}",
        state_path.display()
    );
    run_interactive(&config, session, &state_path).await
}
