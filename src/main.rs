// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::{CommandFactory, Parser};
use cli::{Args, is_config_operation};
use commands::{handle_config_update_command, handle_fetch_command, handle_list_config_command};
use hoops_ref::config::Config;
use hoops_ref::error::AppError;
use logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Configuration operations run before logging so they never touch the log directory
    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    let Some(command) = args.command.clone() else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    // Keep the guard alive until main returns so buffered logs are flushed
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    handle_fetch_command(&args, &command, config).await
}
