use crate::cli::{Args, Command};
use hoops_ref::config::Config;
use hoops_ref::data_fetcher::{HoopsRefClient, StatsOutcome};
use hoops_ref::error::AppError;
use hoops_ref::output::{OutputFormat, render};
use tracing::info;

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    println!("hoops_ref {}", hoops_ref::VERSION);
    Config::display().await
}

/// Handles configuration update commands (--set-base-url, --set-user-agent,
/// --set-log-file, --clear-log-file).
///
/// Starts from the stored config file, or defaults when there is none, and
/// saves the result after validation. Environment overrides are never
/// written back, and a config file that fails to parse is left untouched.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_stored().await?;

    if let Some(new_base_url) = &args.new_base_url {
        config.base_url = new_base_url.clone();
    }

    if let Some(new_user_agent) = &args.new_user_agent {
        config.user_agent = new_user_agent.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Runs one dataset command against `client`.
///
/// Game logs and team stats are wrapped in a [`StatsOutcome`] so every
/// command reports "no rows" the same way.
pub async fn fetch_for_command(
    client: &HoopsRefClient,
    command: &Command,
) -> Result<StatsOutcome, AppError> {
    match command {
        Command::Games {
            team,
            season,
            playoffs,
        } => client
            .games(team, *season, *playoffs)
            .await
            .map(StatsOutcome::from_table),
        Command::TeamStats { season, opponent } => client
            .per_game_team(*season, *opponent)
            .await
            .map(StatsOutcome::from_table),
        Command::PlayerStats { season } => client.per_game_player(*season).await,
        Command::Advanced { season } => client.advanced(*season).await,
    }
}

/// Text printed for an outcome. Unavailable pages are reported on stderr
/// by the caller; this only formats.
pub fn format_outcome(outcome: &StatsOutcome, format: OutputFormat) -> Result<String, AppError> {
    match outcome {
        StatsOutcome::Data(table) => render(table, format),
        StatsOutcome::Empty => Ok(match format {
            OutputFormat::Table => "No rows.\n".to_string(),
            OutputFormat::Json => "[]".to_string(),
        }),
        StatsOutcome::Unavailable { reason } => Ok(format!("Stats unavailable: {reason}")),
    }
}

/// Handles the dataset subcommands.
///
/// `--base-url` overrides the configured site for this run without touching
/// the config file.
pub async fn handle_fetch_command(
    args: &Args,
    command: &Command,
    mut config: Config,
) -> Result<(), AppError> {
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
        config.validate()?;
    }

    let client = HoopsRefClient::new(&config)?;
    info!("Running {command:?} against {}", client.base_url());

    let outcome = fetch_for_command(&client, command).await?;
    let text = format_outcome(&outcome, args.format)?;
    if outcome.is_available() {
        println!("{text}");
    } else {
        eprintln!("{text}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use hoops_ref::constants::env_vars;
    use hoops_ref::testing_utils::{PlayerRow, TestPageBuilder};
    use reqwest::Client;
    use serial_test::serial;
    use std::path::{Path, PathBuf};
    use tempfile::{TempDir, tempdir};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    #[tokio::test]
    async fn test_fetch_for_command_dispatches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leagues/NBA_2022_per_game.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                TestPageBuilder::player_per_game_page(&[PlayerRow::new(
                    "DeMar DeRozan",
                    "SF",
                    32,
                    "CHI",
                    76,
                    27.9,
                )]),
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = HoopsRefClient::with_client(Client::new(), &server.uri());
        let outcome = fetch_for_command(&client, &Command::PlayerStats { season: 2022 })
            .await
            .unwrap();
        let text = format_outcome(&outcome, OutputFormat::Table).unwrap();
        assert!(text.contains("DeMar DeRozan"));
    }

    #[tokio::test]
    async fn test_fetch_for_command_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = HoopsRefClient::with_client(Client::new(), &server.uri());
        let outcome = fetch_for_command(&client, &Command::Advanced { season: 2022 })
            .await
            .unwrap();
        assert!(!outcome.is_available());
        assert!(
            format_outcome(&outcome, OutputFormat::Json)
                .unwrap()
                .starts_with("Stats unavailable")
        );
    }

    #[test]
    fn test_format_empty_outcome() {
        assert_eq!(
            format_outcome(&StatsOutcome::Empty, OutputFormat::Json).unwrap(),
            "[]"
        );
        assert_eq!(
            format_outcome(&StatsOutcome::Empty, OutputFormat::Table).unwrap(),
            "No rows.\n"
        );
    }

    /// Points the config directory at a fresh temporary directory
    fn isolated_config_home() -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        // SAFETY: serialized with the other env tests; no other thread reads these vars
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", dir.path());
            std::env::remove_var(env_vars::BASE_URL);
            std::env::remove_var(env_vars::USER_AGENT);
            std::env::remove_var(env_vars::LOG_FILE);
        }
        let config_path = PathBuf::from(Config::get_config_path());
        assert!(config_path.starts_with(dir.path()));
        (dir, config_path)
    }

    fn restore_env() {
        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
            std::env::remove_var(env_vars::BASE_URL);
        }
    }

    async fn write_config(path: &Path, contents: &str) {
        tokio::fs::create_dir_all(path.parent().unwrap())
            .await
            .unwrap();
        tokio::fs::write(path, contents).await.unwrap();
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    #[serial]
    async fn test_config_update_keeps_unparseable_file() {
        let (_dir, config_path) = isolated_config_home();
        let contents = "base_url = \"https://mirror.example.com\"\nlog_file_path = 5\n";
        write_config(&config_path, contents).await;

        let args = Args::parse_from(["hoops_ref", "--set-user-agent", "stats-bot/2.0"]);
        let result = handle_config_update_command(&args).await;

        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
        let after = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert_eq!(after, contents);
        restore_env();
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    #[serial]
    async fn test_config_update_does_not_persist_env_overrides() {
        let (_dir, config_path) = isolated_config_home();
        write_config(
            &config_path,
            "base_url = \"https://mirror.example.com\"\nuser_agent = \"old-agent\"\n",
        )
        .await;
        unsafe {
            std::env::set_var(env_vars::BASE_URL, "http://127.0.0.1:9999");
        }

        let args = Args::parse_from(["hoops_ref", "--set-user-agent", "stats-bot/2.0"]);
        handle_config_update_command(&args).await.unwrap();

        let saved = Config::load_from_path(config_path.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(saved.base_url, "https://mirror.example.com");
        assert_eq!(saved.user_agent, "stats-bot/2.0");
        restore_env();
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    #[serial]
    async fn test_config_update_without_file_starts_from_defaults() {
        let (_dir, config_path) = isolated_config_home();

        let args = Args::parse_from(["hoops_ref", "--set-log-file", "/tmp/hoops.log"]);
        handle_config_update_command(&args).await.unwrap();

        let saved = Config::load_from_path(config_path.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(saved.base_url, Config::default().base_url);
        assert_eq!(saved.user_agent, Config::default().user_agent);
        assert_eq!(saved.log_file_path.as_deref(), Some("/tmp/hoops.log"));
        restore_env();
    }
}
