use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use hoops_ref::output::OutputFormat;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only reads or updates configuration
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.new_base_url.is_some()
        || args.new_user_agent.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Basketball-Reference statistics fetcher
///
/// Downloads a statistics page, picks the relevant table and prints it after
/// cleaning: team game logs, team and opponent per-game stats, player
/// per-game stats and advanced player stats.
///
/// Seasons are identified by the year they end in (2022 = 2021-22).
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format for fetched tables
    #[arg(
        long = "format",
        short = 'f',
        value_enum,
        default_value_t = OutputFormat::Table,
        global = true,
        help_heading = "Display Options"
    )]
    pub format: OutputFormat,

    /// Fetch from this site instead of the configured one for this run only
    #[arg(long = "base-url", global = true, help_heading = "Display Options")]
    pub base_url: Option<String>,

    /// Update the base URL in config
    #[arg(long = "set-base-url", help_heading = "Configuration", value_name = "URL")]
    pub new_base_url: Option<String>,

    /// Update the User-Agent header in config
    #[arg(long = "set-user-agent", help_heading = "Configuration", value_name = "AGENT")]
    pub new_user_agent: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to the terminal, including debug level messages
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Game log of one team, indexed by date
    Games {
        /// Three-letter team abbreviation, e.g. CHI
        team: String,
        /// Year the season ends in
        season: i32,
        /// Use the playoff table; falls back to the regular season if the team missed the playoffs
        #[arg(long)]
        playoffs: bool,
    },
    /// Per-game team stats for every team in a season
    TeamStats {
        season: i32,
        /// Stats allowed to opponents instead of the team's own
        #[arg(long)]
        opponent: bool,
    },
    /// Per-game player stats for a season
    PlayerStats { season: i32 },
    /// Advanced player stats for a season
    Advanced { season: i32 },
}
