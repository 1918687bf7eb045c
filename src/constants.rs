//! Application-wide constants and configuration values
//!
//! This module centralizes the site layout knowledge (table positions, header
//! labels, spacer columns) so that upstream page changes only need to be
//! fixed in one place.

/// Default site the client talks to
pub const DEFAULT_BASE_URL: &str = "https://www.basketball-reference.com";

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "hoops_ref.log";

/// Returns the default User-Agent header sent with every request
pub fn default_user_agent() -> String {
    format!("hoops_ref/{}", env!("CARGO_PKG_VERSION"))
}

/// Environment variables that override config file values
pub mod env_vars {
    pub const BASE_URL: &str = "HOOPS_REF_BASE_URL";
    pub const USER_AGENT: &str = "HOOPS_REF_USER_AGENT";
    pub const LOG_FILE: &str = "HOOPS_REF_LOG_FILE";
}

/// Column labels used by the cleaning transforms
pub mod columns {
    pub const DATE: &str = "Date";
    pub const OPPONENT: &str = "Opponent";
    pub const TEAM_SCORE: &str = "Tm";
    pub const OPPONENT_SCORE: &str = "Opp";
    pub const VENUE: &str = "Venue";
    pub const TEAM: &str = "Team";
    pub const PLAYER: &str = "Player";
    pub const AGE: &str = "Age";
    pub const POSITION: &str = "Pos";

    /// Marker the game log puts in its unnamed venue column for road games
    pub const AWAY_MARKER: &str = "@";

    /// Marker appended to team names that reached the playoffs
    pub const PLAYOFF_TEAM_MARKER: char = '*';

    /// Spacer columns the advanced stats page injects between stat groups
    pub const ADVANCED_SPACERS: [&str; 2] = ["Unnamed: 19", "Unnamed: 24"];

    /// Number of leading identity columns in the per-game player table
    /// (rank, player, position, age, team); everything after is a stat
    pub const PLAYER_IDENTITY_COLUMNS: usize = 5;

    /// Prefix given to header cells with no label
    pub const UNNAMED_PREFIX: &str = "Unnamed: ";
}
