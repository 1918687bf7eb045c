//! Basketball-Reference statistics client library
//!
//! Fetches statistics pages from basketball-reference, picks one table per
//! page and cleans it into a typed [`Table`]: team game logs, team and
//! opponent per-game stats, player per-game stats and advanced player stats.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hoops_ref::config::Config;
//! use hoops_ref::data_fetcher::{HoopsRefClient, StatsOutcome};
//! use hoops_ref::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = HoopsRefClient::new(&Config::default())?;
//!
//!     // Regular season game log of the 2021-22 Chicago Bulls
//!     let games = client.games("CHI", 2022, false).await?;
//!     println!("{} games played", games.len());
//!
//!     // Player stats report unreachable pages instead of failing
//!     match client.advanced(2022).await? {
//!         StatsOutcome::Data(table) => println!("{} players", table.len()),
//!         StatsOutcome::Empty => println!("No players yet"),
//!         StatsOutcome::Unavailable { reason } => eprintln!("Unavailable: {reason}"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod output;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{HoopsRefClient, TableId};
pub use data_fetcher::models::{Cell, DType, StatsOutcome, Table, Venue};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
