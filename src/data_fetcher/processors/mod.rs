pub mod advanced;
pub mod games;
pub mod player_stats;
pub mod team_stats;

pub use advanced::clean_advanced;
pub use games::{clean_games, find_venue_column};
pub use player_stats::clean_player_per_game;
pub use team_stats::clean_team_per_game;
