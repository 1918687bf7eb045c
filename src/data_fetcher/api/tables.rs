//! Semantic names for the positional tables on each page.
//!
//! The site does not give its tables stable identifiers that survive in the
//! DOM, so tables are addressed by position. All positions live here.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    /// Regular season schedule and results on a team's games page
    RegularSeasonGames,
    /// Playoff results on a team's games page; absent when the team missed
    PlayoffGames,
    /// Team per-game stats on the league overview page
    TeamPerGame,
    /// Opponent per-game stats on the league overview page
    OpponentPerGame,
    /// Player per-game stats page
    PlayerPerGame,
    /// Player advanced stats page
    PlayerAdvanced,
}

impl TableId {
    /// Zero-based position of the table among the tables of its page
    pub fn index(self) -> usize {
        match self {
            TableId::RegularSeasonGames => 0,
            TableId::PlayoffGames => 1,
            TableId::TeamPerGame => 4,
            TableId::OpponentPerGame => 5,
            TableId::PlayerPerGame => 0,
            TableId::PlayerAdvanced => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TableId::RegularSeasonGames => "regular-season-games",
            TableId::PlayoffGames => "playoff-games",
            TableId::TeamPerGame => "team-per-game",
            TableId::OpponentPerGame => "opponent-per-game",
            TableId::PlayerPerGame => "player-per-game",
            TableId::PlayerAdvanced => "player-advanced",
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (table {})", self.label(), self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions() {
        assert_eq!(TableId::RegularSeasonGames.index(), 0);
        assert_eq!(TableId::PlayoffGames.index(), 1);
        assert_eq!(TableId::TeamPerGame.index(), 4);
        assert_eq!(TableId::OpponentPerGame.index(), 5);
        assert_eq!(TableId::PlayerPerGame.index(), 0);
        assert_eq!(TableId::PlayerAdvanced.index(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(TableId::PlayoffGames.to_string(), "playoff-games (table 1)");
    }
}
