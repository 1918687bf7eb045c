use reqwest::Client;
use tracing::{debug, error, info, instrument, warn};

use super::fetch_utils::{FetchedPage, fetch_page_tables};
use super::http_client::create_http_client;
use super::tables::TableId;
use super::urls::{build_advanced_url, build_games_url, build_league_url, build_player_per_game_url};
use crate::config::Config;
use crate::data_fetcher::models::{StatsOutcome, Table};
use crate::data_fetcher::processors::{
    clean_advanced, clean_games, clean_player_per_game, clean_team_per_game,
};
use crate::error::AppError;

/// Uppercases a team abbreviation and checks it is three ASCII letters.
pub fn normalize_team(team: &str) -> Result<String, AppError> {
    let trimmed = team.trim();
    if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(trimmed.to_ascii_uppercase())
    } else {
        Err(AppError::InvalidTeam(team.to_string()))
    }
}

/// Checks that `season` is a four-digit year.
pub fn validate_season(season: i32) -> Result<i32, AppError> {
    if (1000..=9999).contains(&season) {
        Ok(season)
    } else {
        Err(AppError::InvalidSeason(season))
    }
}

/// Client for the four statistics pages.
///
/// Holds only the base URL and a pooled HTTP client, so it is cheap to clone
/// and every call is independent of the others.
#[derive(Debug, Clone)]
pub struct HoopsRefClient {
    client: Client,
    base_url: String,
}

impl HoopsRefClient {
    /// Builds a client from configuration. The user agent is applied to
    /// every request.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client(&config.user_agent)?;
        Ok(Self::with_client(client, &config.normalized_base_url()))
    }

    /// Wraps an existing HTTP client
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Game log of `team` for the season ending in `season`.
    ///
    /// With `playoffs` set, the playoff table is used. A team that missed the
    /// playoffs has no such table; the regular season log is returned then,
    /// with a warning in the log.
    ///
    /// Columns: `Opponent, Tm, Opp, Venue`, indexed by `Date`.
    #[instrument(skip(self))]
    pub async fn games(&self, team: &str, season: i32, playoffs: bool) -> Result<Table, AppError> {
        let team = normalize_team(team)?;
        let season = validate_season(season)?;
        let url = build_games_url(&self.base_url, &team, season);

        let page = fetch_page_tables(&self.client, &url).await?;
        let raw = select_games_table(&page, playoffs, &team, season)?;

        let cleaned = clean_games(raw)?;
        info!("Loaded {} game(s) for {team} {season}", cleaned.len());
        Ok(cleaned)
    }

    /// Per-game team stats, or the stats allowed to opponents when
    /// `opponent` is set. The league average row is removed.
    #[instrument(skip(self))]
    pub async fn per_game_team(&self, season: i32, opponent: bool) -> Result<Table, AppError> {
        let season = validate_season(season)?;
        let url = build_league_url(&self.base_url, season);
        let id = if opponent {
            TableId::OpponentPerGame
        } else {
            TableId::TeamPerGame
        };

        let raw = fetch_page_tables(&self.client, &url).await?.into_table(id)?;
        let cleaned = clean_team_per_game(raw)?;
        info!("Loaded {} team row(s) from {id}", cleaned.len());
        Ok(cleaned)
    }

    /// Per-game player stats.
    ///
    /// HTTP failures are reported as [`StatsOutcome::Unavailable`] rather
    /// than an error. Parsing and cleaning failures still return `Err`.
    #[instrument(skip(self))]
    pub async fn per_game_player(&self, season: i32) -> Result<StatsOutcome, AppError> {
        let season = validate_season(season)?;
        let url = build_player_per_game_url(&self.base_url, season);

        let page = match fetch_page_tables(&self.client, &url).await {
            Ok(page) => page,
            Err(e) if e.is_fetch_error() => {
                debug!("Player stats unavailable for {season}: {e}");
                return Ok(StatsOutcome::Unavailable {
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        let cleaned = clean_player_per_game(page.into_table(TableId::PlayerPerGame)?)?;
        debug!("Cleaned {} player row(s)", cleaned.len());
        Ok(StatsOutcome::from_table(cleaned))
    }

    /// Advanced player stats. HTTP failures are logged and reported as
    /// [`StatsOutcome::Unavailable`].
    #[instrument(skip(self))]
    pub async fn advanced(&self, season: i32) -> Result<StatsOutcome, AppError> {
        let season = validate_season(season)?;
        let url = build_advanced_url(&self.base_url, season);

        let page = match fetch_page_tables(&self.client, &url).await {
            Ok(page) => page,
            Err(e) if e.is_fetch_error() => {
                error!("Failed to load advanced stats for {season}: {e}");
                return Ok(StatsOutcome::Unavailable {
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        let cleaned = clean_advanced(page.into_table(TableId::PlayerAdvanced)?)?;
        debug!("Cleaned {} advanced row(s)", cleaned.len());
        Ok(StatsOutcome::from_table(cleaned))
    }
}

fn select_games_table<'a>(
    page: &'a FetchedPage,
    playoffs: bool,
    team: &str,
    season: i32,
) -> Result<&'a Table, AppError> {
    if !playoffs {
        return page.table(TableId::RegularSeasonGames);
    }
    match page.table(TableId::PlayoffGames) {
        Ok(table) => Ok(table),
        Err(e) if e.is_not_found() => {
            warn!("{team} did not make the playoffs in {season}, using regular season games");
            page.table(TableId::RegularSeasonGames)
        }
        Err(e) => Err(e),
    }
}
