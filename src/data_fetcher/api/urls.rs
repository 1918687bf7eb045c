//! URL building utilities for the four statistics pages

/// Builds the game log URL for a team and season.
///
/// # Example
/// ```
/// use hoops_ref::data_fetcher::api::build_games_url;
///
/// let url = build_games_url("https://www.basketball-reference.com", "CHI", 2022);
/// assert_eq!(url, "https://www.basketball-reference.com/teams/CHI/2022_games.html");
/// ```
pub fn build_games_url(base_url: &str, team: &str, season: i32) -> String {
    format!("{base_url}/teams/{team}/{season}_games.html")
}

/// Builds the league overview URL holding the team per-game tables.
///
/// # Example
/// ```
/// use hoops_ref::data_fetcher::api::build_league_url;
///
/// let url = build_league_url("https://www.basketball-reference.com", 2022);
/// assert_eq!(url, "https://www.basketball-reference.com/leagues/NBA_2022.html");
/// ```
pub fn build_league_url(base_url: &str, season: i32) -> String {
    format!("{base_url}/leagues/NBA_{season}.html")
}

/// Builds the per-game player stats URL.
///
/// # Example
/// ```
/// use hoops_ref::data_fetcher::api::build_player_per_game_url;
///
/// let url = build_player_per_game_url("https://www.basketball-reference.com", 2022);
/// assert_eq!(url, "https://www.basketball-reference.com/leagues/NBA_2022_per_game.html");
/// ```
pub fn build_player_per_game_url(base_url: &str, season: i32) -> String {
    format!("{base_url}/leagues/NBA_{season}_per_game.html")
}

/// Builds the advanced player stats URL.
///
/// # Example
/// ```
/// use hoops_ref::data_fetcher::api::build_advanced_url;
///
/// let url = build_advanced_url("https://www.basketball-reference.com", 2022);
/// assert_eq!(url, "https://www.basketball-reference.com/leagues/NBA_2022_advanced.html");
/// ```
pub fn build_advanced_url(base_url: &str, season: i32) -> String {
    format!("{base_url}/leagues/NBA_{season}_advanced.html")
}
