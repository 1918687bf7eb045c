//! HTML fixtures shaped like the statistics pages, for unit and integration
//! tests. Layout mirrors the live pages: unnamed marker columns, repeated
//! header rows inside `<tbody>`, league average rows in `<tfoot>`, and
//! tables hidden inside HTML comments.

use std::fmt::Write;

/// One row of a team game log
#[derive(Debug, Clone)]
pub struct GameRow {
    pub date: String,
    pub opponent: String,
    pub away: bool,
    /// `None` for games not yet played
    pub score: Option<(i32, i32)>,
}

impl GameRow {
    pub fn played(date: &str, opponent: &str, away: bool, tm: i32, opp: i32) -> Self {
        Self {
            date: date.to_string(),
            opponent: opponent.to_string(),
            away,
            score: Some((tm, opp)),
        }
    }

    pub fn scheduled(date: &str, opponent: &str, away: bool) -> Self {
        Self {
            date: date.to_string(),
            opponent: opponent.to_string(),
            away,
            score: None,
        }
    }
}

/// One row of a team per-game table
#[derive(Debug, Clone)]
pub struct TeamRow {
    pub name: String,
    pub made_playoffs: bool,
    pub games: u32,
    pub points: f64,
}

impl TeamRow {
    pub fn new(name: &str, made_playoffs: bool, games: u32, points: f64) -> Self {
        Self {
            name: name.to_string(),
            made_playoffs,
            games,
            points,
        }
    }
}

/// One row of a player table
#[derive(Debug, Clone)]
pub struct PlayerRow {
    pub name: String,
    pub position: String,
    pub age: u32,
    pub team: String,
    pub games: u32,
    pub points: f64,
}

impl PlayerRow {
    pub fn new(name: &str, position: &str, age: u32, team: &str, games: u32, points: f64) -> Self {
        Self {
            name: name.to_string(),
            position: position.to_string(),
            age,
            team: team.to_string(),
            games,
            points,
        }
    }
}

/// Builders for whole HTML pages
pub struct TestPageBuilder;

const GAMES_HEADER: [&str; 15] = [
    "G", "Date", "Start (ET)", "", "", "", "Opponent", "", "", "Tm", "Opp", "W", "L", "Streak",
    "Notes",
];

const ADVANCED_HEADER: [&str; 29] = [
    "Rk", "Player", "Pos", "Age", "Tm", "G", "MP", "PER", "TS%", "3PAr", "FTr", "ORB%", "DRB%",
    "TRB%", "AST%", "STL%", "BLK%", "TOV%", "USG%", "", "OWS", "DWS", "WS", "WS/48", "", "OBPM",
    "DBPM", "BPM", "VORP",
];

const PLAYER_HEADER: [&str; 10] = [
    "Rk", "Player", "Pos", "Age", "Tm", "G", "GS", "MP", "FG%", "PTS",
];

const TEAM_HEADER: [&str; 5] = ["Rk", "Team", "G", "MP", "PTS"];

/// Repeated header rows appear after every this many body rows
const HEADER_REPEAT: usize = 20;

fn header_row(labels: &[&str], class: Option<&str>) -> String {
    let mut out = match class {
        Some(class) => format!("<tr class=\"{class}\">"),
        None => "<tr>".to_string(),
    };
    for label in labels {
        let _ = write!(out, "<th>{label}</th>");
    }
    out.push_str("</tr>");
    out
}

fn data_row(cells: &[String]) -> String {
    let mut out = "<tr>".to_string();
    for (i, cell) in cells.iter().enumerate() {
        // First cell is a row header on the live site
        if i == 0 {
            let _ = write!(out, "<th scope=\"row\">{cell}</th>");
        } else {
            let _ = write!(out, "<td>{cell}</td>");
        }
    }
    out.push_str("</tr>");
    out
}

fn table(id: &str, header: &[&str], rows: &[String], footer: Option<String>) -> String {
    let mut body = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 && i % HEADER_REPEAT == 0 {
            body.push_str(&header_row(header, Some("thead")));
        }
        body.push_str(row);
    }
    let foot = footer
        .map(|row| format!("<tfoot>{row}</tfoot>"))
        .unwrap_or_default();
    format!(
        "<table id=\"{id}\"><caption>{id}</caption><thead>{}</thead><tbody>{body}</tbody>{foot}</table>",
        header_row(header, None)
    )
}

fn page(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>{title}</title></head><body>\
         <div id=\"content\">{content}</div>\
         <!-- <div><table id=\"hidden\"><tr><th>Hidden</th></tr><tr><td>1</td></tr></table></div> -->\
         </body></html>"
    )
}

fn game_rows(games: &[GameRow]) -> Vec<String> {
    games
        .iter()
        .enumerate()
        .map(|(i, game)| {
            let (box_score, result, tm, opp) = match game.score {
                Some((tm, opp)) => (
                    "<a href=\"/boxscores/game.html\">Box Score</a>".to_string(),
                    if tm > opp { "W" } else { "L" }.to_string(),
                    tm.to_string(),
                    opp.to_string(),
                ),
                None => (String::new(), String::new(), String::new(), String::new()),
            };
            data_row(&[
                (i + 1).to_string(),
                format!("<a href=\"/boxscores/index.html\">{}</a>", game.date),
                "8:00p".to_string(),
                String::new(),
                box_score,
                if game.away { "@" } else { "" }.to_string(),
                format!("<a href=\"/teams/XXX/2022.html\">{}</a>", game.opponent),
                result,
                String::new(),
                tm,
                opp,
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ])
        })
        .collect()
}

fn team_rows(teams: &[TeamRow]) -> Vec<String> {
    teams
        .iter()
        .enumerate()
        .map(|(i, team)| {
            let marker = if team.made_playoffs { "*" } else { "" };
            data_row(&[
                (i + 1).to_string(),
                format!("<a href=\"/teams/XXX/2022.html\">{}</a>{marker}", team.name),
                team.games.to_string(),
                "241.5".to_string(),
                format!("{:.1}", team.points),
            ])
        })
        .collect()
}

fn player_cells(i: usize, player: &PlayerRow) -> Vec<String> {
    vec![
        (i + 1).to_string(),
        format!("<a href=\"/players/x/xxx.html\">{}</a>", player.name),
        player.position.clone(),
        player.age.to_string(),
        player.team.clone(),
        player.games.to_string(),
    ]
}

impl TestPageBuilder {
    /// A team games page. The playoffs table is only present when given.
    pub fn games_page(regular: &[GameRow], playoffs: Option<&[GameRow]>) -> String {
        let mut content = table("games", &GAMES_HEADER, &game_rows(regular), None);
        if let Some(playoffs) = playoffs {
            content.push_str(&table(
                "games_playoffs",
                &GAMES_HEADER,
                &game_rows(playoffs),
                None,
            ));
        }
        page("Schedule and Results", &content)
    }

    /// A league overview page with four leading tables, team per-game stats
    /// at position 4 and opponent per-game stats at position 5
    pub fn league_page(teams: &[TeamRow], opponents: &[TeamRow]) -> String {
        let mut content = String::new();
        for id in ["confs_standings_E", "confs_standings_W", "divs_standings_E", "divs_standings_W"] {
            content.push_str(&table(
                id,
                &["Team", "W", "L"],
                &[data_row(&["Team".to_string(), "1".to_string(), "0".to_string()])],
                None,
            ));
        }
        let average = |rows: &[TeamRow]| {
            let points = rows.iter().map(|t| t.points).sum::<f64>() / rows.len().max(1) as f64;
            data_row(&[
                String::new(),
                "League Average".to_string(),
                "82".to_string(),
                "241.5".to_string(),
                format!("{points:.1}"),
            ])
        };
        content.push_str(&table(
            "per_game-team",
            &TEAM_HEADER,
            &team_rows(teams),
            Some(average(teams)),
        ));
        content.push_str(&table(
            "per_game-opponent",
            &TEAM_HEADER,
            &team_rows(opponents),
            Some(average(opponents)),
        ));
        page("NBA Season Summary", &content)
    }

    /// A per-game player stats page
    pub fn player_per_game_page(players: &[PlayerRow]) -> String {
        let rows: Vec<String> = players
            .iter()
            .enumerate()
            .map(|(i, player)| {
                let mut cells = player_cells(i, player);
                cells.extend([
                    player.games.to_string(),
                    "33.4".to_string(),
                    // Players without attempts have an empty percentage
                    if player.points > 0.0 { ".476" } else { "" }.to_string(),
                    format!("{:.1}", player.points),
                ]);
                data_row(&cells)
            })
            .collect();
        page(
            "Player Per Game Stats",
            &table("per_game_stats", &PLAYER_HEADER, &rows, None),
        )
    }

    /// An advanced player stats page with spacer columns at positions 19 and 24
    pub fn advanced_page(players: &[PlayerRow]) -> String {
        let rows: Vec<String> = players
            .iter()
            .enumerate()
            .map(|(i, player)| {
                let mut cells = player_cells(i, player);
                cells.extend(
                    [
                        "2456", "18.3", ".574", ".295", ".326", "2.6", "12.4", "7.6", "21.2",
                        "1.3", "0.9", "9.4", "29.7", "", "4.1", "2.0", "6.1", ".119", "", "2.1",
                        "-0.9", "1.2", "1.9",
                    ]
                    .map(String::from),
                );
                data_row(&cells)
            })
            .collect();
        page(
            "Player Advanced Stats",
            &table("advanced_stats", &ADVANCED_HEADER, &rows, None),
        )
    }

    /// A run of played games with alternating venues
    pub fn season_games(count: usize) -> Vec<GameRow> {
        (0..count)
            .map(|i| {
                GameRow::played(
                    &format!("Game Day {}", i + 1),
                    "Detroit Pistons",
                    i % 2 == 1,
                    100 + i as i32,
                    95 + (i % 10) as i32,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::html_table::parse_tables;

    #[test]
    fn test_games_page_layout() {
        let html = TestPageBuilder::games_page(&TestPageBuilder::season_games(25), None);
        let tables = parse_tables(&html).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].len(), 26); // one repeated header row
        assert_eq!(tables[0].column_names()[5], "Unnamed: 5");
    }

    #[test]
    fn test_league_page_layout() {
        let html = TestPageBuilder::league_page(
            &[TeamRow::new("Chicago Bulls", true, 82, 111.6)],
            &[TeamRow::new("Chicago Bulls", true, 82, 112.0)],
        );
        let tables = parse_tables(&html).unwrap();
        assert_eq!(tables.len(), 6);
        assert_eq!(tables[4].len(), 2);
    }

    #[test]
    fn test_advanced_page_width() {
        let html = TestPageBuilder::advanced_page(&[PlayerRow::new(
            "Zach LaVine",
            "SG",
            26,
            "CHI",
            67,
            24.4,
        )]);
        let tables = parse_tables(&html).unwrap();
        assert_eq!(tables[0].width(), 29);
        assert_eq!(tables[0].rows()[0].len(), 29);
    }
}
