use std::fmt;

/// Where a game was played from the perspective of the team whose game log
/// was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    /// The game log marks road games with `@` and leaves home games blank
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker.map(str::trim) {
            None | Some("") => Venue::Home,
            Some(_) => Venue::Away,
        }
    }

    /// Single-character form (`H` / `A`)
    pub fn as_char(self) -> char {
        match self {
            Venue::Home => 'H',
            Venue::Away => 'A',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Venue::Home => "Home",
            Venue::Away => "Away",
        }
    }

    /// Parses either the long (`Home`) or single-character (`H`) form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Home" | "H" => Some(Venue::Home),
            "Away" | "A" => Some(Venue::Away),
            _ => None,
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_marker() {
        assert_eq!(Venue::from_marker(None), Venue::Home);
        assert_eq!(Venue::from_marker(Some("")), Venue::Home);
        assert_eq!(Venue::from_marker(Some("@")), Venue::Away);
    }

    #[test]
    fn test_forms() {
        assert_eq!(Venue::Home.as_char(), 'H');
        assert_eq!(Venue::Away.to_string(), "Away");
        assert_eq!(Venue::parse("A"), Some(Venue::Away));
        assert_eq!(Venue::parse("Home"), Some(Venue::Home));
        assert_eq!(Venue::parse("N"), None);
    }
}
