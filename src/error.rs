use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("Page not found (404): {url}")]
    PageNotFound { url: String },

    #[error("Client error ({status}): {message} (URL: {url})")]
    ClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Server error ({status}): {message} (URL: {url})")]
    ServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Service unavailable ({status}): {message} (URL: {url})")]
    ServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Table extraction and cleaning errors
    #[error("Failed to parse HTML: {0}")]
    HtmlParse(String),

    #[error("Table {index} not found: page has {found} table(s) (URL: {url})")]
    TableNotFound {
        index: usize,
        found: usize,
        url: String,
    },

    #[error("Column '{column}' not found in table")]
    MissingColumn { column: String },

    #[error("Column '{column}' already exists in table")]
    DuplicateColumn { column: String },

    #[error("Cannot cast value '{value}' in column '{column}' to {target}")]
    CellCast {
        column: String,
        value: String,
        target: &'static str,
    },

    // Input validation errors
    #[error("Invalid team abbreviation: '{0}' (expected 3 letters, e.g. CHI)")]
    InvalidTeam(String),

    #[error("Invalid season: {0} (expected the four-digit year the season ends)")]
    InvalidSeason(i32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a page not found error
    pub fn page_not_found(url: impl Into<String>) -> Self {
        Self::PageNotFound { url: url.into() }
    }

    /// Create a client error (4xx status codes except 404)
    pub fn client_error(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a server error (5xx status codes)
    pub fn server_error(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a service unavailable error (502/503)
    pub fn service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an HTML parse error with context
    pub fn html_parse_error(msg: impl Into<String>) -> Self {
        Self::HtmlParse(msg.into())
    }

    /// Create a table-not-found error for an out of range table index
    pub fn table_not_found(index: usize, found: usize, url: impl Into<String>) -> Self {
        Self::TableNotFound {
            index,
            found,
            url: url.into(),
        }
    }

    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create a duplicate column error
    pub fn duplicate_column(column: impl Into<String>) -> Self {
        Self::DuplicateColumn {
            column: column.into(),
        }
    }

    /// Create a cell cast error
    pub fn cell_cast(
        column: impl Into<String>,
        value: impl Into<String>,
        target: &'static str,
    ) -> Self {
        Self::CellCast {
            column: column.into(),
            value: value.into(),
            target,
        }
    }

    /// Maps an HTTP status code to the matching error variant
    pub fn from_status(status_code: u16, reason: &str, url: &str) -> Self {
        match status_code {
            404 => AppError::page_not_found(url),
            400..=499 => AppError::client_error(status_code, reason, url),
            502 | 503 => AppError::service_unavailable(status_code, reason, url),
            _ => AppError::server_error(status_code, reason, url),
        }
    }

    /// Check if error happened at the HTTP level (transport failure or
    /// non-success status), as opposed to parsing or cleaning
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            AppError::Fetch(_)
                | AppError::PageNotFound { .. }
                | AppError::ClientError { .. }
                | AppError::ServerError { .. }
                | AppError::ServiceUnavailable { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
        )
    }

    /// Check if error indicates the requested table does not exist on the page
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::TableNotFound { .. })
    }
}
