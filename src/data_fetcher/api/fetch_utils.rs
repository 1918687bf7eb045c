//! Page fetching and positional table extraction

use reqwest::Client;
use tracing::{debug, error, info, instrument};

use super::tables::TableId;
use crate::data_fetcher::html_table::parse_tables;
use crate::data_fetcher::models::Table;
use crate::error::AppError;

/// All tables of one fetched page, in document order.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    url: String,
    tables: Vec<Table>,
}

impl FetchedPage {
    /// Wraps already parsed tables. Mostly useful for tests.
    pub fn new(url: impl Into<String>, tables: Vec<Table>) -> Self {
        Self {
            url: url.into(),
            tables,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Table at zero-based `index`, or `TableNotFound` when out of range
    pub fn table_at(&self, index: usize) -> Result<&Table, AppError> {
        self.tables
            .get(index)
            .ok_or_else(|| AppError::table_not_found(index, self.tables.len(), &self.url))
    }

    pub fn table(&self, id: TableId) -> Result<&Table, AppError> {
        self.table_at(id.index())
    }

    /// Consumes the page and returns the table `id` without cloning it
    pub fn into_table(mut self, id: TableId) -> Result<Table, AppError> {
        let index = id.index();
        if index >= self.tables.len() {
            return Err(AppError::table_not_found(index, self.tables.len(), &self.url));
        }
        Ok(self.tables.swap_remove(index))
    }
}

/// Fetches `url` and returns the response body.
///
/// Non-success statuses map to the matching [`AppError`] variant. Transport
/// errors are split into timeout, connection and other failures. There is no
/// retry; each call is one round-trip.
#[instrument(skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching page: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::Fetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status_code, reason, url);
        return Err(AppError::from_status(status_code, reason, url));
    }

    let body = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response body from URL {}: {}", url, e);
            return Err(AppError::Fetch(e));
        }
    };

    debug!("Response length: {} bytes", body.len());
    Ok(body)
}

/// Fetches `url` and parses every table on the page
pub async fn fetch_page_tables(client: &Client, url: &str) -> Result<FetchedPage, AppError> {
    let body = fetch_page(client, url).await?;
    let tables = parse_tables(&body)?;
    info!("Found {} table(s) at {}", tables.len(), url);
    Ok(FetchedPage::new(url, tables))
}

/// Fetches `url` and returns the table identified by `id`.
///
/// Fails with a fetch error when the request fails and with
/// `AppError::TableNotFound` when the page has fewer tables than `id` needs.
pub async fn fetch_table(client: &Client, url: &str, id: TableId) -> Result<Table, AppError> {
    debug!("Selecting {id} from {url}");
    fetch_page_tables(client, url).await?.into_table(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    const TWO_TABLES: &str = r#"
        <html><body>
          <table><thead><tr><th>A</th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>
          <table><thead><tr><th>B</th></tr></thead><tbody><tr><td>x</td></tr></tbody></table>
        </body></html>"#;

    #[tokio::test]
    async fn test_fetch_table_selects_by_position() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/page.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(TWO_TABLES))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/page.html", mock_server.uri());
        let table = fetch_table(&client, &url, TableId::PlayoffGames)
            .await
            .unwrap();
        assert_eq!(table.column_names(), vec!["B"]);
    }

    #[tokio::test]
    async fn test_fetch_table_out_of_range() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/page.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(TWO_TABLES))
            .mount(&mock_server)
            .await;

        let url = format!("{}/page.html", mock_server.uri());
        let err = fetch_table(&client, &url, TableId::TeamPerGame)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::TableNotFound {
                index: 4,
                found: 2,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_fetch_page_maps_status_codes() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/missing.html"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/down.html"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/broken.html"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let missing = fetch_page(&client, &format!("{}/missing.html", mock_server.uri())).await;
        assert!(matches!(missing, Err(AppError::PageNotFound { .. })));

        let down = fetch_page(&client, &format!("{}/down.html", mock_server.uri())).await;
        assert!(matches!(
            down,
            Err(AppError::ServiceUnavailable { status: 503, .. })
        ));

        let broken = fetch_page(&client, &format!("{}/broken.html", mock_server.uri())).await;
        assert!(matches!(
            broken,
            Err(AppError::ServerError { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_page_connection_refused() {
        let client = create_test_http_client();
        // Port 9 (discard) is closed on test machines
        let result = fetch_page(&client, "http://127.0.0.1:9/page.html").await;
        let err = result.unwrap_err();
        assert!(err.is_fetch_error());
    }

    #[test]
    fn test_fetched_page_accessors() {
        let page = FetchedPage::new("http://example.com", vec![Table::empty()]);
        assert_eq!(page.table_count(), 1);
        assert_eq!(page.url(), "http://example.com");
        assert!(page.table(TableId::RegularSeasonGames).is_ok());
        assert!(page.table(TableId::PlayoffGames).unwrap_err().is_not_found());
    }
}
