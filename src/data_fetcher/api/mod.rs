pub mod fetch_utils;
pub mod http_client;
pub mod tables;
pub mod urls;
mod core;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client;
// Re-export table fetching
pub use fetch_utils::{FetchedPage, fetch_page, fetch_page_tables, fetch_table};
pub use tables::TableId;
// Re-export the client
pub use core::*;
