pub mod api;
pub mod html_table;
pub mod models;
pub mod processors;

pub use api::{HoopsRefClient, TableId, fetch_table};
pub use html_table::parse_tables;
pub use models::{Cell, DType, StatsOutcome, Table, Venue};
