pub mod cell;
pub mod outcome;
pub mod table;
pub mod venue;

pub use cell::{Cell, DType};
pub use outcome::StatsOutcome;
pub use table::{Column, RowIndex, Table};
pub use venue::Venue;
