pub mod table;
pub mod errors;
pub mod format;
pub mod rng;

pub use table::Table;
pub use errors::{user_message, DashboardError, Result};
pub use format::format_won;
pub use rng::Mulberry32;
