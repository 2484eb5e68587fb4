//! Data models for the dashboard
//!
//! Transaction rows, KPI cards, alerts and the user's page selection.
//! Status, channel and selection fields are closed enums; unknown text is
//! rejected when a record is built.

pub mod alert;
pub mod kpi;
pub mod selection;
pub mod transaction;

// Re-export commonly used types for convenience
pub use alert::{AlertEntry, AlertFilter, AlertKind, AlertPolicy, AlertSeverity, ReadState};
pub use kpi::{DeltaTrend, KpiEntry};
pub use selection::{Tab, ThemeMode, TimeRange, UiSelection};
pub use transaction::{Channel, ChannelSet, Transaction, TxStatus};
