//! Alert feed models

use std::fmt;
use std::str::FromStr;

use crate::utils::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "low",
            AlertSeverity::Medium => "medium",
            AlertSeverity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadState {
    Unread,
    Read,
    Acknowledged,
}

/// One entry of the alert feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertEntry {
    pub id: u32,
    pub kind: AlertKind,
    pub title: String,
    pub description: String,
    /// Relative time as displayed, e.g. "10m ago"
    pub when: String,
    pub service: String,
    pub state: ReadState,
    pub severity: AlertSeverity,
    /// Suggested follow-up, e.g. "investigate"
    pub action: String,
}

/// Threshold rule listed on the alerts tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertPolicy {
    pub metric: String,
    pub threshold: String,
    pub window: String,
}

/// Alert list view filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertFilter {
    #[default]
    All,
    Unread,
    Critical,
}

impl AlertFilter {
    pub const ALL: [AlertFilter; 3] = [AlertFilter::All, AlertFilter::Unread, AlertFilter::Critical];

    pub fn matches(&self, alert: &AlertEntry) -> bool {
        match self {
            AlertFilter::All => true,
            AlertFilter::Unread => alert.state == ReadState::Unread,
            AlertFilter::Critical => alert.severity == AlertSeverity::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertFilter::All => "all",
            AlertFilter::Unread => "unread",
            AlertFilter::Critical => "critical",
        }
    }
}

impl fmt::Display for AlertFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertFilter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(AlertFilter::All),
            "unread" => Ok(AlertFilter::Unread),
            "critical" | "urgent" => Ok(AlertFilter::Critical),
            _ => Err(DashboardError::invalid("alert filter", s)),
        }
    }
}
