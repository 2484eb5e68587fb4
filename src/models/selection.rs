//! UI selection models: tab, time range, theme

use std::fmt;
use std::str::FromStr;

use crate::utils::DashboardError;

/// Top-level page tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Transactions,
    Alerts,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Overview, Tab::Transactions, Tab::Alerts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Transactions => "transactions",
            Tab::Alerts => "alerts",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Transactions => "Transactions",
            Tab::Alerts => "Alerts",
        }
    }
}

impl FromStr for Tab {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overview" => Ok(Tab::Overview),
            "transactions" => Ok(Tab::Transactions),
            "alerts" => Ok(Tab::Alerts),
            _ => Err(DashboardError::invalid("tab", s)),
        }
    }
}

/// Time window selector in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    Today,
    Last24Hours,
    Last7Days,
    Last30Days,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Today => "today",
            TimeRange::Last24Hours => "24h",
            TimeRange::Last7Days => "7d",
            TimeRange::Last30Days => "30d",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Today => "Today",
            TimeRange::Last24Hours => "Last 24 hours",
            TimeRange::Last7Days => "Last 7 days",
            TimeRange::Last30Days => "Last 30 days",
        }
    }
}

impl FromStr for TimeRange {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(TimeRange::Today),
            "24h" => Ok(TimeRange::Last24Hours),
            "7d" => Ok(TimeRange::Last7Days),
            "30d" => Ok(TimeRange::Last30Days),
            _ => Err(DashboardError::invalid("range", s)),
        }
    }
}

/// Light or dark presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Exact match only: anything but "light" or "dark" counts as not set
    pub fn parse_exact(value: &str) -> Option<ThemeMode> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeMode::parse_exact(s).ok_or_else(|| DashboardError::invalid("theme", s))
    }
}

/// Page selection as read from the address
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiSelection {
    pub tab: Tab,
    pub range: TimeRange,
    pub search: String,
    /// Theme requested explicitly through the address, if any
    pub theme: Option<ThemeMode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_round_trip_names() {
        for tab in Tab::ALL {
            assert_eq!(tab.as_str().parse::<Tab>().unwrap(), tab);
        }
        assert!("Overview".parse::<Tab>().is_err());
    }

    #[test]
    fn test_range_parse() {
        assert_eq!("7d".parse::<TimeRange>().unwrap(), TimeRange::Last7Days);
        assert!("1y".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_theme_exact_match() {
        assert_eq!(ThemeMode::parse_exact("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse_exact("Dark"), None);
        assert_eq!(ThemeMode::parse_exact(""), None);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }
}
