//! Text commands typed under the page
//!
//! Each line parses into one [`Command`]. Page interactions become a
//! [`UiEvent`] for the dashboard's dispatch table; the rest are handled by
//! the host loop.

pub mod help;

use std::path::PathBuf;
use std::str::FromStr;

use tokio::time::Instant;
use tracing::warn;

use crate::app::{Dashboard, UiEvent};
use crate::models::{AlertFilter, Channel, Tab, ThemeMode, TimeRange};
use crate::services::chart_service::write_throughput_svg;
use crate::services::export_service::write_rows_json;
use crate::services::system_theme_service::SystemThemeSignal;
use crate::store::{AddressBar, KeyValueStore};
use crate::utils::{user_message, DashboardError, Result};
use crate::views::TerminalSurface;

pub type TerminalDashboard<P> = Dashboard<AddressBar, P, TerminalSurface>;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    /// Simulated OS color-scheme change
    SystemTheme(ThemeMode),
    Chart(PathBuf),
    Export(PathBuf),
    Url,
    Help,
    Quit,
}

fn required<'a>(field: &'static str, args: &[&'a str]) -> Result<&'a str> {
    args.first()
        .copied()
        .ok_or_else(|| DashboardError::invalid(field, ""))
}

/// `all` clears the filter; anything else must parse
fn optional_filter<T>(field: &'static str, args: &[&str]) -> Result<Option<T>>
where
    T: FromStr<Err = DashboardError>,
{
    let value = required(field, args)?;
    if value.eq_ignore_ascii_case("all") {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// `-` leaves the bound open; `₩` and thousands separators are accepted
fn amount_bound(value: Option<&str>) -> Result<Option<u64>> {
    match value {
        None | Some("-") => Ok(None),
        Some(raw) => {
            let digits: String = raw.chars().filter(|c| *c != ',' && *c != '₩').collect();
            digits
                .parse()
                .map(Some)
                .map_err(|_| DashboardError::invalid("amount", raw))
        }
    }
}

/// Parse one input line; blank lines give `None`
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    if command.is_empty() {
        return Ok(None);
    }
    let args: Vec<&str> = rest.split_whitespace().collect();

    let parsed = match command.to_lowercase().as_str() {
        "tab" | "t" => {
            let tab: Tab = required("tab", &args)?.to_lowercase().parse()?;
            Command::Event(UiEvent::SelectTab(tab))
        }
        "overview" | "o" => Command::Event(UiEvent::SelectTab(Tab::Overview)),
        "transactions" | "tx" => Command::Event(UiEvent::SelectTab(Tab::Transactions)),
        "range" | "r" => {
            let range: TimeRange = required("range", &args)?.to_lowercase().parse()?;
            Command::Event(UiEvent::SelectRange(range))
        }
        "search" | "s" | "/" => Command::Event(UiEvent::EditSearch(rest.to_string())),
        "theme" => match args.first() {
            None => Command::Event(UiEvent::ToggleTheme),
            Some(mode) => Command::Event(UiEvent::ChooseTheme(mode.to_lowercase().parse()?)),
        },
        "os" => Command::SystemTheme(required("theme", &args)?.to_lowercase().parse()?),
        "status" => Command::Event(UiEvent::FilterStatus(optional_filter("status", &args)?)),
        "channel" | "ch" => {
            let channel: Option<Channel> = optional_filter("channel", &args)?;
            Command::Event(UiEvent::FilterChannel(channel))
        }
        "amount" => {
            let min = amount_bound(args.first().copied())?;
            let max = amount_bound(args.get(1).copied())?;
            if let (Some(min), Some(max)) = (min, max) {
                if min > max {
                    return Err(DashboardError::invalid("amount range", format!("{} {}", min, max)));
                }
            }
            Command::Event(UiEvent::FilterAmount { min, max })
        }
        "alerts" | "a" => match args.first() {
            None => Command::Event(UiEvent::SelectTab(Tab::Alerts)),
            Some(filter) => Command::Event(UiEvent::FilterAlerts(AlertFilter::from_str(filter)?)),
        },
        "read-all" | "ack" => Command::Event(UiEvent::MarkAllAlertsRead),
        "reset-filters" | "reset" => Command::Event(UiEvent::ResetFilters),
        "chart" => Command::Chart(PathBuf::from(required("path", &args)?)),
        "export" => Command::Export(PathBuf::from(required("path", &args)?)),
        "url" => Command::Url,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(DashboardError::UnknownCommand(other.to_string())),
    };
    Ok(Some(parsed))
}

/// What the host loop should do after a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Render,
    Text(String),
    Nothing,
    Quit,
}

/// Handle one input line; failures come back as a one-line user message
pub fn handle_line<P: KeyValueStore>(
    dash: &mut TerminalDashboard<P>,
    signal: &SystemThemeSignal,
    line: &str,
    now: Instant,
) -> Reply {
    let result = match parse_command(line) {
        Ok(Some(command)) => execute(dash, signal, command, now),
        Ok(None) => Ok(Reply::Nothing),
        Err(e) => Err(e),
    };

    match result {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Command '{}' failed: {}", line.trim(), e);
            Reply::Text(user_message(&e))
        }
    }
}

fn execute<P: KeyValueStore>(
    dash: &mut TerminalDashboard<P>,
    signal: &SystemThemeSignal,
    command: Command,
    now: Instant,
) -> Result<Reply> {
    match command {
        Command::Event(event) => Ok(if dash.dispatch(event, now) {
            Reply::Render
        } else {
            Reply::Nothing
        }),
        // The change comes back through the subscription like a real OS signal
        Command::SystemTheme(mode) => {
            signal.publish(mode);
            Ok(Reply::Nothing)
        }
        Command::Chart(path) => {
            let caption = format!("Real-time throughput ({})", dash.selection().range.label());
            write_throughput_svg(&path, dash.throughput(), dash.theme_mode(), &caption)?;
            Ok(Reply::Text(format!("📊 Chart written to {}", path.display())))
        }
        Command::Export(path) => {
            let count = write_rows_json(&path, &dash.visible_rows())?;
            Ok(Reply::Text(format!("💾 Exported {} rows to {}", count, path.display())))
        }
        Command::Url => Ok(Reply::Text(dash.address().href().to_string())),
        Command::Help => Ok(Reply::Text(help::help_text(&dash.surface().palette()))),
        Command::Quit => Ok(Reply::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TxStatus;
    use crate::services::system_theme_service::subscribe;
    use crate::views::test_support::dashboard;

    fn event(line: &str) -> UiEvent {
        match parse_command(line).unwrap() {
            Some(Command::Event(event)) => event,
            other => panic!("expected an event for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn test_navigation() {
        assert_eq!(event("tab Transactions"), UiEvent::SelectTab(Tab::Transactions));
        assert_eq!(event("o"), UiEvent::SelectTab(Tab::Overview));
        assert_eq!(event("alerts"), UiEvent::SelectTab(Tab::Alerts));
        assert_eq!(event("range 7d"), UiEvent::SelectRange(TimeRange::Last7Days));
        assert!(parse_command("tab settings").is_err());
        assert!(parse_command("range").is_err());
    }

    #[test]
    fn test_search_keeps_inner_text() {
        assert_eq!(event("search toss bank"), UiEvent::EditSearch("toss bank".to_string()));
        assert_eq!(event("search"), UiEvent::EditSearch(String::new()));
    }

    #[test]
    fn test_theme_commands() {
        assert_eq!(event("theme"), UiEvent::ToggleTheme);
        assert_eq!(event("theme dark"), UiEvent::ChooseTheme(ThemeMode::Dark));
        assert_eq!(
            parse_command("os light").unwrap(),
            Some(Command::SystemTheme(ThemeMode::Light))
        );
        assert!(parse_command("theme sepia").is_err());
    }

    #[test]
    fn test_filters() {
        assert_eq!(event("status error"), UiEvent::FilterStatus(Some(TxStatus::Error)));
        assert_eq!(event("status all"), UiEvent::FilterStatus(None));
        assert_eq!(event("channel tossbank"), UiEvent::FilterChannel(Some(Channel::TossBank)));
        assert_eq!(
            event("amount ₩1,000 -"),
            UiEvent::FilterAmount {
                min: Some(1_000),
                max: None
            }
        );
        assert_eq!(event("alerts urgent"), UiEvent::FilterAlerts(AlertFilter::Critical));
        assert_eq!(event("read-all"), UiEvent::MarkAllAlertsRead);
        assert!(parse_command("amount 500 100").is_err());
        assert!(parse_command("channel swift").is_err());
    }

    #[test]
    fn test_host_commands() {
        assert_eq!(
            parse_command("export rows.json").unwrap(),
            Some(Command::Export(PathBuf::from("rows.json")))
        );
        assert_eq!(parse_command("q").unwrap(), Some(Command::Quit));
        assert!(parse_command("chart").is_err());
    }

    #[test]
    fn test_unknown_command() {
        match parse_command("deploy now") {
            Err(DashboardError::UnknownCommand(name)) => assert_eq!(name, "deploy"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_handle_line_dispatches_events() {
        let mut dash = dashboard("http://localhost:3000/");
        let (signal, _subscription) = subscribe(None);
        let now = Instant::now();

        assert_eq!(handle_line(&mut dash, &signal, "tab alerts", now), Reply::Render);
        assert_eq!(handle_line(&mut dash, &signal, "tab alerts", now), Reply::Nothing);
        assert_eq!(handle_line(&mut dash, &signal, "", now), Reply::Nothing);
        assert_eq!(
            handle_line(&mut dash, &signal, "url", now),
            Reply::Text("http://localhost:3000/?tab=alerts".to_string())
        );
        assert_eq!(handle_line(&mut dash, &signal, "quit", now), Reply::Quit);
    }

    #[test]
    fn test_handle_line_reports_errors() {
        let mut dash = dashboard("http://localhost:3000/");
        let (signal, _subscription) = subscribe(None);
        match handle_line(&mut dash, &signal, "deploy", Instant::now()) {
            Reply::Text(message) => assert!(message.starts_with("❌ Unknown command: 'deploy'")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_os_command_publishes() {
        let mut dash = dashboard("http://localhost:3000/");
        let (signal, subscription) = subscribe(Some(ThemeMode::Light));
        assert_eq!(handle_line(&mut dash, &signal, "os dark", Instant::now()), Reply::Nothing);
        assert_eq!(subscription.current(), Some(ThemeMode::Dark));
        // The page itself only changes once the host loop delivers the signal
        assert_eq!(dash.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_export_writes_visible_rows() {
        let mut dash = dashboard("http://localhost:3000/");
        let (signal, _subscription) = subscribe(None);
        let now = Instant::now();
        let path = std::env::temp_dir().join(format!("finora-cmd-export-{}.json", std::process::id()));

        handle_line(&mut dash, &signal, "channel tossbank", now);
        let reply = handle_line(&mut dash, &signal, &format!("export {}", path.display()), now);
        assert!(matches!(reply, Reply::Text(ref m) if m.starts_with("💾 Exported 6 rows")));

        let rows: Vec<serde_json::Value> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(rows.iter().all(|r| r["channel"] == "TossBank"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_export_to_missing_directory_reports_file_error() {
        let mut dash = dashboard("http://localhost:3000/");
        let (signal, _subscription) = subscribe(None);
        let path = std::env::temp_dir()
            .join(format!("finora-missing-{}", std::process::id()))
            .join("rows.json");

        match handle_line(&mut dash, &signal, &format!("export {}", path.display()), Instant::now()) {
            Reply::Text(message) => {
                assert!(message.starts_with("❌ I/O error"), "got {}", message);
                assert!(!message.contains("Preference storage"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
