//! Alerts tab: policies, filter counts, alert list

use crate::app::Dashboard;
use crate::models::{AlertKind, ReadState};
use crate::services::alert_service::filter_counts;
use crate::services::theme_service::ThemeSurface;
use crate::store::KeyValueStore;

use super::Palette;

pub fn render<A, P, S>(dash: &Dashboard<A, P, S>, palette: &Palette) -> String
where
    A: KeyValueStore,
    P: KeyValueStore,
    S: ThemeSurface,
{
    let mut out = String::new();
    out.push_str(&palette.paint(palette.bold, "Alert policies"));
    out.push('\n');
    for policy in dash.policies() {
        out.push_str(&format!(
            "  • {} {} ({})\n",
            policy.metric, policy.threshold, policy.window
        ));
    }

    let counts: Vec<String> = filter_counts(dash.alerts())
        .iter()
        .map(|(filter, count)| {
            let label = format!("{} ({})", filter, count);
            if *filter == dash.alert_filter() {
                palette.paint(palette.accent, &format!("[{}]", label))
            } else {
                format!(" {} ", label)
            }
        })
        .collect();
    out.push('\n');
    out.push_str(&format!("{}  {}\n", palette.paint(palette.bold, "Alerts"), counts.join(" ")));

    let alerts = dash.visible_alerts();
    if alerts.is_empty() {
        out.push_str(&palette.paint(palette.muted, "  No alerts in this view."));
        out.push('\n');
        return out;
    }
    for alert in alerts {
        let code = match alert.kind {
            AlertKind::Critical => palette.error,
            AlertKind::Warning => palette.accent,
            AlertKind::Info => palette.muted,
        };
        let state = match alert.state {
            ReadState::Unread => " (unread)",
            ReadState::Acknowledged => " (acknowledged)",
            ReadState::Read => "",
        };
        out.push_str(&format!(
            "  {} [{}] {}{}\n      {}\n      {}\n",
            palette.paint(code, "●"),
            alert.severity.as_str(),
            alert.title,
            state,
            alert.description,
            palette.paint(
                palette.muted,
                &format!("{} · {} · {}", alert.service, alert.when, alert.action)
            ),
        ));
    }
    out
}
