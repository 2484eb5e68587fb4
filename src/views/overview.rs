//! Overview tab: KPI cards, throughput, recent events, recent transactions

use crate::app::Dashboard;
use crate::models::{AlertKind, DeltaTrend};
use crate::services::alert_service::OVERVIEW_EVENT_COUNT;
use crate::services::chart_service::sparkline;
use crate::services::theme_service::ThemeSurface;
use crate::store::KeyValueStore;

use super::{render_transaction_table, Palette};

pub fn render<A, P, S>(dash: &Dashboard<A, P, S>, palette: &Palette) -> String
where
    A: KeyValueStore,
    P: KeyValueStore,
    S: ThemeSurface,
{
    let mut out = String::new();

    out.push_str(&palette.paint(palette.bold, "Key metrics"));
    out.push('\n');
    let label_width = dash
        .kpis()
        .iter()
        .map(|k| k.label.chars().count())
        .max()
        .unwrap_or(0);
    for kpi in dash.kpis() {
        let delta = match kpi.delta.as_deref() {
            Some(delta) => {
                let (arrow, code) = match kpi.trend() {
                    DeltaTrend::Up => ("▲", palette.ok),
                    DeltaTrend::Down => ("▼", palette.error),
                    DeltaTrend::Flat => ("•", palette.muted),
                };
                palette.paint(code, &format!("{} {}", arrow, delta))
            }
            None => String::new(),
        };
        out.push_str(&format!(
            "  {:<width$}  {:>8}  {}\n",
            kpi.label,
            kpi.value,
            delta,
            width = label_width
        ));
    }

    let points = dash.throughput();
    out.push('\n');
    out.push_str(&palette.paint(
        palette.bold,
        &format!("Real-time throughput ({})", dash.selection().range.label()),
    ));
    out.push('\n');
    out.push_str(&format!("  {}\n", palette.paint(palette.accent, &sparkline(points))));
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        out.push_str(&palette.paint(
            palette.muted,
            &format!("  {} … {}   latest {} tps", first.label, last.label, last.tps),
        ));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&palette.paint(palette.bold, "Recent events"));
    out.push('\n');
    for alert in dash.alerts().iter().take(OVERVIEW_EVENT_COUNT) {
        let code = match alert.kind {
            AlertKind::Critical => palette.error,
            AlertKind::Warning => palette.accent,
            AlertKind::Info => palette.muted,
        };
        out.push_str(&format!(
            "  {} {} ({} · {})\n",
            palette.paint(code, "●"),
            alert.title,
            alert.when,
            alert.service
        ));
    }

    out.push('\n');
    out.push_str(&palette.paint(palette.bold, "Recent transactions"));
    out.push('\n');
    out.push_str(&render_transaction_table(&dash.search_rows(), palette));
    out
}
