//! Transactions tab: structured filters over the searched rows

use crate::app::Dashboard;
use crate::services::filter_service::TableFilter;
use crate::services::theme_service::ThemeSurface;
use crate::store::KeyValueStore;
use crate::utils::format_won;

use super::{render_transaction_table, Palette};

/// One-line summary of the active structured filters
pub fn describe_filter(filter: &TableFilter) -> String {
    let status = filter.status.map_or("all".to_string(), |s| s.to_string());
    let channel = filter.channel.map_or("all".to_string(), |c| c.to_string());
    let amount = match (filter.min_amount, filter.max_amount) {
        (None, None) => "any".to_string(),
        (Some(min), None) => format!("≥ {}", format_won(min)),
        (None, Some(max)) => format!("≤ {}", format_won(max)),
        (Some(min), Some(max)) => format!("{} – {}", format_won(min), format_won(max)),
    };
    format!("status: {} | channel: {} | amount: {}", status, channel, amount)
}

pub fn render<A, P, S>(dash: &Dashboard<A, P, S>, palette: &Palette) -> String
where
    A: KeyValueStore,
    P: KeyValueStore,
    S: ThemeSurface,
{
    let rows = dash.visible_rows();
    let mut out = String::new();
    out.push_str(&palette.paint(palette.bold, "Transaction explorer"));
    out.push('\n');
    out.push_str(&format!(
        "  {}  {}\n\n",
        describe_filter(dash.table_filter()),
        palette.paint(
            palette.muted,
            &format!("({} of {} rows)", rows.len(), dash.rows().len())
        )
    ));
    out.push_str(&render_transaction_table(&rows, palette));
    out
}
