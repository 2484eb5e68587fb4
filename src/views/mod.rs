//! Terminal rendering of the dashboard page

pub mod alerts;
pub mod overview;
pub mod transactions;

use tracing::debug;

use crate::app::Dashboard;
use crate::models::{Tab, ThemeMode, Transaction};
use crate::services::theme_service::{meta_color, ThemeSurface};
use crate::store::KeyValueStore;
use crate::utils::{format_won, Table};

pub const BRAND: &str = "Finora";
pub const TAGLINE: &str = "Finance Meets Aurora";
pub const EMPTY_STATE: &str = "No transactions match the current conditions.";
pub const TABLE_HEADERS: [&str; 5] = ["TX ID", "Time", "Amount (₩)", "Status", "Channel"];

/// ANSI escapes for the current theme; all empty when color is off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: &'static str,
    pub ok: &'static str,
    pub error: &'static str,
    pub muted: &'static str,
    pub bold: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub const PLAIN: Palette = Palette {
        accent: "",
        ok: "",
        error: "",
        muted: "",
        bold: "",
        reset: "",
    };

    pub fn ansi(mode: ThemeMode) -> Palette {
        match mode {
            ThemeMode::Dark => Palette {
                accent: "\x1b[96m",
                ok: "\x1b[92m",
                error: "\x1b[91m",
                muted: "\x1b[90m",
                bold: "\x1b[1m",
                reset: "\x1b[0m",
            },
            ThemeMode::Light => Palette {
                accent: "\x1b[36m",
                ok: "\x1b[32m",
                error: "\x1b[31m",
                muted: "\x1b[2m",
                bold: "\x1b[1m",
                reset: "\x1b[0m",
            },
        }
    }

    pub fn paint(&self, code: &str, text: &str) -> String {
        if code.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", code, text, self.reset)
        }
    }
}

/// The terminal as the visual root of the page
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    mode: ThemeMode,
    meta_color: String,
    color: bool,
    transitions: usize,
}

impl TerminalSurface {
    pub fn new(color: bool) -> Self {
        TerminalSurface {
            mode: ThemeMode::Light,
            meta_color: meta_color(ThemeMode::Light).to_string(),
            color,
            transitions: 0,
        }
    }

    pub fn meta_color(&self) -> &str {
        &self.meta_color
    }

    /// Theme transitions applied so far, including the startup one
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    pub fn palette(&self) -> Palette {
        if self.color {
            Palette::ansi(self.mode)
        } else {
            Palette::PLAIN
        }
    }
}

impl ThemeSurface for TerminalSurface {
    fn apply(&mut self, mode: ThemeMode, meta_color: &str) {
        debug!("Surface switched to {} ({})", mode, meta_color);
        self.mode = mode;
        self.meta_color = meta_color.to_string();
        self.transitions += 1;
    }
}

/// Transaction table, or the empty-state line when nothing matches
pub fn render_transaction_table(rows: &[&Transaction], palette: &Palette) -> String {
    if rows.is_empty() {
        return format!("{}\n", palette.paint(palette.muted, EMPTY_STATE));
    }

    let mut table = Table::new(&TABLE_HEADERS);
    for row in rows {
        table.add_row(vec![
            row.id.clone(),
            row.time.clone(),
            format_won(row.amount),
            row.status.to_string(),
            row.channel.to_string(),
        ]);
    }
    table.render()
}

fn render_header<A, P, S>(dash: &Dashboard<A, P, S>, palette: &Palette) -> String
where
    A: KeyValueStore,
    P: KeyValueStore,
    S: ThemeSurface,
{
    let selection = dash.selection();
    let tabs: Vec<String> = Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == selection.tab {
                palette.paint(palette.accent, &format!("[{}]", tab.title()))
            } else {
                format!(" {} ", tab.title())
            }
        })
        .collect();

    let search = if selection.search.is_empty() {
        "-".to_string()
    } else {
        format!("\"{}\"", selection.search)
    };

    format!(
        "{} · {}\n{}\n{}\n",
        palette.paint(palette.bold, BRAND),
        TAGLINE,
        tabs.join("  "),
        palette.paint(
            palette.muted,
            &format!(
                "range: {} | search: {} | theme: {}",
                selection.range.label(),
                search,
                dash.theme_mode()
            )
        ),
    )
}

/// Render the whole page for the selected tab
pub fn render_page<A, P, S>(dash: &Dashboard<A, P, S>, palette: &Palette) -> String
where
    A: KeyValueStore,
    P: KeyValueStore,
    S: ThemeSurface,
{
    let body = match dash.selection().tab {
        Tab::Overview => overview::render(dash, palette),
        Tab::Transactions => transactions::render(dash, palette),
        Tab::Alerts => alerts::render(dash, palette),
    };
    format!("{}{}\n{}", render_header(dash, palette), "─".repeat(60), body)
}
