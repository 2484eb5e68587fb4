//! Page state machine
//!
//! Every user interaction arrives as a [`UiEvent`] and goes through the single
//! dispatch table in [`Dashboard::dispatch`]. Rendering only reads the state.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info};

use crate::models::{
    AlertEntry, AlertFilter, AlertPolicy, Channel, KpiEntry, Tab, ThemeMode, TimeRange,
    Transaction, TxStatus, UiSelection,
};
use crate::services::alert_service::{self, mark_all_read};
use crate::services::debounce_service::SearchDebounce;
use crate::services::filter_service::{filter_rows, TableFilter};
use crate::services::generator_service::{
    generate_throughput, generate_transactions, GeneratorConfig, ThroughputPoint,
};
use crate::services::kpi_service::default_kpis;
use crate::services::theme_service::{ThemeResolver, ThemeSurface};
use crate::services::url_state_service::{
    read_selection, write_param, RANGE_PARAM, SEARCH_PARAM, TAB_PARAM,
};
use crate::store::KeyValueStore;

/// Discrete user or environment events the page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SelectTab(Tab),
    SelectRange(TimeRange),
    EditSearch(String),
    ToggleTheme,
    ChooseTheme(ThemeMode),
    SystemThemeChanged(ThemeMode),
    FilterStatus(Option<TxStatus>),
    FilterChannel(Option<Channel>),
    FilterAmount { min: Option<u64>, max: Option<u64> },
    ResetFilters,
    FilterAlerts(AlertFilter),
    MarkAllAlertsRead,
}

/// The mounted dashboard page
pub struct Dashboard<A, P, S> {
    address: A,
    prefs: P,
    surface: S,
    selection: UiSelection,
    theme: ThemeResolver,
    rows: Vec<Transaction>,
    kpis: Vec<KpiEntry>,
    alerts: Vec<AlertEntry>,
    policies: Vec<AlertPolicy>,
    throughput: Vec<ThroughputPoint>,
    table_filter: TableFilter,
    alert_filter: AlertFilter,
    search_sync: SearchDebounce,
}

impl<A: KeyValueStore, P: KeyValueStore, S: ThemeSurface> Dashboard<A, P, S> {
    /// Mount the page from the current address and stores
    pub fn mount(
        generator: &GeneratorConfig,
        search_delay: Duration,
        address: A,
        prefs: P,
        mut surface: S,
        system_theme: Option<ThemeMode>,
    ) -> Self {
        let selection = read_selection(&address);
        let theme = ThemeResolver::start(selection.theme, &prefs, system_theme, &mut surface);
        let rows = generate_transactions(generator);
        info!(
            "Mounted on tab '{}' with {} rows (seed {})",
            selection.tab.as_str(),
            rows.len(),
            generator.seed
        );

        Dashboard {
            address,
            prefs,
            surface,
            selection,
            theme,
            rows,
            kpis: default_kpis(),
            alerts: alert_service::recent_alerts(),
            policies: alert_service::alert_policies(),
            throughput: generate_throughput(),
            table_filter: TableFilter::default(),
            alert_filter: AlertFilter::default(),
            search_sync: SearchDebounce::new(search_delay),
        }
    }

    /// Apply one event; returns true when the page needs a re-render
    pub fn dispatch(&mut self, event: UiEvent, now: Instant) -> bool {
        debug!("Dispatching {:?}", event);
        match event {
            UiEvent::SelectTab(tab) => {
                if self.selection.tab == tab {
                    return false;
                }
                self.selection.tab = tab;
                write_param(&mut self.address, TAB_PARAM, tab.as_str());
                true
            }
            UiEvent::SelectRange(range) => {
                if self.selection.range == range {
                    return false;
                }
                self.selection.range = range;
                write_param(&mut self.address, RANGE_PARAM, range.as_str());
                true
            }
            UiEvent::EditSearch(text) => {
                self.selection.search = text.clone();
                self.search_sync.push(text, now);
                true
            }
            UiEvent::ToggleTheme => {
                self.theme
                    .toggle(&mut self.address, &mut self.prefs, &mut self.surface);
                true
            }
            UiEvent::ChooseTheme(mode) => {
                self.theme
                    .choose(mode, &mut self.address, &mut self.prefs, &mut self.surface);
                true
            }
            UiEvent::SystemThemeChanged(mode) => {
                self.theme
                    .on_system_change(mode, &self.prefs, &mut self.surface)
            }
            UiEvent::FilterStatus(status) => {
                self.table_filter.status = status;
                true
            }
            UiEvent::FilterChannel(channel) => {
                self.table_filter.channel = channel;
                true
            }
            UiEvent::FilterAmount { min, max } => {
                self.table_filter.min_amount = min;
                self.table_filter.max_amount = max;
                true
            }
            UiEvent::ResetFilters => {
                self.table_filter = TableFilter::default();
                true
            }
            UiEvent::FilterAlerts(filter) => {
                self.alert_filter = filter;
                true
            }
            UiEvent::MarkAllAlertsRead => mark_all_read(&mut self.alerts) > 0,
        }
    }

    /// When the pending search write is due, if any
    pub fn search_deadline(&self) -> Option<Instant> {
        self.search_sync.deadline()
    }

    /// Mirror the debounced search text to the address once it is due
    pub fn flush_search(&mut self, now: Instant) -> bool {
        match self.search_sync.take_due(now) {
            Some(search) => {
                write_param(&mut self.address, SEARCH_PARAM, &search);
                true
            }
            None => false,
        }
    }

    /// Unmount the page; a pending search write is dropped
    pub fn teardown(mut self) -> (A, P, S) {
        if let Some(search) = self.search_sync.cancel() {
            debug!("Dropped pending search sync for '{}'", search);
        }
        (self.address, self.prefs, self.surface)
    }

    /// Rows matching the search text (overview table)
    pub fn search_rows(&self) -> Vec<&Transaction> {
        filter_rows(&self.rows, &self.selection.search)
    }

    /// Rows matching the search text and the structured filters (transactions table)
    pub fn visible_rows(&self) -> Vec<&Transaction> {
        self.table_filter.apply(self.search_rows())
    }

    pub fn visible_alerts(&self) -> Vec<&AlertEntry> {
        alert_service::filter_alerts(&self.alerts, self.alert_filter)
    }

    pub fn selection(&self) -> &UiSelection {
        &self.selection
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn kpis(&self) -> &[KpiEntry] {
        &self.kpis
    }

    pub fn alerts(&self) -> &[AlertEntry] {
        &self.alerts
    }

    pub fn alert_filter(&self) -> AlertFilter {
        self.alert_filter
    }

    pub fn policies(&self) -> &[AlertPolicy] {
        &self.policies
    }

    pub fn throughput(&self) -> &[ThroughputPoint] {
        &self.throughput
    }

    pub fn table_filter(&self) -> &TableFilter {
        &self.table_filter
    }

    pub fn address(&self) -> &A {
        &self.address
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
