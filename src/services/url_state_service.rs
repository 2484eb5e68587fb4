use tracing::{debug, warn};

use crate::models::{Tab, ThemeMode, TimeRange, UiSelection};
use crate::store::KeyValueStore;

pub const TAB_PARAM: &str = "tab";
pub const RANGE_PARAM: &str = "range";
pub const SEARCH_PARAM: &str = "search";
pub const THEME_PARAM: &str = "theme";

/// Read a parameter, falling back when it is absent or the store fails
pub fn read_param(store: &dyn KeyValueStore, name: &str, fallback: &str) -> String {
    match store.get(name) {
        Ok(Some(value)) => value,
        Ok(None) => fallback.to_string(),
        Err(e) => {
            debug!("Reading '{}' failed, using fallback: {}", name, e);
            fallback.to_string()
        }
    }
}

/// Set a parameter in place, or remove it when the value is empty
pub fn write_param(store: &mut dyn KeyValueStore, name: &str, value: &str) {
    let result = if value.is_empty() {
        store.remove(name)
    } else {
        store.set(name, value)
    };
    if let Err(e) = result {
        warn!("Writing '{}' failed: {}", name, e);
    }
}

/// Initial page selection from the address; unrecognized values count as not set
pub fn read_selection(store: &dyn KeyValueStore) -> UiSelection {
    let tab: Tab = read_param(store, TAB_PARAM, Tab::Overview.as_str())
        .parse()
        .unwrap_or_default();
    let range: TimeRange = read_param(store, RANGE_PARAM, TimeRange::Today.as_str())
        .parse()
        .unwrap_or_default();
    let search = read_param(store, SEARCH_PARAM, "");
    let theme = ThemeMode::parse_exact(&read_param(store, THEME_PARAM, ""));

    UiSelection {
        tab,
        range,
        search,
        theme,
    }
}
