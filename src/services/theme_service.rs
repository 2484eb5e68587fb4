use tracing::{debug, info};

use crate::models::ThemeMode;
use crate::services::url_state_service::{write_param, THEME_PARAM};
use crate::store::KeyValueStore;

/// Preference-store key holding the last explicit theme choice
pub const THEME_PREFERENCE_KEY: &str = "finora.theme";
pub const DARK_META_COLOR: &str = "#0a0a0a";
pub const LIGHT_META_COLOR: &str = "#ffffff";

/// Meta color hint for the hosting chrome
pub fn meta_color(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => DARK_META_COLOR,
        ThemeMode::Light => LIGHT_META_COLOR,
    }
}

/// The visual root that receives every theme transition
pub trait ThemeSurface {
    fn apply(&mut self, mode: ThemeMode, meta_color: &str);
}

/// Where the current theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Address,
    Preference,
    System,
    Default,
    User,
}

/// Light/dark state machine
///
/// Startup order: explicit address value, saved preference, OS preference,
/// light. An explicit address value or any user choice during the session
/// stops OS-driven changes.
#[derive(Debug, Clone)]
pub struct ThemeResolver {
    mode: ThemeMode,
    source: ThemeSource,
    address_explicit: bool,
    user_chose: bool,
}

/// Saved preference, if one can be read; failures count as none
fn saved_preference(prefs: &dyn KeyValueStore) -> Option<String> {
    match prefs.get(THEME_PREFERENCE_KEY) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            debug!("Theme preference unavailable: {}", e);
            None
        }
    }
}

impl ThemeResolver {
    /// Resolve the startup theme without touching the surface
    pub fn resolve(
        address_theme: Option<ThemeMode>,
        prefs: &dyn KeyValueStore,
        system: Option<ThemeMode>,
    ) -> Self {
        let saved = saved_preference(prefs).and_then(|v| ThemeMode::parse_exact(&v));

        let (mode, source) = if let Some(mode) = address_theme {
            (mode, ThemeSource::Address)
        } else if let Some(mode) = saved {
            (mode, ThemeSource::Preference)
        } else if let Some(mode) = system {
            (mode, ThemeSource::System)
        } else {
            (ThemeMode::Light, ThemeSource::Default)
        };

        ThemeResolver {
            mode,
            source,
            address_explicit: address_theme.is_some(),
            user_chose: false,
        }
    }

    /// Resolve and apply the startup theme
    pub fn start(
        address_theme: Option<ThemeMode>,
        prefs: &dyn KeyValueStore,
        system: Option<ThemeMode>,
        surface: &mut dyn ThemeSurface,
    ) -> Self {
        let resolver = Self::resolve(address_theme, prefs, system);
        info!("Theme resolved to {} from {:?}", resolver.mode, resolver.source);
        resolver.apply(surface);
        resolver
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Whether OS preference changes are still followed
    pub fn follows_system(&self, prefs: &dyn KeyValueStore) -> bool {
        !self.address_explicit && !self.user_chose && saved_preference(prefs).is_none()
    }

    fn apply(&self, surface: &mut dyn ThemeSurface) {
        surface.apply(self.mode, meta_color(self.mode));
    }

    /// Flip the theme as an explicit user choice
    pub fn toggle(
        &mut self,
        address: &mut dyn KeyValueStore,
        prefs: &mut dyn KeyValueStore,
        surface: &mut dyn ThemeSurface,
    ) -> ThemeMode {
        self.choose(self.mode.toggled(), address, prefs, surface)
    }

    /// Set the theme as an explicit user choice: persist, mirror to the address, apply
    pub fn choose(
        &mut self,
        mode: ThemeMode,
        address: &mut dyn KeyValueStore,
        prefs: &mut dyn KeyValueStore,
        surface: &mut dyn ThemeSurface,
    ) -> ThemeMode {
        self.mode = mode;
        self.source = ThemeSource::User;
        self.user_chose = true;

        if let Err(e) = prefs.set(THEME_PREFERENCE_KEY, mode.as_str()) {
            debug!("Theme preference not saved: {}", e);
        }
        write_param(address, THEME_PARAM, mode.as_str());
        self.apply(surface);
        mode
    }

    /// OS color-scheme notification; returns true when the theme changed
    pub fn on_system_change(
        &mut self,
        system: ThemeMode,
        prefs: &dyn KeyValueStore,
        surface: &mut dyn ThemeSurface,
    ) -> bool {
        if !self.follows_system(prefs) {
            debug!("Ignoring OS theme change to {}", system);
            return false;
        }
        if system == self.mode {
            return false;
        }
        self.mode = system;
        self.source = ThemeSource::System;
        self.apply(surface);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AddressBar, DisabledStore, MemoryStore};

    #[derive(Default)]
    struct RecordingSurface {
        applied: Vec<(ThemeMode, String)>,
    }

    impl ThemeSurface for RecordingSurface {
        fn apply(&mut self, mode: ThemeMode, meta_color: &str) {
            self.applied.push((mode, meta_color.to_string()));
        }
    }

    fn saved(mode: &str) -> MemoryStore {
        MemoryStore::new().with(THEME_PREFERENCE_KEY, mode)
    }

    #[test]
    fn test_address_wins_over_everything() {
        let r = ThemeResolver::resolve(Some(ThemeMode::Dark), &saved("light"), Some(ThemeMode::Light));
        assert_eq!(r.mode(), ThemeMode::Dark);
        assert_eq!(r.source, ThemeSource::Address);
    }

    #[test]
    fn test_resolution_order() {
        let r = ThemeResolver::resolve(None, &saved("dark"), Some(ThemeMode::Light));
        assert_eq!((r.mode(), r.source), (ThemeMode::Dark, ThemeSource::Preference));

        let r = ThemeResolver::resolve(None, &saved("purple"), Some(ThemeMode::Dark));
        assert_eq!((r.mode(), r.source), (ThemeMode::Dark, ThemeSource::System));

        let r = ThemeResolver::resolve(None, &MemoryStore::new(), None);
        assert_eq!((r.mode(), r.source), (ThemeMode::Light, ThemeSource::Default));
    }

    #[test]
    fn test_disabled_storage_falls_through() {
        let r = ThemeResolver::resolve(None, &DisabledStore, Some(ThemeMode::Dark));
        assert_eq!((r.mode(), r.source), (ThemeMode::Dark, ThemeSource::System));
    }

    #[test]
    fn test_start_applies_meta_color() {
        let mut surface = RecordingSurface::default();
        ThemeResolver::start(Some(ThemeMode::Dark), &MemoryStore::new(), None, &mut surface);
        assert_eq!(surface.applied, vec![(ThemeMode::Dark, "#0a0a0a".to_string())]);
    }

    #[test]
    fn test_toggle_persists_and_writes_address() {
        let mut surface = RecordingSurface::default();
        let mut address = AddressBar::parse("http://localhost:3000/").unwrap();
        let mut prefs = MemoryStore::new();
        let mut r = ThemeResolver::start(None, &prefs, None, &mut surface);

        assert_eq!(r.toggle(&mut address, &mut prefs, &mut surface), ThemeMode::Dark);
        assert_eq!(prefs.get(THEME_PREFERENCE_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(address.href(), "http://localhost:3000/?theme=dark");
        assert_eq!(surface.applied.last().unwrap().1, DARK_META_COLOR);
    }

    #[test]
    fn test_system_change_followed_without_overrides() {
        let mut surface = RecordingSurface::default();
        let prefs = MemoryStore::new();
        let mut r = ThemeResolver::start(None, &prefs, Some(ThemeMode::Light), &mut surface);

        assert!(r.on_system_change(ThemeMode::Dark, &prefs, &mut surface));
        assert_eq!(r.mode(), ThemeMode::Dark);
        assert_eq!(surface.applied.len(), 2);
    }

    #[test]
    fn test_system_change_ignored_after_toggle() {
        let mut surface = RecordingSurface::default();
        let mut address = AddressBar::parse("http://localhost:3000/").unwrap();
        let mut prefs = MemoryStore::new();
        let mut r = ThemeResolver::start(None, &prefs, Some(ThemeMode::Light), &mut surface);

        r.toggle(&mut address, &mut prefs, &mut surface);
        assert!(!r.on_system_change(ThemeMode::Light, &prefs, &mut surface));
        assert!(!r.on_system_change(ThemeMode::Dark, &prefs, &mut surface));
        assert_eq!(r.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_system_change_ignored_after_toggle_with_disabled_storage() {
        let mut surface = RecordingSurface::default();
        let mut address = AddressBar::parse("http://localhost:3000/").unwrap();
        let mut prefs = DisabledStore;
        let mut r = ThemeResolver::start(None, &prefs, Some(ThemeMode::Dark), &mut surface);

        assert_eq!(r.toggle(&mut address, &mut prefs, &mut surface), ThemeMode::Light);
        assert!(!r.on_system_change(ThemeMode::Dark, &prefs, &mut surface));
        assert_eq!(r.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_explicit_address_suppresses_system_changes() {
        let mut surface = RecordingSurface::default();
        let prefs = MemoryStore::new();
        let mut r = ThemeResolver::start(Some(ThemeMode::Light), &prefs, None, &mut surface);
        assert!(!r.on_system_change(ThemeMode::Dark, &prefs, &mut surface));
        assert_eq!(r.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_saved_preference_suppresses_system_changes() {
        let mut surface = RecordingSurface::default();
        let prefs = saved("light");
        let mut r = ThemeResolver::start(None, &prefs, None, &mut surface);
        assert!(!r.on_system_change(ThemeMode::Dark, &prefs, &mut surface));
    }
}
