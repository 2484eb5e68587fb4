use tokio::sync::watch;
use tracing::debug;

use crate::models::ThemeMode;

/// Publishing half of the OS color-scheme signal
#[derive(Debug)]
pub struct SystemThemeSignal {
    tx: watch::Sender<Option<ThemeMode>>,
}

/// A registered listener for OS color-scheme changes; dropping it unregisters
#[derive(Debug)]
pub struct SystemThemeSubscription {
    rx: watch::Receiver<Option<ThemeMode>>,
}

/// Create the signal with its startup value and one subscription
pub fn subscribe(initial: Option<ThemeMode>) -> (SystemThemeSignal, SystemThemeSubscription) {
    let (tx, rx) = watch::channel(initial);
    (SystemThemeSignal { tx }, SystemThemeSubscription { rx })
}

impl SystemThemeSignal {
    /// Publish a new OS preference; returns false once nobody listens
    pub fn publish(&self, mode: ThemeMode) -> bool {
        match self.tx.send(Some(mode)) {
            Ok(()) => true,
            Err(_) => {
                debug!("OS theme change to {} has no listener", mode);
                false
            }
        }
    }
}

impl SystemThemeSubscription {
    pub fn current(&self) -> Option<ThemeMode> {
        *self.rx.borrow()
    }

    /// Wait for the next change; None when the signal is gone
    pub async fn changed(&mut self) -> Option<ThemeMode> {
        match self.rx.changed().await {
            Ok(()) => *self.rx.borrow_and_update(),
            Err(_) => None,
        }
    }
}

/// Read the OS preference from the environment-style hints
///
/// An explicit `light`/`dark` wins. Otherwise `COLORFGBG` ("fg;bg") is read
/// and background colors 0-6 and 8 count as dark.
pub fn detect(explicit: Option<&str>, colorfgbg: Option<&str>) -> Option<ThemeMode> {
    if let Some(mode) = explicit.and_then(|v| ThemeMode::parse_exact(v.trim())) {
        return Some(mode);
    }
    let bg = colorfgbg?.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    Some(if bg <= 6 || bg == 8 {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    })
}
