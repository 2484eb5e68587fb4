//! KPI card models

/// Direction implied by a delta string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaTrend {
    Up,
    Down,
    Flat,
}

/// One KPI card on the overview tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiEntry {
    pub label: String,
    pub value: String,
    /// Signed, free-form change, e.g. "+3.2%"
    pub delta: Option<String>,
    /// Optional visual metadata (accent gradient name)
    pub accent: Option<String>,
}

impl KpiEntry {
    pub fn new(label: &str, value: &str, delta: &str) -> Self {
        KpiEntry {
            label: label.to_string(),
            value: value.to_string(),
            delta: (!delta.is_empty()).then(|| delta.to_string()),
            accent: None,
        }
    }

    pub fn with_accent(mut self, accent: &str) -> Self {
        self.accent = Some(accent.to_string());
        self
    }

    pub fn trend(&self) -> DeltaTrend {
        match self.delta.as_deref() {
            Some(d) if d.starts_with('+') => DeltaTrend::Up,
            Some(d) if d.starts_with('-') => DeltaTrend::Down,
            _ => DeltaTrend::Flat,
        }
    }
}
