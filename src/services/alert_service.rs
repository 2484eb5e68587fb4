use crate::models::{AlertEntry, AlertFilter, AlertKind, AlertPolicy, AlertSeverity, ReadState};

/// Number of alerts shown in the overview events panel
pub const OVERVIEW_EVENT_COUNT: usize = 3;

/// The mock alert feed, newest first
pub fn recent_alerts() -> Vec<AlertEntry> {
    vec![
        AlertEntry {
            id: 1,
            kind: AlertKind::Critical,
            title: "Error rate threshold exceeded".to_string(),
            description: "0.3% error rate detected on core-api".to_string(),
            when: "10m ago".to_string(),
            service: "core-api".to_string(),
            state: ReadState::Unread,
            severity: AlertSeverity::High,
            action: "investigate".to_string(),
        },
        AlertEntry {
            id: 2,
            kind: AlertKind::Warning,
            title: "Average latency rising".to_string(),
            description: "KakaoBank channel response time up to 280ms".to_string(),
            when: "18m ago".to_string(),
            service: "payment-gateway".to_string(),
            state: ReadState::Unread,
            severity: AlertSeverity::Medium,
            action: "monitor".to_string(),
        },
        AlertEntry {
            id: 3,
            kind: AlertKind::Info,
            title: "Deployment finished".to_string(),
            description: "core-api v0.2.1 rolled out successfully".to_string(),
            when: "30m ago".to_string(),
            service: "core-api".to_string(),
            state: ReadState::Read,
            severity: AlertSeverity::Low,
            action: "verify".to_string(),
        },
        AlertEntry {
            id: 4,
            kind: AlertKind::Warning,
            title: "Throughput drop".to_string(),
            description: "35% decrease against the last 3 minutes".to_string(),
            when: "45m ago".to_string(),
            service: "transaction-processor".to_string(),
            state: ReadState::Read,
            severity: AlertSeverity::Medium,
            action: "analyze".to_string(),
        },
        AlertEntry {
            id: 5,
            kind: AlertKind::Critical,
            title: "Connection failures".to_string(),
            description: "External API connection failed 5 times in a row".to_string(),
            when: "1h ago".to_string(),
            service: "external-gateway".to_string(),
            state: ReadState::Acknowledged,
            severity: AlertSeverity::High,
            action: "retry".to_string(),
        },
    ]
}

/// Threshold rules listed on the alerts tab
pub fn alert_policies() -> Vec<AlertPolicy> {
    let policy = |metric: &str, threshold: &str, window: &str| AlertPolicy {
        metric: metric.to_string(),
        threshold: threshold.to_string(),
        window: window.to_string(),
    };
    vec![
        policy("Error rate (%)", "> 0.2%", "5-minute average"),
        policy("Average latency (ms)", "> 250ms", "5-minute average"),
        policy("Throughput (tps)", "drop of -30%", "against the last 3 minutes"),
    ]
}

pub fn filter_alerts(alerts: &[AlertEntry], filter: AlertFilter) -> Vec<&AlertEntry> {
    alerts.iter().filter(|a| filter.matches(a)).collect()
}

/// Counts per filter, in `AlertFilter::ALL` order
pub fn filter_counts(alerts: &[AlertEntry]) -> [(AlertFilter, usize); 3] {
    AlertFilter::ALL.map(|f| (f, alerts.iter().filter(|a| f.matches(a)).count()))
}

/// Mark every unread alert as read; acknowledged alerts keep their state
///
/// Returns how many alerts changed.
pub fn mark_all_read(alerts: &mut [AlertEntry]) -> usize {
    let mut changed = 0;
    for alert in alerts.iter_mut().filter(|a| a.state == ReadState::Unread) {
        alert.state = ReadState::Read;
        changed += 1;
    }
    changed
}
