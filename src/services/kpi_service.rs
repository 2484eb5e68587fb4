use crate::models::KpiEntry;

/// KPI cards for the overview tab; static, not derived from the transaction rows
pub fn default_kpis() -> Vec<KpiEntry> {
    vec![
        KpiEntry::new("Transactions today", "12,840", "+3.2%").with_accent("emerald-cyan"),
        KpiEntry::new("Settlement latency (ms)", "182", "-5.4%").with_accent("cyan-blue"),
        KpiEntry::new("Error rate (%)", "0.08", "-0.01%").with_accent("rose-orange"),
        KpiEntry::new("Avg throughput (tps)", "1,240", "+1.1%").with_accent("violet-indigo"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeltaTrend;

    #[test]
    fn test_default_kpis() {
        let kpis = default_kpis();
        assert_eq!(kpis.len(), 4);
        assert_eq!(kpis[0].value, "12,840");
        assert_eq!(kpis[1].trend(), DeltaTrend::Down);
        assert!(kpis.iter().all(|k| k.accent.is_some()));
    }
}
