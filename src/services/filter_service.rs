use crate::models::{Channel, Transaction, TxStatus};

fn compact(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Text search over the display fields of each row
///
/// The query is trimmed and lower-cased, then looked up as a substring of the
/// space-joined, lower-cased fields. A query with inner whitespace also
/// matches a single field that contains it once whitespace is ignored, so
/// "toss bank" finds "TossBank". An empty query returns every row in order.
pub fn filter_rows<'a>(rows: &'a [Transaction], query: &str) -> Vec<&'a Transaction> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return rows.iter().collect();
    }

    let spaced = q.contains(char::is_whitespace);
    let q_compact = compact(&q);

    rows.iter()
        .filter(|row| {
            let fields = row.display_fields().map(|f| f.to_lowercase());
            if fields.join(" ").contains(&q) {
                return true;
            }
            spaced && fields.iter().any(|f| compact(f).contains(&q_compact))
        })
        .collect()
}

/// Structured filters from the transactions tab, all optional and combined with AND
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableFilter {
    pub status: Option<TxStatus>,
    pub channel: Option<Channel>,
    pub min_amount: Option<u64>,
    pub max_amount: Option<u64>,
}

impl TableFilter {
    pub fn is_empty(&self) -> bool {
        *self == TableFilter::default()
    }

    pub fn matches(&self, row: &Transaction) -> bool {
        self.status.map_or(true, |s| row.status == s)
            && self.channel.map_or(true, |c| row.channel == c)
            && self.min_amount.map_or(true, |min| row.amount >= min)
            && self.max_amount.map_or(true, |max| row.amount <= max)
    }

    pub fn apply<'a>(&self, rows: Vec<&'a Transaction>) -> Vec<&'a Transaction> {
        if self.is_empty() {
            return rows;
        }
        rows.into_iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::from_text("TX-1", "10:00:00", "1000", "OK", "KakaoBank").unwrap(),
            Transaction::from_text("TX-2", "10:00:01", "2000", "ERROR", "TossBank").unwrap(),
            Transaction::from_text("TX-3", "10:00:02", "3000", "OK", "TossBank").unwrap(),
            Transaction::from_text("TX-4", "10:00:03", "4000", "ERROR", "KakaoBank").unwrap(),
        ]
    }

    fn ids(rows: &[&Transaction]) -> Vec<String> {
        rows.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let rows = sample();
        assert_eq!(ids(&filter_rows(&rows, "")), vec!["TX-1", "TX-2", "TX-3", "TX-4"]);
        assert_eq!(filter_rows(&rows, "   ").len(), 4);
    }

    #[test]
    fn test_status_match_is_case_insensitive_and_trimmed() {
        let rows = sample();
        assert_eq!(ids(&filter_rows(&rows, "error")), vec!["TX-2", "TX-4"]);
        assert_eq!(ids(&filter_rows(&rows, "  ERROR  ")), vec!["TX-2", "TX-4"]);
    }

    #[test]
    fn test_channel_and_id_matches() {
        let rows = sample();
        assert_eq!(ids(&filter_rows(&rows, "KakaoBank")), vec!["TX-1", "TX-4"]);
        assert_eq!(ids(&filter_rows(&rows, "TOSS BANK")), vec!["TX-2", "TX-3"]);
        assert_eq!(ids(&filter_rows(&rows, "tx-3")), vec!["TX-3"]);
    }

    #[test]
    fn test_amount_substring() {
        let rows = sample();
        assert_eq!(ids(&filter_rows(&rows, "3000")), vec!["TX-3"]);
        // "00" shows up in every amount and time
        assert_eq!(filter_rows(&rows, "00").len(), 4);
    }

    #[test]
    fn test_no_match() {
        let rows = sample();
        assert!(filter_rows(&rows, "does-not-exist").is_empty());
    }

    #[test]
    fn test_table_filter() {
        let rows = sample();
        let all = filter_rows(&rows, "");

        let filter = TableFilter {
            channel: Some(Channel::TossBank),
            min_amount: Some(2500),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(all.clone())), vec!["TX-3"]);

        let filter = TableFilter {
            status: Some(TxStatus::Error),
            max_amount: Some(2000),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(all.clone())), vec!["TX-2"]);

        assert_eq!(TableFilter::default().apply(all).len(), 4);
    }
}
