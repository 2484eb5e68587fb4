use url::Url;

use super::KeyValueStore;
use crate::utils::Result;

/// The page address, with its query component used as a key-value store
///
/// Every write replaces the current address in place. The history never
/// grows past the single entry the page was opened with.
#[derive(Debug, Clone)]
pub struct AddressBar {
    url: Url,
    replacements: usize,
}

impl AddressBar {
    pub fn parse(address: &str) -> Result<Self> {
        Ok(AddressBar {
            url: Url::parse(address)?,
            replacements: 0,
        })
    }

    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// Number of in-place address replacements so far
    pub fn replacements(&self) -> usize {
        self.replacements
    }

    fn pairs(&self) -> Vec<(String, String)> {
        self.url.query_pairs().into_owned().collect()
    }

    fn replace_pairs(&mut self, pairs: Vec<(String, String)>) {
        if pairs.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.query_pairs_mut().clear().extend_pairs(pairs);
        }
        self.replacements += 1;
    }
}

impl KeyValueStore for AddressBar {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned()))
    }

    /// Sets the first occurrence in place and drops any duplicates; appends when absent
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut seen = false;
        let mut pairs = Vec::new();
        for (k, v) in self.pairs() {
            if k == key {
                if !seen {
                    pairs.push((k, value.to_string()));
                    seen = true;
                }
            } else {
                pairs.push((k, v));
            }
        }
        if !seen {
            pairs.push((key.to_string(), value.to_string()));
        }
        self.replace_pairs(pairs);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let pairs = self.pairs().into_iter().filter(|(k, _)| k != key).collect();
        self.replace_pairs(pairs);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_existing_params() {
        let bar = AddressBar::parse("http://localhost:3000/?tab=alerts&search=tx+10").unwrap();
        assert_eq!(bar.get("tab").unwrap().as_deref(), Some("alerts"));
        assert_eq!(bar.get("search").unwrap().as_deref(), Some("tx 10"));
        assert!(bar.get("range").unwrap().is_none());
    }

    #[test]
    fn test_set_keeps_position_and_drops_duplicates() {
        let mut bar = AddressBar::parse("http://localhost/?a=1&tab=x&b=2&tab=y").unwrap();
        bar.set("tab", "alerts").unwrap();
        assert_eq!(bar.href(), "http://localhost/?a=1&tab=alerts&b=2");
        bar.set("theme", "dark").unwrap();
        assert_eq!(bar.href(), "http://localhost/?a=1&tab=alerts&b=2&theme=dark");
        assert_eq!(bar.replacements(), 2);
    }

    #[test]
    fn test_remove_last_param_clears_query() {
        let mut bar = AddressBar::parse("http://localhost/?search=error").unwrap();
        bar.remove("search").unwrap();
        assert_eq!(bar.href(), "http://localhost/");
        assert_eq!(bar.replacements(), 1);
    }

    #[test]
    fn test_invalid_address() {
        assert!(AddressBar::parse("not a url").is_err());
    }
}
