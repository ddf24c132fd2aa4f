use crate::*;
use std::collections::BTreeSet;

pub const DEFAULT_TIME_COLUMNS: [&str; 2] = ["time", "measure_time"];
pub const DEFAULT_BETWEEN_LOOKBACK: usize = 6;
pub const DEFAULT_SNIPPET_LIMIT: usize = 220;

/// Per-call validation settings. Immutable once built, so one value can be
/// shared freely across threads and calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    time_columns: BTreeSet<String>,
    between_lookback: usize,
    snippet_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            time_columns: DEFAULT_TIME_COLUMNS.iter().map(|c| c.to_string()).collect(),
            between_lookback: DEFAULT_BETWEEN_LOOKBACK,
            snippet_limit: DEFAULT_SNIPPET_LIMIT,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the accepted time columns. Names are trimmed and lowercased;
    /// an empty list keeps the defaults.
    pub fn with_time_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns: BTreeSet<String> = columns
            .into_iter()
            .map(|c| c.as_ref().trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();
        if !columns.is_empty() {
            self.time_columns = columns;
        }
        self
    }

    /// How many token positions before a BETWEEN are searched for its time
    /// column.
    pub fn with_between_lookback(mut self, lookback: usize) -> Self {
        self.between_lookback = lookback;
        self
    }

    pub fn with_snippet_limit(mut self, limit: usize) -> Self {
        self.snippet_limit = limit;
        self
    }

    pub fn time_columns(&self) -> impl Iterator<Item = &str> {
        self.time_columns.iter().map(String::as_str)
    }

    pub fn between_lookback(&self) -> usize {
        self.between_lookback
    }

    pub fn snippet_limit(&self) -> usize {
        self.snippet_limit
    }

    /// Membership test against the accepted time columns. `name` must
    /// already be lowercased, as every token value is.
    pub fn is_time_column(&self, name: &str) -> bool {
        self.time_columns.contains(name)
    }
}

impl From<&Config> for Options {
    fn from(config: &Config) -> Self {
        Options::default()
            .with_time_columns(&config.time_columns)
            .with_between_lookback(config.between_lookback)
            .with_snippet_limit(config.snippet_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert_eq!(
            options.time_columns().collect::<Vec<_>>(),
            ["measure_time", "time"]
        );
        assert_eq!(options.between_lookback(), 6);
        assert_eq!(options.snippet_limit(), 220);
    }

    #[test]
    fn custom_columns_replace_defaults_case_insensitively() {
        let options = Options::new().with_time_columns(["Event_TS", " ingest_time "]);
        assert!(options.is_time_column("event_ts"));
        assert!(options.is_time_column("ingest_time"));
        assert!(!options.is_time_column("time"));
    }

    #[test]
    fn empty_columns_keep_defaults() {
        let options = Options::new().with_time_columns(Vec::<String>::new());
        assert_eq!(options, Options::default());
        let options = Options::new().with_time_columns(["", "  "]);
        assert!(options.is_time_column("time"));
    }
}
