use crate::*;
use confique::Config as _;
use std::path::Path;

#[derive(Debug, confique::Config)]
pub struct Config {
    /// Column names accepted as the "time" column of a WHERE predicate.
    #[config(
        env = "TSV_TIME_COLUMNS",
        parse_env = confique::env::parse::list_by_comma,
        default = ["time", "measure_time"]
    )]
    pub time_columns: Vec<String>,

    /// How many tokens before a BETWEEN are searched for its time column.
    #[config(env = "TSV_BETWEEN_LOOKBACK", default = 6)]
    pub between_lookback: usize,

    /// Maximum number of characters kept in an issue snippet.
    #[config(env = "TSV_SNIPPET_LIMIT", default = 220)]
    pub snippet_limit: usize,
}

impl Config {
    /// Load from the current environment only.
    pub fn load() -> Result<Self> {
        Ok(Self::builder().env().load()?)
    }

    /// Load from the environment, falling back to values in a TOML file.
    pub fn load_with_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::builder().env().file(path.as_ref()).load()?)
    }
}
