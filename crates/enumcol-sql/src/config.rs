use crate::SqlDialect;

use enumcol_core::{Error, Result};
use serde::Deserialize;

/// Dialect selection for enum column declarations.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Connection URL; only its scheme is used.
    pub url: Option<String>,

    /// VARCHAR length for string enum columns declared without one.
    pub default_varchar_length: Option<u64>,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connection URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the default VARCHAR length
    pub fn default_varchar_length(mut self, length: u64) -> Self {
        self.default_varchar_length = Some(length);
        self
    }

    /// Builds the dialect described by this configuration.
    pub fn dialect(&self) -> Result<SqlDialect> {
        let Some(url) = &self.url else {
            return Err(Error::invalid_connection_url("no connection URL configured"));
        };

        let dialect = SqlDialect::from_url(url)?;

        Ok(match self.default_varchar_length {
            Some(length) => dialect.default_varchar_length(length),
            None => dialect,
        })
    }
}
