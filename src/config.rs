use std::path::PathBuf;
use std::str::FromStr;

use url::Url;

use crate::errors::{SpecError, SpecResult};

/// Basic-auth credential pair. The pair is constructed whole or not at all;
/// a lone username or password never makes it past `ConnectionConfig::new`.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub base_url: Url,
    pub credentials: Option<Credentials>,
}

impl ConnectionConfig {
    pub fn new(
        url: &str,
        username: Option<String>,
        password: Option<String>,
    ) -> SpecResult<Self> {
        let base_url = Url::parse(url)
            .map_err(|err| SpecError::config(format!("invalid server url '{}': {}", url, err)))?;

        // catches "localhost:5984", which url parses as scheme "localhost"
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(SpecError::config(format!(
                "server url '{}' must use http or https",
                url
            )));
        }

        let credentials = match (username, password) {
            (Some(username), Some(password)) => Some(Credentials { username, password }),
            (None, None) => None,
            _ => {
                return Err(SpecError::config(
                    "username and password must be supplied together",
                ))
            }
        };

        Ok(Self {
            base_url,
            credentials,
        })
    }

    /// Base URL as a string without a trailing slash, ready for joining
    /// endpoint paths onto.
    pub fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}

/// Fill in credentials from the environment when neither CLI flag was given.
/// Explicit flags always win; a partially supplied pair is passed through
/// unchanged so `ConnectionConfig::new` can reject it.
pub fn resolve_credentials(
    username: Option<String>,
    password: Option<String>,
) -> (Option<String>, Option<String>) {
    if username.is_none() && password.is_none() {
        return (
            std::env::var("COUCHDB_USER").ok(),
            std::env::var("COUCHDB_PASSWORD").ok(),
        );
    }
    (username, password)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = SpecError;

    fn from_str(value: &str) -> SpecResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(SpecError::config(format!(
                "unsupported output format '{}', expected json or yaml",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputSpec {
    pub path: PathBuf,
    pub format: OutputFormat,
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            path: PathBuf::from("couchdb-openapi.json"),
            format: OutputFormat::Json,
        }
    }
}
