use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::config::{ConnectionConfig, Credentials};
use crate::errors::{SpecError, SpecResult};

/// Metadata reported by `GET /` on a CouchDB instance. Every field is
/// optional because older servers (and some proxies) trim the greeting.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerInfo {
    pub couchdb: Option<String>,
    pub version: Option<String>,
    pub uuid: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub vendor: Option<Value>,
}

impl ServerInfo {
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or("unknown")
    }
}

/// Everything the generator learns from the live server: the greeting plus
/// the database list, in the order the server reported it.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub server: ServerInfo,
    pub databases: Vec<String>,
}

impl Discovery {
    /// Discovery result for offline template generation: no server version,
    /// no databases.
    pub fn offline() -> Self {
        Self::default()
    }
}

pub struct CouchClient {
    http: Client,
    base: String,
    credentials: Option<Credentials>,
}

impl CouchClient {
    pub fn new(config: &ConnectionConfig) -> Self {
        Self {
            http: Client::new(),
            base: config.base().to_string(),
            credentials: config.credentials.clone(),
        }
    }

    /// Runs the fixed set of read-only discovery calls: the server greeting
    /// and the database listing. Both requests carry basic auth when
    /// credentials were configured.
    pub async fn discover(&self) -> SpecResult<Discovery> {
        let server: ServerInfo = self.get_json("/").await?;
        tracing::info!(version = server.version(), "connected to CouchDB");

        let databases: Vec<String> = self.get_json("/_all_dbs").await?;
        tracing::debug!(count = databases.len(), "discovered databases");

        Ok(Discovery { server, databases })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> SpecResult<T> {
        let url = format!("{}{}", self.base, path);
        let mut request = self.http.get(&url);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SpecError::server(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|err| SpecError::parse(format!("GET {}: {}", url, err)))
    }
}
