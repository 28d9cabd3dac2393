pub type SpecResult<T> = Result<T, SpecError>;

/// Error taxonomy for a generation run. Every variant is terminal: the
/// pipeline never retries, it surfaces the first failure to the caller.
#[derive(thiserror::Error, Debug)]
pub enum SpecError {
    #[error("could not reach the CouchDB server: {0}")]
    Connection(String),
    #[error("CouchDB returned HTTP {status}")]
    Server { status: u16 },
    #[error("invalid response body: {0}")]
    Parse(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("output error: {0}")]
    Io(String),
}

impl SpecError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    pub fn server(status: u16) -> Self {
        Self::Server { status }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Short error class printed alongside the message so callers can tell
    /// connection trouble from, say, an unwritable output path.
    pub fn class(&self) -> &'static str {
        match self {
            SpecError::Connection(_) => "connection",
            SpecError::Server { .. } => "server",
            SpecError::Parse(_) => "parse",
            SpecError::Config(_) => "config",
            SpecError::Io(_) => "io",
        }
    }
}

impl From<reqwest::Error> for SpecError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Self::Parse(value.to_string())
        } else {
            // connect failures, timeouts and dns errors all read as
            // "the server was not reachable" to the user
            Self::Connection(value.to_string())
        }
    }
}
