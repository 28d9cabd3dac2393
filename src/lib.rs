pub mod client;
pub mod config;
pub mod docs;
pub mod errors;
pub mod generate;

// Re-export commonly used items for tests and the binaries
pub use config::{ConnectionConfig, Credentials, OutputFormat, OutputSpec};
pub use errors::{SpecError, SpecResult};
