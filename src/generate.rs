use std::path::{Path, PathBuf};

use crate::client::CouchClient;
use crate::config::{ConnectionConfig, OutputSpec};
use crate::docs;
use crate::errors::{SpecError, SpecResult};

/// Runs the full pipeline: discover, build, render, write. Steps execute
/// strictly in order; if any step fails the output path is never touched,
/// because the document is rendered into memory before the single write.
///
/// Concurrent runs against the same output path are not coordinated; the
/// last writer wins.
pub async fn run(config: &ConnectionConfig, output: &OutputSpec) -> SpecResult<PathBuf> {
    let client = CouchClient::new(config);
    let discovery = client.discover().await?;

    let doc = docs::build_document(&discovery, config.base());
    let text = docs::render(&doc, output.format)?;

    write_output(&text, &output.path)?;
    tracing::info!(path = %output.path.display(), "OpenAPI spec written");

    Ok(output.path.clone())
}

/// Single whole-buffer write; `std::fs::write` opens, writes and closes the
/// file on every exit path, so no handle leaks on failure and no partially
/// rendered document is ever flushed.
pub fn write_output(text: &str, path: &Path) -> SpecResult<()> {
    std::fs::write(path, text)
        .map_err(|err| SpecError::io(format!("cannot write {}: {}", path.display(), err)))
}
