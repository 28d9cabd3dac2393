use std::fs;

use couchdb_openapi::client::Discovery;
use couchdb_openapi::config::OutputFormat;
use couchdb_openapi::docs;

/// Writes the static template document without contacting a server. Useful
/// for inspecting the hand-authored path set and schemas offline.
fn main() -> anyhow::Result<()> {
    let discovery = Discovery::offline();
    let doc = docs::build_document(&discovery, "http://localhost:5984");
    let text = docs::render(&doc, OutputFormat::Json)?;

    let path = "couchdb-openapi-template.json";
    fs::write(path, text)?;
    println!("wrote {}", path);
    Ok(())
}
