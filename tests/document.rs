use anyhow::Result;
use serde_json::Value;

use couchdb_openapi::client::{Discovery, ServerInfo};
use couchdb_openapi::config::OutputFormat;
use couchdb_openapi::docs;

fn discovery_with(version: Option<&str>, databases: &[&str]) -> Discovery {
    Discovery {
        server: ServerInfo {
            couchdb: Some("Welcome".to_string()),
            version: version.map(str::to_string),
            ..ServerInfo::default()
        },
        databases: databases.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn template_contains_static_paths_and_schemas() -> Result<()> {
    let doc = docs::build_document(&Discovery::offline(), "http://localhost:5984");

    let paths = doc
        .get("paths")
        .and_then(Value::as_object)
        .expect("paths must be an object");

    let expected_paths = [
        "/",
        "/_all_dbs",
        "/{db}",
        "/{db}/_all_docs",
        "/_users",
        "/_users/{user_id}",
        "/{db}/{docid}",
        "/{db}/{docid}/{attachment}",
        "/{db}/_find",
        "/{db}/_changes",
        "/{db}/_bulk_docs",
        "/{db}/_design/{ddoc}",
        "/{db}/_design/{ddoc}/_view/{view}",
        "/_replicate",
    ];
    for p in &expected_paths {
        assert!(paths.contains_key(*p), "missing path '{}'", p);
    }
    // no databases discovered -> nothing beyond the static set
    assert_eq!(paths.len(), expected_paths.len());

    let schemas = doc
        .get("components")
        .and_then(|c| c.get("schemas"))
        .and_then(Value::as_object)
        .expect("components.schemas must be an object");

    for s in [
        "ServerInfo",
        "DatabaseInfo",
        "AllDocsResponse",
        "UserDocument",
        "Document",
        "DocumentResponse",
        "MangoQuery",
        "MangoResponse",
        "ChangesResponse",
        "BulkDocsRequest",
        "DesignDocument",
        "ViewQuery",
        "ViewResponse",
        "ReplicationRequest",
        "ReplicationResponse",
    ] {
        assert!(schemas.contains_key(s), "missing schema '{}'", s);
    }

    Ok(())
}

#[test]
fn server_version_flows_into_info_block() {
    let doc = docs::build_document(&discovery_with(Some("3.3.2"), &[]), "http://db:5984");

    assert_eq!(doc["info"]["version"], "3.3.2");
    assert_eq!(doc["info"]["description"], "CouchDB 3.3.2 REST API");
    assert_eq!(doc["servers"][0]["url"], "http://db:5984");
}

#[test]
fn missing_version_degrades_to_unknown() {
    let doc = docs::build_document(&discovery_with(None, &[]), "http://localhost:5984");
    assert_eq!(doc["info"]["version"], "unknown");
}

#[test]
fn discovered_databases_get_concrete_paths() {
    let doc = docs::build_document(
        &discovery_with(Some("3.3.2"), &["albums", "tracks"]),
        "http://localhost:5984",
    );

    let paths = doc["paths"].as_object().expect("paths must be an object");
    for p in ["/albums", "/albums/_all_docs", "/tracks", "/tracks/_all_docs"] {
        assert!(paths.contains_key(p), "missing discovered path '{}'", p);
    }

    // discovered entries point at the shared schemas
    assert_eq!(
        doc["paths"]["/albums"]["get"]["responses"]["200"]["content"]["application/json"]["schema"]
            ["$ref"],
        "#/components/schemas/DatabaseInfo"
    );
}

#[test]
fn system_databases_do_not_clobber_static_entries() {
    let doc = docs::build_document(
        &discovery_with(Some("3.3.2"), &["_users"]),
        "http://localhost:5984",
    );

    // the static /_users entry survives with its original summary
    assert_eq!(
        doc["paths"]["/_users"]["get"]["summary"],
        "Get users database info"
    );
}

#[test]
fn build_is_deterministic() -> Result<()> {
    let discovery = discovery_with(Some("3.3.2"), &["beta", "alpha"]);

    let first = docs::render(
        &docs::build_document(&discovery, "http://localhost:5984"),
        OutputFormat::Json,
    )?;
    let second = docs::render(
        &docs::build_document(&discovery, "http://localhost:5984"),
        OutputFormat::Json,
    )?;

    assert_eq!(first, second, "repeated builds must render byte-identical");
    Ok(())
}

#[test]
fn json_output_round_trips() -> Result<()> {
    let doc = docs::build_document(&discovery_with(Some("3.3.2"), &["albums"]), "http://db:5984");

    let text = docs::render(&doc, OutputFormat::Json)?;
    let parsed: Value = serde_json::from_str(&text)?;
    assert_eq!(parsed, doc);
    Ok(())
}

#[test]
fn yaml_output_round_trips() -> Result<()> {
    let doc = docs::build_document(&discovery_with(Some("3.3.2"), &["albums"]), "http://db:5984");

    let text = docs::render(&doc, OutputFormat::Yaml)?;
    let parsed: Value = serde_yaml::from_str(&text)?;
    assert_eq!(parsed, doc);
    Ok(())
}
