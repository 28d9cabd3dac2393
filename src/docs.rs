use serde_json::{json, Value};

use crate::client::Discovery;
use crate::config::OutputFormat;
use crate::errors::{SpecError, SpecResult};

mod paths;
mod schemas;

pub const OPENAPI_VERSION: &str = "3.0.0";

/// Builds the complete OpenAPI document for a CouchDB instance. Pure with
/// respect to its inputs: the same discovery result and base URL always
/// produce the same document.
pub fn build_document(discovery: &Discovery, base_url: &str) -> Value {
	let couch_version = discovery.server.version();

	let mut doc = json!({
		"openapi": OPENAPI_VERSION,
		"info": {
			"title": "CouchDB API",
			"description": format!("CouchDB {} REST API", couch_version),
			"version": couch_version,
			"contact": {
				"name": "Apache CouchDB",
				"url": "https://couchdb.apache.org/"
			}
		},
		"servers": [{ "url": base_url, "description": "CouchDB Server" }],
		"paths": paths::static_paths(),
		"components": {
			"schemas": schemas::schemas(),
			"securitySchemes": {
				"basicAuth": { "type": "http", "scheme": "basic" }
			}
		},
		"security": [{ "basicAuth": [] }]
	});

	merge_database_paths(&mut doc, &discovery.databases);
	doc
}

/// Adds concrete path entries for each discovered database. System databases
/// such as `_users` already have literal entries in the static template and
/// are left untouched.
fn merge_database_paths(doc: &mut Value, databases: &[String]) {
	if databases.is_empty() {
		return;
	}

	let paths_object = doc
		.get_mut("paths")
		.and_then(Value::as_object_mut)
		.expect("paths must be an object");

	for name in databases {
		for (path, item) in paths::database_paths(name) {
			if !paths_object.contains_key(&path) {
				paths_object.insert(path, item);
			}
		}
	}
}

/// Renders the document in the requested text format. Serialization of an
/// in-memory document only fails on pathological input, but the error is
/// still propagated rather than swallowed.
pub fn render(doc: &Value, format: OutputFormat) -> SpecResult<String> {
	match format {
		OutputFormat::Json => {
			serde_json::to_string_pretty(doc).map_err(|err| SpecError::parse(err.to_string()))
		}
		OutputFormat::Yaml => {
			serde_yaml::to_string(doc).map_err(|err| SpecError::parse(err.to_string()))
		}
	}
}

pub(crate) fn path_parameter(name: &str) -> Value {
	json!({
		"name": name,
		"in": "path",
		"required": true,
		"schema": { "type": "string" }
	})
}

pub(crate) fn json_response(description: &str, schema: Value) -> Value {
	json!({
		"description": description,
		"content": {
			"application/json": { "schema": schema }
		}
	})
}

pub(crate) fn schema_ref(name: &str) -> Value {
	json!({ "$ref": format!("#/components/schemas/{}", name) })
}
