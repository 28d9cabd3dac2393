use serde_json::{json, Map, Value};

use super::{json_response, path_parameter, schema_ref};

/// The hand-authored path set covering the CouchDB endpoints every instance
/// exposes, independent of which databases exist.
pub(super) fn static_paths() -> Value {
	json!({
		"/": {
			"get": {
				"summary": "Get server information",
				"description": "Accesses the root of a CouchDB instance",
				"responses": {
					"200": json_response("Request completed successfully", schema_ref("ServerInfo"))
				}
			}
		},
		"/_all_dbs": {
			"get": {
				"summary": "List all databases",
				"description": "Returns a list of all the databases in the CouchDB instance",
				"responses": {
					"200": json_response(
						"Request completed successfully",
						json!({ "type": "array", "items": { "type": "string" } })
					)
				}
			}
		},
		"/{db}": {
			"put": {
				"summary": "Create database",
				"description": "Creates a new database",
				"parameters": [path_parameter("db")],
				"responses": {
					"201": { "description": "Database created successfully" },
					"400": { "description": "Invalid database name" }
				}
			},
			"get": {
				"summary": "Get database information",
				"description": "Gets information about the specified database",
				"parameters": [path_parameter("db")],
				"responses": {
					"200": json_response("Request completed successfully", schema_ref("DatabaseInfo"))
				}
			},
			"delete": {
				"summary": "Delete database",
				"description": "Deletes the specified database",
				"parameters": [path_parameter("db")],
				"responses": {
					"200": { "description": "Database deleted successfully" }
				}
			}
		},
		"/{db}/_all_docs": {
			"get": {
				"summary": "Get all documents",
				"description": "Returns all documents in the database",
				"parameters": [path_parameter("db")],
				"responses": {
					"200": json_response("Request completed successfully", schema_ref("AllDocsResponse"))
				}
			}
		},
		"/_users": {
			"get": {
				"summary": "Get users database info",
				"description": "Accesses the internal users database",
				"responses": {
					"200": { "description": "Request completed successfully" }
				}
			}
		},
		"/_users/{user_id}": {
			"get": {
				"summary": "Get user document",
				"description": "Gets a user document from the users database",
				"parameters": [path_parameter("user_id")],
				"responses": {
					"200": { "description": "Request completed successfully" }
				}
			},
			"put": {
				"summary": "Create/update user",
				"description": "Creates or updates a user document",
				"parameters": [path_parameter("user_id")],
				"requestBody": {
					"content": {
						"application/json": { "schema": schema_ref("UserDocument") }
					}
				},
				"responses": {
					"201": { "description": "User created/updated successfully" }
				}
			}
		},
		"/{db}/{docid}": {
			"get": {
				"summary": "Get document",
				"description": "Gets a document from the specified database",
				"parameters": [
					path_parameter("db"),
					path_parameter("docid"),
					{
						"name": "rev",
						"in": "query",
						"required": false,
						"schema": { "type": "string" },
						"description": "Document revision"
					},
					{
						"name": "revs",
						"in": "query",
						"required": false,
						"schema": { "type": "boolean" },
						"description": "Include revision history"
					},
					{
						"name": "revs_info",
						"in": "query",
						"required": false,
						"schema": { "type": "boolean" },
						"description": "Include revision info"
					},
					{
						"name": "attachments",
						"in": "query",
						"required": false,
						"schema": { "type": "boolean" },
						"description": "Include attachments"
					}
				],
				"responses": {
					"200": json_response("Request completed successfully", schema_ref("Document")),
					"404": { "description": "Document not found" }
				}
			},
			"put": {
				"summary": "Create/update document",
				"description": "Creates or updates a document in the specified database",
				"parameters": [path_parameter("db"), path_parameter("docid")],
				"requestBody": {
					"required": true,
					"content": {
						"application/json": { "schema": schema_ref("Document") }
					}
				},
				"responses": {
					"201": json_response("Document created/updated successfully", schema_ref("DocumentResponse")),
					"400": { "description": "Invalid request" }
				}
			},
			"delete": {
				"summary": "Delete document",
				"description": "Deletes a document from the specified database",
				"parameters": [
					path_parameter("db"),
					path_parameter("docid"),
					{
						"name": "rev",
						"in": "query",
						"required": true,
						"schema": { "type": "string" },
						"description": "Document revision"
					}
				],
				"responses": {
					"200": json_response("Document deleted successfully", schema_ref("DocumentResponse"))
				}
			},
			"head": {
				"summary": "Check document existence",
				"description": "Checks whether a document exists without fetching its body",
				"parameters": [path_parameter("db"), path_parameter("docid")],
				"responses": {
					"200": { "description": "Document exists" },
					"404": { "description": "Document not found" }
				}
			}
		},
		"/{db}/_find": {
			"post": {
				"summary": "Query documents using Mango",
				"description": "Query documents using the Mango query syntax",
				"parameters": [path_parameter("db")],
				"requestBody": {
					"required": true,
					"content": {
						"application/json": { "schema": schema_ref("MangoQuery") }
					}
				},
				"responses": {
					"200": json_response("Request completed successfully", schema_ref("MangoResponse")),
					"400": { "description": "Invalid query" }
				}
			}
		},
		"/{db}/_changes": {
			"get": {
				"summary": "Get database changes",
				"description": "Returns a list of changes made to documents in the database",
				"parameters": [
					path_parameter("db"),
					{
						"name": "feed",
						"in": "query",
						"required": false,
						"schema": {
							"type": "string",
							"enum": ["normal", "longpoll", "continuous", "eventsource"]
						},
						"description": "Type of feed"
					},
					{
						"name": "since",
						"in": "query",
						"required": false,
						"schema": { "type": "string" },
						"description": "Start from this sequence number"
					},
					{
						"name": "limit",
						"in": "query",
						"required": false,
						"schema": { "type": "integer" },
						"description": "Maximum number of results"
					},
					{
						"name": "include_docs",
						"in": "query",
						"required": false,
						"schema": { "type": "boolean" },
						"description": "Include document bodies"
					}
				],
				"responses": {
					"200": json_response("Request completed successfully", schema_ref("ChangesResponse"))
				}
			}
		},
		"/{db}/_bulk_docs": {
			"post": {
				"summary": "Bulk document operations",
				"description": "Performs bulk document operations (create, update, delete)",
				"parameters": [path_parameter("db")],
				"requestBody": {
					"required": true,
					"content": {
						"application/json": { "schema": schema_ref("BulkDocsRequest") }
					}
				},
				"responses": {
					"201": json_response(
						"Bulk operations completed",
						json!({ "type": "array", "items": schema_ref("DocumentResponse") })
					)
				}
			}
		},
		"/{db}/_design/{ddoc}": {
			"get": {
				"summary": "Get design document",
				"description": "Gets a design document from the specified database",
				"parameters": [path_parameter("db"), path_parameter("ddoc")],
				"responses": {
					"200": json_response("Request completed successfully", schema_ref("DesignDocument")),
					"404": { "description": "Design document not found" }
				}
			},
			"put": {
				"summary": "Create/update design document",
				"description": "Creates or updates a design document in the specified database",
				"parameters": [path_parameter("db"), path_parameter("ddoc")],
				"requestBody": {
					"required": true,
					"content": {
						"application/json": { "schema": schema_ref("DesignDocument") }
					}
				},
				"responses": {
					"201": json_response("Design document created/updated successfully", schema_ref("DocumentResponse"))
				}
			},
			"delete": {
				"summary": "Delete design document",
				"description": "Deletes a design document from the specified database",
				"parameters": [
					path_parameter("db"),
					path_parameter("ddoc"),
					{
						"name": "rev",
						"in": "query",
						"required": true,
						"schema": { "type": "string" },
						"description": "Document revision"
					}
				],
				"responses": {
					"200": json_response("Design document deleted successfully", schema_ref("DocumentResponse"))
				}
			}
		},
		"/{db}/_design/{ddoc}/_view/{view}": {
			"get": {
				"summary": "Query a view",
				"description": "Queries a view from a design document",
				"parameters": [
					path_parameter("db"),
					path_parameter("ddoc"),
					path_parameter("view"),
					{
						"name": "key",
						"in": "query",
						"required": false,
						"schema": { "type": "string" },
						"description": "Key to query"
					},
					{
						"name": "startkey",
						"in": "query",
						"required": false,
						"schema": { "type": "string" },
						"description": "Start key"
					},
					{
						"name": "endkey",
						"in": "query",
						"required": false,
						"schema": { "type": "string" },
						"description": "End key"
					},
					{
						"name": "limit",
						"in": "query",
						"required": false,
						"schema": { "type": "integer" },
						"description": "Maximum number of results"
					},
					{
						"name": "include_docs",
						"in": "query",
						"required": false,
						"schema": { "type": "boolean" },
						"description": "Include document bodies"
					}
				],
				"responses": {
					"200": json_response("Request completed successfully", schema_ref("ViewResponse"))
				}
			},
			"post": {
				"summary": "Query a view with POST",
				"description": "Queries a view from a design document using POST method",
				"parameters": [
					path_parameter("db"),
					path_parameter("ddoc"),
					path_parameter("view")
				],
				"requestBody": {
					"required": false,
					"content": {
						"application/json": { "schema": schema_ref("ViewQuery") }
					}
				},
				"responses": {
					"200": json_response("Request completed successfully", schema_ref("ViewResponse"))
				}
			}
		},
		"/{db}/{docid}/{attachment}": {
			"get": {
				"summary": "Get attachment",
				"description": "Gets an attachment from a document",
				"parameters": [
					path_parameter("db"),
					path_parameter("docid"),
					path_parameter("attachment"),
					{
						"name": "rev",
						"in": "query",
						"required": false,
						"schema": { "type": "string" },
						"description": "Document revision"
					}
				],
				"responses": {
					"200": {
						"description": "Request completed successfully",
						"content": {
							"application/octet-stream": {
								"schema": { "type": "string", "format": "binary" }
							}
						}
					},
					"404": { "description": "Attachment not found" }
				}
			},
			"put": {
				"summary": "Add/update attachment",
				"description": "Adds or updates an attachment to a document",
				"parameters": [
					path_parameter("db"),
					path_parameter("docid"),
					path_parameter("attachment"),
					{
						"name": "rev",
						"in": "query",
						"required": true,
						"schema": { "type": "string" },
						"description": "Document revision"
					}
				],
				"requestBody": {
					"required": true,
					"content": {
						"application/octet-stream": {
							"schema": { "type": "string", "format": "binary" }
						}
					}
				},
				"responses": {
					"201": json_response("Attachment added/updated successfully", schema_ref("DocumentResponse"))
				}
			},
			"delete": {
				"summary": "Delete attachment",
				"description": "Deletes an attachment from a document",
				"parameters": [
					path_parameter("db"),
					path_parameter("docid"),
					path_parameter("attachment"),
					{
						"name": "rev",
						"in": "query",
						"required": true,
						"schema": { "type": "string" },
						"description": "Document revision"
					}
				],
				"responses": {
					"200": json_response("Attachment deleted successfully", schema_ref("DocumentResponse"))
				}
			}
		},
		"/_replicate": {
			"post": {
				"summary": "Replicate database",
				"description": "Replicates a database from source to target",
				"requestBody": {
					"required": true,
					"content": {
						"application/json": { "schema": schema_ref("ReplicationRequest") }
					}
				},
				"responses": {
					"200": json_response("Replication started", schema_ref("ReplicationResponse"))
				}
			}
		}
	})
}

/// Concrete path entries for one discovered database. Generated from the
/// live `_all_dbs` listing, so the document also covers databases that exist
/// right now, not only the `{db}` placeholder.
pub(super) fn database_paths(name: &str) -> Map<String, Value> {
	let mut entries = Map::new();

	entries.insert(
		format!("/{}", name),
		json!({
			"get": {
				"summary": format!("Get information about the '{}' database", name),
				"description": format!("Gets information about the discovered database '{}'", name),
				"tags": [name],
				"responses": {
					"200": json_response("Request completed successfully", schema_ref("DatabaseInfo"))
				}
			}
		}),
	);

	entries.insert(
		format!("/{}/_all_docs", name),
		json!({
			"get": {
				"summary": format!("Get all documents in the '{}' database", name),
				"description": format!("Returns all documents in the discovered database '{}'", name),
				"tags": [name],
				"responses": {
					"200": json_response("Request completed successfully", schema_ref("AllDocsResponse"))
				}
			}
		}),
	);

	entries
}
