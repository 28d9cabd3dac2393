use serde_json::{json, Value};

use super::schema_ref;

/// JSON Schema definitions for the CouchDB object shapes referenced from the
/// path templates.
pub(super) fn schemas() -> Value {
	json!({
		"ServerInfo": {
			"type": "object",
			"properties": {
				"couchdb": { "type": "string" },
				"version": { "type": "string" },
				"git_sha": { "type": "string" },
				"uuid": { "type": "string" },
				"features": { "type": "array", "items": { "type": "string" } },
				"vendor": {
					"type": "object",
					"properties": {
						"name": { "type": "string" },
						"version": { "type": "string" }
					}
				}
			}
		},
		"DatabaseInfo": {
			"type": "object",
			"properties": {
				"db_name": { "type": "string" },
				"doc_count": { "type": "integer" },
				"doc_del_count": { "type": "integer" },
				"update_seq": { "type": "integer" },
				"purge_seq": { "type": "integer" },
				"compact_running": { "type": "boolean" },
				"disk_size": { "type": "integer" },
				"data_size": { "type": "integer" },
				"instance_start_time": { "type": "string" },
				"disk_format_version": { "type": "integer" }
			}
		},
		"AllDocsResponse": {
			"type": "object",
			"properties": {
				"total_rows": { "type": "integer" },
				"offset": { "type": "integer" },
				"rows": {
					"type": "array",
					"items": {
						"type": "object",
						"properties": {
							"id": { "type": "string" },
							"key": { "type": "string" },
							"value": { "type": "object" },
							"doc": { "type": "object" }
						}
					}
				}
			}
		},
		"UserDocument": {
			"type": "object",
			"required": ["name", "password", "type", "roles"],
			"properties": {
				"_id": { "type": "string" },
				"_rev": { "type": "string" },
				"name": { "type": "string" },
				"password": { "type": "string" },
				"type": { "type": "string", "enum": ["user"] },
				"roles": { "type": "array", "items": { "type": "string" } }
			}
		},
		"Document": {
			"type": "object",
			"properties": {
				"_id": { "type": "string" },
				"_rev": { "type": "string" },
				"_deleted": { "type": "boolean" },
				"_attachments": { "type": "object" },
				"_revisions": { "type": "object" },
				"_revs_info": { "type": "array" }
			},
			"additionalProperties": true
		},
		"DocumentResponse": {
			"type": "object",
			"properties": {
				"ok": { "type": "boolean" },
				"id": { "type": "string" },
				"rev": { "type": "string" }
			}
		},
		"MangoQuery": {
			"type": "object",
			"required": ["selector"],
			"properties": {
				"selector": {
					"type": "object",
					"description": "JSON object describing criteria used to select documents"
				},
				"limit": {
					"type": "integer",
					"description": "Maximum number of results returned"
				},
				"skip": {
					"type": "integer",
					"description": "Skip the first 'n' results"
				},
				"sort": {
					"type": "array",
					"description": "Array of field name direction pairs",
					"items": { "type": "object" }
				},
				"fields": {
					"type": "array",
					"description": "Array of field names to return",
					"items": { "type": "string" }
				},
				"use_index": {
					"type": "array",
					"description": "Index to use for query",
					"items": { "type": "string" }
				}
			}
		},
		"MangoResponse": {
			"type": "object",
			"properties": {
				"docs": { "type": "array", "items": schema_ref("Document") },
				"bookmark": { "type": "string" },
				"warning": { "type": "string" }
			}
		},
		"ChangesResponse": {
			"type": "object",
			"properties": {
				"results": {
					"type": "array",
					"items": {
						"type": "object",
						"properties": {
							"seq": { "type": "string" },
							"id": { "type": "string" },
							"changes": {
								"type": "array",
								"items": {
									"type": "object",
									"properties": {
										"rev": { "type": "string" }
									}
								}
							},
							"deleted": { "type": "boolean" },
							"doc": schema_ref("Document")
						}
					}
				},
				"last_seq": { "type": "string" },
				"pending": { "type": "integer" }
			}
		},
		"BulkDocsRequest": {
			"type": "object",
			"required": ["docs"],
			"properties": {
				"docs": { "type": "array", "items": schema_ref("Document") },
				"new_edits": { "type": "boolean", "default": true }
			}
		},
		"DesignDocument": {
			"type": "object",
			"required": ["_id", "views"],
			"properties": {
				"_id": { "type": "string" },
				"_rev": { "type": "string" },
				"language": { "type": "string", "default": "javascript" },
				"views": {
					"type": "object",
					"description": "Map of view names to view definitions",
					"additionalProperties": {
						"type": "object",
						"properties": {
							"map": { "type": "string" },
							"reduce": { "type": "string" }
						}
					}
				},
				"filters": { "type": "object" },
				"lists": { "type": "object" },
				"shows": { "type": "object" },
				"updates": { "type": "object" },
				"validate_doc_update": { "type": "string" },
				"autoupdate": { "type": "boolean" }
			}
		},
		"ViewQuery": {
			"type": "object",
			"properties": {
				"key": { "type": "string", "description": "Key to query" },
				"keys": {
					"type": "array",
					"description": "Array of keys to query",
					"items": { "type": "string" }
				},
				"startkey": { "type": "string", "description": "Start key" },
				"endkey": { "type": "string", "description": "End key" },
				"startkey_docid": { "type": "string" },
				"endkey_docid": { "type": "string" },
				"limit": { "type": "integer", "description": "Maximum number of results" },
				"skip": { "type": "integer", "description": "Skip the first 'n' results" },
				"descending": { "type": "boolean", "default": false },
				"include_docs": { "type": "boolean", "default": false },
				"inclusive_end": { "type": "boolean", "default": true },
				"reduce": { "type": "boolean", "default": true },
				"group": { "type": "boolean", "default": false },
				"group_level": { "type": "integer" }
			}
		},
		"ViewResponse": {
			"type": "object",
			"properties": {
				"total_rows": { "type": "integer" },
				"offset": { "type": "integer" },
				"rows": {
					"type": "array",
					"items": {
						"type": "object",
						"properties": {
							"id": { "type": "string" },
							"key": { "type": "string" },
							"value": { "type": "object" },
							"doc": schema_ref("Document")
						}
					}
				}
			}
		},
		"ReplicationRequest": {
			"type": "object",
			"required": ["source", "target"],
			"properties": {
				"source": { "type": "string", "description": "Source database URL or name" },
				"target": { "type": "string", "description": "Target database URL or name" },
				"create_target": { "type": "boolean", "default": false },
				"continuous": { "type": "boolean", "default": false },
				"doc_ids": {
					"type": "array",
					"description": "Array of document IDs to replicate",
					"items": { "type": "string" }
				},
				"filter": { "type": "string" },
				"query_params": { "type": "object" }
			}
		},
		"ReplicationResponse": {
			"type": "object",
			"properties": {
				"ok": { "type": "boolean" },
				"session_id": { "type": "string" },
				"source_last_seq": { "type": "integer" },
				"history": {
					"type": "array",
					"items": {
						"type": "object",
						"properties": {
							"session_id": { "type": "string" },
							"start_time": { "type": "string" },
							"end_time": { "type": "string" },
							"start_last_seq": { "type": "integer" },
							"end_last_seq": { "type": "integer" },
							"recorded_seq": { "type": "integer" },
							"missing_checked": { "type": "integer" },
							"missing_found": { "type": "integer" },
							"docs_read": { "type": "integer" },
							"docs_written": { "type": "integer" },
							"doc_write_failures": { "type": "integer" }
						}
					}
				}
			}
		}
	})
}
