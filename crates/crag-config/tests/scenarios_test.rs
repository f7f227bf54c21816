use crag_config::{
    ChunkingType, Config, ConfigError, ConfigValidator, DbProvider, LlmProvider, Mode, Reporting,
    REQUIREMENTS,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn base() -> Value {
    json!({
        "mode": "eval",
        "repo_url": "https://github.com/example/repo",
        "eval_path": "data/eval.json",
        "retriever": {
            "chunking": {
                "type": "RecursiveCharacterTextSplitter",
                "chunk_size": 500,
                "chunk_overlap": 50
            },
            "db": {"provider": "chromadb", "collection_name": "x", "persist_dir": "/tmp"},
            "llm": {"provider": "hf", "device": "cpu", "use_case": "embedding"}
        }
    })
}

fn missing_field(err: &ConfigError) -> &str {
    match err {
        ConfigError::MissingConditionalField { field, .. } => field,
        other => panic!("expected MissingConditionalField, got {other:?}"),
    }
}

#[test]
fn test_complete_eval_config() {
    let config = Config::from_value(&base()).unwrap();
    assert_eq!(config.mode, Mode::Eval);
    assert_eq!(config.retriever.chunking.kind, ChunkingType::RecursiveCharacterTextSplitter);
    assert_eq!(config.retriever.chunking.chunk_size, Some(500));
    assert_eq!(config.retriever.db.provider, DbProvider::Chromadb);
    assert_eq!(config.retriever.llm.provider, LlmProvider::Hf);
    assert_eq!(config.retriever.k, 10);
    assert_eq!(config.eval_path.as_deref(), Some("data/eval.json"));
}

#[test]
fn test_omitted_optional_children_stay_unset() {
    let config = Config::from_value(&base()).unwrap();
    assert_eq!(config.generator, None);
    assert_eq!(config.retriever.eval, None);
    assert_eq!(config.retriever.metadata, None);
    assert_eq!(config.retriever.rerank, None);
    assert_eq!(config.retriever.bm25, None);
}

#[test]
fn test_absent_mandatory_children() {
    let mut raw = base();
    raw.as_object_mut().unwrap().remove("retriever");
    let err = Config::from_value(&raw).unwrap_err();
    assert_eq!(
        err,
        ConfigError::MissingField {
            path: String::new(),
            field: "retriever".to_string()
        }
    );

    for child in ["chunking", "db", "llm"] {
        let mut raw = base();
        raw["retriever"].as_object_mut().unwrap().remove(child);
        let err = Config::from_value(&raw).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingField {
                path: "retriever".to_string(),
                field: child.to_string()
            }
        );
    }
}

#[test]
fn test_null_child_counts_as_absent() {
    let mut raw = base();
    raw["retriever"]["llm"] = Value::Null;
    let err = Config::from_value(&raw).unwrap_err();
    assert_eq!(err.field(), Some("llm"));
    assert!(matches!(err, ConfigError::MissingField { .. }));
}

#[test]
fn test_openai_without_api_key() {
    let mut raw = base();
    raw["retriever"]["llm"] = json!({"provider": "openai", "model_name": "text-embedding-3-small"});
    let err = Config::from_value(&raw).unwrap_err();
    assert_eq!(missing_field(&err), "api_key");
    assert_eq!(err.node_path(), Some("retriever.llm"));
}

#[test]
fn test_llm_chunking_without_setup() {
    let mut raw = base();
    raw["retriever"]["chunking"] = json!({"type": "LLMChunking"});
    let err = Config::from_value(&raw).unwrap_err();
    assert_eq!(missing_field(&err), "llm_setup");
}

#[test]
fn test_summary_metadata_without_llm() {
    let mut raw = base();
    raw["retriever"]["metadata"] = json!({"list": ["summary"]});
    let err = Config::from_value(&raw).unwrap_err();
    assert_eq!(missing_field(&err), "llm_summary");
    assert_eq!(err.node_path(), Some("retriever.metadata"));
}

#[test]
fn test_ui_mode_without_generator() {
    let mut raw = base();
    raw["mode"] = json!("ui");
    let err = Config::from_value(&raw).unwrap_err();
    assert_eq!(missing_field(&err), "generator");
    assert_eq!(err.node_path(), Some(""));
}

#[test]
fn test_unknown_db_provider() {
    let mut raw = base();
    raw["retriever"]["db"]["provider"] = json!("unknownstore");
    let err = Config::from_value(&raw).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnrecognizedEnumValue { ref path, ref field, ref value, .. }
            if path == "retriever.db" && field == "provider" && value == "unknownstore"
    ));
}

#[test]
fn test_every_unrecognized_discriminant_fails() {
    let cases = [
        ("/mode", "batch"),
        ("/retriever/llm/provider", "anthropic"),
        ("/retriever/chunking/type", "SemanticChunker"),
        ("/retriever/db/provider", "qdrant"),
    ];

    for (pointer, bad) in cases {
        let mut raw = base();
        *raw.pointer_mut(pointer).unwrap() = json!(bad);
        let err = Config::from_value(&raw).unwrap_err();
        assert!(
            matches!(err, ConfigError::UnrecognizedEnumValue { ref value, .. } if value == bad),
            "{pointer}: {err:?}"
        );
    }
}

#[test]
fn test_each_required_field_is_enforced() {
    // (node pointer, discriminant value set on the node, base fields)
    let nodes: [(&str, &str, Value); 3] = [
        (
            "/retriever/llm",
            "provider",
            json!({"device": "cpu", "api_key": "sk", "model_name": "m"}),
        ),
        (
            "/retriever/chunking",
            "type",
            json!({"chunk_size": 10, "chunk_overlap": 2, "llm_setup": {"device": "cpu"}}),
        ),
        (
            "/retriever/db",
            "provider",
            json!({"collection_name": "c", "persist_dir": "/tmp"}),
        ),
    ];
    let tables = [
        &REQUIREMENTS.llm_provider,
        &REQUIREMENTS.chunking_type,
        &REQUIREMENTS.db_provider,
    ];

    for ((pointer, discriminant, fields), table) in nodes.iter().zip(tables) {
        for (value, required) in &table.by_value {
            let mut node = fields.clone();
            node[*discriminant] = json!(value);

            // Every required field present: accepted
            let mut raw = base();
            *raw.pointer_mut(pointer).unwrap() = node.clone();
            assert!(Config::from_value(&raw).is_ok(), "{pointer} {value}");

            // Any one of them removed or emptied: rejected naming that field
            for name in required {
                for hole in [Value::Null, json!(""), json!(0), json!([])] {
                    let mut broken = node.clone();
                    broken[name.as_str()] = hole;
                    let mut raw = base();
                    *raw.pointer_mut(pointer).unwrap() = broken;
                    let err = Config::from_value(&raw).unwrap_err();
                    assert_eq!(missing_field(&err), name, "{pointer} {value}");
                }
            }
        }
    }
}

#[test]
fn test_unrelated_optionals_do_not_matter() {
    let mut raw = base();
    raw["exp_name"] = json!("nightly");
    raw["retriever"]["bm25"] = json!("docs");
    raw["retriever"]["eval"] = json!({
        "augment_query": {"provider": "hf", "device": "cpu", "use_case": "generation"}
    });
    raw["retriever"]["metadata"] = json!({"list": ["file_name"]});
    let config = Config::from_value(&raw).unwrap();
    assert_eq!(config.exp_name.as_deref(), Some("nightly"));
    assert!(config.retriever.eval.unwrap().augment_query.is_some());
}

#[test]
fn test_defaults_do_not_rescue_required_fields() {
    // The catalog has a device default, but hf still needs it in the file
    let mut raw = base();
    raw["retriever"]["llm"].as_object_mut().unwrap().remove("device");
    let err = Config::from_value(&raw).unwrap_err();
    assert_eq!(missing_field(&err), "device");
}

#[test]
fn test_validation_is_idempotent() {
    let validator = ConfigValidator::new();
    let raw = base();
    assert_eq!(validator.validate(&raw).unwrap(), validator.validate(&raw).unwrap());

    let mut broken = base();
    broken["retriever"]["chunking"] = json!({"type": "LLMChunking"});
    assert_eq!(
        validator.validate(&broken).unwrap_err(),
        validator.validate(&broken).unwrap_err()
    );
}

#[test]
fn test_all_missing_reporting() {
    let mut raw = base();
    raw["retriever"]["db"] = json!({"provider": "chromadb"});
    let validator = ConfigValidator::new().with_reporting(Reporting::AllMissing);
    match validator.validate(&raw).unwrap_err() {
        ConfigError::MultipleErrors { count, errors } => {
            assert_eq!(count, 2);
            assert!(errors.contains("retriever.db.collection_name"));
            assert!(errors.contains("retriever.db.persist_dir"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_first_failing_child_aborts_tree() {
    // metadata is built before db, so its error wins
    let mut raw = base();
    raw["retriever"]["metadata"] = json!({"list": ["keywords"]});
    raw["retriever"]["db"]["provider"] = json!("unknownstore");
    let err = Config::from_value(&raw).unwrap_err();
    assert_eq!(missing_field(&err), "llm_summary");
}

#[test]
fn test_wrong_primitive_type() {
    let mut raw = base();
    raw["retriever"]["k"] = json!("ten");
    let err = Config::from_value(&raw).unwrap_err();
    assert_eq!(
        err,
        ConfigError::TypeMismatch {
            path: "retriever".to_string(),
            field: "k".to_string(),
            expected: "a non-negative integer".to_string(),
            found: "a string".to_string(),
        }
    );
}

#[test]
fn test_validator_is_shareable_across_threads() {
    let validator = std::sync::Arc::new(ConfigValidator::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let validator = validator.clone();
            std::thread::spawn(move || validator.validate(&base()).is_ok())
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
