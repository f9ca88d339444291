#![forbid(unsafe_code)]

//! Integration tests: loading generator output and round-tripping a
//! catalog through its serialized table.

use glotto_core::{FallbackPolicy, LanguageCode};
use glotto_table::{CatalogTable, build_catalog, emit_table};

/// A table as the generation pipeline would emit it.
const PIPELINE_JSON: &str = r#"{
  "namespaces": [
    {
      "name": "root",
      "entries": [
        {
          "name": "lets_get_started",
          "params": ["topic"],
          "texts": [
            {
              "language": "en-GB",
              "template": "Let's get started with {topic}.",
              "description": "Displayed on the first step of the onboarding wizard."
            },
            {
              "language": "ja-JP",
              "template": "さあ、{topic}を始めましょう！",
              "description": "オンボーディングウィザードの最初のステップに表示されます。"
            }
          ]
        },
        {
          "name": "greeting",
          "texts": [
            {
              "language": "en-GB",
              "template": "Hello from the root!",
              "description": "A friendly greeting message."
            }
          ]
        }
      ]
    },
    {
      "name": "client",
      "entries": [
        {
          "name": "greeting",
          "texts": [
            {
              "language": "en-GB",
              "template": "Hello!",
              "description": "A friendly greeting message."
            },
            {
              "language": "ja-JP",
              "template": "こんにちは！",
              "description": "親しみやすい挨拶メッセージ。"
            }
          ]
        },
        {
          "name": "farewell",
          "texts": [
            {
              "language": "en-GB",
              "template": "Goodbye!",
              "description": "A friendly farewell message."
            },
            {
              "language": "ja-JP",
              "template": "さようなら！",
              "description": "親しみやすい別れのメッセージ。"
            }
          ]
        }
      ]
    }
  ]
}"#;

fn load_pipeline_catalog() -> glotto_core::Catalog {
    let table = CatalogTable::from_json(PIPELINE_JSON).unwrap();
    build_catalog(&table, FallbackPolicy::NoFallback).unwrap()
}

#[test]
fn loaded_catalog_renders_generator_strings() {
    let catalog = load_pipeline_catalog();
    let entry = catalog
        .accessor("root", "lets_get_started")
        .unwrap()
        .render(&[("topic", "billing")])
        .unwrap();
    assert_eq!(
        entry.get(LanguageCode::EnglishBritish),
        "Let's get started with billing."
    );
    assert_eq!(entry.get(LanguageCode::Japanese), "さあ、billingを始めましょう！");
}

#[test]
fn namespaces_keep_same_named_entries_apart() {
    let catalog = load_pipeline_catalog();
    let root = catalog
        .accessor("root", "greeting")
        .unwrap()
        .render(&[])
        .unwrap();
    let client = catalog
        .accessor("client", "greeting")
        .unwrap()
        .render(&[])
        .unwrap();
    assert_eq!(root.get(LanguageCode::EnglishBritish), "Hello from the root!");
    assert_eq!(client.get(LanguageCode::EnglishBritish), "Hello!");
}

#[test]
fn unauthored_language_reads_as_sentinel_and_is_reported() {
    let catalog = load_pipeline_catalog();
    let entry = catalog
        .accessor("root", "greeting")
        .unwrap()
        .render(&[])
        .unwrap();
    assert_eq!(entry.get(LanguageCode::Japanese), "");
    assert!(entry.is_missing(LanguageCode::Japanese));

    assert_eq!(
        catalog.missing_translations(LanguageCode::Japanese),
        vec![("root".to_string(), "greeting".to_string())]
    );
    let report = catalog.coverage_report();
    assert_eq!(report.total_entries, 4);
    assert!(
        report.languages[LanguageCode::EnglishBritish.index()]
            .missing
            .is_empty()
    );
}

#[test]
fn arity_mismatch_survives_the_table_path() {
    let catalog = load_pipeline_catalog();
    let err = catalog
        .accessor("root", "lets_get_started")
        .unwrap()
        .render(&[])
        .unwrap_err();
    assert!(err.to_string().contains("lets_get_started"));
}

#[test]
fn serialize_reload_reproduces_every_get_result() {
    let original = load_pipeline_catalog();

    let json = emit_table(&original).to_json_pretty().unwrap();
    let reloaded = build_catalog(
        &CatalogTable::from_json(&json).unwrap(),
        FallbackPolicy::NoFallback,
    )
    .unwrap();

    for namespace in original.namespaces() {
        let reloaded_ns = reloaded.namespace(namespace.name()).unwrap();
        for accessor in namespace.accessors() {
            let reloaded_accessor = reloaded_ns.accessor(accessor.name()).unwrap();
            assert_eq!(accessor.params(), reloaded_accessor.params());

            // Render both with a distinctive value per parameter.
            let values: Vec<(String, String)> = accessor
                .params()
                .iter()
                .map(|param| (param.clone(), format!("<{param}>")))
                .collect();
            let args: Vec<(&str, &str)> = values
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect();

            let before = accessor.render(&args).unwrap();
            let after = reloaded_accessor.render(&args).unwrap();
            for language in LanguageCode::ALL {
                assert_eq!(before.get(language), after.get(language));
            }
        }
    }
}

#[test]
fn reloaded_table_is_structurally_identical() {
    let original = load_pipeline_catalog();
    let emitted = emit_table(&original);
    let json = emitted.to_json_pretty().unwrap();
    let reparsed = CatalogTable::from_json(&json).unwrap();
    assert_eq!(emitted, reparsed);
}
