//! Serde model of the catalog interchange table.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Malformed JSON | Truncated or hand-edited payload | `TableError::Json` |
//! | Unknown language tag | Generator/runtime version skew | `TableError::UnknownLanguage` |
//! | Repeated language row | Generator defect | `TableError::DuplicateLanguage` |
//! | Catalog invariant broken | Duplicate names, bad placeholders | `TableError::Catalog` |
//! | Language row absent | Translation not yet authored | Sentinel slot, no error |

use std::fmt;

use glotto_core::{
    Catalog, CatalogError, CollectionNamespace, EntryAccessor, FallbackPolicy, LanguageCode,
};
use serde::{Deserialize, Serialize};

/// Errors from loading or serializing a table.
#[derive(Debug)]
pub enum TableError {
    /// The JSON payload could not be parsed or written.
    Json(serde_json::Error),
    /// A text row names a language tag outside the closed registry.
    UnknownLanguage {
        /// Namespace of the offending entry.
        namespace: String,
        /// Entry carrying the row.
        entry: String,
        /// The unrecognized tag.
        tag: String,
    },
    /// Two text rows for the same language on one entry.
    DuplicateLanguage {
        /// Namespace of the offending entry.
        namespace: String,
        /// Entry carrying the rows.
        entry: String,
        /// The repeated tag.
        tag: String,
    },
    /// The table violated a catalog construction invariant.
    Catalog(CatalogError),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(error) => write!(f, "table JSON error: {error}"),
            Self::UnknownLanguage {
                namespace,
                entry,
                tag,
            } => write!(f, "unknown language tag '{tag}' on entry '{namespace}.{entry}'"),
            Self::DuplicateLanguage {
                namespace,
                entry,
                tag,
            } => write!(f, "repeated language '{tag}' on entry '{namespace}.{entry}'"),
            Self::Catalog(error) => write!(f, "table violates catalog invariant: {error}"),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(error) => Some(error),
            Self::Catalog(error) => Some(error),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TableError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<CatalogError> for TableError {
    fn from(error: CatalogError) -> Self {
        Self::Catalog(error)
    }
}

/// One translated text row: language tag, template, translator context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryText {
    /// Canonical BCP 47 tag of the language.
    pub language: String,
    /// Raw template text, `{name}` placeholder syntax.
    pub template: String,
    /// Human-readable context for translators.
    #[serde(default)]
    pub description: String,
}

/// One logical string: declared parameters plus per-language texts.
///
/// A language with no row here gets the missing-translation sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryTable {
    /// Accessor name, unique within its namespace.
    pub name: String,
    /// Declared parameter names, in declaration order.
    #[serde(default)]
    pub params: Vec<String>,
    /// Per-language texts.
    #[serde(default)]
    pub texts: Vec<EntryText>,
}

/// A namespace and its entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceTable {
    /// Namespace name, unique within the catalog.
    pub name: String,
    /// Entries grouped under this namespace.
    #[serde(default)]
    pub entries: Vec<EntryTable>,
}

/// The full table the generation pipeline emits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTable {
    /// All namespaces in the catalog.
    #[serde(default)]
    pub namespaces: Vec<NamespaceTable>,
}

impl CatalogTable {
    /// Parse a table from its JSON encoding.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the table as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Construct a [`Catalog`] from a parsed table.
///
/// Language tags are mapped through the closed registry and rejected on
/// the first unknown or repeated tag; parameter and template invariants
/// are enforced by the core builders and surface as
/// [`TableError::Catalog`].
pub fn build_catalog(table: &CatalogTable, fallback: FallbackPolicy) -> Result<Catalog, TableError> {
    let mut builder = Catalog::builder().fallback(fallback);
    for namespace in &table.namespaces {
        let mut ns = CollectionNamespace::builder(&namespace.name);
        for entry in &namespace.entries {
            let mut accessor = EntryAccessor::builder(&entry.name);
            for param in &entry.params {
                accessor = accessor.param(param);
            }
            let mut seen: Vec<LanguageCode> = Vec::new();
            for text in &entry.texts {
                let Some(language) = LanguageCode::from_tag(&text.language) else {
                    return Err(TableError::UnknownLanguage {
                        namespace: namespace.name.clone(),
                        entry: entry.name.clone(),
                        tag: text.language.clone(),
                    });
                };
                if seen.contains(&language) {
                    return Err(TableError::DuplicateLanguage {
                        namespace: namespace.name.clone(),
                        entry: entry.name.clone(),
                        tag: text.language.clone(),
                    });
                }
                seen.push(language);
                accessor = accessor.text(language, &text.template, &text.description);
            }
            ns = ns.entry(accessor.build()?)?;
        }
        builder = builder.namespace(ns.build())?;
    }
    let catalog = builder.build();
    tracing::debug!(
        namespaces = table.namespaces.len(),
        "catalog loaded from interchange table"
    );
    Ok(catalog)
}

/// Reproduce the interchange table from a constructed catalog.
///
/// Namespaces and entries appear in catalog (name) order, languages in
/// registry order. Unauthored languages are omitted rather than written
/// as empty rows, so emit → build reproduces the same sentinel slots.
#[must_use]
pub fn emit_table(catalog: &Catalog) -> CatalogTable {
    let namespaces = catalog
        .namespaces()
        .map(|namespace| NamespaceTable {
            name: namespace.name().to_string(),
            entries: namespace
                .accessors()
                .map(|accessor| EntryTable {
                    name: accessor.name().to_string(),
                    params: accessor.params().to_vec(),
                    texts: LanguageCode::ALL
                        .into_iter()
                        .filter(|&language| accessor.has_translation(language))
                        .map(|language| EntryText {
                            language: language.tag().to_string(),
                            template: accessor.template(language).source().to_string(),
                            description: accessor.description(language).to_string(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();
    CatalogTable { namespaces }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glotto_core::TemplateError;

    fn table_with_entry(entry: EntryTable) -> CatalogTable {
        CatalogTable {
            namespaces: vec![NamespaceTable {
                name: "root".into(),
                entries: vec![entry],
            }],
        }
    }

    #[test]
    fn minimal_table_decodes_with_defaults() {
        let table = CatalogTable::from_json(
            r#"{"namespaces": [{"name": "root", "entries": [{"name": "greeting"}]}]}"#,
        )
        .unwrap();
        let entry = &table.namespaces[0].entries[0];
        assert!(entry.params.is_empty());
        assert!(entry.texts.is_empty());

        let catalog = build_catalog(&table, FallbackPolicy::NoFallback).unwrap();
        let accessor = catalog.accessor("root", "greeting").unwrap();
        assert!(!accessor.has_translation(LanguageCode::EnglishBritish));
    }

    #[test]
    fn malformed_json_is_a_table_error() {
        let err = CatalogTable::from_json("{\"namespaces\": [").unwrap_err();
        assert!(matches!(err, TableError::Json(_)));
    }

    #[test]
    fn unknown_language_tag_is_rejected() {
        let table = table_with_entry(EntryTable {
            name: "greeting".into(),
            params: vec![],
            texts: vec![EntryText {
                language: "fr-FR".into(),
                template: "Bonjour !".into(),
                description: String::new(),
            }],
        });
        let err = build_catalog(&table, FallbackPolicy::NoFallback).unwrap_err();
        assert!(matches!(
            err,
            TableError::UnknownLanguage { ref tag, .. } if tag == "fr-FR"
        ));
    }

    #[test]
    fn repeated_language_row_is_rejected() {
        let table = table_with_entry(EntryTable {
            name: "greeting".into(),
            params: vec![],
            texts: vec![
                EntryText {
                    language: "en-GB".into(),
                    template: "Hello!".into(),
                    description: String::new(),
                },
                EntryText {
                    language: "en-GB".into(),
                    template: "Hi!".into(),
                    description: String::new(),
                },
            ],
        });
        let err = build_catalog(&table, FallbackPolicy::NoFallback).unwrap_err();
        assert!(matches!(
            err,
            TableError::DuplicateLanguage { ref tag, .. } if tag == "en-GB"
        ));
    }

    #[test]
    fn undeclared_placeholder_surfaces_as_catalog_error() {
        let table = table_with_entry(EntryTable {
            name: "greeting".into(),
            params: vec![],
            texts: vec![EntryText {
                language: "en-GB".into(),
                template: "Hello, {name}!".into(),
                description: String::new(),
            }],
        });
        let err = build_catalog(&table, FallbackPolicy::NoFallback).unwrap_err();
        assert!(matches!(
            err,
            TableError::Catalog(CatalogError::Template {
                error: TemplateError::UnknownPlaceholder { .. },
                ..
            })
        ));
    }

    #[test]
    fn duplicate_entry_name_surfaces_as_catalog_error() {
        let greeting = EntryTable {
            name: "greeting".into(),
            params: vec![],
            texts: vec![],
        };
        let table = CatalogTable {
            namespaces: vec![NamespaceTable {
                name: "root".into(),
                entries: vec![greeting.clone(), greeting],
            }],
        };
        let err = build_catalog(&table, FallbackPolicy::NoFallback).unwrap_err();
        assert!(matches!(
            err,
            TableError::Catalog(CatalogError::DuplicateAccessor { .. })
        ));
    }

    #[test]
    fn emit_preserves_sources_descriptions_and_order() {
        let table = table_with_entry(EntryTable {
            name: "lets_get_started".into(),
            params: vec!["topic".into()],
            texts: vec![
                EntryText {
                    language: "ja-JP".into(),
                    template: "さあ、{topic}を始めましょう！".into(),
                    description: "オンボーディングウィザードの最初のステップに表示されます。".into(),
                },
                EntryText {
                    language: "en-GB".into(),
                    template: "Let's get started with {topic}.".into(),
                    description: "Displayed on the first step of the onboarding wizard.".into(),
                },
            ],
        });
        let catalog = build_catalog(&table, FallbackPolicy::NoFallback).unwrap();
        let emitted = emit_table(&catalog);

        let entry = &emitted.namespaces[0].entries[0];
        assert_eq!(entry.params, vec!["topic".to_string()]);
        // Registry order, regardless of input row order.
        assert_eq!(entry.texts[0].language, "en-GB");
        assert_eq!(entry.texts[0].template, "Let's get started with {topic}.");
        assert_eq!(
            entry.texts[0].description,
            "Displayed on the first step of the onboarding wizard."
        );
        assert_eq!(entry.texts[1].language, "ja-JP");
    }

    #[test]
    fn emit_omits_unauthored_languages() {
        let table = table_with_entry(EntryTable {
            name: "farewell".into(),
            params: vec![],
            texts: vec![EntryText {
                language: "en-GB".into(),
                template: "Goodbye!".into(),
                description: String::new(),
            }],
        });
        let catalog = build_catalog(&table, FallbackPolicy::NoFallback).unwrap();
        let emitted = emit_table(&catalog);
        let texts = &emitted.namespaces[0].entries[0].texts;
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].language, "en-GB");
    }

    #[test]
    fn fallback_policy_is_carried_into_the_catalog() {
        let table = CatalogTable::default();
        let catalog = build_catalog(
            &table,
            FallbackPolicy::Language(LanguageCode::EnglishBritish),
        )
        .unwrap();
        assert_eq!(
            catalog.fallback(),
            FallbackPolicy::Language(LanguageCode::EnglishBritish)
        );
    }
}
