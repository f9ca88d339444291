//! Collection namespaces, the catalog, and coverage reporting.
//!
//! # Invariants
//!
//! 1. **Read-only after construction**: the catalog is built once and
//!    never mutated, so every operation is a pure read and the whole
//!    structure is `Send + Sync`.
//!
//! 2. **Stable addressing**: a `(namespace, accessor)` pair resolves to
//!    the same accessor for the life of the catalog. No two namespaces
//!    share a name; no two accessors share a name within a namespace.
//!
//! 3. **Deterministic iteration**: namespaces and accessors iterate in
//!    name order; languages iterate in declaration order.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Duplicate namespace | Generator emitted a name twice | Construction error |
//! | Duplicate accessor | Name collision inside a namespace | Construction error |
//! | Template defect | Unknown/malformed placeholder | Construction error |
//! | Missing translation | Language unauthored for an entry | Sentinel + coverage report |

use std::collections::BTreeMap;
use std::fmt;

use crate::accessor::EntryAccessor;
use crate::entry::{FallbackPolicy, LocalizedEntry};
use crate::locale::LanguageCode;
use crate::template::TemplateError;

/// Catalog construction errors.
///
/// All fatal: a catalog with any of these defects is never produced.
/// The generation pipeline is expected to reject them before shipping;
/// surfacing them here keeps a hand-written or skewed table from
/// loading at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two namespaces with the same name.
    DuplicateNamespace {
        /// The colliding namespace name.
        namespace: String,
    },
    /// Two accessors with the same name in one namespace.
    DuplicateAccessor {
        /// Namespace in which the collision occurred.
        namespace: String,
        /// The colliding accessor name.
        accessor: String,
    },
    /// The same parameter declared twice on one accessor.
    DuplicateParam {
        /// Accessor with the repeated declaration.
        accessor: String,
        /// The repeated parameter name.
        param: String,
    },
    /// A template failed to parse or referenced an undeclared parameter.
    Template {
        /// Accessor whose template is defective.
        accessor: String,
        /// Language of the defective template.
        language: LanguageCode,
        /// The underlying parse failure.
        error: TemplateError,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNamespace { namespace } => {
                write!(f, "duplicate namespace '{namespace}'")
            }
            Self::DuplicateAccessor {
                namespace,
                accessor,
            } => write!(f, "duplicate accessor '{accessor}' in namespace '{namespace}'"),
            Self::DuplicateParam { accessor, param } => {
                write!(f, "parameter '{param}' declared twice on accessor '{accessor}'")
            }
            Self::Template {
                accessor,
                language,
                error,
            } => write!(f, "invalid {language} template for '{accessor}': {error}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Template { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// A named grouping of related entry accessors.
///
/// Flat grouping: namespaces do not nest. Identity is the name, unique
/// within the catalog.
#[derive(Debug, Clone)]
pub struct CollectionNamespace {
    name: String,
    accessors: BTreeMap<String, EntryAccessor>,
}

impl CollectionNamespace {
    /// Start building a namespace with the given name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> NamespaceBuilder {
        NamespaceBuilder {
            name: name.into(),
            accessors: BTreeMap::new(),
        }
    }

    /// Namespace name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an accessor by name.
    #[must_use]
    pub fn accessor(&self, name: &str) -> Option<&EntryAccessor> {
        self.accessors.get(name)
    }

    /// All accessors, in name order.
    pub fn accessors(&self) -> impl Iterator<Item = &EntryAccessor> {
        self.accessors.values()
    }

    /// Number of accessors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    /// Whether the namespace holds no accessors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }
}

/// Builder for [`CollectionNamespace`].
#[derive(Debug)]
pub struct NamespaceBuilder {
    name: String,
    accessors: BTreeMap<String, EntryAccessor>,
}

impl NamespaceBuilder {
    /// Add an accessor. Names must be unique within the namespace.
    pub fn entry(mut self, accessor: EntryAccessor) -> Result<Self, CatalogError> {
        let key = accessor.name().to_string();
        if self.accessors.contains_key(&key) {
            return Err(CatalogError::DuplicateAccessor {
                namespace: self.name,
                accessor: key,
            });
        }
        self.accessors.insert(key, accessor);
        Ok(self)
    }

    /// Finish the namespace.
    #[must_use]
    pub fn build(self) -> CollectionNamespace {
        CollectionNamespace {
            name: self.name,
            accessors: self.accessors,
        }
    }
}

/// The process-scoped, immutable localization catalog.
///
/// Built once from the generation pipeline's output and passed by
/// reference to consumers; tests construct isolated instances from
/// synthetic data. There is no update, delete, or reload operation:
/// reloading is a new catalog and an atomic reference swap, outside
/// this crate.
#[derive(Debug, Clone)]
pub struct Catalog {
    namespaces: BTreeMap<String, CollectionNamespace>,
    fallback: FallbackPolicy,
}

impl Catalog {
    /// Start building a catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder {
            namespaces: BTreeMap::new(),
            fallback: FallbackPolicy::NoFallback,
        }
    }

    /// Look up a namespace by name.
    #[must_use]
    pub fn namespace(&self, name: &str) -> Option<&CollectionNamespace> {
        self.namespaces.get(name)
    }

    /// Look up an accessor by `(namespace, name)`.
    #[must_use]
    pub fn accessor(&self, namespace: &str, name: &str) -> Option<&EntryAccessor> {
        self.namespace(namespace).and_then(|ns| ns.accessor(name))
    }

    /// All namespaces, in name order.
    pub fn namespaces(&self) -> impl Iterator<Item = &CollectionNamespace> {
        self.namespaces.values()
    }

    /// The configured fallback policy.
    #[must_use]
    pub const fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Read `entry` for `language` under the catalog's fallback policy.
    ///
    /// With the default [`FallbackPolicy::NoFallback`] this is exactly
    /// [`LocalizedEntry::get`].
    #[must_use]
    pub fn text<'a>(&self, entry: &'a LocalizedEntry, language: LanguageCode) -> &'a str {
        self.fallback.apply(entry, language)
    }

    /// `(namespace, accessor)` keys whose `language` text is unauthored.
    ///
    /// Sorted by namespace, then accessor.
    #[must_use]
    pub fn missing_translations(&self, language: LanguageCode) -> Vec<(String, String)> {
        let mut missing = Vec::new();
        for namespace in self.namespaces.values() {
            for accessor in namespace.accessors() {
                if !accessor.has_translation(language) {
                    missing.push((namespace.name().to_string(), accessor.name().to_string()));
                }
            }
        }
        missing
    }

    /// Per-language coverage of the whole catalog.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let total: usize = self.namespaces.values().map(CollectionNamespace::len).sum();
        let languages = LanguageCode::ALL
            .into_iter()
            .map(|language| {
                let missing = self.missing_translations(language);
                let present = total - missing.len();
                let coverage_percent = if total == 0 {
                    100.0
                } else {
                    (present as f32 / total as f32) * 100.0
                };
                LanguageCoverage {
                    language,
                    present,
                    missing,
                    coverage_percent,
                }
            })
            .collect();
        CoverageReport {
            total_entries: total,
            languages,
        }
    }
}

/// Builder for [`Catalog`].
#[derive(Debug)]
pub struct CatalogBuilder {
    namespaces: BTreeMap<String, CollectionNamespace>,
    fallback: FallbackPolicy,
}

impl CatalogBuilder {
    /// Add a namespace. Names must be unique within the catalog.
    pub fn namespace(mut self, namespace: CollectionNamespace) -> Result<Self, CatalogError> {
        let key = namespace.name().to_string();
        if self.namespaces.contains_key(&key) {
            return Err(CatalogError::DuplicateNamespace { namespace: key });
        }
        self.namespaces.insert(key, namespace);
        Ok(self)
    }

    /// Set the fallback policy applied by [`Catalog::text`].
    #[must_use]
    pub fn fallback(mut self, policy: FallbackPolicy) -> Self {
        self.fallback = policy;
        self
    }

    /// Finish the catalog.
    ///
    /// Logs construction stats at debug level and one warning per
    /// language with unauthored translations; return values are
    /// unaffected.
    #[must_use]
    pub fn build(self) -> Catalog {
        let catalog = Catalog {
            namespaces: self.namespaces,
            fallback: self.fallback,
        };
        let entries: usize = catalog.namespaces.values().map(CollectionNamespace::len).sum();
        tracing::debug!(
            namespaces = catalog.namespaces.len(),
            entries,
            "localization catalog constructed"
        );
        for language in LanguageCode::ALL {
            let missing = catalog.missing_translations(language);
            if !missing.is_empty() {
                tracing::warn!(
                    language = %language,
                    missing = missing.len(),
                    "catalog has untranslated entries"
                );
            }
        }
        catalog
    }
}

/// Coverage of the catalog's entries across every language.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    /// Total number of entries in the catalog.
    pub total_entries: usize,
    /// Per-language coverage, in language declaration order.
    pub languages: Vec<LanguageCoverage>,
}

/// Per-language coverage statistics.
#[derive(Debug, Clone)]
pub struct LanguageCoverage {
    /// The language being reported on.
    pub language: LanguageCode,
    /// Entries with an authored translation.
    pub present: usize,
    /// `(namespace, accessor)` keys with no authored translation.
    pub missing: Vec<(String, String)>,
    /// Coverage as a percentage (0.0–100.0).
    pub coverage_percent: f32,
}
