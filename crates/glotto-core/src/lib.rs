#![forbid(unsafe_code)]

//! Typed localization catalog runtime.
//!
//! Translations are organized into collection namespaces; each logical
//! string is an entry accessor that renders, from named parameters, a
//! [`LocalizedEntry`] holding one value per supported language. The
//! language set is a closed enumeration, templates are parsed and
//! validated at catalog construction, and a missing translation is the
//! empty-string sentinel rather than an implicit fallback.
//!
//! Everything is immutable after construction: all operations are pure,
//! synchronous reads, safe for any number of concurrent callers.

pub mod accessor;
pub mod catalog;
pub mod entry;
pub mod locale;
mod macros;
pub mod template;

pub use accessor::{EntryAccessor, EntryAccessorBuilder, RenderError};
pub use catalog::{
    Catalog, CatalogBuilder, CatalogError, CollectionNamespace, CoverageReport, LanguageCoverage,
    NamespaceBuilder,
};
pub use entry::{FallbackPolicy, LocalizedEntry};
pub use locale::LanguageCode;
pub use template::{Segment, Template, TemplateError, substitute};
