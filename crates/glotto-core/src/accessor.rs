//! Entry accessors: pure renderers from named parameters to localized
//! entries.
//!
//! An accessor is identified by its name within a collection namespace.
//! Its declared parameter set is fixed at construction and must be
//! supplied exactly on every call; its per-language templates are parsed
//! and validated against that set before the accessor exists.

use std::fmt;

use crate::catalog::CatalogError;
use crate::entry::LocalizedEntry;
use crate::locale::LanguageCode;
use crate::template::Template;

/// Call-time failure from [`EntryAccessor::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The supplied arguments do not match the declared parameter set.
    ///
    /// Surfaced before any template is rendered; a partially-rendered
    /// entry is never produced.
    ArityMismatch {
        /// Name of the accessor that was called.
        accessor: String,
        /// Declared parameters with no supplied value.
        missing: Vec<String>,
        /// Supplied names that are undeclared or repeated.
        unexpected: Vec<String>,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArityMismatch {
                accessor,
                missing,
                unexpected,
            } => write!(
                f,
                "arity mismatch calling '{accessor}': missing [{}], unexpected [{}]",
                missing.join(", "),
                unexpected.join(", ")
            ),
        }
    }
}

impl std::error::Error for RenderError {}

/// Per-language text: the parsed template plus translator context.
#[derive(Debug, Clone)]
struct LanguageText {
    template: Template,
    description: String,
}

/// A pure renderer from named parameters to a [`LocalizedEntry`].
#[derive(Debug, Clone)]
pub struct EntryAccessor {
    name: String,
    params: Vec<String>,
    // One slot per LanguageCode, indexed by LanguageCode::index().
    texts: Vec<LanguageText>,
}

impl EntryAccessor {
    /// Start building an accessor with the given name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> EntryAccessorBuilder {
        EntryAccessorBuilder {
            name: name.into(),
            params: Vec::new(),
            sources: std::array::from_fn(|_| (String::new(), String::new())),
        }
    }

    /// Accessor name, unique within its namespace.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter names, in declaration order.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The parsed template for `language`.
    #[must_use]
    pub fn template(&self, language: LanguageCode) -> &Template {
        &self.texts[language.index()].template
    }

    /// Translator-facing description for `language`.
    #[must_use]
    pub fn description(&self, language: LanguageCode) -> &str {
        &self.texts[language.index()].description
    }

    /// Whether a translation is authored for `language`.
    #[must_use]
    pub fn has_translation(&self, language: LanguageCode) -> bool {
        !self.texts[language.index()].template.is_empty()
    }

    /// Render a [`LocalizedEntry`] from the supplied named arguments.
    ///
    /// The argument set must match the declared parameters exactly:
    /// missing, undeclared, or repeated names fail with
    /// [`RenderError::ArityMismatch`]. Zero-parameter accessors take an
    /// empty slice and return the stored literals.
    ///
    /// Rendering is a pure function of (accessor identity, argument
    /// values): identical inputs always produce an identical entry.
    pub fn render(&self, args: &[(&str, &str)]) -> Result<LocalizedEntry, RenderError> {
        let missing: Vec<String> = self
            .params
            .iter()
            .filter(|param| !args.iter().any(|&(name, _)| *param == name))
            .cloned()
            .collect();
        let unexpected: Vec<String> = args
            .iter()
            .enumerate()
            .filter(|&(i, &(name, _))| {
                let declared = self.params.iter().any(|param| param == name);
                let repeated = args[..i].iter().any(|&(earlier, _)| earlier == name);
                !declared || repeated
            })
            .map(|(_, &(name, _))| name.to_string())
            .collect();
        if !missing.is_empty() || !unexpected.is_empty() {
            return Err(RenderError::ArityMismatch {
                accessor: self.name.clone(),
                missing,
                unexpected,
            });
        }

        let mut entry = LocalizedEntry::new();
        for language in LanguageCode::ALL {
            entry = entry.with(language, self.texts[language.index()].template.render(args));
        }
        Ok(entry)
    }
}

/// Builder for [`EntryAccessor`].
///
/// Collects the declared parameters and per-language sources, then
/// parses and validates everything in [`build`](Self::build).
#[derive(Debug)]
pub struct EntryAccessorBuilder {
    name: String,
    params: Vec<String>,
    // (template source, description) per LanguageCode slot.
    sources: [(String, String); LanguageCode::COUNT],
}

impl EntryAccessorBuilder {
    /// Declare a parameter. Declaration order is preserved.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.push(name.into());
        self
    }

    /// Set the template and translator description for one language.
    ///
    /// Languages left unset keep the empty template, the
    /// missing-translation form.
    #[must_use]
    pub fn text(
        mut self,
        language: LanguageCode,
        template: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.sources[language.index()] = (template.into(), description.into());
        self
    }

    /// Parse every template against the declared parameter set.
    ///
    /// Fails on repeated parameter declarations and on any template
    /// defect (unknown, unclosed, or empty placeholders), attributing
    /// the failing language.
    pub fn build(self) -> Result<EntryAccessor, CatalogError> {
        for (i, param) in self.params.iter().enumerate() {
            if self.params[..i].contains(param) {
                return Err(CatalogError::DuplicateParam {
                    accessor: self.name,
                    param: param.clone(),
                });
            }
        }

        let mut texts = Vec::with_capacity(LanguageCode::COUNT);
        for language in LanguageCode::ALL {
            let (source, description) = &self.sources[language.index()];
            let template =
                Template::parse(source, &self.params).map_err(|error| CatalogError::Template {
                    accessor: self.name.clone(),
                    language,
                    error,
                })?;
            texts.push(LanguageText {
                template,
                description: description.clone(),
            });
        }

        Ok(EntryAccessor {
            name: self.name,
            params: self.params,
            texts,
        })
    }
}
