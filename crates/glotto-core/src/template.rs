//! Parsed message templates.
//!
//! A template is parsed once, when the catalog is constructed, into a
//! sequence of literal and placeholder segments. Placeholders are
//! validated against the accessor's declared parameter set at parse
//! time, so "does every `{name}` have a matching parameter" is a
//! construction-time check, never a per-call risk.
//!
//! # Invariants
//!
//! 1. **Verbatim substitution**: parameter values are opaque text,
//!    inserted as-is. No escaping, quoting, or recursive interpolation.
//!
//! 2. **Single pass**: a value containing `{name}` is never re-scanned.
//!
//! 3. **Determinism**: parsing and rendering are pure; identical inputs
//!    produce identical outputs.

use std::fmt;

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Verbatim text.
    Literal(String),
    /// A named substitution point, `{name}` in the source text.
    Placeholder(String),
}

/// Errors from template parsing.
///
/// All of these are catalog-construction defects: they surface when the
/// catalog is built and are never reported per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder names a parameter the accessor does not declare.
    UnknownPlaceholder {
        /// The undeclared name as it appears in the template.
        placeholder: String,
    },
    /// A `{` with no matching `}` before the end of the template.
    UnclosedPlaceholder,
    /// A `{}` with no name inside.
    EmptyPlaceholder,
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlaceholder { placeholder } => {
                write!(f, "placeholder '{{{placeholder}}}' does not match a declared parameter")
            }
            Self::UnclosedPlaceholder => write!(f, "unclosed '{{' in template"),
            Self::EmptyPlaceholder => write!(f, "empty '{{}}' placeholder in template"),
        }
    }
}

impl std::error::Error for TemplateError {}

/// A message template parsed into literal and placeholder segments.
///
/// The raw source text is preserved so a catalog can be serialized back
/// into the interchange table without loss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `raw`, accepting only placeholders named in `declared`.
    ///
    /// `{name}` opens a placeholder; a `}` outside a placeholder is
    /// literal text. The empty string parses to an empty template, the
    /// representation of a missing translation.
    pub fn parse<S: AsRef<str>>(raw: &str, declared: &[S]) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars();

        while let Some(ch) = chars.next() {
            if ch != '{' {
                literal.push(ch);
                continue;
            }
            let mut name = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '}' {
                    closed = true;
                    break;
                }
                name.push(c);
            }
            if !closed {
                return Err(TemplateError::UnclosedPlaceholder);
            }
            if name.is_empty() {
                return Err(TemplateError::EmptyPlaceholder);
            }
            if !declared.iter().any(|p| p.as_ref() == name.as_str()) {
                return Err(TemplateError::UnknownPlaceholder { placeholder: name });
            }
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Placeholder(name));
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: raw.to_string(),
            segments,
        })
    }

    /// Substitute every placeholder with its value from `args`.
    ///
    /// The accessor layer guarantees the arg set covers every declared
    /// parameter; a placeholder without a matching arg is emitted
    /// back as `{name}` rather than dropped.
    #[must_use]
    pub fn render(&self, args: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    if let Some(&(_, value)) = args.iter().find(|&&(n, _)| n == name) {
                        out.push_str(value);
                    } else {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
            }
        }
        out
    }

    /// Raw template text as authored.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parsed segments, in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Distinct placeholder names, in first-appearance order.
    #[must_use]
    pub fn params(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                if !seen.contains(&name.as_str()) {
                    seen.push(name);
                }
            }
        }
        seen
    }

    /// Whether the source text is empty, the missing-translation form.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

/// Single-pass `{name}` interpolation over a raw template string.
///
/// Unmatched or malformed tokens are left as-is. This is the infallible
/// path used by the `message_catalog!`-generated accessors, whose
/// function signatures already pin the argument set; dynamically built
/// catalogs go through [`Template::parse`] instead so malformed
/// templates are rejected up front.
#[must_use]
pub fn substitute(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            out.push(ch);
            continue;
        }
        let mut name = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            name.push(c);
        }
        if !closed {
            out.push('{');
            out.push_str(&name);
            break;
        }
        if let Some(&(_, value)) = args.iter().find(|&&(n, _)| n == name) {
            out.push_str(value);
        } else {
            out.push('{');
            out.push_str(&name);
            out.push('}');
        }
    }
    out
}
