#![forbid(unsafe_code)]

//! Interchange table format for glotto localization catalogs.
//!
//! The generation pipeline emits a structured table keyed by
//! `(namespace, accessor, language)` with a sibling list of declared
//! parameter names per accessor. This crate is that table's serde
//! model, the loader that turns it into a
//! [`Catalog`](glotto_core::Catalog), and the emitter that reproduces
//! the table from a catalog so an alternative generator can
//! interoperate.

pub mod table;

pub use table::{
    CatalogTable, EntryTable, EntryText, NamespaceTable, TableError, build_catalog, emit_table,
};
