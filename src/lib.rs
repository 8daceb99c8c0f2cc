#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. storage::StorageKind)
    clippy::module_name_repetitions
)]

//! # Docedit
//!
//! A small document editor.
//!
//! Documents are built from a closed set of elements:
//! - Text, rendered verbatim
//! - Images, rendered as `[Image: <path>]`
//! - Line breaks and tabs
//!
//! ## Architecture
//!
//! - **Element**: one unit of content that knows how to render itself
//! - **Document**: ordered, append-only list of elements
//! - **Storage**: where a rendering is persisted (file, or a database stub)
//! - **Editor**: façade that builds, renders, caches and saves
//!
//! ## Modules
//!
//! - [`document`]: Elements and documents
//! - [`storage`]: Persistence backends
//! - [`editor`]: The editor façade and the extension-sniffing naive editor
//! - [`config`]: Saved command-line defaults
//! - [`script`]: Sample editing scripts run by the binary

pub mod config;
pub mod document;
pub mod editor;
pub mod script;
pub mod storage;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::document::{Document, Element};
    pub use crate::editor::{CachePolicy, Editor, NaiveEditor};
    pub use crate::storage::{DatabaseStorage, FileStorage, Storage, StorageError, StorageKind};
}
