//! Editors that assemble, render and persist documents.
//!
//! [`Editor`] works on typed [`crate::document::Element`]s and saves
//! through a pluggable [`crate::storage::Storage`]. [`NaiveEditor`] keeps
//! raw strings and writes straight to a file.

mod naive;
mod session;

pub use naive::NaiveEditor;
pub use session::{CachePolicy, Editor};
