//! Document model.
//!
//! This module handles:
//! - The closed set of element kinds (text, image, newline, tab)
//! - Ordered assembly of elements into a document
//! - Rendering a document to a single string

mod types;

pub use types::{Document, Element};
