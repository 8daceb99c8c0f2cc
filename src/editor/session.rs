use crate::document::{Document, Element};
use crate::storage::{Storage, StorageError};

/// How the editor treats its render cache when the document changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// The first non-empty rendering is kept for the editor's lifetime.
    /// Elements added afterwards do not show up in later renders.
    #[default]
    Snapshot,
    /// Every mutation drops the cached rendering.
    Invalidate,
}

/// Façade over a document and the storage it is saved to.
///
/// Clients add content through the editor, render it and save it without
/// wiring elements, documents and storage together themselves.
pub struct Editor<S = Box<dyn Storage>> {
    document: Document,
    storage: S,
    rendered: Option<String>,
    cache_policy: CachePolicy,
}

impl<S: Storage> Editor<S> {
    /// Create an editor over `document`, saving through `storage`.
    pub const fn new(document: Document, storage: S) -> Self {
        Self {
            document,
            storage,
            rendered: None,
            cache_policy: CachePolicy::Snapshot,
        }
    }

    #[must_use]
    pub fn with_cache_policy(mut self, policy: CachePolicy) -> Self {
        self.cache_policy = policy;
        self
    }

    pub const fn cache_policy(&self) -> CachePolicy {
        self.cache_policy
    }

    pub const fn document(&self) -> &Document {
        &self.document
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Whether a rendering is currently cached.
    pub const fn is_cached(&self) -> bool {
        self.rendered.is_some()
    }

    pub fn add_text(&mut self, text: impl Into<String>) {
        self.push(Element::Text(text.into()));
    }

    pub fn add_image(&mut self, path: impl Into<String>) {
        self.push(Element::Image(path.into()));
    }

    pub fn add_new_line(&mut self) {
        self.push(Element::NewLine);
    }

    pub fn add_tab_space(&mut self) {
        self.push(Element::TabSpace);
    }

    fn push(&mut self, element: Element) {
        tracing::debug!(kind = element.kind(), "append element");
        self.document.add_element(element);
        if self.cache_policy == CachePolicy::Invalidate && self.rendered.take().is_some() {
            tracing::debug!("render cache invalidated");
        }
    }

    /// Render the document, reusing the cached rendering when there is one.
    ///
    /// An empty rendering is never cached, so an editor over an empty
    /// document keeps re-rendering until content appears.
    pub fn render_document(&mut self) -> &str {
        if self.rendered.is_none() {
            let rendered = self.document.render();
            tracing::debug!(
                elements = self.document.len(),
                bytes = rendered.len(),
                "render cache miss"
            );
            if rendered.is_empty() {
                return "";
            }
            self.rendered = Some(rendered);
        } else {
            tracing::debug!("render cache hit");
        }
        self.rendered.as_deref().unwrap_or_default()
    }

    /// Render the document and hand it to storage.
    ///
    /// # Errors
    ///
    /// Returns whatever the storage backend reports. The document and the
    /// render cache are left untouched on failure.
    pub fn save_document(&mut self) -> Result<(), StorageError> {
        let rendered = self.render_document().to_owned();
        self.storage.save(&rendered).inspect_err(|err| {
            tracing::warn!(sink = %self.storage.describe(), error = %err, "save failed");
        })
    }
}

impl<S: Storage> std::fmt::Debug for Editor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("document", &self.document)
            .field("storage", &self.storage.describe())
            .field("rendered", &self.rendered)
            .field("cache_policy", &self.cache_policy)
            .finish()
    }
}
