//! Core document types.

use std::borrow::Cow;
use std::fmt;

/// A single unit of document content.
///
/// The set of kinds is closed: what an element renders as is decided by
/// its variant, never by looking at the text it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Plain text, rendered verbatim.
    Text(String),
    /// Reference to an image, rendered as `[Image: <path>]`.
    Image(String),
    /// A single line break.
    NewLine,
    /// A single horizontal tab.
    TabSpace,
}

impl Element {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn image(path: impl Into<String>) -> Self {
        Self::Image(path.into())
    }

    /// Textual rendering of this element.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Self::Text(content) => Cow::Borrowed(content),
            Self::Image(path) => Cow::Owned(format!("[Image: {path}]")),
            Self::NewLine => Cow::Borrowed("\n"),
            Self::TabSpace => Cow::Borrowed("\t"),
        }
    }

    /// Short name of the element kind, used in diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Image(_) => "image",
            Self::NewLine => "newline",
            Self::TabSpace => "tab",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// An ordered, append-only sequence of elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// Create an empty document.
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Append an element at the end of the document.
    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Concatenate the rendering of every element in insertion order.
    ///
    /// No separators are inserted; line breaks and tabs only appear where
    /// the caller added `NewLine` or `TabSpace` elements.
    pub fn render(&self) -> String {
        self.elements.iter().fold(String::new(), |mut out, element| {
            out.push_str(&element.render());
            out
        })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }
}

impl FromIterator<Element> for Document {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl Extend<Element> for Document {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_renders_verbatim() {
        assert_eq!(Element::text("hello").render(), "hello");
    }

    #[test]
    fn test_image_renders_bracketed() {
        assert_eq!(Element::image("x.jpg").render(), "[Image: x.jpg]");
    }

    #[test]
    fn test_image_ignores_extension() {
        assert_eq!(Element::image("diagram").render(), "[Image: diagram]");
        assert_eq!(Element::image("notes.txt").render(), "[Image: notes.txt]");
    }

    #[test]
    fn test_text_that_looks_like_image_stays_text() {
        assert_eq!(Element::text("x.jpg").render(), "x.jpg");
        assert_eq!(Element::text("x.png").render(), "x.png");
    }

    #[test]
    fn test_newline_and_tab_are_single_characters() {
        assert_eq!(Element::NewLine.render(), "\n");
        assert_eq!(Element::TabSpace.render(), "\t");
    }

    #[test]
    fn test_display_matches_render() {
        let element = Element::image("a b.png");
        assert_eq!(element.to_string(), "[Image: a b.png]");
    }

    #[test]
    fn test_empty_document_renders_empty_string() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.render(), "");
    }

    #[test]
    fn test_render_preserves_insertion_order_without_separators() {
        let mut doc = Document::new();
        doc.add_element(Element::text("b"));
        doc.add_element(Element::text("a"));
        doc.add_element(Element::TabSpace);
        doc.add_element(Element::image("c.png"));
        assert_eq!(doc.render(), "ba\t[Image: c.png]");
        assert_eq!(doc.len(), 4);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let doc: Document = vec![Element::NewLine, Element::NewLine].into_iter().collect();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.render(), "\n\n");
    }

    #[test]
    fn test_render_is_idempotent() {
        let doc: Document = [Element::text("x"), Element::NewLine, Element::image("y")]
            .into_iter()
            .collect();
        let first = doc.render();
        let second = doc.render();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extend_appends_after_existing_elements() {
        let mut doc: Document = std::iter::once(Element::text("head")).collect();
        doc.extend([Element::NewLine, Element::text("tail")]);
        let kinds: Vec<_> = doc.iter().map(Element::kind).collect();
        assert_eq!(kinds, ["text", "newline", "text"]);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn element_strategy() -> impl Strategy<Value = Element> {
            prop_oneof![
                ".*".prop_map(Element::Text),
                ".*".prop_map(Element::Image),
                Just(Element::NewLine),
                Just(Element::TabSpace),
            ]
        }

        proptest! {
            #[test]
            fn render_is_concatenation_of_elements(
                elements in prop::collection::vec(element_strategy(), 0..32),
            ) {
                let mut doc = Document::new();
                for element in &elements {
                    doc.add_element(element.clone());
                }

                let expected: String = elements.iter().map(|e| e.render().into_owned()).collect();
                prop_assert_eq!(doc.render(), expected);
            }

            #[test]
            fn render_twice_is_identical(
                elements in prop::collection::vec(element_strategy(), 0..32),
            ) {
                let doc: Document = elements.into_iter().collect();
                prop_assert_eq!(doc.render(), doc.render());
            }
        }
    }
}
