//! Document queries
//!
//! A `Document` wraps the root of an element tree and answers the lookups
//! the widget needs: id lookup and the simple selector forms (`#id`,
//! `.class`, tag name). First match in document order wins.

use crate::element::Element;
use crate::error::DomError;
use crate::Result;

pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> Element {
        self.root.clone()
    }

    /// Root plus all descendants, in document order.
    fn all_elements(&self) -> Vec<Element> {
        let mut out = vec![self.root.clone()];
        out.extend(self.root.descendants());
        out
    }

    /// First element whose id matches, in document order.
    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.all_elements()
            .into_iter()
            .find(|el| el.id().as_deref() == Some(id))
    }

    /// Resolve a selector to the first matching element.
    ///
    /// Supports `#id`, `.class` and bare tag names.
    pub fn select(&self, selector: &str) -> Result<Element> {
        if selector.is_empty() {
            return Err(DomError::EmptySelector);
        }

        let found = if let Some(id) = selector.strip_prefix('#') {
            self.get_element_by_id(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            self.all_elements()
                .into_iter()
                .find(|el| el.has_class(class))
        } else {
            self.all_elements()
                .into_iter()
                .find(|el| el.tag() == selector)
        };

        found.ok_or_else(|| DomError::NoMatch(selector.to_string()))
    }
}

impl Clone for Document {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document").field("root", &self.root).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        let root = Element::new("body")
            .with_child(
                Element::new("nav")
                    .with_id("menu")
                    .with_class("tabs")
                    .with_child(Element::new("a").with_id("first"))
                    .with_child(Element::new("a").with_id("second")),
            )
            .with_child(Element::new("div").with_id("first"));

        Document::new(root)
    }

    #[test]
    fn test_get_element_by_id_first_match_wins() {
        let doc = sample_document();

        // Both an <a> and a <div> carry id "first"; the anchor comes first
        let el = doc.get_element_by_id("first").unwrap();
        assert_eq!(el.tag(), "a");
    }

    #[test]
    fn test_select_by_id_class_and_tag() {
        let doc = sample_document();

        assert_eq!(doc.select("#menu").unwrap().tag(), "nav");
        assert_eq!(doc.select(".tabs").unwrap().tag(), "nav");
        assert_eq!(doc.select("div").unwrap().id(), Some("first".to_string()));
    }

    #[test]
    fn test_select_failures() {
        let doc = sample_document();

        assert!(matches!(doc.select(""), Err(DomError::EmptySelector)));
        assert!(matches!(doc.select("#missing"), Err(DomError::NoMatch(_))));
    }
}
