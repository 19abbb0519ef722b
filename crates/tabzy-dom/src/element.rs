//! Element handles
//!
//! Elements are shared handles over interior state, so the host and the
//! widget can hold the same node. Identity is handle identity, not value
//! equality.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Identifies a registered click listener for later removal.
pub type ListenerId = u64;

/// Callback invoked on click dispatch.
pub type ClickListener = Arc<dyn Fn() + Send + Sync>;

struct ElementInner {
    tag: String,
    id: Option<String>,
    attributes: HashMap<String, String>,
    classes: Vec<String>,
    hidden: bool,
    text: String,
    children: Vec<Element>,
    listeners: Vec<(ListenerId, ClickListener)>,
    next_listener_id: ListenerId,
}

/// A node in the element tree.
///
/// Cloning an `Element` clones the handle, not the node; all clones observe
/// the same state. Use [`Element::same_node`] for identity checks.
pub struct Element {
    inner: Arc<RwLock<ElementInner>>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ElementInner {
                tag: tag.into(),
                id: None,
                attributes: HashMap::new(),
                classes: Vec::new(),
                hidden: false,
                text: String::new(),
                children: Vec::new(),
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    // === Builders ===

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.inner.write().id = Some(id.into());
        self
    }

    pub fn with_attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner.write().attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_class(self, name: impl Into<String>) -> Self {
        let class = name.into();
        {
            let mut inner = self.inner.write();
            if !inner.classes.contains(&class) {
                inner.classes.push(class);
            }
        }
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.inner.write().text = text.into();
        self
    }

    pub fn with_child(self, child: Element) -> Self {
        self.inner.write().children.push(child);
        self
    }

    // === Accessors ===

    pub fn tag(&self) -> String {
        self.inner.read().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.inner.read().id.clone()
    }

    pub fn text(&self) -> String {
        self.inner.read().text.clone()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner.read().attributes.get(name).cloned()
    }

    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.write().attributes.insert(name.into(), value.into());
    }

    // === Class list ===

    pub fn add_class(&self, name: &str) {
        let mut inner = self.inner.write();
        if !inner.classes.iter().any(|c| c == name) {
            inner.classes.push(name.to_string());
        }
    }

    pub fn remove_class(&self, name: &str) {
        self.inner.write().classes.retain(|c| c != name);
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.inner.read().classes.iter().any(|c| c == name)
    }

    // === Visibility ===

    pub fn hidden(&self) -> bool {
        self.inner.read().hidden
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.inner.write().hidden = hidden;
    }

    // === Tree ===

    pub fn append_child(&self, child: Element) {
        self.inner.write().children.push(child);
    }

    pub fn children(&self) -> Vec<Element> {
        self.inner.read().children.clone()
    }

    /// All descendants in document order (depth-first), excluding `self`.
    pub fn descendants(&self) -> Vec<Element> {
        let mut out = Vec::new();
        for child in self.children() {
            out.push(child.clone());
            out.extend(child.descendants());
        }
        out
    }

    /// Handle identity: do both handles refer to the same node?
    pub fn same_node(&self, other: &Element) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // === Events ===

    /// Register a click listener and return its id for later removal.
    pub fn on_click(&self, listener: ClickListener) -> ListenerId {
        let mut inner = self.inner.write();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, listener));
        id
    }

    /// Remove a previously registered listener. Returns false if unknown.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut inner = self.inner.write();
        let before = inner.listeners.len();
        inner.listeners.retain(|(lid, _)| *lid != id);
        inner.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.inner.read().listeners.len()
    }

    /// Dispatch a click to every registered listener, synchronously.
    ///
    /// Listeners are snapshotted before invocation so they run with no lock
    /// held on this element and may freely mutate it or detach themselves.
    pub fn click(&self) {
        let (tag, listeners) = {
            let inner = self.inner.read();
            let listeners: Vec<ClickListener> =
                inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (inner.tag.clone(), listeners)
        };

        tracing::debug!(tag = %tag, listeners = listeners.len(), "Dispatching click");

        for listener in listeners {
            listener();
        }
    }
}

impl Clone for Element {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("Element")
            .field("tag", &inner.tag)
            .field("id", &inner.id)
            .field("classes", &inner.classes)
            .field("hidden", &inner.hidden)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_class_list() {
        let el = Element::new("a").with_class("tab");

        assert!(el.has_class("tab"));

        // Adding twice keeps a single entry
        el.add_class("active");
        el.add_class("active");
        el.remove_class("active");
        assert!(!el.has_class("active"));
        assert!(el.has_class("tab"));
    }

    #[test]
    fn test_hidden_flag() {
        let el = Element::new("div");
        assert!(!el.hidden());

        el.set_hidden(true);
        assert!(el.hidden());
    }

    #[test]
    fn test_descendants_document_order() {
        let leaf = Element::new("a").with_id("leaf");
        let nested = Element::new("nav").with_child(leaf);
        let sibling = Element::new("div").with_id("sibling");
        let root = Element::new("section").with_child(nested).with_child(sibling);

        let order: Vec<String> = root.descendants().iter().map(|e| e.tag()).collect();
        assert_eq!(order, vec!["nav", "a", "div"]);
    }

    #[test]
    fn test_handle_identity() {
        let el = Element::new("a");
        let alias = el.clone();
        let other = Element::new("a");

        assert!(el.same_node(&alias));
        assert!(!el.same_node(&other));
    }

    #[test]
    fn test_click_dispatch_and_removal() {
        let el = Element::new("a");
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        let id = el.on_click(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        el.click();
        el.click();
        assert_eq!(hits.load(Ordering::SeqCst), 2);

        assert!(el.remove_listener(id));
        assert!(!el.remove_listener(id));

        el.click();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(el.listener_count(), 0);
    }

    #[test]
    fn test_listener_may_mutate_element() {
        // A listener touching its own element must not deadlock
        let el = Element::new("a");
        let alias = el.clone();

        el.on_click(Arc::new(move || {
            alias.add_class("clicked");
        }));

        el.click();
        assert!(el.has_class("clicked"));
    }
}
