//! Tab/panel pairs

use tabzy_dom::Element;

/// A (tab, panel) association, fixed at initialization.
///
/// `key` is the tab's fragment-style target (e.g. `#overview`); the panel is
/// the element whose id matches the target.
#[derive(Clone)]
pub struct Pair {
    pub key: String,
    pub tab: Element,
    pub panel: Element,
}

impl std::fmt::Debug for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pair").field("key", &self.key).finish()
    }
}

/// Handed to the change callback after a non-silent activation.
#[derive(Clone)]
pub struct ChangeEvent {
    pub key: String,
    pub tab: Element,
    pub panel: Element,
}

impl From<&Pair> for ChangeEvent {
    fn from(pair: &Pair) -> Self {
        Self {
            key: pair.key.clone(),
            tab: pair.tab.clone(),
            panel: pair.panel.clone(),
        }
    }
}

impl std::fmt::Debug for ChangeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeEvent").field("key", &self.key).finish()
    }
}

/// Input accepted by `resolve_tab` and `switch`.
#[derive(Debug, Clone)]
pub enum TabSelector<'a> {
    /// Fragment-style key, matched exactly against each pair's target.
    Key(&'a str),
    /// A tab element, matched by node identity against the discovered set.
    Node(&'a Element),
}

impl<'a> From<&'a str> for TabSelector<'a> {
    fn from(key: &'a str) -> Self {
        TabSelector::Key(key)
    }
}

impl<'a> From<&'a Element> for TabSelector<'a> {
    fn from(node: &'a Element) -> Self {
        TabSelector::Node(node)
    }
}
