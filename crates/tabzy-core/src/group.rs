//! Tab group
//!
//! Discovers tab/panel pairs under a container, tracks the active pair,
//! switches between pairs, and optionally mirrors the active selection into
//! the URL through the injected location driver.

use parking_lot::RwLock;
use std::sync::{Arc, Weak};

use tabzy_dom::{Document, Element, ListenerId};
use tabzy_location::{LocationDriver, UrlSlot};

use crate::config::Config;
use crate::error::TabError;
use crate::pair::{ChangeEvent, Pair, TabSelector};
use crate::phase::Phase;
use crate::Result;

/// Options for a single `switch` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchOptions {
    /// Suppress the change callback. Used for page-load restoration.
    pub silent: bool,
}

struct GroupInner {
    document: Document,
    location: Arc<dyn LocationDriver>,
    config: Config,
    /// Discovered at construction; immutable thereafter.
    pairs: Vec<Pair>,
    phase: RwLock<Phase>,
    active: RwLock<Option<usize>>,
    /// Bound click listeners, kept for detachment in `destroy`.
    listeners: RwLock<Vec<(Element, ListenerId)>>,
}

/// A set of link-like tabs controlling the visibility of panel elements.
///
/// Construction never fails visibly: if the container, tabs or panels cannot
/// be resolved, the failure is logged and the instance is inert, with no
/// listeners bound and every call a no-op. Cloning shares the same group.
pub struct TabGroup {
    inner: Arc<GroupInner>,
}

impl TabGroup {
    /// Mount a group under the container matched by `selector`.
    ///
    /// Failures are reported through the diagnostic log and produce an inert
    /// instance; use [`TabGroup::try_mount`] to observe them as errors.
    pub fn mount(
        document: Document,
        location: Arc<dyn LocationDriver>,
        selector: &str,
        config: Config,
    ) -> TabGroup {
        match Self::try_mount(
            document.clone(),
            Arc::clone(&location),
            selector,
            config.clone(),
        ) {
            Ok(group) => group,
            Err(e) => {
                tracing::error!(selector, error = %e, "Failed to mount tab group; instance is inert");
                Self::inert(document, location, config)
            }
        }
    }

    /// Fallible mount. Checks, in order: the container resolves, at least
    /// one fragment-targeted tab exists, and every tab's panel resolves.
    pub fn try_mount(
        document: Document,
        location: Arc<dyn LocationDriver>,
        selector: &str,
        config: Config,
    ) -> Result<TabGroup> {
        let container = document
            .select(selector)
            .map_err(|_| TabError::ContainerNotFound(selector.to_string()))?;

        let tabs: Vec<Element> = container
            .descendants()
            .into_iter()
            .filter(|el| {
                el.tag() == "a"
                    && el
                        .attribute("href")
                        .is_some_and(|href| href.starts_with('#'))
            })
            .collect();

        if tabs.is_empty() {
            return Err(TabError::NoTabs);
        }

        let mut pairs = Vec::with_capacity(tabs.len());
        for tab in tabs {
            let key = tab.attribute("href").unwrap_or_default();
            let id = key.strip_prefix('#').unwrap_or(&key);
            let panel = document
                .get_element_by_id(id)
                .ok_or_else(|| TabError::PanelNotFound(key.clone()))?;

            pairs.push(Pair {
                key,
                tab,
                panel,
            });
        }

        let inner = Arc::new(GroupInner {
            document,
            location,
            config,
            pairs,
            phase: RwLock::new(Phase::Active),
            active: RwLock::new(None),
            listeners: RwLock::new(Vec::new()),
        });

        let group = TabGroup { inner };
        group.bind_listeners();

        // Initial activation: restore from the URL when remembering,
        // otherwise fall back to the first discovered tab. Both silent.
        if !group.restore_from_url() {
            let first = group.inner.pairs[0].key.clone();
            group.switch_with(TabSelector::Key(&first), SwitchOptions { silent: true });
        }

        tracing::info!(
            selector,
            tabs = group.inner.pairs.len(),
            "Mounted tab group"
        );

        Ok(group)
    }

    fn inert(document: Document, location: Arc<dyn LocationDriver>, config: Config) -> TabGroup {
        TabGroup {
            inner: Arc::new(GroupInner {
                document,
                location,
                config,
                pairs: Vec::new(),
                phase: RwLock::new(Phase::Inert),
                active: RwLock::new(None),
                listeners: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Each tab switches to its own key on click. The closures hold a weak
    /// handle so a dropped or destroyed group cannot be revived by a stray
    /// dispatch.
    fn bind_listeners(&self) {
        let mut bound = Vec::with_capacity(self.inner.pairs.len());

        for pair in &self.inner.pairs {
            let weak: Weak<GroupInner> = Arc::downgrade(&self.inner);
            let key = pair.key.clone();

            let id = pair.tab.on_click(Arc::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let group = TabGroup { inner };
                    group.switch_with(TabSelector::Key(&key), SwitchOptions::default());
                }
            }));

            bound.push((pair.tab.clone(), id));
        }

        *self.inner.listeners.write() = bound;
    }

    /// Resolve an input to its discovered pair, or `None`.
    ///
    /// First match wins when two tabs share a target key.
    pub fn resolve_tab<'a>(&self, input: impl Into<TabSelector<'a>>) -> Option<Pair> {
        self.position(&input.into())
            .map(|idx| self.inner.pairs[idx].clone())
    }

    fn position(&self, selector: &TabSelector<'_>) -> Option<usize> {
        match selector {
            TabSelector::Key(key) => self.inner.pairs.iter().position(|p| p.key == *key),
            TabSelector::Node(el) => self.inner.pairs.iter().position(|p| p.tab.same_node(el)),
        }
    }

    /// Switch to a tab, firing the change callback.
    pub fn switch<'a>(&self, input: impl Into<TabSelector<'a>>) {
        self.switch_with(input, SwitchOptions::default());
    }

    /// Switch to a tab.
    ///
    /// Unresolvable input leaves the previously active pair untouched. The
    /// pass is a full reset-then-activate over every pair, so exactly one
    /// pair is active afterwards even if element state was corrupted
    /// externally.
    pub fn switch_with<'a>(&self, input: impl Into<TabSelector<'a>>, options: SwitchOptions) {
        let selector = input.into();

        let phase = *self.inner.phase.read();
        if !phase.is_usable() {
            tracing::error!(phase = %phase, "switch() called on unusable tab group");
            return;
        }

        let Some(index) = self.position(&selector) else {
            tracing::error!(input = ?selector, "switch(): cannot find tab for input");
            return;
        };
        let pair = self.inner.pairs[index].clone();

        // Deactivate everything before activating the target.
        for p in &self.inner.pairs {
            p.tab.remove_class(&self.inner.config.active_class_name);
            p.panel.set_hidden(true);
        }

        pair.tab.add_class(&self.inner.config.active_class_name);
        pair.panel.set_hidden(false);
        *self.inner.active.write() = Some(index);

        if self.inner.config.remember {
            self.write_url(&pair);
        }

        tracing::debug!(key = %pair.key, silent = options.silent, "Activated tab");

        // Invoked with no lock held; the callback may re-enter the group.
        if !options.silent {
            if let Some(on_change) = &self.inner.config.on_change {
                on_change(&ChangeEvent::from(&pair));
            }
        }
    }

    /// Detaches every bound listener, clears active markers and restores
    /// every panel to visible. The group is unusable afterwards.
    pub fn destroy(&self) {
        {
            let mut phase = self.inner.phase.write();
            if !phase.is_usable() {
                tracing::error!(phase = %phase, "destroy() called on unusable tab group");
                return;
            }
            *phase = Phase::Destroyed;
        }

        for (tab, id) in self.inner.listeners.write().drain(..) {
            tab.remove_listener(id);
        }

        for pair in &self.inner.pairs {
            pair.tab.remove_class(&self.inner.config.active_class_name);
            pair.panel.set_hidden(false);
        }

        *self.inner.active.write() = None;

        tracing::info!("Destroyed tab group");
    }

    // === URL synchronization ===

    fn slot(&self) -> UrlSlot {
        match &self.inner.config.param_key {
            Some(key) => UrlSlot::Param(key.clone()),
            None => UrlSlot::Fragment,
        }
    }

    /// Silently activate the remembered tab, if the URL names one we know.
    /// Returns false when restoration is disabled, absent or unresolvable,
    /// letting mount fall back to the first tab.
    fn restore_from_url(&self) -> bool {
        if !self.inner.config.remember {
            return false;
        }

        let url = self.inner.location.current();
        let Some(value) = self.slot().read(&url) else {
            return false;
        };

        let key = format!("#{value}");
        if self.position(&TabSelector::Key(&key)).is_none() {
            tracing::debug!(value = %value, "Remembered tab does not resolve; using first tab");
            return false;
        }

        self.switch_with(TabSelector::Key(&key), SwitchOptions { silent: true });
        true
    }

    fn write_url(&self, pair: &Pair) {
        let value = pair.key.strip_prefix('#').unwrap_or(&pair.key);
        let url = self.inner.location.current();
        let updated = self.slot().write(&url, value);
        self.inner.location.replace(updated);
    }

    // === Accessors ===

    pub fn phase(&self) -> Phase {
        *self.inner.phase.read()
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.inner.pairs
    }

    pub fn active_pair(&self) -> Option<Pair> {
        let index = (*self.inner.active.read())?;
        self.inner.pairs.get(index).cloned()
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn document(&self) -> &Document {
        &self.inner.document
    }
}

impl Clone for TabGroup {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for TabGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabGroup")
            .field("phase", &*self.inner.phase.read())
            .field("tabs", &self.inner.pairs.len())
            .field("active", &*self.inner.active.read())
            .finish()
    }
}
