//! Location drivers
//!
//! A driver exposes the two operations the widget needs from the host's
//! location/history: read the current URL and replace it in place. Replace
//! semantics match `history.replaceState`: the current entry is rewritten
//! and no new history entry is created.

use parking_lot::RwLock;
use std::sync::Arc;
use url::Url;

use crate::Result;

pub trait LocationDriver: Send + Sync {
    /// The current URL.
    fn current(&self) -> Url;

    /// Replace the current URL in place.
    fn replace(&self, url: Url);
}

/// In-memory driver for tests and headless hosts.
///
/// Counts replacements so callers can assert that the widget never created
/// history entries, only rewrote the current one.
pub struct MemoryLocation {
    url: Arc<RwLock<Url>>,
    replacements: Arc<RwLock<usize>>,
}

impl MemoryLocation {
    pub fn new(initial: &str) -> Result<Self> {
        let url = Url::parse(initial)?;

        Ok(Self {
            url: Arc::new(RwLock::new(url)),
            replacements: Arc::new(RwLock::new(0)),
        })
    }

    /// How many times `replace` has been called.
    pub fn replace_count(&self) -> usize {
        *self.replacements.read()
    }
}

impl LocationDriver for MemoryLocation {
    fn current(&self) -> Url {
        self.url.read().clone()
    }

    fn replace(&self, url: Url) {
        tracing::debug!(url = %url, "Replacing location");
        *self.url.write() = url;
        *self.replacements.write() += 1;
    }
}

impl Clone for MemoryLocation {
    fn clone(&self) -> Self {
        Self {
            url: Arc::clone(&self.url),
            replacements: Arc::clone(&self.replacements),
        }
    }
}

impl std::fmt::Debug for MemoryLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryLocation")
            .field("url", &*self.url.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_in_place() {
        let location = MemoryLocation::new("https://example.com/page?x=1").unwrap();
        assert_eq!(location.replace_count(), 0);

        let mut url = location.current();
        url.set_fragment(Some("b"));
        location.replace(url);

        assert_eq!(location.current().as_str(), "https://example.com/page?x=1#b");
        assert_eq!(location.replace_count(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let location = MemoryLocation::new("https://example.com/").unwrap();
        let alias = location.clone();

        let mut url = location.current();
        url.set_fragment(Some("shared"));
        alias.replace(url);

        assert_eq!(location.current().fragment(), Some("shared"));
        assert_eq!(location.replace_count(), 1);
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(MemoryLocation::new("not a url").is_err());
    }
}
