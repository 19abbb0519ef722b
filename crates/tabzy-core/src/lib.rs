//! Tabzy
//!
//! A headless tab/panel widget: link-like tab elements control the
//! visibility of panel elements, with optional URL synchronization so the
//! active tab survives a reload. The element tree and the location/history
//! capability are injected, keeping every state transition deterministic.

mod config;
mod error;
mod group;
mod pair;
mod phase;

pub use config::{ChangeHandler, Config};
pub use error::TabError;
pub use group::{SwitchOptions, TabGroup};
pub use pair::{ChangeEvent, Pair, TabSelector};
pub use phase::Phase;

// Re-export the injected collaborators
pub use tabzy_dom::{ClickListener, Document, DomError, Element, ListenerId};
pub use tabzy_location::{LocationDriver, LocationError, MemoryLocation, UrlSlot};

pub type Result<T> = std::result::Result<T, TabError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
