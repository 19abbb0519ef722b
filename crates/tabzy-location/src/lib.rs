//! Tabzy location layer
//!
//! The widget never touches a real browser location. It reads and writes
//! URLs through an injected [`LocationDriver`], so tests and headless hosts
//! get deterministic history behavior. [`UrlSlot`] decides where in the URL
//! the active tab identifier lives.

mod driver;
mod error;
mod slot;

pub use driver::{LocationDriver, MemoryLocation};
pub use error::LocationError;
pub use slot::UrlSlot;

pub type Result<T> = std::result::Result<T, LocationError>;
