//! Tabzy element tree
//!
//! A minimal, headless stand-in for the DOM subtree a tab widget works
//! against: elements with ids, attributes, class lists and a hidden flag,
//! plus synchronous click dispatch with detachable listeners. Hosts build
//! the tree, the widget mutates it.

mod document;
mod element;
mod error;

pub use document::Document;
pub use element::{ClickListener, Element, ListenerId};
pub use error::DomError;

pub type Result<T> = std::result::Result<T, DomError>;
