//! Tab group error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Container element not found for selector: {0}")]
    ContainerNotFound(String),

    #[error("No tabs found within the container")]
    NoTabs,

    #[error("Panel not found for tab target: {0}")]
    PanelNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
