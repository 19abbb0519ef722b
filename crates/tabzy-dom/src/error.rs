//! Element tree error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("Empty selector")]
    EmptySelector,

    #[error("No element matches selector: {0}")]
    NoMatch(String),
}
