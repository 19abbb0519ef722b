//! Location error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
