//! Validation failures shared by the settings records.

use thiserror::Error;

use crate::domain::application::TIMEOUT_MINUTES_RANGE;
use crate::domain::project::MAX_BUTTONS;

/// Reasons a settings record is not acceptable for saving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("too many buttons: {0} (at most {} are allowed)", MAX_BUTTONS)]
    TooManyButtons(usize),
    #[error("button {index} has an empty label")]
    EmptyButtonLabel { index: usize },
    #[error("button {index} URL must start with http:// or https://, got {url:?}")]
    InvalidButtonUrl { index: usize, url: String },
    #[error(
        "timeout_minutes must be between {} and {}, got {0}",
        TIMEOUT_MINUTES_RANGE.start(),
        TIMEOUT_MINUTES_RANGE.end()
    )]
    TimeoutOutOfRange(u32),
}
