//! Shared error types for the services crate.

use thiserror::Error;

use storage::StoreError;

use crate::sessions::Action;

/// Errors emitted by the session controller and language overview.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot {action} while {state}")]
    NotReady { action: Action, state: &'static str },
    #[error("no language selected")]
    NoLanguage,
    #[error(transparent)]
    Store(#[from] StoreError),
}
