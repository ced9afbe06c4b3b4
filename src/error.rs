//! Error taxonomy for tree operations.

use thiserror::Error;

use crate::path::{FocusPath, Selector};

/// Everything that can go wrong while building or navigating the tab tree.
///
/// Structural errors abort the failing call without mutating the addressed
/// node; interior groups already created along a valid prefix stay in
/// place.
#[derive(Debug, Error)]
pub enum TabError {
    /// Adding a child whose label already exists under the same parent.
    /// Labels are never silently overwritten, that would drop a registered
    /// builder.
    #[error("duplicate tab label '{label}' under '{at}'")]
    DuplicateLabel { label: String, at: String },

    /// A selector that names no child of the addressed group.
    #[error("no child {selector} under '{at}'")]
    NoSuchChild { selector: Selector, at: String },

    /// A path that is too short, too long, or descends through a leaf.
    #[error("invalid path {path}: {reason}")]
    InvalidPath { path: String, reason: String },

    /// Inserting a panel beside nested groups, or the other way round.
    #[error("cannot mix panels and groups under '{at}'")]
    MixedChildren { at: String },

    /// A panel builder returned an error. The panel stays realized with
    /// whatever it drew before failing and the builder will not re-run.
    #[error("builder for panel at {path} failed")]
    Builder {
        path: FocusPath,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, TabError>;

pub(crate) fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> TabError {
    TabError::InvalidPath {
        path: path.into(),
        reason: reason.into(),
    }
}
