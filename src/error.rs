//! Error types for crafting requests.
//!
//! The crafting engine itself never fails. Everything that can go wrong
//! happens around it (request shape, id resolution, catalog access) and is
//! represented by the `CraftError` enum.

use thiserror::Error;

/// Which kind of record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Material,
    Augment,
}

impl RecordKind {
    /// Plural noun used in client-facing messages.
    pub fn plural(self) -> &'static str {
        match self {
            RecordKind::Material => "materials",
            RecordKind::Augment => "augments",
        }
    }

    fn singular(self) -> &'static str {
        match self {
            RecordKind::Material => "material",
            RecordKind::Augment => "augment",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.singular())
    }
}

/// Errors that can occur while serving a crafting request.
///
/// # Examples
///
/// ```rust
/// use riflecraft::{CraftError, RecordKind};
///
/// let err = CraftError::InputShape { kind: RecordKind::Material, expected: 5, actual: 4 };
/// assert_eq!(err.to_string(), "Exactly 5 materials must be used.");
/// assert!(err.is_client_error());
/// ```
#[derive(Debug, Error)]
pub enum CraftError {
    /// The request carried the wrong number of materials or augments.
    #[error("Exactly {expected} {plural} must be used.", plural = .kind.plural())]
    InputShape {
        kind: RecordKind,
        expected: usize,
        actual: usize,
    },

    /// One or more requested ids did not resolve to a record.
    ///
    /// `requested` counts every id in the request, duplicates included.
    #[error("Some {kind} IDs are invalid.")]
    MissingData {
        kind: RecordKind,
        requested: usize,
        resolved: usize,
    },

    /// The request body could not be decoded for the route.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// The transport was asked for a route it does not serve.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// The catalog failed to answer a lookup.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Reading a catalog or request file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog document could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CraftError {
    /// Whether the error is the requester's fault rather than the service's.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CraftError::InputShape { .. }
                | CraftError::MissingData { .. }
                | CraftError::MalformedRequest(_)
                | CraftError::UnknownRoute(_)
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CraftError>;
