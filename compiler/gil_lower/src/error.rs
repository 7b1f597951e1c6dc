//! Lowering errors.
//!
//! Every [`LowerError`] is fatal for the compilation unit: it means the
//! frontend handed over a type this stage does not accept, and any
//! aggregate embedding that type would be wrong too. Callers propagate it
//! with `?` and abort; nothing retries or substitutes a fallback type.

use gil_types::{BasicKind, Tag};
use thiserror::Error;

/// Fatal error while lowering a source type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LowerError {
    /// A scalar kind with no entry in the basic-kind table.
    #[error("no target representation for basic kind `{kind}` (type `{ty}`)")]
    UnknownBasicKind { ty: String, kind: BasicKind },

    /// A structural kind the lowering dispatch does not handle.
    #[error("unimplemented type kind `{tag}` (type `{ty}`)")]
    UnsupportedKind { ty: String, tag: Tag },

    /// A named type whose underlying type was never set, or whose named
    /// chain loops back on itself.
    #[error("named type `{ty}` has no underlying type")]
    MissingUnderlying { ty: String },

    /// Layout was requested for a record that is still a placeholder.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Error while computing the layout of a target type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("type `{label}` has no body yet")]
    Incomplete { label: String },

    /// Size or an offset does not fit in a `u64`.
    #[error("size of type `{ty}` overflows")]
    Overflow { ty: String },
}

/// Error while building a [`LowerConfig`](crate::LowerConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid target triple `{triple}`: {reason}")]
    InvalidTriple { triple: String, reason: String },

    #[error("unsupported architecture `{arch}`")]
    UnsupportedArch { arch: String },
}
