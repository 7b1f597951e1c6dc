//! Source type graph for the gil backend.
//!
//! This crate models the frontend's validated, fully monomorphized type
//! graph that the lowering stage in `gil_lower` consumes:
//!
//! - [`Idx`] is a type's identity
//! - [`Pool`] owns every type and answers structural queries
//! - [`Tag`] is the structural kind, [`BasicKind`] the scalar kind
//!
//! Unnamed types are hash-consed. Named types are not, and their underlying
//! type can be set after the named type is created, which is how
//! self-referential declarations are expressed.

mod basic;
mod idx;
mod pool;
mod tag;

pub use basic::{BasicInfo, BasicKind};
pub use idx::Idx;
pub use pool::{FieldDef, MethodDef, Name, Pool, TypeDisplay};
pub use tag::{ChanDir, Tag};
