//! Target type vocabulary for the gil backend.
//!
//! - [`TargetType`]: integers, floats, pointers, arrays, records, functions,
//!   and handles to named records
//! - [`Module`]: owns named record definitions, keyed by unique label
//!
//! Textual IR emission is not part of this crate; the `Display` impls exist
//! for diagnostics and debug tracing.

mod module;
mod ty;

pub use module::{Module, ModuleTypeDisplay, TypeDef, TypeDefId};
pub use ty::{FuncType, TargetType};
