//! Eager lowering of top-level type declarations.
//!
//! Lowers each declared type in declaration order so that every named
//! record exists in the module before function bodies are compiled. The
//! lowerer caches each result, so later lookups of the same types are
//! cache hits.

use gil_types::Idx;

use crate::{LowerError, TypeLowerer};

/// Lower every declaration in `decls`, stopping at the first fatal error.
///
/// # Errors
///
/// Returns the first [`LowerError`]; declarations after it are not lowered.
pub fn lower_declarations(lowerer: &mut TypeLowerer<'_>, decls: &[Idx]) -> Result<(), LowerError> {
    for &idx in decls {
        tracing::debug!(
            ty = %lowerer.pool().display(idx),
            idx = ?idx,
            "lowering type declaration"
        );
        lowerer.lower(idx)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code")]
mod tests;
