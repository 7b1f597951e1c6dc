//! Named-type registry.
//!
//! Issues deterministic unique labels (`"{display}.{n}"`) for named
//! composite types and registers their placeholder definitions with the
//! module. The counter is scoped to one lowering session, so two sessions
//! over the same input produce the same labels.

use gil_ir::{Module, TypeDefId};

/// Label generator and definition registrar for named composites.
#[derive(Debug, Default)]
pub struct NamedTypeRegistry {
    next: u32,
}

impl NamedTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next unique label for a type displayed as `display`.
    ///
    /// The numeric suffix is unique per session, so two distinct types
    /// sharing a display name never share a label.
    pub fn unique_label(&mut self, display: &str) -> String {
        let label = format!("{display}.{}", self.next);
        self.next += 1;
        label
    }

    /// Register an opaque placeholder for `display` under a fresh label.
    pub fn register(&mut self, module: &mut Module, display: &str) -> TypeDefId {
        let label = self.unique_label(display);
        tracing::debug!(label = %label, "registering named type placeholder");
        module.declare_type(label)
    }

    /// Number of labels issued so far.
    pub fn issued(&self) -> u32 {
        self.next
    }
}
