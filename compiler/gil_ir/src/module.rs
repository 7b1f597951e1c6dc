//! Module-level table of named record definitions.
//!
//! Named records are declared first (an opaque placeholder with a stable
//! [`TypeDefId`]) and given a body later. Fields of the body may refer back
//! to the record being defined through `TargetType::Named`, which is what
//! makes recursive types representable without shared mutable aggregates.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::ty::{write_fields, write_type};
use crate::TargetType;

/// Handle to a named record definition in a [`Module`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDefId(u32);

impl TypeDefId {
    /// The raw index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A named record definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDef {
    label: String,
    /// `None` while the definition is a placeholder.
    body: Option<Vec<TargetType>>,
}

impl TypeDef {
    /// Globally unique label of this definition.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Record fields, or `None` while still a placeholder.
    pub fn body(&self) -> Option<&[TargetType]> {
        self.body.as_deref()
    }

    /// True while the body has not been set.
    pub fn is_opaque(&self) -> bool {
        self.body.is_none()
    }
}

/// The module a translation session emits type definitions into.
pub struct Module {
    name: String,
    type_defs: Vec<TypeDef>,
    labels: FxHashMap<String, TypeDefId>,
}

impl Module {
    /// Create an empty module.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_defs: Vec::new(),
            labels: FxHashMap::default(),
        }
    }

    /// Module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register an opaque placeholder definition under `label`.
    ///
    /// Labels must be unique within the module.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "definition table index fits u32"
    )]
    pub fn declare_type(&mut self, label: impl Into<String>) -> TypeDefId {
        let label = label.into();
        debug_assert!(
            !self.labels.contains_key(&label),
            "type label `{label}` registered twice"
        );
        let id = TypeDefId(self.type_defs.len() as u32);
        self.labels.insert(label.clone(), id);
        self.type_defs.push(TypeDef { label, body: None });
        id
    }

    /// Set the body of a placeholder. A definition's body is set exactly once.
    pub fn define_type(&mut self, id: TypeDefId, fields: Vec<TargetType>) {
        let def = &mut self.type_defs[id.0 as usize];
        debug_assert!(def.body.is_none(), "type `{}` defined twice", def.label);
        def.body = Some(fields);
    }

    /// Look up a definition.
    pub fn type_def(&self, id: TypeDefId) -> &TypeDef {
        &self.type_defs[id.0 as usize]
    }

    /// Find a definition by label.
    pub fn lookup_type(&self, label: &str) -> Option<TypeDefId> {
        self.labels.get(label).copied()
    }

    /// Number of registered definitions.
    pub fn num_type_defs(&self) -> usize {
        self.type_defs.len()
    }

    /// All definitions in registration order.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "definition table index fits u32"
    )]
    pub fn type_defs(&self) -> impl Iterator<Item = (TypeDefId, &TypeDef)> {
        self.type_defs
            .iter()
            .enumerate()
            .map(|(i, def)| (TypeDefId(i as u32), def))
    }

    /// Display adapter that renders named records by label.
    pub fn display_type<'a>(&'a self, ty: &'a TargetType) -> ModuleTypeDisplay<'a> {
        ModuleTypeDisplay { module: self, ty }
    }

    /// Human-readable listing of all definitions, one per line:
    /// `%label = type { ... }`. For debug output and test assertions.
    pub fn dump_type_defs(&self) -> String {
        self.type_defs()
            .map(|(id, _)| format!("{}\n", DefDisplay { module: self, id }))
            .collect()
    }

    fn label_of(&self, id: TypeDefId) -> String {
        self.type_def(id).label.clone()
    }
}

/// `Display` adapter returned by [`Module::display_type`].
pub struct ModuleTypeDisplay<'a> {
    module: &'a Module,
    ty: &'a TargetType,
}

impl fmt::Display for ModuleTypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_type(self.ty, f, &|id| self.module.label_of(id))
    }
}

struct DefDisplay<'a> {
    module: &'a Module,
    id: TypeDefId,
}

impl fmt::Display for DefDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let def = self.module.type_def(self.id);
        write!(f, "%{} = type ", def.label)?;
        match &def.body {
            Some(fields) => write_fields(fields, f, &|id| self.module.label_of(id)),
            None => f.write_str("opaque"),
        }
    }
}

#[cfg(test)]
mod tests;
