//! Type-lowering engine.
//!
//! [`TypeLowerer`] maps source types (`Idx` into a [`Pool`]) to target IR
//! types, memoizing every result by source identity.
//!
//! # Recursive types
//!
//! Named struct and named function types become named records in the
//! [`Module`]. The record is registered as an opaque placeholder and cached
//! *before* its fields are lowered, so a field that refers back to the type
//! (directly, or through another named type) hits the cache and gets the
//! `Named` handle instead of recursing forever. Once the fields are known
//! the placeholder's body is set in place:
//!
//! ```text
//! type Node struct { val int32; next *Node }
//!
//! lower(Node)
//!   placeholder %Node.0, cache[Node] = %Node.0
//!   lower(int32)  -> i32
//!   lower(*Node)  -> lower(Node) = %Node.0 (cache hit) -> %Node.0*
//!   %Node.0 = type { i32, %Node.0* }
//! ```
//!
//! Named types over anything else lower to their underlying shape. A cycle
//! through such a type (`type P *P`) has no record to stop at; it is cut at
//! the back edge, which lowers to the opaque record.

use gil_ir::{FuncType, Module, TargetType, TypeDefId};
use gil_types::{Idx, Pool, Tag};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, error, trace};

use crate::basic::lower_basic;
use crate::layout;
use crate::registry::NamedTypeRegistry;
use crate::{LowerConfig, LowerError};

/// Which record a named composite lowers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Composite {
    Struct,
    Signature,
}

/// Translates source types to target types for one session.
///
/// Owns the translation cache and the label counter; borrows the source
/// pool and the module that receives named record definitions.
pub struct TypeLowerer<'a> {
    pool: &'a Pool,
    module: &'a mut Module,
    config: LowerConfig,
    registry: NamedTypeRegistry,
    cache: FxHashMap<Idx, TargetType>,
    /// Identities whose lowering failed; lowering them again replays the error.
    failed: FxHashMap<Idx, LowerError>,
    /// Named non-composite types currently being lowered.
    in_progress: FxHashSet<Idx>,
}

impl<'a> TypeLowerer<'a> {
    pub fn new(pool: &'a Pool, module: &'a mut Module, config: LowerConfig) -> Self {
        Self {
            pool,
            module,
            config,
            registry: NamedTypeRegistry::new(),
            cache: FxHashMap::default(),
            failed: FxHashMap::default(),
            in_progress: FxHashSet::default(),
        }
    }

    pub fn pool(&self) -> &'a Pool {
        self.pool
    }

    pub fn module(&self) -> &Module {
        self.module
    }

    pub fn config(&self) -> &LowerConfig {
        &self.config
    }

    /// Cached lowering of `idx`, without lowering it.
    ///
    /// `None` if `idx` has not been lowered or its lowering failed.
    pub fn cached(&self, idx: Idx) -> Option<&TargetType> {
        if self.failed.contains_key(&idx) {
            return None;
        }
        self.cache.get(&idx)
    }

    /// The record registered for a named composite, once it has been lowered.
    pub fn type_def_of(&self, idx: Idx) -> Option<TypeDefId> {
        self.cached(idx).and_then(TargetType::as_named)
    }

    /// Lower a source type.
    ///
    /// Repeated calls with the same identity return the same value, or the
    /// same error.
    ///
    /// # Errors
    ///
    /// Fatal for the compilation unit: an untyped basic kind, a type
    /// parameter, or a named type with no underlying type.
    pub fn lower(&mut self, idx: Idx) -> Result<TargetType, LowerError> {
        if let Some(err) = self.failed.get(&idx) {
            trace!(ty = %self.pool.display(idx), "replaying lowering failure");
            return Err(err.clone());
        }
        if let Some(ty) = self.cache.get(&idx) {
            trace!(ty = %self.pool.display(idx), "type cache hit");
            return Ok(ty.clone());
        }
        if self.in_progress.contains(&idx) {
            debug!(ty = %self.pool.display(idx), "cutting named type cycle");
            return Ok(TargetType::opaque());
        }

        let lowered = match self.named_composite(idx) {
            Some((underlying, kind)) => self.lower_named_composite(idx, underlying, kind),
            None if self.pool.is_named(idx) => {
                self.in_progress.insert(idx);
                let lowered = self.lower_structural(idx);
                self.in_progress.remove(&idx);
                lowered
            }
            None => self.lower_structural(idx),
        };

        match lowered {
            Ok(ty) => {
                self.cache.insert(idx, ty.clone());
                Ok(ty)
            }
            Err(err) => {
                self.failed.insert(idx, err.clone());
                Err(err)
            }
        }
    }

    /// The bare function type of a signature: return type, then the
    /// environment pointer, the receiver if any, and the parameters.
    ///
    /// # Errors
    ///
    /// Fails if `sig` is not a signature, or if lowering a parameter or
    /// result fails.
    pub fn signature_func(&mut self, sig: Idx) -> Result<FuncType, LowerError> {
        let underlying = self.pool.underlying(sig);
        if underlying.is_none() {
            return Err(self.missing_underlying(sig));
        }
        if self.pool.tag(underlying) != Tag::Signature {
            return Err(self.unsupported(underlying));
        }
        let sig = underlying;

        let results = self.pool.signature_results(sig);
        let ret = match self.pool.tuple_elems(results).as_slice() {
            [] => TargetType::Void,
            [single] => self.lower(*single)?,
            _ => self.lower(results)?,
        };

        let mut params = vec![TargetType::opaque_ptr()];
        if let Some(recv) = self.pool.signature_recv(sig) {
            params.push(self.lower(recv)?);
        }
        for param in self.pool.tuple_elems(self.pool.signature_params(sig)) {
            params.push(self.lower(param)?);
        }

        Ok(FuncType { ret, params })
    }

    /// Size in bytes of the lowered representation of `idx`.
    ///
    /// # Errors
    ///
    /// Propagates lowering errors.
    pub fn size_of(&mut self, idx: Idx) -> Result<u64, LowerError> {
        let ty = self.lower(idx)?;
        Ok(layout::size_of(&ty, self.module, self.config.word_size())?)
    }

    /// Alignment in bytes of the lowered representation of `idx`.
    ///
    /// # Errors
    ///
    /// Propagates lowering errors.
    pub fn align_of(&mut self, idx: Idx) -> Result<u64, LowerError> {
        let ty = self.lower(idx)?;
        Ok(layout::align_of(&ty, self.module, self.config.word_size())?)
    }

    // -- Named types --

    /// Underlying form of a named struct or named function type.
    fn named_composite(&self, idx: Idx) -> Option<(Idx, Composite)> {
        if !self.pool.is_named(idx) {
            return None;
        }
        let underlying = self.pool.underlying(idx);
        if underlying.is_none() {
            return None;
        }
        match self.pool.tag(underlying) {
            Tag::Struct => Some((underlying, Composite::Struct)),
            Tag::Signature => Some((underlying, Composite::Signature)),
            _ => None,
        }
    }

    fn lower_named_composite(
        &mut self,
        idx: Idx,
        underlying: Idx,
        kind: Composite,
    ) -> Result<TargetType, LowerError> {
        let id = self
            .registry
            .register(self.module, self.pool.named_name(idx));
        let named = TargetType::Named(id);
        debug!(
            ty = %self.pool.display(idx),
            label = self.module.type_def(id).label(),
            "lowering named record"
        );
        self.cache.insert(idx, named.clone());

        let fields = self.composite_fields(underlying, kind)?;
        self.module.define_type(id, fields);
        Ok(named)
    }

    // -- Structural dispatch --

    fn lower_structural(&mut self, idx: Idx) -> Result<TargetType, LowerError> {
        let underlying = self.pool.underlying(idx);
        if underlying.is_none() {
            return Err(self.missing_underlying(idx));
        }

        match self.pool.tag(underlying) {
            Tag::Basic => self.lower_scalar(underlying),
            Tag::Array => {
                let elem = self.lower(self.pool.array_elem(underlying))?;
                Ok(TargetType::array(self.pool.array_len(underlying), elem))
            }
            Tag::Channel | Tag::Map => Ok(TargetType::opaque_ptr()),
            Tag::Interface => Ok(TargetType::record(vec![
                TargetType::opaque_ptr(),
                TargetType::opaque_ptr(),
            ])),
            Tag::Pointer => Ok(TargetType::ptr(
                self.lower(self.pool.pointer_elem(underlying))?,
            )),
            Tag::Slice => {
                let elem = self.lower(self.pool.slice_elem(underlying))?;
                Ok(TargetType::record(vec![
                    TargetType::ptr(elem),
                    TargetType::i64(),
                    TargetType::i64(),
                ]))
            }
            Tag::Struct => Ok(TargetType::record(
                self.composite_fields(underlying, Composite::Struct)?,
            )),
            Tag::Signature => Ok(TargetType::record(
                self.composite_fields(underlying, Composite::Signature)?,
            )),
            Tag::Tuple => {
                let fields = self
                    .pool
                    .tuple_elems(underlying)
                    .into_iter()
                    .map(|elem| self.lower(elem))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(TargetType::record(fields))
            }
            Tag::Named | Tag::TypeParam => Err(self.unsupported(underlying)),
        }
    }

    fn lower_scalar(&self, idx: Idx) -> Result<TargetType, LowerError> {
        let Some(kind) = self.pool.basic_kind(idx) else {
            return Err(self.unsupported(idx));
        };
        lower_basic(kind, self.config.word_size()).ok_or_else(|| {
            self.fatal(LowerError::UnknownBasicKind {
                ty: self.pool.format_type(idx),
                kind,
            })
        })
    }

    /// Record fields of a struct, or of a function value
    /// (`{ func*, env* }`).
    fn composite_fields(
        &mut self,
        underlying: Idx,
        kind: Composite,
    ) -> Result<Vec<TargetType>, LowerError> {
        match kind {
            Composite::Struct => self
                .pool
                .struct_fields(underlying)
                .into_iter()
                .map(|field| self.lower(field.ty))
                .collect(),
            Composite::Signature => {
                let func = self.signature_func(underlying)?;
                Ok(vec![
                    TargetType::ptr(TargetType::Func(Box::new(func))),
                    TargetType::opaque_ptr(),
                ])
            }
        }
    }

    // -- Errors --

    fn unsupported(&self, idx: Idx) -> LowerError {
        self.fatal(LowerError::UnsupportedKind {
            ty: self.pool.format_type(idx),
            tag: self.pool.tag(idx),
        })
    }

    fn missing_underlying(&self, idx: Idx) -> LowerError {
        self.fatal(LowerError::MissingUnderlying {
            ty: self.pool.format_type(idx),
        })
    }

    fn fatal(&self, err: LowerError) -> LowerError {
        error!(module = self.module.name(), error = %err, "fatal type lowering error");
        err
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code")]
mod tests;
