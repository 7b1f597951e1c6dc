//! Unified type pool.
//!
//! Stores every source type as a compact `Item` (tag + data) addressed by
//! [`Idx`]. Variable-length payloads (fields, parameters, array lengths)
//! live in a flat `extra` array.
//!
//! Unnamed types are interned: constructing `[]int32` twice yields the same
//! `Idx`. Named types are never interned; each [`Pool::named`] call creates
//! a new identity, so two independently declared `Point` types stay
//! distinct even though they share a spelling.
//!
//! The pool is built by the frontend and is read-only for the lowering
//! stage, which only holds `&Pool`.

mod construct;
mod format;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{BasicKind, ChanDir, Idx, Tag};

pub use format::TypeDisplay;

/// Interned identifier for field, method and type names.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Sentinel marking an absent name in the extra array.
    const NONE_RAW: u32 = u32::MAX;

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A struct field as stored in the pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldDef {
    /// Field name; `None` for anonymous (blank or positional) fields.
    pub name: Option<Name>,
    /// Field type.
    pub ty: Idx,
}

impl FieldDef {
    /// A field without a name.
    pub const fn anonymous(ty: Idx) -> Self {
        Self { name: None, ty }
    }
}

/// An interface method as stored in the pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MethodDef {
    pub name: Name,
    /// A `Tag::Signature` type without receiver.
    pub signature: Idx,
}

/// A single type item in the pool.
#[derive(Copy, Clone, Debug)]
struct Item {
    tag: Tag,
    /// Tag-dependent: child index, extra index, or named-table index.
    data: u32,
}

/// Interning key. Simple items hash their data word, complex items hash
/// their full extra payload.
#[derive(Clone, Eq, PartialEq, Hash)]
enum ItemKey {
    Simple(Tag, u32),
    Complex(Tag, SmallVec<[u32; 8]>),
}

/// Per-identity data of a named type.
#[derive(Copy, Clone, Debug)]
struct NamedEntry {
    name: Name,
    /// `Idx::NONE` until the frontend calls [`Pool::set_underlying`].
    underlying: Idx,
}

/// The source type graph.
pub struct Pool {
    items: Vec<Item>,
    extra: Vec<u32>,
    intern_map: FxHashMap<ItemKey, Idx>,
    named: Vec<NamedEntry>,
    names: Vec<Box<str>>,
    name_map: FxHashMap<Box<str>, Name>,
    next_type_param: u32,
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl Pool {
    /// Create a pool with all basic kinds pre-interned at their fixed indices.
    pub fn new() -> Self {
        let mut items = Vec::with_capacity(Idx::FIRST_DYNAMIC as usize * 4);
        for kind in BasicKind::ALL {
            items.push(Item {
                tag: Tag::Basic,
                data: kind as u32,
            });
        }
        // Reserved slots up to FIRST_DYNAMIC read as the invalid kind.
        while items.len() < Idx::FIRST_DYNAMIC as usize {
            items.push(Item {
                tag: Tag::Basic,
                data: BasicKind::Invalid as u32,
            });
        }

        Self {
            items,
            extra: Vec::new(),
            intern_map: FxHashMap::default(),
            named: Vec::new(),
            names: Vec::new(),
            name_map: FxHashMap::default(),
            next_type_param: 0,
        }
    }

    /// Number of items (including reserved basic slots).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: basic kinds are pre-interned.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // === Interning ===

    #[allow(
        clippy::cast_possible_truncation,
        reason = "pool indices are u32 by design"
    )]
    fn push_item(&mut self, tag: Tag, data: u32) -> Idx {
        let idx = Idx::from_raw(self.items.len() as u32);
        self.items.push(Item { tag, data });
        idx
    }

    /// Intern a simple item whose payload fits in the data word.
    pub(crate) fn intern(&mut self, tag: Tag, data: u32) -> Idx {
        let key = ItemKey::Simple(tag, data);
        if let Some(&idx) = self.intern_map.get(&key) {
            return idx;
        }
        let idx = self.push_item(tag, data);
        self.intern_map.insert(key, idx);
        idx
    }

    /// Intern an item whose payload lives in the extra array.
    pub(crate) fn intern_complex(&mut self, tag: Tag, payload: &[u32]) -> Idx {
        debug_assert!(tag.uses_extra(), "{tag} does not use the extra array");
        let key = ItemKey::Complex(tag, SmallVec::from_slice(payload));
        if let Some(&idx) = self.intern_map.get(&key) {
            return idx;
        }
        let extra_idx = self.append_extra(payload);
        let idx = self.push_item(tag, extra_idx);
        self.intern_map.insert(key, idx);
        idx
    }

    /// Append a payload to the extra array without interning.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "pool layout uses u32 words"
    )]
    fn append_extra(&mut self, payload: &[u32]) -> u32 {
        let start = self.extra.len() as u32;
        self.extra.extend_from_slice(payload);
        start
    }

    /// Intern a name string.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "name indices are u32 by design"
    )]
    pub fn name(&mut self, s: &str) -> Name {
        if let Some(&name) = self.name_map.get(s) {
            return name;
        }
        let name = Name(self.names.len() as u32);
        self.names.push(s.into());
        self.name_map.insert(s.into(), name);
        name
    }

    /// Resolve a name to its string.
    pub fn name_str(&self, name: Name) -> &str {
        &self.names[name.0 as usize]
    }

    // === Raw Accessors ===

    /// The structural kind of a type.
    #[inline]
    pub fn tag(&self, idx: Idx) -> Tag {
        self.items[idx.raw() as usize].tag
    }

    #[inline]
    pub(crate) fn data(&self, idx: Idx) -> u32 {
        self.items[idx.raw() as usize].data
    }

    #[inline]
    fn extra_at(&self, idx: Idx, offset: usize) -> u32 {
        self.extra[self.data(idx) as usize + offset]
    }

    // === Basic ===

    /// The scalar kind of a `Tag::Basic` type.
    pub fn basic_kind(&self, idx: Idx) -> Option<BasicKind> {
        match self.tag(idx) {
            Tag::Basic => BasicKind::from_raw(self.data(idx)),
            _ => None,
        }
    }

    // === Simple Containers ===

    /// Element type of a slice.
    pub fn slice_elem(&self, idx: Idx) -> Idx {
        debug_assert_eq!(self.tag(idx), Tag::Slice);
        Idx::from_raw(self.data(idx))
    }

    /// Pointee type of a pointer.
    pub fn pointer_elem(&self, idx: Idx) -> Idx {
        debug_assert_eq!(self.tag(idx), Tag::Pointer);
        Idx::from_raw(self.data(idx))
    }

    // === Multi-Child Containers ===

    /// Length of a fixed-size array.
    pub fn array_len(&self, idx: Idx) -> u64 {
        debug_assert_eq!(self.tag(idx), Tag::Array);
        let lo = u64::from(self.extra_at(idx, 0));
        let hi = u64::from(self.extra_at(idx, 1));
        (hi << 32) | lo
    }

    /// Element type of a fixed-size array.
    pub fn array_elem(&self, idx: Idx) -> Idx {
        debug_assert_eq!(self.tag(idx), Tag::Array);
        Idx::from_raw(self.extra_at(idx, 2))
    }

    /// Key type of a map.
    pub fn map_key(&self, idx: Idx) -> Idx {
        debug_assert_eq!(self.tag(idx), Tag::Map);
        Idx::from_raw(self.extra_at(idx, 0))
    }

    /// Value type of a map.
    pub fn map_value(&self, idx: Idx) -> Idx {
        debug_assert_eq!(self.tag(idx), Tag::Map);
        Idx::from_raw(self.extra_at(idx, 1))
    }

    /// Direction of a channel.
    pub fn chan_dir(&self, idx: Idx) -> ChanDir {
        debug_assert_eq!(self.tag(idx), Tag::Channel);
        ChanDir::from_raw(self.extra_at(idx, 0))
    }

    /// Element type of a channel.
    pub fn chan_elem(&self, idx: Idx) -> Idx {
        debug_assert_eq!(self.tag(idx), Tag::Channel);
        Idx::from_raw(self.extra_at(idx, 1))
    }

    // === Complex Types ===

    /// Fields of a struct, in declaration order.
    pub fn struct_fields(&self, idx: Idx) -> Vec<FieldDef> {
        debug_assert_eq!(self.tag(idx), Tag::Struct);
        let count = self.extra_at(idx, 0) as usize;
        (0..count)
            .map(|i| {
                let raw_name = self.extra_at(idx, 1 + i * 2);
                FieldDef {
                    name: (raw_name != Name::NONE_RAW).then_some(Name(raw_name)),
                    ty: Idx::from_raw(self.extra_at(idx, 2 + i * 2)),
                }
            })
            .collect()
    }

    /// Elements of a tuple, in order.
    pub fn tuple_elems(&self, idx: Idx) -> Vec<Idx> {
        debug_assert_eq!(self.tag(idx), Tag::Tuple);
        let count = self.extra_at(idx, 0) as usize;
        (0..count)
            .map(|i| Idx::from_raw(self.extra_at(idx, 1 + i)))
            .collect()
    }

    /// Number of elements in a tuple.
    pub fn tuple_len(&self, idx: Idx) -> usize {
        debug_assert_eq!(self.tag(idx), Tag::Tuple);
        self.extra_at(idx, 0) as usize
    }

    /// Receiver type of a method signature.
    pub fn signature_recv(&self, idx: Idx) -> Option<Idx> {
        debug_assert_eq!(self.tag(idx), Tag::Signature);
        Idx::from_raw(self.extra_at(idx, 0)).to_option()
    }

    /// Whether the final parameter is variadic (`...T`, stored as `[]T`).
    pub fn signature_is_variadic(&self, idx: Idx) -> bool {
        debug_assert_eq!(self.tag(idx), Tag::Signature);
        self.extra_at(idx, 1) != 0
    }

    /// Parameter list of a signature, as a `Tag::Tuple` type.
    pub fn signature_params(&self, idx: Idx) -> Idx {
        debug_assert_eq!(self.tag(idx), Tag::Signature);
        Idx::from_raw(self.extra_at(idx, 2))
    }

    /// Result list of a signature, as a `Tag::Tuple` type.
    pub fn signature_results(&self, idx: Idx) -> Idx {
        debug_assert_eq!(self.tag(idx), Tag::Signature);
        Idx::from_raw(self.extra_at(idx, 3))
    }

    /// Methods of an interface, in declaration order.
    pub fn interface_methods(&self, idx: Idx) -> Vec<MethodDef> {
        debug_assert_eq!(self.tag(idx), Tag::Interface);
        let count = self.extra_at(idx, 0) as usize;
        (0..count)
            .map(|i| MethodDef {
                name: Name(self.extra_at(idx, 1 + i * 2)),
                signature: Idx::from_raw(self.extra_at(idx, 2 + i * 2)),
            })
            .collect()
    }

    /// Name of a type parameter.
    pub fn type_param_name(&self, idx: Idx) -> &str {
        debug_assert_eq!(self.tag(idx), Tag::TypeParam);
        self.name_str(Name(self.extra_at(idx, 0)))
    }

    // === Named Types ===

    /// Check if a type is a named type.
    #[inline]
    pub fn is_named(&self, idx: Idx) -> bool {
        self.tag(idx) == Tag::Named
    }

    fn named_entry(&self, idx: Idx) -> &NamedEntry {
        debug_assert_eq!(self.tag(idx), Tag::Named);
        &self.named[self.data(idx) as usize]
    }

    /// Declared name of a named type.
    pub fn named_name(&self, idx: Idx) -> &str {
        self.name_str(self.named_entry(idx).name)
    }

    /// The type a named type was declared with, one level deep.
    ///
    /// Returns `None` while the frontend has not yet set it.
    pub fn named_underlying(&self, idx: Idx) -> Option<Idx> {
        self.named_entry(idx).underlying.to_option()
    }

    /// Strip all named wrappers to reach the structural form.
    ///
    /// Returns `Idx::NONE` if a named type in the chain has no underlying
    /// type, or if the chain loops back on itself. Both are frontend
    /// contract violations; the walk is bounded by the number of named
    /// types so it always terminates.
    pub fn underlying(&self, idx: Idx) -> Idx {
        let mut current = idx;
        let mut steps = 0usize;
        while !current.is_none() && self.is_named(current) {
            if steps > self.named.len() {
                return Idx::NONE;
            }
            current = self.named_entry(current).underlying;
            steps += 1;
        }
        current
    }

    /// Tag of the fully underlying form, or `None` if it is unresolved.
    pub fn underlying_tag(&self, idx: Idx) -> Option<Tag> {
        let underlying = self.underlying(idx);
        (!underlying.is_none()).then(|| self.tag(underlying))
    }
}

#[cfg(test)]
mod tests;
