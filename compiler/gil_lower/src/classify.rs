//! Classification predicates.
//!
//! Code generation asks these on demand to pick instruction shapes
//! (signed vs unsigned arithmetic, string concatenation, slice indexing).
//! Every predicate looks through named types to the underlying form.

use gil_types::{BasicInfo, BasicKind, Idx, Pool, Tag};

/// Pure queries over source types.
#[derive(Copy, Clone)]
pub struct Classifier<'pool> {
    pool: &'pool Pool,
}

impl<'pool> Classifier<'pool> {
    pub fn new(pool: &'pool Pool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &'pool Pool {
        self.pool
    }

    fn underlying_tag(&self, idx: Idx) -> Option<Tag> {
        self.pool.underlying_tag(idx)
    }

    fn basic_kind(&self, idx: Idx) -> Option<BasicKind> {
        let underlying = self.pool.underlying(idx);
        if underlying.is_none() {
            return None;
        }
        self.pool.basic_kind(underlying)
    }

    fn basic_info(&self, idx: Idx) -> BasicInfo {
        self.basic_kind(idx)
            .map_or(BasicInfo::empty(), BasicKind::info)
    }

    // === Scalar kinds ===

    /// `string`, including untyped string constants.
    pub fn is_string(&self, idx: Idx) -> bool {
        self.basic_info(idx).contains(BasicInfo::STRING)
    }

    pub fn is_float(&self, idx: Idx) -> bool {
        self.basic_info(idx).contains(BasicInfo::FLOAT)
    }

    pub fn is_complex(&self, idx: Idx) -> bool {
        self.basic_info(idx).contains(BasicInfo::COMPLEX)
    }

    pub fn is_integer(&self, idx: Idx) -> bool {
        self.basic_info(idx).contains(BasicInfo::INTEGER)
    }

    /// Numeric and not unsigned. Floats and complex numbers count as signed.
    pub fn is_signed(&self, idx: Idx) -> bool {
        let info = self.basic_info(idx);
        info.intersects(BasicInfo::NUMERIC) && !info.contains(BasicInfo::UNSIGNED)
    }

    pub fn is_boolean(&self, idx: Idx) -> bool {
        self.basic_info(idx).contains(BasicInfo::BOOLEAN)
    }

    pub fn is_unsafe_pointer(&self, idx: Idx) -> bool {
        self.basic_kind(idx) == Some(BasicKind::UnsafePointer)
    }

    // === Structural kinds ===

    /// A typed pointer or `unsafe.Pointer`.
    pub fn is_pointer(&self, idx: Idx) -> bool {
        self.underlying_tag(idx) == Some(Tag::Pointer) || self.is_unsafe_pointer(idx)
    }

    /// Pointer whose pointee is (underlying) an array.
    pub fn is_pointer_to_array(&self, idx: Idx) -> bool {
        if self.underlying_tag(idx) != Some(Tag::Pointer) {
            return false;
        }
        let pointee = self.pool.pointer_elem(self.pool.underlying(idx));
        self.is_array(pointee)
    }

    pub fn is_slice(&self, idx: Idx) -> bool {
        self.underlying_tag(idx) == Some(Tag::Slice)
    }

    pub fn is_interface(&self, idx: Idx) -> bool {
        self.underlying_tag(idx) == Some(Tag::Interface)
    }

    pub fn is_struct(&self, idx: Idx) -> bool {
        self.underlying_tag(idx) == Some(Tag::Struct)
    }

    pub fn is_array(&self, idx: Idx) -> bool {
        self.underlying_tag(idx) == Some(Tag::Array)
    }

    /// A function value (closure).
    pub fn is_function_value(&self, idx: Idx) -> bool {
        self.underlying_tag(idx) == Some(Tag::Signature)
    }

    pub fn is_channel(&self, idx: Idx) -> bool {
        self.underlying_tag(idx) == Some(Tag::Channel)
    }

    pub fn is_map(&self, idx: Idx) -> bool {
        self.underlying_tag(idx) == Some(Tag::Map)
    }
}
