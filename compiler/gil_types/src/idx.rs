//! Type index handle.
//!
//! `Idx` is the identity of a source type. All types live in a [`Pool`]
//! and are referenced by their 32-bit index.
//!
//! - Basic kinds have fixed indices (0-25), see [`BasicKind`]
//! - Unnamed types are hash-consed, so structurally equal unnamed types
//!   share one index
//! - Every named type gets its own index, even when two share a spelling
//!
//! [`Pool`]: crate::Pool

use std::fmt;

use crate::BasicKind;

/// A 32-bit index into the type pool.
///
/// Types are compared by index equality (O(1)), not structural comparison.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Basic Types (indices 0-25) ===
    // Pre-interned at pool creation; index == BasicKind discriminant.

    pub const INVALID: Self = Self(BasicKind::Invalid as u32);
    pub const BOOL: Self = Self(BasicKind::Bool as u32);
    pub const INT: Self = Self(BasicKind::Int as u32);
    pub const INT8: Self = Self(BasicKind::Int8 as u32);
    pub const INT16: Self = Self(BasicKind::Int16 as u32);
    pub const INT32: Self = Self(BasicKind::Int32 as u32);
    pub const INT64: Self = Self(BasicKind::Int64 as u32);
    pub const UINT: Self = Self(BasicKind::Uint as u32);
    pub const UINT8: Self = Self(BasicKind::Uint8 as u32);
    pub const UINT16: Self = Self(BasicKind::Uint16 as u32);
    pub const UINT32: Self = Self(BasicKind::Uint32 as u32);
    pub const UINT64: Self = Self(BasicKind::Uint64 as u32);
    pub const UINTPTR: Self = Self(BasicKind::Uintptr as u32);
    pub const FLOAT32: Self = Self(BasicKind::Float32 as u32);
    pub const FLOAT64: Self = Self(BasicKind::Float64 as u32);
    pub const COMPLEX64: Self = Self(BasicKind::Complex64 as u32);
    pub const COMPLEX128: Self = Self(BasicKind::Complex128 as u32);
    pub const STRING: Self = Self(BasicKind::String as u32);
    pub const UNSAFE_POINTER: Self = Self(BasicKind::UnsafePointer as u32);
    pub const UNTYPED_BOOL: Self = Self(BasicKind::UntypedBool as u32);
    pub const UNTYPED_INT: Self = Self(BasicKind::UntypedInt as u32);
    pub const UNTYPED_RUNE: Self = Self(BasicKind::UntypedRune as u32);
    pub const UNTYPED_FLOAT: Self = Self(BasicKind::UntypedFloat as u32);
    pub const UNTYPED_COMPLEX: Self = Self(BasicKind::UntypedComplex as u32);
    pub const UNTYPED_STRING: Self = Self(BasicKind::UntypedString as u32);
    pub const UNTYPED_NIL: Self = Self(BasicKind::UntypedNil as u32);

    /// `byte` is an alias for `uint8`.
    pub const BYTE: Self = Self::UINT8;
    /// `rune` is an alias for `int32`.
    pub const RUNE: Self = Self::INT32;

    // === Reserved Range (26-31) ===

    /// First index for dynamically allocated types.
    pub const FIRST_DYNAMIC: u32 = 32;

    /// Sentinel value indicating no type (e.g. a signature without receiver).
    pub const NONE: Self = Self(u32::MAX);

    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a pre-interned basic type.
    #[inline]
    pub const fn is_basic(self) -> bool {
        self.0 < BasicKind::COUNT
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Basic kind for pre-interned indices.
    #[inline]
    pub fn basic_kind(self) -> Option<BasicKind> {
        BasicKind::from_raw(self.0)
    }

    /// Convert `Idx::NONE` into `None`.
    #[inline]
    pub fn to_option(self) -> Option<Self> {
        if self.is_none() {
            None
        } else {
            Some(self)
        }
    }
}

impl From<BasicKind> for Idx {
    fn from(kind: BasicKind) -> Self {
        Self(kind as u32)
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "Idx::NONE");
        }
        match self.basic_kind() {
            Some(kind) => write!(f, "Idx({kind})"),
            None => write!(f, "Idx({})", self.0),
        }
    }
}

// Compile-time size assertion: Idx must be exactly 4 bytes
const _: () = assert!(std::mem::size_of::<Idx>() == 4);
