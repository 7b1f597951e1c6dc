//! Type kind tag for tag-driven dispatch.
//!
//! Each type in the pool has a `Tag` that identifies its structural kind.
//! The tag determines how to interpret the associated `data` field.
//!
//! # Tag Categories
//!
//! - 0: Basic (data = `BasicKind`)
//! - 16-31: Simple containers (data = child Idx)
//! - 32-47: Multi-child containers (data = extra index)
//! - 48-79: Complex types (data = extra index with length)
//! - 80-95: Named types (data = index into the named table)
//! - 96-111: Type parameters (data = extra index)

use std::fmt;

/// Type kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Tag {
    // === Basic (0) ===
    /// Scalar kind, see [`BasicKind`](crate::BasicKind).
    Basic = 0,

    // === Simple Containers (16-31) ===
    // data: child Idx.raw()
    /// Slice type `[]T`.
    Slice = 16,
    /// Pointer type `*T`.
    Pointer = 17,

    // === Multi-Child Containers (32-47) ===
    // data: index into extra[]
    /// Fixed-length array `[N]T`. Extra: `[len_lo, len_hi, elem]`.
    Array = 32,
    /// Map type `map[K]V`. Extra: `[key, value]`.
    Map = 33,
    /// Channel type `chan T`. Extra: `[dir, elem]`.
    Channel = 34,

    // === Complex Types (48-79) ===
    // data: index into extra[] with length prefix
    /// Struct type. Extra: `[count, (name, ty)*]`.
    Struct = 48,
    /// Function signature. Extra: `[recv, variadic, params, results]`.
    Signature = 49,
    /// Ordered element list (parameter and result lists). Extra: `[count, elem*]`.
    Tuple = 50,
    /// Interface type. Extra: `[count, (name, signature)*]`.
    Interface = 51,

    // === Named Types (80-95) ===
    /// Named type with its own identity. Data: index into the named table.
    Named = 80,

    // === Type Parameters (96-111) ===
    /// Unresolved generic parameter. Extra: `[name, serial]`.
    TypeParam = 96,
}

impl Tag {
    /// Check if this tag uses the extra array for data.
    #[inline]
    pub const fn uses_extra(self) -> bool {
        matches!(
            self,
            Self::Array
                | Self::Map
                | Self::Channel
                | Self::Struct
                | Self::Signature
                | Self::Tuple
                | Self::Interface
                | Self::TypeParam
        )
    }

    /// Get the name of this tag as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Slice => "slice",
            Self::Pointer => "pointer",
            Self::Array => "array",
            Self::Map => "map",
            Self::Channel => "chan",
            Self::Struct => "struct",
            Self::Signature => "signature",
            Self::Tuple => "tuple",
            Self::Interface => "interface",
            Self::Named => "named",
            Self::TypeParam => "type parameter",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of a channel type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ChanDir {
    /// `chan T`
    Both = 0,
    /// `chan<- T`
    Send = 1,
    /// `<-chan T`
    Recv = 2,
}

impl ChanDir {
    #[inline]
    pub(crate) fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Send,
            2 => Self::Recv,
            _ => Self::Both,
        }
    }
}
