//! Scalar ("basic") type kinds.
//!
//! Every basic kind is pre-interned in the pool at a fixed index (see
//! [`Idx`](crate::Idx)), so `BasicKind as u32` doubles as the raw index of
//! the corresponding type.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Properties of a basic kind, used by classification queries.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct BasicInfo: u8 {
        /// `bool` and untyped boolean constants.
        const BOOLEAN = 1 << 0;
        /// Any integer kind, including `uintptr` and untyped ints/runes.
        const INTEGER = 1 << 1;
        /// Unsigned integer kinds.
        const UNSIGNED = 1 << 2;
        /// `float32`, `float64`, untyped float.
        const FLOAT = 1 << 3;
        /// `complex64`, `complex128`, untyped complex.
        const COMPLEX = 1 << 4;
        /// `string` and untyped string constants.
        const STRING = 1 << 5;
        /// Constant-only kinds that never survive type checking.
        const UNTYPED = 1 << 6;

        const NUMERIC = Self::INTEGER.bits() | Self::FLOAT.bits() | Self::COMPLEX.bits();
    }
}

/// Scalar type kind.
///
/// The discriminant is the kind's fixed index in the pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BasicKind {
    /// Placeholder for types that failed checking upstream.
    Invalid = 0,

    Bool = 1,
    Int = 2,
    Int8 = 3,
    Int16 = 4,
    Int32 = 5,
    Int64 = 6,
    Uint = 7,
    Uint8 = 8,
    Uint16 = 9,
    Uint32 = 10,
    Uint64 = 11,
    Uintptr = 12,
    Float32 = 13,
    Float64 = 14,
    Complex64 = 15,
    Complex128 = 16,
    String = 17,
    UnsafePointer = 18,

    // Untyped constant kinds
    UntypedBool = 19,
    UntypedInt = 20,
    UntypedRune = 21,
    UntypedFloat = 22,
    UntypedComplex = 23,
    UntypedString = 24,
    UntypedNil = 25,
}

impl BasicKind {
    /// All kinds, in index order.
    pub const ALL: [BasicKind; 26] = [
        Self::Invalid,
        Self::Bool,
        Self::Int,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Uint,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Uintptr,
        Self::Float32,
        Self::Float64,
        Self::Complex64,
        Self::Complex128,
        Self::String,
        Self::UnsafePointer,
        Self::UntypedBool,
        Self::UntypedInt,
        Self::UntypedRune,
        Self::UntypedFloat,
        Self::UntypedComplex,
        Self::UntypedString,
        Self::UntypedNil,
    ];

    /// Number of basic kinds (and of pre-interned pool slots they occupy).
    pub const COUNT: u32 = 26;

    /// Look up a kind from its pool index.
    #[inline]
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }

    /// Classification flags for this kind.
    pub const fn info(self) -> BasicInfo {
        match self {
            Self::Invalid | Self::UnsafePointer => BasicInfo::empty(),
            Self::Bool => BasicInfo::BOOLEAN,
            Self::Int | Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 => {
                BasicInfo::INTEGER
            }
            Self::Uint
            | Self::Uint8
            | Self::Uint16
            | Self::Uint32
            | Self::Uint64
            | Self::Uintptr => BasicInfo::INTEGER.union(BasicInfo::UNSIGNED),
            Self::Float32 | Self::Float64 => BasicInfo::FLOAT,
            Self::Complex64 | Self::Complex128 => BasicInfo::COMPLEX,
            Self::String => BasicInfo::STRING,
            Self::UntypedBool => BasicInfo::BOOLEAN.union(BasicInfo::UNTYPED),
            Self::UntypedInt | Self::UntypedRune => BasicInfo::INTEGER.union(BasicInfo::UNTYPED),
            Self::UntypedFloat => BasicInfo::FLOAT.union(BasicInfo::UNTYPED),
            Self::UntypedComplex => BasicInfo::COMPLEX.union(BasicInfo::UNTYPED),
            Self::UntypedString => BasicInfo::STRING.union(BasicInfo::UNTYPED),
            Self::UntypedNil => BasicInfo::UNTYPED,
        }
    }

    /// Source-level spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "invalid type",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uintptr => "uintptr",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::String => "string",
            Self::UnsafePointer => "unsafe.Pointer",
            Self::UntypedBool => "untyped bool",
            Self::UntypedInt => "untyped int",
            Self::UntypedRune => "untyped rune",
            Self::UntypedFloat => "untyped float",
            Self::UntypedComplex => "untyped complex",
            Self::UntypedString => "untyped string",
            Self::UntypedNil => "untyped nil",
        }
    }
}

impl fmt::Display for BasicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
