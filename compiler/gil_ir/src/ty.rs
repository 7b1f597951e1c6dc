//! Target IR type vocabulary.
//!
//! `TargetType` is a plain value: unnamed aggregates compare structurally.
//! Named aggregates are [`TargetType::Named`] handles into the owning
//! [`Module`](crate::Module)'s definition table, so every use site of a
//! named record shares one definition and recursive records are legal.

use std::fmt;

use crate::TypeDefId;

/// A type in the target IR.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetType {
    /// No value; only valid as a function return type.
    Void,
    /// Integer of the given bit width (`i1`, `i8`, ..., `i64`).
    Int(u32),
    /// 32-bit IEEE float.
    Float,
    /// 64-bit IEEE float.
    Double,
    /// Pointer to a value of the pointee type.
    Ptr(Box<TargetType>),
    /// Fixed-length array `[len x elem]`.
    Array(u64, Box<TargetType>),
    /// Anonymous record with ordered fields.
    Struct(Vec<TargetType>),
    /// Function type; only meaningful behind a pointer.
    Func(Box<FuncType>),
    /// Reference to a named record registered in the module.
    Named(TypeDefId),
}

/// Signature of a target function.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct FuncType {
    pub ret: TargetType,
    pub params: Vec<TargetType>,
}

impl TargetType {
    // === Constructors ===

    /// `i1`
    #[inline]
    pub const fn i1() -> Self {
        Self::Int(1)
    }

    /// `i8`
    #[inline]
    pub const fn i8() -> Self {
        Self::Int(8)
    }

    /// `i16`
    #[inline]
    pub const fn i16() -> Self {
        Self::Int(16)
    }

    /// `i32`
    #[inline]
    pub const fn i32() -> Self {
        Self::Int(32)
    }

    /// `i64`
    #[inline]
    pub const fn i64() -> Self {
        Self::Int(64)
    }

    /// Pointer to `pointee`.
    pub fn ptr(pointee: TargetType) -> Self {
        Self::Ptr(Box::new(pointee))
    }

    /// Array of `len` elements.
    pub fn array(len: u64, elem: TargetType) -> Self {
        Self::Array(len, Box::new(elem))
    }

    /// Anonymous record.
    pub fn record(fields: Vec<TargetType>) -> Self {
        Self::Struct(fields)
    }

    /// Function type.
    pub fn func(ret: TargetType, params: Vec<TargetType>) -> Self {
        Self::Func(Box::new(FuncType { ret, params }))
    }

    /// The empty record `{}`, used as the pointee of runtime-managed handles.
    pub fn opaque() -> Self {
        Self::Struct(Vec::new())
    }

    /// Pointer to the empty record: an untyped handle.
    pub fn opaque_ptr() -> Self {
        Self::ptr(Self::opaque())
    }

    /// `i8*`
    pub fn byte_ptr() -> Self {
        Self::ptr(Self::i8())
    }

    // === Queries ===

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Bit width of an integer type.
    pub fn int_width(&self) -> Option<u32> {
        match self {
            Self::Int(width) => Some(*width),
            _ => None,
        }
    }

    /// Pointee of a pointer type.
    pub fn pointee(&self) -> Option<&TargetType> {
        match self {
            Self::Ptr(pointee) => Some(pointee),
            _ => None,
        }
    }

    /// Fields of an anonymous record.
    pub fn struct_fields(&self) -> Option<&[TargetType]> {
        match self {
            Self::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Function type behind a `Func` variant.
    pub fn as_func(&self) -> Option<&FuncType> {
        match self {
            Self::Func(func) => Some(func),
            _ => None,
        }
    }

    /// Definition handle of a named record.
    pub fn as_named(&self) -> Option<TypeDefId> {
        match self {
            Self::Named(id) => Some(*id),
            _ => None,
        }
    }
}

/// Writes a type, rendering named records with `name_of`.
pub(crate) fn write_type(
    ty: &TargetType,
    f: &mut fmt::Formatter<'_>,
    name_of: &dyn Fn(TypeDefId) -> String,
) -> fmt::Result {
    match ty {
        TargetType::Void => f.write_str("void"),
        TargetType::Int(width) => write!(f, "i{width}"),
        TargetType::Float => f.write_str("float"),
        TargetType::Double => f.write_str("double"),
        TargetType::Ptr(pointee) => {
            write_type(pointee, f, name_of)?;
            f.write_str("*")
        }
        TargetType::Array(len, elem) => {
            write!(f, "[{len} x ")?;
            write_type(elem, f, name_of)?;
            f.write_str("]")
        }
        TargetType::Struct(fields) => write_fields(fields, f, name_of),
        TargetType::Func(func) => {
            write_type(&func.ret, f, name_of)?;
            f.write_str(" (")?;
            for (i, param) in func.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_type(param, f, name_of)?;
            }
            f.write_str(")")
        }
        TargetType::Named(id) => write!(f, "%{}", name_of(*id)),
    }
}

/// `{ a, b }`, or `{}` for the empty record.
pub(crate) fn write_fields(
    fields: &[TargetType],
    f: &mut fmt::Formatter<'_>,
    name_of: &dyn Fn(TypeDefId) -> String,
) -> fmt::Result {
    if fields.is_empty() {
        return f.write_str("{}");
    }
    f.write_str("{ ")?;
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_type(field, f, name_of)?;
    }
    f.write_str(" }")
}

/// Without a module, named records print as `%def.N`.
impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_type(self, f, &|id| format!("def.{}", id.raw()))
    }
}

#[cfg(test)]
mod tests;
