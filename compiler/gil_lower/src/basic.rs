//! Basic-kind table: scalar kind to fixed target representation.
//!
//! Untyped constant kinds never reach lowering in a well-formed program, so
//! they have no entry; the engine turns a missing entry into
//! [`LowerError::UnknownBasicKind`](crate::LowerError::UnknownBasicKind).

use gil_ir::TargetType;
use gil_types::BasicKind;

use crate::WordSize;

/// Target representation of a scalar kind, or `None` for kinds absent from
/// the table.
pub fn lower_basic(kind: BasicKind, word: WordSize) -> Option<TargetType> {
    let word = TargetType::Int(word.bits());
    let ty = match kind {
        BasicKind::Bool => TargetType::i1(),
        BasicKind::Int8 | BasicKind::Uint8 => TargetType::i8(),
        BasicKind::Int16 | BasicKind::Uint16 => TargetType::i16(),
        BasicKind::Int32 | BasicKind::Uint32 => TargetType::i32(),
        BasicKind::Int64 | BasicKind::Uint64 => TargetType::i64(),
        BasicKind::Int | BasicKind::Uint | BasicKind::Uintptr => word,
        BasicKind::Float32 => TargetType::Float,
        BasicKind::Float64 => TargetType::Double,
        BasicKind::Complex64 => TargetType::record(vec![TargetType::Float, TargetType::Float]),
        BasicKind::Complex128 => TargetType::record(vec![TargetType::Double, TargetType::Double]),
        BasicKind::String => TargetType::record(vec![TargetType::byte_ptr(), TargetType::i64()]),
        BasicKind::UnsafePointer | BasicKind::Invalid => TargetType::opaque_ptr(),
        BasicKind::UntypedBool
        | BasicKind::UntypedInt
        | BasicKind::UntypedRune
        | BasicKind::UntypedFloat
        | BasicKind::UntypedComplex
        | BasicKind::UntypedString
        | BasicKind::UntypedNil => return None,
    };
    Some(ty)
}
