//! Size and alignment of lowered types.
//!
//! Records use natural layout: each field is placed at the next offset
//! aligned to its own alignment, and the total size is rounded up to the
//! record's alignment (the largest field alignment, 1 for `{}`).

use gil_ir::{Module, TargetType};

use crate::{LayoutError, WordSize};

/// Size and alignment of a type, in bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub size: u64,
    pub align: u64,
}

impl Layout {
    const fn new(size: u64, align: u64) -> Self {
        Self { size, align }
    }
}

/// Size of `ty` in bytes.
///
/// # Errors
///
/// Returns [`LayoutError::Incomplete`] if `ty` embeds a named record that
/// is still a placeholder, and [`LayoutError::Overflow`] if the size does
/// not fit in a `u64`.
pub fn size_of(ty: &TargetType, module: &Module, word: WordSize) -> Result<u64, LayoutError> {
    layout_of(ty, module, word).map(|layout| layout.size)
}

/// Alignment of `ty` in bytes.
///
/// # Errors
///
/// See [`size_of`].
pub fn align_of(ty: &TargetType, module: &Module, word: WordSize) -> Result<u64, LayoutError> {
    layout_of(ty, module, word).map(|layout| layout.align)
}

/// Size and alignment of `ty`.
///
/// # Errors
///
/// See [`size_of`].
pub fn layout_of(ty: &TargetType, module: &Module, word: WordSize) -> Result<Layout, LayoutError> {
    let layout = match ty {
        TargetType::Void => Layout::new(0, 1),
        TargetType::Int(width) => {
            let bytes = u64::from(width.div_ceil(8)).max(1);
            let align = bytes.next_power_of_two().min(word.bytes());
            Layout::new(round_up(bytes, align, ty)?, align)
        }
        TargetType::Float => Layout::new(4, 4),
        TargetType::Double => Layout::new(8, 8),
        TargetType::Ptr(_) | TargetType::Func(_) => Layout::new(word.bytes(), word.bytes()),
        TargetType::Array(len, elem) => {
            let elem = layout_of(elem, module, word)?;
            let size = len.checked_mul(elem.size).ok_or_else(|| overflow(ty))?;
            Layout::new(size, elem.align)
        }
        TargetType::Struct(fields) => record_layout(fields, module, word, ty)?.0,
        TargetType::Named(id) => {
            let def = module.type_def(*id);
            let Some(body) = def.body() else {
                return Err(LayoutError::Incomplete {
                    label: def.label().to_string(),
                });
            };
            record_layout(body, module, word, ty)?.0
        }
    };
    Ok(layout)
}

/// Byte offset of each field of a record with the given fields.
///
/// # Errors
///
/// See [`size_of`].
pub fn field_offsets(
    fields: &[TargetType],
    module: &Module,
    word: WordSize,
) -> Result<Vec<u64>, LayoutError> {
    let record = TargetType::record(fields.to_vec());
    record_layout(fields, module, word, &record).map(|(_, offsets)| offsets)
}

/// `ty` is the record being laid out, for error reporting.
fn record_layout(
    fields: &[TargetType],
    module: &Module,
    word: WordSize,
    ty: &TargetType,
) -> Result<(Layout, Vec<u64>), LayoutError> {
    let mut offsets = Vec::with_capacity(fields.len());
    let mut offset = 0u64;
    let mut align = 1;
    for field in fields {
        let field = layout_of(field, module, word)?;
        offset = round_up(offset, field.align, ty)?;
        offsets.push(offset);
        offset = offset.checked_add(field.size).ok_or_else(|| overflow(ty))?;
        align = align.max(field.align);
    }
    Ok((Layout::new(round_up(offset, align, ty)?, align), offsets))
}

fn round_up(value: u64, align: u64, ty: &TargetType) -> Result<u64, LayoutError> {
    value.checked_next_multiple_of(align).ok_or_else(|| overflow(ty))
}

fn overflow(ty: &TargetType) -> LayoutError {
    LayoutError::Overflow { ty: ty.to_string() }
}
