//! Type formatting for diagnostics and debug output.
//!
//! Named types print as their declared name, so formatting never follows a
//! cycle.

use std::fmt::{self, Write};

use super::Pool;
use crate::{ChanDir, Idx, Tag};

/// `Display` adapter returned by [`Pool::display`].
pub struct TypeDisplay<'pool> {
    pool: &'pool Pool,
    idx: Idx,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pool.write_type(self.idx, f)
    }
}

impl Pool {
    /// Format a type as a human-readable string.
    pub fn format_type(&self, idx: Idx) -> String {
        self.display(idx).to_string()
    }

    /// Lazily formatted view of a type, for use in `tracing` fields.
    pub fn display(&self, idx: Idx) -> TypeDisplay<'_> {
        TypeDisplay { pool: self, idx }
    }

    fn write_type(&self, idx: Idx, out: &mut impl Write) -> fmt::Result {
        if idx.is_none() {
            return out.write_str("<none>");
        }
        match self.tag(idx) {
            Tag::Basic => match self.basic_kind(idx) {
                Some(kind) => out.write_str(kind.name()),
                None => out.write_str("<bad basic>"),
            },
            Tag::Slice => {
                out.write_str("[]")?;
                self.write_type(self.slice_elem(idx), out)
            }
            Tag::Pointer => {
                out.write_char('*')?;
                self.write_type(self.pointer_elem(idx), out)
            }
            Tag::Array => {
                write!(out, "[{}]", self.array_len(idx))?;
                self.write_type(self.array_elem(idx), out)
            }
            Tag::Map => {
                out.write_str("map[")?;
                self.write_type(self.map_key(idx), out)?;
                out.write_char(']')?;
                self.write_type(self.map_value(idx), out)
            }
            Tag::Channel => {
                out.write_str(match self.chan_dir(idx) {
                    ChanDir::Both => "chan ",
                    ChanDir::Send => "chan<- ",
                    ChanDir::Recv => "<-chan ",
                })?;
                self.write_type(self.chan_elem(idx), out)
            }
            Tag::Struct => {
                out.write_str("struct{")?;
                for (i, field) in self.struct_fields(idx).iter().enumerate() {
                    if i > 0 {
                        out.write_str("; ")?;
                    }
                    if let Some(name) = field.name {
                        write!(out, "{} ", self.name_str(name))?;
                    }
                    self.write_type(field.ty, out)?;
                }
                out.write_char('}')
            }
            Tag::Tuple => self.write_list(&self.tuple_elems(idx), false, out),
            Tag::Signature => {
                out.write_str("func")?;
                if let Some(recv) = self.signature_recv(idx) {
                    out.write_str(" (")?;
                    self.write_type(recv, out)?;
                    out.write_str(") ")?;
                }
                self.write_signature_tail(idx, out)
            }
            Tag::Interface => {
                out.write_str("interface{")?;
                for (i, method) in self.interface_methods(idx).iter().enumerate() {
                    if i > 0 {
                        out.write_str("; ")?;
                    }
                    out.write_str(self.name_str(method.name))?;
                    self.write_signature_tail(method.signature, out)?;
                }
                out.write_char('}')
            }
            Tag::Named => out.write_str(self.named_name(idx)),
            Tag::TypeParam => out.write_str(self.type_param_name(idx)),
        }
    }

    /// `(params) results`, shared by function types and interface methods.
    fn write_signature_tail(&self, sig: Idx, out: &mut impl Write) -> fmt::Result {
        let params = self.tuple_elems(self.signature_params(sig));
        self.write_list(&params, self.signature_is_variadic(sig), out)?;

        let results = self.tuple_elems(self.signature_results(sig));
        match results.as_slice() {
            [] => Ok(()),
            [single] => {
                out.write_char(' ')?;
                self.write_type(*single, out)
            }
            many => {
                out.write_char(' ')?;
                self.write_list(many, false, out)
            }
        }
    }

    fn write_list(&self, elems: &[Idx], variadic: bool, out: &mut impl Write) -> fmt::Result {
        out.write_char('(')?;
        for (i, &elem) in elems.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            if variadic && i + 1 == elems.len() && self.tag(elem) == Tag::Slice {
                out.write_str("...")?;
                self.write_type(self.slice_elem(elem), out)?;
            } else {
                self.write_type(elem, out)?;
            }
        }
        out.write_char(')')
    }
}
