//! Type construction helpers for the Pool.
//!
//! Unnamed constructors intern; `named` and `type_param` always allocate a
//! fresh identity.

use smallvec::SmallVec;

use super::{FieldDef, MethodDef, Name, NamedEntry, Pool};
use crate::{ChanDir, Idx, Tag};

impl Pool {
    // === Simple Container Constructors ===

    /// Create a slice type `[]elem`.
    pub fn slice(&mut self, elem: Idx) -> Idx {
        self.intern(Tag::Slice, elem.raw())
    }

    /// Create a pointer type `*elem`.
    pub fn pointer(&mut self, elem: Idx) -> Idx {
        self.intern(Tag::Pointer, elem.raw())
    }

    // === Multi-Child Container Constructors ===

    /// Create an array type `[len]elem`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "u64 length split into two u32 halves for pool storage"
    )]
    pub fn array(&mut self, len: u64, elem: Idx) -> Idx {
        // Layout: [len_lo, len_hi, elem]
        self.intern_complex(
            Tag::Array,
            &[(len & 0xFFFF_FFFF) as u32, (len >> 32) as u32, elem.raw()],
        )
    }

    /// Create a map type `map[key]value`.
    pub fn map(&mut self, key: Idx, value: Idx) -> Idx {
        self.intern_complex(Tag::Map, &[key.raw(), value.raw()])
    }

    /// Create a channel type.
    pub fn chan(&mut self, dir: ChanDir, elem: Idx) -> Idx {
        self.intern_complex(Tag::Channel, &[dir as u32, elem.raw()])
    }

    // === Complex Constructors ===

    /// Create a struct field, interning its name.
    pub fn field(&mut self, name: &str, ty: Idx) -> FieldDef {
        FieldDef {
            name: Some(self.name(name)),
            ty,
        }
    }

    /// Create a struct type.
    ///
    /// Extra layout: `[field_count, f0_name, f0_type, f1_name, f1_type, ...]`,
    /// with `u32::MAX` for an absent name.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "field count fits u32; pool layout uses u32 words"
    )]
    pub fn struct_type(&mut self, fields: &[FieldDef]) -> Idx {
        let mut extra: SmallVec<[u32; 8]> = SmallVec::with_capacity(1 + fields.len() * 2);
        extra.push(fields.len() as u32);
        for field in fields {
            extra.push(field.name.map_or(Name::NONE_RAW, Name::raw));
            extra.push(field.ty.raw());
        }
        self.intern_complex(Tag::Struct, &extra)
    }

    /// Create a tuple type `(elems...)`.
    ///
    /// Empty tuples are allowed: they are the parameter or result list of a
    /// signature that has none.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "element count fits u32; pool layout uses u32 words"
    )]
    pub fn tuple(&mut self, elems: &[Idx]) -> Idx {
        // Layout: [elem_count, elem0, elem1, ...]
        let mut extra: SmallVec<[u32; 8]> = SmallVec::with_capacity(elems.len() + 1);
        extra.push(elems.len() as u32);
        extra.extend(elems.iter().map(|e| e.raw()));
        self.intern_complex(Tag::Tuple, &extra)
    }

    /// Create a function signature.
    ///
    /// `params` and `results` are stored as tuples so a multi-value result
    /// list has an identity of its own. When `variadic` is set the last
    /// parameter must already be a slice type.
    pub fn signature(
        &mut self,
        recv: Option<Idx>,
        params: &[Idx],
        results: &[Idx],
        variadic: bool,
    ) -> Idx {
        debug_assert!(
            !variadic || params.last().is_some_and(|&p| self.tag(p) == Tag::Slice),
            "variadic signature must end in a slice parameter"
        );
        let params = self.tuple(params);
        let results = self.tuple(results);
        // Layout: [recv, variadic, params, results]
        self.intern_complex(
            Tag::Signature,
            &[
                recv.unwrap_or(Idx::NONE).raw(),
                u32::from(variadic),
                params.raw(),
                results.raw(),
            ],
        )
    }

    /// Create a plain function signature without receiver.
    pub fn func(&mut self, params: &[Idx], results: &[Idx]) -> Idx {
        self.signature(None, params, results, false)
    }

    /// Create an interface method, interning its name.
    pub fn method(&mut self, name: &str, signature: Idx) -> MethodDef {
        MethodDef {
            name: self.name(name),
            signature,
        }
    }

    /// Create an interface type.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "method count fits u32; pool layout uses u32 words"
    )]
    pub fn interface(&mut self, methods: &[MethodDef]) -> Idx {
        // Layout: [method_count, m0_name, m0_sig, ...]
        let mut extra: SmallVec<[u32; 8]> = SmallVec::with_capacity(1 + methods.len() * 2);
        extra.push(methods.len() as u32);
        for method in methods {
            extra.push(method.name.raw());
            extra.push(method.signature.raw());
        }
        self.intern_complex(Tag::Interface, &extra)
    }

    // === Identity-Carrying Constructors ===

    /// Declare a new named type.
    ///
    /// The underlying type is set separately with [`Pool::set_underlying`],
    /// which lets a declaration refer to itself (`type List struct { next *List }`).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "named table index fits u32"
    )]
    pub fn named(&mut self, name: &str) -> Idx {
        let name = self.name(name);
        let entry = self.named.len() as u32;
        self.named.push(NamedEntry {
            name,
            underlying: Idx::NONE,
        });
        self.push_item(Tag::Named, entry)
    }

    /// Set the underlying type of a named type declared with [`Pool::named`].
    pub fn set_underlying(&mut self, named: Idx, underlying: Idx) {
        debug_assert_eq!(self.tag(named), Tag::Named);
        debug_assert_ne!(named, underlying, "named type cannot be its own underlying");
        let entry = self.data(named) as usize;
        debug_assert!(
            self.named[entry].underlying.is_none(),
            "underlying type set twice"
        );
        self.named[entry].underlying = underlying;
    }

    /// Declare a named type and set its underlying type in one step.
    pub fn named_with(&mut self, name: &str, underlying: Idx) -> Idx {
        let named = self.named(name);
        self.set_underlying(named, underlying);
        named
    }

    /// Create an unresolved generic type parameter.
    pub fn type_param(&mut self, name: &str) -> Idx {
        let name = self.name(name);
        let serial = self.next_type_param;
        self.next_type_param += 1;
        // The serial keeps each parameter a distinct identity.
        self.intern_complex(Tag::TypeParam, &[name.raw(), serial])
    }
}
