use gil_types::ChanDir;
use pretty_assertions::assert_eq;

use super::*;
use crate::WordSize;

fn lower_one(pool: &Pool, idx: Idx) -> (TargetType, Module) {
    let mut module = Module::new("test");
    let ty = TypeLowerer::new(pool, &mut module, LowerConfig::default())
        .lower(idx)
        .unwrap();
    (ty, module)
}

#[test]
fn cache_is_populated() {
    let mut pool = Pool::new();
    let slice = pool.slice(Idx::INT32);
    let mut module = Module::new("test");
    let mut lowerer = TypeLowerer::new(&pool, &mut module, LowerConfig::default());

    assert!(lowerer.cached(slice).is_none());
    let first = lowerer.lower(slice).unwrap();
    assert_eq!(lowerer.cached(slice), Some(&first));
    assert_eq!(lowerer.cached(Idx::INT32), Some(&TargetType::i32()));
    assert_eq!(lowerer.lower(slice).unwrap(), first);
}

#[test]
fn containers() {
    let mut pool = Pool::new();
    let arr = pool.array(3, Idx::FLOAT32);
    let ptr = pool.pointer(Idx::INT8);
    let map = pool.map(Idx::STRING, Idx::INT);
    let ch = pool.chan(ChanDir::Send, Idx::BOOL);
    let iface = pool.interface(&[]);

    assert_eq!(
        lower_one(&pool, arr).0,
        TargetType::array(3, TargetType::Float)
    );
    assert_eq!(lower_one(&pool, ptr).0, TargetType::ptr(TargetType::i8()));
    assert_eq!(lower_one(&pool, map).0, TargetType::opaque_ptr());
    assert_eq!(lower_one(&pool, ch).0, TargetType::opaque_ptr());
    assert_eq!(
        lower_one(&pool, iface).0,
        TargetType::record(vec![TargetType::opaque_ptr(), TargetType::opaque_ptr()])
    );
}

#[test]
fn unnamed_struct_is_anonymous_record() {
    let mut pool = Pool::new();
    let a = pool.field("a", Idx::BOOL);
    let b = pool.field("b", Idx::FLOAT64);
    let st = pool.struct_type(&[a, b]);

    let (ty, module) = lower_one(&pool, st);
    assert_eq!(
        ty,
        TargetType::record(vec![TargetType::i1(), TargetType::Double])
    );
    assert_eq!(module.num_type_defs(), 0);
}

#[test]
fn named_struct_becomes_record() {
    let mut pool = Pool::new();
    let x = pool.field("x", Idx::INT16);
    let body = pool.struct_type(&[x]);
    let named = pool.named_with("Wrapper", body);

    let mut module = Module::new("test");
    let mut lowerer = TypeLowerer::new(&pool, &mut module, LowerConfig::default());
    let ty = lowerer.lower(named).unwrap();
    let id = lowerer.type_def_of(named).unwrap();

    assert_eq!(ty, TargetType::Named(id));
    assert_eq!(lowerer.type_def_of(body), None);
    assert_eq!(lowerer.module().type_def(id).label(), "Wrapper.0");
    assert_eq!(
        lowerer.module().type_def(id).body(),
        Some(&[TargetType::i16()][..])
    );
}

#[test]
fn named_alias_lowers_to_underlying() {
    let mut pool = Pool::new();
    let bytes = pool.slice(Idx::BYTE);
    let buf = pool.named_with("Buffer", bytes);

    let (ty, module) = lower_one(&pool, buf);
    assert_eq!(ty, lower_one(&pool, bytes).0);
    assert_eq!(module.num_type_defs(), 0);
}

#[test]
fn named_pointer_cycle_is_cut() {
    let mut pool = Pool::new();
    let p = pool.named("P");
    let ptr = pool.pointer(p);
    pool.set_underlying(p, ptr);

    let (ty, _) = lower_one(&pool, p);
    assert_eq!(ty, TargetType::ptr(TargetType::opaque()));
}

#[test]
fn signature_func_shape() {
    let mut pool = Pool::new();
    let recv = pool.pointer(Idx::INT);
    let sig = pool.signature(Some(recv), &[Idx::BOOL], &[Idx::FLOAT64], false);
    let mut module = Module::new("test");
    let mut lowerer = TypeLowerer::new(&pool, &mut module, LowerConfig::default());

    let func = lowerer.signature_func(sig).unwrap();
    assert_eq!(func.ret, TargetType::Double);
    assert_eq!(
        func.params,
        vec![
            TargetType::opaque_ptr(),
            TargetType::ptr(TargetType::i64()),
            TargetType::i1(),
        ]
    );
}

#[test]
fn signature_func_rejects_non_signature() {
    let pool = Pool::new();
    let mut module = Module::new("test");
    let mut lowerer = TypeLowerer::new(&pool, &mut module, LowerConfig::default());

    assert_eq!(
        lowerer.signature_func(Idx::INT),
        Err(LowerError::UnsupportedKind {
            ty: "int".to_string(),
            tag: Tag::Basic,
        })
    );
}

#[test]
fn untyped_kind_is_fatal() {
    let pool = Pool::new();
    let mut module = Module::new("test");
    let mut lowerer = TypeLowerer::new(&pool, &mut module, LowerConfig::default());

    let err = lowerer.lower(Idx::UNTYPED_FLOAT).unwrap_err();
    assert_eq!(
        err,
        LowerError::UnknownBasicKind {
            ty: "untyped float".to_string(),
            kind: gil_types::BasicKind::UntypedFloat,
        }
    );
    assert!(lowerer.cached(Idx::UNTYPED_FLOAT).is_none());
}

#[test]
fn missing_underlying_is_fatal() {
    let mut pool = Pool::new();
    let pending = pool.named("Pending");
    let mut module = Module::new("test");
    let mut lowerer = TypeLowerer::new(&pool, &mut module, LowerConfig::default());

    assert_eq!(
        lowerer.lower(pending),
        Err(LowerError::MissingUnderlying {
            ty: "Pending".to_string()
        })
    );
}

#[test]
fn layout_queries() {
    let mut pool = Pool::new();
    let slice = pool.slice(Idx::INT32);
    let mut module = Module::new("test");
    let mut lowerer = TypeLowerer::new(&pool, &mut module, LowerConfig::default());

    assert_eq!(lowerer.size_of(slice), Ok(24));
    assert_eq!(lowerer.align_of(slice), Ok(8));
    assert_eq!(lowerer.size_of(Idx::STRING), Ok(16));

    let mut module = Module::new("test32");
    let config = LowerConfig::default().with_word_size(WordSize::W32);
    let mut lowerer = TypeLowerer::new(&pool, &mut module, config);
    // { i32*, i64, i64 } with 4-byte word alignment
    assert_eq!(lowerer.size_of(slice), Ok(20));
    assert_eq!(lowerer.config().word_size(), WordSize::W32);
}

#[test]
fn oversized_array_reports_layout_overflow() {
    let mut pool = Pool::new();
    let huge = pool.array(1 << 62, Idx::INT64);
    let mut module = Module::new("test");
    let mut lowerer = TypeLowerer::new(&pool, &mut module, LowerConfig::default());

    assert!(lowerer.lower(huge).is_ok());
    assert!(matches!(
        lowerer.size_of(huge),
        Err(LowerError::Layout(crate::LayoutError::Overflow { .. }))
    ));
}

#[test]
fn failed_record_replays_its_error() {
    // type Bad struct { x untyped int }
    let mut pool = Pool::new();
    let x = pool.field("x", Idx::UNTYPED_INT);
    let body = pool.struct_type(&[x]);
    let bad = pool.named_with("Bad", body);
    let mut module = Module::new("test");
    let mut lowerer = TypeLowerer::new(&pool, &mut module, LowerConfig::default());

    let expected = LowerError::UnknownBasicKind {
        ty: "untyped int".to_string(),
        kind: gil_types::BasicKind::UntypedInt,
    };
    assert_eq!(lowerer.lower(bad), Err(expected.clone()));
    assert_eq!(lowerer.lower(bad), Err(expected));
    assert_eq!(lowerer.cached(bad), None);
    assert_eq!(lowerer.type_def_of(bad), None);
    assert_eq!(lowerer.module().num_type_defs(), 1);
}

#[test]
fn named_pointer_cycle_depends_on_entry_point() {
    // type A *B; type B *A
    let mut pool = Pool::new();
    let a = pool.named("A");
    let b = pool.named("B");
    let to_a = pool.pointer(a);
    let to_b = pool.pointer(b);
    pool.set_underlying(a, to_b);
    pool.set_underlying(b, to_a);

    let one = TargetType::ptr(TargetType::opaque());
    let two = TargetType::ptr(one.clone());

    let mut module = Module::new("a_first");
    let mut lowerer = TypeLowerer::new(&pool, &mut module, LowerConfig::default());
    assert_eq!(lowerer.lower(a).unwrap(), two);
    assert_eq!(lowerer.cached(b), Some(&one));

    let mut module = Module::new("b_first");
    let mut lowerer = TypeLowerer::new(&pool, &mut module, LowerConfig::default());
    assert_eq!(lowerer.lower(b).unwrap(), two);
    assert_eq!(lowerer.cached(a), Some(&one));
}
