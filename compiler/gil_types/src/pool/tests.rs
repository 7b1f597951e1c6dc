use pretty_assertions::assert_eq;

use super::*;

#[test]
fn basics_at_fixed_indices() {
    let pool = Pool::new();

    for kind in BasicKind::ALL {
        let idx = Idx::from(kind);
        assert_eq!(pool.tag(idx), Tag::Basic);
        assert_eq!(pool.basic_kind(idx), Some(kind));
    }
    assert_eq!(pool.len(), Idx::FIRST_DYNAMIC as usize);
}

#[test]
fn unnamed_types_are_interned() {
    let mut pool = Pool::new();
    let a = pool.slice(Idx::INT32);
    let b = pool.slice(Idx::INT32);
    let c = pool.slice(Idx::INT64);

    assert_eq!(a, b);
    assert_ne!(a, c);

    let x = pool.field("X", Idx::INT32);
    let s1 = pool.struct_type(&[x]);
    let x = pool.field("X", Idx::INT32);
    let s2 = pool.struct_type(&[x]);
    assert_eq!(s1, s2);
}

#[test]
fn named_types_are_never_interned() {
    let mut pool = Pool::new();
    let a = pool.named("Point");
    let b = pool.named("Point");

    assert_ne!(a, b);
    assert_eq!(pool.named_name(a), pool.named_name(b));
}

#[test]
fn container_accessors() {
    let mut pool = Pool::new();
    let arr = pool.array(5_000_000_000, Idx::UINT8);
    let map = pool.map(Idx::STRING, Idx::BOOL);
    let ch = pool.chan(ChanDir::Recv, Idx::INT);
    let ptr = pool.pointer(arr);

    assert_eq!(pool.array_len(arr), 5_000_000_000);
    assert_eq!(pool.array_elem(arr), Idx::UINT8);
    assert_eq!(pool.map_key(map), Idx::STRING);
    assert_eq!(pool.map_value(map), Idx::BOOL);
    assert_eq!(pool.chan_dir(ch), ChanDir::Recv);
    assert_eq!(pool.chan_elem(ch), Idx::INT);
    assert_eq!(pool.pointer_elem(ptr), arr);
}

#[test]
fn struct_fields_keep_order_and_optional_names() {
    let mut pool = Pool::new();
    let a = pool.field("A", Idx::INT8);
    let s = pool.struct_type(&[a, FieldDef::anonymous(Idx::STRING)]);

    let fields = pool.struct_fields(s);
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name.map(|n| pool.name_str(n)), Some("A"));
    assert_eq!(fields[0].ty, Idx::INT8);
    assert_eq!(fields[1].name, None);
    assert_eq!(fields[1].ty, Idx::STRING);
}

#[test]
fn signature_parts() {
    let mut pool = Pool::new();
    let recv = pool.named("T");
    let sig = pool.signature(Some(recv), &[Idx::INT], &[Idx::BOOL, Idx::STRING], false);

    assert_eq!(pool.signature_recv(sig), Some(recv));
    assert_eq!(pool.tuple_elems(pool.signature_params(sig)), vec![Idx::INT]);
    assert_eq!(
        pool.tuple_elems(pool.signature_results(sig)),
        vec![Idx::BOOL, Idx::STRING]
    );
    assert!(!pool.signature_is_variadic(sig));

    let plain = pool.func(&[], &[]);
    assert_eq!(pool.signature_recv(plain), None);
    assert_eq!(pool.tuple_len(pool.signature_results(plain)), 0);
}

#[test]
fn underlying_strips_named_chain() {
    let mut pool = Pool::new();
    let inner = pool.named_with("Celsius", Idx::FLOAT64);
    let outer = pool.named_with("Temp", inner);

    assert_eq!(pool.named_underlying(outer), Some(inner));
    assert_eq!(pool.underlying(outer), Idx::FLOAT64);
    assert_eq!(pool.underlying_tag(outer), Some(Tag::Basic));
    assert_eq!(pool.underlying(Idx::INT), Idx::INT);
}

#[test]
fn underlying_of_unset_named_is_none() {
    let mut pool = Pool::new();
    let pending = pool.named("Pending");

    assert_eq!(pool.named_underlying(pending), None);
    assert!(pool.underlying(pending).is_none());
    assert_eq!(pool.underlying_tag(pending), None);
}

#[test]
fn underlying_terminates_on_named_loop() {
    let mut pool = Pool::new();
    let a = pool.named("A");
    let b = pool.named("B");
    pool.set_underlying(a, b);
    pool.set_underlying(b, a);

    assert!(pool.underlying(a).is_none());
}

#[test]
fn type_params_are_distinct() {
    let mut pool = Pool::new();
    let t1 = pool.type_param("T");
    let t2 = pool.type_param("T");

    assert_ne!(t1, t2);
    assert_eq!(pool.tag(t1), Tag::TypeParam);
    assert_eq!(pool.type_param_name(t1), "T");
}

#[test]
fn format_types() {
    let mut pool = Pool::new();
    let point = pool.named("Point");
    let x = pool.field("X", Idx::INT32);
    let y = pool.field("Y", Idx::INT32);
    let body = pool.struct_type(&[x, y]);
    pool.set_underlying(point, body);

    let ptr = pool.pointer(point);
    let slice = pool.slice(Idx::STRING);
    let arr = pool.array(4, Idx::UINT8);
    let map = pool.map(Idx::STRING, ptr);
    let send = pool.chan(ChanDir::Send, Idx::INT);
    let sig = pool.func(&[Idx::INT, slice], &[Idx::BOOL, Idx::STRING]);
    let variadic = pool.signature(None, &[Idx::INT, slice], &[Idx::INT], false);
    let method_sig = pool.func(&[], &[Idx::STRING]);
    let method = pool.method("String", method_sig);
    let stringer = pool.interface(&[method]);
    let empty = pool.interface(&[]);

    assert_eq!(pool.format_type(body), "struct{X int32; Y int32}");
    assert_eq!(pool.format_type(ptr), "*Point");
    assert_eq!(pool.format_type(arr), "[4]uint8");
    assert_eq!(pool.format_type(map), "map[string]*Point");
    assert_eq!(pool.format_type(send), "chan<- int");
    assert_eq!(pool.format_type(sig), "func(int, []string) (bool, string)");
    assert_eq!(pool.format_type(variadic), "func(int, []string) int");
    assert_eq!(pool.format_type(stringer), "interface{String() string}");
    assert_eq!(pool.format_type(empty), "interface{}");
    assert_eq!(pool.display(Idx::UNSAFE_POINTER).to_string(), "unsafe.Pointer");
}

#[test]
fn format_variadic_and_receiver() {
    let mut pool = Pool::new();
    let recv = pool.named("Buf");
    let bytes = pool.slice(Idx::BYTE);
    let sig = pool.signature(Some(recv), &[bytes], &[], true);

    assert_eq!(pool.format_type(sig), "func (Buf) (...uint8)");
}
