use pretty_assertions::assert_eq;

use super::*;

#[test]
fn constructors_build_expected_shapes() {
    assert_eq!(TargetType::i1(), TargetType::Int(1));
    assert_eq!(
        TargetType::opaque_ptr(),
        TargetType::Ptr(Box::new(TargetType::Struct(vec![])))
    );
    assert_eq!(
        TargetType::byte_ptr().pointee(),
        Some(&TargetType::Int(8))
    );
}

#[test]
fn queries() {
    let rec = TargetType::record(vec![TargetType::i32(), TargetType::Double]);
    assert_eq!(rec.struct_fields().map(<[_]>::len), Some(2));
    assert_eq!(TargetType::i64().int_width(), Some(64));
    assert!(TargetType::Void.is_void());
    assert!(rec.as_func().is_none());
    assert!(rec.as_named().is_none());

    let f = TargetType::func(TargetType::Void, vec![TargetType::opaque_ptr()]);
    assert_eq!(f.as_func().map(|func| func.params.len()), Some(1));
}

#[test]
fn display_renders_llvm_like_syntax() {
    let string = TargetType::record(vec![TargetType::byte_ptr(), TargetType::i64()]);
    assert_eq!(string.to_string(), "{ i8*, i64 }");

    let arr = TargetType::array(3, TargetType::Float);
    assert_eq!(arr.to_string(), "[3 x float]");

    let closure_fn = TargetType::func(
        TargetType::Void,
        vec![TargetType::opaque_ptr(), TargetType::Double],
    );
    assert_eq!(
        TargetType::ptr(closure_fn).to_string(),
        "void ({}*, double)*"
    );
    assert_eq!(TargetType::opaque().to_string(), "{}");
}
