use gil_ir::Module;
use gil_types::Pool;
use pretty_assertions::assert_eq;

use super::*;
use crate::LowerConfig;

#[test]
fn declarations_register_records_in_order() {
    let mut pool = Pool::new();
    let point = pool.named("Point");
    let x = pool.field("X", Idx::INT32);
    let y = pool.field("Y", Idx::INT32);
    let body = pool.struct_type(&[x, y]);
    pool.set_underlying(point, body);
    let celsius = pool.named_with("Celsius", Idx::FLOAT64);
    let cb_sig = pool.func(&[Idx::INT], &[]);
    let callback = pool.named_with("Callback", cb_sig);

    let mut module = Module::new("decls");
    let mut lowerer = TypeLowerer::new(&pool, &mut module, LowerConfig::default());
    lower_declarations(&mut lowerer, &[point, celsius, callback]).unwrap();

    assert!(lowerer.cached(celsius).is_some());
    assert_eq!(
        lowerer.module().dump_type_defs(),
        "%Point.0 = type { i32, i32 }\n\
         %Callback.1 = type { void ({}*, i64)*, {}* }\n"
    );
}

#[test]
fn declarations_stop_at_first_error() {
    let mut pool = Pool::new();
    let param = pool.type_param("T");
    let generic = pool.named_with("Box", param);
    let x = pool.field("x", Idx::INT);
    let body = pool.struct_type(&[x]);
    let later = pool.named_with("Later", body);

    let mut module = Module::new("decls");
    let mut lowerer = TypeLowerer::new(&pool, &mut module, LowerConfig::default());
    let err = lower_declarations(&mut lowerer, &[generic, later]);

    assert!(matches!(err, Err(LowerError::UnsupportedKind { .. })));
    assert!(lowerer.cached(later).is_none());
    assert_eq!(lowerer.module().num_type_defs(), 0);
}
