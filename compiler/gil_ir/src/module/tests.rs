use pretty_assertions::assert_eq;

use super::*;

#[test]
fn placeholder_then_body() {
    let mut module = Module::new("test");
    let id = module.declare_type("List.0");

    assert!(module.type_def(id).is_opaque());
    assert_eq!(module.type_def(id).body(), None);

    let self_ref = TargetType::ptr(TargetType::Named(id));
    module.define_type(id, vec![TargetType::i64(), self_ref.clone()]);

    let def = module.type_def(id);
    assert!(!def.is_opaque());
    assert_eq!(def.label(), "List.0");
    assert_eq!(def.body(), Some(&[TargetType::i64(), self_ref][..]));
}

#[test]
fn lookup_by_label() {
    let mut module = Module::new("test");
    let a = module.declare_type("A.0");
    let b = module.declare_type("B.1");

    assert_ne!(a, b);
    assert_eq!(module.lookup_type("A.0"), Some(a));
    assert_eq!(module.lookup_type("B.1"), Some(b));
    assert_eq!(module.lookup_type("C.2"), None);
    assert_eq!(module.num_type_defs(), 2);
    assert_eq!(module.name(), "test");
}

#[test]
fn definitions_iterate_in_registration_order() {
    let mut module = Module::new("test");
    let first = module.declare_type("First.0");
    let second = module.declare_type("Second.1");

    let ids: Vec<_> = module.type_defs().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn display_uses_labels() {
    let mut module = Module::new("test");
    let node = module.declare_type("Node.0");
    module.define_type(node, vec![TargetType::i32(), TargetType::ptr(TargetType::Named(node))]);
    let pending = module.declare_type("Pending.1");

    let ty = TargetType::ptr(TargetType::Named(node));
    assert_eq!(module.display_type(&ty).to_string(), "%Node.0*");
    assert_eq!(TargetType::Named(pending).to_string(), "%def.1");
    assert_eq!(
        module.dump_type_defs(),
        "%Node.0 = type { i32, %Node.0* }\n%Pending.1 = type opaque\n"
    );
}
