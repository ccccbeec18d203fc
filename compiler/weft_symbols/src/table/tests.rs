use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_table_has_only_global_namespace() {
    let table = SymbolTable::default();

    assert!(table.is_empty());
    assert_eq!(table.len(), 1);
    assert_eq!(table.type_count(), 0);
    let global = table.get(table.global_namespace());
    assert!(matches!(global, Some(Symbol::Namespace(ns)) if ns.name.is_empty()));
}

#[test]
fn namespaces_are_qualified_and_merged() {
    let mut builder = SymbolTableBuilder::new();
    let global = builder.global();
    let first = builder.namespace(global, "App.Components");
    let again = builder.namespace(global, "App.Components");
    let app = builder.namespace(global, "App");
    let nested = builder.namespace(app, "Components");

    assert_eq!(first, again);
    assert_eq!(first, nested);

    let table = builder.build();
    let Some(Symbol::Namespace(ns)) = table.get(first) else {
        panic!("expected namespace");
    };
    assert_eq!(ns.qualified_name, "App.Components");
}

#[test]
fn types_get_qualified_names() {
    let mut builder = SymbolTableBuilder::new();
    let ns = builder.namespace(builder.global(), "App");
    let outer = builder.add_type(ns, TypeSymbol::class("Outer"));
    let inner = builder.add_type(outer, TypeSymbol::class("Inner"));
    let top = builder.add_type(builder.global(), TypeSymbol::class("Top"));
    let table = builder.build();

    assert_eq!(table.find_type("App.Outer"), Some(outer));
    assert_eq!(table.find_type("App.Outer.Inner"), Some(inner));
    assert_eq!(table.find_type("Top"), Some(top));
    assert_eq!(table.type_count(), 3);

    let outer_sym = table.type_symbol(outer).unwrap();
    assert_eq!(outer_sym.nested, vec![inner]);
}

#[test]
fn children_in_declaration_order() {
    let mut builder = SymbolTableBuilder::new();
    let global = builder.global();
    let b = builder.add_type(global, TypeSymbol::class("B"));
    let ns = builder.namespace(global, "N");
    let a = builder.add_type(global, TypeSymbol::class("A"));
    let table = builder.build();

    let root = table.get(table.global_namespace()).unwrap();
    assert_eq!(root.children(), &[b, ns, a]);
}

#[test]
fn type_symbol_is_none_for_namespace() {
    let mut builder = SymbolTableBuilder::new();
    let ns = builder.namespace(builder.global(), "N");
    let table = builder.build();

    assert!(table.type_symbol(ns).is_none());
    assert!(table.get(SymbolId::from_raw(99)).is_none());
}

#[test]
fn duplicate_qualified_name_keeps_first_in_index() {
    let mut builder = SymbolTableBuilder::new();
    let global = builder.global();
    let first = builder.add_type(global, TypeSymbol::class("Dup"));
    let second = builder.add_type(global, TypeSymbol::class("Dup"));
    let table = builder.build();

    assert_ne!(first, second);
    assert_eq!(table.find_type("Dup"), Some(first));
    assert_eq!(table.get(table.global_namespace()).unwrap().children().len(), 2);
}

fn namespace(name: &str, members: &[u32]) -> Symbol {
    Symbol::Namespace(NamespaceSymbol {
        name: name.to_owned(),
        qualified_name: name.to_owned(),
        members: members.iter().copied().map(SymbolId::from_raw).collect(),
    })
}

fn class(qualified_name: &str, nested: &[u32]) -> Symbol {
    let mut ty = TypeSymbol::class(qualified_name.rsplit('.').next().unwrap());
    ty.qualified_name = qualified_name.to_owned();
    ty.nested = nested.iter().copied().map(SymbolId::from_raw).collect();
    Symbol::Type(ty)
}

#[test]
fn from_symbols_accepts_builder_layout_and_rebuilds_index() {
    let table = SymbolTable::from_symbols(vec![
        namespace("", &[1]),
        namespace("App", &[2, 4]),
        class("App.Outer", &[3]),
        class("App.Outer.Inner", &[]),
        class("App.Outer", &[]),
    ])
    .unwrap();

    assert_eq!(table.type_count(), 2);
    assert_eq!(table.find_type("App.Outer"), Some(SymbolId::from_raw(2)));
    assert_eq!(table.find_type("App.Outer.Inner"), Some(SymbolId::from_raw(3)));
}

#[test]
fn from_symbols_rejects_malformed_graphs() {
    let cases = [
        (vec![], TableError::MissingGlobalNamespace),
        (vec![class("Top", &[])], TableError::MissingGlobalNamespace),
        (
            vec![namespace("", &[0])],
            TableError::DuplicateParent {
                child: SymbolId::GLOBAL,
            },
        ),
        (
            vec![namespace("", &[1, 1]), class("Twice", &[])],
            TableError::DuplicateParent {
                child: SymbolId::from_raw(1),
            },
        ),
        (
            vec![namespace("", &[7])],
            TableError::OutOfRange {
                parent: SymbolId::GLOBAL,
                child: SymbolId::from_raw(7),
            },
        ),
        (
            vec![namespace("", &[]), class("A", &[2]), class("B", &[1])],
            TableError::Unreachable {
                id: SymbolId::from_raw(1),
            },
        ),
    ];

    for (symbols, expected) in cases {
        assert_eq!(SymbolTable::from_symbols(symbols), Err(expected));
    }
}

#[cfg(feature = "serde")]
#[test]
fn deserialization_validates_the_graph() {
    let mut builder = SymbolTableBuilder::new();
    let app = builder.namespace(builder.global(), "App");
    builder.add_type(app, TypeSymbol::class("Counter"));
    let table = builder.build();

    let bytes = bincode::serialize(&table).unwrap();
    let restored: SymbolTable = bincode::deserialize(&bytes).unwrap();
    assert_eq!(restored, table);

    // Only the arena is serialized, so a bare symbol list has the same encoding.
    let cyclic = bincode::serialize(&vec![namespace("", &[0])]).unwrap();
    assert!(bincode::deserialize::<SymbolTable>(&cyclic).is_err());
}
