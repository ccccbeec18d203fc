use super::*;
use crate::{SymbolTableBuilder, TypeSymbol};
use pretty_assertions::assert_eq;

const MARKER: &str = "Lib.IMarker";

/// `lib` declares the marker interface and an abstract base implementing it.
fn library() -> ModuleSymbol {
    let mut builder = SymbolTableBuilder::new();
    let ns = builder.namespace(builder.global(), "Lib");
    builder.add_type(ns, TypeSymbol::interface("IMarker").with_interface("Lib.IRoot"));
    builder.add_type(ns, TypeSymbol::interface("IRoot"));
    builder.add_type(
        ns,
        TypeSymbol::class("MarkerBase")
            .as_abstract()
            .with_interface(MARKER),
    );
    ModuleSymbol::new("lib", builder.build())
}

fn application() -> ModuleSymbol {
    let mut builder = SymbolTableBuilder::new();
    let ns = builder.namespace(builder.global(), "App");
    builder.add_type(ns, TypeSymbol::class("Derived").with_base("Lib.MarkerBase"));
    builder.add_type(ns, TypeSymbol::class("Plain"));
    builder.add_type(ns, TypeSymbol::class("Orphan").with_base("Missing.Base"));
    builder.add_type(ns, TypeSymbol::class("CycleA").with_base("App.CycleB"));
    builder.add_type(ns, TypeSymbol::class("CycleB").with_base("App.CycleA"));
    ModuleSymbol::new("app", builder.build())
}

fn program() -> CompiledProgram {
    CompiledProgram::new(application())
        .with_unresolved_reference("missing")
        .with_reference(library())
}

#[test]
fn references_keep_program_order() {
    let program = program();
    let refs: Vec<&str> = program.references().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(refs, vec!["missing", "lib"]);
}

#[test]
fn unresolved_reference_is_absent() {
    let program = program();
    let [missing, lib] = program.references() else {
        panic!("expected two references");
    };
    assert!(program.resolve_reference(missing).is_none());
    assert_eq!(program.resolve_reference(lib).unwrap().name, "lib");
    assert_eq!((missing.slot(), lib.slot()), (0, 1));
}

#[test]
fn same_named_references_keep_their_own_modules() {
    let version = |ty: &str| {
        let mut builder = SymbolTableBuilder::new();
        builder.add_type(builder.global(), TypeSymbol::class(ty));
        ModuleSymbol::new("lib", builder.build())
    };
    let program = CompiledProgram::new(ModuleSymbol::new("app", SymbolTableBuilder::new().build()))
        .with_reference(version("FromV1"))
        .with_reference(version("FromV2"));

    let mut walked = Vec::new();
    for module in program.roots() {
        crate::walk_types(&program, module, |ty| walked.push(ty.name().to_owned()));
    }
    assert_eq!(walked, vec!["FromV1", "FromV2"]);
}

#[test]
fn roots_skip_unresolved_references() {
    let program = program();
    let roots: Vec<&str> = program.roots().map(|m| m.name.as_str()).collect();
    assert_eq!(roots, vec!["app", "lib"]);
}

#[test]
fn find_type_searches_all_roots() {
    let program = program();
    let found = program.find_type("Lib.MarkerBase").unwrap();
    assert_eq!(found.module().name, "lib");
    assert_eq!(found.name(), "MarkerBase");
    assert!(program.find_type("Nope").is_none());
}

#[test]
fn base_type_crosses_modules() {
    let program = program();
    let derived = program.find_type("App.Derived").unwrap();
    let base = derived.base_type().unwrap();

    assert_eq!(base.qualified_name(), "Lib.MarkerBase");
    assert_eq!(base.module().name, "lib");
}

#[test]
fn implements_through_base_and_interface_inheritance() {
    let program = program();
    let derived = program.find_type("App.Derived").unwrap();

    assert_eq!(derived.all_interfaces(), vec![MARKER, "Lib.IRoot"]);
    assert!(derived.implements(MARKER));
    assert!(derived.implements("Lib.IRoot"));
    assert!(!program.find_type("App.Plain").unwrap().implements(MARKER));
}

#[test]
fn base_chain_stops_at_unresolvable_base() {
    let program = program();
    let orphan = program.find_type("App.Orphan").unwrap();

    assert!(orphan.base_type().is_none());
    assert_eq!(orphan.base_chain().count(), 1);
}

#[test]
fn base_chain_terminates_on_cycles() {
    let program = program();
    let cycle = program.find_type("App.CycleA").unwrap();
    let chain: Vec<&str> = cycle.base_chain().map(|t| t.name()).collect();

    assert_eq!(chain, vec!["CycleA", "CycleB"]);
}

#[test]
fn type_ref_rejects_namespaces() {
    let program = program();
    let module = program.assembly();
    assert!(TypeRef::new(&program, module, module.table.global_namespace()).is_none());
}
