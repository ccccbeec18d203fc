#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end resolution with the default conventions.
//!
//! The fixture mirrors a small web app:
//! 1. `framework` declares the tag helper base types
//! 2. `app` is the primary module with tag helpers and view components
//! 3. `widgets` is a referenced library with more of both
//! 4. `missing` is a reference with no symbol table

use pretty_assertions::assert_eq;
use weft_diagnostic::{ErrorCode, ErrorSink};
use weft_resolve::{conventions::well_known, DescriptorKind, Resolver, ResolverConfig};
use weft_symbols::{
    AttributeData, CompiledProgram, MethodSymbol, ModuleSymbol, PropertySymbol,
    SymbolTableBuilder, TypeSymbol,
};

const TAG_HELPER_BASE: &str = "Microsoft.AspNetCore.Razor.TagHelpers.TagHelper";

fn framework() -> ModuleSymbol {
    let mut builder = SymbolTableBuilder::new();
    let ns = builder.namespace(builder.global(), "Microsoft.AspNetCore.Razor.TagHelpers");
    builder.add_type(ns, TypeSymbol::interface("ITagHelper"));
    builder.add_type(
        ns,
        TypeSymbol::class("TagHelper")
            .as_abstract()
            .with_interface(well_known::TAG_HELPER_INTERFACE),
    );
    ModuleSymbol::new("framework", builder.build())
}

fn view_component(name: &str) -> TypeSymbol {
    TypeSymbol::class(name).with_method(MethodSymbol::new("Invoke", "IViewComponentResult"))
}

fn app() -> ModuleSymbol {
    let mut builder = SymbolTableBuilder::new();
    let ns = builder.namespace(builder.global(), "Shop.Web");
    builder.add_type(ns, view_component("CartViewComponent"));
    builder.add_type(
        ns,
        TypeSymbol::class("PriceTagHelper")
            .with_base(TAG_HELPER_BASE)
            .with_property(PropertySymbol::new("Amount", "decimal")),
    );
    // No Invoke method: extraction fails and is reported.
    builder.add_type(ns, TypeSymbol::class("BrokenViewComponent"));
    builder.add_type(ns, view_component("FooterViewComponent"));
    builder.add_type(ns, TypeSymbol::class("HomeController"));
    ModuleSymbol::new("app", builder.build())
}

fn widgets() -> ModuleSymbol {
    let mut builder = SymbolTableBuilder::new();
    let ns = builder.namespace(builder.global(), "Widgets");
    builder.add_type(
        ns,
        TypeSymbol::class("ButtonTagHelper")
            .with_base(TAG_HELPER_BASE)
            .with_attribute(
                AttributeData::new(well_known::HTML_TARGET_ELEMENT).with_arg("button"),
            )
            .with_attribute(AttributeData::new(well_known::HTML_TARGET_ELEMENT).with_arg("a")),
    );
    builder.add_type(ns, view_component("RatingViewComponent"));
    ModuleSymbol::new("widgets", builder.build())
}

fn program() -> CompiledProgram {
    CompiledProgram::new(app())
        .with_reference(framework())
        .with_unresolved_reference("missing")
        .with_reference(widgets())
}

fn resolve(program: &CompiledProgram) -> (Vec<weft_resolve::Descriptor>, ErrorSink) {
    weft_resolve::init_tracing();
    let resolver = Resolver::with_default_conventions(&ResolverConfig::default());
    let mut sink = ErrorSink::new();
    let descriptors = resolver.resolve(program, &mut sink).unwrap();
    (descriptors, sink)
}

fn summary(descriptors: &[weft_resolve::Descriptor]) -> Vec<(DescriptorKind, &str)> {
    descriptors
        .iter()
        .map(|d| (d.kind(), d.tag_name()))
        .collect()
}

#[test]
fn resolves_primary_then_references_grouped_by_kind() {
    let (descriptors, _) = resolve(&program());

    assert_eq!(
        summary(&descriptors),
        vec![
            (DescriptorKind::ElementBindable, "price"),
            (DescriptorKind::ElementBindable, "button"),
            (DescriptorKind::ElementBindable, "a"),
            (DescriptorKind::ViewComponent, "vc:cart"),
            (DescriptorKind::ViewComponent, "vc:footer"),
            (DescriptorKind::ViewComponent, "vc:rating"),
        ]
    );
    assert_eq!(descriptors[1].assembly_name(), "widgets");
}

#[test]
fn failing_view_component_is_reported_without_disturbing_others() {
    let (descriptors, sink) = resolve(&program());

    assert_eq!(sink.len(), 1);
    let diagnostic = &sink.diagnostics()[0];
    assert_eq!(diagnostic.code, ErrorCode::E0200);
    assert_eq!(diagnostic.location(), 0);
    assert_eq!(diagnostic.length(), 0);
    assert_eq!(
        diagnostic.message,
        "Could not find an 'Invoke' or 'InvokeAsync' method for the view component 'Shop.Web.BrokenViewComponent'."
    );
    assert!(descriptors
        .iter()
        .all(|d| d.name() != "Shop.Web.BrokenViewComponent"));
}

#[test]
fn repeated_resolution_is_identical() {
    let program = program();

    let (first, first_sink) = resolve(&program);
    let (second, second_sink) = resolve(&program);

    assert_eq!(first, second);
    assert_eq!(first_sink, second_sink);
}

#[test]
fn unresolved_reference_contributes_nothing() {
    let without = CompiledProgram::new(app())
        .with_reference(framework())
        .with_reference(widgets());

    let (with_missing, with_sink) = resolve(&program());
    let (without_missing, without_sink) = resolve(&without);

    assert_eq!(with_missing, without_missing);
    assert_eq!(with_sink, without_sink);
}

#[test]
fn empty_program_yields_nothing() {
    let program = CompiledProgram::new(ModuleSymbol::new(
        "empty",
        SymbolTableBuilder::new().build(),
    ));

    let (descriptors, sink) = resolve(&program);

    assert!(descriptors.is_empty());
    assert!(sink.is_empty());
}

#[test]
fn reference_order_decides_descriptor_order() {
    let swapped = CompiledProgram::new(ModuleSymbol::new(
        "empty",
        SymbolTableBuilder::new().build(),
    ))
    .with_reference(widgets())
    .with_reference(framework())
    .with_reference(app());

    let (descriptors, _) = resolve(&swapped);
    let tags: Vec<&str> = descriptors.iter().map(|d| d.tag_name()).collect();

    assert_eq!(
        tags,
        vec!["button", "a", "price", "vc:rating", "vc:cart", "vc:footer"]
    );
}
