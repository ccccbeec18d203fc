//! View component convention and descriptor extraction.
//!
//! A view component is a public, concrete, non-generic class whose name ends
//! in `ViewComponent` or that carries the `ViewComponent` attribute, directly
//! or through a base class. `NonViewComponent` anywhere in the base chain
//! opts it out. Each view component maps to a `vc:` element whose attributes
//! are the parameters of its single `Invoke`/`InvokeAsync` method.

use weft_symbols::{MethodSymbol, TypeRef};

use super::{is_public_concrete_class, to_html_case, well_known};
use crate::{
    BoundAttributeDescriptor, Classifier, Descriptor, ExtractError, ViewComponentDescriptor,
    ViewComponentFactory,
};

/// Classifies view components by name suffix or marker attribute.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewComponentConvention;

impl Classifier for ViewComponentConvention {
    fn is_candidate(&self, ty: TypeRef<'_>) -> bool {
        if !is_public_concrete_class(ty)
            || has_inherited_attribute(ty, well_known::NON_VIEW_COMPONENT_ATTRIBUTE)
        {
            return false;
        }
        strip_suffix_ignore_case(ty.name(), well_known::VIEW_COMPONENT_SUFFIX).is_some()
            || has_inherited_attribute(ty, well_known::VIEW_COMPONENT_ATTRIBUTE)
    }
}

/// Builds one `vc:` descriptor per view component.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewComponentTagHelperFactory;

impl ViewComponentFactory for ViewComponentTagHelperFactory {
    #[tracing::instrument(level = "trace", skip_all, fields(ty = %ty.qualified_name()))]
    fn create_descriptor(&self, ty: TypeRef<'_>) -> Result<Descriptor, ExtractError> {
        let type_name = ty.qualified_name();
        if !ty.symbol().is_class() {
            return Err(ExtractError::NotAClass {
                type_name: type_name.to_owned(),
            });
        }

        let method = find_invoke_method(ty)?;
        let component_name = component_name(ty);
        let short_name = component_name
            .rsplit('.')
            .next()
            .unwrap_or(&component_name);
        let tag_name = format!(
            "{}{}",
            well_known::VIEW_COMPONENT_TAG_PREFIX,
            to_html_case(short_name)
        );

        let attributes = method
            .parameters
            .iter()
            .map(|param| BoundAttributeDescriptor {
                name: to_html_case(&param.name),
                property_name: param.name.clone(),
                type_name: param.type_name.clone(),
                documentation: None,
            })
            .collect();

        Ok(Descriptor::from(ViewComponentDescriptor {
            type_name: type_name.to_owned(),
            assembly_name: ty.module().name.clone(),
            tag_name,
            component_name,
            invoke_method: method.name.clone(),
            attributes,
        }))
    }
}

/// Name from the first `ViewComponent(Name = ...)` in the base chain, else
/// the type name without its suffix.
fn component_name(ty: TypeRef<'_>) -> String {
    let explicit = ty.base_chain().find_map(|owner| {
        owner
            .symbol()
            .attribute(well_known::VIEW_COMPONENT_ATTRIBUTE)
            .and_then(|attr| attr.named_arg("Name"))
            .filter(|name| !name.trim().is_empty())
    });
    if let Some(name) = explicit {
        return name.to_owned();
    }

    let name = ty.name();
    strip_suffix_ignore_case(name, well_known::VIEW_COMPONENT_SUFFIX)
        .unwrap_or(name)
        .to_owned()
}

/// The single public instance `Invoke` or `InvokeAsync` method, checked for
/// a usable signature.
fn find_invoke_method<'a>(ty: TypeRef<'a>) -> Result<&'a MethodSymbol, ExtractError> {
    let type_name = ty.qualified_name();
    let mut candidates: Vec<&'a MethodSymbol> = Vec::new();

    // Overrides in derived types hide the base declaration.
    for owner in ty.base_chain() {
        for method in owner.symbol().methods() {
            let is_invoke = method.name == well_known::INVOKE || method.name == well_known::INVOKE_ASYNC;
            if !is_invoke || method.is_static || !method.accessibility.is_public() {
                continue;
            }
            if candidates.iter().any(|seen| same_signature(seen, method)) {
                continue;
            }
            candidates.push(method);
        }
    }

    let method = match candidates.as_slice() {
        [] => {
            return Err(ExtractError::MissingInvoke {
                type_name: type_name.to_owned(),
            })
        }
        [method] => *method,
        _ => {
            return Err(ExtractError::AmbiguousInvoke {
                type_name: type_name.to_owned(),
            })
        }
    };

    if method.is_generic() {
        return Err(ExtractError::GenericInvoke {
            type_name: type_name.to_owned(),
            method: method.name.clone(),
        });
    }

    let returns_task = is_task(&method.return_type);
    if method.name == well_known::INVOKE_ASYNC && !returns_task {
        return Err(ExtractError::AsyncResultType {
            type_name: type_name.to_owned(),
            method: method.name.clone(),
        });
    }
    if method.name == well_known::INVOKE && (returns_task || is_void(&method.return_type)) {
        return Err(ExtractError::SyncResultType {
            type_name: type_name.to_owned(),
            method: method.name.clone(),
        });
    }

    Ok(method)
}

fn same_signature(a: &MethodSymbol, b: &MethodSymbol) -> bool {
    a.name == b.name
        && a.parameters.len() == b.parameters.len()
        && a.parameters
            .iter()
            .zip(&b.parameters)
            .all(|(x, y)| x.type_name == y.type_name)
}

fn has_inherited_attribute(ty: TypeRef<'_>, attribute: &str) -> bool {
    ty.base_chain()
        .any(|owner| owner.symbol().attribute(attribute).is_some())
}

/// `Task`, `Task<T>`, with or without the namespace.
fn is_task(type_name: &str) -> bool {
    let head = type_name.split('<').next().unwrap_or(type_name).trim();
    head == well_known::TASK || head == "Task"
}

fn is_void(type_name: &str) -> bool {
    type_name == well_known::VOID || type_name == "void"
}

fn strip_suffix_ignore_case<'s>(name: &'s str, suffix: &str) -> Option<&'s str> {
    let split = name.len().checked_sub(suffix.len())?;
    let tail = name.get(split..)?;
    tail.eq_ignore_ascii_case(suffix)
        .then(|| name.get(..split))
        .flatten()
}
