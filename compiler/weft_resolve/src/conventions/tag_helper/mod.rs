//! Tag helper convention and descriptor extraction.
//!
//! A tag helper is a public, concrete, non-generic class implementing the
//! tag helper marker interface, directly or through a base class. Each
//! `HtmlTargetElement` attribute on it yields one descriptor; without one, the
//! element name comes from the class name.

use smallvec::SmallVec;
use weft_diagnostic::{Diagnostic, ErrorCode, ErrorSink, Span};
use weft_symbols::{PropertySymbol, TypeRef};

use super::{is_public_concrete_class, to_html_case, well_known};
use crate::{
    BoundAttributeDescriptor, Classifier, Descriptor, ElementBindableFactory, ExtractError,
    TagHelperDescriptor, TagStructure,
};

/// Characters that may not appear in a target element name.
const INVALID_TAG_NAME_CHARS: &[char] = &['!', '@', '=', '<', '>', '?', '\'', '"', '\\', '/'];

/// Prefix reserved for data attributes; bound attributes may not use it.
const DATA_DASH_PREFIX: &str = "data-";

/// Classifies tag helpers by the marker interface they implement.
#[derive(Clone, Debug)]
pub struct TagHelperConvention {
    interface: String,
}

impl TagHelperConvention {
    pub fn new(interface: impl Into<String>) -> Self {
        TagHelperConvention {
            interface: interface.into(),
        }
    }
}

impl Default for TagHelperConvention {
    fn default() -> Self {
        Self::new(well_known::TAG_HELPER_INTERFACE)
    }
}

impl Classifier for TagHelperConvention {
    fn is_candidate(&self, ty: TypeRef<'_>) -> bool {
        is_public_concrete_class(ty) && ty.implements(&self.interface)
    }
}

/// Builds tag helper descriptors, reporting invalid names to the sink.
#[derive(Clone, Debug, Default)]
pub struct TagHelperFactory {
    design_time: bool,
}

impl TagHelperFactory {
    pub fn new(design_time: bool) -> Self {
        TagHelperFactory { design_time }
    }

    fn bound_attributes(
        &self,
        ty: TypeRef<'_>,
        sink: &mut ErrorSink,
    ) -> Vec<BoundAttributeDescriptor> {
        let span = ty.symbol().span;
        let mut seen: Vec<&str> = Vec::new();
        let mut attributes = Vec::new();

        // Most-derived declarations hide base declarations of the same name.
        for owner in ty.base_chain() {
            for property in owner.symbol().properties() {
                if seen.contains(&property.name.as_str()) {
                    continue;
                }
                seen.push(&property.name);

                if !property.is_publicly_settable()
                    || property.attribute(well_known::HTML_ATTRIBUTE_NOT_BOUND).is_some()
                    || (self.design_time && is_hidden_from_editor(property))
                {
                    continue;
                }

                if let Some(name) = attribute_name(ty, property, span, sink) {
                    attributes.push(BoundAttributeDescriptor {
                        name,
                        property_name: property.name.clone(),
                        type_name: property.type_name.clone(),
                        documentation: self.documentation(property.documentation.as_deref()),
                    });
                }
            }
        }

        attributes
    }

    fn documentation(&self, doc: Option<&str>) -> Option<String> {
        if self.design_time {
            doc.map(str::to_owned)
        } else {
            None
        }
    }
}

impl ElementBindableFactory for TagHelperFactory {
    #[tracing::instrument(level = "trace", skip_all, fields(ty = %ty.qualified_name()))]
    fn create_descriptors(
        &self,
        ty: TypeRef<'_>,
        sink: &mut ErrorSink,
    ) -> Result<Vec<Descriptor>, ExtractError> {
        let symbol = ty.symbol();
        if !symbol.is_class() {
            return Err(ExtractError::NotAClass {
                type_name: ty.qualified_name().to_owned(),
            });
        }

        let targets = target_elements(ty);
        let attributes = self.bound_attributes(ty, sink);
        let output_element_hint = if self.design_time {
            symbol
                .attribute(well_known::OUTPUT_ELEMENT_HINT)
                .and_then(|a| a.arg(0))
                .map(str::to_owned)
        } else {
            None
        };

        let mut descriptors = Vec::with_capacity(targets.len());
        for target in targets {
            if !validate_tag_name(&target.tag_name, ty, sink) {
                continue;
            }
            descriptors.push(Descriptor::from(TagHelperDescriptor {
                type_name: ty.qualified_name().to_owned(),
                assembly_name: ty.module().name.clone(),
                tag_name: target.tag_name,
                required_attributes: target.required_attributes,
                parent_tag: target.parent_tag,
                tag_structure: target.tag_structure,
                attributes: attributes.clone(),
                output_element_hint: output_element_hint.clone(),
                documentation: self.documentation(symbol.documentation.as_deref()),
            }));
        }

        Ok(descriptors)
    }
}

/// One element target before validation.
struct TargetElement {
    tag_name: String,
    required_attributes: SmallVec<[String; 2]>,
    parent_tag: Option<String>,
    tag_structure: TagStructure,
}

fn target_elements(ty: TypeRef<'_>) -> Vec<TargetElement> {
    let symbol = ty.symbol();
    let targets: Vec<TargetElement> = symbol
        .attributes_named(well_known::HTML_TARGET_ELEMENT)
        .map(|attr| TargetElement {
            tag_name: attr
                .arg(0)
                .unwrap_or(well_known::CATCH_ALL_TAG)
                .trim()
                .to_owned(),
            required_attributes: attr
                .named_arg(well_known::target_element::ATTRIBUTES)
                .map(split_required_attributes)
                .unwrap_or_default(),
            parent_tag: attr
                .named_arg(well_known::target_element::PARENT_TAG)
                .map(str::to_owned),
            tag_structure: attr
                .named_arg(well_known::target_element::TAG_STRUCTURE)
                .map_or(TagStructure::Unspecified, parse_tag_structure),
        })
        .collect();

    if !targets.is_empty() {
        return targets;
    }

    let short = symbol
        .name
        .strip_suffix(well_known::TAG_HELPER_SUFFIX)
        .unwrap_or(&symbol.name);
    vec![TargetElement {
        tag_name: to_html_case(short),
        required_attributes: SmallVec::new(),
        parent_tag: None,
        tag_structure: TagStructure::Unspecified,
    }]
}

fn split_required_attributes(list: &str) -> SmallVec<[String; 2]> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_tag_structure(value: &str) -> TagStructure {
    match value.rsplit('.').next().unwrap_or(value) {
        "NormalOrSelfClosing" => TagStructure::NormalOrSelfClosing,
        "WithoutEndTag" => TagStructure::WithoutEndTag,
        _ => TagStructure::Unspecified,
    }
}

/// Returns `false` and reports a diagnostic if `name` cannot be a tag name.
fn validate_tag_name(name: &str, ty: TypeRef<'_>, sink: &mut ErrorSink) -> bool {
    let span = ty.symbol().span;

    if name.trim().is_empty() {
        sink.on_error(
            ErrorCode::E0201,
            span,
            format!(
                "Tag name cannot be null or whitespace. Found on tag helper '{}'.",
                ty.qualified_name()
            ),
        );
        return false;
    }

    if name == well_known::CATCH_ALL_TAG {
        return true;
    }

    if let Some(bad) = name
        .chars()
        .find(|c| c.is_whitespace() || INVALID_TAG_NAME_CHARS.contains(c))
    {
        sink.on_error(
            ErrorCode::E0202,
            span,
            format!(
                "Invalid tag helper target element name '{name}'. '{}' is not allowed in tag names.",
                bad.escape_default()
            ),
        );
        return false;
    }

    true
}

fn attribute_name(
    ty: TypeRef<'_>,
    property: &PropertySymbol,
    span: Span,
    sink: &mut ErrorSink,
) -> Option<String> {
    let name = match property.attribute(well_known::HTML_ATTRIBUTE_NAME) {
        Some(attr) => {
            let name = attr.arg(0).unwrap_or_default().trim();
            if name.is_empty() {
                sink.push(
                    Diagnostic::error(ErrorCode::E0203)
                        .with_message(format!(
                            "Invalid tag helper bound property '{}.{}'. HTML attribute name cannot be null or whitespace.",
                            ty.qualified_name(),
                            property.name
                        ))
                        .with_span(span),
                );
                return None;
            }
            name.to_owned()
        }
        None => to_html_case(&property.name),
    };

    if name.to_ascii_lowercase().starts_with(DATA_DASH_PREFIX) {
        sink.push(
            Diagnostic::error(ErrorCode::E0204)
                .with_message(format!(
                    "Invalid tag helper bound property '{}.{}' with HTML attribute name '{name}'. HTML attribute names cannot start with '{DATA_DASH_PREFIX}'.",
                    ty.qualified_name(),
                    property.name
                ))
                .with_span(span),
        );
        return None;
    }

    Some(name)
}

fn is_hidden_from_editor(property: &PropertySymbol) -> bool {
    property
        .attribute(well_known::EDITOR_BROWSABLE)
        .and_then(|a| a.arg(0))
        .is_some_and(|state| state.rsplit('.').next() == Some("Never"))
}
