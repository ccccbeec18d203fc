//! Descriptors produced by resolution.
//!
//! Every discovered capability becomes one [`Descriptor`]. Both kinds share
//! one enum so a resolution result is a single homogeneous sequence.
//! Descriptors own all their data; nothing points back into the symbol graph.

use std::fmt;

use smallvec::SmallVec;

/// Discriminant of a [`Descriptor`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DescriptorKind {
    /// A tag helper binding to HTML elements.
    ElementBindable,
    /// A view component invoked as `<vc:name>`.
    ViewComponent,
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorKind::ElementBindable => write!(f, "element-bindable"),
            DescriptorKind::ViewComponent => write!(f, "view-component"),
        }
    }
}

/// How a target element may be written.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagStructure {
    #[default]
    Unspecified,
    NormalOrSelfClosing,
    WithoutEndTag,
}

/// An HTML attribute bound to a property or parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundAttributeDescriptor {
    /// HTML attribute name (kebab-case unless overridden).
    pub name: String,
    /// Property or parameter the attribute binds to.
    pub property_name: String,
    pub type_name: String,
    /// Only populated at design time.
    pub documentation: Option<String>,
}

/// Metadata for one element a tag helper targets.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagHelperDescriptor {
    /// Fully-qualified type name.
    pub type_name: String,
    /// Module that declares the type.
    pub assembly_name: String,
    /// Target element, or `*` for every element.
    pub tag_name: String,
    /// Attributes the element must carry for the helper to apply.
    pub required_attributes: SmallVec<[String; 2]>,
    pub parent_tag: Option<String>,
    pub tag_structure: TagStructure,
    pub attributes: Vec<BoundAttributeDescriptor>,
    /// Only populated at design time.
    pub output_element_hint: Option<String>,
    /// Only populated at design time.
    pub documentation: Option<String>,
}

/// Metadata for a view component.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewComponentDescriptor {
    /// Fully-qualified type name.
    pub type_name: String,
    /// Module that declares the type.
    pub assembly_name: String,
    /// Component name used to invoke it from code.
    pub component_name: String,
    /// Element name, `vc:` followed by the kebab-cased short name.
    pub tag_name: String,
    /// `Invoke` or `InvokeAsync`.
    pub invoke_method: String,
    /// One attribute per invoke parameter.
    pub attributes: Vec<BoundAttributeDescriptor>,
}

/// Tooling-facing record for one discovered capability.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Descriptor {
    ElementBindable(TagHelperDescriptor),
    ViewComponent(ViewComponentDescriptor),
}

impl Descriptor {
    pub fn kind(&self) -> DescriptorKind {
        match self {
            Descriptor::ElementBindable(_) => DescriptorKind::ElementBindable,
            Descriptor::ViewComponent(_) => DescriptorKind::ViewComponent,
        }
    }

    /// Fully-qualified name of the type the descriptor was extracted from.
    pub fn name(&self) -> &str {
        match self {
            Descriptor::ElementBindable(d) => &d.type_name,
            Descriptor::ViewComponent(d) => &d.type_name,
        }
    }

    /// Element name the descriptor binds to.
    pub fn tag_name(&self) -> &str {
        match self {
            Descriptor::ElementBindable(d) => &d.tag_name,
            Descriptor::ViewComponent(d) => &d.tag_name,
        }
    }

    pub fn assembly_name(&self) -> &str {
        match self {
            Descriptor::ElementBindable(d) => &d.assembly_name,
            Descriptor::ViewComponent(d) => &d.assembly_name,
        }
    }

    pub fn attributes(&self) -> &[BoundAttributeDescriptor] {
        match self {
            Descriptor::ElementBindable(d) => &d.attributes,
            Descriptor::ViewComponent(d) => &d.attributes,
        }
    }

    pub fn as_tag_helper(&self) -> Option<&TagHelperDescriptor> {
        match self {
            Descriptor::ElementBindable(d) => Some(d),
            Descriptor::ViewComponent(_) => None,
        }
    }

    pub fn as_view_component(&self) -> Option<&ViewComponentDescriptor> {
        match self {
            Descriptor::ViewComponent(d) => Some(d),
            Descriptor::ElementBindable(_) => None,
        }
    }
}

impl From<TagHelperDescriptor> for Descriptor {
    fn from(descriptor: TagHelperDescriptor) -> Self {
        Descriptor::ElementBindable(descriptor)
    }
}

impl From<ViewComponentDescriptor> for Descriptor {
    fn from(descriptor: ViewComponentDescriptor) -> Self {
        Descriptor::ViewComponent(descriptor)
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> ({})", self.kind(), self.tag_name(), self.name())
    }
}

#[cfg(test)]
mod tests;
