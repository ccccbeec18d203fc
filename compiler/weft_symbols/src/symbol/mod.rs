//! Symbols stored in a [`SymbolTable`](crate::SymbolTable).
//!
//! A symbol is either a namespace or a named type. Types carry just enough
//! structure for convention-based classification: accessibility, generics,
//! base type, interfaces, attributes, and public members.
//!
//! Type and member symbols are built with `with_*` methods and then handed to
//! a [`SymbolTableBuilder`](crate::SymbolTableBuilder), which assigns their
//! identity (`SymbolId`, qualified name).

use std::fmt;

use weft_diagnostic::Span;

/// Index of a symbol within its owning table.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct SymbolId(u32);

impl SymbolId {
    /// The global namespace of every table.
    pub const GLOBAL: SymbolId = SymbolId(0);

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        SymbolId(raw)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

/// A namespace or a named type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    Namespace(NamespaceSymbol),
    Type(TypeSymbol),
}

impl Symbol {
    /// Simple (unqualified) name.
    pub fn name(&self) -> &str {
        match self {
            Symbol::Namespace(ns) => &ns.name,
            Symbol::Type(ty) => &ty.name,
        }
    }

    /// Directly contained symbols in declaration order.
    pub fn children(&self) -> &[SymbolId] {
        match self {
            Symbol::Namespace(ns) => &ns.members,
            Symbol::Type(ty) => &ty.nested,
        }
    }

    pub fn as_type(&self) -> Option<&TypeSymbol> {
        match self {
            Symbol::Type(ty) => Some(ty),
            Symbol::Namespace(_) => None,
        }
    }
}

/// A namespace and its members.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamespaceSymbol {
    /// Simple name; empty for the global namespace.
    pub name: String,
    /// Fully-qualified, dot-separated name; empty for the global namespace.
    pub qualified_name: String,
    /// Child namespaces and types in declaration order.
    pub members: Vec<SymbolId>,
}

/// The kind of a named type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Enum,
}

/// Declared accessibility of a type or member.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Accessibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

impl Accessibility {
    pub fn is_public(self) -> bool {
        matches!(self, Accessibility::Public)
    }
}

/// An attribute applied to a type or member.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeData {
    /// Fully-qualified attribute type name.
    pub name: String,
    /// Positional constructor arguments, rendered as strings.
    pub positional: Vec<String>,
    /// Named arguments, in source order.
    pub named: Vec<(String, String)>,
}

impl AttributeData {
    pub fn new(name: impl Into<String>) -> Self {
        AttributeData {
            name: name.into(),
            positional: Vec::new(),
            named: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_arg(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    #[must_use]
    pub fn with_named(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.named.push((key.into(), value.into()));
        self
    }

    /// Positional argument at `index`.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// Named argument `key`. The last assignment wins.
    pub fn named_arg(&self, key: &str) -> Option<&str> {
        self.named
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A method parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSymbol {
    pub name: String,
    pub type_name: String,
}

/// A property declared on a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertySymbol {
    pub name: String,
    pub type_name: String,
    pub accessibility: Accessibility,
    pub is_static: bool,
    /// Accessibility of the setter; `None` for get-only properties.
    pub setter: Option<Accessibility>,
    pub attributes: Vec<AttributeData>,
    pub documentation: Option<String>,
}

impl PropertySymbol {
    /// A public instance property with a public setter.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        PropertySymbol {
            name: name.into(),
            type_name: type_name.into(),
            accessibility: Accessibility::Public,
            is_static: false,
            setter: Some(Accessibility::Public),
            attributes: Vec::new(),
            documentation: None,
        }
    }

    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.setter = None;
        self
    }

    #[must_use]
    pub fn with_setter(mut self, accessibility: Accessibility) -> Self {
        self.setter = Some(accessibility);
        self
    }

    #[must_use]
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    #[must_use]
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeData) -> Self {
        self.attributes.push(attribute);
        self
    }

    #[must_use]
    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeData> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Public instance property that can be assigned from outside.
    pub fn is_publicly_settable(&self) -> bool {
        self.accessibility.is_public()
            && !self.is_static
            && self.setter.is_some_and(Accessibility::is_public)
    }
}

/// A method declared on a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodSymbol {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<ParameterSymbol>,
    pub type_params: Vec<String>,
    pub accessibility: Accessibility,
    pub is_static: bool,
}

impl MethodSymbol {
    /// A public instance method.
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        MethodSymbol {
            name: name.into(),
            return_type: return_type.into(),
            parameters: Vec::new(),
            type_params: Vec::new(),
            accessibility: Accessibility::Public,
            is_static: false,
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.parameters.push(ParameterSymbol {
            name: name.into(),
            type_name: type_name.into(),
        });
        self
    }

    #[must_use]
    pub fn with_type_param(mut self, name: impl Into<String>) -> Self {
        self.type_params.push(name.into());
        self
    }

    #[must_use]
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    #[must_use]
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }
}

/// A member of a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemberSymbol {
    Property(PropertySymbol),
    Method(MethodSymbol),
}

/// A named type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeSymbol {
    /// Simple name.
    pub name: String,
    /// Fully-qualified name, assigned when the type is added to a table.
    pub qualified_name: String,
    pub kind: TypeKind,
    pub accessibility: Accessibility,
    pub is_abstract: bool,
    /// Generic type parameters (e.g., `T` in `Foo<T>`).
    pub type_params: Vec<String>,
    /// Fully-qualified name of the base class, if any.
    pub base_type: Option<String>,
    /// Fully-qualified names of directly implemented interfaces.
    pub interfaces: Vec<String>,
    pub attributes: Vec<AttributeData>,
    /// Members in declaration order.
    pub members: Vec<MemberSymbol>,
    pub documentation: Option<String>,
    /// Location of the declaration in its source document.
    pub span: Span,
    /// Nested types in declaration order, assigned by the table builder.
    pub nested: Vec<SymbolId>,
}

impl TypeSymbol {
    fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        TypeSymbol {
            name: name.into(),
            qualified_name: String::new(),
            kind,
            accessibility: Accessibility::Public,
            is_abstract: false,
            type_params: Vec::new(),
            base_type: None,
            interfaces: Vec::new(),
            attributes: Vec::new(),
            members: Vec::new(),
            documentation: None,
            span: Span::ZERO,
            nested: Vec::new(),
        }
    }

    /// A public, concrete, non-generic class.
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    /// A public interface.
    pub fn interface(name: impl Into<String>) -> Self {
        let mut ty = Self::new(name, TypeKind::Interface);
        ty.is_abstract = true;
        ty
    }

    /// A public struct.
    pub fn structure(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Struct)
    }

    /// A public enum.
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Enum)
    }

    #[must_use]
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    #[must_use]
    pub fn as_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    #[must_use]
    pub fn with_type_param(mut self, name: impl Into<String>) -> Self {
        self.type_params.push(name.into());
        self
    }

    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base_type = Some(base.into());
        self
    }

    #[must_use]
    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeData) -> Self {
        self.attributes.push(attribute);
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: PropertySymbol) -> Self {
        self.members.push(MemberSymbol::Property(property));
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: MethodSymbol) -> Self {
        self.members.push(MemberSymbol::Method(method));
        self
    }

    #[must_use]
    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }

    pub fn is_class(&self) -> bool {
        matches!(self.kind, TypeKind::Class)
    }

    /// First attribute of the given fully-qualified name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeData> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// All attributes of the given fully-qualified name, in source order.
    pub fn attributes_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a AttributeData> + 'a {
        self.attributes.iter().filter(move |a| a.name == name)
    }

    /// Properties in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertySymbol> {
        self.members.iter().filter_map(|m| match m {
            MemberSymbol::Property(p) => Some(p),
            MemberSymbol::Method(_) => None,
        })
    }

    /// Methods in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodSymbol> {
        self.members.iter().filter_map(|m| match m {
            MemberSymbol::Method(m) => Some(m),
            MemberSymbol::Property(_) => None,
        })
    }
}
