//! The compiled program: a primary module plus its module references.
//!
//! A [`CompiledProgram`] owns one [`ModuleSymbol`] for itself and an ordered
//! list of [`ModuleReference`]s. A reference may or may not resolve to a
//! loaded module; unresolved references simply contribute no symbols.
//!
//! [`TypeRef`] is the handle handed to classifiers and descriptor factories.
//! It borrows the program, so base types declared in other modules can be
//! followed without any global state.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::{SymbolId, SymbolTable, TypeSymbol};

/// One module: the primary program or a referenced library.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleSymbol {
    pub name: String,
    pub table: SymbolTable,
}

impl ModuleSymbol {
    pub fn new(name: impl Into<String>, table: SymbolTable) -> Self {
        ModuleSymbol {
            name: name.into(),
            table,
        }
    }
}

/// A reference from the program to another module.
///
/// Each reference keeps its own slot in the program, so two references to
/// modules with the same name still resolve to their own modules.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleReference {
    pub name: String,
    slot: usize,
}

impl ModuleReference {
    /// Position of this reference in program order.
    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl fmt::Display for ModuleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A read-only compiled program.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompiledProgram {
    assembly: ModuleSymbol,
    references: Vec<ModuleReference>,
    /// Loaded module per reference slot; `None` is unresolved.
    modules: Vec<Option<ModuleSymbol>>,
}

impl CompiledProgram {
    /// Create a program with no references.
    pub fn new(assembly: ModuleSymbol) -> Self {
        CompiledProgram {
            assembly,
            references: Vec::new(),
            modules: Vec::new(),
        }
    }

    /// Add a reference resolved to `module`.
    #[must_use]
    pub fn with_reference(self, module: ModuleSymbol) -> Self {
        let name = module.name.clone();
        self.push_reference(name, Some(module))
    }

    /// Add a reference that does not resolve to any module.
    #[must_use]
    pub fn with_unresolved_reference(self, name: impl Into<String>) -> Self {
        self.push_reference(name.into(), None)
    }

    fn push_reference(mut self, name: String, module: Option<ModuleSymbol>) -> Self {
        let slot = self.references.len();
        self.references.push(ModuleReference { name, slot });
        self.modules.push(module);
        self
    }

    /// The program's own module.
    pub fn assembly(&self) -> &ModuleSymbol {
        &self.assembly
    }

    /// References in program order.
    pub fn references(&self) -> &[ModuleReference] {
        &self.references
    }

    /// The module a reference resolves to, if it was loaded.
    pub fn resolve_reference(&self, reference: &ModuleReference) -> Option<&ModuleSymbol> {
        self.modules.get(reference.slot)?.as_ref()
    }

    /// The primary module followed by every resolved reference, in order.
    pub fn roots(&self) -> impl Iterator<Item = &ModuleSymbol> {
        let references = self.references.iter().filter_map(|reference| {
            let module = self.resolve_reference(reference);
            if module.is_none() {
                tracing::trace!(reference = %reference, "unresolved reference skipped");
            }
            module
        });
        std::iter::once(&self.assembly).chain(references)
    }

    /// Find a type by fully-qualified name, searching [`roots`](Self::roots)
    /// in order.
    pub fn find_type(&self, qualified_name: &str) -> Option<TypeRef<'_>> {
        self.roots()
            .find_map(|module| TypeRef::lookup(self, module, qualified_name))
    }
}

/// Borrowed handle to a named type in a [`CompiledProgram`].
///
/// Carries the type's identity (module and [`SymbolId`]) together with the
/// symbol itself, so consumers can re-inspect it without another lookup.
#[derive(Copy, Clone)]
pub struct TypeRef<'a> {
    program: &'a CompiledProgram,
    module: &'a ModuleSymbol,
    id: SymbolId,
    symbol: &'a TypeSymbol,
}

impl<'a> TypeRef<'a> {
    /// Handle to the type `id` of `module`, `None` if `id` is not a type.
    pub fn new(program: &'a CompiledProgram, module: &'a ModuleSymbol, id: SymbolId) -> Option<Self> {
        let symbol = module.table.type_symbol(id)?;
        Some(TypeRef {
            program,
            module,
            id,
            symbol,
        })
    }

    fn lookup(
        program: &'a CompiledProgram,
        module: &'a ModuleSymbol,
        qualified_name: &str,
    ) -> Option<Self> {
        let id = module.table.find_type(qualified_name)?;
        Self::new(program, module, id)
    }

    pub fn symbol(&self) -> &'a TypeSymbol {
        self.symbol
    }

    pub fn id(&self) -> SymbolId {
        self.id
    }

    pub fn module(&self) -> &'a ModuleSymbol {
        self.module
    }

    pub fn program(&self) -> &'a CompiledProgram {
        self.program
    }

    pub fn name(&self) -> &'a str {
        &self.symbol.name
    }

    pub fn qualified_name(&self) -> &'a str {
        &self.symbol.qualified_name
    }

    /// Resolve a type name as seen from this type: own module first, then
    /// the rest of the program.
    pub fn resolve(&self, qualified_name: &str) -> Option<TypeRef<'a>> {
        Self::lookup(self.program, self.module, qualified_name)
            .or_else(|| self.program.find_type(qualified_name))
    }

    /// The base class, if declared and resolvable.
    pub fn base_type(&self) -> Option<TypeRef<'a>> {
        self.symbol
            .base_type
            .as_deref()
            .and_then(|name| self.resolve(name))
    }

    /// This type followed by each resolvable base class, most-derived first.
    ///
    /// Stops at the first unresolvable base and never revisits a type, so a
    /// cyclic hierarchy terminates.
    pub fn base_chain(&self) -> BaseChain<'a> {
        BaseChain {
            next: Some(*self),
            seen: FxHashSet::default(),
        }
    }

    /// Fully-qualified names of every interface this type implements,
    /// directly, through base classes, or through interface inheritance.
    ///
    /// Interfaces that cannot be resolved are still reported by name, but
    /// their own base interfaces are unknown.
    pub fn all_interfaces(&self) -> Vec<&'a str> {
        let mut found: Vec<&'a str> = Vec::new();
        let mut pending: Vec<&'a str> = Vec::new();

        for ty in self.base_chain() {
            pending.extend(ty.symbol.interfaces.iter().rev().map(String::as_str));
            while let Some(name) = pending.pop() {
                if found.contains(&name) {
                    continue;
                }
                found.push(name);
                if let Some(iface) = ty.resolve(name) {
                    pending.extend(iface.symbol.interfaces.iter().rev().map(String::as_str));
                }
            }
        }

        found
    }

    /// Check whether this type implements `interface` (fully-qualified).
    pub fn implements(&self, interface: &str) -> bool {
        self.all_interfaces().contains(&interface)
    }
}

impl PartialEq for TypeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.module, other.module) && self.id == other.id
    }
}

impl Eq for TypeRef<'_> {}

impl fmt::Debug for TypeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef({}::{})", self.module.name, self.symbol.qualified_name)
    }
}

/// Iterator returned by [`TypeRef::base_chain`].
pub struct BaseChain<'a> {
    next: Option<TypeRef<'a>>,
    seen: FxHashSet<(*const ModuleSymbol, SymbolId)>,
}

impl<'a> Iterator for BaseChain<'a> {
    type Item = TypeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !self
            .seen
            .insert((std::ptr::from_ref(current.module), current.id))
        {
            return None;
        }
        self.next = current.base_type();
        Some(current)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
