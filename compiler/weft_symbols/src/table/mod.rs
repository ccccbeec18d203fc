//! Symbol table for one module.
//!
//! # Design
//!
//! - Arena storage: symbols live in one `Vec`, addressed by [`SymbolId`]
//! - Symbol 0 is always the global namespace
//! - `FxHashMap` index from fully-qualified type name to id
//! - Tables are immutable once built and always a tree rooted at the global
//!   namespace. [`SymbolTableBuilder`] produces one by construction;
//!   [`SymbolTable::from_symbols`] (and deserialization, which goes through
//!   it) checks the shape and rebuilds the name index

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{NamespaceSymbol, Symbol, SymbolId, TypeSymbol};

/// Read-only namespace/type graph of one module.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawSymbolTable", into = "RawSymbolTable")
)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    types_by_name: FxHashMap<String, SymbolId>,
}

/// Why a symbol list is not a valid table.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("symbol 0 must be the global namespace")]
    MissingGlobalNamespace,

    #[error("{parent:?} lists {child:?}, which is out of range")]
    OutOfRange { parent: SymbolId, child: SymbolId },

    #[error("{child:?} is listed as a child more than once or is the global namespace")]
    DuplicateParent { child: SymbolId },

    #[error("{id:?} is not reachable from the global namespace")]
    Unreachable { id: SymbolId },
}

impl SymbolTable {
    /// Build a table from symbols already laid out in arena order.
    ///
    /// Symbol 0 must be a namespace, and every other symbol must be listed
    /// as a child exactly once and be reachable from it. The qualified-name
    /// index is rebuilt; as with the builder, the first declaration of a
    /// name wins.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self, TableError> {
        if !matches!(symbols.first(), Some(Symbol::Namespace(_))) {
            return Err(TableError::MissingGlobalNamespace);
        }

        let mut has_parent = vec![false; symbols.len()];
        has_parent[SymbolId::GLOBAL.index()] = true;
        for (parent, symbol) in symbols.iter().enumerate() {
            for &child in symbol.children() {
                let Some(seen) = has_parent.get_mut(child.index()) else {
                    return Err(TableError::OutOfRange {
                        parent: id_at(parent),
                        child,
                    });
                };
                if *seen {
                    return Err(TableError::DuplicateParent { child });
                }
                *seen = true;
            }
        }

        // With one parent per symbol, anything off the root's tree sits on a
        // detached cycle.
        let mut reached = vec![false; symbols.len()];
        let mut pending = vec![SymbolId::GLOBAL];
        while let Some(id) = pending.pop() {
            reached[id.index()] = true;
            pending.extend_from_slice(symbols[id.index()].children());
        }
        if let Some(index) = reached.iter().position(|&r| !r) {
            return Err(TableError::Unreachable { id: id_at(index) });
        }

        let mut types_by_name = FxHashMap::default();
        for (index, symbol) in symbols.iter().enumerate() {
            if let Symbol::Type(ty) = symbol {
                types_by_name
                    .entry(ty.qualified_name.clone())
                    .or_insert(id_at(index));
            }
        }

        Ok(SymbolTable {
            symbols,
            types_by_name,
        })
    }

    /// Id of the global namespace.
    pub fn global_namespace(&self) -> SymbolId {
        SymbolId::GLOBAL
    }

    /// Get a symbol by id.
    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index())
    }

    /// Get a type symbol by id, `None` for namespaces.
    pub fn type_symbol(&self, id: SymbolId) -> Option<&TypeSymbol> {
        self.get(id).and_then(Symbol::as_type)
    }

    /// Look up a type by its fully-qualified name.
    pub fn find_type(&self, qualified_name: &str) -> Option<SymbolId> {
        self.types_by_name.get(qualified_name).copied()
    }

    /// Number of symbols, namespaces included.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Only the global namespace exists.
    pub fn is_empty(&self) -> bool {
        self.symbols.len() <= 1
    }

    /// Number of named types, nested ones included.
    pub fn type_count(&self) -> usize {
        self.types_by_name.len()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTableBuilder::new().build()
    }
}

/// Builder for [`SymbolTable`].
///
/// # Example
///
/// ```text
/// let mut builder = SymbolTableBuilder::new();
/// let ns = builder.namespace(builder.global(), "App.Components");
/// let ty = builder.add_type(ns, TypeSymbol::class("Counter"));
/// let table = builder.build();
/// assert_eq!(table.find_type("App.Components.Counter"), Some(ty));
/// ```
#[derive(Debug)]
pub struct SymbolTableBuilder {
    symbols: Vec<Symbol>,
    types_by_name: FxHashMap<String, SymbolId>,
}

impl Default for SymbolTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTableBuilder {
    /// Create a builder holding only the global namespace.
    pub fn new() -> Self {
        SymbolTableBuilder {
            symbols: vec![Symbol::Namespace(NamespaceSymbol {
                name: String::new(),
                qualified_name: String::new(),
                members: Vec::new(),
            })],
            types_by_name: FxHashMap::default(),
        }
    }

    /// Id of the global namespace.
    pub fn global(&self) -> SymbolId {
        SymbolId::GLOBAL
    }

    /// Get or create the namespace `path` (dot-separated) under `parent`.
    ///
    /// Existing namespaces are reused, so declaring `A.B` twice yields the
    /// same id and merges members.
    ///
    /// # Panics
    /// Panics if `parent` was not issued by this builder or is a type.
    pub fn namespace(&mut self, parent: SymbolId, path: &str) -> SymbolId {
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .fold(parent, |current, segment| self.child_namespace(current, segment))
    }

    fn child_namespace(&mut self, parent: SymbolId, name: &str) -> SymbolId {
        let Symbol::Namespace(parent_ns) = &self.symbols[parent.index()] else {
            panic!("namespace `{name}` must be declared inside a namespace, not a type");
        };

        let existing = parent_ns.members.iter().copied().find(|&id| {
            matches!(&self.symbols[id.index()], Symbol::Namespace(ns) if ns.name == name)
        });
        if let Some(id) = existing {
            return id;
        }

        let qualified_name = qualify(&parent_ns.qualified_name, name);
        let id = self.next_id();
        self.symbols.push(Symbol::Namespace(NamespaceSymbol {
            name: name.to_owned(),
            qualified_name,
            members: Vec::new(),
        }));
        self.attach(parent, id);
        id
    }

    /// Add a type under `parent`, which may be a namespace or a type (for
    /// nested types).
    ///
    /// # Panics
    /// Panics if `parent` was not issued by this builder.
    pub fn add_type(&mut self, parent: SymbolId, mut ty: TypeSymbol) -> SymbolId {
        let parent_name = match &self.symbols[parent.index()] {
            Symbol::Namespace(ns) => &ns.qualified_name,
            Symbol::Type(outer) => &outer.qualified_name,
        };
        ty.qualified_name = qualify(parent_name, &ty.name);
        ty.nested.clear();

        let id = self.next_id();
        // First declaration wins the name index; later duplicates are still walked.
        self.types_by_name
            .entry(ty.qualified_name.clone())
            .or_insert(id);
        self.symbols.push(Symbol::Type(ty));
        self.attach(parent, id);
        id
    }

    /// Finish building.
    pub fn build(self) -> SymbolTable {
        SymbolTable {
            symbols: self.symbols,
            types_by_name: self.types_by_name,
        }
    }

    fn next_id(&self) -> SymbolId {
        let raw = u32::try_from(self.symbols.len())
            .unwrap_or_else(|_| panic!("symbol table exceeds u32::MAX symbols"));
        SymbolId::from_raw(raw)
    }

    fn attach(&mut self, parent: SymbolId, child: SymbolId) {
        match &mut self.symbols[parent.index()] {
            Symbol::Namespace(ns) => ns.members.push(child),
            Symbol::Type(ty) => ty.nested.push(child),
        }
    }
}

/// Ids are assigned from `u32`, so every index of a valid table fits.
#[allow(clippy::cast_possible_truncation, reason = "table length is bounded by u32")]
fn id_at(index: usize) -> SymbolId {
    SymbolId::from_raw(index as u32)
}

/// Serialized form: the arena only, the name index is derived.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawSymbolTable {
    symbols: Vec<Symbol>,
}

#[cfg(feature = "serde")]
impl From<SymbolTable> for RawSymbolTable {
    fn from(table: SymbolTable) -> Self {
        RawSymbolTable {
            symbols: table.symbols,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawSymbolTable> for SymbolTable {
    type Error = TableError;

    fn try_from(raw: RawSymbolTable) -> Result<Self, Self::Error> {
        SymbolTable::from_symbols(raw.symbols)
    }
}

fn qualify(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{parent}.{name}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
