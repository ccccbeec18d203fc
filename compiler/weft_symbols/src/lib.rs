//! Weft Symbols - the read-only symbol graph of a compiled program.
//!
//! This crate models what resolution needs to know about a build unit:
//! - [`CompiledProgram`]: the primary module plus ordered module references
//! - [`SymbolTable`]: an arena of namespaces and named types per module
//! - [`TypeRef`]: a borrowed handle to one type, able to follow base types
//!   across modules
//! - [`walk`]: traversal of every named type reachable from a module root
//!
//! # Design Philosophy
//!
//! - **Read-only**: tables are frozen by [`SymbolTableBuilder::build`]; no
//!   consumer can mutate the graph it is walking
//! - **Flat storage**: symbols are addressed by `SymbolId(u32)` indices
//! - **No ambient state**: everything reachable hangs off an explicit
//!   `&CompiledProgram`

mod program;
mod symbol;
mod table;
pub mod walk;

pub use program::{BaseChain, CompiledProgram, ModuleReference, ModuleSymbol, TypeRef};
pub use symbol::{
    Accessibility, AttributeData, MemberSymbol, MethodSymbol, NamespaceSymbol, ParameterSymbol,
    PropertySymbol, Symbol, SymbolId, TypeKind, TypeSymbol,
};
pub use table::{SymbolTable, SymbolTableBuilder, TableError};
pub use walk::{walk_module, walk_types};
