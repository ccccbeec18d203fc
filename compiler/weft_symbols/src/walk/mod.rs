//! Symbol graph traversal.
//!
//! The walker visits every namespace and named type reachable from a module's
//! global namespace, nested types included, in declaration order. It holds no
//! state beyond the traversal itself: what to do with each type is decided by
//! the caller's closure.
//!
//! ```text
//! let candidates = walk_module(&program, program.assembly(), |ty| {
//!     ty.symbol().is_class() && ty.name().ends_with("Component")
//! });
//! ```

use crate::{CompiledProgram, ModuleSymbol, Symbol, SymbolId, TypeRef};

/// Visit every named type in `module`, calling `visit` on each.
///
/// Order: a namespace's members in declaration order; a type before its
/// nested types.
#[tracing::instrument(level = "trace", skip_all, fields(module = %module.name))]
pub fn walk_types<'a, F>(program: &'a CompiledProgram, module: &'a ModuleSymbol, mut visit: F)
where
    F: FnMut(TypeRef<'a>),
{
    let mut walker = Walker {
        program,
        module,
        visit: &mut visit,
    };
    walker.walk_symbol(module.table.global_namespace());
}

/// Collect every type in `module` accepted by `classify`, in visit order.
pub fn walk_module<'a, F>(
    program: &'a CompiledProgram,
    module: &'a ModuleSymbol,
    mut classify: F,
) -> Vec<TypeRef<'a>>
where
    F: FnMut(TypeRef<'a>) -> bool,
{
    let mut candidates = Vec::new();
    walk_types(program, module, |ty| {
        if classify(ty) {
            candidates.push(ty);
        }
    });
    candidates
}

struct Walker<'a, 'v> {
    program: &'a CompiledProgram,
    module: &'a ModuleSymbol,
    visit: &'v mut dyn FnMut(TypeRef<'a>),
}

impl<'a> Walker<'a, '_> {
    fn walk_symbol(&mut self, id: SymbolId) {
        let module = self.module;
        ensure_sufficient_stack(|| {
            let Some(symbol) = module.table.get(id) else {
                return;
            };
            if let Symbol::Type(_) = symbol {
                if let Some(ty) = TypeRef::new(self.program, module, id) {
                    (self.visit)(ty);
                }
            }
            for &child in symbol.children() {
                self.walk_symbol(child);
            }
        });
    }
}

/// Minimum stack space to keep available before recursing (100KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Grow the stack before recursing into deeply nested namespaces or types.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
