//! Resolution driver.
//!
//! Two passes over the program, tag helpers first, then view components.
//! Each pass walks the primary module and then every referenced module in
//! the order the program lists them; references without a symbol table are
//! skipped. Candidates are handed to the pass's factory in visit order.
//!
//! # Failure containment
//!
//! | Source | Outcome |
//! |--------|---------|
//! | Classifier panic | propagates |
//! | [`ElementBindableFactory`] `Err` | [`ResolveError`], no descriptors returned |
//! | [`ViewComponentFactory`] `Err` | one `E0200` diagnostic at [`Span::ZERO`], pass continues |

use weft_diagnostic::{Diagnostic, ErrorCode, ErrorSink, Span};
use weft_symbols::{walk_module, CompiledProgram, ModuleSymbol, TypeRef};

use crate::conventions::{
    TagHelperConvention, TagHelperFactory, ViewComponentConvention, ViewComponentTagHelperFactory,
};
use crate::{
    Classifier, Descriptor, ElementBindableFactory, ResolveError, ResolverConfig,
    ViewComponentFactory,
};

/// Discovers tag helpers and view components in a compiled program.
///
/// Holds only its plug-ins; each [`resolve`](Self::resolve) call is
/// independent of every other.
pub struct Resolver {
    element_classifier: Box<dyn Classifier>,
    element_factory: Box<dyn ElementBindableFactory>,
    view_classifier: Box<dyn Classifier>,
    view_factory: Box<dyn ViewComponentFactory>,
}

impl Resolver {
    /// Build a resolver from caller-supplied classifiers and factories.
    pub fn new(
        element_classifier: impl Classifier + 'static,
        element_factory: impl ElementBindableFactory + 'static,
        view_classifier: impl Classifier + 'static,
        view_factory: impl ViewComponentFactory + 'static,
    ) -> Self {
        Resolver {
            element_classifier: Box::new(element_classifier),
            element_factory: Box::new(element_factory),
            view_classifier: Box::new(view_classifier),
            view_factory: Box::new(view_factory),
        }
    }

    /// Build a resolver using the tag helper and view component conventions.
    pub fn with_default_conventions(config: &ResolverConfig) -> Self {
        Self::new(
            TagHelperConvention::new(config.tag_helper_interface.clone()),
            TagHelperFactory::new(config.design_time),
            ViewComponentConvention,
            ViewComponentTagHelperFactory,
        )
    }

    /// Resolve every descriptor in `program`.
    ///
    /// Recoverable problems are appended to `sink`. Tag helper descriptors
    /// precede view component descriptors; within a kind, the primary module
    /// comes first, then references in order.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::ElementBindable`] as soon as the tag helper
    /// factory fails for any candidate. Diagnostics reported before the
    /// failure stay in `sink`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(assembly = %program.assembly().name)
    )]
    pub fn resolve(
        &self,
        program: &CompiledProgram,
        sink: &mut ErrorSink,
    ) -> Result<Vec<Descriptor>, ResolveError> {
        let mut results = Vec::new();

        self.visit_element_bindables(program, sink, &mut results)?;
        let element_count = results.len();

        self.visit_view_components(program, sink, &mut results);

        tracing::debug!(
            element_bindable = element_count,
            view_component = results.len() - element_count,
            diagnostics = sink.len(),
            "resolution complete"
        );
        Ok(results)
    }

    fn visit_element_bindables(
        &self,
        program: &CompiledProgram,
        sink: &mut ErrorSink,
        results: &mut Vec<Descriptor>,
    ) -> Result<(), ResolveError> {
        for module in program.roots() {
            for ty in candidates(program, module, &*self.element_classifier) {
                let descriptors = self
                    .element_factory
                    .create_descriptors(ty, sink)
                    .map_err(|source| ResolveError::ElementBindable {
                        type_name: ty.qualified_name().to_owned(),
                        source,
                    })?;
                results.extend(descriptors);
            }
        }
        Ok(())
    }

    fn visit_view_components(
        &self,
        program: &CompiledProgram,
        sink: &mut ErrorSink,
        results: &mut Vec<Descriptor>,
    ) {
        for module in program.roots() {
            for ty in candidates(program, module, &*self.view_classifier) {
                match self.view_factory.create_descriptor(ty) {
                    Ok(descriptor) => results.push(descriptor),
                    Err(err) => {
                        tracing::debug!(ty = %ty.qualified_name(), error = %err, "view component skipped");
                        sink.push(
                            Diagnostic::error(ErrorCode::E0200)
                                .with_message(err.to_string())
                                .with_span(Span::ZERO),
                        );
                    }
                }
            }
        }
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver").finish_non_exhaustive()
    }
}

fn candidates<'a>(
    program: &'a CompiledProgram,
    module: &'a ModuleSymbol,
    classifier: &dyn Classifier,
) -> Vec<TypeRef<'a>> {
    walk_module(program, module, |ty| classifier.is_candidate(ty))
}
