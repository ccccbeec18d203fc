//! Plug-in contracts used by the [`Resolver`](crate::Resolver).
//!
//! One classifier and one factory per descriptor kind. The two factory
//! contracts differ on purpose:
//!
//! - [`ElementBindableFactory`] receives the sink and reports recoverable
//!   problems there. An `Err` aborts the resolution.
//! - [`ViewComponentFactory`] has no sink. Each `Err` is turned into a
//!   diagnostic by the resolver and resolution moves on.

use weft_diagnostic::ErrorSink;
use weft_symbols::TypeRef;

use crate::{Descriptor, ExtractError};

/// Decides whether a type is a candidate for one descriptor kind.
///
/// Must be pure and total. A panic inside a classifier is not contained.
///
/// Any `Fn(TypeRef<'_>) -> bool` closure is a classifier.
pub trait Classifier {
    fn is_candidate(&self, ty: TypeRef<'_>) -> bool;
}

impl<F> Classifier for F
where
    F: Fn(TypeRef<'_>) -> bool,
{
    fn is_candidate(&self, ty: TypeRef<'_>) -> bool {
        self(ty)
    }
}

/// Extracts zero or more tag helper descriptors from a candidate type.
pub trait ElementBindableFactory {
    fn create_descriptors(
        &self,
        ty: TypeRef<'_>,
        sink: &mut ErrorSink,
    ) -> Result<Vec<Descriptor>, ExtractError>;
}

impl<F> ElementBindableFactory for F
where
    F: Fn(TypeRef<'_>, &mut ErrorSink) -> Result<Vec<Descriptor>, ExtractError>,
{
    fn create_descriptors(
        &self,
        ty: TypeRef<'_>,
        sink: &mut ErrorSink,
    ) -> Result<Vec<Descriptor>, ExtractError> {
        self(ty, sink)
    }
}

/// Extracts exactly one view component descriptor from a candidate type.
pub trait ViewComponentFactory {
    fn create_descriptor(&self, ty: TypeRef<'_>) -> Result<Descriptor, ExtractError>;
}

impl<F> ViewComponentFactory for F
where
    F: Fn(TypeRef<'_>) -> Result<Descriptor, ExtractError>,
{
    fn create_descriptor(&self, ty: TypeRef<'_>) -> Result<Descriptor, ExtractError> {
        self(ty)
    }
}
