//! Weft Resolve - discovers tag helpers and view components in a compiled
//! program.
//!
//! Resolution walks the program's own module and every module it
//! references, classifies each type by convention, and turns every match
//! into a [`Descriptor`] for editor tooling.
//!
//! # Architecture
//!
//! - [`Resolver`]: drives both passes and owns failure containment
//! - [`Classifier`], [`ElementBindableFactory`], [`ViewComponentFactory`]:
//!   the plug-in seams, one classifier and one factory per kind
//! - [`conventions`]: the default plug-ins
//! - [`ResolverConfig`]: knobs for the default plug-ins
//!
//! # Debugging
//!
//! - `RUST_LOG=weft_resolve=debug`: per-resolution summaries and skipped
//!   view components
//! - `RUST_LOG=weft_resolve=trace,weft_symbols=trace`: every walk and
//!   extraction
//!
//! Call [`init_tracing`] once to install a subscriber.
//!
//! # Example
//!
//! ```text
//! let resolver = Resolver::with_default_conventions(&ResolverConfig::default());
//! let mut sink = ErrorSink::new();
//! let descriptors = resolver.resolve(&program, &mut sink)?;
//! ```

mod config;
pub mod conventions;
mod descriptor;
mod error;
mod plugin;
mod resolver;

pub use config::ResolverConfig;
pub use descriptor::{
    BoundAttributeDescriptor, Descriptor, DescriptorKind, TagHelperDescriptor, TagStructure,
    ViewComponentDescriptor,
};
pub use error::{ExtractError, ResolveError};
pub use plugin::{Classifier, ElementBindableFactory, ViewComponentFactory};
pub use resolver::Resolver;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber driven by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, or on any call after the first.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
