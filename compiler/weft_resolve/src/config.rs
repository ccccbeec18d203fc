//! Configuration for the default conventions.

use crate::conventions::well_known;

/// Configuration for [`Resolver::with_default_conventions`](crate::Resolver::with_default_conventions).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ResolverConfig {
    /// Produce descriptors for editor tooling: copy documentation, record
    /// output element hints, and hide properties marked
    /// `EditorBrowsable(Never)`.
    pub design_time: bool,
    /// Fully-qualified name of the marker interface every tag helper
    /// implements.
    pub tag_helper_interface: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            design_time: false,
            tag_helper_interface: well_known::TAG_HELPER_INTERFACE.to_owned(),
        }
    }
}

impl ResolverConfig {
    /// Default configuration with design-time output enabled.
    pub fn design_time() -> Self {
        ResolverConfig {
            design_time: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_design_time(mut self, design_time: bool) -> Self {
        self.design_time = design_time;
        self
    }

    #[must_use]
    pub fn with_tag_helper_interface(mut self, interface: impl Into<String>) -> Self {
        self.tag_helper_interface = interface.into();
        self
    }
}
