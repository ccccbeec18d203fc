//! Error types for descriptor extraction and resolution.

use thiserror::Error;

/// A descriptor factory could not extract a descriptor from a type.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Type '{type_name}' is not a class and cannot be a tag helper.")]
    NotAClass { type_name: String },

    #[error("Could not find an 'Invoke' or 'InvokeAsync' method for the view component '{type_name}'.")]
    MissingInvoke { type_name: String },

    #[error("View component '{type_name}' must have exactly one public method named 'Invoke' or 'InvokeAsync'.")]
    AmbiguousInvoke { type_name: String },

    #[error("Method '{method}' of view component '{type_name}' should be declared to return Task or Task<T>.")]
    AsyncResultType { type_name: String, method: String },

    #[error("Method '{method}' of view component '{type_name}' should be declared to return a value.")]
    SyncResultType { type_name: String, method: String },

    #[error("Method '{method}' of view component '{type_name}' cannot be generic.")]
    GenericInvoke { type_name: String, method: String },

    /// Failure reported by a caller-supplied factory.
    #[error("{0}")]
    Custom(String),
}

/// Resolution was aborted.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// A tag helper factory failed outright. Tag helper factories report
    /// recoverable problems through the sink, so this is not contained.
    #[error("failed to extract tag helper descriptors from '{type_name}': {source}")]
    ElementBindable {
        type_name: String,
        #[source]
        source: ExtractError,
    },
}
