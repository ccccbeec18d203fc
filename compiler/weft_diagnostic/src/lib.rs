//! Diagnostics for Weft symbol resolution.
//!
//! Resolution never stops for a recoverable problem. Instead, problems are
//! recorded as [`Diagnostic`]s in an [`ErrorSink`] owned by the caller:
//!
//! - Error codes for searchability
//! - A message describing what went wrong
//! - A [`Span`] locating it, or [`Span::ZERO`] when no source text applies
//!
//! ```text
//! let mut sink = ErrorSink::new();
//! let descriptors = resolver.resolve(&program, &mut sink)?;
//!
//! for diagnostic in sink.iter() {
//!     eprintln!("{diagnostic}");
//! }
//! ```

mod diagnostic;
mod error_code;
pub mod sink;
mod span;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use sink::ErrorSink;
pub use span::Span;
