//! Source location spans.

use std::fmt;

/// Byte range in a source document.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from document start
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Sentinel for problems not attributable to concrete source text.
    pub const ZERO: Span = Span { start: 0, end: 0 };

    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes; zero for a reversed span.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if this is the [`Span::ZERO`] sentinel.
    #[inline]
    pub const fn is_sentinel(&self) -> bool {
        self.start == 0 && self.end == 0
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basic() {
        let span = Span::new(10, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
        assert!(!span.is_sentinel());
    }

    #[test]
    fn test_zero_is_sentinel() {
        assert!(Span::ZERO.is_sentinel());
        assert!(Span::ZERO.is_empty());
        assert_eq!(Span::ZERO.len(), 0);
        assert_eq!(Span::default(), Span::ZERO);
    }

    #[test]
    fn test_empty_span_away_from_start_is_not_sentinel() {
        let span = Span::new(42, 42);
        assert!(span.is_empty());
        assert!(!span.is_sentinel());
    }

    #[test]
    fn test_reversed_span_has_zero_length() {
        let span = Span::new(20, 10);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(3, 7).to_string(), "3..7");
    }
}
