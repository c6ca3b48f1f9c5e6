//! Byte ranges into the source text.
//!
//! A span is two `u32` offsets and nothing else. Line numbers are derived
//! when a diagnostic is printed, using the line table in `lox_diagnostic`.

use std::fmt;
use std::ops::Range;

/// Half-open byte range `start..end` into one source file.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder for nodes that have no source text of their own.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `offset`. The lexer uses it for end of input.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span::new(offset, offset)
    }

    /// Narrow a `usize` range from the lexer. `None` once either bound
    /// passes 4 GiB, which no Lox script comes near.
    pub fn from_offsets(range: Range<usize>) -> Option<Self> {
        let start = u32::try_from(range.start).ok()?;
        let end = u32::try_from(range.end).ok()?;
        Some(Span::new(start, end))
    }

    /// Smallest span containing both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Byte range suitable for slicing the source string.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slicing() {
        let span = Span::new(4, 9);
        assert_eq!(&"var answer = 42;"[span.to_range()], "answe");
    }

    #[test]
    fn test_merge_covers_both_in_any_order() {
        let callee = Span::new(0, 3);
        let args = Span::new(3, 11);
        assert_eq!(callee.merge(args), Span::new(0, 11));
        assert_eq!(args.merge(callee), Span::new(0, 11));
    }

    #[test]
    fn test_from_offsets_rejects_out_of_range() {
        let past = u32::MAX as usize + 1;
        assert_eq!(Span::from_offsets(2..6), Some(Span::new(2, 6)));
        assert_eq!(Span::from_offsets(past..past), None);
        assert_eq!(Span::from_offsets(0..past), None);
    }

    #[test]
    fn test_point_is_zero_width() {
        let eof = Span::point(12);
        assert_eq!(eof.to_range(), 12..12);
        assert_eq!(format!("{eof:?}"), "12..12");
    }
}
