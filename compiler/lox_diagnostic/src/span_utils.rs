//! Byte offsets to line numbers.
//!
//! Diagnostics carry byte spans; only the final rendering needs a line.
//! [`LineOffsetTable`] records where each line starts so every lookup is a
//! binary search instead of a scan of the source.

/// Start offset of every line in one source text.
///
/// ```
/// use lox_diagnostic::LineOffsetTable;
///
/// let table = LineOffsetTable::build("var a;\nprint a;");
///
/// assert_eq!(table.line_from_offset(0), 1);
/// assert_eq!(table.line_from_offset(13), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0]` is always 0.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`. A newline belongs to the line it
    /// ends; offsets past the end fall on the last line.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }
}

#[cfg(test)]
mod tests;
