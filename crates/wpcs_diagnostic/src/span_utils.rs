//! Line and column lookup for diagnostic positions.
//!
//! For repeated lookups on the same source, use [`LineOffsetTable`], which
//! pre-computes line starts for O(log L) lookup instead of O(n) scanning.

use wpcs_ir::Span;

/// Pre-computed line offset table for line/column lookup.
///
/// # Example
///
/// ```
/// use wpcs_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "<?php\nif ( $a == 1 ) {}";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 14), (2, 9));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, byte)| byte == b'\n')
                .map(|(i, _)| u32::try_from(i + 1).unwrap_or(u32::MAX)),
        );
        LineOffsetTable { offsets }
    }

    /// Get 1-based line number from a byte offset.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Get 1-based (line, column) from a byte offset.
    ///
    /// The column counts characters, not bytes, from the start of the line.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .line_start_offset(line)
            .map_or(0, |start| start as usize);
        (line, column(source, line_start, offset as usize))
    }

    /// Get the byte offset of a line start (1-based line number).
    ///
    /// Returns `None` if the line number is out of range.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        let idx = line.checked_sub(1)?;
        self.offsets.get(idx as usize).copied()
    }

    /// Get the number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Compute the 1-based line number where a span starts.
///
/// Note: For repeated lookups, use [`LineOffsetTable`] instead.
pub fn line_number(source: &str, span: Span) -> u32 {
    offset_to_line_col(source, span.start).0
}

/// Compute 1-based (line, column) from a byte offset.
///
/// Note: For repeated lookups, use [`LineOffsetTable`] instead.
pub fn offset_to_line_col(source: &str, offset: u32) -> (u32, u32) {
    let offset = offset as usize;
    let mut line = 1u32;
    let mut line_start = 0usize;

    for (i, byte) in source.bytes().enumerate().take(offset) {
        if byte == b'\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    (line, column(source, line_start, offset))
}

/// 1-based character column of `offset` within the line starting at `line_start`.
///
/// Offsets past the end clamp to the end; offsets inside a multi-byte
/// character fall back to a byte count.
fn column(source: &str, line_start: usize, offset: usize) -> u32 {
    let end = offset.min(source.len());
    let width = source
        .get(line_start..end)
        .map_or(end.saturating_sub(line_start), |text| text.chars().count());
    u32::try_from(width).unwrap_or(u32::MAX - 1) + 1
}
