// linesift - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.

// =============================================================================
// Per-line decision
// =============================================================================

/// What the filter does with one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDisposition {
    /// The stripped line is not a range record; copy it verbatim.
    Keep,
    /// The stripped line is a range record; write nothing.
    Drop,
}

impl LineDisposition {
    /// Short label used in trace logging.
    pub fn label(self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::Drop => "drop",
        }
    }
}

// =============================================================================
// Run summary
// =============================================================================

/// Counters for one completed filter pass.
///
/// `lines_read == lines_kept + lines_dropped` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// Lines read from the input, including a final unterminated line.
    pub lines_read: u64,

    /// Lines copied to the output.
    pub lines_kept: u64,

    /// Range-record lines discarded.
    pub lines_dropped: u64,

    /// Bytes written to the output, terminators included.
    pub bytes_written: u64,
}

impl FilterSummary {
    /// Account for one line and the decision made about it.
    pub fn record(&mut self, disposition: LineDisposition, len: usize) {
        self.lines_read += 1;
        match disposition {
            LineDisposition::Keep => {
                self.lines_kept += 1;
                self.bytes_written += len as u64;
            }
            LineDisposition::Drop => self.lines_dropped += 1,
        }
    }
}
