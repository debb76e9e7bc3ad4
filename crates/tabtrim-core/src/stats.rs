// crates/tabtrim-core/src/stats.rs

/// Per-run counters, returned to the caller when a run finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Input bytes consumed.
    pub bytes_in: u64,
    /// Output bytes written.
    pub bytes_out: u64,
    /// Tab bytes seen (expanded or kept, depending on mode).
    pub tabs: u64,
    /// Trailing space columns discarded at line ends or end of stream.
    pub trimmed: u64,
    /// Line terminator bytes seen. CRLF counts as two.
    pub terminators: u64,
}
