// crates/tabtrim-core/src/trim.rs
//
// Streaming whitespace normalizer (byte-level).
//
// Rules:
// - A tab expands to the next tab stop, or is emitted literally in
//   keep-tabs mode.
// - Spaces are deferred as a count until a later byte decides whether they
//   are interior (emit) or trailing (discard).
// - '\n' and '\r' are each their own terminator event; CRLF is two events.
//
// Only the space byte is ever deferred, so a counter is enough; no output
// buffer is needed and memory stays O(1) for arbitrarily long lines.

use std::io::{ErrorKind, Read, Write};

use crate::error::Result;
use crate::options::TrimOptions;
use crate::stats::Counters;
use crate::validate::validate_options;

const READ_CHUNK: usize = 8 * 1024;
const SPACES: [u8; 64] = [b' '; 64];

/// Per-byte state machine over an output writer.
///
/// Drive it with [`Trimmer::feed`] (input may be split at any byte boundary)
/// and close it with [`Trimmer::finish`], which drops any still-pending
/// trailing spaces and flushes.
pub struct Trimmer<W: Write> {
    out: W,
    opts: TrimOptions,
    column: u64,
    pending: u64,
    pub stats: Counters,
}

impl<W: Write> Trimmer<W> {
    pub fn new(out: W, opts: TrimOptions) -> Result<Self> {
        validate_options(&opts)?;
        Ok(Self {
            out,
            opts,
            column: 0,
            pending: 0,
            stats: Counters::default(),
        })
    }

    /// Feed a chunk of input.
    pub fn feed(&mut self, buf: &[u8]) -> Result<()> {
        for &b in buf {
            self.step(b)?;
        }
        Ok(())
    }

    /// End of input: remaining pending spaces are trailing and are dropped,
    /// even on a final line with no terminator. Flushes the writer and
    /// returns it together with the run counters.
    pub fn finish(mut self) -> Result<(W, Counters)> {
        self.stats.trimmed += self.pending;
        self.pending = 0;
        self.out.flush()?;
        Ok((self.out, self.stats))
    }

    fn step(&mut self, b: u8) -> Result<()> {
        self.stats.bytes_in += 1;

        match b {
            b'\n' | b'\r' => {
                // End of line, possibly the other OS convention. Whatever is
                // pending never got confirmed interior, so it is trailing.
                self.stats.trimmed += self.pending;
                self.stats.terminators += 1;
                self.pending = 0;
                self.column = 0;
                self.emit(b)?;
            }

            b'\t' => {
                self.stats.tabs += 1;
                if self.opts.keep_tabs {
                    // A literal tab cannot stand in for pending space
                    // columns, so flush them first.
                    self.flush_pending()?;
                    self.emit(b'\t')?;
                    self.column += if self.opts.exact_tab_stops {
                        self.tab_span()
                    } else {
                        1
                    };
                } else {
                    let span = self.tab_span();
                    self.pending += span;
                    self.column += span;
                }
            }

            b' ' => {
                self.pending += 1;
                self.column += 1;
            }

            _ => {
                self.flush_pending()?;
                self.emit(b)?;
                self.column += 1;
            }
        }

        Ok(())
    }

    // Columns to the next tab stop; always in 1..=tab_width.
    fn tab_span(&self) -> u64 {
        let tw = u64::from(self.opts.tab_width);
        tw - (self.column % tw)
    }

    fn flush_pending(&mut self) -> Result<()> {
        while self.pending > 0 {
            let n = self.pending.min(SPACES.len() as u64) as usize;
            self.out.write_all(&SPACES[..n])?;
            self.stats.bytes_out += n as u64;
            self.pending -= n as u64;
        }
        Ok(())
    }

    fn emit(&mut self, b: u8) -> Result<()> {
        self.out.write_all(&[b])?;
        self.stats.bytes_out += 1;
        Ok(())
    }
}

/// Run the normalizer over a whole input stream.
///
/// Reads fixed-size chunks and writes through an internal buffer, so memory
/// use does not depend on line length or input size.
pub fn trim_stream<R: Read, W: Write>(
    mut input: R,
    output: W,
    opts: TrimOptions,
) -> Result<Counters> {
    let mut trimmer = Trimmer::new(std::io::BufWriter::new(output), opts)?;
    let mut chunk = [0u8; READ_CHUNK];

    loop {
        let n = match input.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        trimmer.feed(&chunk[..n])?;
    }

    let (_out, stats) = trimmer.finish()?;
    Ok(stats)
}

/// Convenience for in-memory input.
pub fn trim_bytes(input: &[u8], opts: TrimOptions) -> Result<Vec<u8>> {
    let mut trimmer = Trimmer::new(Vec::with_capacity(input.len()), opts)?;
    trimmer.feed(input)?;
    let (out, _stats) = trimmer.finish()?;
    Ok(out)
}
