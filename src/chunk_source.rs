//! Concatenates a run of `IDAT`/`fdAT` chunks into a single byte stream for
//! the inflator, stripping the 4-byte sequence-number prefix `fdAT` chunks
//! carry.

use crate::byte_source::ByteSource;
use crate::error::{invalid_if, PngResult};

/// Whether the chunk list being concatenated is a plain `IDAT` run (no
/// per-chunk framing beyond the chunk structure itself) or a `fdAT` run
/// (each chunk's data begins with a 4-byte big-endian sequence number that
/// must be consecutive and is stripped before the bytes reach the zlib
/// stream).
enum ConcatMode {
  Plain,
  Sequenced { next_sequence: u32 },
}

/// A [`ByteSource`] that reads sequentially through a list of chunk payloads
/// as if they were one contiguous byte stream.
pub struct ChunkConcatSource<'c> {
  chunks: std::slice::Iter<'c, &'c [u8]>,
  current: &'c [u8],
  mode: ConcatMode,
}

impl<'c> ChunkConcatSource<'c> {
  /// Concatenates a run of `IDAT` payloads, verbatim.
  pub fn plain(chunks: &'c [&'c [u8]]) -> Self {
    Self { chunks: chunks.iter(), current: &[], mode: ConcatMode::Plain }
  }

  /// Concatenates a run of `fdAT` payloads, validating and stripping each
  /// one's leading sequence number. `first_sequence` is the sequence number
  /// expected on the first `fdAT` chunk, which is always the `fcTL`'s own
  /// sequence number plus one.
  pub fn sequenced(chunks: &'c [&'c [u8]], first_sequence: u32) -> Self {
    Self {
      chunks: chunks.iter(),
      current: &[],
      mode: ConcatMode::Sequenced { next_sequence: first_sequence },
    }
  }

  /// Pulls the next chunk payload into `self.current`, applying sequence
  /// number validation/stripping for `fdAT` runs. Returns `false` once the
  /// chunk list is exhausted.
  fn advance(&mut self) -> PngResult<bool> {
    let Some(&chunk) = self.chunks.next() else {
      return Ok(false);
    };
    match &mut self.mode {
      ConcatMode::Plain => {
        self.current = chunk;
      }
      ConcatMode::Sequenced { next_sequence } => {
        invalid_if(chunk.len() < 4)?;
        let (seq_bytes, rest) = chunk.split_at(4);
        let seq = u32::from_be_bytes(seq_bytes.try_into().unwrap());
        invalid_if(seq != *next_sequence)?;
        *next_sequence = next_sequence.wrapping_add(1);
        self.current = rest;
      }
    }
    Ok(true)
  }
}

impl<'c> ByteSource for ChunkConcatSource<'c> {
  fn read(&mut self, buf: &mut [u8]) -> PngResult<(usize, bool)> {
    while self.current.is_empty() {
      if !self.advance()? {
        return Ok((0, false));
      }
    }
    let n = self.current.len().min(buf.len());
    buf[..n].copy_from_slice(&self.current[..n]);
    self.current = &self.current[n..];
    let more = !self.current.is_empty() || !self.chunks.as_slice().is_empty();
    Ok((n, more))
  }

  fn at_eof(&self) -> bool {
    self.current.is_empty() && self.chunks.as_slice().is_empty()
  }
}
