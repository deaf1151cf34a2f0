//! Adapts `miniz_oxide`'s low level streaming inflator to the crate's
//! [`ByteSource`] interface, so the rest of the decoder can treat "zlib
//! compressed image data" the same as any other byte source.
//!
//! DEFLATE/zlib decoding itself is treated as an external collaborator here:
//! this module only manages the input/output buffering around
//! `miniz_oxide::inflate::core`'s streaming entry point.

use miniz_oxide::inflate::core::inflate_flags::{
  TINFL_FLAG_HAS_MORE_INPUT, TINFL_FLAG_IGNORE_ADLER32, TINFL_FLAG_PARSE_ZLIB_HEADER,
  TINFL_FLAG_USING_NON_WRAPPING_OUTPUT_BUF,
};
use miniz_oxide::inflate::core::{decompress, DecompressorOxide};
use miniz_oxide::inflate::TINFLStatus;

use crate::byte_source::ByteSource;
use crate::error::{PngError, PngResult};

/// Input block size used while pumping compressed bytes through the inflator.
const IN_BLOCK_SIZE: usize = 8 * 1024;

/// `miniz_oxide`'s `TINFL_FLAG_USING_NON_WRAPPING_OUTPUT_BUF` mode requires
/// the *entire* decompressed stream to live in one never-truncated buffer:
/// back-references can point anywhere earlier in that buffer, not just within
/// whatever chunk of output we most recently handed to the caller. So unlike
/// the input side, `out_buf` below only ever grows (`Vec::resize` appends
/// zeroed room at the end) and is never cleared or truncated mid-stream.
///
/// A [`ByteSource`] that decompresses a zlib stream pulled from an inner
/// [`ByteSource`], buffering compressed input `IN_BLOCK_SIZE` bytes at a time.
pub struct InflateSource<'s> {
  inner: &'s mut dyn ByteSource,
  decompressor: Box<DecompressorOxide>,
  in_buf: [u8; IN_BLOCK_SIZE],
  in_pos: usize,
  in_len: usize,
  inner_has_more: bool,
  /// Every decompressed byte produced so far; grows, never shrinks.
  out_buf: Vec<u8>,
  /// How many bytes of `out_buf` the decompressor has actually written.
  written: usize,
  /// How many of those `written` bytes have already been handed to the
  /// caller via `read`.
  consumed: usize,
  done: bool,
}

impl<'s> InflateSource<'s> {
  pub fn new(inner: &'s mut dyn ByteSource) -> Self {
    Self {
      inner,
      decompressor: Box::default(),
      in_buf: [0; IN_BLOCK_SIZE],
      in_pos: 0,
      in_len: 0,
      inner_has_more: true,
      out_buf: Vec::new(),
      written: 0,
      consumed: 0,
      done: false,
    }
  }

  fn refill_input(&mut self) -> PngResult<()> {
    if self.in_pos < self.in_len || !self.inner_has_more {
      return Ok(());
    }
    let (n, more) = self.inner.read(&mut self.in_buf)?;
    self.in_pos = 0;
    self.in_len = n;
    self.inner_has_more = more;
    Ok(())
  }

  /// Runs the inflator until it has produced at least one more unconsumed
  /// byte of output, or is definitely finished.
  fn pump(&mut self) -> PngResult<()> {
    while self.consumed >= self.written && !self.done {
      self.refill_input()?;
      let in_slice = &self.in_buf[self.in_pos..self.in_len];

      if self.written == self.out_buf.len() {
        let grown = (self.out_buf.len() * 2).max(IN_BLOCK_SIZE);
        self.out_buf.resize(grown, 0);
      }

      let flags = TINFL_FLAG_PARSE_ZLIB_HEADER
        | TINFL_FLAG_USING_NON_WRAPPING_OUTPUT_BUF
        | TINFL_FLAG_IGNORE_ADLER32
        | if self.inner_has_more || !in_slice.is_empty() { TINFL_FLAG_HAS_MORE_INPUT } else { 0 };

      let (status, in_consumed, out_produced) =
        decompress(&mut self.decompressor, in_slice, &mut self.out_buf, self.written, flags);
      self.in_pos += in_consumed;
      self.written += out_produced;

      match status {
        TINFLStatus::Done | TINFLStatus::Adler32Mismatch => {
          self.done = true;
        }
        TINFLStatus::NeedsMoreInput => {
          if !self.inner_has_more && in_slice.is_empty() {
            return Err(PngError::InvalidPng);
          }
        }
        TINFLStatus::HasMoreOutput => {
          // out_buf will be grown at the top of the next loop iteration.
        }
        TINFLStatus::FailedCannotMakeProgress => return Err(PngError::InvalidPng),
        TINFLStatus::BadParam | TINFLStatus::Failed => return Err(PngError::InvalidPng),
      }
    }
    Ok(())
  }
}

impl<'s> ByteSource for InflateSource<'s> {
  fn read(&mut self, buf: &mut [u8]) -> PngResult<(usize, bool)> {
    if self.consumed >= self.written && !self.done {
      self.pump()?;
    }
    let available = &self.out_buf[self.consumed..self.written];
    let n = available.len().min(buf.len());
    buf[..n].copy_from_slice(&available[..n]);
    self.consumed += n;
    let more = !self.done || self.consumed < self.written;
    Ok((n, more))
  }

  fn at_eof(&self) -> bool {
    self.done && self.consumed >= self.written
  }
}
