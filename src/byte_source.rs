//! A small pull-based byte source abstraction.
//!
//! Every stage of the decoder (chunk reading, fdAT concatenation, zlib
//! inflation) reads bytes through a [`ByteSource`] rather than assuming a
//! `&[u8]` or a `File` directly. This lets the same chunk/inflate code run
//! whether the PNG came from memory or from disk, and lets the inflator sit
//! "on top of" a chunk-concatenating source without either side knowing about
//! the other's internals.

use crate::error::{PngError, PngResult};
use std::fs::File;
use std::io::Read as _;
use std::path::Path;

/// A pull-based source of bytes.
///
/// `read` follows the same contract a `stream_t` subclass does in the
/// original APNG reference implementation: fill as much of `buf` as is
/// available right now, report how many bytes were actually written, and say
/// whether more data could still come later. Implementations are not
/// required to fill the whole buffer in one call.
pub trait ByteSource {
  /// Reads into `buf`, returning `(bytes_written, more_available)`.
  ///
  /// `more_available` is `false` only once the source is certain no further
  /// bytes will ever be produced.
  fn read(&mut self, buf: &mut [u8]) -> PngResult<(usize, bool)>;

  /// True once the source has been fully drained.
  fn at_eof(&self) -> bool;

  /// Reads exactly `buf.len()` bytes, or fails with [`PngError::InvalidPng`]
  /// if the source runs dry first.
  fn read_exact(&mut self, buf: &mut [u8]) -> PngResult<()> {
    let mut filled = 0;
    while filled < buf.len() {
      let (n, more) = self.read(&mut buf[filled..])?;
      if n == 0 && !more {
        return Err(PngError::InvalidPng);
      }
      filled += n;
    }
    Ok(())
  }

  fn read_u8(&mut self) -> PngResult<u8> {
    let mut buf = [0u8; 1];
    self.read_exact(&mut buf)?;
    Ok(buf[0])
  }

  fn read_u16_be(&mut self) -> PngResult<u16> {
    let mut buf = [0u8; 2];
    self.read_exact(&mut buf)?;
    Ok(u16::from_be_bytes(buf))
  }

  fn read_u32_be(&mut self) -> PngResult<u32> {
    let mut buf = [0u8; 4];
    self.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
  }
}

/// A [`ByteSource`] backed by an open file.
pub struct FileSource {
  file: File,
  eof: bool,
}

impl FileSource {
  pub fn open(path: impl AsRef<Path>) -> PngResult<Self> {
    let file = File::open(path)?;
    Ok(Self { file, eof: false })
  }
}

impl ByteSource for FileSource {
  fn read(&mut self, buf: &mut [u8]) -> PngResult<(usize, bool)> {
    if self.eof {
      return Ok((0, false));
    }
    let n = self.file.read(buf)?;
    if n == 0 {
      self.eof = true;
    }
    Ok((n, !self.eof))
  }

  fn at_eof(&self) -> bool {
    self.eof
  }
}

/// A [`ByteSource`] backed by an in-memory byte slice.
pub struct MemorySource<'b> {
  bytes: &'b [u8],
  pos: usize,
}

impl<'b> MemorySource<'b> {
  pub const fn new(bytes: &'b [u8]) -> Self {
    Self { bytes, pos: 0 }
  }
}

impl<'b> ByteSource for MemorySource<'b> {
  fn read(&mut self, buf: &mut [u8]) -> PngResult<(usize, bool)> {
    let remaining = &self.bytes[self.pos..];
    let n = remaining.len().min(buf.len());
    buf[..n].copy_from_slice(&remaining[..n]);
    self.pos += n;
    Ok((n, self.pos < self.bytes.len()))
  }

  fn at_eof(&self) -> bool {
    self.pos >= self.bytes.len()
  }
}
