//! A single PNG chunk: `length | type | data | crc`.

use crate::byte_source::ByteSource;
use crate::crc32::png_crc;
use crate::error::{invalid_if, PngResult};

/// The four-byte ASCII type tag of a chunk, e.g. `IHDR`, `fdAT`.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct ChunkType(pub [u8; 4]);
#[allow(dead_code)]
impl ChunkType {
  pub const IHDR: Self = Self(*b"IHDR");
  pub const PLTE: Self = Self(*b"PLTE");
  pub const IDAT: Self = Self(*b"IDAT");
  pub const IEND: Self = Self(*b"IEND");
  pub const TRNS: Self = Self(*b"tRNS");
  pub const ACTL: Self = Self(*b"acTL");
  pub const FCTL: Self = Self(*b"fcTL");
  pub const FDAT: Self = Self(*b"fdAT");

  /// The PNG chunk-naming convention says a chunk is "critical" (must be
  /// understood by every reader) when the first letter of its type is
  /// uppercase.
  pub const fn is_critical(self) -> bool {
    (self.0[0] & 32) == 0
  }
}
impl core::fmt::Debug for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let [a, b, c, d] = self.0;
    write!(f, "{}{}{}{}", a as char, b as char, c as char, d as char)
  }
}

/// An owned, CRC-validated PNG chunk.
#[derive(Debug, Clone)]
pub struct Chunk {
  pub ty: ChunkType,
  pub data: Vec<u8>,
}

/// Reads one `length | type | data | crc` chunk from `source` and validates
/// its CRC.
///
/// The CRC covers the type and data bytes, not the length prefix. A mismatch,
/// like any other malformed chunk, is reported as [`crate::PngError::InvalidPng`]
/// rather than as a distinct "bad checksum" error.
pub fn read_chunk(source: &mut dyn ByteSource) -> PngResult<Chunk> {
  let length = source.read_u32_be()?;
  invalid_if(length >= 0x8000_0000)?;
  let mut ty = [0u8; 4];
  source.read_exact(&mut ty)?;
  let ty = ChunkType(ty);

  let mut data = vec![0u8; length as usize];
  source.read_exact(&mut data)?;

  let declared_crc = source.read_u32_be()?;
  let actual_crc = png_crc(ty.0.iter().copied().chain(data.iter().copied()));
  invalid_if(actual_crc != declared_crc)?;

  Ok(Chunk { ty, data })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::byte_source::MemorySource;

  fn encode_chunk(ty: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(ty);
    out.extend_from_slice(data);
    let crc = png_crc(ty.iter().copied().chain(data.iter().copied()));
    out.extend_from_slice(&crc.to_be_bytes());
    out
  }

  #[test]
  fn test_read_chunk_roundtrip() {
    let bytes = encode_chunk(b"IEND", &[]);
    let mut src = MemorySource::new(&bytes);
    let chunk = read_chunk(&mut src).unwrap();
    assert_eq!(chunk.ty.0, *b"IEND");
    assert!(chunk.data.is_empty());
  }

  #[test]
  fn test_read_chunk_bad_crc_is_invalid() {
    let mut bytes = encode_chunk(b"IDAT", &[1, 2, 3, 4]);
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;
    let mut src = MemorySource::new(&bytes);
    assert!(read_chunk(&mut src).is_err());
  }
}
