//! The `IHDR` header chunk: image dimensions, bit depth, and color type.

use crate::error::{invalid_if, PngError, PngResult};

/// The five PNG color types, and the channel counts they imply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ColorType {
  Greyscale = 0,
  Rgb = 2,
  Palette = 3,
  GreyscaleAlpha = 4,
  Rgba = 6,
}
impl ColorType {
  pub const fn channel_count(self) -> usize {
    match self {
      Self::Greyscale => 1,
      Self::Rgb => 3,
      Self::Palette => 1,
      Self::GreyscaleAlpha => 2,
      Self::Rgba => 4,
    }
  }
}
impl TryFrom<u8> for ColorType {
  type Error = ();
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => Self::Greyscale,
      2 => Self::Rgb,
      3 => Self::Palette,
      4 => Self::GreyscaleAlpha,
      6 => Self::Rgba,
      _ => return Err(()),
    })
  }
}

/// Whether the image uses Adam7 interlacing. This crate does not support
/// decoding interlaced data; an interlaced `IHDR` is rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interlace {
  None,
  Adam7,
}

/// The `IHDR` chunk: the very first chunk of any valid PNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IHdr {
  pub width: u32,
  pub height: u32,
  pub bit_depth: u8,
  pub color_type: ColorType,
  pub interlace: Interlace,
}

impl IHdr {
  /// Number of bytes in one filtered scanline, including the leading filter
  /// type byte. Rounds up for sub-byte pixel formats so each scanline starts
  /// on a byte boundary, as the format requires.
  pub const fn bytes_per_filterline(&self) -> usize {
    1 + ((self.bits_per_pixel() * self.width as usize) + 7) / 8
  }

  pub const fn bits_per_pixel(&self) -> usize {
    (self.bit_depth as usize) * self.color_type.channel_count()
  }

  /// Total decompressed byte count expected for this image's scanlines.
  pub fn decompressed_size(&self) -> usize {
    self.bytes_per_filterline().saturating_mul(self.height as usize)
  }

  pub fn parse(data: &[u8]) -> PngResult<Self> {
    let [w0, w1, w2, w3, h0, h1, h2, h3, bit_depth, color_type, compression_method, filter_method, interlace_method] =
      *data
    else {
      return Err(PngError::InvalidPng);
    };

    let width = u32::from_be_bytes([w0, w1, w2, w3]);
    let height = u32::from_be_bytes([h0, h1, h2, h3]);
    invalid_if(width == 0 || height == 0 || width >= 0x8000_0000 || height >= 0x8000_0000)?;

    let color_type: ColorType = ColorType::try_from(color_type).map_err(|_| PngError::InvalidPng)?;
    let bit_depth = match (color_type, bit_depth) {
      (ColorType::Greyscale, 1 | 2 | 4 | 8 | 16) => bit_depth,
      (ColorType::Rgb, 8 | 16) => bit_depth,
      (ColorType::Palette, 1 | 2 | 4 | 8) => bit_depth,
      (ColorType::GreyscaleAlpha, 8 | 16) => bit_depth,
      (ColorType::Rgba, 8 | 16) => bit_depth,
      _ => return Err(PngError::InvalidPng),
    };

    invalid_if(compression_method != 0)?;
    invalid_if(filter_method != 0)?;
    let interlace = match interlace_method {
      0 => Interlace::None,
      1 => Interlace::Adam7,
      _ => return Err(PngError::InvalidPng),
    };

    Ok(Self { width, height, bit_depth, color_type, interlace })
  }
}
