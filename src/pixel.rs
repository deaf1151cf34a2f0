//! The eight output pixel formats an `ApngDecoder` can hand back, and the
//! byte-backed [`Bitmap`] that holds a frame's worth of them.

use bytemuck::{Pod, Zeroable};

use crate::ihdr::ColorType;

macro_rules! pixel_struct {
  ($(#[$meta:meta])* $name:ident { $($field:ident: $ty:ty),+ $(,)? }) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
    #[repr(C)]
    pub struct $name {
      $(pub $field: $ty),+
    }
  };
}

pixel_struct!(
  /// Grayscale, 8 bits per channel.
  Grey8 { y: u8 }
);
pixel_struct!(
  /// Grayscale, 16 bits per channel.
  Grey16 { y: u16 }
);
pixel_struct!(
  /// Grayscale + alpha, 8 bits per channel.
  GreyAlpha8 { y: u8, a: u8 }
);
pixel_struct!(
  /// Grayscale + alpha, 16 bits per channel.
  GreyAlpha16 { y: u16, a: u16 }
);
pixel_struct!(
  /// RGB, 8 bits per channel.
  Rgb24 { r: u8, g: u8, b: u8 }
);
pixel_struct!(
  /// RGB, 16 bits per channel.
  Rgb48 { r: u16, g: u16, b: u16 }
);
pixel_struct!(
  /// RGBA, 8 bits per channel.
  Rgba32 { r: u8, g: u8, b: u8, a: u8 }
);
pixel_struct!(
  /// RGBA, 16 bits per channel.
  Rgba64 { r: u16, g: u16, b: u16, a: u16 }
);

/// Which of the eight pixel layouts a [`Bitmap`] is storing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
  Grey8,
  Grey16,
  GreyAlpha8,
  GreyAlpha16,
  Rgb24,
  Rgb48,
  Rgba32,
  Rgba64,
}

impl PixelFormat {
  /// Picks the output format for a (color type, bit depth) pair. Sub-8-bit
  /// grayscale is widened to 8 bits per channel. `Palette` has no output
  /// format of its own: expanding indexed pixels through the palette into
  /// one of the eight direct-color formats is out of scope, so callers get
  /// `None` and should surface that as an unsupported image rather than try
  /// to decode frame pixels.
  pub const fn for_color_type(color_type: ColorType, bit_depth: u8) -> Option<Self> {
    Some(match (color_type, bit_depth) {
      (ColorType::Greyscale, 16) => Self::Grey16,
      (ColorType::Greyscale, _) => Self::Grey8,
      (ColorType::GreyscaleAlpha, 16) => Self::GreyAlpha16,
      (ColorType::GreyscaleAlpha, _) => Self::GreyAlpha8,
      (ColorType::Rgb, 16) => Self::Rgb48,
      (ColorType::Rgb, _) => Self::Rgb24,
      (ColorType::Rgba, 16) => Self::Rgba64,
      (ColorType::Rgba, _) => Self::Rgba32,
      (ColorType::Palette, _) => return None,
    })
  }

  pub const fn bytes_per_pixel(self) -> usize {
    match self {
      Self::Grey8 => 1,
      Self::Grey16 => 2,
      Self::GreyAlpha8 => 2,
      Self::GreyAlpha16 => 4,
      Self::Rgb24 => 3,
      Self::Rgb48 => 6,
      Self::Rgba32 => 4,
      Self::Rgba64 => 8,
    }
  }

  pub const fn channel_count(self) -> usize {
    match self {
      Self::Grey8 | Self::Grey16 => 1,
      Self::GreyAlpha8 | Self::GreyAlpha16 => 2,
      Self::Rgb24 | Self::Rgb48 => 3,
      Self::Rgba32 | Self::Rgba64 => 4,
    }
  }

  pub const fn has_alpha(self) -> bool {
    matches!(self, Self::GreyAlpha8 | Self::GreyAlpha16 | Self::Rgba32 | Self::Rgba64)
  }

  pub const fn bits_per_channel(self) -> u32 {
    match self {
      Self::Grey8 | Self::GreyAlpha8 | Self::Rgb24 | Self::Rgba32 => 8,
      Self::Grey16 | Self::GreyAlpha16 | Self::Rgb48 | Self::Rgba64 => 16,
    }
  }
}

/// A fully-transparent pixel value declared by a `tRNS` chunk, for the
/// non-alpha color types it's allowed on (Greyscale, RGB). Values are
/// already scaled into the same domain as this crate's output pixel
/// formats, the same way a sub-byte grayscale pixel sample is widened by
/// [`crate::filter`] before being written into a [`Bitmap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransparencyKey {
  Grey8(u8),
  Grey16(u16),
  Rgb24 { r: u8, g: u8, b: u8 },
  Rgb48 { r: u16, g: u16, b: u16 },
}

impl TransparencyKey {
  /// Builds a key from a `tRNS` chunk's raw big-endian sample(s) and the
  /// image's (color_type, bit_depth). `Palette`'s tRNS (a per-index alpha
  /// table, not a color key) isn't represented here; this crate never
  /// decodes `Palette` images in the first place.
  pub fn from_raw_samples(color_type: ColorType, bit_depth: u8, samples: &[u16]) -> Option<Self> {
    match (color_type, samples) {
      (ColorType::Greyscale, &[grey]) if bit_depth == 16 => Some(Self::Grey16(grey)),
      (ColorType::Greyscale, &[grey]) => {
        Some(Self::Grey8(crate::filter::scale_to_8_bits(grey as u8, bit_depth)))
      }
      (ColorType::Rgb, &[r, g, b]) if bit_depth == 16 => Some(Self::Rgb48 { r, g, b }),
      (ColorType::Rgb, &[r, g, b]) => Some(Self::Rgb24 { r: r as u8, g: g as u8, b: b as u8 }),
      _ => None,
    }
  }

  /// Whether `pixel` (one pixel's worth of bytes, in this crate's
  /// native-endian-channel [`Bitmap`] storage) is this key's color and
  /// should therefore be composited as if it had alpha `0`.
  pub fn matches(self, pixel: &[u8]) -> bool {
    match self {
      Self::Grey8(g) => pixel[0] == g,
      Self::Grey16(g) => u16::from_ne_bytes([pixel[0], pixel[1]]) == g,
      Self::Rgb24 { r, g, b } => pixel[0] == r && pixel[1] == g && pixel[2] == b,
      Self::Rgb48 { r, g, b } => {
        u16::from_ne_bytes([pixel[0], pixel[1]]) == r
          && u16::from_ne_bytes([pixel[2], pixel[3]]) == g
          && u16::from_ne_bytes([pixel[4], pixel[5]]) == b
      }
    }
  }
}

/// A rectangular block of pixels in one [`PixelFormat`], stored row-major
/// with no padding between rows.
#[derive(Debug, Clone)]
pub struct Bitmap {
  pub width: u32,
  pub height: u32,
  pub format: PixelFormat,
  pub pixels: Vec<u8>,
}

impl Bitmap {
  /// A new, zero-filled bitmap of the given dimensions and format.
  pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
    let len = (width as usize) * (height as usize) * format.bytes_per_pixel();
    Self { width, height, format, pixels: vec![0; len] }
  }

  pub fn bytes_per_row(&self) -> usize {
    self.width as usize * self.format.bytes_per_pixel()
  }

  pub fn row(&self, y: u32) -> &[u8] {
    let stride = self.bytes_per_row();
    let start = y as usize * stride;
    &self.pixels[start..start + stride]
  }

  pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
    let stride = self.bytes_per_row();
    let start = y as usize * stride;
    &mut self.pixels[start..start + stride]
  }
}
