//! Scanline filter reconstruction: turns the raw decompressed bytes (each
//! line prefixed with a filter-type byte) into plain pixel rows.
//!
//! The actual Sub/Up/Average/Paeth arithmetic is delegated to the
//! `png_filters` crate, exactly like the `unfilter_decompressed_data` method
//! this is modeled on; this module is responsible for picking the right
//! per-pixel byte width, running the defilter pass in place, and then
//! widening/repacking the result into one of this crate's [`Bitmap`] pixel
//! formats.

use bitfrob::{u8_bit_split_1x8_rev, u8_bit_split_2x4_rev, u8_bit_split_4x2_rev};

use crate::error::{invalid_if, PngError, PngResult};
use crate::ihdr::ColorType;
use crate::pixel::{Bitmap, PixelFormat};

const fn bytes_per_filterline(color_type: ColorType, bit_depth: u8, width: u32) -> usize {
  let bits_per_pixel = (bit_depth as usize) * color_type.channel_count();
  1 + ((bits_per_pixel * width as usize) + 7) / 8
}

/// The byte width `png_filters` should treat each pixel as having, for the
/// purpose of Sub/Up/Average/Paeth prediction. Sub-byte depths still filter
/// one byte at a time.
const fn filter_bpp(color_type: ColorType, bit_depth: u8) -> PngResult<usize> {
  Ok(match (color_type, bit_depth) {
    (ColorType::Greyscale, 16) => 2,
    (ColorType::Greyscale, _) => 1,
    (ColorType::GreyscaleAlpha, 8) => 2,
    (ColorType::GreyscaleAlpha, 16) => 4,
    (ColorType::Rgb, 8) => 3,
    (ColorType::Rgb, 16) => 6,
    (ColorType::Rgba, 8) => 4,
    (ColorType::Rgba, 16) => 8,
    (ColorType::Palette, _) => 1,
    _ => return Err(PngError::InvalidPng),
  })
}

fn unfilter_lines_dispatch(decompressed: &mut [u8], bytes_per_filterline: usize, bpp: usize) {
  // `png_filters::unfilter_lines` takes whole scanlines (filter-type byte
  // included) and reconstructs them in place, tracking the previous line's
  // bytes itself, so it's fed the same `chunks_exact_mut(bytes_per_filterline)`
  // iterator with no further splitting.
  let row_iter = decompressed.chunks_exact_mut(bytes_per_filterline);
  match bpp {
    1 => png_filters::unfilter_lines::<1>(row_iter),
    2 => png_filters::unfilter_lines::<2>(row_iter),
    3 => png_filters::unfilter_lines::<3>(row_iter),
    4 => png_filters::unfilter_lines::<4>(row_iter),
    6 => png_filters::unfilter_lines::<6>(row_iter),
    8 => png_filters::unfilter_lines::<8>(row_iter),
    _ => unreachable!("filter_bpp only ever returns 1, 2, 3, 4, 6, or 8"),
  }
}

/// Unfilters a decompressed, non-interlaced image in place, then assembles
/// the result into a [`Bitmap`] in the pixel format implied by
/// `color_type`/`bit_depth`.
///
/// `decompressed` must be exactly `bytes_per_filterline(width) * height`
/// bytes; the orchestrator is responsible for slicing out exactly that much
/// from the inflated stream before calling this.
pub fn unfilter_and_assemble(
  color_type: ColorType, bit_depth: u8, width: u32, height: u32, decompressed: &mut [u8],
) -> PngResult<Bitmap> {
  let format = PixelFormat::for_color_type(color_type, bit_depth).ok_or(PngError::InvalidPng)?;
  let line_len = bytes_per_filterline(color_type, bit_depth, width);
  invalid_if(decompressed.len() != line_len.saturating_mul(height as usize))?;

  let bpp = filter_bpp(color_type, bit_depth)?;
  unfilter_lines_dispatch(decompressed, line_len, bpp);

  let mut bitmap = Bitmap::new(width, height, format);
  for (y, line) in decompressed.chunks_exact(line_len).enumerate() {
    let (_filter_byte, samples) = line.split_first().ok_or(PngError::InvalidPng)?;
    write_row(color_type, bit_depth, width, samples, bitmap.row_mut(y as u32));
  }
  Ok(bitmap)
}

fn write_row(color_type: ColorType, bit_depth: u8, width: u32, samples: &[u8], out_row: &mut [u8]) {
  let channels = color_type.channel_count();
  match bit_depth {
    1 | 2 | 4 => {
      // Only grayscale ever has sub-byte depths in this crate's supported
      // color types (indexed color is handled by `PixelFormat::for_color_type`
      // returning `None` before we get here).
      debug_assert_eq!(channels, 1);
      let per_byte = 8 / bit_depth as u32;
      let mut x = 0u32;
      for &byte in samples {
        let widened: [u8; 8] = match bit_depth {
          1 => u8_bit_split_1x8_rev(byte),
          2 => {
            let [a, b, c, d] = u8_bit_split_2x4_rev(byte);
            [a, b, c, d, 0, 0, 0, 0]
          }
          4 => {
            let [a, b] = u8_bit_split_4x2_rev(byte);
            [a, b, 0, 0, 0, 0, 0, 0]
          }
          _ => unreachable!(),
        };
        for pix in &widened[..per_byte as usize] {
          if x >= width {
            break;
          }
          out_row[x as usize] = scale_to_8_bits(*pix, bit_depth);
          x += 1;
        }
      }
    }
    8 => {
      out_row.copy_from_slice(&samples[..out_row.len()]);
    }
    16 => {
      for (x, pixel_out) in out_row.chunks_exact_mut(channels * 2).enumerate() {
        for c in 0..channels {
          let src = &samples[(x * channels + c) * 2..][..2];
          let sample = u16::from_be_bytes([src[0], src[1]]);
          pixel_out[c * 2..c * 2 + 2].copy_from_slice(&sample.to_ne_bytes());
        }
      }
    }
    _ => unreachable!("bit depth already validated by IHdr::parse"),
  }
}

/// Scales a sub-8-bit grayscale sample up to a full byte, e.g. a 4-bit value
/// of `0xF` (max) becomes `0xFF`, not `0xF0`.
pub(crate) const fn scale_to_8_bits(value: u8, bit_depth: u8) -> u8 {
  match bit_depth {
    1 => value * 0xFF,
    2 => value * 0x55,
    4 => value * 0x11,
    _ => value,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn none_filtered_row(samples: &[u8]) -> Vec<u8> {
    let mut v = vec![0u8];
    v.extend_from_slice(samples);
    v
  }

  #[test]
  fn test_unfilter_8bit_grey_none_filter() {
    let mut data = Vec::new();
    data.extend(none_filtered_row(&[10, 20]));
    data.extend(none_filtered_row(&[30, 40]));
    let bmp = unfilter_and_assemble(ColorType::Greyscale, 8, 2, 2, &mut data).unwrap();
    assert_eq!(bmp.format, PixelFormat::Grey8);
    assert_eq!(bmp.row(0), &[10, 20]);
    assert_eq!(bmp.row(1), &[30, 40]);
  }

  #[test]
  fn test_unfilter_1bit_grey_widens_to_full_byte() {
    // one byte holds 8 pixels; pattern 0b1010_0000 -> first two pixels on.
    let mut data = none_filtered_row(&[0b1000_0000]);
    let bmp = unfilter_and_assemble(ColorType::Greyscale, 1, 8, 1, &mut data).unwrap();
    assert_eq!(bmp.row(0)[0], 0xFF);
    assert_eq!(bmp.row(0)[1], 0x00);
  }

  #[test]
  fn test_unfilter_rejects_palette() {
    let mut data = none_filtered_row(&[0]);
    assert!(unfilter_and_assemble(ColorType::Palette, 8, 1, 1, &mut data).is_err());
  }

  #[test]
  fn test_unfilter_rejects_wrong_length() {
    let mut data = vec![0u8; 3];
    assert!(unfilter_and_assemble(ColorType::Greyscale, 8, 4, 4, &mut data).is_err());
  }
}
