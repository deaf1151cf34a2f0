//! Combines a sequence of decoded frame rectangles into the final sequence
//! of displayed canvas bitmaps, per each frame's `dispose_op`/`blend_op`.

use crate::fctl::{BlendOp, DisposeOp};
use crate::pixel::{Bitmap, PixelFormat, TransparencyKey};

/// One decoded frame, ready to be composited onto the running canvas.
pub struct DecodedFrame {
  pub x_offset: u32,
  pub y_offset: u32,
  pub dispose_op: DisposeOp,
  pub blend_op: BlendOp,
  pub bitmap: Bitmap,
}

/// Builds the canvas-sized bitmaps actually shown for each frame, applying
/// dispose/blend semantics in sequence.
///
/// The canvas starts as all-zero (fully transparent, or black for opaque
/// formats) unless `default_frame` is given, in which case it seeds the
/// canvas before the first animation frame is composited; APNGs that
/// reuse their `IDAT` as the first animation frame pass `None` here instead,
/// since the first `fcTL`'s own frame data already is that seed.
pub struct Compositor {
  canvas: Bitmap,
  history: Vec<Bitmap>,
  last_non_previous: Option<usize>,
  transparency_key: Option<TransparencyKey>,
}

impl Compositor {
  pub fn new(width: u32, height: u32, format: PixelFormat, transparency_key: Option<TransparencyKey>) -> Self {
    Self {
      canvas: Bitmap::new(width, height, format),
      history: Vec::new(),
      last_non_previous: None,
      transparency_key,
    }
  }

  /// Composites one frame and returns the canvas snapshot to display for it.
  pub fn composite(&mut self, frame: &DecodedFrame) -> Bitmap {
    blend_onto(&mut self.canvas, frame, self.transparency_key);
    let shown = self.canvas.clone();

    match frame.dispose_op {
      DisposeOp::None => {
        self.last_non_previous = Some(self.history.len());
      }
      DisposeOp::Background => {
        self.last_non_previous = Some(self.history.len());
        // The next frame's base is a fully cleared canvas, not just this
        // frame's own rectangle zeroed out.
        self.canvas.pixels.fill(0);
      }
      DisposeOp::Previous => {
        // Canvas after a Previous-disposed frame should look like it did
        // before this frame was drawn: a full copy of the most recent
        // non-Previous frame's own canvas. A first frame with
        // `dispose_op = Previous` is already coerced to `Background` by the
        // caller before this point, so `last_non_previous` is always
        // available once we get here.
        if let Some(idx) = self.last_non_previous {
          self.canvas = self.history[idx].clone();
        }
      }
    }

    self.history.push(shown.clone());
    shown
  }
}

fn blend_onto(canvas: &mut Bitmap, frame: &DecodedFrame, transparency_key: Option<TransparencyKey>) {
  let bpp = canvas.format.bytes_per_pixel();
  // A `Background`-disposed frame is blended as `Source` regardless of its
  // declared `blend_op`.
  let blend_op = if frame.dispose_op == DisposeOp::Background { BlendOp::Source } else { frame.blend_op };
  for row in 0..frame.bitmap.height {
    let src_row = frame.bitmap.row(row);
    let canvas_y = frame.y_offset + row;
    let canvas_row = canvas.row_mut(canvas_y);
    let dst_start = frame.x_offset as usize * bpp;
    let dst = &mut canvas_row[dst_start..dst_start + frame.bitmap.width as usize * bpp];
    match blend_op {
      BlendOp::Source => dst.copy_from_slice(src_row),
      BlendOp::Over => blend_over_row(canvas.format, dst, src_row, transparency_key),
    }
  }
}

fn blend_over_row(format: PixelFormat, dst: &mut [u8], src: &[u8], transparency_key: Option<TransparencyKey>) {
  if !format.has_alpha() {
    // No alpha channel: a transparency key gives each source pixel a binary
    // alpha of 0 (fully transparent, keep `dst`) or max (fully opaque,
    // copy `src`); with no key, every pixel is opaque and Over collapses to
    // Source.
    let bpp = format.bytes_per_pixel();
    match transparency_key {
      Some(key) => {
        for (d, s) in dst.chunks_exact_mut(bpp).zip(src.chunks_exact(bpp)) {
          if !key.matches(s) {
            d.copy_from_slice(s);
          }
        }
      }
      None => dst.copy_from_slice(src),
    }
    return;
  }
  let bpp = format.bytes_per_pixel();
  match format.bits_per_channel() {
    8 => {
      for (d, s) in dst.chunks_exact_mut(bpp).zip(src.chunks_exact(bpp)) {
        blend_over_pixel_8(d, s);
      }
    }
    16 => {
      for (d, s) in dst.chunks_exact_mut(bpp).zip(src.chunks_exact(bpp)) {
        blend_over_pixel_16(d, s);
      }
    }
    _ => unreachable!(),
  }
}

/// `out = ((max - alpha + 1) * dst + (alpha + 1) * src) >> bits`, applied to
/// every channel including alpha itself, matching the APNG blending formula.
fn blend_over_pixel_8(dst: &mut [u8], src: &[u8]) {
  let alpha = *src.last().unwrap() as u32;
  for (d, s) in dst.iter_mut().zip(src.iter()) {
    let dst_v = *d as u32;
    let src_v = *s as u32;
    *d = (((255 - alpha + 1) * dst_v + (alpha + 1) * src_v) >> 8) as u8;
  }
}

fn blend_over_pixel_16(dst: &mut [u8], src: &[u8]) {
  let channels = dst.len() / 2;
  let alpha = u16::from_ne_bytes(src[(channels - 1) * 2..].try_into().unwrap()) as u32;
  for c in 0..channels {
    let d_bytes: [u8; 2] = dst[c * 2..c * 2 + 2].try_into().unwrap();
    let s_bytes: [u8; 2] = src[c * 2..c * 2 + 2].try_into().unwrap();
    let dst_v = u16::from_ne_bytes(d_bytes) as u32;
    let src_v = u16::from_ne_bytes(s_bytes) as u32;
    let out = (((65535 - alpha + 1) * dst_v + (alpha + 1) * src_v) >> 16) as u16;
    dst[c * 2..c * 2 + 2].copy_from_slice(&out.to_ne_bytes());
  }
}
