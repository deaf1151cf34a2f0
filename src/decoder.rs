//! Ties the other modules together into the one entry point most callers
//! need: read a PNG/APNG byte stream and get back a default image plus a
//! sequence of composited animation frames.

use std::path::Path;

use crate::actl::AcTL;
use crate::byte_source::{ByteSource, FileSource, MemorySource};
use crate::chunk::{read_chunk, Chunk, ChunkType};
use crate::chunk_source::ChunkConcatSource;
use crate::compositor::{Compositor, DecodedFrame};
use crate::error::{invalid_if, PngError, PngResult};
use crate::fctl::{DisposeOp, FcTL};
use crate::filter::unfilter_and_assemble;
use crate::ihdr::{ColorType, IHdr, Interlace};
use crate::inflate::InflateSource;
use crate::pixel::{Bitmap, PixelFormat, TransparencyKey};

/// The first eight bytes of every PNG datastream.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// How long one decoded frame should stay on screen before the next one is
/// shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTime {
  pub num: u16,
  pub den: u16,
}
impl DisplayTime {
  /// The delay in seconds. A denominator of `0` is treated as `100`, the
  /// widely implemented shorthand for hundredths of a second. A numerator of
  /// `0` is treated as the shortest delay this crate can report (`1/100`s)
  /// rather than "no delay at all".
  pub fn seconds(&self) -> f64 {
    if self.num == 0 {
      return 1.0 / 100.0;
    }
    let den = if self.den == 0 { 100 } else { self.den };
    self.num as f64 / den as f64
  }
}

/// One displayed animation frame: already composited onto a canvas-sized
/// bitmap, ready to show as-is.
#[derive(Debug, Clone)]
pub struct Frame {
  pub display_time: DisplayTime,
  pub bitmap: Bitmap,
}

/// A decoded APNG: dimensions, pixel format, loop count, the PNG's base
/// ("default") image, and the sequence of animation frames.
pub struct ApngDecoder {
  pub width: u32,
  pub height: u32,
  pub pixel_format: PixelFormat,
  pub loop_count: u32,
  default_frame: Bitmap,
  frames: Vec<Frame>,
}

impl ApngDecoder {
  pub fn from_slice(bytes: &[u8]) -> PngResult<Self> {
    let mut source = MemorySource::new(bytes);
    Self::decode(&mut source)
  }

  pub fn from_file(path: impl AsRef<Path>) -> PngResult<Self> {
    let mut source = FileSource::open(path)?;
    Self::decode(&mut source)
  }

  pub fn default_frame(&self) -> &Bitmap {
    &self.default_frame
  }

  pub fn frames(&self) -> &[Frame] {
    &self.frames
  }

  fn decode(source: &mut dyn ByteSource) -> PngResult<Self> {
    let mut sig = [0u8; 8];
    source.read_exact(&mut sig)?;
    invalid_if(sig != PNG_SIGNATURE)?;

    let header_chunk = read_chunk(source)?;
    invalid_if(header_chunk.ty != ChunkType::IHDR || header_chunk.data.len() != 13)?;
    let ihdr = IHdr::parse(&header_chunk.data)?;
    invalid_if(ihdr.interlace != Interlace::None)?;
    invalid_if(ihdr.color_type == ColorType::Palette)?;
    let format = PixelFormat::for_color_type(ihdr.color_type, ihdr.bit_depth).ok_or(PngError::InvalidPng)?;

    let mut chunks = Vec::new();
    while !source.at_eof() {
      chunks.push(read_chunk(source)?);
    }

    let end = chunks.pop().ok_or(PngError::InvalidPng)?;
    invalid_if(end.ty != ChunkType::IEND || !end.data.is_empty())?;

    let actl = {
      let mut found: Option<AcTL> = None;
      let mut saw_idat_before_actl = false;
      for chunk in &chunks {
        match chunk.ty {
          ChunkType::ACTL => {
            invalid_if(found.is_some() || saw_idat_before_actl)?;
            found = Some(AcTL::parse(&chunk.data)?);
          }
          ChunkType::IDAT if found.is_none() => saw_idat_before_actl = true,
          _ => {}
        }
      }
      found.ok_or(PngError::InvalidPng)?
    };

    let fctl_count = chunks.iter().filter(|c| c.ty == ChunkType::FCTL).count() as u32;
    invalid_if(fctl_count != actl.num_frames)?;

    let transparency_key = validate_ancillary_chunks(&chunks, &ihdr)?;

    let groups = build_groups(&chunks, &ihdr)?;
    invalid_if(groups.is_empty())?;

    let default_payload: Vec<&[u8]> = match &groups[0] {
      Group::Idat(v) => v.clone(),
      Group::Frame { payload, sequenced: false, .. } => payload.clone(),
      Group::Frame { sequenced: true, .. } => return Err(PngError::InvalidPng),
    };
    let default_frame = decode_image(&ihdr, ihdr.width, ihdr.height, &default_payload, None)?;

    let frame_groups: Vec<&Group> = groups
      .iter()
      .filter(|g| matches!(g, Group::Frame { .. }))
      .collect();

    let mut compositor = Compositor::new(ihdr.width, ihdr.height, format, transparency_key);
    let mut frames = Vec::with_capacity(frame_groups.len());
    // Sequence numbers are globally unique and strictly increasing across
    // every fcTL and fdAT chunk in the file, not just within one frame's own
    // run of fdAT chunks; track the running expectation across frame groups
    // here, on top of `ChunkConcatSource`'s within-group check.
    let mut expected_sequence = 0u32;
    for (index, group) in frame_groups.into_iter().enumerate() {
      let Group::Frame { fctl, payload, sequenced } = group else { unreachable!() };
      invalid_if(!fctl.fits_within(ihdr.width, ihdr.height))?;
      if index == 0 {
        invalid_if(
          fctl.x_offset != 0 || fctl.y_offset != 0 || fctl.width != ihdr.width || fctl.height != ihdr.height,
        )?;
      }
      invalid_if(fctl.sequence_number != expected_sequence)?;
      expected_sequence = fctl.sequence_number.wrapping_add(1);
      if *sequenced {
        expected_sequence = expected_sequence.wrapping_add(payload.len() as u32);
      }

      let first_sequence = if *sequenced { Some(fctl.sequence_number + 1) } else { None };
      let bitmap = decode_image(&ihdr, fctl.width, fctl.height, payload, first_sequence)?;

      let dispose_op = if index == 0 && fctl.dispose_op == DisposeOp::Previous {
        // There is no earlier canvas state to restore on the very first
        // frame, so a `Previous` dispose is coerced to `Background`.
        DisposeOp::Background
      } else {
        fctl.dispose_op
      };

      let decoded = DecodedFrame {
        x_offset: fctl.x_offset,
        y_offset: fctl.y_offset,
        dispose_op,
        blend_op: fctl.blend_op,
        bitmap,
      };
      let shown = compositor.composite(&decoded);
      frames.push(Frame {
        display_time: DisplayTime { num: fctl.delay_num, den: fctl.delay_den },
        bitmap: shown,
      });
    }

    Ok(Self { width: ihdr.width, height: ihdr.height, pixel_format: format, loop_count: actl.loop_count(), default_frame, frames })
  }
}

/// One contiguous run of `IDAT`/`fdAT` chunk data: either the base image's
/// (non-animated) data, or one animation frame's `fcTL` plus its data.
enum Group<'c> {
  Idat(Vec<&'c [u8]>),
  Frame { fctl: FcTL, payload: Vec<&'c [u8]>, sequenced: bool },
}

fn build_groups<'c>(chunks: &'c [Chunk], ihdr: &IHdr) -> PngResult<Vec<Group<'c>>> {
  let mut groups: Vec<Group<'c>> = Vec::new();
  let mut saw_idat = false;

  for chunk in chunks {
    match chunk.ty {
      ChunkType::IDAT => {
        saw_idat = true;
        match groups.last_mut() {
          Some(Group::Idat(v)) => v.push(&chunk.data),
          Some(Group::Frame { payload, sequenced: false, .. }) => payload.push(&chunk.data),
          Some(Group::Frame { sequenced: true, .. }) => return Err(PngError::InvalidPng),
          None => groups.push(Group::Idat(vec![&chunk.data])),
        }
      }
      ChunkType::FCTL => {
        let fctl = FcTL::parse(&chunk.data)?;
        let is_first_and_precedes_idat = groups.is_empty() && !saw_idat;
        groups.push(Group::Frame { fctl, payload: Vec::new(), sequenced: !is_first_and_precedes_idat });
      }
      ChunkType::FDAT => match groups.last_mut() {
        Some(Group::Frame { payload, sequenced: true, .. }) => payload.push(&chunk.data),
        _ => return Err(PngError::InvalidPng),
      },
      _ => {}
    }
  }
  invalid_if(!saw_idat)?;
  let _ = ihdr;
  Ok(groups)
}

fn decode_image(
  ihdr: &IHdr, width: u32, height: u32, payload: &[&[u8]], sequenced_from: Option<u32>,
) -> PngResult<Bitmap> {
  let mut concat = match sequenced_from {
    Some(first_sequence) => ChunkConcatSource::sequenced(payload, first_sequence),
    None => ChunkConcatSource::plain(payload),
  };
  let mut inflate = InflateSource::new(&mut concat);

  let line_len = 1 + ((ihdr.bits_per_pixel() * width as usize) + 7) / 8;
  let mut decompressed = vec![0u8; line_len.saturating_mul(height as usize)];
  inflate.read_exact(&mut decompressed)?;

  unfilter_and_assemble(ihdr.color_type, ihdr.bit_depth, width, height, &mut decompressed)
}

/// Validates `PLTE`/`tRNS` shape against `color_type`, and parses `tRNS`
/// into a [`TransparencyKey`] the compositor can use for `Over` blending.
fn validate_ancillary_chunks(chunks: &[Chunk], ihdr: &IHdr) -> PngResult<Option<TransparencyKey>> {
  let mut seen_plte = false;
  let mut seen_trns = false;
  let mut key = None;
  for chunk in chunks {
    match chunk.ty {
      ChunkType::PLTE => {
        invalid_if(seen_plte || ihdr.color_type == ColorType::Greyscale || ihdr.color_type == ColorType::GreyscaleAlpha)?;
        seen_plte = true;
        invalid_if(chunk.data.len() % 3 != 0 || chunk.data.is_empty())?;
      }
      ChunkType::TRNS => {
        invalid_if(seen_trns)?;
        seen_trns = true;
        key = validate_trns(&chunk.data, ihdr.color_type, ihdr.bit_depth)?;
      }
      _ => {}
    }
  }
  Ok(key)
}

fn validate_trns(data: &[u8], color_type: ColorType, bit_depth: u8) -> PngResult<Option<TransparencyKey>> {
  match color_type {
    ColorType::Greyscale => {
      invalid_if(data.len() != 2)?;
      let grey = u16::from_be_bytes([data[0], data[1]]);
      Ok(TransparencyKey::from_raw_samples(color_type, bit_depth, &[grey]))
    }
    ColorType::Rgb => {
      invalid_if(data.len() != 6)?;
      let r = u16::from_be_bytes([data[0], data[1]]);
      let g = u16::from_be_bytes([data[2], data[3]]);
      let b = u16::from_be_bytes([data[4], data[5]]);
      Ok(TransparencyKey::from_raw_samples(color_type, bit_depth, &[r, g, b]))
    }
    ColorType::Palette => invalid_if(data.is_empty()).map(|()| None),
    ColorType::GreyscaleAlpha | ColorType::Rgba => Err(PngError::InvalidPng),
  }
}
