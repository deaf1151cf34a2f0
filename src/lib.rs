//! A decoder for Animated PNG (APNG) files.
//!
//! This crate reads a PNG/APNG byte stream (from memory or from a file),
//! validates its chunk structure and CRCs, reconstructs each frame's pixels
//! from the DEFLATE-compressed, filtered scanline data, and composites the
//! frames into the sequence a viewer would actually show, honoring each
//! frame's `dispose_op`/`blend_op`.
//!
//! ```no_run
//! # fn or_png_error() -> Result<(), apng::PngError> {
//! let bytes: &[u8] = unimplemented!("APNG bytes from somewhere");
//! let decoded = apng::ApngDecoder::from_slice(bytes)?;
//! for frame in decoded.frames() {
//!   let _ = frame.display_time.seconds();
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Encoding, interlaced (Adam7) images, indexed-color pixel expansion, color
//! management, and ancillary text chunks are all out of scope; see each
//! module's docs for the details of what is and isn't handled.

#![forbid(unsafe_code)]

mod actl;
mod byte_source;
mod chunk;
mod chunk_source;
mod compositor;
mod crc32;
mod decoder;
mod error;
mod fctl;
mod filter;
mod ihdr;
mod inflate;
mod pixel;

pub use actl::AcTL;
pub use byte_source::{ByteSource, FileSource, MemorySource};
pub use decoder::{ApngDecoder, DisplayTime, Frame, PNG_SIGNATURE};
pub use error::{PngError, PngResult};
pub use fctl::{BlendOp, DisposeOp, FcTL};
pub use ihdr::{ColorType, IHdr, Interlace};
pub use pixel::{
  Bitmap, Grey16, Grey8, GreyAlpha16, GreyAlpha8, PixelFormat, Rgb24, Rgb48, Rgba32, Rgba64,
  TransparencyKey,
};
