use apng::{ApngDecoder, BlendOp, DisposeOp, PixelFormat};

mod fixtures;

#[test]
fn test_gray_two_frame_decodes_both_frames() {
  let decoded = ApngDecoder::from_slice(&fixtures::GRAY_TWO_FRAME).unwrap();
  assert_eq!(decoded.pixel_format, PixelFormat::Grey8);
  assert_eq!(decoded.loop_count, 0);
  assert_eq!(decoded.frames().len(), 2);
  assert_eq!(decoded.default_frame().pixels, vec![10]);
  assert_eq!(decoded.frames()[0].bitmap.pixels, vec![10]);
  assert_eq!(decoded.frames()[1].bitmap.pixels, vec![200]);
}

#[test]
fn test_rgba_composite_applies_over_blend_formula() {
  let decoded = ApngDecoder::from_slice(&fixtures::RGBA_COMPOSITE).unwrap();
  assert_eq!(decoded.frames().len(), 2);
  // Frame 0: solid opaque red across the 2x2 canvas.
  assert_eq!(decoded.frames()[0].bitmap.pixels, vec![255, 0, 0, 255, 255, 0, 0, 255, 255, 0, 0, 255, 255, 0, 0, 255]);
  // Frame 1: the top-left pixel is semi-transparent blue blended Over the
  // opaque red background; the other three pixels are untouched red.
  let px1 = &decoded.frames()[1].bitmap.pixels;
  assert_eq!(&px1[0..4], &[127, 0, 128, 192]);
  assert_eq!(&px1[4..8], &[255, 0, 0, 255]);
}

#[test]
fn test_static_png_without_actl_is_invalid() {
  assert!(ApngDecoder::from_slice(&fixtures::NO_ACTL_STATIC).is_err());
}

#[test]
fn test_corrupted_chunk_crc_is_invalid() {
  assert!(ApngDecoder::from_slice(&fixtures::BAD_CRC).is_err());
}

#[test]
fn test_skipped_sequence_number_is_invalid() {
  assert!(ApngDecoder::from_slice(&fixtures::SEQUENCE_SKIP).is_err());
}

#[test]
fn test_truncated_file_is_invalid() {
  let truncated = &fixtures::GRAY_TWO_FRAME[..fixtures::GRAY_TWO_FRAME.len() - 20];
  assert!(ApngDecoder::from_slice(truncated).is_err());
}

#[test]
fn test_no_panics_on_random_bytes() {
  // The decoder should report an error, never panic, on arbitrary input.
  for _ in 0..50 {
    let bytes = crate::rand_bytes(256);
    let _ = ApngDecoder::from_slice(&bytes);
  }
}

#[test]
fn test_frame_exposes_blend_and_dispose_free_of_panics() {
  // Smoke test that the public surface used by a typical playback loop
  // doesn't require anything beyond `frames()`/`default_frame()`.
  let decoded = ApngDecoder::from_slice(&fixtures::RGBA_COMPOSITE).unwrap();
  for frame in decoded.frames() {
    assert!(frame.display_time.seconds() > 0.0);
  }
  let _ = BlendOp::Over;
  let _ = DisposeOp::None;
}
