use std::fmt;

/// An error from decoding a PNG/APNG byte stream.
///
/// The decoder only ever reports one of two things went wrong: either the
/// bytes didn't form a valid PNG/APNG (`InvalidPng`), or the underlying
/// [`std::io::Error`] prevented reading the bytes at all (`Io`). Finer
/// grained diagnostics (which chunk, which field) aren't exposed; if you need
/// that level of detail you'll want to inspect the bytes yourself.
#[derive(Debug)]
#[non_exhaustive]
pub enum PngError {
  /// The byte stream is not a valid PNG, or not a valid APNG, per the rules
  /// in the `apng` crate docs.
  InvalidPng,
  /// Reading from the underlying source failed.
  Io(std::io::Error),
}

impl fmt::Display for PngError {
  #[inline]
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidPng => write!(f, "Invalid PNG file"),
      Self::Io(e) => write!(f, "{e}"),
    }
  }
}

impl std::error::Error for PngError {
  #[inline]
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::InvalidPng => None,
      Self::Io(e) => Some(e),
    }
  }
}

impl From<std::io::Error> for PngError {
  #[inline]
  fn from(e: std::io::Error) -> Self {
    Self::Io(e)
  }
}

/// Shorthand for `Result<T, PngError>`, used throughout this crate.
pub type PngResult<T> = Result<T, PngError>;

/// Turns "this didn't parse" into [`PngError::InvalidPng`] at the point where
/// an ambiguous library error (a failed `TryFrom`, an out-of-range enum
/// value) crosses into our own error type.
pub(crate) fn invalid<T, E>(result: Result<T, E>) -> PngResult<T> {
  result.map_err(|_| PngError::InvalidPng)
}

pub(crate) fn invalid_if(cond: bool) -> PngResult<()> {
  if cond {
    Err(PngError::InvalidPng)
  } else {
    Ok(())
  }
}
