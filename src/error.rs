//! Library-wide error and result types.

use std::io;

use thiserror::Error;

use crate::pixel::TextureFormat;

/// Result alias used throughout divakit.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the library can produce.
///
/// A texture entry with an unrecognised signature is *not* an error: the
/// texture-set decoder skips it and carries on.
#[derive(Debug, Error)]
pub enum Error {
    /// A magic/signature field did not match the expected value.
    #[error("bad signature: expected {expected:#010x}, found {found:#010x}")]
    BadSignature { expected: u32, found: u32 },

    /// A read would run past the end of the input buffer.
    #[error("read of {len} bytes at {position:#x} is out of bounds (buffer is {size} bytes)")]
    OutOfBounds {
        position: usize,
        len: usize,
        size: usize,
    },

    /// A null-terminated string had no null terminator within the buffer.
    #[error("unterminated string")]
    UnterminatedName,

    /// A mip header carries a pixel format value outside the known set.
    #[error("unknown texture format: {0}")]
    UnknownFormat(u32),

    /// The native format has no standard pixel-format equivalent.
    #[error("texture format {0} has no standard equivalent")]
    UnsupportedFormat(TextureFormat),

    /// A texture index past the end of the texture set.
    #[error("texture index {index} out of range ({len} textures)")]
    InvalidIndex { index: usize, len: usize },

    /// A pixel payload does not match the size implied by its dimensions.
    #[error("pixel data size mismatch: expected {expected} bytes, found {found}")]
    SizeMismatch { expected: usize, found: usize },

    /// An underlying I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Diagnostic dump serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
