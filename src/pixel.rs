//! Native texture formats and their mapping onto standard pixel formats.
//!
//! ## Native formats (mip header `Format` field)
//! ```text
//!  0 A8       1 RGB8     2 RGBA8    3 RGB5     4 RGB5A1
//!  5 RGBA4    6 BC1      7 BC1a     8 BC2      9 BC3
//! 10 BC4     11 BC5     12 L8      13 L8A8
//! ```
//!
//! ## Mapping notes
//! * RGB5 and RGB5A1 have no standard equivalent; [`TextureFormat::to_pixel_format`]
//!   returns [`None`] for them.
//! * BC1a maps to the same target as BC1. The 1-bit-alpha distinction is not
//!   representable in [`PixelFormat`].
//! * BC5 payloads are usually a luma/alpha + chroma pair (YA + CbCr), not
//!   tangent-space normals. The mapping only renames the container format;
//!   reinterpreting the channels is up to the consumer.

use std::fmt;

use crate::{Error, Result};

/// Pixel formats as stored in a texture-set mip header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TextureFormat {
    A8 = 0,
    Rgb8 = 1,
    Rgba8 = 2,
    Rgb5 = 3,
    Rgb5A1 = 4,
    Rgba4 = 5,
    Bc1 = 6,
    Bc1a = 7,
    Bc2 = 8,
    Bc3 = 9,
    Bc4 = 10,
    Bc5 = 11,
    L8 = 12,
    L8A8 = 13,
}

/// General-purpose pixel formats that decoded mipmaps are exposed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Single 8-bit channel.
    R8,
    Rgb8,
    Rgba8,
    /// 4 bits per channel, packed into 16 bits.
    Rgba4444,
    /// BC1 / DXT1, 8 bytes per 4×4 block.
    Dxt1,
    /// BC2 / DXT3, 16 bytes per 4×4 block.
    Dxt3,
    /// BC3 / DXT5, 16 bytes per 4×4 block.
    Dxt5,
    /// BC4 / ATI1, 8 bytes per 4×4 block.
    RgtcR,
    /// BC5 / ATI2, 16 bytes per 4×4 block.
    RgtcRg,
    /// 8-bit luminance.
    L8,
    /// 8-bit luminance + 8-bit alpha.
    La8,
}

impl TextureFormat {
    /// Every native format, in discriminant order.
    pub const ALL: [TextureFormat; 14] = [
        Self::A8,
        Self::Rgb8,
        Self::Rgba8,
        Self::Rgb5,
        Self::Rgb5A1,
        Self::Rgba4,
        Self::Bc1,
        Self::Bc1a,
        Self::Bc2,
        Self::Bc3,
        Self::Bc4,
        Self::Bc5,
        Self::L8,
        Self::L8A8,
    ];

    /// Short display name, as used in diagnostic dumps.
    pub fn name(self) -> &'static str {
        match self {
            Self::A8 => "A8",
            Self::Rgb8 => "RGB8",
            Self::Rgba8 => "RGBA8",
            Self::Rgb5 => "RGB5",
            Self::Rgb5A1 => "RGB5A1",
            Self::Rgba4 => "RGBA4",
            Self::Bc1 => "BC1",
            Self::Bc1a => "BC1a",
            Self::Bc2 => "BC2",
            Self::Bc3 => "BC3",
            Self::Bc4 => "BC4",
            Self::Bc5 => "BC5",
            Self::L8 => "L8",
            Self::L8A8 => "L8A8",
        }
    }

    /// Standard equivalent, or [`None`] for RGB5 / RGB5A1.
    pub fn to_pixel_format(self) -> Option<PixelFormat> {
        let format = match self {
            Self::A8 => PixelFormat::R8,
            Self::Rgb8 => PixelFormat::Rgb8,
            Self::Rgba8 => PixelFormat::Rgba8,
            Self::Rgb5 | Self::Rgb5A1 => return None,
            Self::Rgba4 => PixelFormat::Rgba4444,
            Self::Bc1 | Self::Bc1a => PixelFormat::Dxt1,
            Self::Bc2 => PixelFormat::Dxt3,
            Self::Bc3 => PixelFormat::Dxt5,
            Self::Bc4 => PixelFormat::RgtcR,
            Self::Bc5 => PixelFormat::RgtcRg,
            Self::L8 => PixelFormat::L8,
            Self::L8A8 => PixelFormat::La8,
        };
        Some(format)
    }

    /// Expected payload size in bytes for one level of `width` × `height`.
    ///
    /// Returns [`None`] if the size does not fit in a `usize`.
    pub fn data_size(self, width: u32, height: u32) -> Option<usize> {
        match self {
            Self::A8 | Self::L8 => packed_size(width, height, 1),
            Self::Rgb5 | Self::Rgb5A1 | Self::Rgba4 | Self::L8A8 => packed_size(width, height, 2),
            Self::Rgb8 => packed_size(width, height, 3),
            Self::Rgba8 => packed_size(width, height, 4),
            Self::Bc1 | Self::Bc1a | Self::Bc4 => block_size(width, height, 8),
            Self::Bc2 | Self::Bc3 | Self::Bc5 => block_size(width, height, 16),
        }
    }
}

impl TryFrom<u32> for TextureFormat {
    type Error = Error;

    fn try_from(v: u32) -> Result<Self> {
        Self::ALL
            .get(v as usize)
            .copied()
            .ok_or(Error::UnknownFormat(v))
    }
}

impl fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PixelFormat {
    /// Whether the format is stored as 4×4 compressed blocks.
    pub fn is_block_compressed(self) -> bool {
        matches!(
            self,
            Self::Dxt1 | Self::Dxt3 | Self::Dxt5 | Self::RgtcR | Self::RgtcRg
        )
    }

    /// Size in bytes of a single level of `width` × `height`.
    ///
    /// Block formats round both dimensions up to a multiple of 4. Returns
    /// [`None`] if the size does not fit in a `usize`.
    pub fn data_size(self, width: u32, height: u32) -> Option<usize> {
        match self {
            Self::R8 | Self::L8 => packed_size(width, height, 1),
            Self::Rgba4444 | Self::La8 => packed_size(width, height, 2),
            Self::Rgb8 => packed_size(width, height, 3),
            Self::Rgba8 => packed_size(width, height, 4),
            Self::Dxt1 | Self::RgtcR => block_size(width, height, 8),
            Self::Dxt3 | Self::Dxt5 | Self::RgtcRg => block_size(width, height, 16),
        }
    }
}

/// `width × height × bytes_per_pixel`, or [`None`] on overflow.
fn packed_size(width: u32, height: u32, bytes_per_pixel: usize) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(bytes_per_pixel)
}

/// Whole 4×4 blocks covering `width × height`, or [`None`] on overflow.
fn block_size(width: u32, height: u32, bytes_per_block: usize) -> Option<usize> {
    (width as usize)
        .div_ceil(4)
        .checked_mul((height as usize).div_ceil(4))?
        .checked_mul(bytes_per_block)
}
