//! Decoded pixel buffers ready to hand to a renderer or image library.

use crate::pixel::PixelFormat;
use crate::{Error, Result};

/// A single-level 2D image in a standard pixel format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub data: Vec<u8>,
}

impl Image {
    /// Wrap `data` as a `width` × `height` image.
    ///
    /// Returns [`Error::SizeMismatch`] unless `data` is exactly the size the
    /// format requires for those dimensions. Dimensions whose size overflows
    /// report `usize::MAX` as the expected size.
    pub fn from_data(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Result<Self> {
        let expected = format.data_size(width, height);
        if expected != Some(data.len()) {
            return Err(Error::SizeMismatch {
                expected: expected.unwrap_or(usize::MAX),
                found: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_payload() {
        let img = Image::from_data(2, 2, PixelFormat::La8, vec![0; 8]).unwrap();
        assert_eq!(img.size(), (2, 2));
    }

    #[test]
    fn rejects_short_payload() {
        let err = Image::from_data(4, 4, PixelFormat::Dxt1, vec![0; 4]).unwrap_err();
        assert!(matches!(
            err,
            Error::SizeMismatch {
                expected: 8,
                found: 4
            }
        ));
    }

    #[test]
    fn rejects_overflowing_dimensions() {
        let err = Image::from_data(u32::MAX, u32::MAX, PixelFormat::Rgba8, vec![0; 4]).unwrap_err();
        assert!(matches!(
            err,
            Error::SizeMismatch {
                expected: usize::MAX,
                found: 4
            }
        ));
    }
}
