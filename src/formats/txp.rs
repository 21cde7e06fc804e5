//! TXP - DIVA texture set.
//!
//! A texture set holds one or more textures; each texture holds
//! `array_size` slices of `mipmap_count` levels. Every level is its own
//! sub-block reached through an offset table, and every offset is relative
//! to the start of the enclosing block.
//!
//! ## Layout
//! ```text
//! [set_start]
//! [0x00] Signature 0x03505854 ("TXP\x03")   (u32 LE)
//! [0x04] TextureCount                       (u32 LE)
//! [0x08] Reserved (skipped)                 (u32 LE)
//! [0x0C] TextureOffsets                     (TextureCount × u32, rel to set_start)
//! ```
//!
//! ## Texture (at `set_start + offset`)
//! ```text
//! [0x00] Signature 0x04505854 (2D) | 0x05505854 (cube map)  (u32 LE)
//! [0x04] SubtextureCount                                    (u32 LE)
//! [0x08] TexInfo: bits 0-7 MipmapCount, bits 8-15 ArraySize (u32 LE)
//! [0x0C] MipOffsets  (ArraySize × MipmapCount × u32, rel to texture start)
//! ```
//! Any other texture signature marks a placeholder entry, which is skipped.
//! Mip offsets are stored array-major: all levels of slice 0, then slice 1.
//!
//! ## Mip level (at `texture_start + mip_offset`)
//! ```text
//! [0x00] Signature 0x02505854  (u32 LE)
//! [0x04] Width                 (u32 LE)
//! [0x08] Height                (u32 LE)
//! [0x0C] Format                (u32 LE, see [`TextureFormat`])
//! [0x10] Id                    (u32 LE)
//! [0x14] DataSize              (u32 LE)
//! [0x18] Data                  (DataSize bytes)
//! ```

use std::io::Read;
use std::path::Path;

use log::{debug, trace, warn};

use crate::image::Image;
use crate::offset::OffsetStack;
use crate::pixel::TextureFormat;
use crate::stream::StreamCursor;
use crate::{Error, Result};

/// Signature of a texture-set block.
pub const SET_SIGNATURE: u32 = 0x0350_5854;
/// Signature of a regular 2D texture / texture array.
pub const TEXTURE_SIGNATURE: u32 = 0x0450_5854;
/// Signature of a cube-map texture.
pub const CUBE_MAP_SIGNATURE: u32 = 0x0550_5854;
/// Signature of a mip-level block.
pub const MIPMAP_SIGNATURE: u32 = 0x0250_5854;

/// One resolution level of one array slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mipmap {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub id: u32,
    /// Raw pixel payload, exactly as stored.
    pub data: Vec<u8>,
}

impl Mipmap {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Copy this level into an [`Image`] in the mapped standard format.
    ///
    /// Fails with [`Error::UnsupportedFormat`] for formats without a
    /// standard equivalent, or [`Error::SizeMismatch`] when the payload
    /// length does not fit the dimensions.
    pub fn to_image(&self) -> Result<Image> {
        let format = self
            .format
            .to_pixel_format()
            .ok_or(Error::UnsupportedFormat(self.format))?;
        Image::from_data(self.width, self.height, format, self.data.clone())
    }
}

/// A texture: `array_size` slices of `mipmap_count` levels each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pub cube_map: bool,
    pub array_size: u8,
    pub mipmap_count: u8,
    /// `array_size * mipmap_count` levels, indexed
    /// `array_index * mipmap_count + mip_index`.
    pub mipmaps: Vec<Mipmap>,
}

impl Texture {
    /// Level `mip_index` of slice `array_index`.
    pub fn mipmap(&self, array_index: usize, mip_index: usize) -> Option<&Mipmap> {
        let count = self.mipmap_count as usize;
        if array_index >= self.array_size as usize || mip_index >= count {
            return None;
        }
        self.mipmaps.get(array_index * count + mip_index)
    }

    /// The largest level of the first slice.
    pub fn base_level(&self) -> Option<&Mipmap> {
        self.mipmap(0, 0)
    }
}

/// Parsed texture set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextureSet {
    /// Textures in table order. Skipped placeholder entries leave no gap,
    /// so this may be shorter than the declared texture count.
    pub textures: Vec<Texture>,
}

impl TextureSet {
    /// Decode a texture set starting at the cursor's current position.
    ///
    /// On return the cursor sits just past the texture offset table.
    pub fn parse(cursor: &mut StreamCursor<'_>) -> Result<Self> {
        let set_start = cursor.tell();

        cursor.expect_signature(SET_SIGNATURE)?;
        let texture_count = cursor.read_u32()?;
        // Reserved word; nothing in it is consumed.
        let _reserved = cursor.read_u32()?;

        debug!("texture set at {set_start:#x}: {texture_count} textures");

        let capacity = (texture_count as usize).min(cursor.remaining() / 4);
        let mut textures = Vec::with_capacity(capacity);

        let mut stack = OffsetStack::new(cursor);
        for index in 0..texture_count {
            let texture_start = set_start.saturating_add(stack.read_u32()? as usize);
            match stack.scoped(texture_start, |s| parse_texture(s, texture_start))? {
                Some(texture) => textures.push(texture),
                None => warn!("texture {index} at {texture_start:#x} has no texture signature, skipping"),
            }
        }

        Ok(Self { textures })
    }

    /// Decode a texture set that starts at the beginning of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::parse(&mut StreamCursor::new(bytes))
    }

    /// Buffer all of `r`, then decode it as a texture set.
    pub fn read_from<R: Read>(mut r: R) -> Result<Self> {
        let mut bytes = Vec::new();
        r.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Materialize every level of texture `index` as an [`Image`], in
    /// storage order.
    pub fn get_texture_mipmaps(&self, index: usize) -> Result<Vec<Image>> {
        let texture = self.textures.get(index).ok_or(Error::InvalidIndex {
            index,
            len: self.textures.len(),
        })?;
        texture.mipmaps.iter().map(Mipmap::to_image).collect()
    }

    /// Write this set's metadata to `path` as JSON.
    ///
    /// See [`crate::dump`].
    pub fn dump_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        crate::dump::dump_json(self, path)
    }
}

/// Parse one texture; the stack is positioned at its signature.
///
/// Returns [`None`] for entries whose signature is neither texture kind.
fn parse_texture(s: &mut OffsetStack<'_, '_>, texture_start: usize) -> Result<Option<Texture>> {
    let cube_map = match s.read_u32()? {
        TEXTURE_SIGNATURE => false,
        CUBE_MAP_SIGNATURE => true,
        _ => return Ok(None),
    };

    let subtex_count = s.read_u32()?;
    let tex_info = s.read_u32()?;
    let array_size = ((tex_info >> 8) & 0xFF) as u8;
    let mut mipmap_count = (tex_info & 0xFF) as u8;

    // Some encoders write a stale mip count for single-slice textures; the
    // sub-texture count is authoritative there.
    if array_size == 1 && u32::from(mipmap_count) != subtex_count {
        mipmap_count = (subtex_count & 0xFF) as u8;
    }

    let mut mipmaps = Vec::with_capacity(array_size as usize * mipmap_count as usize);
    for _array_index in 0..array_size {
        for _mip_index in 0..mipmap_count {
            let mip_start = texture_start.saturating_add(s.read_u32()? as usize);
            mipmaps.push(s.scoped(mip_start, parse_mipmap)?);
        }
    }

    Ok(Some(Texture {
        cube_map,
        array_size,
        mipmap_count,
        mipmaps,
    }))
}

fn parse_mipmap(s: &mut OffsetStack<'_, '_>) -> Result<Mipmap> {
    s.expect_signature(MIPMAP_SIGNATURE)?;
    let width = s.read_u32()?;
    let height = s.read_u32()?;
    let format = TextureFormat::try_from(s.read_u32()?)?;
    let id = s.read_u32()?;
    let data_size = s.read_u32()? as usize;
    let data = s.read_bytes(data_size)?;

    trace!("mip {id}: {width}x{height} {format}, {data_size} bytes");

    Ok(Mipmap {
        width,
        height,
        format,
        id,
        data,
    })
}
