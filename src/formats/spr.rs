//! SPR - DIVA sprite set.
//!
//! A sprite set names rectangular regions of the textures in an embedded
//! texture set. The header is a flat list of counts and absolute offsets;
//! each table is reached with a plain seek.
//!
//! ## Header (0x20 bytes)
//! ```text
//! [0x00] Flags                 (u32 LE)
//! [0x04] TexturesOffset        (u32 LE, abs)
//! [0x08] TextureCount          (u32 LE)
//! [0x0C] SpriteCount           (u32 LE)
//! [0x10] SpriteInfoOffset      (u32 LE, abs)
//! [0x14] TextureNameOffset     (u32 LE, abs; not read by this decoder)
//! [0x18] SpriteNameOffset      (u32 LE, abs)
//! [0x1C] SpriteDataOffset      (u32 LE, abs)
//! ```
//!
//! ## Sprite info (0x28 bytes, SpriteCount entries)
//! ```text
//! [0x00] TextureId             (u32 LE)
//! [0x04] Rotate                (i32 LE)
//! [0x08] Rect x, y, w, h       (4 × f32 LE)
//! [0x18] Pos x, y              (2 × f32 LE)
//! [0x20] Size w, h             (2 × f32 LE)
//! ```
//!
//! ## Sprite names (SpriteCount × u32 LE)
//! Absolute offsets of null-terminated names.
//!
//! ## Sprite data (SpriteCount × 8 bytes)
//! ```text
//! [0x00] Attributes            (u32 LE)
//! [0x04] ResolutionMode        (u32 LE)
//! ```
//!
//! ## Textures (at TexturesOffset)
//! TextureCount texture sets (see [`super::txp`]). Real files carry exactly
//! one; when more are declared each is decoded in turn from where the
//! previous one left the cursor, and only the last is kept.

use std::io::Read;

use log::{debug, warn};

use crate::stream::StreamCursor;
use crate::{Error, Result};

use super::txp::{Texture, TextureSet};

/// An axis-aligned rectangle in texture pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// One sprite record, merged from the info, name and data tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpriteInfo {
    /// Index into the texture set's textures.
    pub texture_id: u32,
    pub rotate: i32,
    pub rect: Rect,
    pub pos: Vec2,
    pub size: Vec2,
    pub name: String,
    pub attributes: u32,
    /// Passed through unchanged; its meaning is not known.
    pub resolution_mode: u32,
}

/// Parsed sprite set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpriteSet {
    pub flags: u32,
    /// Sprites in table order.
    pub sprite_infos: Vec<SpriteInfo>,
    /// Embedded textures. Empty when the header declares none.
    pub texture_set: TextureSet,
}

impl SpriteSet {
    /// Decode a sprite set whose header is at the cursor's current position.
    ///
    /// Table offsets in the header are absolute positions in the buffer.
    pub fn parse(cursor: &mut StreamCursor<'_>) -> Result<Self> {
        let flags = cursor.read_u32()?;
        let textures_offset = cursor.read_u32()? as usize;
        let texture_count = cursor.read_u32()?;
        let sprite_count = cursor.read_u32()?;
        let sprite_info_offset = cursor.read_u32()? as usize;
        let _texture_name_offset = cursor.read_u32()?;
        let sprite_name_offset = cursor.read_u32()? as usize;
        let sprite_data_offset = cursor.read_u32()? as usize;

        debug!(
            "sprite set: {sprite_count} sprites, {texture_count} texture sets at {textures_offset:#x}"
        );

        // Each info record is 0x28 bytes; never reserve more than could fit.
        let capacity = (sprite_count as usize).min(cursor.len() / 0x28);
        let mut sprite_infos = Vec::with_capacity(capacity);

        cursor.seek(sprite_info_offset);
        for _ in 0..sprite_count {
            sprite_infos.push(read_sprite_info(cursor)?);
        }

        cursor.seek(sprite_name_offset);
        for sprite in &mut sprite_infos {
            let name_offset = cursor.read_u32()? as usize;
            sprite.name = cursor.null_string_at(name_offset)?;
        }

        cursor.seek(sprite_data_offset);
        for sprite in &mut sprite_infos {
            sprite.attributes = cursor.read_u32()?;
            sprite.resolution_mode = cursor.read_u32()?;
        }

        if texture_count > 1 {
            warn!("sprite set declares {texture_count} texture sets, keeping the last");
        }

        cursor.seek(textures_offset);
        let mut texture_set = TextureSet::default();
        for _ in 0..texture_count {
            texture_set = TextureSet::parse(cursor)?;
        }

        Ok(Self {
            flags,
            sprite_infos,
            texture_set,
        })
    }

    /// Decode a sprite set that starts at the beginning of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::parse(&mut StreamCursor::new(bytes))
    }

    /// Buffer all of `r`, then decode it as a sprite set.
    pub fn read_from<R: Read>(mut r: R) -> Result<Self> {
        let mut bytes = Vec::new();
        r.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// The embedded texture set.
    pub fn texture_set(&self) -> &TextureSet {
        &self.texture_set
    }

    /// Find a sprite by its exact name. Returns [`None`] if not found.
    pub fn get_sprite_by_name(&self, name: &str) -> Option<&SpriteInfo> {
        self.sprite_infos.iter().find(|s| s.name == name)
    }

    /// The texture `sprite` is cut from.
    ///
    /// Returns [`Error::InvalidIndex`] if its texture id is out of range.
    pub fn texture_for(&self, sprite: &SpriteInfo) -> Result<&Texture> {
        let index = sprite.texture_id as usize;
        let textures = &self.texture_set.textures;
        textures.get(index).ok_or(Error::InvalidIndex {
            index,
            len: textures.len(),
        })
    }
}

fn read_sprite_info(cursor: &mut StreamCursor<'_>) -> Result<SpriteInfo> {
    let texture_id = cursor.read_u32()?;
    let rotate = cursor.read_i32()?;
    let rect = Rect {
        x: cursor.read_f32()?,
        y: cursor.read_f32()?,
        width: cursor.read_f32()?,
        height: cursor.read_f32()?,
    };
    let pos = Vec2 {
        x: cursor.read_f32()?,
        y: cursor.read_f32()?,
    };
    let size = Vec2 {
        x: cursor.read_f32()?,
        y: cursor.read_f32()?,
    };

    Ok(SpriteInfo {
        texture_id,
        rotate,
        rect,
        pos,
        size,
        ..SpriteInfo::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_record_field_order() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&3u32.to_le_bytes());
        bytes.extend_from_slice(&(-1i32).to_le_bytes());
        for v in [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        let mut cursor = StreamCursor::new(&bytes);
        let info = read_sprite_info(&mut cursor).unwrap();
        assert_eq!(cursor.tell(), 0x28);
        assert_eq!(info.texture_id, 3);
        assert_eq!(info.rotate, -1);
        assert_eq!(
            info.rect,
            Rect {
                x: 1.0,
                y: 2.0,
                width: 3.0,
                height: 4.0
            }
        );
        assert_eq!(info.pos, Vec2 { x: 5.0, y: 6.0 });
        assert_eq!(info.size, Vec2 { x: 7.0, y: 8.0 });
    }

    #[test]
    fn truncated_header_is_out_of_bounds() {
        let bytes = [0u8; 12];
        assert!(matches!(
            SpriteSet::from_bytes(&bytes),
            Err(Error::OutOfBounds { .. })
        ));
    }
}
