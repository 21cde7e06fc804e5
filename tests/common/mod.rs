//! Builders for synthetic TXP / SPR buffers.

#![allow(dead_code)]

pub const SET_SIG: u32 = 0x0350_5854;
pub const TEX_SIG: u32 = 0x0450_5854;
pub const CUBE_SIG: u32 = 0x0550_5854;
pub const MIP_SIG: u32 = 0x0250_5854;

pub fn push_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}

pub fn push_f32(out: &mut Vec<u8>, v: f32) {
    out.extend_from_slice(&v.to_le_bytes());
}

pub struct Mip {
    pub signature: u32,
    pub width: u32,
    pub height: u32,
    pub format: u32,
    pub id: u32,
    pub data: Vec<u8>,
}

impl Mip {
    pub fn new(width: u32, height: u32, format: u32, id: u32, data: Vec<u8>) -> Self {
        Self {
            signature: MIP_SIG,
            width,
            height,
            format,
            id,
            data,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for v in [
            self.signature,
            self.width,
            self.height,
            self.format,
            self.id,
            self.data.len() as u32,
        ] {
            push_u32(&mut out, v);
        }
        out.extend_from_slice(&self.data);
        out
    }
}

pub struct Tex {
    pub signature: u32,
    pub subtex_count: u32,
    pub tex_info: u32,
    /// One offset-table entry per mip, in storage order.
    pub mips: Vec<Mip>,
}

impl Tex {
    pub fn new(signature: u32, array_size: u32, mips: Vec<Mip>) -> Self {
        let mipmap_count = mips.len() as u32 / array_size.max(1);
        Self {
            signature,
            subtex_count: mips.len() as u32,
            tex_info: (array_size << 8) | mipmap_count,
            mips,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        push_u32(&mut out, self.signature);
        push_u32(&mut out, self.subtex_count);
        push_u32(&mut out, self.tex_info);
        let blocks: Vec<Vec<u8>> = self.mips.iter().map(Mip::encode).collect();
        append_with_offsets(&mut out, &blocks);
        out
    }
}

/// Write an offset table for `blocks` (relative to the start of `out`),
/// then the blocks themselves.
pub fn append_with_offsets(out: &mut Vec<u8>, blocks: &[Vec<u8>]) {
    let mut next = out.len() + 4 * blocks.len();
    for block in blocks {
        push_u32(out, next as u32);
        next += block.len();
    }
    for block in blocks {
        out.extend_from_slice(block);
    }
}

/// Encode a texture set from already-encoded texture blocks.
pub fn texture_set_from_blocks(blocks: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::new();
    push_u32(&mut out, SET_SIG);
    push_u32(&mut out, blocks.len() as u32);
    push_u32(&mut out, blocks.len() as u32 | 0x0100_0000);
    append_with_offsets(&mut out, blocks);
    out
}

pub fn texture_set(textures: &[Tex]) -> Vec<u8> {
    let blocks: Vec<Vec<u8>> = textures.iter().map(Tex::encode).collect();
    texture_set_from_blocks(&blocks)
}

/// The 4×4 RGBA8 cube-map set used by several tests.
pub fn rgba8_cube_map() -> Vec<u8> {
    let data: Vec<u8> = (0..64).collect();
    texture_set(&[Tex::new(
        CUBE_SIG,
        1,
        vec![Mip::new(4, 4, 2, 0, data)],
    )])
}

pub struct Sprite {
    pub name: &'static str,
    pub texture_id: u32,
    pub rotate: i32,
    pub rect: [f32; 4],
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub attributes: u32,
    pub resolution_mode: u32,
}

/// Encode a sprite set: header, info table, name offsets, data table,
/// name strings, then `textures` (the raw bytes at `textures_offset`).
pub fn sprite_set(flags: u32, texture_count: u32, sprites: &[Sprite], textures: &[u8]) -> Vec<u8> {
    let count = sprites.len();
    let info_offset = 0x20;
    let name_offset = info_offset + count * 0x28;
    let data_offset = name_offset + count * 4;
    let strings_offset = data_offset + count * 8;

    let mut strings = Vec::new();
    let mut string_offsets = Vec::new();
    for s in sprites {
        string_offsets.push(strings_offset + strings.len());
        strings.extend_from_slice(s.name.as_bytes());
        strings.push(0);
    }
    while strings.len() % 16 != 0 {
        strings.push(0);
    }
    let textures_offset = strings_offset + strings.len();

    let mut out = Vec::new();
    for v in [
        flags,
        textures_offset as u32,
        texture_count,
        count as u32,
        info_offset as u32,
        0xDEAD_BEEF,
        name_offset as u32,
        data_offset as u32,
    ] {
        push_u32(&mut out, v);
    }
    for s in sprites {
        push_u32(&mut out, s.texture_id);
        out.extend_from_slice(&s.rotate.to_le_bytes());
        for v in s.rect.iter().chain(&s.pos).chain(&s.size) {
            push_f32(&mut out, *v);
        }
    }
    for off in string_offsets {
        push_u32(&mut out, off as u32);
    }
    for s in sprites {
        push_u32(&mut out, s.attributes);
        push_u32(&mut out, s.resolution_mode);
    }
    out.extend_from_slice(&strings);
    assert_eq!(out.len(), textures_offset);
    out.extend_from_slice(textures);
    out
}
