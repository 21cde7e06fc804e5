use std::env;
use std::fs;

use divakit::Result;
use divakit::formats::spr::SpriteSet;
use divakit::formats::txp::{SET_SIGNATURE, TextureSet};

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("usage: txp_info <file.txp|file.spr> [dump.json]");
        return Ok(());
    };

    let bytes = fs::read(&input)?;

    // A bare texture set starts with its signature; anything else is
    // treated as a sprite set.
    let textures = if bytes.get(..4) == Some(&SET_SIGNATURE.to_le_bytes()[..]) {
        TextureSet::from_bytes(&bytes)?
    } else {
        let sprites = SpriteSet::from_bytes(&bytes)?;
        for sprite in &sprites.sprite_infos {
            let r = sprite.rect;
            println!(
                "sprite {:<32} texture {} rect ({}, {}, {}, {})",
                sprite.name, sprite.texture_id, r.x, r.y, r.width, r.height
            );
        }
        sprites.texture_set
    };

    for (i, tex) in textures.textures.iter().enumerate() {
        let base = tex.base_level();
        println!(
            "texture {i}: cube_map={} array_size={} mipmaps={} base={:?} {}",
            tex.cube_map,
            tex.array_size,
            tex.mipmap_count,
            base.map(|m| m.size()),
            base.map(|m| m.format.name()).unwrap_or("-"),
        );
    }

    if let Some(out) = args.next() {
        textures.dump_json(out)?;
    }

    Ok(())
}
