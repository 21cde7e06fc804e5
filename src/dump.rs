//! JSON dump of texture-set metadata for debugging and tooling.
//!
//! Pixel payloads are never written. The document shape is:
//! ```text
//! {
//!  "textures": [
//!   {
//!    "cube_map": false,
//!    "array_size": 1,
//!    "mipmaps": [ { "format": "BC3", "size": [256, 128] }, ... ]
//!   }
//!  ]
//! }
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::Result;
use crate::formats::txp::{Mipmap, Texture, TextureSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureSetDump {
    pub textures: Vec<TextureDump>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureDump {
    pub cube_map: bool,
    pub array_size: u8,
    pub mipmaps: Vec<MipmapDump>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MipmapDump {
    /// Native format name, e.g. `"RGBA8"`.
    pub format: String,
    /// `[width, height]`
    pub size: [u32; 2],
}

impl From<&Mipmap> for MipmapDump {
    fn from(m: &Mipmap) -> Self {
        Self {
            format: m.format.name().to_owned(),
            size: [m.width, m.height],
        }
    }
}

impl From<&Texture> for TextureDump {
    fn from(t: &Texture) -> Self {
        Self {
            cube_map: t.cube_map,
            array_size: t.array_size,
            mipmaps: t.mipmaps.iter().map(MipmapDump::from).collect(),
        }
    }
}

impl From<&TextureSet> for TextureSetDump {
    fn from(set: &TextureSet) -> Self {
        Self {
            textures: set.textures.iter().map(TextureDump::from).collect(),
        }
    }
}

/// Serialize `set`'s metadata to `w`, pretty-printed with a one-space indent.
pub fn write_json<W: Write>(set: &TextureSet, w: W) -> Result<()> {
    let dump = TextureSetDump::from(set);
    let mut ser = Serializer::with_formatter(w, PrettyFormatter::with_indent(b" "));
    dump.serialize(&mut ser)?;
    Ok(())
}

/// Serialize `set`'s metadata to a JSON string.
pub fn to_json_string(set: &TextureSet) -> Result<String> {
    let mut out = Vec::new();
    write_json(set, &mut out)?;
    String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Write `set`'s metadata to the file at `path`, replacing it if present.
pub fn dump_json<P: AsRef<Path>>(set: &TextureSet, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut w = BufWriter::new(File::create(path)?);
    write_json(set, &mut w)?;
    w.flush()?;
    info!("wrote texture set dump to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::TextureFormat;

    fn sample() -> TextureSet {
        TextureSet {
            textures: vec![Texture {
                cube_map: false,
                array_size: 1,
                mipmap_count: 2,
                mipmaps: vec![
                    Mipmap {
                        width: 8,
                        height: 4,
                        format: TextureFormat::Bc1a,
                        id: 0,
                        data: vec![0xAA; 16],
                    },
                    Mipmap {
                        width: 4,
                        height: 2,
                        format: TextureFormat::Bc1a,
                        id: 1,
                        data: vec![0xBB; 8],
                    },
                ],
            }],
        }
    }

    #[test]
    fn omits_pixel_data() {
        let json = to_json_string(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let mip = &value["textures"][0]["mipmaps"][1];
        assert_eq!(mip["format"], "BC1a");
        assert_eq!(mip["size"], serde_json::json!([4, 2]));
        assert!(mip.get("data").is_none());
        assert!(value["textures"][0].get("mipmap_count").is_none());
    }

    #[test]
    fn uses_single_space_indent() {
        let json = to_json_string(&sample()).unwrap();
        assert!(json.starts_with("{\n \"textures\": ["));
    }

    #[test]
    fn string_matches_file_output() {
        let set = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("set.json");
        dump_json(&set, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_json_string(&set).unwrap());
    }
}
