//! **divakit** - a reader for the DIVA texture-set and sprite-set binary
//! containers.
//!
//! # Supported formats
//! | Module | Format |
//! |--------|--------|
//! | [`formats::txp`] | TXP - texture set (textures, array slices, mip chains) |
//! | [`formats::spr`] | SPR - sprite set (sprite table + embedded texture set) |
//!
//! Decoding produces plain owned data: pixel payloads are copied out of the
//! input buffer untouched. [`pixel`] maps the container's native pixel formats
//! onto a general-purpose [`pixel::PixelFormat`], [`image`] wraps a payload
//! with that format, and [`dump`] writes texture metadata as JSON for
//! tooling.
//!
//! ```no_run
//! use divakit::formats::spr::SpriteSet;
//!
//! let bytes = std::fs::read("spr_gam_cmn.bin")?;
//! let set = SpriteSet::from_bytes(&bytes)?;
//! for sprite in &set.sprite_infos {
//!     println!("{} -> texture {}", sprite.name, sprite.texture_id);
//! }
//! set.texture_set.dump_json("textures.json")?;
//! # Ok::<(), divakit::Error>(())
//! ```

pub mod dump;
pub mod error;
pub mod formats;
pub mod image;
pub mod offset;
pub mod pixel;
pub mod stream;

pub use error::{Error, Result};
