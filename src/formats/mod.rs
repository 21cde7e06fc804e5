//! Decoders for the DIVA texture and sprite containers.
//!
//! Both decoders follow the same conventions:
//!
//! * **Input is an in-memory buffer** read through a
//!   [`crate::stream::StreamCursor`]. `from_bytes` and `read_from`
//!   wrappers exist for the common cases.
//! * **Output is owned** - pixel payloads are copied out, nothing borrows
//!   from the input after `parse` returns.
//! * **All or nothing** - a fatal error aborts the whole decode and no
//!   partial container is returned.
//!
//! ## Format overview
//!
//! | Module  | Format | Description |
//! |---------|--------|-------------|
//! | [`txp`] | TXP    | Texture set; textures with array slices and mip chains |
//! | [`spr`] | SPR    | Sprite set; named sprite rectangles plus an embedded TXP |

pub mod spr;
pub mod txp;
