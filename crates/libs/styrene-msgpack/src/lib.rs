//! # styrene-msgpack
//!
//! Append-only MessagePack encoder used for Styrene wire payloads.
//!
//! Every operation appends one value's encoding to a caller-owned `Vec<u8>`.
//! The encoder holds no state and never fails. Each value of a given Rust type
//! has exactly one encoding.
//!
//! ## Wire Format
//!
//! ```text
//! int8..int64     d0 d1 d2 d3          tag + big-endian two's complement
//! uint8..uint64   cc cd ce cf          tag + big-endian unsigned
//! float32/64      ca cb                tag + big-endian IEEE-754 bits
//! str             a0-bf / d9 da db     fixstr / str8 / str16 / str32
//! bin             c4 c5 c6             bin8 / bin16 / bin32 (no inline form)
//! array           90-9f / dc dd        header only, elements follow
//! ext             d4-d8 / c7 c8 c9     fixext1..16 / ext8 / ext16 / ext32
//! timestamp       d6 01 / d7 01        32-bit seconds / packed 34+30 bits
//! nil, bool       c0, c2 c3
//! ```
//!
//! Fixed-width integers always use the sized tag; the compact fixint forms are
//! never emitted.
//!
//! ## Example
//!
//! ```rust
//! use styrene_msgpack::{append_array_len, append_str, append_u16, append_nil};
//!
//! let mut buf = Vec::new();
//! append_array_len(&mut buf, 3);
//! append_str(&mut buf, "ping");
//! append_u16(&mut buf, 4242);
//! append_nil(&mut buf);
//! assert_eq!(buf, [0x93, 0xa4, b'p', b'i', b'n', b'g', 0xcd, 0x10, 0x92, 0xc0]);
//! ```
//!
//! ## Crate Family
//!
//! This crate is part of the [styrene-rs](https://github.com/styrene-lab/styrene-rs)
//! workspace. It carries no decoder: peers decode with any conforming
//! MessagePack implementation.

mod error;
mod header;
pub mod marker;
mod payload;
mod scalar;
mod timestamp;

pub use error::TimestampError;
pub use header::append_array_len;
pub use payload::{append_bytes, append_ext, append_str, append_str_bytes};
pub use scalar::{
    append_bool, append_f32, append_f64, append_i16, append_i32, append_i64, append_i8,
    append_nil, append_u16, append_u32, append_u64, append_u8,
};
pub use timestamp::{append_timestamp, append_timestamp_parts, Timestamp, TIMESTAMP_EXT_KIND};
