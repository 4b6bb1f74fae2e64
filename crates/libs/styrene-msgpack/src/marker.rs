//! MessagePack type tags emitted by this encoder.
//!
//! Values are fixed by the MessagePack format specification.

/// Nil.
pub const NIL: u8 = 0xc0;
/// Boolean `false`.
pub const FALSE: u8 = 0xc2;
/// Boolean `true`.
pub const TRUE: u8 = 0xc3;

/// Binary, 1-byte length.
pub const BIN8: u8 = 0xc4;
/// Binary, 2-byte length.
pub const BIN16: u8 = 0xc5;
/// Binary, 4-byte length.
pub const BIN32: u8 = 0xc6;

/// Extension, 1-byte length.
pub const EXT8: u8 = 0xc7;
/// Extension, 2-byte length.
pub const EXT16: u8 = 0xc8;
/// Extension, 4-byte length.
pub const EXT32: u8 = 0xc9;

/// IEEE-754 single precision.
pub const FLOAT32: u8 = 0xca;
/// IEEE-754 double precision.
pub const FLOAT64: u8 = 0xcb;

/// Unsigned 8-bit integer.
pub const UINT8: u8 = 0xcc;
/// Unsigned 16-bit integer.
pub const UINT16: u8 = 0xcd;
/// Unsigned 32-bit integer.
pub const UINT32: u8 = 0xce;
/// Unsigned 64-bit integer.
pub const UINT64: u8 = 0xcf;

/// Signed 8-bit integer.
pub const INT8: u8 = 0xd0;
/// Signed 16-bit integer.
pub const INT16: u8 = 0xd1;
/// Signed 32-bit integer.
pub const INT32: u8 = 0xd2;
/// Signed 64-bit integer.
pub const INT64: u8 = 0xd3;

/// Extension with a 1-byte payload.
pub const FIXEXT1: u8 = 0xd4;
/// Extension with a 2-byte payload.
pub const FIXEXT2: u8 = 0xd5;
/// Extension with a 4-byte payload.
pub const FIXEXT4: u8 = 0xd6;
/// Extension with an 8-byte payload.
pub const FIXEXT8: u8 = 0xd7;
/// Extension with a 16-byte payload.
pub const FIXEXT16: u8 = 0xd8;

/// String, 1-byte length.
pub const STR8: u8 = 0xd9;
/// String, 2-byte length.
pub const STR16: u8 = 0xda;
/// String, 4-byte length.
pub const STR32: u8 = 0xdb;

/// Array, 2-byte element count.
pub const ARRAY16: u8 = 0xdc;
/// Array, 4-byte element count.
pub const ARRAY32: u8 = 0xdd;

/// `0b101x_xxxx`: string with the length in the low 5 bits.
pub const FIXSTR: u8 = 0xa0;
/// Longest string that fits the inline `FIXSTR` form.
pub const FIXSTR_MAX_LEN: usize = 31;

/// `0b1001_xxxx`: array with the element count in the low 4 bits.
pub const FIXARRAY: u8 = 0x90;
/// Largest element count that fits the inline `FIXARRAY` form.
pub const FIXARRAY_MAX_LEN: usize = 15;
