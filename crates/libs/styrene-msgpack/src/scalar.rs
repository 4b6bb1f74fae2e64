//! Fixed-width scalars: integers, floats, nil and booleans.

use crate::marker;

/// Append nil (`0xc0`).
pub fn append_nil(dst: &mut Vec<u8>) {
    dst.push(marker::NIL);
}

/// Append `true` (`0xc3`) or `false` (`0xc2`).
pub fn append_bool(dst: &mut Vec<u8>, value: bool) {
    dst.push(if value { marker::TRUE } else { marker::FALSE });
}

/// Append an int8: `0xd0` + one byte.
pub fn append_i8(dst: &mut Vec<u8>, n: i8) {
    dst.extend_from_slice(&[marker::INT8, n as u8]);
}

/// Append an int16: `0xd1` + two big-endian bytes.
pub fn append_i16(dst: &mut Vec<u8>, n: i16) {
    dst.push(marker::INT16);
    dst.extend_from_slice(&n.to_be_bytes());
}

/// Append an int32: `0xd2` + four big-endian bytes.
pub fn append_i32(dst: &mut Vec<u8>, n: i32) {
    dst.push(marker::INT32);
    dst.extend_from_slice(&n.to_be_bytes());
}

/// Append an int64: `0xd3` + eight big-endian bytes.
pub fn append_i64(dst: &mut Vec<u8>, n: i64) {
    dst.push(marker::INT64);
    dst.extend_from_slice(&n.to_be_bytes());
}

/// Append a uint8: `0xcc` + one byte.
pub fn append_u8(dst: &mut Vec<u8>, n: u8) {
    dst.extend_from_slice(&[marker::UINT8, n]);
}

/// Append a uint16: `0xcd` + two big-endian bytes.
pub fn append_u16(dst: &mut Vec<u8>, n: u16) {
    dst.push(marker::UINT16);
    dst.extend_from_slice(&n.to_be_bytes());
}

/// Append a uint32: `0xce` + four big-endian bytes.
pub fn append_u32(dst: &mut Vec<u8>, n: u32) {
    dst.push(marker::UINT32);
    dst.extend_from_slice(&n.to_be_bytes());
}

/// Append a uint64: `0xcf` + eight big-endian bytes.
pub fn append_u64(dst: &mut Vec<u8>, n: u64) {
    dst.push(marker::UINT64);
    dst.extend_from_slice(&n.to_be_bytes());
}

/// Append a 32-bit float as its raw IEEE-754 bits.
///
/// NaN payloads, signed zero and subnormals are carried unchanged.
pub fn append_f32(dst: &mut Vec<u8>, value: f32) {
    dst.push(marker::FLOAT32);
    dst.extend_from_slice(&value.to_bits().to_be_bytes());
}

/// Append a 64-bit float as its raw IEEE-754 bits.
pub fn append_f64(dst: &mut Vec<u8>, value: f64) {
    dst.push(marker::FLOAT64);
    dst.extend_from_slice(&value.to_bits().to_be_bytes());
}
