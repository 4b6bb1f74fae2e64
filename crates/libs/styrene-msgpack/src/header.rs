//! Length-prefix headers shared by the variable-length encoders.
//!
//! Lengths are tiered by size: the smallest header that can hold the length is
//! chosen. The widest tier carries a 32-bit length; longer inputs keep only the
//! low 32 bits, which is the format's own ceiling.

use crate::marker;

/// Append the header for an array of `len` elements.
///
/// Only the header is written. The caller appends exactly `len` encoded values
/// immediately afterwards.
pub fn append_array_len(dst: &mut Vec<u8>, len: usize) {
    if len <= marker::FIXARRAY_MAX_LEN {
        dst.push(marker::FIXARRAY | len as u8);
    } else if len <= u16::MAX as usize {
        dst.push(marker::ARRAY16);
        dst.extend_from_slice(&(len as u16).to_be_bytes());
    } else {
        dst.push(marker::ARRAY32);
        dst.extend_from_slice(&(len as u32).to_be_bytes());
    }
}

pub(crate) fn append_str_len(dst: &mut Vec<u8>, len: usize) {
    if len <= marker::FIXSTR_MAX_LEN {
        dst.push(marker::FIXSTR | len as u8);
    } else if len <= u8::MAX as usize {
        dst.extend_from_slice(&[marker::STR8, len as u8]);
    } else if len <= u16::MAX as usize {
        dst.push(marker::STR16);
        dst.extend_from_slice(&(len as u16).to_be_bytes());
    } else {
        dst.push(marker::STR32);
        dst.extend_from_slice(&(len as u32).to_be_bytes());
    }
}

// Binary payloads have no inline form: even an empty buffer gets BIN8.
pub(crate) fn append_bin_len(dst: &mut Vec<u8>, len: usize) {
    if len <= u8::MAX as usize {
        dst.extend_from_slice(&[marker::BIN8, len as u8]);
    } else if len <= u16::MAX as usize {
        dst.push(marker::BIN16);
        dst.extend_from_slice(&(len as u16).to_be_bytes());
    } else {
        dst.push(marker::BIN32);
        dst.extend_from_slice(&(len as u32).to_be_bytes());
    }
}

// The exact fixext sizes must win over the generic ranges.
pub(crate) fn append_ext_len(dst: &mut Vec<u8>, len: usize) {
    match len {
        1 => dst.push(marker::FIXEXT1),
        2 => dst.push(marker::FIXEXT2),
        4 => dst.push(marker::FIXEXT4),
        8 => dst.push(marker::FIXEXT8),
        16 => dst.push(marker::FIXEXT16),
        len if len <= u8::MAX as usize => dst.extend_from_slice(&[marker::EXT8, len as u8]),
        len if len <= u16::MAX as usize => {
            dst.push(marker::EXT16);
            dst.extend_from_slice(&(len as u16).to_be_bytes());
        }
        len => {
            dst.push(marker::EXT32);
            dst.extend_from_slice(&(len as u32).to_be_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn str_header(len: usize) -> Vec<u8> {
        let mut buf = Vec::new();
        append_str_len(&mut buf, len);
        buf
    }

    fn bin_header(len: usize) -> Vec<u8> {
        let mut buf = Vec::new();
        append_bin_len(&mut buf, len);
        buf
    }

    fn ext_header(len: usize) -> Vec<u8> {
        let mut buf = Vec::new();
        append_ext_len(&mut buf, len);
        buf
    }

    fn array_header(len: usize) -> Vec<u8> {
        let mut buf = Vec::new();
        append_array_len(&mut buf, len);
        buf
    }

    #[test]
    fn str_header_tiers() {
        assert_eq!(str_header(0), [0xa0]);
        assert_eq!(str_header(31), [0xbf]);
        assert_eq!(str_header(32), [0xd9, 32]);
        assert_eq!(str_header(255), [0xd9, 0xff]);
        assert_eq!(str_header(256), [0xda, 0x01, 0x00]);
        assert_eq!(str_header(65_535), [0xda, 0xff, 0xff]);
        assert_eq!(str_header(65_536), [0xdb, 0x00, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn bin_header_never_inline() {
        assert_eq!(bin_header(0), [0xc4, 0x00]);
        assert_eq!(bin_header(31), [0xc4, 31]);
        assert_eq!(bin_header(255), [0xc4, 0xff]);
        assert_eq!(bin_header(256), [0xc5, 0x01, 0x00]);
        assert_eq!(bin_header(65_535), [0xc5, 0xff, 0xff]);
        assert_eq!(bin_header(65_536), [0xc6, 0x00, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn array_header_tiers() {
        assert_eq!(array_header(0), [0x90]);
        assert_eq!(array_header(15), [0x9f]);
        assert_eq!(array_header(16), [0xdc, 0x00, 0x10]);
        assert_eq!(array_header(65_535), [0xdc, 0xff, 0xff]);
        assert_eq!(array_header(65_536), [0xdd, 0x00, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn ext_header_prefers_fixed_sizes() {
        assert_eq!(ext_header(1), [0xd4]);
        assert_eq!(ext_header(2), [0xd5]);
        assert_eq!(ext_header(4), [0xd6]);
        assert_eq!(ext_header(8), [0xd7]);
        assert_eq!(ext_header(16), [0xd8]);
    }

    #[test]
    fn ext_header_generic_tiers() {
        assert_eq!(ext_header(0), [0xc7, 0x00]);
        assert_eq!(ext_header(3), [0xc7, 0x03]);
        assert_eq!(ext_header(17), [0xc7, 0x11]);
        assert_eq!(ext_header(255), [0xc7, 0xff]);
        assert_eq!(ext_header(256), [0xc8, 0x01, 0x00]);
        assert_eq!(ext_header(65_535), [0xc8, 0xff, 0xff]);
        assert_eq!(ext_header(65_536), [0xc9, 0x00, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn headers_only_append() {
        let mut buf = vec![0xaa, 0xbb];
        append_array_len(&mut buf, 2);
        append_str_len(&mut buf, 1);
        assert_eq!(buf, [0xaa, 0xbb, 0x92, 0xa1]);
    }
}
