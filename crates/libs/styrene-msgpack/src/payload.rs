//! Length-prefixed payloads: strings, binary buffers and extensions.

use crate::header::{append_bin_len, append_ext_len, append_str_len};

/// Append a UTF-8 string (fixstr / str8 / str16 / str32).
pub fn append_str(dst: &mut Vec<u8>, s: &str) {
    append_str_bytes(dst, s.as_bytes());
}

/// Append raw bytes under a string header.
///
/// The bytes are not checked for UTF-8 validity.
pub fn append_str_bytes(dst: &mut Vec<u8>, s: &[u8]) {
    append_str_len(dst, s.len());
    dst.extend_from_slice(s);
}

/// Append an opaque binary buffer (bin8 / bin16 / bin32).
pub fn append_bytes(dst: &mut Vec<u8>, b: &[u8]) {
    append_bin_len(dst, b.len());
    dst.extend_from_slice(b);
}

/// Append an extension value: header, then the `kind` byte, then `payload`.
///
/// Payloads of exactly 1, 2, 4, 8 or 16 bytes use the fixext forms.
pub fn append_ext(dst: &mut Vec<u8>, kind: i8, payload: &[u8]) {
    append_ext_len(dst, payload.len());
    dst.push(kind as u8);
    dst.extend_from_slice(payload);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_is_fixstr() {
        let mut buf = Vec::new();
        append_str(&mut buf, "hi");
        assert_eq!(buf, [0xa2, b'h', b'i']);
    }

    #[test]
    fn empty_string_is_bare_header() {
        let mut buf = Vec::new();
        append_str(&mut buf, "");
        assert_eq!(buf, [0xa0]);
    }

    #[test]
    fn string_length_counts_utf8_bytes() {
        let mut buf = Vec::new();
        append_str(&mut buf, "é");
        assert_eq!(buf, [0xa2, 0xc3, 0xa9]);
    }

    #[test]
    fn str_bytes_skips_utf8_validation() {
        let mut buf = Vec::new();
        append_str_bytes(&mut buf, &[0xff, 0xfe]);
        assert_eq!(buf, [0xa2, 0xff, 0xfe]);
    }

    #[test]
    fn empty_bytes_keep_bin8_header() {
        let mut buf = Vec::new();
        append_bytes(&mut buf, &[]);
        assert_eq!(buf, [0xc4, 0x00]);
    }

    #[test]
    fn bytes_follow_header() {
        let mut buf = Vec::new();
        append_bytes(&mut buf, &[0xde, 0xad]);
        assert_eq!(buf, [0xc4, 0x02, 0xde, 0xad]);
    }

    #[test]
    fn ext_kind_precedes_payload() {
        let mut buf = Vec::new();
        append_ext(&mut buf, 5, &[0x01; 8]);
        assert_eq!(&buf[..2], &[0xd7, 0x05]);
        assert_eq!(buf.len(), 10);

        buf.clear();
        append_ext(&mut buf, -1, &[0xaa, 0xbb, 0xcc]);
        assert_eq!(buf, [0xc7, 0x03, 0xff, 0xaa, 0xbb, 0xcc]);
    }
}
