//! Binary codec for cross-chain call arguments
//!
//! All multi-byte integers are little-endian.
//!
//! # VarInt
//! ```text
//! value < 0xFD          -> [value]
//! value <= 0xFFFF       -> [0xFD] ++ u16 (2 bytes)
//! value <= 0xFFFF_FFFF  -> [0xFE] ++ u32 (4 bytes)
//! otherwise             -> [0xFF] ++ u64 (8 bytes)
//! ```
//!
//! # VarBytes
//! `varint(len) ++ raw bytes`
//!
//! # Uint256
//! Exactly 32 bytes, least-significant byte first, zero-padded on the high end.
//! No length prefix.
//!
//! Writers append to a caller-owned buffer. Readers take the buffer and a read
//! offset and return the decoded value together with the offset just past it.

use std::str::FromStr;

use cosmwasm_std::Uint256;
use thiserror::Error;

/// Marker byte for a 2-byte varint body
pub const VAR_INT_U16_MARKER: u8 = 0xFD;

/// Marker byte for a 4-byte varint body
pub const VAR_INT_U32_MARKER: u8 = 0xFE;

/// Marker byte for an 8-byte varint body
pub const VAR_INT_U64_MARKER: u8 = 0xFF;

/// Width of a fixed 256-bit integer on the wire
pub const UINT256_WIDTH: usize = 32;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Buffer too short: needed {needed} bytes, {remaining} remaining")]
    BufferTooShort { needed: u64, remaining: usize },

    #[error("Value out of range: {value} does not fit in {width} bytes")]
    ValueOutOfRange { value: String, width: usize },

    #[error("Invalid integer: {value} is not a decimal number")]
    InvalidInteger { value: String },
}

pub type CodecResult<T> = Result<T, CodecError>;

// ============================================================================
// Writers
// ============================================================================

/// Append a variable-width unsigned integer
pub fn write_var_int(buffer: &mut Vec<u8>, value: u64) {
    if value < VAR_INT_U16_MARKER as u64 {
        buffer.push(value as u8);
    } else if value <= u16::MAX as u64 {
        buffer.push(VAR_INT_U16_MARKER);
        buffer.extend_from_slice(&(value as u16).to_le_bytes());
    } else if value <= u32::MAX as u64 {
        buffer.push(VAR_INT_U32_MARKER);
        buffer.extend_from_slice(&(value as u32).to_le_bytes());
    } else {
        buffer.push(VAR_INT_U64_MARKER);
        buffer.extend_from_slice(&value.to_le_bytes());
    }
}

/// Append a length-prefixed byte string
pub fn write_var_bytes(buffer: &mut Vec<u8>, value: &[u8]) {
    write_var_int(buffer, value.len() as u64);
    buffer.extend_from_slice(value);
}

/// Append a fixed 32-byte little-endian integer
pub fn write_uint256(buffer: &mut Vec<u8>, value: Uint256) {
    buffer.extend_from_slice(&value.to_le_bytes());
}

/// Number of bytes `write_var_int` emits for `value`
pub fn var_int_size(value: u64) -> usize {
    if value < VAR_INT_U16_MARKER as u64 {
        1
    } else if value <= u16::MAX as u64 {
        3
    } else if value <= u32::MAX as u64 {
        5
    } else {
        9
    }
}

// ============================================================================
// Readers
// ============================================================================

/// Read a variable-width unsigned integer starting at `offset`
pub fn read_var_int(buffer: &[u8], offset: usize) -> CodecResult<(u64, usize)> {
    let (first, offset) = read_bytes(buffer, offset, 1)?;
    match first[0] {
        VAR_INT_U16_MARKER => {
            let (body, offset) = read_array::<2>(buffer, offset)?;
            Ok((u16::from_le_bytes(body) as u64, offset))
        }
        VAR_INT_U32_MARKER => {
            let (body, offset) = read_array::<4>(buffer, offset)?;
            Ok((u32::from_le_bytes(body) as u64, offset))
        }
        VAR_INT_U64_MARKER => {
            let (body, offset) = read_array::<8>(buffer, offset)?;
            Ok((u64::from_le_bytes(body), offset))
        }
        value => Ok((value as u64, offset)),
    }
}

/// Read a length-prefixed byte string starting at `offset`
///
/// The declared length is checked against the remaining buffer before any
/// slice is taken, so a hostile length prefix cannot force an allocation.
pub fn read_var_bytes(buffer: &[u8], offset: usize) -> CodecResult<(&[u8], usize)> {
    let (len, offset) = read_var_int(buffer, offset)?;
    let remaining = buffer.len().saturating_sub(offset);
    if len > remaining as u64 {
        return Err(CodecError::BufferTooShort {
            needed: len,
            remaining,
        });
    }
    read_bytes(buffer, offset, len as usize)
}

/// Read a fixed 32-byte little-endian integer starting at `offset`
pub fn read_uint256(buffer: &[u8], offset: usize) -> CodecResult<(Uint256, usize)> {
    let (raw, offset) = read_array::<UINT256_WIDTH>(buffer, offset)?;
    Ok((Uint256::from_le_bytes(raw), offset))
}

/// Read exactly `count` raw bytes starting at `offset`
pub fn read_bytes(buffer: &[u8], offset: usize, count: usize) -> CodecResult<(&[u8], usize)> {
    let remaining = buffer.len().saturating_sub(offset);
    if count > remaining {
        return Err(CodecError::BufferTooShort {
            needed: count as u64,
            remaining,
        });
    }
    Ok((&buffer[offset..offset + count], offset + count))
}

fn read_array<const N: usize>(buffer: &[u8], offset: usize) -> CodecResult<([u8; N], usize)> {
    let (bytes, offset) = read_bytes(buffer, offset, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok((out, offset))
}

// ============================================================================
// Width checks
// ============================================================================

/// Decimal digits of `decimal`, surrounding whitespace removed
fn decimal_digits(decimal: &str) -> CodecResult<&str> {
    let digits = decimal.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::InvalidInteger {
            value: decimal.to_string(),
        });
    }
    Ok(digits)
}

/// Parse a decimal integer destined for a varint field
///
/// Values wider than 8 bytes are rejected rather than truncated to their low
/// bytes.
pub fn parse_var_int_value(decimal: &str) -> CodecResult<u64> {
    u64::from_str(decimal_digits(decimal)?).map_err(|_| CodecError::ValueOutOfRange {
        value: decimal.to_string(),
        width: 8,
    })
}

/// Parse a decimal integer destined for a fixed 32-byte field
///
/// Values at or above 2^256 are rejected rather than truncated to their low
/// 32 bytes.
pub fn parse_uint256_value(decimal: &str) -> CodecResult<Uint256> {
    Uint256::from_str(decimal_digits(decimal)?).map_err(|_| CodecError::ValueOutOfRange {
        value: decimal.to_string(),
        width: UINT256_WIDTH,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_var_int(value: u64) -> Vec<u8> {
        let mut buffer = Vec::new();
        write_var_int(&mut buffer, value);
        buffer
    }

    #[test]
    fn test_var_int_single_byte() {
        assert_eq!(encode_var_int(0), vec![0x00]);
        assert_eq!(encode_var_int(0x14), vec![0x14]);
        assert_eq!(encode_var_int(0xFC), vec![0xFC]);
    }

    #[test]
    fn test_var_int_boundaries() {
        assert_eq!(encode_var_int(0xFD), vec![0xFD, 0xFD, 0x00]);
        assert_eq!(encode_var_int(0xFFFF), vec![0xFD, 0xFF, 0xFF]);
        assert_eq!(encode_var_int(0x1_0000), vec![0xFE, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(encode_var_int(0xFFFF_FFFF), vec![0xFE, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(
            encode_var_int(0x1_0000_0000),
            vec![0xFF, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]
        );
        assert_eq!(
            encode_var_int(u64::MAX),
            vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn test_var_int_decodes_around_boundaries() {
        let values = [
            0u64,
            0xFC,
            0xFD,
            0xFE,
            0xFFFF,
            0x1_0000,
            0xFFFF_FFFF,
            0x1_0000_0000,
            u64::MAX,
        ];
        for value in values {
            let encoded = encode_var_int(value);
            assert_eq!(encoded.len(), var_int_size(value), "size of {:#x}", value);
            let (decoded, offset) = read_var_int(&encoded, 0).unwrap();
            assert_eq!(decoded, value);
            assert_eq!(offset, encoded.len());
        }
    }

    #[test]
    fn test_read_var_int_at_offset() {
        let buffer = [0xAA, 0xBB, 0xFD, 0x34, 0x12, 0xCC];
        let (value, offset) = read_var_int(&buffer, 2).unwrap();
        assert_eq!(value, 0x1234);
        assert_eq!(offset, 5);
    }

    /// Wider-than-needed encodings decode to the same value
    #[test]
    fn test_read_var_int_accepts_non_minimal() {
        assert_eq!(read_var_int(&[0xFD, 0x05, 0x00], 0).unwrap(), (5, 3));
        assert_eq!(
            read_var_int(&[0xFF, 0x05, 0, 0, 0, 0, 0, 0, 0], 0).unwrap(),
            (5, 9)
        );
    }

    #[test]
    fn test_read_var_int_truncated_body() {
        assert_eq!(
            read_var_int(&[0xFE, 0x01, 0x02], 0),
            Err(CodecError::BufferTooShort {
                needed: 4,
                remaining: 2
            })
        );
        assert_eq!(
            read_var_int(&[], 0),
            Err(CodecError::BufferTooShort {
                needed: 1,
                remaining: 0
            })
        );
    }

    #[test]
    fn test_var_bytes_layout() {
        let mut buffer = Vec::new();
        write_var_bytes(&mut buffer, &[0x11, 0x22, 0x33]);
        assert_eq!(buffer, vec![0x03, 0x11, 0x22, 0x33]);

        let (bytes, offset) = read_var_bytes(&buffer, 0).unwrap();
        assert_eq!(bytes, &[0x11, 0x22, 0x33]);
        assert_eq!(offset, 4);
    }

    #[test]
    fn test_var_bytes_empty() {
        let mut buffer = Vec::new();
        write_var_bytes(&mut buffer, &[]);
        assert_eq!(buffer, vec![0x00]);
        assert_eq!(read_var_bytes(&buffer, 0).unwrap(), (&[][..], 1));
    }

    #[test]
    fn test_var_bytes_long_prefix() {
        let value = vec![0x5A; 300];
        let mut buffer = Vec::new();
        write_var_bytes(&mut buffer, &value);
        assert_eq!(&buffer[..3], &[0xFD, 0x2C, 0x01]);
        assert_eq!(buffer.len(), 303);

        let (bytes, offset) = read_var_bytes(&buffer, 0).unwrap();
        assert_eq!(bytes, value.as_slice());
        assert_eq!(offset, 303);
    }

    #[test]
    fn test_read_var_bytes_truncated_everywhere() {
        let mut buffer = Vec::new();
        write_var_bytes(&mut buffer, &[0x42; 20]);

        for cut in 0..buffer.len() {
            let result = read_var_bytes(&buffer[..cut], 0);
            assert!(
                matches!(result, Err(CodecError::BufferTooShort { .. })),
                "truncation at {} should fail, got {:?}",
                cut,
                result
            );
        }
    }

    #[test]
    fn test_read_var_bytes_hostile_length() {
        // Declares u64::MAX bytes with nothing behind it
        let buffer = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
        assert_eq!(
            read_var_bytes(&buffer, 0),
            Err(CodecError::BufferTooShort {
                needed: u64::MAX,
                remaining: 0
            })
        );
    }

    #[test]
    fn test_uint256_layout() {
        let mut buffer = Vec::new();
        write_uint256(&mut buffer, Uint256::from(0x0102u128));
        assert_eq!(buffer.len(), UINT256_WIDTH);
        assert_eq!(buffer[0], 0x02);
        assert_eq!(buffer[1], 0x01);
        assert!(buffer[2..].iter().all(|b| *b == 0));

        let (value, offset) = read_uint256(&buffer, 0).unwrap();
        assert_eq!(value, Uint256::from(0x0102u128));
        assert_eq!(offset, UINT256_WIDTH);
    }

    #[test]
    fn test_uint256_max() {
        let mut buffer = Vec::new();
        write_uint256(&mut buffer, Uint256::MAX);
        assert_eq!(buffer, vec![0xFF; 32]);
        assert_eq!(read_uint256(&buffer, 0).unwrap().0, Uint256::MAX);
    }

    #[test]
    fn test_read_uint256_truncated_everywhere() {
        let mut buffer = Vec::new();
        write_uint256(&mut buffer, Uint256::from(500u128));

        for cut in 0..buffer.len() {
            assert_eq!(
                read_uint256(&buffer[..cut], 0),
                Err(CodecError::BufferTooShort {
                    needed: 32,
                    remaining: cut
                })
            );
        }
    }

    #[test]
    fn test_read_past_end_offset() {
        assert_eq!(
            read_bytes(&[1, 2, 3], 5, 1),
            Err(CodecError::BufferTooShort {
                needed: 1,
                remaining: 0
            })
        );
    }

    #[test]
    fn test_parse_var_int_value() {
        assert_eq!(parse_var_int_value("0").unwrap(), 0);
        assert_eq!(parse_var_int_value("18446744073709551615").unwrap(), u64::MAX);
        // One past u64::MAX: rejected, where a pad-and-truncate encoder
        // would silently have written 0
        assert_eq!(
            parse_var_int_value("18446744073709551616"),
            Err(CodecError::ValueOutOfRange {
                value: "18446744073709551616".to_string(),
                width: 8
            })
        );
    }

    #[test]
    fn test_parse_uint256_value_rejects_wider_values() {
        let max = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        assert_eq!(parse_uint256_value(max).unwrap(), Uint256::MAX);

        // 2^256 would be truncated to zero by a pad-and-truncate encoder
        let two_pow_256 =
            "115792089237316195423570985008687907853269984665640564039457584007913129639936";
        assert!(matches!(
            parse_uint256_value(two_pow_256),
            Err(CodecError::ValueOutOfRange { width: 32, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_numeric_input() {
        for input in ["abc", "", "  ", "12a", "+5", "0x10", "1.5"] {
            assert_eq!(
                parse_var_int_value(input),
                Err(CodecError::InvalidInteger {
                    value: input.to_string()
                })
            );
            assert_eq!(
                parse_uint256_value(input),
                Err(CodecError::InvalidInteger {
                    value: input.to_string()
                })
            );
        }
        // Surrounding whitespace is tolerated
        assert_eq!(parse_var_int_value(" 42 ").unwrap(), 42);
    }
}
