// crates/fcgrind-core/src/bits.rs
//
// Bitstream derivation from hex payloads.
//
// A credential's bitstream is kept as a '0'/'1' string: windows and fields
// are plain slices of it, and the literal bit text of an extracted field is
// part of the reported match. Every hex digit contributes exactly 4 bits,
// so leading zero nibbles survive (payload "0F" is "00001111", 8 bits).

use crate::error::{GrindError, Result};

/// Which direction the payload bits are read in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BitOrder {
    Forward,
    Reversed,
}

impl BitOrder {
    pub const BOTH: [BitOrder; 2] = [BitOrder::Forward, BitOrder::Reversed];

    pub fn is_reversed(self) -> bool {
        matches!(self, BitOrder::Reversed)
    }
}

/// Expand a hex payload into its exact-length binary string (4 bits per digit).
pub fn hex_to_bits(hex: &str) -> Result<String> {
    if hex.is_empty() {
        return Err(GrindError::InvalidInput("empty hex payload".into()));
    }

    let mut out = String::with_capacity(hex.len() * 4);
    for c in hex.chars() {
        let nibble = c.to_digit(16).ok_or_else(|| {
            GrindError::InvalidInput(format!("non-hex character {c:?} in payload {hex:?}"))
        })?;
        for b in (0..4).rev() {
            out.push(if (nibble >> b) & 1 == 1 { '1' } else { '0' });
        }
    }
    Ok(out)
}

/// The same bitstream read back-to-front.
pub fn reverse_bits(bits: &str) -> String {
    bits.chars().rev().collect()
}

/// Interpret a bit slice as an unsigned big-endian value.
///
/// Returns `None` when the slice has more than 64 significant bits; such a
/// field cannot equal any u64-held CN target and is far outside the
/// plausible FC range, so callers skip the field rather than erroring.
pub fn bits_to_value(bits: &str) -> Option<u64> {
    let trimmed = bits.trim_start_matches('0');
    if trimmed.len() > 64 {
        return None;
    }
    if trimmed.is_empty() {
        return Some(0);
    }
    u64::from_str_radix(trimmed, 2).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_expands_four_bits_per_digit() {
        assert_eq!(hex_to_bits("F0").unwrap(), "11110000");
        assert_eq!(hex_to_bits("0F").unwrap(), "00001111");
        assert_eq!(hex_to_bits("a").unwrap(), "1010");
    }

    #[test]
    fn leading_zero_nibbles_survive() {
        let bits = hex_to_bits("0001").unwrap();
        assert_eq!(bits.len(), 16);
        assert_eq!(bits, "0000000000000001");
    }

    #[test]
    fn non_hex_rejected() {
        assert!(hex_to_bits("12g4").is_err());
        assert!(hex_to_bits("").is_err());
    }

    #[test]
    fn reversal_round_trips() {
        let bits = hex_to_bits("27bafc0864").unwrap();
        assert_eq!(reverse_bits(&reverse_bits(&bits)), bits);
    }

    #[test]
    fn value_parse_handles_leading_zeros_and_width() {
        assert_eq!(bits_to_value("0000"), Some(0));
        assert_eq!(bits_to_value("1111"), Some(15));
        assert_eq!(bits_to_value("00000001"), Some(1));

        // 65 significant bits: not representable, skipped by callers.
        let wide = format!("1{}", "0".repeat(64));
        assert_eq!(bits_to_value(&wide), None);

        // 70-bit field whose significant part fits is still fine.
        let padded = format!("{}101", "0".repeat(67));
        assert_eq!(bits_to_value(&padded), Some(5));
    }
}
