use std::fmt;

type Offset = usize;

/// Verdict over two masked byte sequences. `ByteMismatch` carries the lowest
/// differing offset and both byte values; `LengthMismatch` carries the common
/// prefix length.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Comparison {
    Match,
    ByteMismatch(Offset, u8, u8),
    LengthMismatch(Offset),
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Match => write!(f, "MATCH (comment bytes ignored)"),
            Self::ByteMismatch(offset, byte1, byte2) => write!(
                f,
                "MISMATCH at offset {}: 0x{:02x} vs 0x{:02x}",
                offset, byte1, byte2
            ),
            Self::LengthMismatch(_) => {
                write!(f, "MISMATCH: file lengths differ after masking comment bytes")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::comparator::comparison::Comparison::{ByteMismatch, LengthMismatch, Match};

    #[test]
    fn test_display_match() {
        assert_eq!(format!("{}", Match), "MATCH (comment bytes ignored)");
    }

    #[test]
    fn test_display_byte_mismatch() {
        assert_eq!(
            format!("{}", ByteMismatch(100, 0xaa, 0xbb)),
            "MISMATCH at offset 100: 0xaa vs 0xbb"
        );
        // Values below 0x10 keep two hex digits
        assert_eq!(
            format!("{}", ByteMismatch(7, 0x00, 0x0f)),
            "MISMATCH at offset 7: 0x00 vs 0x0f"
        );
    }

    #[test]
    fn test_display_length_mismatch() {
        assert_eq!(
            format!("{}", LengthMismatch(256)),
            "MISMATCH: file lengths differ after masking comment bytes"
        );
    }
}
