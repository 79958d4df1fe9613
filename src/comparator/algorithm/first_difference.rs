use super::super::comparison::Comparison;
use std::cmp::min;

// first_difference() should satisfy following requirements:
//   - Lowest differing offset wins
//   - Length mismatch is reported only if the common prefix is identical
pub fn first_difference(data1: &[u8], data2: &[u8]) -> Comparison {
    let limit = min(data1.len(), data2.len());

    for i in 0usize..limit {
        if data1[i] != data2[i] {
            log::trace!(
                "first_difference(): 0x{:02x} != 0x{:02x} at offset {}",
                data1[i],
                data2[i],
                i
            );
            return Comparison::ByteMismatch(i, data1[i], data2[i]);
        }
    }

    if data1.len() != data2.len() {
        return Comparison::LengthMismatch(limit);
    }

    Comparison::Match
}
