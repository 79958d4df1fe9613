use super::super::{COMMENT_END, COMMENT_START};

// mask_comment() should satisfy following requirements:
//   - Output length equals input length
//   - Inputs shorter than the comment field pass through unchanged
pub fn mask_comment(data: &[u8]) -> Vec<u8> {
    if data.len() < COMMENT_END {
        log::trace!(
            "mask_comment(): no maskable region (length = {})",
            data.len()
        );
        return data.to_vec();
    }

    let mut masked = data.to_vec();
    for byte in masked[COMMENT_START..COMMENT_END].iter_mut() {
        *byte = 0u8;
    }
    masked
}
