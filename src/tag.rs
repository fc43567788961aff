//! Authentication tag comparison.
//!
//! Tag mismatch is an expected outcome the caller branches on, so it is
//! surfaced as a bool, not an error. Comparison runs in constant time
//! over the compared bytes.

use crate::ghash::BLOCK_SIZE;
use crate::{Error, Result};
use subtle::ConstantTimeEq;

/// Compare two full 16-byte tags in constant time.
pub fn verify_tag(
    computed: &[u8; BLOCK_SIZE],
    expected: &[u8; BLOCK_SIZE],
) -> bool {
    computed[..].ct_eq(&expected[..]).into()
}

/// Compare the first `tag_size` bytes of two tags in constant time,
/// `1 <= tag_size <= 16`.
///
/// A truncated tag weakens the forgery bound; prefer [`verify_tag`]
/// unless the protocol fixes a shorter tag.
pub fn verify_tag_truncated(
    computed: &[u8; BLOCK_SIZE],
    expected: &[u8; BLOCK_SIZE],
    tag_size: usize,
) -> Result<bool> {
    if tag_size == 0 || tag_size > BLOCK_SIZE {
        return Err(Error::InvalidTagSize(BLOCK_SIZE, tag_size));
    }
    Ok(computed[..tag_size].ct_eq(&expected[..tag_size]).into())
}
