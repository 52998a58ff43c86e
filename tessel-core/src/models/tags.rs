//! Tags are bit positions. A client is visible on a monitor when its tags intersect the
//! monitor's active tagset.

pub type TagMask = u32;

/// Tags are stored in a `u32` and the sign bit is never used.
pub const MAX_TAGS: u32 = 31;

/// The mask covering the first `count` tags.
#[must_use]
pub const fn all_tags(count: u32) -> TagMask {
    let count = if count > MAX_TAGS { MAX_TAGS } else { count };
    (1 << count) - 1
}

/// Mask for the tag at zero based `index`.
#[must_use]
pub const fn tag_for_index(index: usize) -> TagMask {
    1 << index
}

#[must_use]
pub const fn intersects(a: TagMask, b: TagMask) -> bool {
    a & b != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tags_is_capped_to_thirty_one_bits() {
        assert_eq!(all_tags(9), 0b1_1111_1111);
        assert_eq!(all_tags(40), 0x7fff_ffff);
    }

    #[test]
    fn visibility_follows_the_active_tagset_alone() {
        let client_tags = tag_for_index(2) | tag_for_index(4);
        assert!(intersects(client_tags, tag_for_index(2)));
        assert!(!intersects(client_tags, tag_for_index(3)));
    }
}
