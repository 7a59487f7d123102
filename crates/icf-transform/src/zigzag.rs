//! Zigzag traversal order and DC-relative delta coding

use icf_core::CoeffBlock;

/// Zigzag scan order for an 8×8 block: anti-diagonal sweep starting at
/// (0,0), alternating direction, first half then second half of the
/// diagonals. `ZIGZAG_ORDER[i]` is the row-major position visited at
/// step `i`; every position appears exactly once.
pub const ZIGZAG_ORDER: [usize; 64] = [
    0, 1, 8, 16, 9, 2, 3, 10, 17, 24, 32, 25, 18, 11, 4, 5, 12, 19, 26, 33, 40, 48, 41, 34, 27, 20,
    13, 6, 7, 14, 21, 28, 35, 42, 49, 56, 57, 50, 43, 36, 29, 22, 15, 23, 30, 37, 44, 51, 58, 59,
    52, 45, 38, 31, 39, 46, 53, 60, 61, 54, 47, 55, 62, 63,
];

/// Replace every visited position (after the DC at position 0) with its
/// signed difference from the previously visited value, walking in
/// zigzag order. The DC coefficient at position 0 is left unchanged.
/// In-place bijection; see [`zigzag_delta_decode`] for its inverse.
pub fn zigzag_delta_encode(block: &mut CoeffBlock) {
    let mut prev = block[ZIGZAG_ORDER[0]];
    for &pos in ZIGZAG_ORDER.iter().skip(1) {
        let cur = block[pos];
        block[pos] = cur - prev;
        prev = cur;
    }
}

/// Inverse of [`zigzag_delta_encode`]: walking the same zigzag order,
/// accumulates each delta back onto the running previous value.
pub fn zigzag_delta_decode(block: &mut CoeffBlock) {
    let mut prev = block[ZIGZAG_ORDER[0]];
    for &pos in ZIGZAG_ORDER.iter().skip(1) {
        block[pos] += prev;
        prev = block[pos];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_every_position_exactly_once() {
        let mut seen = [false; 64];
        for &pos in ZIGZAG_ORDER.iter() {
            assert!(!seen[pos], "position {pos} visited twice");
            seen[pos] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn delta_is_an_involution() {
        let original: CoeffBlock = core::array::from_fn(|i| (i as i32) * 3 - 96);
        let mut block = original;
        zigzag_delta_encode(&mut block);
        zigzag_delta_decode(&mut block);
        assert_eq!(block, original);
    }

    #[test]
    fn dc_untouched_by_encode() {
        let mut block: CoeffBlock = core::array::from_fn(|i| i as i32);
        let dc = block[0];
        zigzag_delta_encode(&mut block);
        assert_eq!(block[0], dc);
    }

    #[test]
    fn all_zero_block_stays_zero() {
        let mut block: CoeffBlock = [0; 64];
        zigzag_delta_encode(&mut block);
        assert_eq!(block, [0; 64]);
        zigzag_delta_decode(&mut block);
        assert_eq!(block, [0; 64]);
    }
}
