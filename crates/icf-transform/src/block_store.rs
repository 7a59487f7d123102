//! Partition a channel plane into 8×8 blocks and merge back

use icf_core::consts::BLOCK_SIZE;
use icf_core::SampleBlock;

/// Split a row-major `width x height` plane into 8×8 blocks, block-raster
/// order (left-to-right, top-to-bottom over block positions). `width` and
/// `height` must be multiples of 8; behavior is otherwise undefined.
pub fn plane_to_blocks(plane: &[f64], width: usize, height: usize) -> Vec<SampleBlock> {
    assert_eq!(plane.len(), width * height);
    let blocks_x = width / BLOCK_SIZE;
    let blocks_y = height / BLOCK_SIZE;
    let mut blocks = Vec::with_capacity(blocks_x * blocks_y);

    for by in 0..blocks_y {
        for bx in 0..blocks_x {
            let mut block: SampleBlock = [0.0; 64];
            for row in 0..BLOCK_SIZE {
                for col in 0..BLOCK_SIZE {
                    let px = bx * BLOCK_SIZE + col;
                    let py = by * BLOCK_SIZE + row;
                    block[row * BLOCK_SIZE + col] = plane[py * width + px];
                }
            }
            blocks.push(block);
        }
    }

    blocks
}

/// Inverse of [`plane_to_blocks`]: merge a block-raster sequence of 8×8
/// blocks back into a row-major `width x height` plane.
pub fn blocks_to_plane(blocks: &[SampleBlock], width: usize, height: usize) -> Vec<f64> {
    let blocks_x = width / BLOCK_SIZE;
    let blocks_y = height / BLOCK_SIZE;
    assert_eq!(blocks.len(), blocks_x * blocks_y);
    let mut plane = vec![0.0; width * height];

    for by in 0..blocks_y {
        for bx in 0..blocks_x {
            let block = &blocks[by * blocks_x + bx];
            for row in 0..BLOCK_SIZE {
                for col in 0..BLOCK_SIZE {
                    let px = bx * BLOCK_SIZE + col;
                    let py = by * BLOCK_SIZE + row;
                    plane[py * width + px] = block[row * BLOCK_SIZE + col];
                }
            }
        }
    }

    plane
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_identically() {
        let width = 16;
        let height = 8;
        let plane: Vec<f64> = (0..(width * height)).map(|i| i as f64).collect();

        let blocks = plane_to_blocks(&plane, width, height);
        assert_eq!(blocks.len(), 2);

        let back = blocks_to_plane(&blocks, width, height);
        assert_eq!(back, plane);
    }

    #[test]
    fn block_raster_order_matches_top_left_block_first() {
        let width = 16;
        let height = 8;
        let mut plane = vec![0.0; width * height];
        plane[0] = 42.0; // top-left corner, first block

        let blocks = plane_to_blocks(&plane, width, height);
        assert_eq!(blocks[0][0], 42.0);
        assert_eq!(blocks[1][0], 0.0);
    }
}
