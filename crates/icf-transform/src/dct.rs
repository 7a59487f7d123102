//! Forward and inverse 8×8 DCT-II

use icf_core::SampleBlock;
use std::f64::consts::PI;
use std::sync::OnceLock;

const N: usize = 8;

/// `cos_table()[n][k] == cos((2n+1)*k*PI/16)` for n, k in 0..8. Computed
/// once and reused for every block; read-only after first use.
pub fn cos_table() -> &'static [[f64; N]; N] {
    static TABLE: OnceLock<[[f64; N]; N]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [[0.0; N]; N];
        for (n, row) in table.iter_mut().enumerate() {
            for (k, entry) in row.iter_mut().enumerate() {
                *entry = (((2 * n + 1) as f64) * (k as f64) * PI / 16.0).cos();
            }
        }
        table
    })
}

fn scale(i: usize) -> f64 {
    if i == 0 {
        1.0 / std::f64::consts::SQRT_2
    } else {
        1.0
    }
}

/// Forward 8×8 DCT-II. `block` is row-major (index = row*8 + col) and is
/// overwritten in place with the frequency-domain coefficients.
pub fn dct_forward(block: &mut SampleBlock) {
    let cos = cos_table();
    let input = *block;

    for i in 0..N {
        for j in 0..N {
            let mut sum = 0.0;
            for x in 0..N {
                for y in 0..N {
                    sum += input[x * N + y] * cos[x][i] * cos[y][j];
                }
            }
            block[i * N + j] = 0.25 * scale(i) * scale(j) * sum;
        }
    }
}

/// Inverse 8×8 DCT (DCT-III). `block` holds frequency-domain coefficients
/// on entry and is overwritten in place with reconstructed samples.
pub fn dct_inverse(block: &mut SampleBlock) {
    let cos = cos_table();
    let freq = *block;

    for x in 0..N {
        for y in 0..N {
            let mut sum = 0.0;
            for i in 0..N {
                for j in 0..N {
                    sum += scale(i) * scale(j) * freq[i * N + j] * cos[x][i] * cos[y][j];
                }
            }
            block[x * N + y] = 0.25 * sum;
        }
    }
}
