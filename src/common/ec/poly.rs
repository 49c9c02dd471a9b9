use std::sync::OnceLock;

use super::galois::G;
use super::MAX_BLOCK_SIZE;
use crate::utils::{QRError, QRResult};

// Generator polynomial
//------------------------------------------------------------------------------

/// Builds the generator polynomial `(x + a^0)(x + a^1)...(x + a^(ecc_count - 1))`,
/// coefficients ordered lowest degree first.
pub fn build_generator(ecc_count: usize) -> Vec<G> {
    debug_assert!(ecc_count > 0, "Generator needs at least one root");

    (0..ecc_count).fold(vec![G(1)], |gen_poly, i| poly_mul(&gen_poly, &[G::gen_pow(i), G(1)]))
}

/// Cached generator polynomial for `ecc_count` error correction codewords.
pub fn generator(ecc_count: usize) -> QRResult<&'static [G]> {
    if ecc_count == 0 {
        return Err(QRError::InvalidECCount);
    }
    if ecc_count >= MAX_BLOCK_SIZE {
        return Err(QRError::BlockTooLong);
    }

    Ok(GENERATOR_CACHE[ecc_count].get_or_init(|| build_generator(ecc_count)))
}

pub(crate) fn poly_mul(p1: &[G], p2: &[G]) -> Vec<G> {
    debug_assert!(!p1.is_empty() && !p2.is_empty(), "Polynomials can't be empty");

    let mut res = vec![G(0); p1.len() + p2.len() - 1];
    for (i, &a) in p1.iter().enumerate() {
        for (j, &b) in p2.iter().enumerate() {
            res[i + j] += a * b;
        }
    }
    res
}


// Global constants
//------------------------------------------------------------------------------

static GENERATOR_CACHE: [OnceLock<Vec<G>>; MAX_BLOCK_SIZE] =
    [const { OnceLock::new() }; MAX_BLOCK_SIZE];
