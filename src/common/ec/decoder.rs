use super::galois::G;
use super::{poly_mul, Block};

// Syndrome decoder
//------------------------------------------------------------------------------

// Corrects up to ec_len / 2 corrupted codewords in place, so tests can check
// that encoded blocks are actually correctable.
impl Block {
    pub fn rectify(&mut self) -> Option<&[u8]> {
        let synd = self.syndromes();
        if is_zero(&synd) {
            return Some(self.data());
        }

        let (sig, deg) = berlekamp_massey(&synd);
        let errs = self.error_degrees(&sig);
        // Locator must split into distinct roots inside the block
        if errs.is_empty() || errs.len() != deg {
            return None;
        }

        // Evaluator is S(x) * sig(x) mod x^ec_len
        let mut omg = poly_mul(&synd, &sig);
        omg.truncate(synd.len());

        // Formal derivative keeps odd powers only in characteristic 2
        let dsig: Vec<G> =
            sig.iter().enumerate().skip(1).map(|(i, &c)| if i & 1 == 1 { c } else { G(0) }).collect();

        // Forney magnitudes, first consecutive root is a^0
        let len = self.len();
        for deg in errs {
            let x = G::gen_pow(deg);
            let xinv = x.inverse();
            let den = eval_poly(&dsig, xinv);
            if den.0 == 0 {
                return None;
            }
            let pos = len - 1 - deg;
            self.data[pos] = (G(self.data[pos]) + x * eval_poly(&omg, xinv) / den).into();
        }

        if is_zero(&self.syndromes()) {
            Some(self.data())
        } else {
            None
        }
    }

    fn syndromes(&self) -> Vec<G> {
        (0..self.ec_len())
            .map(|i| {
                let x = G::gen_pow(i);
                self.full().iter().fold(G(0), |acc, &c| acc * x + G(c))
            })
            .collect()
    }

    // Codeword degrees whose inverse locators are roots of sig
    fn error_degrees(&self, sig: &[G]) -> Vec<usize> {
        (0..self.len()).filter(|&deg| eval_poly(sig, G::gen_pow(deg).inverse()).0 == 0).collect()
    }
}

// Shortest LFSR generating the syndromes: error locator and its degree
fn berlekamp_massey(synd: &[G]) -> (Vec<G>, usize) {
    let k = synd.len();
    let mut cx = vec![G(0); k + 1];
    let mut bx = vec![G(0); k + 1];
    cx[0] = G(1);
    bx[0] = G(1);
    let (mut l, mut m, mut b) = (0usize, 1usize, G(1));

    for n in 0..k {
        let d = (1..=l).fold(synd[n], |d, i| d + cx[i] * synd[n - i]);
        if d.0 == 0 {
            m += 1;
            continue;
        }

        let prev = cx.clone();
        let scale = d / b;
        for (c, &bc) in cx[m..].iter_mut().zip(&bx) {
            *c += scale * bc;
        }

        if 2 * l <= n {
            bx = prev;
            l = n + 1 - l;
            b = d;
            m = 1;
        } else {
            m += 1;
        }
    }

    cx.truncate(l + 1);
    (cx, l)
}

fn is_zero(poly: &[G]) -> bool {
    poly.iter().all(|c| c.0 == 0)
}

// Coefficients ordered lowest degree first
fn eval_poly(poly: &[G], x: G) -> G {
    poly.iter().rev().fold(G(0), |acc, &c| acc * x + c)
}

#[cfg(test)]
mod ec_rectifier_tests {
    use proptest::prelude::*;
    use test_case::test_case;

    use super::Block;

    #[test_case(&[32, 91, 11, 45, 89, 123, 77, 44, 56, 99, 202], &[32, 91, 11, 45, 89, 46, 77, 44, 56, 99, 202])]
    #[test_case(&[32, 91, 11, 45, 89, 123, 77, 44, 56, 99, 202], &[32, 91, 11, 45, 89, 46, 77, 44, 56, 99, 249])]
    fn test_rectifier(data: &[u8], bad: &[u8]) {
        let mut blk = Block::new(data, 4).unwrap();
        blk.full_mut()[..11].copy_from_slice(bad);
        let rect = blk.rectify().unwrap();
        assert_eq!(rect, data, "Rectified data and original data don't match: Rectified {rect:?}, Original data {data:?}");
    }

    #[test]
    fn test_clean_block_untouched() {
        let data = [32, 91, 11, 45, 89, 123, 77, 44, 56, 99, 202];
        let mut blk = Block::new(&data, 4).unwrap();
        let before = blk;
        assert_eq!(blk.rectify(), Some(&data[..]));
        assert_eq!(blk, before);
    }

    #[test]
    fn test_rectifier_fail() {
        let data = [32, 91, 11, 45, 89, 123, 77, 44, 56, 99, 202];
        let bad = [138, 91, 161, 45, 243, 46, 231, 44, 146, 99, 202];
        let mut blk = Block::new(&data, 4).unwrap();
        blk.full_mut()[..11].copy_from_slice(&bad);
        assert_ne!(blk.rectify(), Some(&data[..]));
    }

    #[test]
    fn test_single_codeword_corrected() {
        let mut blk = Block::new(&[64], 10).unwrap();
        for (i, pos) in [0, 2, 4, 7, 10].into_iter().enumerate() {
            blk.full_mut()[pos] ^= 0x55 + i as u8;
        }
        assert_eq!(blk.rectify(), Some(&[64u8][..]));
    }

    proptest! {
        #[test]
        fn proptest_rectify(
            data in prop::collection::vec(any::<u8>(), 1..80),
            k in 2usize..=20,
            errs in prop::collection::vec((any::<prop::sample::Index>(), 1..=255u8), 0..=10),
        ) {
            let mut blk = Block::new(&data, k).unwrap();
            let len = blk.len();
            let mut positions = vec![];
            for (idx, mag) in errs.into_iter().take(k / 2) {
                let pos = idx.index(len);
                if positions.contains(&pos) {
                    continue;
                }
                positions.push(pos);
                blk.full_mut()[pos] ^= mag;
            }
            prop_assert_eq!(blk.rectify(), Some(&data[..]));
        }
    }
}
