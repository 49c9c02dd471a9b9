use log::trace;

use super::galois::G;
use super::{generator, MAX_BLOCK_SIZE};
use crate::utils::{QRError, QRResult};

// Reed-Solomon block
//------------------------------------------------------------------------------

/// Systematic Reed-Solomon codeword block: data codewords followed by the
/// error correction codewords computed over them.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Block {
    pub(crate) data: [u8; MAX_BLOCK_SIZE],
    // Block length
    len: usize,
    // Data length
    dlen: usize,
}

impl Block {
    pub fn new(raw: &[u8], ec_len: usize) -> QRResult<Self> {
        let dlen = raw.len();
        if dlen == 0 {
            return Err(QRError::EmptyData);
        }
        if ec_len == 0 {
            return Err(QRError::InvalidECCount);
        }
        if dlen + ec_len > MAX_BLOCK_SIZE {
            return Err(QRError::BlockTooLong);
        }

        let mut data = [0u8; MAX_BLOCK_SIZE];
        data[..dlen].copy_from_slice(raw);
        let mut block = Self { data, len: dlen + ec_len, dlen };
        block.compute_ecc()?;
        Ok(block)
    }

    // Polynomial long division of the data polynomial by the generator. The
    // remainder left in the trailing ec_len positions is the ecc.
    fn compute_ecc(&mut self) -> QRResult<()> {
        let ec_len = self.ec_len();
        let gen_poly = generator(ec_len)?;

        let mut rem = self.data;
        for i in 0..self.dlen {
            let lead = G(rem[i]);
            if lead.0 == 0 {
                continue;
            }

            // Generator is stored lowest degree first, so walk it from its monic top
            for (u, &g) in rem[i..=i + ec_len].iter_mut().zip(gen_poly.iter().rev()) {
                *u = (G(*u) + g * lead).into();
            }
            debug_assert!(rem[i] == 0, "Lead coefficient survived division at {i}");
        }

        self.data[self.dlen..self.len].copy_from_slice(&rem[self.dlen..self.len]);
        trace!("Computed {ec_len} ecc for {} data codewords", self.dlen);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn ec_len(&self) -> usize {
        self.len - self.dlen
    }

    pub fn data_len(&self) -> usize {
        self.dlen
    }

    pub fn full(&self) -> &[u8] {
        &self.data[..self.len]
    }

    #[cfg(test)]
    pub fn full_mut(&mut self) -> &mut [u8] {
        &mut self.data[..self.len]
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..self.dlen]
    }

    pub fn ecc(&self) -> &[u8] {
        &self.data[self.dlen..self.len]
    }
}

// Reed-Solomon encoder
//------------------------------------------------------------------------------

/// Returns `data` followed by `ecc_count` error correction codewords.
pub fn rs_encode(data: &[u8], ecc_count: usize) -> QRResult<Vec<u8>> {
    Ok(Block::new(data, ecc_count)?.full().to_vec())
}

/// Returns only the `ecc_count` error correction codewords for `data`.
pub fn ecc(data: &[u8], ecc_count: usize) -> QRResult<Vec<u8>> {
    Ok(Block::new(data, ecc_count)?.ecc().to_vec())
}
