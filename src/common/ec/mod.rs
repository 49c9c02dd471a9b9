mod block;
#[cfg(test)]
mod decoder;
pub mod galois;
mod poly;

pub use block::*;
pub use poly::*;

// Symbol count ceiling of a GF(256) Reed-Solomon block
pub const MAX_BLOCK_SIZE: usize = 255;
