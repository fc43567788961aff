//! GHASH, the universal hash of GCM (NIST SP 800-38D): the input is
//! split into 128-bit blocks and folded into an accumulator by repeated
//! multiplication with a fixed subkey H in GF(2^128).

mod field;

pub use field::gf128_mul;
use field::FieldElement;

pub const BLOCK_SIZE: usize = 16;

/// The running GHASH state for one subkey H.
///
/// A fresh hasher starts from the zero accumulator; each block b
/// replaces the accumulator y with (y + b) * H (Horner's rule). H is
/// fixed for the hasher's lifetime, the accumulator is not shared:
/// one logical hash is one `Ghash` value, driven by one caller.
#[derive(Clone)]
pub struct Ghash {
    h: FieldElement,
    y: FieldElement,
}

impl Ghash {
    pub fn new(key: &[u8; BLOCK_SIZE]) -> Self {
        Ghash {
            h: FieldElement::from_block(key),
            y: FieldElement::default(),
        }
    }

    /// Reset for the next computation, same subkey.
    pub fn reset(&mut self) {
        self.y = FieldElement::default();
    }

    /// Absorb exactly one block: y = (y + block) * H.
    pub fn update_block(&mut self, block: &[u8; BLOCK_SIZE]) {
        self.y += FieldElement::from_block(block);
        self.y = field::mul(self.y, self.h);
    }

    /// Absorb `data`, padding a trailing partial block with zeros.
    pub fn update(&mut self, data: &[u8]) {
        let mut chunks = data.chunks_exact(BLOCK_SIZE);
        for chunk in &mut chunks {
            self.update_block(chunk.try_into().unwrap());
        }

        let rest = chunks.remainder();
        if !rest.is_empty() {
            let mut partial_block = [0u8; BLOCK_SIZE];
            partial_block[..rest.len()].copy_from_slice(rest);
            self.update_block(&partial_block);
        }
    }

    /// Read out the accumulator. The state is left intact, so more
    /// blocks may follow.
    pub fn sum(&self) -> [u8; BLOCK_SIZE] {
        self.y.bytes()
    }
}

/// One-shot GHASH of `data` under `key`.
pub fn ghash(key: &[u8; BLOCK_SIZE], data: &[u8]) -> [u8; BLOCK_SIZE] {
    let mut g = Ghash::new(key);
    g.update(data);
    g.sum()
}
