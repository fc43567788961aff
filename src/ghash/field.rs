// A 16-byte block represents a polynomial of degree < 128 in GF(2)[x],
// bytes in order, bits big-endian within each byte:
// [b0, b1, ..., b15]:
// coefficient of:
// x^0 = (b0 >> 7) & 1
// x^1 = (b0 >> 6) & 1
// ...
// x^126 = (b15 >> 1) & 1
// x^127 = b15 & 1
// Example: [0x80, 0, ..., 0x01] <=> x^127 + 1
use super::BLOCK_SIZE;
use core::ops::{Add, AddAssign};

// A value in GF(2^128) = GF(2)[x]/(x^128 + x^7 + x^2 + x + 1).
// `low` holds bytes 0..8 and `high` bytes 8..16, both big-endian, so
// the coefficient of x^0 is low >> 63 and of x^127 is high & 1.
#[derive(Default, Copy, Clone, Eq, PartialEq)]
pub(super) struct FieldElement {
    low: u64,
    high: u64,
}

impl Add for FieldElement {
    type Output = FieldElement;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        FieldElement {
            low: self.low ^ rhs.low,
            high: self.high ^ rhs.high,
        }
    }
}
impl AddAssign for FieldElement {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.low ^= rhs.low;
        self.high ^= rhs.high;
    }
}

impl FieldElement {
    #[inline]
    pub fn from_block(block: &[u8; BLOCK_SIZE]) -> Self {
        FieldElement {
            low: u64::from_be_bytes(block[..8].try_into().unwrap()),
            high: u64::from_be_bytes(block[8..].try_into().unwrap()),
        }
    }

    #[inline]
    pub fn bytes(self) -> [u8; BLOCK_SIZE] {
        let mut out = [0; BLOCK_SIZE];
        out[..8].copy_from_slice(&self.low.to_be_bytes());
        out[8..16].copy_from_slice(&self.high.to_be_bytes());
        out
    }

    // Multiply by x: shift the whole 128-bit value right by one bit
    // position. A dropped low bit becomes a term of x^128, greater than
    // the modulus, so the other terms of the irreducible polynomial
    // 1 + x + x^2 + x^7 + x^128 fold back in. In characteristic 2,
    // subtraction == addition == XOR, hence the 0xe1 fold on byte 0.
    #[inline]
    pub fn double(self) -> Self {
        let msb = self.high & 1;

        let high = (self.high >> 1) | (self.low << 63);
        let mut low = self.low >> 1;

        if msb == 1 {
            low ^= 0xe100000000000000;
        }
        FieldElement { low, high }
    }
}

// Bit-serial double-and-add: scan the 128 bits of x from the x^0 end
// (byte order, bit 7 of each byte first), accumulating the matching
// doubling of h. Always runs all 128 iterations.
pub(super) fn mul(x: FieldElement, h: FieldElement) -> FieldElement {
    let mut z = FieldElement::default();
    let mut v = h;

    for mut word in [x.low, x.high] {
        for _ in 0..64 {
            if word & (1 << 63) != 0 {
                z += v;
            }
            v = v.double();
            word <<= 1;
        }
    }
    z
}

// The product of two blocks as elements of GF(2^128), GCM convention.
pub fn gf128_mul(
    x: &[u8; BLOCK_SIZE],
    h: &[u8; BLOCK_SIZE],
) -> [u8; BLOCK_SIZE] {
    mul(FieldElement::from_block(x), FieldElement::from_block(h)).bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const H: [u8; 16] = hex!("66e94bd4ef8a2c3b884cfa59ca342b2e");

    #[test]
    fn test_mul_zero() {
        let zero = [0u8; 16];
        assert_eq!(gf128_mul(&H, &zero), zero);
        assert_eq!(gf128_mul(&zero, &H), zero);
    }

    #[test]
    fn test_mul_one() {
        // The field's multiplicative identity is the polynomial 1,
        // i.e. bit 7 of byte 0 in this convention.
        let mut one = [0u8; 16];
        one[0] = 0x80;
        let x = hex!("0102030405060708090a0b0c0d0e0f10");
        assert_eq!(gf128_mul(&x, &one), x);
        assert_eq!(gf128_mul(&one, &H), H);
    }

    #[test]
    fn test_mul_commutative() {
        let x = hex!("0102030405060708090a0b0c0d0e0f10");
        let y = hex!("0388dace60b6a392f328c2b971b2fe78");
        assert_eq!(gf128_mul(&x, &H), gf128_mul(&H, &x));
        assert_eq!(gf128_mul(&x, &y), gf128_mul(&y, &x));
    }

    #[test]
    fn test_mul_golden() {
        let x = hex!("0102030405060708090a0b0c0d0e0f10");
        assert_eq!(
            gf128_mul(&x, &H),
            hex!("9f58946a0563efa96090affe7cd35553")
        );

        // NIST SP 800-38D test case 2 intermediate: X1 = C1 * H with
        // the all-zero AES-128 key's subkey H above.
        let c1 = hex!("0388dace60b6a392f328c2b971b2fe78");
        assert_eq!(
            gf128_mul(&c1, &H),
            hex!("5e2ec746917062882c85b0685353deb7")
        );
    }

    #[test]
    fn test_mul_deterministic() {
        let x = hex!("0102030405060708090a0b0c0d0e0f10");
        let first = gf128_mul(&x, &H);
        for _ in 0..8 {
            assert_eq!(gf128_mul(&x, &H), first);
        }
    }

    #[test]
    fn test_double_is_mul_by_x() {
        // x is the polynomial with coefficient 1 at degree 1:
        // bit 6 of byte 0.
        let mut poly_x = [0u8; 16];
        poly_x[0] = 0x40;
        let v = FieldElement::from_block(&H);
        assert_eq!(
            v.double().bytes(),
            gf128_mul(&H, &poly_x)
        );
    }
}
