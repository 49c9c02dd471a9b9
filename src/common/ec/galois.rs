use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub};

// Field arithmetic over GF(256)
//------------------------------------------------------------------------------

/// Field addition. Every element is its own additive inverse.
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Carry-less shift-and-add multiplication, reduced by x^8 + x^4 + x^3 + x^2 + 1.
pub fn multiply(a: u8, b: u8) -> u8 {
    let mut a = a as u16;
    let mut b = b;
    let mut res = 0u16;

    while b != 0 {
        if b & 1 != 0 {
            res ^= a;
        }
        a <<= 1;
        if a & 0x100 != 0 {
            a ^= PRIMITIVE_POLY;
        }
        b >>= 1;
    }

    debug_assert!(res <= 0xFF, "Product escaped the field: {res}");
    res as u8
}

// Galois element
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct G(pub u8);

impl G {
    pub fn pow(self, mut exp: usize) -> Self {
        let mut base = self;
        let mut res = G(1);
        while exp > 0 {
            if exp & 1 == 1 {
                res *= base;
            }
            base *= base;
            exp >>= 1;
        }
        res
    }

    // Alpha raised to the given power, the generator element being 2
    pub fn gen_pow(exp: usize) -> Self {
        G(GENERATOR).pow(exp % 255)
    }

    pub fn inverse(self) -> Self {
        debug_assert!(self.0 != 0, "Zero has no multiplicative inverse");
        self.pow(254)
    }
}

impl From<u8> for G {
    fn from(value: u8) -> Self {
        G(value)
    }
}

impl From<G> for u8 {
    fn from(value: G) -> Self {
        value.0
    }
}

impl Add for G {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        G(add(self.0, rhs.0))
    }
}

impl AddAssign for G {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = add(self.0, rhs.0);
    }
}

impl Sub for G {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + rhs
    }
}

impl Mul for G {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        G(multiply(self.0, rhs.0))
    }
}

impl MulAssign for G {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 = multiply(self.0, rhs.0);
    }
}

impl Div for G {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}


// Global constants
//------------------------------------------------------------------------------

// x^8 + x^4 + x^3 + x^2 + 1
static PRIMITIVE_POLY: u16 = 0x11D;

static GENERATOR: u8 = 2;
