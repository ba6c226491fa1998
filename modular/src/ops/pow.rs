use num_traits::Pow;

use crate::{Modular, Residue};

impl<const P: Residue> Pow<u64> for Modular<P> {
    type Output = Self;

    /// Computes `self^exp mod P` by binary exponentiation. `x^0` is [`Modular::ONE`].
    fn pow(self, mut exp: u64) -> Self::Output {
        let mut result = Self::ONE;
        let mut base = self;
        while exp > 0 {
            if exp & 1 == 1 {
                result *= base;
            }
            base *= base;
            exp >>= 1;
        }
        result
    }
}

impl<const P: Residue> Pow<u64> for &Modular<P> {
    type Output = Modular<P>;

    #[inline]
    fn pow(self, exp: u64) -> Self::Output {
        Pow::pow(*self, exp)
    }
}
