use std::ops::Mul;

use crate::macros::forward_binary_op;
use crate::reduce::Reduce;
use crate::{Modular, Residue, Wide};

impl<const P: Residue> Mul<Self> for Modular<P> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let product = Wide::from(self.value()) * Wide::from(rhs.value());
        Self::from_canonical(product.reduce(Self::MODULUS))
    }
}

forward_binary_op!(Mul::mul, MulAssign::mul_assign);
