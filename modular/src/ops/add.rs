use std::ops::Add;

use crate::macros::forward_binary_op;
use crate::reduce::Reduce;
use crate::{Modular, Residue, Wide};

impl<const P: Residue> Add<Self> for Modular<P> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        // Widened so that the raw sum cannot overflow for moduli close to `Residue::MAX`.
        let sum = Wide::from(self.value()) + Wide::from(rhs.value());
        Self::from_canonical(sum.reduce(Self::MODULUS))
    }
}

forward_binary_op!(Add::add, AddAssign::add_assign);
