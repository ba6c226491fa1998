use std::ops::Sub;

use crate::macros::forward_binary_op;
use crate::{Modular, Residue};

impl<const P: Residue> Sub<Self> for Modular<P> {
    type Output = Self;

    /// Computes `self + (-rhs)`.
    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

forward_binary_op!(Sub::sub, SubAssign::sub_assign);
