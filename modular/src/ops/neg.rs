use std::ops::Neg;

use crate::{Modular, Residue};

impl<const P: Residue> Neg for Modular<P> {
    type Output = Self;

    /// Computes `self * (-1)`, letting multiplication fold the result into `[0, P)`.
    #[inline]
    fn neg(self) -> Self::Output {
        self * (-1 as Residue)
    }
}

impl<const P: Residue> Neg for &Modular<P> {
    type Output = Modular<P>;

    #[inline]
    fn neg(self) -> Self::Output {
        -*self
    }
}
