//! Arithmetic on [`Modular`] values.
//!
//! `+`, `-` (binary and unary) and `*` reduce their raw result into `[0, P)` and never fail.
//! `/` and `%` act on the representatives as ordinary integers and return a
//! [`Result`](crate::ModularError), failing when the divisor is zero.

mod add;
mod div;
mod mul;
mod neg;
mod pow;
mod rem;
mod sub;

use crate::{Modular, Residue};

impl<const P: Residue> std::iter::Sum for Modular<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |a, b| a + b)
    }
}

impl<'a, const P: Residue> std::iter::Sum<&'a Modular<P>> for Modular<P> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<const P: Residue> std::iter::Product for Modular<P> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |a, b| a * b)
    }
}

impl<'a, const P: Residue> std::iter::Product<&'a Modular<P>> for Modular<P> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}
