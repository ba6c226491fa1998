//! Reduction of raw signed integers into the canonical range `[0, modulus)`.
//!
//! Every arithmetic operation of [`Modular`](crate::Modular) first computes a raw result
//! (a plain sum or product of two representatives) and then folds it back with [`Reduce`].
//! Reduction has two branches, one for values at or above the modulus and one for negative
//! values. Values already in range pass through untouched.

use crate::{Residue, Wide};

/// The modulo operation.
pub trait Reduce<Modulus>: Sized {
    /// Output type.
    type Output;

    /// Calculates `self (mod modulus)`.
    ///
    /// The result is in `[0, modulus)`.
    ///
    /// # Correctness
    ///
    /// - `modulus > 0`
    fn reduce(self, modulus: Modulus) -> Self::Output;
}

/// The modulo assignment operation.
pub trait ReduceAssign<Modulus>: Sized {
    /// Calculates `self (mod modulus)` in place.
    ///
    /// # Correctness
    ///
    /// - `modulus > 0`
    fn reduce_assign(&mut self, modulus: Modulus);
}

impl Reduce<Residue> for Residue {
    type Output = Residue;

    #[inline]
    fn reduce(self, modulus: Residue) -> Self::Output {
        if self >= modulus {
            self % modulus
        } else if self < 0 {
            // `unsigned_abs` keeps `Residue::MIN` representable. A remainder of zero means
            // `self` is a negative multiple of `modulus`, which belongs to `0`, not `modulus`.
            let r = (self.unsigned_abs() % modulus as u64) as Residue;
            if r == 0 {
                0
            } else {
                modulus - r
            }
        } else {
            self
        }
    }
}

impl ReduceAssign<Residue> for Residue {
    #[inline]
    fn reduce_assign(&mut self, modulus: Residue) {
        *self = (*self).reduce(modulus);
    }
}

impl Reduce<Residue> for Wide {
    type Output = Residue;

    #[inline]
    fn reduce(self, modulus: Residue) -> Self::Output {
        let m = Wide::from(modulus);
        let r = if self >= m {
            self % m
        } else if self < 0 {
            let r = (self.unsigned_abs() % m as u128) as Wide;
            if r == 0 {
                0
            } else {
                m - r
            }
        } else {
            self
        };
        r as Residue
    }
}
