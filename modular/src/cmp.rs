//! Comparisons between [`Modular`] values and raw integers.
//!
//! Values compare by representative. A raw integer is promoted with [`Modular::new`] first, so
//! `Modular::<7>::new(5) == 12` holds.

use std::cmp::Ordering;

use crate::{Modular, Residue};

impl<const P: Residue> PartialEq<Residue> for Modular<P> {
    #[inline]
    fn eq(&self, other: &Residue) -> bool {
        *self == Self::new(*other)
    }
}

impl<const P: Residue> PartialOrd<Residue> for Modular<P> {
    #[inline]
    fn partial_cmp(&self, other: &Residue) -> Option<Ordering> {
        Some(self.cmp(&Self::new(*other)))
    }
}

impl<const P: Residue> PartialEq<Modular<P>> for Residue {
    #[inline]
    fn eq(&self, other: &Modular<P>) -> bool {
        other == self
    }
}

impl<const P: Residue> PartialOrd<Modular<P>> for Residue {
    /// `n < v` is answered as `v > n`.
    #[inline]
    fn partial_cmp(&self, other: &Modular<P>) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type M7 = Modular<7>;

    #[test]
    fn test_compare_values() {
        let b = M7::new(-8);
        let c = M7::new(5);

        assert!(b != c);
        assert!(b > c);
        assert!(b >= c);
        assert!(!(b < c));
        assert!(!(b <= c));
        assert_eq!(b.cmp(&c), Ordering::Greater);
    }

    #[test]
    fn test_compare_with_residue() {
        let a = M7::new(5);
        let twelve: Residue = 12;
        let six: Residue = 6;
        let minus_one: Residue = -1;

        assert!(a == twelve);
        assert!(twelve == a);
        assert!(a < six);
        assert!(six > a);
        assert!(a < minus_one);
        assert!(minus_one > a);
        assert!(a >= twelve);
        assert!(twelve <= a);
    }
}
