use num_traits::{One, Zero};

use crate::reduce::ReduceAssign;
use crate::Residue;

/// An integer modulo `P`, whose representative is kept in `[0, P)`.
///
/// The modulus is part of the type, so values with different moduli can never be combined.
/// `P` must be positive; a non-positive modulus is rejected when the type is first used.
///
/// Raw integers of any sign and magnitude are accepted everywhere a value is expected and are
/// reduced on the way in.
///
/// # Example
///
/// ```
/// use modular::Modular;
///
/// let b = Modular::<7>::new(-8);
/// let c = Modular::<7>::new(5);
///
/// assert_eq!(b.value(), 6);
/// assert_eq!((b + c).value(), 4);
/// assert_eq!((b * c).value(), 2);
/// assert_eq!((b / c).unwrap().value(), 1);
/// assert!(b > c);
/// ```
#[derive(Clone, Copy, Default, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Modular<const P: Residue>(Residue);

impl<const P: Residue> Modular<P> {
    /// The modulus of this type.
    pub const MODULUS: Residue = {
        assert!(P > 0, "modulus must be positive");
        P
    };

    /// A constant `0` value.
    pub const ZERO: Self = Self(0);

    /// A constant `1` value, which is `0` when `P == 1`.
    pub const ONE: Self = Self(if P == 1 { 0 } else { 1 });

    /// Creates a new [`Modular<P>`] corresponding to `value mod P`.
    #[inline]
    pub fn new(value: Residue) -> Self {
        let mut result = Self(value);
        result.cut();
        result
    }

    /// Wraps `value`, assuming it is already in `[0, P)`.
    #[inline]
    pub(crate) fn from_canonical(value: Residue) -> Self {
        debug_assert!((0..Self::MODULUS).contains(&value));
        Self(value)
    }

    /// Brings the representative back into `[0, P)`.
    #[inline]
    pub(crate) fn cut(&mut self) {
        self.0.reduce_assign(Self::MODULUS);
    }

    /// Returns the representative of this value, in `[0, P)`.
    #[inline]
    pub const fn value(self) -> Residue {
        self.0
    }

    /// Returns the modulus `P`.
    #[inline]
    pub const fn modulus() -> Residue {
        Self::MODULUS
    }

    /// Returns `true` if the representative is `0`.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),+) => {
        $(
            impl<const P: Residue> From<$t> for Modular<P> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::new(Residue::from(value))
                }
            }
        )+
    };
}

impl_from_primitive!(i8, i16, i32, i64, u8, u16, u32);

impl<const P: Residue> From<Modular<P>> for Residue {
    #[inline]
    fn from(value: Modular<P>) -> Self {
        value.0
    }
}

impl<const P: Residue> Zero for Modular<P> {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const P: Residue> One for Modular<P> {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes() {
        assert_eq!(Modular::<5>::new(45).value(), 0);
        assert_eq!(Modular::<7>::new(-8).value(), 6);
        assert_eq!(Modular::<7>::new(-7).value(), 0);
        assert_eq!(Modular::<7>::new(6).value(), 6);
        assert_eq!(Modular::<1>::new(12345).value(), 0);
    }

    #[test]
    fn test_cut_is_idempotent() {
        for x in -30..30 {
            let mut a = Modular::<7>::new(x);
            let before = a;
            a.cut();
            assert_eq!(a, before);
        }
    }

    #[test]
    fn test_default_copy_and_constants() {
        let zero = Modular::<11>::default();
        assert_eq!(zero, Modular::<11>::ZERO);
        assert!(zero.is_zero());

        let a = Modular::<11>::new(25);
        let b = a;
        assert_eq!(a.value(), b.value());

        assert_eq!(Modular::<11>::ONE.value(), 1);
        assert_eq!(Modular::<1>::ONE.value(), 0);
        assert_eq!(Modular::<11>::modulus(), 11);
    }

    #[test]
    fn test_from_primitive() {
        assert_eq!(Modular::<7>::from(-1i8).value(), 6);
        assert_eq!(Modular::<7>::from(300u16).value(), 6);
        assert_eq!(Modular::<7>::from(u32::MAX).value(), (u32::MAX % 7) as Residue);
        assert_eq!(Residue::from(Modular::<7>::new(20)), 6);
    }
}
