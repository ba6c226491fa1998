use crate::macros::forward_fallible_op;
use crate::{Modular, ModularError, Residue};

impl<const P: Residue> Modular<P> {
    /// Takes the integer remainder of the representatives.
    ///
    /// The result lies in `[0, rhs)`, which is inside `[0, P)`.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::DivisionByZero`] if `rhs` is zero.
    #[inline]
    pub fn try_rem(self, rhs: Self) -> Result<Self, ModularError> {
        if rhs.is_zero() {
            return Err(ModularError::DivisionByZero);
        }
        Ok(Self::from_canonical(self.value() % rhs.value()))
    }

    /// Performs `self = self % rhs` and returns `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::DivisionByZero`] if `rhs` is zero (a raw `rhs` is reduced
    /// first), leaving `self` unchanged.
    #[inline]
    pub fn try_rem_assign(&mut self, rhs: impl Into<Self>) -> Result<&mut Self, ModularError> {
        *self = self.try_rem(rhs.into())?;
        Ok(self)
    }

    /// Like [`try_rem`](Self::try_rem), returning `None` if `rhs` is zero.
    #[inline]
    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        self.try_rem(rhs).ok()
    }
}

forward_fallible_op!(Rem::rem => try_rem);
