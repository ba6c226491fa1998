use crate::macros::forward_fallible_op;
use crate::{Modular, ModularError, Residue};

impl<const P: Residue> Modular<P> {
    /// Divides the representatives as ordinary integers, truncating toward zero.
    ///
    /// This is not field division: `6 / 5 (mod 7)` is `1`, not `6 * 5^(-1)`.
    /// Both representatives lie in `[0, P)`, so the quotient does too.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::DivisionByZero`] if `rhs` is zero.
    #[inline]
    pub fn try_div(self, rhs: Self) -> Result<Self, ModularError> {
        if rhs.is_zero() {
            return Err(ModularError::DivisionByZero);
        }
        Ok(Self::from_canonical(self.value() / rhs.value()))
    }

    /// Performs `self = self / rhs` and returns `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::DivisionByZero`] if `rhs` is zero (a raw `rhs` is reduced
    /// first), leaving `self` unchanged.
    #[inline]
    pub fn try_div_assign(&mut self, rhs: impl Into<Self>) -> Result<&mut Self, ModularError> {
        *self = self.try_div(rhs.into())?;
        Ok(self)
    }

    /// Like [`try_div`](Self::try_div), returning `None` if `rhs` is zero.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.try_div(rhs).ok()
    }
}

forward_fallible_op!(Div::div => try_div);
