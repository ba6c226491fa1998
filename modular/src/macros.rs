// Every operator is implemented once as `Modular<P> op Modular<P>`. The macros below derive the
// reference forms and the mixed forms with a raw `Residue` on either side from that single
// implementation, promoting raw integers through `Modular::new`.

macro_rules! forward_binary_op {
    ($trait:ident::$method_name:ident, $assign_trait:ident::$assign_method_name:ident) => {
        impl<const P: $crate::Residue> ::std::ops::$trait<&$crate::Modular<P>>
            for &$crate::Modular<P>
        {
            type Output = $crate::Modular<P>;

            #[inline]
            fn $method_name(self, rhs: &$crate::Modular<P>) -> Self::Output {
                ::std::ops::$trait::$method_name(*self, *rhs)
            }
        }

        impl<const P: $crate::Residue> ::std::ops::$trait<&$crate::Modular<P>>
            for $crate::Modular<P>
        {
            type Output = $crate::Modular<P>;

            #[inline]
            fn $method_name(self, rhs: &$crate::Modular<P>) -> Self::Output {
                ::std::ops::$trait::$method_name(self, *rhs)
            }
        }

        impl<const P: $crate::Residue> ::std::ops::$trait<$crate::Modular<P>>
            for &$crate::Modular<P>
        {
            type Output = $crate::Modular<P>;

            #[inline]
            fn $method_name(self, rhs: $crate::Modular<P>) -> Self::Output {
                ::std::ops::$trait::$method_name(*self, rhs)
            }
        }

        impl<const P: $crate::Residue> ::std::ops::$trait<$crate::Residue> for $crate::Modular<P> {
            type Output = $crate::Modular<P>;

            #[inline]
            fn $method_name(self, rhs: $crate::Residue) -> Self::Output {
                ::std::ops::$trait::$method_name(self, $crate::Modular::<P>::new(rhs))
            }
        }

        impl<const P: $crate::Residue> ::std::ops::$trait<$crate::Residue> for &$crate::Modular<P> {
            type Output = $crate::Modular<P>;

            #[inline]
            fn $method_name(self, rhs: $crate::Residue) -> Self::Output {
                ::std::ops::$trait::$method_name(*self, $crate::Modular::<P>::new(rhs))
            }
        }

        impl<const P: $crate::Residue> ::std::ops::$trait<$crate::Modular<P>> for $crate::Residue {
            type Output = $crate::Modular<P>;

            #[inline]
            fn $method_name(self, rhs: $crate::Modular<P>) -> Self::Output {
                ::std::ops::$trait::$method_name($crate::Modular::<P>::new(self), rhs)
            }
        }

        impl<const P: $crate::Residue> ::std::ops::$trait<&$crate::Modular<P>> for $crate::Residue {
            type Output = $crate::Modular<P>;

            #[inline]
            fn $method_name(self, rhs: &$crate::Modular<P>) -> Self::Output {
                ::std::ops::$trait::$method_name($crate::Modular::<P>::new(self), *rhs)
            }
        }

        impl<const P: $crate::Residue> ::std::ops::$assign_trait for $crate::Modular<P> {
            #[inline]
            fn $assign_method_name(&mut self, rhs: $crate::Modular<P>) {
                *self = ::std::ops::$trait::$method_name(*self, rhs);
            }
        }

        impl<const P: $crate::Residue> ::std::ops::$assign_trait<&$crate::Modular<P>>
            for $crate::Modular<P>
        {
            #[inline]
            fn $assign_method_name(&mut self, rhs: &$crate::Modular<P>) {
                *self = ::std::ops::$trait::$method_name(*self, *rhs);
            }
        }

        impl<const P: $crate::Residue> ::std::ops::$assign_trait<$crate::Residue>
            for $crate::Modular<P>
        {
            #[inline]
            fn $assign_method_name(&mut self, rhs: $crate::Residue) {
                *self = ::std::ops::$trait::$method_name(*self, $crate::Modular::<P>::new(rhs));
            }
        }
    };
}
pub(crate) use forward_binary_op;

// Division and remainder can fail, so their operators yield a `Result` and have no
// `*Assign` counterpart. `$checked` is the inherent method doing the actual work.
macro_rules! forward_fallible_op {
    ($trait:ident::$method_name:ident => $checked:ident) => {
        impl<const P: $crate::Residue> ::std::ops::$trait for $crate::Modular<P> {
            type Output = ::std::result::Result<$crate::Modular<P>, $crate::ModularError>;

            #[inline]
            fn $method_name(self, rhs: $crate::Modular<P>) -> Self::Output {
                self.$checked(rhs)
            }
        }

        impl<const P: $crate::Residue> ::std::ops::$trait<&$crate::Modular<P>>
            for &$crate::Modular<P>
        {
            type Output = ::std::result::Result<$crate::Modular<P>, $crate::ModularError>;

            #[inline]
            fn $method_name(self, rhs: &$crate::Modular<P>) -> Self::Output {
                (*self).$checked(*rhs)
            }
        }

        impl<const P: $crate::Residue> ::std::ops::$trait<&$crate::Modular<P>>
            for $crate::Modular<P>
        {
            type Output = ::std::result::Result<$crate::Modular<P>, $crate::ModularError>;

            #[inline]
            fn $method_name(self, rhs: &$crate::Modular<P>) -> Self::Output {
                self.$checked(*rhs)
            }
        }

        impl<const P: $crate::Residue> ::std::ops::$trait<$crate::Modular<P>>
            for &$crate::Modular<P>
        {
            type Output = ::std::result::Result<$crate::Modular<P>, $crate::ModularError>;

            #[inline]
            fn $method_name(self, rhs: $crate::Modular<P>) -> Self::Output {
                (*self).$checked(rhs)
            }
        }

        impl<const P: $crate::Residue> ::std::ops::$trait<$crate::Residue> for $crate::Modular<P> {
            type Output = ::std::result::Result<$crate::Modular<P>, $crate::ModularError>;

            #[inline]
            fn $method_name(self, rhs: $crate::Residue) -> Self::Output {
                self.$checked($crate::Modular::<P>::new(rhs))
            }
        }

        impl<const P: $crate::Residue> ::std::ops::$trait<$crate::Modular<P>> for $crate::Residue {
            type Output = ::std::result::Result<$crate::Modular<P>, $crate::ModularError>;

            #[inline]
            fn $method_name(self, rhs: $crate::Modular<P>) -> Self::Output {
                $crate::Modular::<P>::new(self).$checked(rhs)
            }
        }

        impl<const P: $crate::Residue> ::std::ops::$trait<$crate::Residue> for &$crate::Modular<P> {
            type Output = ::std::result::Result<$crate::Modular<P>, $crate::ModularError>;

            #[inline]
            fn $method_name(self, rhs: $crate::Residue) -> Self::Output {
                (*self).$checked($crate::Modular::<P>::new(rhs))
            }
        }

        impl<const P: $crate::Residue> ::std::ops::$trait<&$crate::Modular<P>> for $crate::Residue {
            type Output = ::std::result::Result<$crate::Modular<P>, $crate::ModularError>;

            #[inline]
            fn $method_name(self, rhs: &$crate::Modular<P>) -> Self::Output {
                $crate::Modular::<P>::new(self).$checked(*rhs)
            }
        }
    };
}
pub(crate) use forward_fallible_op;
