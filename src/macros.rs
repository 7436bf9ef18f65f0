//! Internal macros.

/// Implements the owned/borrowed operand combinations of a binary operator
/// in terms of the borrowed-by-borrowed impl.
///
/// The const-generic arm must stay first: `Int<const N: usize>` is not a
/// valid `ty` fragment, so it has to be matched structurally.
macro_rules! impl_binop_variants {
    ($trait:ident, $method:ident for $t:ident<const $n:ident: usize>) => {
        impl<const $n: usize> core::ops::$trait for $t<$n> {
            type Output = $t<$n>;

            #[inline]
            fn $method(self, rhs: $t<$n>) -> $t<$n> {
                (&self).$method(&rhs)
            }
        }

        impl<const $n: usize> core::ops::$trait<&$t<$n>> for $t<$n> {
            type Output = $t<$n>;

            #[inline]
            fn $method(self, rhs: &$t<$n>) -> $t<$n> {
                (&self).$method(rhs)
            }
        }

        impl<const $n: usize> core::ops::$trait<$t<$n>> for &$t<$n> {
            type Output = $t<$n>;

            #[inline]
            fn $method(self, rhs: $t<$n>) -> $t<$n> {
                self.$method(&rhs)
            }
        }
    };

    ($trait:ident, $method:ident for $t:ty) => {
        impl core::ops::$trait for $t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: $t) -> $t {
                (&self).$method(&rhs)
            }
        }

        impl core::ops::$trait<&$t> for $t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: &$t) -> $t {
                (&self).$method(rhs)
            }
        }

        impl core::ops::$trait<$t> for &$t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: $t) -> $t {
                self.$method(&rhs)
            }
        }
    };
}

/// Implements the compound-assignment operator in terms of the binary one.
macro_rules! impl_binop_assign {
    ($trait:ident, $method:ident via $op:tt for $t:ident<const $n:ident: usize>) => {
        impl<const $n: usize> core::ops::$trait for $t<$n> {
            #[inline]
            fn $method(&mut self, rhs: $t<$n>) {
                *self = &*self $op &rhs;
            }
        }

        impl<const $n: usize> core::ops::$trait<&$t<$n>> for $t<$n> {
            #[inline]
            fn $method(&mut self, rhs: &$t<$n>) {
                *self = &*self $op rhs;
            }
        }
    };

    ($trait:ident, $method:ident via $op:tt for $t:ty) => {
        impl core::ops::$trait for $t {
            #[inline]
            fn $method(&mut self, rhs: $t) {
                *self = &*self $op &rhs;
            }
        }

        impl core::ops::$trait<&$t> for $t {
            #[inline]
            fn $method(&mut self, rhs: &$t) {
                *self = &*self $op rhs;
            }
        }
    };
}
