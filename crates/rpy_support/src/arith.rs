//! Integer operations that raise instead of wrapping or trapping.
//!
//! Division and modulo truncate toward zero, like the machine operations they stand in for.
//! Adjusting them to floor semantics is left to the caller.

use std::fmt;

use crate::exception::RaiseSimpleException;

/// A signed machine integer the checked operations work on.
pub trait LowLevelInt: Copy + Eq + Ord + fmt::Debug {
    /// The zero value.
    const ZERO: Self;
    /// The number of bits in the type.
    const BITS: u32;

    #[allow(missing_docs)]
    fn checked_add(self, rhs: Self) -> Option<Self>;
    #[allow(missing_docs)]
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    #[allow(missing_docs)]
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    #[allow(missing_docs)]
    fn checked_neg(self) -> Option<Self>;
    #[allow(missing_docs)]
    fn checked_abs(self) -> Option<Self>;
    #[allow(missing_docs)]
    fn checked_div(self, rhs: Self) -> Option<Self>;
    #[allow(missing_docs)]
    fn checked_rem(self, rhs: Self) -> Option<Self>;
    #[allow(missing_docs)]
    fn wrapping_div(self, rhs: Self) -> Self;
    #[allow(missing_docs)]
    fn wrapping_rem(self, rhs: Self) -> Self;
    #[allow(missing_docs)]
    fn wrapping_shl(self, rhs: u32) -> Self;
    #[allow(missing_docs)]
    fn wrapping_shr(self, rhs: u32) -> Self;

    /// Converts a non-negative value into a shift amount, or `None` if it exceeds `u32`.
    fn to_shift(self) -> Option<u32>;
}

macro_rules! impl_low_level_int {
    ($($ty:ty),+) => {
        $(
            impl LowLevelInt for $ty {
                const ZERO: Self = 0;
                const BITS: u32 = <$ty>::BITS;

                fn checked_add(self, rhs: Self) -> Option<Self> { <$ty>::checked_add(self, rhs) }
                fn checked_sub(self, rhs: Self) -> Option<Self> { <$ty>::checked_sub(self, rhs) }
                fn checked_mul(self, rhs: Self) -> Option<Self> { <$ty>::checked_mul(self, rhs) }
                fn checked_neg(self) -> Option<Self> { <$ty>::checked_neg(self) }
                fn checked_abs(self) -> Option<Self> { <$ty>::checked_abs(self) }
                fn checked_div(self, rhs: Self) -> Option<Self> { <$ty>::checked_div(self, rhs) }
                fn checked_rem(self, rhs: Self) -> Option<Self> { <$ty>::checked_rem(self, rhs) }
                fn wrapping_div(self, rhs: Self) -> Self { <$ty>::wrapping_div(self, rhs) }
                fn wrapping_rem(self, rhs: Self) -> Self { <$ty>::wrapping_rem(self, rhs) }
                fn wrapping_shl(self, rhs: u32) -> Self { <$ty>::wrapping_shl(self, rhs) }
                fn wrapping_shr(self, rhs: u32) -> Self { <$ty>::wrapping_shr(self, rhs) }

                fn to_shift(self) -> Option<u32> {
                    u32::try_from(self).ok()
                }
            }
        )+
    };
}

impl_low_level_int!(i8, i16, i32, i64, isize);

/// `x + y`, raising `OverflowError` if the sum does not fit.
pub fn int_add_ovf<T: LowLevelInt, R: RaiseSimpleException>(
    raiser: &R,
    x: T,
    y: T,
) -> Result<T, R::Exception> {
    match x.checked_add(y) {
        Some(sum) => Ok(sum),
        None => fail_ovf!(raiser, "integer addition"),
    }
}

/// `x - y`, raising `OverflowError` if the difference does not fit.
pub fn int_sub_ovf<T: LowLevelInt, R: RaiseSimpleException>(
    raiser: &R,
    x: T,
    y: T,
) -> Result<T, R::Exception> {
    match x.checked_sub(y) {
        Some(difference) => Ok(difference),
        None => fail_ovf!(raiser, "integer subtraction"),
    }
}

/// `x * y`, raising `OverflowError` if the product does not fit.
pub fn int_mul_ovf<T: LowLevelInt, R: RaiseSimpleException>(
    raiser: &R,
    x: T,
    y: T,
) -> Result<T, R::Exception> {
    match x.checked_mul(y) {
        Some(product) => Ok(product),
        None => fail_ovf!(raiser, "integer multiplication"),
    }
}

/// `-x`, raising `OverflowError` for the minimum value.
pub fn int_neg_ovf<T: LowLevelInt, R: RaiseSimpleException>(
    raiser: &R,
    x: T,
) -> Result<T, R::Exception> {
    match x.checked_neg() {
        Some(negated) => Ok(negated),
        None => fail_ovf!(raiser, "integer negate"),
    }
}

/// `|x|`, raising `OverflowError` for the minimum value.
pub fn int_abs_ovf<T: LowLevelInt, R: RaiseSimpleException>(
    raiser: &R,
    x: T,
) -> Result<T, R::Exception> {
    match x.checked_abs() {
        Some(absolute) => Ok(absolute),
        None => fail_ovf!(raiser, "integer absolute"),
    }
}

/// `x / y`, raising `ZeroDivisionError` if `y` is zero. `MIN / -1` wraps.
pub fn int_floordiv_zer<T: LowLevelInt, R: RaiseSimpleException>(
    raiser: &R,
    x: T,
    y: T,
) -> Result<T, R::Exception> {
    if y == T::ZERO {
        fail_zer!(raiser, "integer division");
    }
    Ok(x.wrapping_div(y))
}

/// `x / y`, raising `ZeroDivisionError` if `y` is zero and `OverflowError` for `MIN / -1`.
pub fn int_floordiv_ovf_zer<T: LowLevelInt, R: RaiseSimpleException>(
    raiser: &R,
    x: T,
    y: T,
) -> Result<T, R::Exception> {
    if y == T::ZERO {
        fail_zer!(raiser, "integer division");
    }
    match x.checked_div(y) {
        Some(quotient) => Ok(quotient),
        None => fail_ovf!(raiser, "integer division"),
    }
}

/// `x % y`, raising `ZeroDivisionError` if `y` is zero.
pub fn int_mod_zer<T: LowLevelInt, R: RaiseSimpleException>(
    raiser: &R,
    x: T,
    y: T,
) -> Result<T, R::Exception> {
    if y == T::ZERO {
        fail_zer!(raiser, "integer modulo");
    }
    Ok(x.wrapping_rem(y))
}

/// `x % y`, raising `ZeroDivisionError` if `y` is zero and `OverflowError` for `MIN % -1`.
pub fn int_mod_ovf_zer<T: LowLevelInt, R: RaiseSimpleException>(
    raiser: &R,
    x: T,
    y: T,
) -> Result<T, R::Exception> {
    if y == T::ZERO {
        fail_zer!(raiser, "integer modulo");
    }
    match x.checked_rem(y) {
        Some(remainder) => Ok(remainder),
        None => fail_ovf!(raiser, "integer modulo"),
    }
}

/// `x << y`, raising `ValueError` for a negative shift count and `OverflowError` if bits are lost
/// or the sign changes.
pub fn int_lshift_ovf<T: LowLevelInt, R: RaiseSimpleException>(
    raiser: &R,
    x: T,
    y: T,
) -> Result<T, R::Exception> {
    if y < T::ZERO {
        fail_val!(raiser, "negative shift count");
    }
    let shift = match y.to_shift() {
        Some(shift) if shift < T::BITS => shift,
        _ if x == T::ZERO => return Ok(T::ZERO),
        _ => fail_ovf!(raiser, "x<<y losing bits or changing sign"),
    };
    let shifted = x.wrapping_shl(shift);
    if shifted.wrapping_shr(shift) != x {
        fail_ovf!(raiser, "x<<y losing bits or changing sign");
    }
    Ok(shifted)
}
