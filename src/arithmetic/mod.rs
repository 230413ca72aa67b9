//! Arithmetic combinators in pipeline order.
//!
//! Like the relational combinators, the operand comes first and the value
//! being transformed comes last:
//!
//! ```text
//! adding(n)(x)                  = x + n
//! subtracting(subtrahend)(x)    = x - subtrahend
//! multiplying(n)(x)             = x * n
//! divided_by_int(divisor)(x)    = x / divisor   (integers)
//! divided_by_float(divisor)(x)  = x / divisor   (f32, f64)
//! negated(x)                    = -x
//! ```
//!
//! # Integer division
//!
//! [`divided_by_int`] uses Rust's native integer division, which truncates
//! toward zero (`-7 / 2 == -3`). A zero divisor panics, and so does
//! `MIN / -1` for signed types. Use [`checked_divided_by_int`] to get `None`
//! instead of a panic.
//!
//! # Floating-point division
//!
//! [`divided_by_float`] follows IEEE-754: dividing a non-zero value by zero
//! yields an infinity and `0.0 / 0.0` yields NaN. It never panics.
//!
//! # Examples
//!
//! ```
//! use pointfree::arithmetic::{adding, multiplying, subtracting};
//!
//! let prices = vec![10, 20, 30];
//! let discounted: Vec<i32> = prices
//!     .into_iter()
//!     .map(subtracting(5))
//!     .map(multiplying(2))
//!     .map(adding(1))
//!     .collect();
//! assert_eq!(discounted, vec![11, 31, 51]);
//! ```

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer types accepted by [`divided_by_int`].
///
/// This trait is sealed; it is implemented for every primitive signed and
/// unsigned integer type.
pub trait Integer:
    Copy + Div<Output = Self> + Rem<Output = Self> + PartialEq + sealed::Sealed
{
    /// Division returning `None` on a zero divisor or on overflow.
    fn checked_quotient(self, divisor: Self) -> Option<Self>;
}

/// Primitive floating-point types accepted by [`divided_by_float`].
///
/// This trait is sealed; it is implemented for `f32` and `f64`.
pub trait Float: Copy + Div<Output = Self> + sealed::Sealed {}

macro_rules! impl_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $integer {}

            impl Integer for $integer {
                #[inline]
                fn checked_quotient(self, divisor: Self) -> Option<Self> {
                    self.checked_div(divisor)
                }
            }
        )*
    };
}

impl_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

impl sealed::Sealed for f32 {}
impl sealed::Sealed for f64 {}
impl Float for f32 {}
impl Float for f64 {}

/// Returns a function that adds `addend` to its argument.
///
/// The addend is cloned on every call, so non-`Copy` numeric types work too.
///
/// # Examples
///
/// ```
/// use pointfree::arithmetic::adding;
///
/// let add_five = adding(5);
/// assert_eq!(add_five(10), 15);
/// ```
#[inline]
pub fn adding<T>(addend: T) -> impl Fn(T) -> T
where
    T: Add<Output = T> + Clone,
{
    move |value| value + addend.clone()
}

/// Returns a function that subtracts `subtrahend` from its argument.
///
/// Note the order: the amount to subtract is supplied first.
///
/// # Examples
///
/// ```
/// use pointfree::arithmetic::subtracting;
///
/// let minus_four = subtracting(4);
/// assert_eq!(minus_four(10), 6);
/// ```
#[inline]
pub fn subtracting<T>(subtrahend: T) -> impl Fn(T) -> T
where
    T: Sub<Output = T> + Clone,
{
    move |minuend| minuend - subtrahend.clone()
}

/// Returns a function that multiplies its argument by `factor`.
///
/// # Examples
///
/// ```
/// use pointfree::arithmetic::multiplying;
///
/// let triple = multiplying(3);
/// assert_eq!(triple(7), 21);
/// ```
#[inline]
pub fn multiplying<T>(factor: T) -> impl Fn(T) -> T
where
    T: Mul<Output = T> + Clone,
{
    move |value| value * factor.clone()
}

/// Returns a function that divides its argument by `divisor` using integer
/// division.
///
/// The quotient is truncated toward zero.
///
/// # Panics
///
/// The returned function panics when `divisor` is zero, and for signed types
/// when computing `MIN / -1`, exactly like the `/` operator.
///
/// # Examples
///
/// ```
/// use pointfree::arithmetic::divided_by_int;
///
/// assert_eq!(divided_by_int(4)(12), 3);
/// assert_eq!(divided_by_int(2)(7), 3);
/// assert_eq!(divided_by_int(2)(-7), -3);
/// ```
///
/// ```should_panic
/// use pointfree::arithmetic::divided_by_int;
///
/// let by_zero = divided_by_int(0);
/// let _ = by_zero(1);
/// ```
#[inline]
pub fn divided_by_int<T: Integer>(divisor: T) -> impl Fn(T) -> T {
    move |dividend| dividend / divisor
}

/// Returns a function that divides its argument by `divisor`, yielding `None`
/// instead of panicking on a zero divisor or on overflow.
///
/// # Examples
///
/// ```
/// use pointfree::arithmetic::checked_divided_by_int;
///
/// assert_eq!(checked_divided_by_int(4)(12), Some(3));
/// assert_eq!(checked_divided_by_int(0)(12), None);
/// assert_eq!(checked_divided_by_int(-1)(i32::MIN), None);
/// ```
#[inline]
pub fn checked_divided_by_int<T: Integer>(divisor: T) -> impl Fn(T) -> Option<T> {
    move |dividend| dividend.checked_quotient(divisor)
}

/// Returns a function that computes the remainder of its argument divided by
/// `divisor`.
///
/// The remainder has the sign of the dividend, matching the truncating
/// quotient of [`divided_by_int`].
///
/// # Panics
///
/// The returned function panics when `divisor` is zero.
///
/// # Examples
///
/// ```
/// use pointfree::arithmetic::remainder_by_int;
///
/// assert_eq!(remainder_by_int(3)(10), 1);
/// assert_eq!(remainder_by_int(3)(-10), -1);
/// ```
#[inline]
pub fn remainder_by_int<T: Integer>(divisor: T) -> impl Fn(T) -> T {
    move |dividend| dividend % divisor
}

/// Returns a function that divides its argument by `divisor` using
/// floating-point division.
///
/// # Examples
///
/// ```
/// use pointfree::arithmetic::divided_by_float;
///
/// assert_eq!(divided_by_float(2.5)(6.25), 2.5);
/// assert!(divided_by_float(0.0)(1.0_f64).is_infinite());
/// assert!(divided_by_float(0.0)(0.0_f64).is_nan());
/// ```
#[inline]
pub fn divided_by_float<T: Float>(divisor: T) -> impl Fn(T) -> T {
    move |dividend| dividend / divisor
}

/// Returns the additive inverse of `value`.
///
/// # Examples
///
/// ```
/// use pointfree::arithmetic::negated;
///
/// assert_eq!(negated(-4), 4);
/// let flipped: Vec<f64> = vec![1.5, -2.0].into_iter().map(negated).collect();
/// assert_eq!(flipped, vec![-1.5, 2.0]);
/// ```
#[inline]
pub fn negated<T: Neg<Output = T>>(value: T) -> T {
    -value
}
