//! Relational combinators in pipeline order.
//!
//! Each combinator takes the operand it compares against *first* and the
//! subject *second*, so `less_than(10)` reads as "is less than 10" when it
//! is handed to [`Iterator::filter`] or another combinator:
//!
//! ```text
//! less_than(bound)(x)             <=>  x <  bound
//! less_than_equal_to(bound)(x)    <=>  x <= bound
//! greater_than(bound)(x)          <=>  x >  bound
//! greater_than_equal_to(bound)(x) <=>  x >= bound
//! equals(value)(x)                <=>  x == value
//! ```
//!
//! The ordering combinators only require [`PartialOrd`]. Incomparable values
//! such as `f64::NAN` make all of them return `false`, which is what the
//! native operators do.
//!
//! # Examples
//!
//! ```
//! use pointfree::relation::{greater_than, less_than};
//!
//! let small: Vec<i32> = vec![3, 12, 7, 25].into_iter().filter(less_than(10)).collect();
//! assert_eq!(small, vec![3, 7]);
//!
//! let names = ["ada", "grace", "linus"];
//! let after_b: Vec<&&str> = names.iter().filter(|name| greater_than("b")(*name)).collect();
//! assert_eq!(after_b, vec![&"grace", &"linus"]);
//! ```

/// Returns a predicate that holds when its subject is strictly less than `bound`.
///
/// # Examples
///
/// ```
/// use pointfree::relation::less_than;
///
/// let under_ten = less_than(10);
/// assert!(under_ten(&5));
/// assert!(!under_ten(&10));
/// assert!(!under_ten(&15));
/// ```
#[inline]
pub fn less_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value < bound
}

/// Returns a predicate that holds when its subject is less than or equal to `bound`.
///
/// # Examples
///
/// ```
/// use pointfree::relation::less_than_equal_to;
///
/// let at_most_ten = less_than_equal_to(10);
/// assert!(at_most_ten(&5));
/// assert!(at_most_ten(&10));
/// assert!(!at_most_ten(&15));
/// ```
#[inline]
pub fn less_than_equal_to<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value <= bound
}

/// Returns a predicate that holds when its subject is strictly greater than `bound`.
///
/// # Examples
///
/// ```
/// use pointfree::relation::greater_than;
///
/// let over_ten = greater_than(10);
/// assert!(!over_ten(&5));
/// assert!(!over_ten(&10));
/// assert!(over_ten(&15));
/// ```
#[inline]
pub fn greater_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value > bound
}

/// Returns a predicate that holds when its subject is greater than or equal to `bound`.
///
/// # Examples
///
/// ```
/// use pointfree::relation::greater_than_equal_to;
///
/// let at_least_ten = greater_than_equal_to(10);
/// assert!(!at_least_ten(&5));
/// assert!(at_least_ten(&10));
/// assert!(at_least_ten(&15));
/// ```
#[inline]
pub fn greater_than_equal_to<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value >= bound
}

/// Returns a predicate that holds when its subject equals `expected`.
///
/// Only [`PartialEq`] is required, so it works for types without an ordering.
///
/// # Examples
///
/// ```
/// use pointfree::relation::equals;
///
/// #[derive(PartialEq)]
/// enum Status { Active, Suspended }
///
/// let is_active = equals(Status::Active);
/// assert!(is_active(&Status::Active));
/// assert!(!is_active(&Status::Suspended));
/// ```
#[inline]
pub fn equals<T: PartialEq>(expected: T) -> impl Fn(&T) -> bool {
    move |value| *value == expected
}

/// Returns a predicate that holds when its subject differs from `unexpected`.
#[inline]
pub fn not_equals<T: PartialEq>(unexpected: T) -> impl Fn(&T) -> bool {
    move |value| *value != unexpected
}

/// Returns a predicate that holds when `lower <= subject <= upper`.
///
/// An empty range (`lower > upper`) never holds.
///
/// # Examples
///
/// ```
/// use pointfree::relation::between;
///
/// let is_digit = between('0', '9');
/// assert!(is_digit(&'7'));
/// assert!(!is_digit(&'x'));
/// ```
#[inline]
pub fn between<T: PartialOrd>(lower: T, upper: T) -> impl Fn(&T) -> bool {
    let at_least_lower = greater_than_equal_to(lower);
    let at_most_upper = less_than_equal_to(upper);
    move |value| at_least_lower(value) && at_most_upper(value)
}
