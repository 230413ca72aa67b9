//! Basic combinators used as building blocks by the other adapters.
//!
//! - [`identity`]: the I combinator
//! - [`cloned`]: the I combinator over a borrowed argument, for projections
//! - [`constant`]: the K combinator
//! - [`flip`]: the C combinator

/// Returns the value unchanged.
///
/// `identity` takes its argument by value, so it cannot be used where a
/// projection `Fn(&A) -> K` is expected. Use [`cloned`] there.
///
/// # Examples
///
/// ```
/// use pointfree::adapter::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Returns an owned copy of the borrowed value.
///
/// This is the neutral projection: `fn_contra_map(cloned, f)(&a) == f(a)`,
/// and `deduplicate_consecutive_items_by(cloned, items)` deduplicates by the
/// elements themselves.
///
/// # Examples
///
/// ```
/// use pointfree::adapter::cloned;
/// use pointfree::list::deduplicate_consecutive_items_by;
///
/// assert_eq!(cloned(&7), 7);
/// assert_eq!(
///     deduplicate_consecutive_items_by(cloned, vec![1, 1, 1, 2, 3, 3]),
///     vec![1, 2, 3]
/// );
/// ```
#[inline]
pub fn cloned<T: Clone>(value: &T) -> T {
    value.clone()
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use pointfree::adapter::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the first two arguments of a binary function.
///
/// `flip(f)(a, b) == f(b, a)`, and flipping twice gives back a function
/// equivalent to `f`.
///
/// # Examples
///
/// ```
/// use pointfree::adapter::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let subtract_from = flip(subtract);
/// assert_eq!(subtract(10, 3), 7);
/// assert_eq!(subtract_from(10, 3), -7);
/// ```
///
/// Flipping a method-style relation puts the fixed operand first:
///
/// ```
/// use pointfree::adapter::flip;
///
/// let starts_with = |text: &str, prefix: &str| text.starts_with(prefix);
/// let is_prefix_of = flip(starts_with);
/// assert!(is_prefix_of("pipe", "pipeline"));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
