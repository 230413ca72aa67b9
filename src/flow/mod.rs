//! Flow-control combinators.
//!
//! These combinators turn branching and looping into values that can be
//! passed to iterator adapters or composed with other combinators.
//!
//! # Overview
//!
//! - [`if_else`]: choose between two transforms
//! - [`cond`] / [`cond_default`]: first matching case of an ordered table
//! - [`when`] / [`unless`]: transform conditionally, otherwise pass through
//! - [`maybe_when`]: transform conditionally, otherwise `None`
//! - [`until`] / [`until_bounded`]: iterate a transform to a fixed point
//!
//! # Examples
//!
//! ```
//! use pointfree::flow::{cond_default, Case};
//!
//! let cases: Vec<Case<'_, u32, &str>> = vec![
//!     (Box::new(|n: &u32| n.is_multiple_of(15)), Box::new(|_| "FizzBuzz")),
//!     (Box::new(|n: &u32| n.is_multiple_of(3)), Box::new(|_| "Fizz")),
//!     (Box::new(|n: &u32| n.is_multiple_of(5)), Box::new(|_| "Buzz")),
//! ];
//! let label = cond_default(cases, || "-");
//!
//! let labels: Vec<&str> = (1..=5).map(label).collect();
//! assert_eq!(labels, vec!["-", "-", "Fizz", "-", "Buzz"]);
//! ```
//!
//! # Termination
//!
//! [`until`] has no iteration bound: if the predicate never becomes true,
//! the returned function never returns. Callers that cannot prove
//! termination should use [`until_bounded`], which gives up after a fixed
//! number of applications and reports [`UntilError::IterationLimitExceeded`].

mod error;

pub use error::UntilError;

use crate::predicate::{BoxedPredicate, complement};

/// A type-erased transform, the second half of a [`Case`].
pub type BoxedTransform<'a, A, B> = Box<dyn Fn(A) -> B + 'a>;

/// A `(predicate, transform)` pair with erased closure types, for tables
/// passed to [`cond`] and [`cond_default`].
pub type Case<'a, A, B> = (BoxedPredicate<'a, A>, BoxedTransform<'a, A, B>);

/// Returns a function applying `when_true` if `predicate` holds for its
/// argument, and `when_false` otherwise.
///
/// Exactly one of the two branches is invoked per call.
///
/// # Examples
///
/// ```
/// use pointfree::flow::if_else;
///
/// let absolute = if_else(|n: &i32| *n < 0, |n: i32| -n, |n: i32| n);
/// assert_eq!(absolute(-3), 3);
/// assert_eq!(absolute(4), 4);
/// ```
pub fn if_else<A, B, P, T, F>(predicate: P, when_true: T, when_false: F) -> impl Fn(A) -> B
where
    P: Fn(&A) -> bool,
    T: Fn(A) -> B,
    F: Fn(A) -> B,
{
    move |value| {
        if predicate(&value) {
            when_true(value)
        } else {
            when_false(value)
        }
    }
}

/// Returns a function that scans `cases` in order and applies the transform
/// of the first case whose predicate holds.
///
/// The result is `None` when no predicate holds, including when `cases` is
/// empty. Predicates after the matching case, and every transform other than
/// the matching one, are never invoked.
///
/// # Examples
///
/// ```
/// use pointfree::arithmetic::adding;
/// use pointfree::flow::cond;
/// use pointfree::relation::greater_than;
///
/// let bump_large = cond([(greater_than(10), adding(5))]);
/// assert_eq!(bump_large(11), Some(16));
/// assert_eq!(bump_large(5), None);
/// ```
pub fn cond<A, B, P, T, I>(cases: I) -> impl Fn(A) -> Option<B>
where
    P: Fn(&A) -> bool,
    T: Fn(A) -> B,
    I: IntoIterator<Item = (P, T)>,
{
    let cases: Vec<(P, T)> = cases.into_iter().collect();
    move |value| first_match(&cases, value)
}

/// Like [`cond`], but returns `default()` when no case matches.
///
/// The default thunk is only invoked on the no-match path.
///
/// # Examples
///
/// ```
/// use pointfree::flow::{cond_default, Case};
///
/// let cases: Vec<Case<'_, i32, String>> = vec![
///     (Box::new(|n: &i32| *n < 0), Box::new(|_| "negative".to_string())),
///     (Box::new(|n: &i32| *n > 0), Box::new(|_| "positive".to_string())),
/// ];
/// let sign = cond_default(cases, || "zero".to_string());
///
/// assert_eq!(sign(-2), "negative");
/// assert_eq!(sign(0), "zero");
/// ```
pub fn cond_default<A, B, P, T, D, I>(cases: I, default: D) -> impl Fn(A) -> B
where
    P: Fn(&A) -> bool,
    T: Fn(A) -> B,
    D: Fn() -> B,
    I: IntoIterator<Item = (P, T)>,
{
    let cases: Vec<(P, T)> = cases.into_iter().collect();
    move |value| first_match(&cases, value).unwrap_or_else(&default)
}

fn first_match<A, B, P, T>(cases: &[(P, T)], value: A) -> Option<B>
where
    P: Fn(&A) -> bool,
    T: Fn(A) -> B,
{
    cases
        .iter()
        .find(|(predicate, _)| predicate(&value))
        .map(|(_, transform)| transform(value))
}

/// Returns a function applying `transform` when `predicate` holds and
/// returning its argument unchanged otherwise.
///
/// # Examples
///
/// ```
/// use pointfree::flow::when;
///
/// let clamp_to_zero = when(|n: &i32| *n < 0, |_| 0);
/// assert_eq!(clamp_to_zero(-5), 0);
/// assert_eq!(clamp_to_zero(5), 5);
/// ```
pub fn when<A, P, T>(predicate: P, transform: T) -> impl Fn(A) -> A
where
    P: Fn(&A) -> bool,
    T: Fn(A) -> A,
{
    move |value| {
        if predicate(&value) {
            transform(value)
        } else {
            value
        }
    }
}

/// Returns a function yielding `Some(transform(x))` when `predicate` holds
/// for `x` and `None` otherwise.
///
/// Designed for [`Iterator::filter_map`].
///
/// # Examples
///
/// ```
/// use pointfree::flow::maybe_when;
///
/// let doubled_evens: Vec<i32> = (1..=6)
///     .filter_map(maybe_when(|n: &i32| n % 2 == 0, |n| n * 2))
///     .collect();
/// assert_eq!(doubled_evens, vec![4, 8, 12]);
/// ```
pub fn maybe_when<A, B, P, T>(predicate: P, transform: T) -> impl Fn(A) -> Option<B>
where
    P: Fn(&A) -> bool,
    T: Fn(A) -> B,
{
    move |value| predicate(&value).then(|| transform(value))
}

/// Returns a function applying `transform` when `predicate` does *not* hold.
///
/// Defined as `when(complement(predicate), transform)`.
///
/// # Examples
///
/// ```
/// use pointfree::flow::unless;
///
/// let ensure_trailing_slash = unless(|path: &String| path.ends_with('/'), |path| path + "/");
/// assert_eq!(ensure_trailing_slash("/usr".to_string()), "/usr/");
/// assert_eq!(ensure_trailing_slash("/usr/".to_string()), "/usr/");
/// ```
pub fn unless<A, P, T>(predicate: P, transform: T) -> impl Fn(A) -> A
where
    P: Fn(&A) -> bool,
    T: Fn(A) -> A,
{
    when(complement(predicate), transform)
}

/// Returns a function that repeatedly applies `transform`, starting from its
/// argument, until `predicate` holds for the current value.
///
/// If the predicate already holds for the argument, it is returned without
/// invoking `transform`.
///
/// The loop is unbounded: a predicate that never becomes true makes the
/// returned function run forever. See [`until_bounded`] for a guarded
/// variant.
///
/// # Examples
///
/// ```
/// use pointfree::arithmetic::adding;
/// use pointfree::flow::until;
/// use pointfree::relation::greater_than_equal_to;
///
/// let count_to_ten = until(greater_than_equal_to(10), adding(1));
/// assert_eq!(count_to_ten(0), 10);
/// assert_eq!(count_to_ten(42), 42);
/// ```
pub fn until<A, P, T>(predicate: P, transform: T) -> impl Fn(A) -> A
where
    P: Fn(&A) -> bool,
    T: Fn(A) -> A,
{
    move |initial| {
        let mut current = initial;
        while !predicate(&current) {
            current = transform(current);
        }
        current
    }
}

/// Like [`until`], but applies `transform` at most `limit` times.
///
/// Returns `Ok` with the first value satisfying `predicate`, or
/// [`UntilError::IterationLimitExceeded`] carrying the last value reached if
/// the predicate still fails after `limit` applications.
///
/// # Errors
///
/// Returns [`UntilError::IterationLimitExceeded`] when the limit is reached.
///
/// # Examples
///
/// ```
/// use pointfree::flow::{until_bounded, UntilError};
///
/// let halve_to_one = until_bounded(|n: &u64| *n <= 1, |n| n / 2, 8);
/// assert_eq!(halve_to_one(100), Ok(1));
///
/// let error = halve_to_one(u64::MAX).unwrap_err();
/// assert_eq!(error.limit(), 8);
/// assert_eq!(error.into_last_value(), u64::MAX >> 8);
/// ```
pub fn until_bounded<A, P, T>(
    predicate: P,
    transform: T,
    limit: usize,
) -> impl Fn(A) -> Result<A, UntilError<A>>
where
    P: Fn(&A) -> bool,
    T: Fn(A) -> A,
{
    move |initial| {
        let mut current = initial;
        let mut applications = 0_usize;
        while !predicate(&current) {
            if applications == limit {
                #[cfg(feature = "tracing")]
                tracing::debug!(limit, "until_bounded reached its iteration limit");
                return Err(UntilError::IterationLimitExceeded {
                    limit,
                    last_value: current,
                });
            }
            current = transform(current);
            applications += 1;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(applications, "until_bounded reached a fixed point");
        Ok(current)
    }
}
