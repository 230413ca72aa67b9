//! Predicate combinators.
//!
//! A predicate is any `Fn(&A) -> bool`. Predicates borrow their subject, so
//! they plug straight into [`Iterator::filter`], [`Iterator::take_while`] and
//! the scans in [`list`](crate::list) without cloning.
//!
//! # Overview
//!
//! - [`both`] / [`either`] / [`neither`]: binary logical connectives
//! - [`all_pass`] / [`any_pass`]: folds over an ordered sequence of predicates
//! - [`complement`]: logical negation
//! - [`always_true`] / [`always_false`]: constant predicates
//!
//! Every connective short-circuits exactly like `&&` and `||`: once the
//! result is known, the remaining predicates are not invoked.
//!
//! # Examples
//!
//! ```
//! use pointfree::predicate::{both, complement};
//!
//! let is_even = |value: &i32| value % 2 == 0;
//! let is_positive = |value: &i32| *value > 0;
//!
//! let is_positive_even = both(is_positive, is_even);
//! assert!(is_positive_even(&4));
//! assert!(!is_positive_even(&-4));
//!
//! let is_odd = complement(is_even);
//! let odds: Vec<i32> = (1..=6).filter(is_odd).collect();
//! assert_eq!(odds, vec![1, 3, 5]);
//! ```
//!
//! # Laws
//!
//! - **Double negation**: `complement(complement(p))(a) == p(a)`
//! - **Vacuous truth**: `all_pass([])(a) == true`
//! - **Empty disjunction**: `any_pass([])(a) == false`

/// A type-erased predicate.
///
/// Use this when predicates of different closure types have to live in the
/// same sequence, e.g. as the argument of [`all_pass`] or [`any_pass`].
///
/// # Examples
///
/// ```
/// use pointfree::predicate::{BoxedPredicate, all_pass};
///
/// let predicates: Vec<BoxedPredicate<'_, i32>> = vec![
///     Box::new(|value: &i32| *value > 0),
///     Box::new(|value: &i32| value % 2 == 0),
/// ];
/// let is_positive_even = all_pass(predicates);
/// assert!(is_positive_even(&8));
/// ```
pub type BoxedPredicate<'a, A> = Box<dyn Fn(&A) -> bool + 'a>;

/// Returns a predicate that holds when both `first` and `second` hold.
///
/// `second` is only invoked when `first` returned `true`.
///
/// # Examples
///
/// ```
/// use pointfree::predicate::both;
///
/// let in_range = both(|value: &i32| *value >= 0, |value: &i32| *value < 10);
/// assert!(in_range(&5));
/// assert!(!in_range(&10));
/// ```
#[inline]
pub fn both<A, P, Q>(first: P, second: Q) -> impl Fn(&A) -> bool
where
    A: ?Sized,
    P: Fn(&A) -> bool,
    Q: Fn(&A) -> bool,
{
    move |value| first(value) && second(value)
}

/// Returns a predicate that holds when `first` or `second` holds.
///
/// `second` is only invoked when `first` returned `false`.
///
/// # Examples
///
/// ```
/// use pointfree::predicate::either;
///
/// let is_blank = either(|text: &str| text.is_empty(), |text: &str| text.trim().is_empty());
/// assert!(is_blank(""));
/// assert!(is_blank("   "));
/// assert!(!is_blank("text"));
/// ```
#[inline]
pub fn either<A, P, Q>(first: P, second: Q) -> impl Fn(&A) -> bool
where
    A: ?Sized,
    P: Fn(&A) -> bool,
    Q: Fn(&A) -> bool,
{
    move |value| first(value) || second(value)
}

/// Returns a predicate that holds when neither `first` nor `second` holds.
///
/// Equivalent to `complement(either(first, second))`, including its
/// short-circuit behaviour.
#[inline]
pub fn neither<A, P, Q>(first: P, second: Q) -> impl Fn(&A) -> bool
where
    A: ?Sized,
    P: Fn(&A) -> bool,
    Q: Fn(&A) -> bool,
{
    complement(either(first, second))
}

/// Returns a predicate that holds when every predicate in `predicates` holds.
///
/// Predicates are evaluated in order and evaluation stops at the first one
/// returning `false`. An empty sequence yields a predicate that is always
/// `true`.
///
/// # Examples
///
/// ```
/// use pointfree::predicate::{BoxedPredicate, all_pass};
///
/// let rules: Vec<BoxedPredicate<'_, str>> = vec![
///     Box::new(|name: &str| !name.is_empty()),
///     Box::new(|name: &str| name.len() <= 8),
///     Box::new(|name: &str| name.chars().all(char::is_alphanumeric)),
/// ];
/// let is_valid_name = all_pass(rules);
///
/// assert!(is_valid_name("alice"));
/// assert!(!is_valid_name("bob smith"));
///
/// let anything_goes = all_pass(Vec::<BoxedPredicate<'_, str>>::new());
/// assert!(anything_goes("whatever"));
/// ```
pub fn all_pass<A, P, I>(predicates: I) -> impl Fn(&A) -> bool
where
    A: ?Sized,
    P: Fn(&A) -> bool,
    I: IntoIterator<Item = P>,
{
    let predicates: Vec<P> = predicates.into_iter().collect();
    move |value| predicates.iter().all(|predicate| predicate(value))
}

/// Returns a predicate that holds when at least one predicate in `predicates`
/// holds.
///
/// Predicates are evaluated in order and evaluation stops at the first one
/// returning `true`. An empty sequence yields a predicate that is always
/// `false`.
///
/// # Examples
///
/// ```
/// use pointfree::predicate::{BoxedPredicate, any_pass};
///
/// let predicates: Vec<BoxedPredicate<'_, i32>> = vec![
///     Box::new(|value: &i32| *value < 0),
///     Box::new(|value: &i32| *value > 100),
/// ];
/// let out_of_range = any_pass(predicates);
///
/// assert!(out_of_range(&-1));
/// assert!(out_of_range(&101));
/// assert!(!out_of_range(&50));
/// ```
pub fn any_pass<A, P, I>(predicates: I) -> impl Fn(&A) -> bool
where
    A: ?Sized,
    P: Fn(&A) -> bool,
    I: IntoIterator<Item = P>,
{
    let predicates: Vec<P> = predicates.into_iter().collect();
    move |value| predicates.iter().any(|predicate| predicate(value))
}

/// Returns a predicate that negates `predicate`.
///
/// # Examples
///
/// ```
/// use pointfree::predicate::complement;
///
/// let is_empty = |text: &str| text.is_empty();
/// let is_not_empty = complement(is_empty);
///
/// assert!(is_not_empty("text"));
/// assert!(!is_not_empty(""));
/// ```
#[inline]
pub fn complement<A, P>(predicate: P) -> impl Fn(&A) -> bool
where
    A: ?Sized,
    P: Fn(&A) -> bool,
{
    move |value| !predicate(value)
}

/// A predicate that ignores its input and returns `true`.
///
/// # Examples
///
/// ```
/// use pointfree::predicate::always_true;
///
/// assert!(always_true(&42));
/// assert!(always_true("anything"));
/// ```
#[inline]
pub const fn always_true<A: ?Sized>(_value: &A) -> bool {
    true
}

/// A predicate that ignores its input and returns `false`.
///
/// # Examples
///
/// ```
/// use pointfree::predicate::always_false;
///
/// let nothing: Vec<i32> = vec![1, 2, 3].into_iter().filter(always_false).collect();
/// assert!(nothing.is_empty());
/// ```
#[inline]
pub const fn always_false<A: ?Sized>(_value: &A) -> bool {
    false
}
