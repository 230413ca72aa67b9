//! Fan-out combinators: derive several values from one input, then combine.
//!
//! ```text
//! converge(combine, (f, g))(x)        = combine(f(x), g(x))
//! converge3(combine, (f, g, h))(x)    = combine(f(x), g(x), h(x))
//! converge_list(reduce, [f1..fn])(x)  = reduce([f1(x), .., fn(x)])
//! ```
//!
//! The derivations borrow the input, so the input is never cloned.

/// Applies two derivations to the same input and combines their results.
///
/// The derivations run left to right.
///
/// # Examples
///
/// ```
/// use pointfree::adapter::converge;
///
/// let average = converge(
///     |sum: f64, count: usize| sum / count as f64,
///     (|values: &Vec<f64>| values.iter().sum::<f64>(), |values: &Vec<f64>| values.len()),
/// );
///
/// assert_eq!(average(&vec![1.0, 2.0, 6.0]), 3.0);
/// ```
#[inline]
pub fn converge<A, X, Y, R, C, F, G>(combine: C, derivations: (F, G)) -> impl Fn(&A) -> R
where
    A: ?Sized,
    C: Fn(X, Y) -> R,
    F: Fn(&A) -> X,
    G: Fn(&A) -> Y,
{
    let (first, second) = derivations;
    move |input| combine(first(input), second(input))
}

/// Applies three derivations to the same input and combines their results.
///
/// # Examples
///
/// ```
/// use pointfree::adapter::converge3;
///
/// let summary = converge3(
///     |min: i32, max: i32, len: usize| format!("{len} values in [{min}, {max}]"),
///     (
///         |values: &[i32]| values.iter().copied().min().unwrap_or_default(),
///         |values: &[i32]| values.iter().copied().max().unwrap_or_default(),
///         |values: &[i32]| values.len(),
///     ),
/// );
///
/// assert_eq!(summary(&[4, 1, 9][..]), "3 values in [1, 9]");
/// ```
#[inline]
pub fn converge3<A, X, Y, Z, R, C, F, G, H>(
    combine: C,
    derivations: (F, G, H),
) -> impl Fn(&A) -> R
where
    A: ?Sized,
    C: Fn(X, Y, Z) -> R,
    F: Fn(&A) -> X,
    G: Fn(&A) -> Y,
    H: Fn(&A) -> Z,
{
    let (first, second, third) = derivations;
    move |input| combine(first(input), second(input), third(input))
}

/// Applies an ordered sequence of derivations to the same input, collects
/// the results in that order and reduces them.
///
/// With no derivations, `reduce` receives an empty `Vec`.
///
/// # Examples
///
/// ```
/// use pointfree::adapter::converge_list;
///
/// let fields: Vec<fn(&(i32, i32)) -> i32> = vec![
///     |point| point.0,
///     |point| point.1,
///     |point| point.0 * point.1,
/// ];
/// let total = converge_list(|parts: Vec<i32>| parts.into_iter().sum::<i32>(), fields);
///
/// assert_eq!(total(&(2, 5)), 17);
/// ```
pub fn converge_list<A, X, R, D, F, I>(reduce: D, derivations: I) -> impl Fn(&A) -> R
where
    A: ?Sized,
    D: Fn(Vec<X>) -> R,
    F: Fn(&A) -> X,
    I: IntoIterator<Item = F>,
{
    let derivations: Vec<F> = derivations.into_iter().collect();
    move |input| {
        reduce(
            derivations
                .iter()
                .map(|derivation| derivation(input))
                .collect(),
        )
    }
}
