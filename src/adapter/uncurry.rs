//! Converting curried functions back to tuple-argument form.

/// Converts a curried 2-argument function into a function over a 2-tuple.
///
/// `uncurry(g)((a, b)) == g(a)(b)`; this is the inverse of
/// [`curry!`](crate::curry).
///
/// # Examples
///
/// ```
/// use pointfree::adapter::uncurry;
///
/// let add = |first: i32| move |second: i32| first + second;
/// let add_pair = uncurry(add);
///
/// let sums: Vec<i32> = vec![(1, 2), (10, 20)].into_iter().map(add_pair).collect();
/// assert_eq!(sums, vec![3, 30]);
/// ```
#[inline]
pub fn uncurry<A, B, C, F, G>(function: F) -> impl Fn((A, B)) -> C
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> C,
{
    move |(first, second)| function(first)(second)
}

/// Converts a curried 3-argument function into a function over a 3-tuple.
///
/// `uncurry3(g)((a, b, c)) == g(a)(b)(c)`; this is the inverse of
/// [`curry3!`](crate::curry3).
///
/// # Examples
///
/// ```
/// use pointfree::adapter::uncurry3;
///
/// let clamp = |low: i32| move |high: i32| move |value: i32| value.clamp(low, high);
/// let clamp_triple = uncurry3(clamp);
///
/// assert_eq!(clamp_triple((0, 10, 42)), 10);
/// assert_eq!(clamp_triple((0, 10, -3)), 0);
/// ```
#[inline]
pub fn uncurry3<A, B, C, D, F, G, H>(function: F) -> impl Fn((A, B, C)) -> D
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> H,
    H: FnOnce(C) -> D,
{
    move |(first, second, third)| function(first)(second)(third)
}
