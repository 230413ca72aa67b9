//! Contravariant adaptation: reuse a function written for a "child" type on
//! a "parent" type by projecting first.
//!
//! ```text
//! fn_contra_map(project, f)(a)        = f(project(a))
//! fn_contra_map2(project, f)(a, b)    = f(project(a), project(b))
//! fn_contra_map3(project, f)(a, b, c) = f(project(a), project(b), project(c))
//! ```
//!
//! The projection borrows each argument and is applied to every argument
//! independently, left to right.
//!
//! The projection's result type is fixed, so it must be an owned value (or
//! a reference that outlives the arguments, such as `&'static str`). A
//! projection returning a borrow of its argument, like
//! `|person: &Person| person.name.as_str()`, is rejected; clone the field or
//! use [`cloned`](super::cloned) instead.

/// Adapts a unary function to take the parent type of its argument.
///
/// `project` must return an owned value; see the module documentation.
///
/// # Examples
///
/// ```
/// use pointfree::adapter::fn_contra_map;
/// use pointfree::relation::greater_than;
///
/// struct Order { total_cents: u64 }
///
/// let is_large = greater_than(10_000);
/// let is_large_order = fn_contra_map(|order: &Order| order.total_cents, |cents| is_large(&cents));
///
/// assert!(is_large_order(&Order { total_cents: 25_000 }));
/// assert!(!is_large_order(&Order { total_cents: 500 }));
/// ```
#[inline]
pub fn fn_contra_map<A, B, R, P, F>(project: P, function: F) -> impl Fn(&A) -> R
where
    A: ?Sized,
    P: Fn(&A) -> B,
    F: Fn(B) -> R,
{
    move |value| function(project(value))
}

/// Adapts a binary function to take the parent type of both arguments.
///
/// `project` must return an owned value; see the module documentation.
///
/// # Examples
///
/// ```
/// use pointfree::adapter::fn_contra_map2;
///
/// let by_length = fn_contra_map2(|word: &str| word.len(), |a: usize, b: usize| a.cmp(&b));
///
/// let mut words = vec!["banana", "fig", "apple"];
/// words.sort_by(|a, b| by_length(*a, *b));
/// assert_eq!(words, vec!["fig", "apple", "banana"]);
/// ```
#[inline]
pub fn fn_contra_map2<A, B, R, P, F>(project: P, function: F) -> impl Fn(&A, &A) -> R
where
    A: ?Sized,
    P: Fn(&A) -> B,
    F: Fn(B, B) -> R,
{
    move |first, second| function(project(first), project(second))
}

/// Adapts a ternary function to take the parent type of all three arguments.
///
/// `project` must return an owned value; see the module documentation.
///
/// # Examples
///
/// ```
/// use pointfree::adapter::fn_contra_map3;
///
/// struct Reading { celsius: f64 }
///
/// let median = |a: f64, b: f64, c: f64| a.max(b).min(a.min(b).max(c));
/// let median_reading = fn_contra_map3(|reading: &Reading| reading.celsius, median);
///
/// let result = median_reading(
///     &Reading { celsius: 21.5 },
///     &Reading { celsius: 19.0 },
///     &Reading { celsius: 20.0 },
/// );
/// assert_eq!(result, 20.0);
/// ```
#[inline]
pub fn fn_contra_map3<A, B, R, P, F>(project: P, function: F) -> impl Fn(&A, &A, &A) -> R
where
    A: ?Sized,
    P: Fn(&A) -> B,
    F: Fn(B, B, B) -> R,
{
    move |first, second, third| function(project(first), project(second), project(third))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::cloned;
    use std::cell::Cell;

    #[test]
    fn test_fn_contra_map_with_cloned_projection() {
        let double = |value: i32| value * 2;
        let adapted = fn_contra_map(cloned, double);
        assert_eq!(adapted(&21), 42);
    }

    #[test]
    fn test_fn_contra_map2_projects_each_argument_once() {
        let projections = Cell::new(0);
        let same_first_letter = fn_contra_map2(
            |word: &str| {
                projections.set(projections.get() + 1);
                word.chars().next()
            },
            |a: Option<char>, b: Option<char>| a == b,
        );

        assert!(same_first_letter("apple", "avocado"));
        assert_eq!(projections.get(), 2);
    }
}
