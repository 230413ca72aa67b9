#![cfg(feature = "adapter")]
//! Property-based tests for function-shape adapter laws.
//!
//! ## Flip Laws
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//!
//! ## Curry Laws
//! - **Equivalence**: `curry!(f)(a)(b) == f((a, b))`
//! - **Uncurry After Curry**: `uncurry(curry!(f))(t) == f(t)`
//! - **Curry After Uncurry**: `curry!(uncurry(g))(a)(b) == g(a)(b)`
//!
//! ## Contravariant Laws
//! - **Identity**: `fn_contra_map(cloned, f)(&a) == f(a)`
//! - **Definition**: `fn_contra_map(p, f)(a) == f(p(a))`
//! - **Binary Definition**: `fn_contra_map2(p, f)(a, b) == f(p(a), p(b))`

use pointfree::adapter::{
    cloned, converge, converge_list, fn_contra_map, fn_contra_map2, flip, identity, uncurry,
    uncurry3,
};
use pointfree::{curry, curry3};
use proptest::prelude::*;

// =============================================================================
// Flip Laws
// =============================================================================

proptest! {
    /// flip(f)(a, b) == f(b, a)
    #[test]
    fn prop_flip_definition(first in any::<i32>(), second in any::<i32>()) {
        let subtract = |minuend: i32, subtrahend: i32| minuend.wrapping_sub(subtrahend);
        let flipped = flip(subtract);

        prop_assert_eq!(flipped(first, second), subtract(second, first));
    }

    /// flip(flip(f))(a, b) == f(a, b)
    #[test]
    fn prop_flip_double_flip_identity(first in any::<i32>(), second in any::<String>()) {
        let describe = |count: i32, text: String| format!("{count}:{text}");
        let restored = flip(flip(describe));

        prop_assert_eq!(restored(first, second.clone()), describe(first, second));
    }
}

// =============================================================================
// Curry Laws
// =============================================================================

proptest! {
    /// curry!(f)(a)(b) == f((a, b))
    #[test]
    fn prop_curry_equivalence(first in any::<i32>(), second in any::<i32>()) {
        let add = |(left, right): (i32, i32)| left.wrapping_add(right);

        prop_assert_eq!(curry!(add)(first)(second), add((first, second)));
    }

    /// uncurry(curry!(f))(t) == f(t)
    #[test]
    fn prop_uncurry_after_curry(first in any::<String>(), second in any::<u8>()) {
        let repeat = |(text, count): (String, u8)| text.repeat(usize::from(count % 4));
        let round_trip = uncurry(curry!(repeat));

        prop_assert_eq!(
            round_trip((first.clone(), second)),
            repeat((first, second))
        );
    }

    /// curry!(uncurry(g))(a)(b) == g(a)(b)
    #[test]
    fn prop_curry_after_uncurry(first in any::<i64>(), second in any::<i64>()) {
        let multiply = |left: i64| move |right: i64| left.wrapping_mul(right);
        let round_trip = curry!(uncurry(multiply));

        prop_assert_eq!(round_trip(first)(second), multiply(first)(second));
    }

    /// uncurry3(curry3!(f))(t) == f(t)
    #[test]
    fn prop_uncurry3_after_curry3(
        first in any::<i32>(),
        second in any::<i32>(),
        third in any::<i32>(),
    ) {
        let sum = |(a, b, c): (i32, i32, i32)| a.wrapping_add(b).wrapping_add(c);
        let round_trip = uncurry3(curry3!(sum));

        prop_assert_eq!(round_trip((first, second, third)), sum((first, second, third)));
    }
}

// =============================================================================
// Converge Laws
// =============================================================================

proptest! {
    /// converge(combine, (f, g))(x) == combine(f(x), g(x))
    #[test]
    fn prop_converge_definition(values in prop::collection::vec(any::<i16>(), 0..20)) {
        let sum = |items: &Vec<i16>| items.iter().map(|item| i64::from(*item)).sum::<i64>();
        let count = |items: &Vec<i16>| items.len();
        let pair = |total: i64, length: usize| (total, length);

        let converged = converge(pair, (sum, count));

        prop_assert_eq!(converged(&values), pair(sum(&values), count(&values)));
    }

    /// converge_list(reduce, fs)(x) == reduce(fs.map(|f| f(x)))
    #[test]
    fn prop_converge_list_definition(value in any::<i32>(), offsets in prop::collection::vec(any::<i32>(), 0..8)) {
        let derivations: Vec<Box<dyn Fn(&i32) -> i32>> = offsets
            .iter()
            .map(|offset| {
                let offset = *offset;
                Box::new(move |input: &i32| input.wrapping_add(offset)) as Box<dyn Fn(&i32) -> i32>
            })
            .collect();
        let expected: Vec<i32> = offsets.iter().map(|offset| value.wrapping_add(*offset)).collect();

        let converged = converge_list(identity, derivations);

        prop_assert_eq!(converged(&value), expected);
    }
}

// =============================================================================
// Contravariant Laws
// =============================================================================

proptest! {
    /// fn_contra_map(cloned, f)(&a) == f(a)
    #[test]
    fn prop_fn_contra_map_identity(value in any::<i32>()) {
        let double = |number: i32| number.wrapping_mul(2);
        let adapted = fn_contra_map(cloned, double);

        prop_assert_eq!(adapted(&value), double(value));
    }

    /// fn_contra_map(p, f)(a) == f(p(a))
    #[test]
    fn prop_fn_contra_map_definition(text in ".{0,24}") {
        let length = |text: &String| text.chars().count();
        let is_even = |count: usize| count.is_multiple_of(2);

        let adapted = fn_contra_map(length, is_even);

        prop_assert_eq!(adapted(&text), is_even(length(&text)));
    }

    /// fn_contra_map2(p, f)(a, b) == f(p(a), p(b))
    #[test]
    fn prop_fn_contra_map2_definition(first in any::<(i32, i32)>(), second in any::<(i32, i32)>()) {
        let project = |pair: &(i32, i32)| pair.0;
        let compare = |left: i32, right: i32| left.cmp(&right);

        let adapted = fn_contra_map2(project, compare);

        prop_assert_eq!(adapted(&first, &second), compare(project(&first), project(&second)));
    }
}
