//! Function-shape adapters.
//!
//! This module reshapes functions so they fit where they are needed: swap
//! arguments, switch between tuple and curried calling conventions, fan one
//! input out to several derivations, or pre-compose a projection.
//!
//! # Overview
//!
//! - [`identity`], [`cloned`], [`constant`]: the I and K combinators
//! - [`flip`]: swap the arguments of a binary function
//! - [`curry!`](crate::curry) / [`curry3!`](crate::curry3): tuple function to curried form
//! - [`uncurry`] / [`uncurry3`]: curried form to tuple function
//! - [`converge`], [`converge3`], [`converge_list`]: derive several values from
//!   one input and combine them
//! - [`fn_contra_map`], [`fn_contra_map2`], [`fn_contra_map3`]: run a function
//!   on a projection of its arguments
//!
//! # Examples
//!
//! ```
//! use pointfree::adapter::{converge, fn_contra_map2};
//!
//! struct Person {
//!     first_name: String,
//!     last_name: String,
//! }
//!
//! let full_name = converge(
//!     |first: String, last: String| first + &last,
//!     (
//!         |person: &Person| person.first_name.clone(),
//!         |person: &Person| format!(" {}", person.last_name),
//!     ),
//! );
//!
//! let ada = Person { first_name: "Ada".into(), last_name: "Lovelace".into() };
//! assert_eq!(full_name(&ada), "Ada Lovelace");
//!
//! let same_surname = fn_contra_map2(|person: &Person| person.last_name.clone(), |a: String, b: String| a == b);
//! let byron = Person { first_name: "Ada".into(), last_name: "Byron".into() };
//! assert!(!same_surname(&ada, &byron));
//! ```
//!
//! # Laws
//!
//! - **Double flip identity**: `flip(flip(f)) == f`
//! - **Flip definition**: `flip(f)(a, b) == f(b, a)`
//! - **Curry round trip**: `uncurry(curry!(f))(t) == f(t)`
//! - **Uncurry round trip**: `curry!(uncurry(g))(a)(b) == g(a)(b)`
//! - **Contravariant identity**: `fn_contra_map(cloned, f)(&a) == f(a)`

mod combinators;
mod contra_map;
mod converge;
mod curry_macro;
mod uncurry;

pub use combinators::{cloned, constant, flip, identity};
pub use contra_map::{fn_contra_map, fn_contra_map2, fn_contra_map3};
pub use converge::{converge, converge_list, converge3};
pub use uncurry::{uncurry, uncurry3};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::curry;
pub use crate::curry3;
