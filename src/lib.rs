//! # pointfree
//!
//! Small, generic function combinators for building pipelines in a
//! point-free style.
//!
//! ## Overview
//!
//! Every combinator is a pure function that builds or transforms other
//! functions. Operands come first and the subject comes last, so partially
//! applied combinators slot directly into iterator adapters:
//!
//! - **Predicates**: `both`, `either`, `all_pass`, `any_pass`, `complement`
//! - **Relations**: `less_than`, `greater_than_equal_to`, `equals`, ...
//! - **Arithmetic**: `adding`, `subtracting`, `divided_by_int`, `negated`, ...
//! - **Flow Control**: `if_else`, `cond`, `when`, `unless`, `until`, ...
//! - **Adapters**: `flip`, `curry!`, `uncurry`, `converge`, `fn_contra_map`, ...
//! - **Membership**: `is_member_of`
//! - **List Scans**: `deduplicate_consecutive_items_by`, `partition_while`, ...
//!
//! ## Feature Flags
//!
//! - `predicate`: Predicate combinators
//! - `relation`: Relational combinators
//! - `arithmetic`: Arithmetic combinators
//! - `flow`: Flow control (enables `predicate`)
//! - `adapter`: Function-shape adapters
//! - `membership`: Key membership
//! - `list`: List scans
//! - `tracing`: Emit `tracing` events from `until_bounded`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pointfree::prelude::*;
//!
//! let scores = vec![42, 87, 13, 99, 64];
//!
//! let passing: Vec<i32> = scores
//!     .into_iter()
//!     .filter(both(greater_than_equal_to(50), less_than(100)))
//!     .map(when(greater_than(90), adding(1)))
//!     .collect();
//!
//! assert_eq!(passing, vec![87, 100, 64]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every combinator of the enabled modules.
///
/// # Usage
///
/// ```rust
/// use pointfree::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "relation")]
    pub use crate::relation::*;

    #[cfg(feature = "arithmetic")]
    pub use crate::arithmetic::*;

    #[cfg(feature = "flow")]
    pub use crate::flow::*;

    #[cfg(feature = "adapter")]
    pub use crate::adapter::*;

    #[cfg(feature = "membership")]
    pub use crate::membership::*;

    #[cfg(feature = "list")]
    pub use crate::list::*;
}

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "relation")]
pub mod relation;

#[cfg(feature = "arithmetic")]
pub mod arithmetic;

#[cfg(feature = "flow")]
pub mod flow;

#[cfg(feature = "adapter")]
pub mod adapter;

#[cfg(feature = "membership")]
pub mod membership;

#[cfg(feature = "list")]
pub mod list;
