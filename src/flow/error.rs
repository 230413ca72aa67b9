//! Error types for the flow-control combinators.

/// Represents the failure of a bounded fixed-point loop.
///
/// Returned by [`until_bounded`](super::until_bounded) when the predicate is
/// still unsatisfied after the configured number of applications.
///
/// # Examples
///
/// ```rust
/// use pointfree::flow::UntilError;
///
/// let error = UntilError::IterationLimitExceeded { limit: 3, last_value: 7 };
/// assert_eq!(
///     format!("{}", error),
///     "until: predicate still unsatisfied after 3 applications"
/// );
/// assert_eq!(error.into_last_value(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UntilError<A> {
    /// The transform was applied `limit` times without satisfying the predicate.
    IterationLimitExceeded {
        /// The configured maximum number of applications.
        limit: usize,
        /// The value held when the loop gave up. With a limit of zero this is
        /// the untouched input.
        last_value: A,
    },
}

impl<A> UntilError<A> {
    /// Returns the configured iteration limit.
    #[must_use]
    pub const fn limit(&self) -> usize {
        match self {
            Self::IterationLimitExceeded { limit, .. } => *limit,
        }
    }

    /// Consumes the error, returning the value reached when the loop gave up.
    pub fn into_last_value(self) -> A {
        match self {
            Self::IterationLimitExceeded { last_value, .. } => last_value,
        }
    }
}

impl<A> std::fmt::Display for UntilError<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IterationLimitExceeded { limit, .. } => {
                let noun = if *limit == 1 {
                    "application"
                } else {
                    "applications"
                };
                write!(
                    formatter,
                    "until: predicate still unsatisfied after {limit} {noun}"
                )
            }
        }
    }
}

impl<A: std::fmt::Debug> std::error::Error for UntilError<A> {}

static_assertions::assert_impl_all!(UntilError<i32>: Send, Sync, std::error::Error);
static_assertions::assert_impl_all!(UntilError<String>: Send, Sync, std::error::Error);
