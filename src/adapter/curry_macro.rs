//! The curry macros for converting tuple-argument functions to curried form.
//!
//! [`curry!`](crate::curry) and [`curry3!`](crate::curry3) turn a function
//! taking a 2- or 3-element tuple into nested single-argument closures.
//! [`uncurry`](super::uncurry) and [`uncurry3`](super::uncurry3) go the other
//! way.
//!
//! # Design Decisions
//!
//! The closures returned by the intermediate steps are anonymous types that
//! cannot be named in a function signature, so currying is provided as
//! macros that build the closures at the call site.
//!
//! The function and the already supplied arguments are shared through
//! `std::rc::Rc`, so that:
//!
//! - A partial application can be called any number of times
//! - Arguments that don't implement `Copy` work (they are cloned per call)
//!
//! The returned closures implement `Fn`, so they compose with the rest of
//! the crate. Because of `Rc` they are neither `Send` nor `Sync`.

/// Converts a function over a 2-tuple into curried form.
///
/// `curry!(f)(a)(b) == f((a, b))`
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - The first tuple element must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use pointfree::curry;
///
/// fn area((width, height): (u32, u32)) -> u32 { width * height }
///
/// let curried_area = curry!(area);
/// let ten_wide = curried_area(10);
///
/// assert_eq!(ten_wide(3), 30);
/// assert_eq!(ten_wide(5), 50);
/// ```
///
/// ## With non-`Copy` arguments
///
/// ```
/// use pointfree::curry;
///
/// let greet = |(greeting, name): (String, &str)| format!("{greeting}, {name}!");
/// let hello = curry!(greet)(String::from("Hello"));
///
/// assert_eq!(hello("Ada"), "Hello, Ada!");
/// assert_eq!(hello("Grace"), "Hello, Grace!");
/// ```
#[macro_export]
macro_rules! curry {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                function((
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                    second,
                ))
            }
        }
    }};
}

/// Converts a function over a 3-tuple into curried form.
///
/// `curry3!(f)(a)(b)(c) == f((a, b, c))`
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - The first two tuple elements must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use pointfree::curry3;
///
/// fn volume((width, height, depth): (f64, f64, f64)) -> f64 {
///     width * height * depth
/// }
///
/// let curried_volume = curry3!(volume);
/// let base = curried_volume(2.0)(3.0);
///
/// assert!((base(4.0) - 24.0).abs() < f64::EPSILON);
/// assert!((base(0.5) - 3.0).abs() < f64::EPSILON);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::rc::Rc::clone(&first);
                let second = ::std::rc::Rc::new(second);
                move |third| {
                    function((
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&second)),
                        third,
                    ))
                }
            }
        }
    }};
}
