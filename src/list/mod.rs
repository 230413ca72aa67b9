//! Single-pass list scans.
//!
//! - [`deduplicate_consecutive_items_by`]: collapse runs of equal owned keys
//! - [`deduplicate_consecutive_items_by_ref`]: the same, for keys borrowed
//!   from the elements
//! - [`partition_while`]: split an owned sequence after its longest
//!   satisfying prefix
//! - [`split_while`]: the same split over a borrowed slice, without copying
//!
//! # Examples
//!
//! ```
//! use pointfree::list::{deduplicate_consecutive_items_by, partition_while};
//!
//! let readings = vec![1, 5, 10, 15, 10, 3];
//! let (settled, rest) = partition_while(|reading: &i32| *reading <= 10, readings);
//! assert_eq!(settled, vec![1, 5, 10]);
//! assert_eq!(rest, vec![15, 10, 3]);
//!
//! let log = vec!["boot", "boot", "ready", "boot"];
//! let collapsed = deduplicate_consecutive_items_by(|line: &&str| *line, log);
//! assert_eq!(collapsed, vec!["boot", "ready", "boot"]);
//! ```

/// Keeps only the first element of every run of consecutive elements whose
/// projected keys are equal.
///
/// Order is preserved, the scan is a single left-to-right pass, and equal
/// keys that are not adjacent are kept. Each element is projected exactly
/// once.
///
/// The projection returns an owned key, so it cannot return a reference
/// into its argument. Use [`deduplicate_consecutive_items_by_ref`] to
/// compare by a borrowed field without cloning it.
///
/// # Examples
///
/// ```
/// use pointfree::list::deduplicate_consecutive_items_by;
///
/// #[derive(Debug, PartialEq)]
/// struct Event { kind: &'static str, at: u32 }
///
/// let events = vec![
///     Event { kind: "click", at: 1 },
///     Event { kind: "click", at: 2 },
///     Event { kind: "scroll", at: 3 },
///     Event { kind: "click", at: 4 },
/// ];
///
/// let firsts = deduplicate_consecutive_items_by(|event: &Event| event.kind, events);
/// let times: Vec<u32> = firsts.iter().map(|event| event.at).collect();
/// assert_eq!(times, vec![1, 3, 4]);
/// ```
pub fn deduplicate_consecutive_items_by<A, K, P, I>(project: P, items: I) -> Vec<A>
where
    P: Fn(&A) -> K,
    K: PartialEq,
    I: IntoIterator<Item = A>,
{
    let items = items.into_iter();
    let mut deduplicated: Vec<A> = Vec::with_capacity(items.size_hint().0);
    let mut run_key: Option<K> = None;
    for item in items {
        let key = project(&item);
        if run_key.as_ref() != Some(&key) {
            deduplicated.push(item);
            run_key = Some(key);
        }
    }
    deduplicated
}

/// Like [`deduplicate_consecutive_items_by`], but the projection returns a
/// key borrowed from the element, so no key is ever cloned.
///
/// # Examples
///
/// ```
/// use pointfree::list::deduplicate_consecutive_items_by_ref;
///
/// struct Line { author: String, text: &'static str }
///
/// let lines = vec![
///     Line { author: String::from("ada"), text: "hi" },
///     Line { author: String::from("ada"), text: "again" },
///     Line { author: String::from("alan"), text: "hello" },
/// ];
///
/// let openers = deduplicate_consecutive_items_by_ref(|line: &Line| line.author.as_str(), lines);
/// let texts: Vec<&str> = openers.iter().map(|line| line.text).collect();
/// assert_eq!(texts, vec!["hi", "hello"]);
/// ```
pub fn deduplicate_consecutive_items_by_ref<A, K, P, I>(project: P, items: I) -> Vec<A>
where
    P: Fn(&A) -> &K,
    K: PartialEq + ?Sized,
    I: IntoIterator<Item = A>,
{
    let items = items.into_iter();
    let mut deduplicated: Vec<A> = Vec::with_capacity(items.size_hint().0);
    for item in items {
        let starts_new_run = deduplicated
            .last()
            .is_none_or(|previous| project(previous) != project(&item));
        if starts_new_run {
            deduplicated.push(item);
        }
    }
    deduplicated
}

/// Splits `items` into the longest leading run satisfying `predicate` and
/// everything from the first failing element onward.
///
/// The predicate is not invoked again after it first returns `false`.
///
/// # Examples
///
/// ```
/// use pointfree::list::partition_while;
///
/// let (prefix, suffix) = partition_while(|value: &i32| *value <= 10, vec![11, 20, 30]);
/// assert!(prefix.is_empty());
/// assert_eq!(suffix, vec![11, 20, 30]);
/// ```
pub fn partition_while<A, P, I>(predicate: P, items: I) -> (Vec<A>, Vec<A>)
where
    P: Fn(&A) -> bool,
    I: IntoIterator<Item = A>,
{
    let mut items = items.into_iter();
    let mut prefix = Vec::new();
    let mut suffix = Vec::new();

    for item in items.by_ref() {
        if predicate(&item) {
            prefix.push(item);
        } else {
            suffix.push(item);
            break;
        }
    }
    suffix.extend(items);

    (prefix, suffix)
}

/// Splits a slice into the longest leading run satisfying `predicate` and
/// the remainder, without copying.
///
/// # Examples
///
/// ```
/// use pointfree::list::split_while;
///
/// let line = b"   indented";
/// let (indent, text) = split_while(u8::is_ascii_whitespace, line);
/// assert_eq!(indent.len(), 3);
/// assert_eq!(text, b"indented");
/// ```
pub fn split_while<A, P>(predicate: P, items: &[A]) -> (&[A], &[A])
where
    P: Fn(&A) -> bool,
{
    let boundary = items
        .iter()
        .position(|item| !predicate(item))
        .unwrap_or(items.len());
    items.split_at(boundary)
}
