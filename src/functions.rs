use crate::compare::Compare;
use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

/// A boxed comparator, as stored by `SortBy`
pub type BoxedCompare<T> = Box<dyn Compare<T> + Send + Sync>;

/// Sorts a copy of `items`, leaving the input untouched. The sort is
/// stable, so items which compare equal keep their relative order.
///
/// # Arguments
///
/// `items`: The items to sort
///
/// `comparator`: Orders the items
pub fn sort_array<T, C>(items: &[T], comparator: &C) -> Vec<T>
where
    T: Clone,
    C: Compare<T> + ?Sized,
{
    items
        .iter()
        .cloned()
        .sorted_by(|left, right| comparator.compare(left, right))
        .collect()
}

/// Chains comparators by priority. See `SortBy`.
///
/// # Arguments
///
/// `comparators`: The comparators, highest priority first
pub fn sort_by<T>(comparators: impl IntoIterator<Item = BoxedCompare<T>>) -> SortBy<T> {
    comparators.into_iter().collect()
}

/// Returns true if `comparator` was produced by one of the sorter factories
///
/// # Arguments
///
/// `comparator`: The comparator to inspect, if any
pub fn is_sorter<T: ?Sized>(comparator: Option<&dyn Compare<T>>) -> bool {
    comparator.is_some_and(|comparator| comparator.sorter_options().is_some())
}

/// A comparator which consults a list of comparators in order, and
/// returns the first result that is not `Equal`. If every comparator
/// ties, so does the chain, and a stable sort keeps the input order.
pub struct SortBy<T> {
    comparators: Vec<BoxedCompare<T>>,
}

impl<T> SortBy<T> {
    /// Creates an empty chain, which considers every pair equal
    pub fn new() -> Self {
        Self {
            comparators: Vec::new(),
        }
    }

    /// Appends a comparator with a lower priority than every
    /// comparator already in the chain
    ///
    /// # Arguments
    ///
    /// `comparator`: The comparator to append
    pub fn then<C>(mut self, comparator: C) -> Self
    where
        C: Compare<T> + Send + Sync + 'static,
    {
        self.comparators.push(Box::new(comparator));
        self
    }

    /// Returns true if the chain has no comparators
    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }

    /// Returns the number of comparators in the chain
    pub fn len(&self) -> usize {
        self.comparators.len()
    }
}

impl<T> Compare<T> for SortBy<T> {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.comparators
            .iter()
            .map(|comparator| comparator.compare(left, right))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl<T> Default for SortBy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<BoxedCompare<T>> for SortBy<T> {
    fn from_iter<I: IntoIterator<Item = BoxedCompare<T>>>(iter: I) -> Self {
        Self {
            comparators: iter.into_iter().collect(),
        }
    }
}

impl<T> Debug for SortBy<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortBy")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Chains comparators by priority, highest first
///
/// ```
/// use sorter_rs::{sort_array, sort_by, Sorter};
///
/// let by_len = Sorter::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// let by_text = Sorter::new(|a: &&str, b: &&str| a.cmp(b));
///
/// let sorted = sort_array(&["bb", "a", "ab", "c"], &sort_by![by_len.descending(), by_text]);
/// assert_eq!(sorted, ["ab", "bb", "a", "c"]);
/// ```
#[macro_export]
macro_rules! sort_by {
    ($($comparator:expr),* $(,)?) => {
        $crate::SortBy::new()$(.then($comparator))*
    };
}
