use crate::compare::Compare;
use crate::options::{NullPlacement, OptionsPatch, SorterOptions};
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A base comparator which may be handed absent values
type BaseCompare<T> = dyn Fn(Option<&T>, Option<&T>) -> Ordering + Send + Sync;

/// An immutable comparator which wraps a base comparator and orders
/// by a set of `SorterOptions`.
///
/// A sorter compares both `T` and `Option<T>`. Absent values are
/// grouped at one end when null placement is enabled. Every method
/// that changes options returns a new sorter sharing the same base
/// comparator, leaving the receiver untouched.
pub struct Sorter<T> {
    base: Arc<BaseCompare<T>>,
    options: SorterOptions,
}

impl<T> Sorter<T> {
    /// Creates a sorter with the default options
    ///
    /// # Arguments
    ///
    /// `base`: Orders present values ascending
    pub fn new<F>(base: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::with_options(base, SorterOptions::default())
    }

    /// Creates a sorter with a set of initial options
    ///
    /// While null placement is disabled, absent values order before
    /// present ones in the ascending direction, as `Option` does.
    ///
    /// # Arguments
    ///
    /// `base`: Orders present values ascending
    ///
    /// `options`: The initial options
    pub fn with_options<F>(base: F, options: SorterOptions) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::nullable_with_options(
            move |left: Option<&T>, right: Option<&T>| match (left, right) {
                (Some(left), Some(right)) => base(left, right),
                (left, right) => left.is_some().cmp(&right.is_some()),
            },
            options,
        )
    }

    /// Creates a sorter with the default options over a base comparator
    /// which orders absent values itself
    ///
    /// # Arguments
    ///
    /// `base`: Orders values ascending, and receives absent values
    /// while null placement is disabled
    pub fn new_nullable<F>(base: F) -> Self
    where
        F: Fn(Option<&T>, Option<&T>) -> Ordering + Send + Sync + 'static,
    {
        Self::nullable_with_options(base, SorterOptions::default())
    }

    /// Creates a sorter with a set of initial options over a base
    /// comparator which orders absent values itself
    ///
    /// # Arguments
    ///
    /// `base`: Orders values ascending, and receives absent values
    /// while null placement is disabled
    ///
    /// `options`: The initial options
    pub fn nullable_with_options<F>(base: F, options: SorterOptions) -> Self
    where
        F: Fn(Option<&T>, Option<&T>) -> Ordering + Send + Sync + 'static,
    {
        Self {
            base: Arc::new(base),
            options,
        }
    }

    /// Returns the options the sorter orders by
    pub fn options(&self) -> SorterOptions {
        self.options
    }

    /// Returns a new sorter with `patch` merged into the options
    ///
    /// # Arguments
    ///
    /// `patch`: The options to override
    pub fn apply_options(&self, patch: impl Into<OptionsPatch>) -> Self {
        let options = self.options.merge(patch.into());
        tracing::trace!(
            ascending = options.ascending,
            nulls = %options.nulls,
            "derived sorter"
        );

        Self {
            base: Arc::clone(&self.base),
            options,
        }
    }

    /// Returns a new sorter ordering ascending if `ascending` is true,
    /// and descending otherwise
    pub fn ascending(&self, ascending: bool) -> Self {
        self.apply_options(OptionsPatch::new().ascending(ascending))
    }

    /// Returns a new sorter ordering descending
    pub fn descending(&self) -> Self {
        self.ascending(false)
    }

    /// Returns a new sorter placing absent values first if `nulls_first`
    /// is true, and last otherwise
    pub fn nulls_first(&self, nulls_first: bool) -> Self {
        let nulls = if nulls_first {
            NullPlacement::First
        } else {
            NullPlacement::Last
        };

        self.apply_options(OptionsPatch::new().nulls(nulls))
    }

    /// Returns a new sorter placing absent values last
    pub fn nulls_last(&self) -> Self {
        self.nulls_first(false)
    }

    /// Orders two possibly absent values. The null rule is consulted
    /// first, then the base rule.
    fn order(&self, left: Option<&T>, right: Option<&T>) -> Ordering {
        self.order_nulls(left, right)
            .then_with(|| self.order_base(left, right))
    }

    fn order_nulls(&self, left: Option<&T>, right: Option<&T>) -> Ordering {
        let absent_first = match self.options.nulls {
            NullPlacement::Disabled => return Ordering::Equal,
            NullPlacement::First => Ordering::Less,
            NullPlacement::Last => Ordering::Greater,
        };

        match (left.is_none(), right.is_none()) {
            (true, false) => absent_first,
            (false, true) => absent_first.reverse(),
            _ => Ordering::Equal,
        }
    }

    fn order_base(&self, left: Option<&T>, right: Option<&T>) -> Ordering {
        let ordering = (self.base)(left, right);

        if self.options.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }
}

impl<T> Compare<T> for Sorter<T> {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.order(Some(left), Some(right))
    }

    fn sorter_options(&self) -> Option<SorterOptions> {
        Some(self.options)
    }
}

impl<T> Compare<Option<T>> for Sorter<T> {
    fn compare(&self, left: &Option<T>, right: &Option<T>) -> Ordering {
        self.order(left.as_ref(), right.as_ref())
    }

    fn sorter_options(&self) -> Option<SorterOptions> {
        Some(self.options)
    }
}

impl<T> Clone for Sorter<T> {
    fn clone(&self) -> Self {
        Self {
            base: Arc::clone(&self.base),
            options: self.options,
        }
    }
}

impl<T> Debug for Sorter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sorter")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::Sorter;
    use crate::compare::{as_fn, Compare};
    use crate::functions::sort_array;
    use crate::options::{NullPlacement, OptionsPatch, SorterOptions};
    use crate::util::shuffled;
    use std::cmp::Ordering;

    fn numbers() -> Sorter<i32> {
        Sorter::new(|a: &i32, b: &i32| a.cmp(b))
    }

    #[test]
    fn plain_comparator() {
        assert_eq!(sort_array(&[3, 1, 2], &numbers()), vec![1, 2, 3]);

        let mut v = vec![3, 1, 2];
        v.sort_by(as_fn::<i32, _>(&numbers()));
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn ascending() {
        let sorter = numbers();

        assert_eq!(sort_array(&[3, 1, 2], &sorter.ascending(true)), vec![1, 2, 3]);
        assert_eq!(sort_array(&[3, 1, 2], &sorter.ascending(false)), vec![3, 2, 1]);
    }

    #[test]
    fn descending() {
        assert_eq!(sort_array(&[3, 1, 2], &numbers().descending()), vec![3, 2, 1]);
    }

    #[test]
    fn chained() {
        let sorter = numbers();

        assert_eq!(
            sort_array(&[3, 1, 2], &sorter.descending().ascending(true)),
            vec![1, 2, 3]
        );
        assert_eq!(
            sort_array(&[3, 1, 2], &sorter.ascending(true).descending()),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn direction_matches_base() {
        let base = |a: &i32, b: &i32| (a % 7).cmp(&(b % 7));
        let sorter = Sorter::new(base);
        let ascending = sorter.ascending(true);
        let descending = sorter.descending();
        let flipped = sorter.descending().ascending(true);

        for a in -10..10 {
            for b in -10..10 {
                assert_eq!(ascending.compare(&a, &b), base(&a, &b));
                assert_eq!(descending.compare(&a, &b), base(&a, &b).reverse());
                assert_eq!(flipped.compare(&a, &b), ascending.compare(&a, &b));
            }
        }
    }

    #[test]
    fn derivation_leaves_original() {
        let sorter = numbers();
        let descending = sorter.descending();
        let nulls_last = descending.nulls_last();

        assert_eq!(sorter.options(), SorterOptions::default());
        assert!(!descending.options().ascending);
        assert_eq!(descending.options().nulls, NullPlacement::Disabled);
        assert_eq!(
            nulls_last.options(),
            SorterOptions {
                ascending: false,
                nulls: NullPlacement::Last
            }
        );

        assert_eq!(sort_array(&[3, 1, 2], &sorter), vec![1, 2, 3]);
        assert_eq!(sort_array(&[3, 1, 2], &descending), vec![3, 2, 1]);
    }

    #[test]
    fn apply_options_merges() {
        let sorter = Sorter::with_options(
            |a: &i32, b: &i32| a.cmp(b),
            SorterOptions {
                ascending: false,
                nulls: NullPlacement::First,
            },
        );

        let patch = OptionsPatch::new().nulls(NullPlacement::Last);
        assert_eq!(
            sorter.apply_options(patch).options(),
            sorter.options().merge(patch)
        );
        assert_eq!(
            sorter.apply_options(SorterOptions::default()).options(),
            SorterOptions::default()
        );
        assert_eq!(sorter.apply_options(OptionsPatch::new()).options(), sorter.options());
    }

    #[test]
    fn nulls_first() {
        let values = [Some(3), None, Some(1), None, Some(2), None];

        for seed in 0..16 {
            let input = shuffled(&values, seed);

            assert_eq!(
                sort_array(&input, &numbers().nulls_first(true)),
                vec![None, None, None, Some(1), Some(2), Some(3)]
            );
            assert_eq!(
                sort_array(&input, &numbers().descending().nulls_first(true)),
                vec![None, None, None, Some(3), Some(2), Some(1)]
            );
        }
    }

    #[test]
    fn nulls_last() {
        let values = [Some(3), None, Some(1), None, Some(2), None];

        for seed in 0..16 {
            let input = shuffled(&values, seed);

            assert_eq!(
                sort_array(&input, &numbers().nulls_last()),
                vec![Some(1), Some(2), Some(3), None, None, None]
            );
            assert_eq!(
                sort_array(&input, &numbers().nulls_last().descending()),
                vec![Some(3), Some(2), Some(1), None, None, None]
            );
            assert_eq!(
                sort_array(&input, &numbers().nulls_first(false)),
                vec![Some(1), Some(2), Some(3), None, None, None]
            );
        }
    }

    #[test]
    fn null_rule_keeps_present_order() {
        // ties on the base key must keep input order among present values
        let by_tens = Sorter::new(|a: &i32, b: &i32| (a / 10).cmp(&(b / 10)));
        let input = [Some(21), None, Some(12), Some(25), None, Some(11), Some(18)];

        let present = |sorted: Vec<Option<i32>>| sorted.into_iter().flatten().collect::<Vec<_>>();
        let expected = sort_array(&input.iter().flatten().copied().collect::<Vec<_>>(), &by_tens);
        assert_eq!(expected, vec![12, 11, 18, 21, 25]);

        let first = sort_array(&input, &by_tens.nulls_first(true));
        assert_eq!(&first[..2], &[None::<i32>, None]);
        assert_eq!(present(first), expected);

        let last = sort_array(&input, &by_tens.nulls_last());
        assert_eq!(&last[5..], &[None::<i32>, None]);
        assert_eq!(present(last), expected);
    }

    #[test]
    fn nulls_disabled() {
        let input = [Some(2), None, Some(1)];

        assert_eq!(sort_array(&input, &numbers()), vec![None, Some(1), Some(2)]);
        assert_eq!(
            sort_array(&input, &numbers().descending()),
            vec![Some(2), Some(1), None]
        );
    }

    #[test]
    fn nullable_base() {
        // absent values sort as the largest value in the base order
        let sorter = Sorter::new_nullable(|a: Option<&i32>, b: Option<&i32>| match (a, b) {
            (Some(a), Some(b)) => a.cmp(b),
            (a, b) => b.is_some().cmp(&a.is_some()),
        });
        let input = [None, Some(2), Some(1)];

        assert_eq!(sort_array(&input, &sorter), vec![Some(1), Some(2), None]);
        assert_eq!(
            sort_array(&input, &sorter.descending()),
            vec![None, Some(2), Some(1)]
        );
        assert_eq!(
            sort_array(&input, &sorter.nulls_first(true)),
            vec![None, Some(1), Some(2)]
        );
        assert_eq!(sorter.compare(&None, &None), Ordering::Equal);
    }

    #[test]
    fn marked() {
        let sorter = numbers().nulls_first(true);

        assert_eq!(
            Compare::<i32>::sorter_options(&sorter),
            Some(SorterOptions {
                ascending: true,
                nulls: NullPlacement::First
            })
        );
        assert_eq!(
            Compare::<Option<i32>>::sorter_options(&sorter),
            Some(sorter.options())
        );
    }

    #[test]
    fn shared_between_threads() {
        let sorter = numbers().descending();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let sorter = &sorter;
                    s.spawn(move || sort_array(&[i, i + 2, i + 1], sorter))
                })
                .collect();

            for (i, handle) in handles.into_iter().enumerate() {
                let i = i as i32;
                assert_eq!(handle.join().unwrap(), vec![i + 2, i + 1, i]);
            }
        });
    }

    #[test]
    fn debug() {
        let sorter = numbers();
        assert!(format!("{sorter:?}").starts_with("Sorter { options: SorterOptions"));
    }
}
