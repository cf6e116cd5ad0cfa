use crate::compare::Compare;
use crate::options::{OptionsPatch, SorterOptions};
use crate::sorter::Sorter;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

/// A ready-made date sorter over raw timestamps, ordering newest first
pub static DATE_SORTER: Lazy<DateSorter<DateTime<Utc>>> = Lazy::new(date_sorter::<DateTime<Utc>>);

/// Creates a date sorter over raw dates, ordering newest first
pub fn date_sorter<D: Ord + Clone>() -> DateSorter<D> {
    DateSorter::new(|date: &D| date.clone())
}

/// A sorter over date-bearing items. Its base order is newest first,
/// so `newest_first` and `oldest_first` map onto the sorter's
/// ascending and descending directions.
///
/// An absent item counts as the earliest possible date, and the
/// extractor is never invoked for it.
pub struct DateSorter<T> {
    sorter: Sorter<T>,
}

impl<T> DateSorter<T> {
    /// Creates a date sorter with the default options
    ///
    /// # Arguments
    ///
    /// `extract`: Reads the date from an item
    pub fn new<D, F>(extract: F) -> Self
    where
        D: Ord,
        F: Fn(&T) -> D + Send + Sync + 'static,
    {
        Self::with_options(extract, SorterOptions::default())
    }

    /// Creates a date sorter with a set of initial options
    ///
    /// # Arguments
    ///
    /// `extract`: Reads the date from an item
    ///
    /// `options`: The initial options
    pub fn with_options<D, F>(extract: F, options: SorterOptions) -> Self
    where
        D: Ord,
        F: Fn(&T) -> D + Send + Sync + 'static,
    {
        let sorter = Sorter::nullable_with_options(
            move |left: Option<&T>, right: Option<&T>| {
                // `None` orders before any date
                let left = left.map(&extract);
                let right = right.map(&extract);
                right.cmp(&left)
            },
            options,
        );

        Self { sorter }
    }

    /// Returns the options the sorter orders by
    pub fn options(&self) -> SorterOptions {
        self.sorter.options()
    }

    /// Returns the underlying sorter
    pub fn as_sorter(&self) -> &Sorter<T> {
        &self.sorter
    }

    /// Returns a new date sorter with `patch` merged into the options
    ///
    /// # Arguments
    ///
    /// `patch`: The options to override
    pub fn apply_options(&self, patch: impl Into<OptionsPatch>) -> Self {
        Self {
            sorter: self.sorter.apply_options(patch),
        }
    }

    /// Returns a new date sorter ordering the newest items first if
    /// `newest_first` is true, and the oldest first otherwise
    pub fn newest_first(&self, newest_first: bool) -> Self {
        self.apply_options(OptionsPatch::new().ascending(newest_first))
    }

    /// Returns a new date sorter ordering the oldest items first
    pub fn oldest_first(&self) -> Self {
        self.newest_first(false)
    }

    /// Returns a new date sorter placing absent items first if
    /// `nulls_first` is true, and last otherwise
    pub fn nulls_first(&self, nulls_first: bool) -> Self {
        Self {
            sorter: self.sorter.nulls_first(nulls_first),
        }
    }

    /// Returns a new date sorter placing absent items last
    pub fn nulls_last(&self) -> Self {
        self.nulls_first(false)
    }
}

impl<T> Compare<T> for DateSorter<T> {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        Compare::<T>::compare(&self.sorter, left, right)
    }

    fn sorter_options(&self) -> Option<SorterOptions> {
        Some(self.options())
    }
}

impl<T> Compare<Option<T>> for DateSorter<T> {
    fn compare(&self, left: &Option<T>, right: &Option<T>) -> Ordering {
        Compare::<Option<T>>::compare(&self.sorter, left, right)
    }

    fn sorter_options(&self) -> Option<SorterOptions> {
        Some(self.options())
    }
}

impl<T> From<DateSorter<T>> for Sorter<T> {
    fn from(date_sorter: DateSorter<T>) -> Self {
        date_sorter.sorter
    }
}

impl<T> Clone for DateSorter<T> {
    fn clone(&self) -> Self {
        Self {
            sorter: self.sorter.clone(),
        }
    }
}

impl<T> Debug for DateSorter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateSorter")
            .field("options", &self.options())
            .finish_non_exhaustive()
    }
}
