//! Immutable, chainable comparators.
//!
//! A [`Sorter`] wraps a base comparator and derives new sorters which
//! flip direction or group absent values at either end, without
//! touching the sorter they were derived from. [`sort_by!`] chains
//! comparators by priority and [`sort_array`] sorts a copy of a slice.

pub mod compare;
pub mod date_sorter;
pub mod error;
mod functions;
pub mod options;
pub mod sorter;
#[cfg(test)]
mod util;

pub use compare::{as_fn, Compare, Greater, Less};
pub use date_sorter::{date_sorter, DateSorter, DATE_SORTER};
pub use error::{Error, Result};
pub use functions::{is_sorter, sort_array, sort_by, BoxedCompare, SortBy};
pub use options::{NullPlacement, OptionsPatch, SorterOptions};
pub use sorter::Sorter;
