use crate::options::SorterOptions;
use duplicate::duplicate_item;
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

/// A comparator trait which orders two values
pub trait Compare<T: ?Sized> {
    /// Compare two values, returning `Less` if `left`
    /// orders before `right`, `Greater` if it orders
    /// after and `Equal` if they tie
    ///
    /// # Arguments
    ///
    /// `left`: The first value
    ///
    /// `right`: The second value
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Returns the options of a comparator produced by one of the
    /// sorter factories, or `None` for any other comparator
    fn sorter_options(&self) -> Option<SorterOptions> {
        None
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Compare<T> for F {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Adapts a comparator into a closure so it can be handed to
/// `slice::sort_by` and other routines taking one
///
/// # Arguments
///
/// `comparator`: The comparator to adapt
pub fn as_fn<'a, T, C>(comparator: &'a C) -> impl Fn(&T, &T) -> Ordering + 'a
where
    T: ?Sized + 'a,
    C: Compare<T> + ?Sized + 'a,
{
    move |left, right| comparator.compare(left, right)
}

/// A struct that implements `Compare` for `T`, and
/// orders `left` before `right` if `left` < `right`
pub struct Less<T: ?Sized> {
    _marker: PhantomData<fn(&T)>,
}

/// A struct that implements `Compare` for `T`, and
/// orders `left` before `right` if `left` > `right`
pub struct Greater<T: ?Sized> {
    _marker: PhantomData<fn(&T)>,
}

#[duplicate_item(
    Name        first   second;
    [Less]      [left]  [right];
    [Greater]   [right] [left];
)]
impl<T: Ord + ?Sized> Compare<T> for Name<T> {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        first.cmp(second)
    }
}

#[duplicate_item(Name; [Less]; [Greater])]
impl<T: ?Sized> Name<T> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

#[duplicate_item(Name; [Less]; [Greater])]
impl<T: ?Sized> Default for Name<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[duplicate_item(Name; [Less]; [Greater])]
impl<T: ?Sized> Clone for Name<T> {
    fn clone(&self) -> Self {
        *self
    }
}

#[duplicate_item(Name; [Less]; [Greater])]
impl<T: ?Sized> Copy for Name<T> {}

#[duplicate_item(Name; [Less]; [Greater])]
impl<T: ?Sized> Debug for Name<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(stringify!(Name))
    }
}
