//! The list abstraction shared by [`ArrayList`] and [`LinkedList`].
//!
//! Higher level structures ([`MinHeap`], [`Stack`], [`Queue`]) only ever talk
//! to their storage through this trait, so either implementation can back
//! them.
//!
//! [`ArrayList`]: crate::collections::ArrayList
//! [`LinkedList`]: crate::collections::LinkedList
//! [`MinHeap`]: crate::collections::MinHeap
//! [`Stack`]: crate::collections::Stack
//! [`Queue`]: crate::collections::Queue

use crate::error::{Error, Result};

/// An ordered, indexable sequence of elements.
///
/// Indices are zero-based. Every fallible operation validates its arguments
/// before touching the list, so a returned [`Error`] never leaves the list
/// partially modified.
///
/// The trait is object safe:
///
/// ```
/// use dslib::prelude::*;
///
/// fn fill(list: &mut dyn List<i32>) {
///     list.add(1);
///     list.add_first(0);
///     list.add_last(2);
/// }
///
/// let mut array = ArrayList::<i32>::new();
/// let mut linked = LinkedList::<i32>::new();
///
/// fill(&mut array);
/// fill(&mut linked);
///
/// assert_eq!(array.to_array(), linked.to_array());
/// assert_eq!(*array.to_array(), [0, 1, 2]);
/// ```
pub trait List<T> {
    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index >= len`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index >= len`.
    fn get_mut(&mut self, index: usize) -> Result<&mut T>;

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index >= len`.
    fn set(&mut self, index: usize, elem: T) -> Result<T>;

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list is empty.
    fn get_first(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        self.get(0)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list is empty.
    fn get_last(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        self.get(self.len() - 1)
    }

    /// Appends an element to the back of the list.
    #[inline]
    fn add(&mut self, elem: T) {
        self.add_last(elem);
    }

    /// Prepends an element to the front of the list.
    fn add_first(&mut self, elem: T);

    /// Appends an element to the back of the list.
    fn add_last(&mut self, elem: T);

    /// Inserts an element before position `index`, shifting every element at
    /// or after `index` one position towards the back.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index > len`.
    fn insert(&mut self, index: usize, elem: T) -> Result<()>;

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index >= len`.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list is empty.
    fn remove_first(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        self.remove(0)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list is empty.
    fn remove_last(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        self.remove(self.len() - 1)
    }

    /// Exchanges the elements at positions `a` and `b`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if either index is `>= len`.
    fn swap(&mut self, a: usize, b: usize) -> Result<()>;

    /// Returns the index of the first element equal to `elem`, or [`None`] if
    /// there is none.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*len*) time. Elements are checked one by one from the front.
    fn index_of(&self, elem: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Returns the index of the last element equal to `elem`, or [`None`] if
    /// there is none.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*len*) time. Elements are checked one by one from the back.
    fn last_index_of(&self, elem: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Returns `true` if the list contains an element equal to `elem`.
    #[inline]
    fn exists(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(elem).is_some()
    }

    /// Returns a snapshot of every element in list order.
    ///
    /// The snapshot owns clones of the elements and is unaffected by later
    /// changes to the list.
    fn to_array(&self) -> Box<[T]>
    where
        T: Clone;

    /// Removes every element from the list.
    fn clear(&mut self);

    /// Sorting is not supported by any list.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`].
    fn sort(&mut self) -> Result<()> {
        log::debug!(len = self.len(), "rejected unsupported sort");
        Err(Error::Unsupported { operation: "sort" })
    }
}
