//! A binary min-heap stored breadth-first in a [`List`].
//!
//! The element at index `i` has its children at `2i + 1` and `2i + 2`, and
//! its parent at `(i - 1) / 2`. Every parent compares less than or equal to
//! its children, so the minimum always sits at index 0.

use core::marker;

use crate::collections::array_list::ArrayList;
use crate::collections::list::List;
use crate::error::{Error, Result};

/// A binary min-heap over any [`List`], backed by an [`ArrayList`] unless
/// told otherwise.
///
/// Elements are ordered by their [`Ord`] implementation. Equal elements are
/// never swapped, but no stability guarantee is made about the order in
/// which equal elements are extracted.
///
/// # Examples
///
/// ```
/// use dslib::prelude::*;
///
/// let mut heap = MinHeap::new();
/// heap.insert(5);
/// heap.insert(10);
/// heap.insert(3);
/// heap.insert(8);
///
/// assert_eq!(heap.peek(), Ok(&3));
/// assert_eq!(heap.extract_min(), Ok(3));
/// assert_eq!(heap.extract_min(), Ok(5));
/// assert_eq!(heap.extract_min(), Ok(8));
/// assert_eq!(heap.extract_min(), Ok(10));
/// assert_eq!(heap.extract_min(), Err(Error::Empty));
/// ```
///
/// Any list works as storage:
///
/// ```
/// use dslib::prelude::*;
///
/// let mut heap: MinHeap<&str, LinkedList<&str>> = MinHeap::default();
/// heap.insert("pear");
/// heap.insert("apple");
///
/// assert_eq!(heap.extract_min(), Ok("apple"));
/// ```
#[derive(Debug, Clone)]
pub struct MinHeap<T, L = ArrayList<T>> {
    /// Heap-ordered elements, laid out breadth-first.
    elements: L,
    _marker: marker::PhantomData<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Constructs a new, empty `MinHeap<T>` backed by an [`ArrayList`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Ord, L: List<T>> MinHeap<T, L> {
    /// Adds an element, then moves it towards the root until its parent is no
    /// greater than it.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*log n*) swaps.
    pub fn insert(&mut self, elem: T) {
        self.elements.add(elem);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns the smallest element.
    ///
    /// The last element takes the root's place and is moved towards the leaves
    /// until neither child is smaller than it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the heap is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*log n*) swaps.
    pub fn extract_min(&mut self) -> Result<T> {
        if self.elements.is_empty() {
            return Err(Error::Empty);
        }

        let last = self.elements.len() - 1;
        self.elements.swap(0, last)?;
        let min = self.elements.remove_last()?;

        if !self.elements.is_empty() {
            self.sift_down(0);
        }

        Ok(min)
    }

    /// Returns the smallest element without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.elements.get_first()
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the heap contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes every element from the heap.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns the backing list, in breadth-first heap order.
    #[inline]
    pub fn as_list(&self) -> &L {
        &self.elements
    }

    /// Returns `true` if the element at `a` is strictly less than the element
    /// at `b`. Missing positions never compare less.
    fn less(&self, a: usize, b: usize) -> bool {
        match (self.elements.get(a), self.elements.get(b)) {
            (Ok(x), Ok(y)) => x < y,
            _ => false,
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;

            if !self.less(index, parent) {
                break;
            }

            // Both positions were just compared, so they exist.
            if self.elements.swap(index, parent).is_err() {
                break;
            }
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if self.less(left, smallest) {
                smallest = left;
            }

            if self.less(right, smallest) {
                smallest = right;
            }

            if smallest == index {
                break;
            }

            if self.elements.swap(index, smallest).is_err() {
                break;
            }
            index = smallest;
        }
    }
}

impl<T, L: Default> Default for MinHeap<T, L> {
    fn default() -> Self {
        Self {
            elements: L::default(),
            _marker: marker::PhantomData,
        }
    }
}
