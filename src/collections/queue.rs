//! A first-in, first-out queue over a [`LinkedList`].

use crate::collections::linked_list::LinkedList;
use crate::collections::list::List;
use crate::error::{Error, Result};

/// A first-in, first-out queue.
///
/// New elements enter at the head of the backing [`LinkedList`] and leave from
/// its tail, so both ends are reached in *O*(1) time.
///
/// # Examples
///
/// ```
/// use dslib::prelude::*;
///
/// let mut queue = Queue::new();
/// queue.enqueue(5);
/// queue.enqueue(10);
/// queue.enqueue(3);
///
/// assert_eq!(queue.peek(), Ok(&5));
/// assert_eq!(queue.dequeue(), Ok(5));
/// assert_eq!(queue.dequeue(), Ok(10));
/// assert_eq!(queue.dequeue(), Ok(3));
/// assert_eq!(queue.dequeue(), Err(Error::Empty));
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    /// Constructs a new, empty `Queue<T>`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Adds an element to the back of the queue.
    #[inline]
    pub fn enqueue(&mut self, elem: T) {
        self.list.add_first(elem);
    }

    /// Returns the element at the front of the queue without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        self.list.get_last()
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        self.list.remove_last()
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the queue contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Removes every element from the queue.
    #[inline]
    pub fn clear(&mut self) {
        self.list.clear();
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
