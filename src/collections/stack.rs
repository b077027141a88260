//! A last-in, first-out stack over an [`ArrayList`].

use crate::collections::array_list::ArrayList;
use crate::collections::list::List;
use crate::error::{Error, Result};

/// A last-in, first-out stack.
///
/// The top of the stack is the last element of the backing [`ArrayList`], so
/// pushing and popping never shift elements.
///
/// # Examples
///
/// ```
/// use dslib::prelude::*;
///
/// let mut stack = Stack::new();
/// stack.push(5);
/// stack.push(10);
/// stack.push(3);
/// stack.push(8);
///
/// assert_eq!(stack.peek(), Ok(&8));
/// assert_eq!(stack.pop(), Ok(8));
/// assert_eq!(stack.pop(), Ok(3));
/// assert_eq!(stack.pop(), Ok(10));
/// assert_eq!(stack.pop(), Ok(5));
/// assert_eq!(stack.pop(), Err(Error::Empty));
/// ```
#[derive(Debug, Clone)]
pub struct Stack<T> {
    list: ArrayList<T>,
}

impl<T> Stack<T> {
    /// Constructs a new, empty `Stack<T>`.
    #[inline]
    pub fn new() -> Self {
        Self {
            list: ArrayList::new(),
        }
    }

    /// Pushes an element onto the top of the stack.
    #[inline]
    pub fn push(&mut self, elem: T) {
        self.list.add(elem);
    }

    /// Returns the element on top of the stack without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the stack is empty.
    pub fn peek(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        self.list.get_last()
    }

    /// Removes and returns the element on top of the stack.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        self.list.remove_last()
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the stack contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Removes every element from the stack.
    #[inline]
    pub fn clear(&mut self) {
        self.list.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
