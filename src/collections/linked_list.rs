//! A doubly-linked list with owned nodes.
//!
//! Every node owns its element and, through its `next` link, the rest of the
//! chain. The `prev` link is a plain back-reference used for traversal and is
//! never used to free a node.
//!
//! Using [Learn Rust With Entirely Too Many Linked Lists]
//!
//! [Learn Rust With Entirely Too Many Linked Lists]: https://rust-unofficial.github.io/too-many-lists/

use std::fmt;

use core::hash::{Hash, Hasher};
use core::marker;
use core::mem;
use core::ptr::NonNull;

use crate::collections::list::List;
use crate::error::{self, Error, Result};

/// Creates a `LinkedList` containing the arguments.
///
/// # Examples
///
/// ```
/// use dslib::prelude::*;
///
/// let mut list = linked_list![1 => 2 => 3];
/// assert_eq!(list.len(), 3);
/// assert_eq!(*list.to_array(), [1, 2, 3]);
///
/// assert_eq!(list.remove_last(), Ok(3));
/// assert_eq!(list.remove_last(), Ok(2));
/// assert_eq!(list.remove_last(), Ok(1));
/// ```
///
/// ```
/// use dslib::prelude::*;
///
/// let list = linked_list![1; 5];
/// assert_eq!(list.len(), 5);
/// assert_eq!(*list.to_array(), [1, 1, 1, 1, 1]);
/// ```
#[macro_export]
macro_rules! linked_list {
    () => {
        $crate::collections::LinkedList::new()
    };
    ($($elem:expr)=>*) => {{
        let mut list = $crate::collections::LinkedList::new();
        $($crate::collections::List::add_last(&mut list, $elem);)*
        list
    }};
    ($elem:expr; $n:expr) => {{
        // Ensure the expression is only evaluated once.
        let count = $n;

        let mut list = $crate::collections::LinkedList::new();
        list.extend(::core::iter::repeat($elem).take(count));
        list
    }};
}

/// A doubly-linked list with owned nodes.
///
/// Adding or removing at either end takes *O*(1) time. Indexed access walks
/// from whichever end is closer, so it takes *O*(*min(index, len - index)*)
/// time.
///
/// # Examples
///
/// ```
/// use dslib::prelude::*;
///
/// let mut list = LinkedList::new();
/// list.add_first(2);
/// list.add_first(1);
/// list.add_last(4);
/// list.insert(2, 3)?;
///
/// assert_eq!(*list.to_array(), [1, 2, 3, 4]);
/// assert_eq!(list.remove(1), Ok(2));
/// assert_eq!(list.get(1), Ok(&3));
/// # Ok::<(), dslib::Error>(())
/// ```
pub struct LinkedList<T> {
    /// Pointer to the head of the list.
    head: Option<NonNull<Node<T>>>,
    /// Pointer to the tail of the list.
    tail: Option<NonNull<Node<T>>>,
    /// Number of linked nodes.
    len: usize,
    /// In order to tell the drop checker that we do own values of type T, and
    /// therefore may drop some T's when we drop.
    _marker: marker::PhantomData<T>,
}

#[derive(Debug)]
struct Node<T> {
    /// Owning pointer to the next node in sequence.
    next: Option<NonNull<Node<T>>>,
    /// Back-reference to the previous node in sequence.
    prev: Option<NonNull<Node<T>>>,
    /// The node's data.
    elem: T,
}

/// Borrowing walk over the elements, front to back or back to front.
struct Elems<'a, T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: marker::PhantomData<&'a T>,
}

impl<T> LinkedList<T> {
    /// Constructs a new, empty `LinkedList<T>`.
    ///
    /// The list will not allocate until elements are added to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dslib::prelude::*;
    ///
    /// let list: LinkedList<i32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: marker::PhantomData,
        }
    }

    fn new_node(elem: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            prev: None,
            elem,
        })))
    }

    fn link_front(&mut self, elem: T) {
        let new_node = Self::new_node(elem);

        unsafe {
            if let Some(head) = self.head {
                // There is at least a valid `head` node.
                (*head.as_ptr()).prev = Some(new_node);
                (*new_node.as_ptr()).next = Some(head);
            } else {
                self.tail = Some(new_node);
            }
        }

        self.head = Some(new_node);
        self.len += 1;
    }

    fn link_back(&mut self, elem: T) {
        let new_node = Self::new_node(elem);

        unsafe {
            if let Some(tail) = self.tail {
                // There is at least a valid `tail` node.
                (*tail.as_ptr()).next = Some(new_node);
                (*new_node.as_ptr()).prev = Some(tail);
            } else {
                self.head = Some(new_node);
            }
        }

        self.tail = Some(new_node);
        self.len += 1;
    }

    /// Splices a new node between `succ` and its predecessor.
    ///
    /// `succ` must be a node of this list.
    unsafe fn link_before(&mut self, succ: NonNull<Node<T>>, elem: T) {
        match (*succ.as_ptr()).prev {
            Some(pred) => {
                let new_node = Self::new_node(elem);

                (*pred.as_ptr()).next = Some(new_node);
                (*new_node.as_ptr()).prev = Some(pred);

                (*succ.as_ptr()).prev = Some(new_node);
                (*new_node.as_ptr()).next = Some(succ);

                self.len += 1;
            }
            // No previous node, `succ` is the head.
            None => self.link_front(elem),
        }
    }

    /// Locates the node at `index`, walking from whichever end is closer.
    ///
    /// The caller has checked `index < len`, so the walk never runs off the
    /// chain.
    fn node_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        debug_assert!(index < self.len);

        unsafe {
            if index < self.len / 2 {
                let mut curr = self.head;
                for _ in 0..index {
                    curr = curr.and_then(|node| (*node.as_ptr()).next);
                }
                curr
            } else {
                let mut curr = self.tail;
                for _ in index..self.len - 1 {
                    curr = curr.and_then(|node| (*node.as_ptr()).prev);
                }
                curr
            }
        }
    }

    fn checked_node(&self, index: usize) -> Result<NonNull<Node<T>>> {
        error::check_index(index, self.len)?;
        self.node_at(index).ok_or(Error::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Detaches `node` from the chain and returns its element.
    ///
    /// The neighbours are linked to each other (or become the new head/tail),
    /// the node's own links are cleared, and the node is freed.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        // Node is boxed before being removed so the destructor for T can be
        // invoked when returning.
        let mut boxed_node = Box::from_raw(node.as_ptr());

        let prev = boxed_node.prev.take();
        let next = boxed_node.next.take();

        match prev {
            Some(prev) => (*prev.as_ptr()).next = next,
            None => self.head = next,
        }

        match next {
            Some(next) => (*next.as_ptr()).prev = prev,
            None => self.tail = prev,
        }

        self.len -= 1;

        boxed_node.elem
        // `boxed_node` handles it's deallocation...
    }

    #[inline]
    fn elems(&self) -> Elems<'_, T> {
        Elems {
            head: self.head,
            tail: self.tail,
            len: self.len,
            _marker: marker::PhantomData,
        }
    }
}

impl<T> List<T> for LinkedList<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    /// # Time Complexity
    ///
    /// Takes *O*(*min(index, len - index)*) time.
    fn get(&self, index: usize) -> Result<&T> {
        let node = self.checked_node(index)?;
        unsafe { Ok(&(*node.as_ptr()).elem) }
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let node = self.checked_node(index)?;
        unsafe { Ok(&mut (*node.as_ptr()).elem) }
    }

    fn set(&mut self, index: usize, elem: T) -> Result<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, elem))
    }

    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    #[inline]
    fn get_first(&self) -> Result<&T> {
        unsafe { self.head.map(|head| &(*head.as_ptr()).elem) }.ok_or(Error::Empty)
    }

    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    #[inline]
    fn get_last(&self) -> Result<&T> {
        unsafe { self.tail.map(|tail| &(*tail.as_ptr()).elem) }.ok_or(Error::Empty)
    }

    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    fn add_first(&mut self, elem: T) {
        self.link_front(elem);
    }

    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    fn add_last(&mut self, elem: T) {
        self.link_back(elem);
    }

    /// # Time Complexity
    ///
    /// Takes *O*(1) time at either end, otherwise the time needed to walk to
    /// `index`.
    fn insert(&mut self, index: usize, elem: T) -> Result<()> {
        // Can be equal to `len` since inserting after all elements is valid.
        error::check_position(index, self.len)?;

        if index == self.len {
            self.link_back(elem);
        } else if index == 0 {
            self.link_front(elem);
        } else {
            let succ = self.checked_node(index)?;
            unsafe { self.link_before(succ, elem) };
        }

        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        let node = self.checked_node(index)?;
        unsafe { Ok(self.unlink(node)) }
    }

    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    fn remove_first(&mut self) -> Result<T> {
        match self.head {
            Some(head) => unsafe { Ok(self.unlink(head)) },
            None => Err(Error::Empty),
        }
    }

    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    fn remove_last(&mut self) -> Result<T> {
        match self.tail {
            Some(tail) => unsafe { Ok(self.unlink(tail)) },
            None => Err(Error::Empty),
        }
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let node_a = self.checked_node(a)?;
        let node_b = self.checked_node(b)?;

        if a != b {
            // Distinct indices are distinct nodes, so the borrows are disjoint.
            unsafe { mem::swap(&mut (*node_a.as_ptr()).elem, &mut (*node_b.as_ptr()).elem) };
        }

        Ok(())
    }

    fn index_of(&self, elem: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.elems().position(|e| e == elem)
    }

    fn last_index_of(&self, elem: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.elems()
            .rev()
            .position(|e| e == elem)
            .map(|from_back| self.len - 1 - from_back)
    }

    fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.elems().cloned().collect()
    }

    /// Removes every node, breaking both links of each one on the way from
    /// head to tail.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*len*) time.
    fn clear(&mut self) {
        let mut released = 0usize;

        // Detach the chain first so a panicking destructor cannot leave the
        // list pointing at freed nodes.
        let mut curr = self.head.take();
        self.tail = None;
        self.len = 0;

        while let Some(node) = curr {
            unsafe {
                let mut boxed_node = Box::from_raw(node.as_ptr());
                curr = boxed_node.next.take();
                boxed_node.prev = None;

                if let Some(next) = curr {
                    (*next.as_ptr()).prev = None;
                }
            }

            released += 1;
        }

        if released > 0 {
            log::trace!(released, "cleared linked list");
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.elems().cloned().collect()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.link_back(elem);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elems()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.elems().eq(other.elems())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for elem in self.elems() {
            elem.hash(state);
        }
    }
}

impl<'a, T> Iterator for Elems<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len > 0 {
            self.head.map(|head| unsafe {
                self.len -= 1;
                self.head = (*head.as_ptr()).next;
                &(*head.as_ptr()).elem
            })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Elems<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len > 0 {
            self.tail.map(|tail| unsafe {
                self.len -= 1;
                self.tail = (*tail.as_ptr()).prev;
                &(*tail.as_ptr()).elem
            })
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for Elems<'_, T> {}

unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

#[allow(dead_code)]
fn assert_properties() {
    fn is_send<T: Send>() {}
    fn is_sync<T: Sync>() {}

    is_send::<LinkedList<i32>>();
    is_sync::<LinkedList<i32>>();

    fn linked_list_covariant<'a, T>(x: LinkedList<&'static T>) -> LinkedList<&'a T> {
        x
    }
}
