//! A list backed by a contiguous, growable buffer.
//!
//! Elements live in a single heap allocation in list order. When an insertion
//! needs more room than the buffer has, the buffer is reallocated to the
//! larger of the required capacity and twice the current one.

use std::alloc::{self, Layout};
use std::fmt;

use core::cmp;
use core::hash::{Hash, Hasher};
use core::ptr::{self, NonNull};
use core::{marker, mem, slice};

use crate::collections::list::List;
use crate::error::{self, Error, Result};

/// Creates an `ArrayList` containing the arguments.
///
/// # Examples
///
/// - Create an `ArrayList` containing a given list of elements:
///
/// ```
/// use dslib::prelude::*;
///
/// let list = array_list![1, 2, 3];
/// assert_eq!(list, [1, 2, 3]);
/// ```
///
/// - Create an `ArrayList` from a given element and size:
///
/// ```
/// use dslib::prelude::*;
///
/// let list = array_list![String::from("hello"); 3];
/// assert_eq!(list, ["hello", "hello", "hello"]);
/// ```
#[macro_export]
macro_rules! array_list {
    () => {
        $crate::collections::ArrayList::new()
    };
    // `$(,)?` allows for a trailing comma.
    ($($elem:expr),* $(,)?) => {{
        let mut list = $crate::collections::ArrayList::with_capacity(::core::cmp::max(
            $crate::collections::ArrayList::<()>::DEFAULT_CAPACITY,
            $crate::count![@COUNT; $($elem),*],
        ));
        $($crate::collections::List::add(&mut list, $elem);)*
        list
    }};
    ($elem:expr; $n:expr) => {{
        // Ensure the expression is only evaluated once.
        let count = $n;

        let mut list = $crate::collections::ArrayList::with_capacity(::core::cmp::max(
            $crate::collections::ArrayList::<()>::DEFAULT_CAPACITY,
            count,
        ));
        list.extend(::core::iter::repeat($elem).take(count));
        list
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! count {
    (@COUNT; $($elem:expr),*) => {
        // For every `$elem`, create an array, substituting the `$elem` with
        // unit, take a reference to it, and invoke the len implementation for
        // a slice of unit values.
        <[()]>::len(&[$($crate::count![@SUBST; $elem]),*])
    };
    (@SUBST; $elem:expr) => { () };
}

/// A list backed by a contiguous, growable buffer.
///
/// Indexed reads and writes take *O*(1) time. Appending takes amortized
/// *O*(1) time, while inserting or removing anywhere else shifts the elements
/// behind the position.
///
/// # Examples
///
/// ```
/// use dslib::prelude::*;
///
/// let mut list = ArrayList::new();
/// list.add(10);
/// list.add(30);
/// list.insert(1, 20)?;
///
/// assert_eq!(list.get(1), Ok(&20));
/// assert_eq!(list.remove_first(), Ok(10));
/// assert_eq!(list, [20, 30]);
/// # Ok::<(), dslib::Error>(())
/// ```
pub struct ArrayList<T> {
    /// Internal buffer.
    buf: RawBuffer<T>,
    /// Number of initialized elements.
    len: usize,
}

impl<T> ArrayList<T> {
    /// Number of slots allocated by [`ArrayList::new`].
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Constructs a new, empty `ArrayList<T>` with room for
    /// [`DEFAULT_CAPACITY`] elements.
    ///
    /// [`DEFAULT_CAPACITY`]: ArrayList::DEFAULT_CAPACITY
    ///
    /// # Examples
    ///
    /// ```
    /// use dslib::prelude::*;
    ///
    /// let list: ArrayList<i32> = ArrayList::new();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), ArrayList::<i32>::DEFAULT_CAPACITY);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Constructs a new, empty `ArrayList<T>` with exactly `capacity` slots.
    ///
    /// If `capacity` is zero, the list will not allocate until the first
    /// insertion. For a zero-sized `T` there is never an allocation and the
    /// capacity is always `usize::MAX`.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use dslib::prelude::*;
    ///
    /// let mut list = ArrayList::with_capacity(2);
    /// assert_eq!(list.capacity(), 2);
    ///
    /// list.add(1);
    /// list.add(2);
    /// list.add(3);
    ///
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.capacity(), 4);
    ///
    /// let units = ArrayList::<()>::with_capacity(10);
    /// assert_eq!(units.capacity(), usize::MAX);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuffer::with_capacity(capacity),
            len: 0,
        }
    }

    /// Returns the total number of elements the list can hold without
    /// reallocating.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.cap
    }

    /// Reserves capacity for at least `additional` more elements. Does nothing
    /// if capacity is already sufficient.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds [`isize::MAX`] bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use dslib::prelude::*;
    ///
    /// let mut list = array_list![1];
    /// list.reserve(20);
    /// assert!(list.capacity() >= 21);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(self.len, additional);
    }

    #[inline]
    const fn as_ptr(&self) -> *const T {
        self.buf.ptr.as_ptr()
    }

    #[inline]
    const fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr.as_ptr()
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        // Slots `[0, len)` are initialized.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Writes `elem` at `index` after shifting `[index, len)` one slot to the
    /// right. The caller has checked `index <= len`.
    fn insert_at(&mut self, index: usize, elem: T) {
        debug_assert!(index <= self.len);

        if self.len == self.capacity() {
            self.buf.grow_one();
        }

        unsafe {
            // Effectively a `memmove`.
            //
            // https://en.cppreference.com/w/c/string/byte/memmove
            ptr::copy(
                self.as_ptr().add(index),
                self.as_mut_ptr().add(index + 1),
                self.len - index,
            );

            ptr::write(self.as_mut_ptr().add(index), elem);
        }

        self.len += 1;
    }

    /// Reads the element at `index` out and shifts `[index + 1, len)` one slot
    /// to the left. The caller has checked `index < len`.
    fn remove_at(&mut self, index: usize) -> T {
        debug_assert!(index < self.len);

        self.len -= 1;

        unsafe {
            let elem = ptr::read(self.as_ptr().add(index));

            ptr::copy(
                self.as_ptr().add(index + 1),
                self.as_mut_ptr().add(index),
                self.len - index,
            );

            // The trailing slot `len` is now logically uninitialized.
            elem
        }
    }
}

impl<T> List<T> for ArrayList<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    #[inline]
    fn get(&self, index: usize) -> Result<&T> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    fn set(&mut self, index: usize, elem: T) -> Result<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, elem))
    }

    /// # Time Complexity
    ///
    /// Takes *O*(*len*) time since every element is shifted one slot right.
    fn add_first(&mut self, elem: T) {
        self.insert_at(0, elem);
    }

    /// # Time Complexity
    ///
    /// Takes amortized *O*(1) time. If the length would exceed the capacity,
    /// *O*(*capacity*) time is taken to move the elements to a larger
    /// allocation, which is offset by the *capacity* *O*(1) insertions it
    /// allows.
    fn add_last(&mut self, elem: T) {
        self.insert_at(self.len, elem);
    }

    /// # Time Complexity
    ///
    /// Takes *O*(*len*) time. All items after the insertion index must be
    /// shifted to the right. In the worst case, all elements are shifted when
    /// the insertion index is 0.
    fn insert(&mut self, index: usize, elem: T) -> Result<()> {
        // Can be equal to `len` since inserting after all elements is valid.
        error::check_position(index, self.len)?;
        self.insert_at(index, elem);
        Ok(())
    }

    /// # Time Complexity
    ///
    /// Takes *O*(*len*) time. All items after the removal index must be
    /// shifted to the left.
    fn remove(&mut self, index: usize) -> Result<T> {
        error::check_index(index, self.len)?;
        Ok(self.remove_at(index))
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        error::check_index(a, self.len)?;
        error::check_index(b, self.len)?;
        self.as_mut_slice().swap(a, b);
        Ok(())
    }

    fn index_of(&self, elem: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|e| e == elem)
    }

    fn last_index_of(&self, elem: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().rposition(|e| e == elem)
    }

    fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.as_slice().into()
    }

    /// Drops every element. The allocated capacity is kept.
    #[inline]
    fn clear(&mut self) {
        let elems: *mut [T] = self.as_mut_slice();

        unsafe {
            // Exception Safety:
            //
            // `self.len` is set before calling `drop_in_place` so if an
            // element's Drop impl panics, the list's Drop impl will not
            // double-free.
            self.len = 0;
            ptr::drop_in_place(elems);
        }
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        // Not needed when `T: !Drop`.
        if mem::needs_drop::<T>() {
            unsafe {
                ptr::drop_in_place(self.as_mut_slice());
            }
        }

        // `RawBuffer` handles deallocation...
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(cmp::max(self.len, Self::DEFAULT_CAPACITY));
        list.extend(self.as_slice().iter().cloned());
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut iter = iter.into_iter();

        while let Some(elem) = iter.next() {
            let len = self.len;

            if len == self.capacity() {
                let (lower, _) = iter.size_hint();
                self.reserve(lower.saturating_add(1));
            }

            unsafe {
                ptr::write(self.as_mut_ptr().add(len), elem);
                self.len += 1;
            }
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

// From `https://doc.rust-lang.org/src/alloc/vec/partial_eq.rs.html`
macro_rules! impl_slice_eq {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool { self.as_slice()[..] == other[..] }
        }
    }
}

impl_slice_eq! { [] ArrayList<T>, &[U] }
impl_slice_eq! { [const N: usize] ArrayList<T>, [U; N] }
impl_slice_eq! { [const N: usize] ArrayList<T>, &[U; N] }

impl<T: PartialEq<U>, U> PartialEq<ArrayList<U>> for ArrayList<T> {
    #[inline]
    fn eq(&self, other: &ArrayList<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);

        for elem in self.as_slice() {
            elem.hash(state);
        }
    }
}

/// Low-level utility for more ergonomically allocating, reallocating, and
/// deallocating a buffer of memory on the heap.
#[derive(Debug)]
struct RawBuffer<T> {
    /// Pointer to the allocation.
    ///
    /// [`NonNull`] is covariant over `T` and is null-pointer optimized.
    ptr: NonNull<T>,
    /// Size of the current allocation.
    cap: usize,
    /// In order to tell the drop checker that we do own values of type T, and
    /// therefore may drop some T's when we drop.
    _marker: marker::PhantomData<T>,
}

impl<T> RawBuffer<T> {
    #[inline]
    const fn new() -> Self {
        // For ZSTs, capacity is set to `usize::MAX` so the invariant
        // `len <= capacity` is always held, even memory is never allocated.
        let cap = if mem::size_of::<T>() == 0 { !0 } else { 0 };

        Self {
            ptr: NonNull::dangling(),
            cap,
            _marker: marker::PhantomData,
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        let layout = match Layout::array::<T>(capacity) {
            Ok(layout) => layout,
            Err(_) => panic!("capacity overflow"),
        };

        if layout.size() == 0 {
            return Self::new();
        }

        let result = unsafe { alloc::alloc(layout) };

        let ptr = match NonNull::new(result as *mut T) {
            Some(ptr) => ptr,
            // Abort the program if allocation fails.
            None => alloc::handle_alloc_error(layout),
        };

        Self {
            ptr,
            cap: capacity,
            _marker: marker::PhantomData,
        }
    }

    #[inline]
    fn reserve(&mut self, len: usize, additional: usize) {
        if len.saturating_add(additional) > self.cap && mem::size_of::<T>() != 0 {
            self.grow_amortized(len, additional);
        }
    }

    #[inline]
    fn grow_one(&mut self) {
        self.grow_amortized(self.cap, 1);
    }

    /// Grows the buffer to `max(len + additional, cap * 2)` slots, keeping the
    /// initialized prefix in place.
    ///
    /// # Panics
    ///
    /// Panics if the requested capacity exceeds [`isize::MAX`] bytes.
    ///
    /// # Aborts
    ///
    /// Aborts on OOM.
    fn grow_amortized(&mut self, len: usize, additional: usize) {
        let Some(required_cap) = len.checked_add(additional) else {
            panic!("capacity overflow");
        };

        // The doubling cannot overflow because `cap <= isize::MAX` and the
        // type of `cap` is `usize`.
        let new_cap = cmp::max(self.cap * 2, required_cap);

        let new_layout = match Layout::array::<T>(new_cap) {
            Ok(layout) => layout,
            Err(_) => panic!("capacity overflow"),
        };

        log::trace!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            "growing array list buffer"
        );

        let new_ptr = if self.cap == 0 {
            unsafe { alloc::alloc(new_layout) }
        } else {
            // The current layout was valid when it was allocated.
            let old_layout = unsafe {
                Layout::from_size_align_unchecked(mem::size_of::<T>() * self.cap, mem::align_of::<T>())
            };
            let old_ptr = self.ptr.as_ptr() as *mut u8;
            unsafe { alloc::realloc(old_ptr, old_layout, new_layout.size()) }
        };

        self.ptr = match NonNull::new(new_ptr as *mut T) {
            Some(ptr) => ptr,
            // Abort the program if allocation fails.
            None => alloc::handle_alloc_error(new_layout),
        };

        self.cap = new_cap;
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        let elem_size = mem::size_of::<T>();

        if self.cap != 0 && elem_size != 0 {
            unsafe {
                // Since `cap` > 0, there is memory allocated with this layout.
                let layout =
                    Layout::from_size_align_unchecked(elem_size * self.cap, mem::align_of::<T>());
                alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout);
            }
        }
    }
}

unsafe impl<T: Send> Send for RawBuffer<T> {}
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

#[allow(dead_code)]
fn assert_properties() {
    fn is_send<T: Send>() {}
    fn is_sync<T: Sync>() {}

    is_send::<ArrayList<i32>>();
    is_sync::<ArrayList<i32>>();

    fn array_list_covariant<'a, T>(x: ArrayList<&'static T>) -> ArrayList<&'a T> {
        x
    }
}
