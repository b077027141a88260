//! Generic list abstraction with array and linked implementations, and the
//! heap, stack and queue built on top of it.

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod collections;
pub mod error;

pub use error::{Error, Result};

/// Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{array_list, linked_list};

    #[doc(no_inline)]
    pub use super::collections::{ArrayList, LinkedList, List, MinHeap, Queue, Stack};

    #[doc(no_inline)]
    pub use super::error::Error;
}
