//! Collection Types.

pub mod array_list;
pub mod linked_list;
pub mod list;
pub mod min_heap;
pub mod queue;
pub mod stack;

pub use array_list::ArrayList;
pub use linked_list::LinkedList;
pub use list::List;
pub use min_heap::MinHeap;
pub use queue::Queue;
pub use stack::Stack;

/// Collections Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{array_list, linked_list};

    #[doc(no_inline)]
    pub use super::{ArrayList, LinkedList, List, MinHeap, Queue, Stack};
}
