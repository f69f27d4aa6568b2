//! Task collection module
//!
//! The heart of the tool: the persisted task record, the file-backed
//! store with its mutation operations, and the listing logic applied at
//! display time.

pub mod model;
pub mod store;
pub mod view;

pub use model::{Priority, Task};
pub use store::Store;
pub use view::{format_line, select, ListOptions, SortMode};
