//! In-memory index of ordered keys, backed by a classic red-black tree.
//!
//! ```
//! use rbt_index::{Order, Rbt};
//!
//! let mut rbt: Rbt<i64> = Rbt::new("example");
//! for key in [5, 3, 8, 1, 4, 7, 9].iter() {
//!     rbt.insert(*key);
//! }
//! assert_eq!(rbt.remove(&5), Some(5));
//! assert_eq!(rbt.root().map(|node| *node.key()), Some(4));
//!
//! let keys: Vec<i64> = rbt.traverse(Order::Inorder).cloned().collect();
//! assert_eq!(keys, vec![1, 3, 4, 7, 8, 9]);
//! assert!(rbt.validate().is_ok());
//! ```

mod depth;
mod error;
mod rbt;

pub use crate::depth::Depth;
pub use crate::error::RbtError;
pub use crate::rbt::{Node, Order, Rbt, Side, Stats, Traverse};
