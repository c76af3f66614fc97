use std::{error, fmt};

/// RbtError enumerates over all possible errors that this package
/// shall return.
#[derive(Debug, PartialEq)]
pub enum RbtError<K> {
    /// Fatal case, root node is red.
    RedRoot,
    /// Fatal case, a red node has a red child.
    ConsecutiveReds,
    /// Fatal case, paths under a node carry different number of black
    /// nodes. The String component of this variant can be used for
    /// debugging.
    UnbalancedBlacks(String),
    /// Fatal case, index entries are not in sort-order. Carries the
    /// offending pair in visiting order.
    SortError(K, K),
}

impl<K> fmt::Display for RbtError<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RbtError::RedRoot => write!(f, "root node is red"),
            RbtError::ConsecutiveReds => write!(f, "consecutive red nodes"),
            RbtError::UnbalancedBlacks(msg) => write!(f, "unbalanced blacks, {}", msg),
            RbtError::SortError(a, b) => write!(f, "keys out of order {:?} > {:?}", a, b),
        }
    }
}

impl<K> error::Error for RbtError<K> where K: fmt::Debug {}
