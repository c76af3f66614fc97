use std::{
    cmp::{self, Ordering},
    fmt,
    iter::FromIterator,
    mem,
    ops::{Deref, DerefMut},
};

use rand::Rng;

use crate::depth::Depth;
use crate::error::RbtError;

/// Rbt manage a single instance of in-memory index using classic
/// [red-black][rbt] tree.
///
/// Keys are ordered by a comparison function supplied at construction,
/// [`Rbt::new`] uses the key's [`Ord`] implementation. Duplicate keys are
/// retained as distinct entries, a new key is routed left of its equals.
///
/// [rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
#[derive(Clone)]
pub struct Rbt<K, C = fn(&K, &K) -> Ordering> {
    name: String,
    root: Option<Box<Node<K>>>,
    n_count: usize, // number of entries in the tree.
    cmp: C,
}

/// Different ways to construct a new Rbt instance.
impl<K> Rbt<K>
where
    K: Ord,
{
    /// Create an empty instance of Rbt, identified by `name`, ordering
    /// keys by their [`Ord`] implementation.
    pub fn new<S>(name: S) -> Rbt<K>
    where
        S: AsRef<str>,
    {
        Rbt::with_comparator(name, <K as Ord>::cmp as fn(&K, &K) -> Ordering)
    }

    /// Create a new instance of Rbt tree and load it with keys from
    /// `iter`. Keys need not be unique.
    pub fn load_from<S, I>(name: S, iter: I) -> Rbt<K>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = K>,
    {
        let mut rbt = Rbt::new(name);
        rbt.extend(iter);
        log::debug!("{}: loaded {} entries", rbt.name, rbt.n_count);
        rbt
    }
}

impl<K, C> Rbt<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Create an empty instance of Rbt, identified by `name`, ordering
    /// keys with `cmp`. `cmp` must be a total order over `K`.
    pub fn with_comparator<S>(name: S, cmp: C) -> Rbt<K, C>
    where
        S: AsRef<str>,
    {
        Rbt {
            name: name.as_ref().to_string(),
            root: Default::default(),
            n_count: Default::default(),
            cmp,
        }
    }
}

/// Maintenance API.
impl<K, C> Rbt<K, C> {
    /// Identify this instance. Applications can choose unique names while
    /// creating Rbt instances.
    #[inline]
    pub fn id(&self) -> String {
        self.name.clone()
    }

    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.root = None;
        self.n_count = 0;
    }

    /// Return quickly with basic statisics, only entries() and node_size()
    /// are valid with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.n_count, mem::size_of::<Node<K>>())
    }
}

type Delete<K> = (Option<Box<Node<K>>>, Option<K>, bool);

type Detach<K> = (Option<Box<Node<K>>>, K, bool);

/// Write operations on Rbt instance.
impl<K, C> Rbt<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Insert `key` into the index. Always succeeds, an existing equal key
    /// is kept and the new one is stored alongside it.
    pub fn insert(&mut self, key: K) {
        let mut root = Self::do_insert(self.root.take(), key, &self.cmp);
        root.set_black();
        self.root = Some(root);
        self.n_count += 1;
        debug_assert!(
            black_height(self.root()).is_some(),
            "insert(): red-black invariant broken, call the programmer"
        );
    }

    /// Remove one entry matching `key` and return the stored key. If key
    /// is not present, then remove is a no-op.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let (root, old_key, _) = Self::do_delete(self.root.take(), key, &self.cmp);
        self.root = root.map(|mut root| {
            root.set_black();
            root
        });
        if old_key.is_some() {
            self.n_count -= 1;
        }
        debug_assert!(
            black_height(self.root()).is_some(),
            "remove(): red-black invariant broken, call the programmer"
        );
        old_key
    }
}

/// Read operations on Rbt instance.
impl<K, C> Rbt<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Find a node holding `key`.
    pub fn find(&self, key: &K) -> Option<&Node<K>> {
        let mut node = self.root.as_ref().map(Deref::deref);
        while let Some(nref) = node {
            node = match (self.cmp)(key, &nref.key) {
                Ordering::Less => nref.left_deref(),
                Ordering::Greater => nref.right_deref(),
                Ordering::Equal => return Some(nref),
            };
        }
        None
    }

    /// Check whether `key` is present in this index.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }
}

impl<K, C> Rbt<K, C> {
    /// Return the root node, if any.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_ref().map(Deref::deref)
    }

    /// Return the smallest key.
    pub fn min(&self) -> Option<&K> {
        extreme(self.root(), Side::Left).map(|node| &node.key)
    }

    /// Return the largest key.
    pub fn max(&self) -> Option<&K> {
        extreme(self.root(), Side::Right).map(|node| &node.key)
    }

    /// Height counted in nodes, not edges: number of nodes on the longest
    /// path from root to a leaf. Zero for an empty tree, one for a tree
    /// holding a single key.
    pub fn height(&self) -> usize {
        height(self.root())
    }

    /// Return a random key from this index.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<&K> {
        let mut nref = self.root()?;

        let mut at_depth = rng.gen::<u8>() % 40;
        loop {
            let next = match rng.gen::<u8>() % 2 {
                0 => nref.left_deref(),
                _ => nref.right_deref(),
            };
            match next {
                Some(next) if at_depth > 0 => nref = next,
                _ => break Some(&nref.key),
            }
            at_depth -= 1;
        }
    }

    /// Walk the tree in `order`. Every call starts a fresh traversal.
    pub fn traverse(&self, order: Order) -> Traverse<K> {
        let mut stack = vec![];
        if let Some(root) = self.root() {
            stack.push(Visit::Expand(root));
        }
        Traverse { order, stack }
    }

    /// Return an iterator over all keys in sort order.
    pub fn iter(&self) -> Traverse<K> {
        self.traverse(Order::Inorder)
    }
}

/// Validation.
impl<K, C> Rbt<K, C>
where
    K: Clone,
    C: Fn(&K, &K) -> Ordering,
{
    /// Validate red-black tree with following rules:
    ///
    /// * Root node is black.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Make sure keys are in sorted order.
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, RbtError<K>> {
        let root = self.root();
        if is_red(root) {
            return Err(RbtError::RedRoot);
        }
        let mut stats = Stats::new(self.n_count, mem::size_of::<Node<K>>());
        stats.set_depths(Depth::new());
        let mut prev = None;
        let blacks = self.validate_tree(root, false, 0, 0, &mut prev, &mut stats)?;
        stats.set_blacks(blacks);
        Ok(stats)
    }

    fn validate_tree<'a>(
        &self,
        node: Option<&'a Node<K>>,
        fromred: bool,
        mut nb: usize,
        depth: usize,
        prev: &mut Option<&'a K>, // last key visited in-order
        stats: &mut Stats,
    ) -> Result<usize, RbtError<K>> {
        let node = match node {
            None => return Ok(nb),
            Some(node) => node,
        };

        let red = node.is_red();
        if fromred && red {
            return Err(RbtError::ConsecutiveReds);
        }
        if !red {
            nb += 1;
        }
        let (left, right) = (node.left_deref(), node.right_deref());
        if left.is_none() && right.is_none() {
            if let Some(depths) = stats.depths.as_mut() {
                depths.sample(depth + 1);
            }
        }

        let lblacks = self.validate_tree(left, red, nb, depth + 1, prev, stats)?;
        if let Some(pkey) = *prev {
            if (self.cmp)(pkey, &node.key) == Ordering::Greater {
                let (pkey, key) = (pkey.clone(), node.key.clone());
                return Err(RbtError::SortError(pkey, key));
            }
        }
        *prev = Some(&node.key);
        let rblacks = self.validate_tree(right, red, nb, depth + 1, prev, stats)?;

        if lblacks != rblacks {
            let err = format!("left: {} right: {}", lblacks, rblacks);
            return Err(RbtError::UnbalancedBlacks(err));
        }
        Ok(lblacks)
    }
}

impl<K, C> Rbt<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn do_insert(node: Option<Box<Node<K>>>, key: K, cmp: &C) -> Box<Node<K>> {
        let mut node = match node {
            None => return Node::new(key, false /*red*/),
            Some(node) => node,
        };

        let side = match cmp(&key, &node.key) {
            Ordering::Greater => Side::Right,
            Ordering::Less | Ordering::Equal => Side::Left,
        };
        let child = Self::do_insert(node.link_mut(side).take(), key, cmp);
        *node.link_mut(side) = Some(child);
        Self::insert_fixup(node, side)
    }

    // `node` is the grandparent of a freshly recolored or inserted red node,
    // `side` is the link leading down to it. Resolve red-red between the
    // parent and one of its children, if any.
    fn insert_fixup(mut node: Box<Node<K>>, side: Side) -> Box<Node<K>> {
        let grandchildren = node
            .child(side)
            .filter(|parent| parent.is_red())
            .map(|parent| (is_red(parent.child(side.flip())), is_red(parent.child(side))));
        let (inner, outer) = match grandchildren {
            Some(colors) => colors,
            None => return node,
        };
        if !inner && !outer {
            return node;
        }

        if is_red(node.child(side.flip())) {
            // red uncle, violation moves up to this node.
            Self::flip(node.deref_mut());
            return node;
        }

        if inner && !outer {
            if let Some(parent) = node.link_mut(side).take() {
                *node.link_mut(side) = Some(Self::rotate(parent, side));
            }
        }
        if let Some(parent) = node.link_mut(side) {
            parent.set_black();
        }
        node.set_red();
        Self::rotate(node, side.flip())
    }

    fn do_delete(node: Option<Box<Node<K>>>, key: &K, cmp: &C) -> Delete<K> {
        let mut node = match node {
            None => return (None, None, false),
            Some(node) => node,
        };

        let side = match cmp(key, &node.key) {
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
            Ordering::Equal => match node.left.take() {
                Some(left) if node.right.is_some() => {
                    // swap in the in-order predecessor and remove that instead.
                    let (left, pred, short) = Self::delete_max(left);
                    node.left = left;
                    let old_key = mem::replace(&mut node.key, pred);
                    let (node, short) = Self::fixup_if(node, Side::Left, short);
                    return (Some(node), Some(old_key), short);
                }
                left => {
                    node.left = left;
                    let (child, old_key, short) = Self::splice(node);
                    return (child, Some(old_key), short);
                }
            },
        };

        let (child, old_key, short) = Self::do_delete(node.link_mut(side).take(), key, cmp);
        *node.link_mut(side) = child;
        let (node, short) = Self::fixup_if(node, side, short);
        (Some(node), old_key, short)
    }

    // detach the rightmost node under `node`.
    fn delete_max(mut node: Box<Node<K>>) -> Detach<K> {
        match node.right.take() {
            None => Self::splice(node),
            Some(right) => {
                let (right, max_key, short) = Self::delete_max(right);
                node.right = right;
                let (node, short) = Self::fixup_if(node, Side::Right, short);
                (Some(node), max_key, short)
            }
        }
    }

    // replace `node`, having at most one child, with that child. Flag is
    // true when the black-height under this position dropped by one.
    fn splice(node: Box<Node<K>>) -> Detach<K> {
        let Node {
            key,
            black,
            left,
            right,
        } = *node;
        debug_assert!(left.is_none() || right.is_none());

        let mut child = left.or(right);
        let short = match child.as_mut() {
            _ if !black => false,
            Some(child) if child.is_red() => {
                child.set_black();
                false
            }
            _ => true,
        };
        (child, key, short)
    }

    #[inline]
    fn fixup_if(node: Box<Node<K>>, side: Side, short: bool) -> (Box<Node<K>>, bool) {
        if short {
            Self::delete_fixup(node, side)
        } else {
            (node, false)
        }
    }

    // Subtree under `side` of `node` is one black short of its sibling.
    // Return the rebalanced subtree, and whether the deficiency moved up
    // to the caller.
    fn delete_fixup(mut node: Box<Node<K>>, side: Side) -> (Box<Node<K>>, bool) {
        let far = side.flip();

        if is_red(node.child(far)) {
            // sibling red, rotate it up so the deficient side gets a black
            // sibling, then resolve one level down under a red parent.
            node.set_red();
            if let Some(sibling) = node.link_mut(far) {
                sibling.set_black();
            }
            let mut top = Self::rotate(node, side);
            if let Some(lowered) = top.link_mut(side).take() {
                let (lowered, short) = Self::delete_fixup(lowered, side);
                debug_assert!(!short, "delete_fixup(): red parent left a deficit");
                *top.link_mut(side) = Some(lowered);
            }
            return (top, false);
        }

        let nephews = node
            .child(far)
            .map(|sibling| (is_red(sibling.child(side)), is_red(sibling.child(far))));
        let (near_red, far_red) = match nephews {
            Some(colors) => colors,
            None => {
                debug_assert!(false, "delete_fixup(): missing sibling");
                return (node, true);
            }
        };

        if !near_red && !far_red {
            if let Some(sibling) = node.link_mut(far) {
                sibling.set_red();
            }
            if node.is_red() {
                node.set_black();
                return (node, false);
            }
            return (node, true);
        }

        if !far_red {
            // near nephew red, make it the far one.
            if let Some(mut sibling) = node.link_mut(far).take() {
                sibling.set_red();
                if let Some(nephew) = sibling.link_mut(side) {
                    nephew.set_black();
                }
                *node.link_mut(far) = Some(Self::rotate(sibling, far));
            }
        }

        let black = node.is_black();
        if let Some(sibling) = node.link_mut(far) {
            sibling.black = black;
            if let Some(nephew) = sibling.link_mut(far) {
                nephew.set_black();
            }
        }
        node.set_black();
        (Self::rotate(node, side), false)
    }

    //--------- rotation routines ----------------

    // rotate `node` down towards `down`, return the new subtree root.
    #[inline]
    fn rotate(node: Box<Node<K>>, down: Side) -> Box<Node<K>> {
        match down {
            Side::Left => Self::rotate_left(node),
            Side::Right => Self::rotate_right(node),
        }
    }

    //              (i)                       (i)
    //               |                         |
    //              node                       x
    //              /  \                      / \
    //             /    \                    /   \
    //            /      \                  /     \
    //          left       x             node      xr
    //                    / \            /  \
    //                  xl   xr       left   xl
    //
    fn rotate_left(mut node: Box<Node<K>>) -> Box<Node<K>> {
        let mut x = match node.right.take() {
            Some(x) => x,
            None => panic!("rotate_left(): missing right child, call the programmer"),
        };
        node.right = x.left.take();
        x.left = Some(node);
        x
    }

    //              (i)                       (i)
    //               |                         |
    //              node                       x
    //              /  \                      / \
    //             /    \                    /   \
    //            /      \                  /     \
    //          x       right             xl      node
    //         / \                                / \
    //       xl   xr                             xr  right
    //
    fn rotate_right(mut node: Box<Node<K>>) -> Box<Node<K>> {
        let mut x = match node.left.take() {
            Some(x) => x,
            None => panic!("rotate_right(): missing left child, call the programmer"),
        };
        node.left = x.right.take();
        x.right = Some(node);
        x
    }

    //        (b)                   (r)
    //         |                     |
    //        node                  node
    //        / \                   / \
    //      (r) (r)              (b) (b)
    //     /      \              /      \
    //   left    right         left    right
    //
    fn flip(node: &mut Node<K>) {
        if let Some(left) = node.left.as_mut() {
            left.toggle_link();
        }
        if let Some(right) = node.right.as_mut() {
            right.toggle_link();
        }
        node.toggle_link();
    }
}

impl<K, C> Extend<K> for Rbt<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        iter.into_iter().for_each(|key| self.insert(key));
    }
}

impl<K> FromIterator<K> for Rbt<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Rbt<K> {
        Rbt::load_from("rbt", iter)
    }
}

impl<'a, K, C> IntoIterator for &'a Rbt<K, C> {
    type Item = &'a K;
    type IntoIter = Traverse<'a, K>;

    fn into_iter(self) -> Traverse<'a, K> {
        self.iter()
    }
}

impl<K, C> fmt::Debug for Rbt<K, C>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Rbt")
            .field("name", &self.name)
            .field("n_count", &self.n_count)
            .field("root", &self.root)
            .finish()
    }
}

fn is_red<K>(node: Option<&Node<K>>) -> bool {
    node.map_or(false, |node| !node.is_black())
}

// Count of black nodes from `node` down to any absent child. None if the
// root of the tree is red, a red node has a red child, or paths disagree.
// Only evaluated by debug assertions.
fn black_height<K>(root: Option<&Node<K>>) -> Option<usize> {
    fn walk<K>(node: Option<&Node<K>>, fromred: bool) -> Option<usize> {
        let node = match node {
            None => return Some(0),
            Some(node) => node,
        };
        if fromred && node.is_red() {
            return None;
        }
        let lblacks = walk(node.left_deref(), node.is_red())?;
        let rblacks = walk(node.right_deref(), node.is_red())?;
        if lblacks != rblacks {
            return None;
        }
        Some(lblacks + if node.is_black() { 1 } else { 0 })
    }

    if is_red(root) {
        return None;
    }
    walk(root, false)
}

fn height<K>(node: Option<&Node<K>>) -> usize {
    match node {
        None => 0,
        Some(node) => 1 + cmp::max(height(node.left_deref()), height(node.right_deref())),
    }
}

fn extreme<K>(node: Option<&Node<K>>, side: Side) -> Option<&Node<K>> {
    let mut nref = node?;
    while let Some(next) = nref.child(side) {
        nref = next
    }
    Some(nref)
}

/// Child position under a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Return the other side.
    #[inline]
    pub fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Order of visiting nodes in [`Rbt::traverse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Preorder,
    /// Left subtree, node, right subtree. Yields keys in sort order.
    Inorder,
    /// Left subtree, right subtree, then node.
    Postorder,
}

enum Visit<'a, K> {
    Expand(&'a Node<K>),
    Yield(&'a K),
}

/// Iterator returned by [`Rbt::traverse`] and [`Rbt::iter`].
pub struct Traverse<'a, K> {
    order: Order,
    stack: Vec<Visit<'a, K>>,
}

impl<'a, K> Traverse<'a, K> {
    #[inline]
    fn expand(&mut self, node: Option<&'a Node<K>>) {
        if let Some(node) = node {
            self.stack.push(Visit::Expand(node))
        }
    }
}

impl<'a, K> Iterator for Traverse<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        while let Some(visit) = self.stack.pop() {
            let node = match visit {
                Visit::Yield(key) => return Some(key),
                Visit::Expand(node) => node,
            };
            // push in reverse of the visiting order.
            let (left, right) = (node.left_deref(), node.right_deref());
            match self.order {
                Order::Preorder => {
                    self.expand(right);
                    self.expand(left);
                    return Some(&node.key);
                }
                Order::Inorder => {
                    self.expand(right);
                    self.stack.push(Visit::Yield(&node.key));
                    self.expand(left);
                }
                Order::Postorder => {
                    self.stack.push(Visit::Yield(&node.key));
                    self.expand(right);
                    self.expand(left);
                }
            }
        }
        None
    }
}

/// Node corresponds to a single entry in Rbt instance.
#[derive(Clone, Debug)]
pub struct Node<K> {
    key: K,
    black: bool,                 // store: black or red
    left: Option<Box<Node<K>>>,  // store: left child
    right: Option<Box<Node<K>>>, // store: right child
}

// Primary operations on a single node.
impl<K> Node<K> {
    // CREATE operation
    fn new(key: K, black: bool) -> Box<Node<K>> {
        Box::new(Node {
            key,
            black,
            left: None,
            right: None,
        })
    }

    /// Key stored in this node.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Check whether this node is black.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.black
    }

    /// Check whether this node is red.
    #[inline]
    pub fn is_red(&self) -> bool {
        !self.black
    }

    /// Return left child, holding keys sorted before this one.
    #[inline]
    pub fn left(&self) -> Option<&Node<K>> {
        self.left_deref()
    }

    /// Return right child, holding keys sorted after this one.
    #[inline]
    pub fn right(&self) -> Option<&Node<K>> {
        self.right_deref()
    }

    /// Return child on `side`.
    #[inline]
    pub fn child(&self, side: Side) -> Option<&Node<K>> {
        match side {
            Side::Left => self.left_deref(),
            Side::Right => self.right_deref(),
        }
    }

    #[inline]
    fn left_deref(&self) -> Option<&Node<K>> {
        self.left.as_ref().map(Deref::deref)
    }

    #[inline]
    fn right_deref(&self) -> Option<&Node<K>> {
        self.right.as_ref().map(Deref::deref)
    }

    #[inline]
    fn link_mut(&mut self, side: Side) -> &mut Option<Box<Node<K>>> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    #[inline]
    fn set_red(&mut self) {
        self.black = false
    }

    #[inline]
    fn set_black(&mut self) {
        self.black = true
    }

    #[inline]
    fn toggle_link(&mut self) {
        self.black = !self.black
    }
}

/// Statistics on [`Rbt`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`Rbt::stats`] method.
/// * To get full statisics via [`Rbt::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number entries in [`Rbt`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including over-head for `Rbt<K>`. Although
    /// the node overhead is constant, the node size varies based on
    /// key type. EG:
    ///
    /// ```
    /// use rbt_index::Rbt;
    /// let rbt: Rbt<u64> = Rbt::new("myinstance");
    ///
    /// // size of key: 8 bytes
    /// // overhead is 24 bytes, two child links and the color.
    /// assert_eq!(rbt.stats().node_size(), 32);
    /// ```
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black nodes from root to leaf, on both left
    /// and right child.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics.
    pub fn depths(&self) -> Option<Depth> {
        self.depths
            .as_ref()
            .filter(|depths| depths.samples() > 0)
            .cloned()
    }
}
