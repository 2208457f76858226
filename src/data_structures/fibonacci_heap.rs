//! Fibonacci-heap priority queue.
//!
//! A Fibonacci heap stores a forest of heap-ordered trees whose roots sit
//! in a circular doubly-linked ring. Trees may take any shape (unlike a
//! binomial heap); the structure is repaired lazily, which is what buys
//! the amortized bounds: O(1) insert and decrease-key, O(log n)
//! extract-min.
//!
//! Nodes live in an arena and every link (parent, child, siblings) is a
//! handle into that arena, so the cyclic pointer structure needs no
//! unsafe code. Handles are assigned densely in insertion order; the
//! shortest-path engine inserts vertices in index order, so there the
//! vertex id and the handle coincide.

use crate::{Error, Result};
use num_traits::Float;
use std::fmt::Debug;

/// A single node in the heap.
///
/// `left`/`right` are always valid: a node with no siblings is its own
/// neighbor in both directions.
#[derive(Debug)]
struct Node<W> {
    /// Priority of the node (the tentative distance in a Dijkstra run)
    key: W,

    /// Stable external id carried alongside the key, set once at insert
    index: usize,

    /// Number of children
    degree: usize,

    /// Has this node lost a child since it last became a non-root?
    marked: bool,

    /// Parent handle; `None` for roots
    parent: Option<usize>,

    /// Handle of one designated child; the rest are reached via its ring
    child: Option<usize>,

    /// Left neighbor in the sibling ring
    left: usize,

    /// Right neighbor in the sibling ring
    right: usize,
}

/// Mergeable priority queue with amortized O(1) insert and decrease-key.
///
/// One heap instance belongs to one shortest-path run; it is created
/// empty, filled once, drained by [`extract_min`](Self::extract_min) and
/// then discarded.
#[derive(Debug)]
pub struct FibonacciHeap<W>
where
    W: Float + Debug + Copy,
{
    /// Node storage; handles index into this
    arena: Vec<Node<W>>,

    /// Number of nodes currently in the heap
    len: usize,

    /// Number of trees in the root ring
    root_count: usize,

    /// Handle of the root with the smallest key, `None` when empty
    min: Option<usize>,
}

impl<W> Default for FibonacciHeap<W>
where
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> FibonacciHeap<W>
where
    W: Float + Debug + Copy,
{
    /// Creates an empty heap
    pub fn new() -> Self {
        FibonacciHeap {
            arena: Vec::new(),
            len: 0,
            root_count: 0,
            min: None,
        }
    }

    /// Creates an empty heap with arena space for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        FibonacciHeap {
            arena: Vec::with_capacity(capacity),
            len: 0,
            root_count: 0,
            min: None,
        }
    }

    /// Returns the number of nodes currently in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap has no nodes
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of trees in the root ring
    pub fn root_count(&self) -> usize {
        self.root_count
    }

    /// Returns the current key of a node, whether or not it has already
    /// been extracted
    pub fn key_of(&self, handle: usize) -> W {
        self.arena[handle].key
    }

    /// Inserts a new node with the given external id and key, returning
    /// its handle. O(1): the node joins the root ring next to the minimum.
    pub fn insert(&mut self, index: usize, key: W) -> usize {
        let h = self.arena.len();
        self.arena.push(Node {
            key,
            index,
            degree: 0,
            marked: false,
            parent: None,
            child: None,
            left: h,
            right: h,
        });

        if let Some(m) = self.min {
            // splice in as the left neighbor of the minimum
            let last = self.arena[m].left;
            self.arena[m].left = h;
            self.arena[h].right = m;
            self.arena[h].left = last;
            self.arena[last].right = h;
            if key <= self.arena[m].key {
                self.min = Some(h);
            }
        } else {
            self.min = Some(h);
        }

        self.len += 1;
        self.root_count += 1;
        h
    }

    /// Returns the key and external id of the minimum node.
    ///
    /// Fails with [`Error::EmptyHeap`] on an empty heap.
    pub fn find_min(&self) -> Result<(W, usize)> {
        let m = self.min.ok_or(Error::EmptyHeap)?;
        Ok((self.arena[m].key, self.arena[m].index))
    }

    /// Lowers the key of a node, restoring heap order with a cut and a
    /// cascading cut when needed. Amortized O(1).
    ///
    /// The new key must strictly decrease the current one; anything else
    /// is rejected with [`Error::KeyMustDecrease`] and the heap is left
    /// untouched.
    pub fn decrease_key(&mut self, handle: usize, new_key: W) -> Result<()> {
        if handle >= self.arena.len() {
            return Err(Error::InvalidVertex(handle));
        }
        if new_key >= self.arena[handle].key {
            return Err(Error::KeyMustDecrease);
        }

        self.arena[handle].key = new_key;
        match self.arena[handle].parent {
            // heap order against the parent is violated: cut the node out
            // and chase marks up the ancestor chain
            Some(p) if self.arena[p].key > new_key => {
                self.promote(handle);
                self.cascading_cut(p);
            }
            // still heap ordered below its parent, nothing moves
            Some(_) => {}
            // the node is a root; only the min pointer can change
            None => {
                if let Some(m) = self.min {
                    if new_key < self.arena[m].key {
                        self.min = Some(handle);
                    }
                }
            }
        }
        Ok(())
    }

    /// Removes the minimum node and returns its key and external id,
    /// then consolidates the root ring. Amortized O(log n).
    ///
    /// Fails with [`Error::EmptyHeap`] on an empty heap.
    pub fn extract_min(&mut self) -> Result<(W, usize)> {
        let m = self.min.ok_or(Error::EmptyHeap)?;
        let key = self.arena[m].key;
        let index = self.arena[m].index;

        // some surviving root takes over as the provisional minimum; the
        // real one is rebuilt during consolidation
        let survivor = {
            let l = self.arena[m].left;
            if l == m {
                None
            } else {
                Some(l)
            }
        };
        let first_child = self.arena[m].child;
        let child_count = self.arena[m].degree;

        self.detach(m);
        self.root_count -= 1;
        self.len -= 1;
        self.min = survivor;

        // every child of the removed minimum becomes a root, unmarked
        if let Some(first) = first_child {
            let mut cur = self.arena[first].left;
            for _ in 0..child_count {
                let next = self.arena[cur].left;
                self.promote(cur);
                cur = next;
            }
        }

        self.consolidate();
        Ok((key, index))
    }

    /// Merges root trees pairwise by degree until no two roots share a
    /// degree, then rebuilds the min pointer and the root count. This is
    /// what bounds the maximum root degree by Θ(log n).
    fn consolidate(&mut self) {
        if self.len <= 1 {
            return;
        }
        let Some(start) = self.min else {
            return;
        };

        // snapshot the ring before any link rearranges it
        let mut roots = Vec::with_capacity(self.root_count);
        let mut cur = start;
        for _ in 0..self.root_count {
            roots.push(cur);
            cur = self.arena[cur].left;
        }

        self.min = None;
        self.root_count = 0;

        let mut by_degree: Vec<Option<usize>> = Vec::new();
        for root in roots {
            let mut x = root;
            loop {
                let d = self.arena[x].degree;
                if by_degree.len() <= d {
                    by_degree.resize(d + 1, None);
                }
                match by_degree[d] {
                    None => {
                        by_degree[d] = Some(x);
                        break;
                    }
                    Some(y) => {
                        by_degree[d] = None;
                        // the smaller key becomes the parent
                        let (p, c) = if self.arena[y].key < self.arena[x].key {
                            (y, x)
                        } else {
                            (x, y)
                        };
                        self.link(p, c);
                        x = p;
                    }
                }
            }
        }

        // surviving trees form the new root ring
        for slot in by_degree {
            if let Some(h) = slot {
                self.add_root(h);
            }
        }
    }

    /// Splices a node out of its sibling ring and away from its parent.
    /// The node keeps its own children and ends up self-ringed.
    fn detach(&mut self, h: usize) {
        let l = self.arena[h].left;
        let r = self.arena[h].right;
        if r != h {
            self.arena[l].right = r;
            self.arena[r].left = l;
        }
        if let Some(p) = self.arena[h].parent {
            // repair the parent's child pointer to any remaining child
            self.arena[p].child = if self.arena[p].degree > 1 {
                Some(l)
            } else {
                None
            };
            self.arena[p].degree -= 1;
        }
        self.arena[h].left = h;
        self.arena[h].right = h;
        self.arena[h].parent = None;
    }

    /// Hangs an already-detached node under a parent, into its child ring
    fn add_child(&mut self, parent: usize, child: usize) {
        match self.arena[parent].child {
            Some(first) => {
                let last = self.arena[first].left;
                self.arena[first].left = child;
                self.arena[child].right = first;
                self.arena[child].left = last;
                self.arena[last].right = child;
            }
            None => {
                self.arena[parent].child = Some(child);
                self.arena[child].left = child;
                self.arena[child].right = child;
            }
        }
        self.arena[child].parent = Some(parent);
        self.arena[parent].degree += 1;
    }

    /// Detaches both trees and makes `child` a child of `parent`
    fn link(&mut self, parent: usize, child: usize) {
        self.detach(parent);
        self.detach(child);
        self.add_child(parent, child);
        self.arena[child].marked = false;
    }

    /// Splices a node into the root ring next to the minimum, updating
    /// the min pointer when the key is smaller. Roots carry no mark.
    fn add_root(&mut self, h: usize) {
        match self.min {
            Some(m) => {
                let last = self.arena[m].left;
                self.arena[m].left = h;
                self.arena[h].right = m;
                self.arena[h].left = last;
                self.arena[last].right = h;
                if self.arena[h].key < self.arena[m].key {
                    self.min = Some(h);
                }
            }
            None => {
                self.min = Some(h);
                self.arena[h].left = h;
                self.arena[h].right = h;
            }
        }
        self.arena[h].marked = false;
        self.arena[h].parent = None;
        self.root_count += 1;
    }

    /// Cuts the node loose from its parent and promotes it to a root
    fn promote(&mut self, h: usize) {
        self.detach(h);
        self.add_root(h);
    }

    /// Walks up the ancestor chain after a cut: an unmarked non-root is
    /// marked and the walk stops; a marked one is promoted and the walk
    /// continues with its former parent. Iterative on purpose, so a
    /// pathological tree cannot exhaust the call stack.
    fn cascading_cut(&mut self, start: usize) {
        let mut h = start;
        while let Some(p) = self.arena[h].parent {
            if !self.arena[h].marked {
                self.arena[h].marked = true;
                break;
            }
            self.promote(h);
            h = p;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pushes the Go-style Fibonacci sequence 0, 1, 2, 3, 5, 8, ... as
    /// node keys, one node per term
    fn fibonacci_heap_of(n: usize) -> FibonacciHeap<f64> {
        let mut heap = FibonacciHeap::new();
        let mut f1 = 1.0;
        let mut f2 = 0.0;
        let mut fnext = 0.0;
        for i in 0..n {
            if i > 0 {
                fnext = f1 + f2;
                f2 = f1;
                f1 = fnext;
            }
            heap.insert(i, fnext);
        }
        heap
    }

    fn degrees_of_roots(heap: &FibonacciHeap<f64>) -> Vec<usize> {
        let mut degrees = Vec::new();
        if let Some(m) = heap.min {
            let mut cur = m;
            loop {
                degrees.push(heap.arena[cur].degree);
                cur = heap.arena[cur].left;
                if cur == m {
                    break;
                }
            }
        }
        degrees
    }

    /// Checks `key(child) >= key(parent)` for every parent-child edge
    fn assert_heap_order(heap: &FibonacciHeap<f64>) {
        let Some(m) = heap.min else {
            return;
        };
        let mut stack = Vec::new();
        let mut cur = m;
        loop {
            stack.push(cur);
            cur = heap.arena[cur].left;
            if cur == m {
                break;
            }
        }
        while let Some(h) = stack.pop() {
            if let Some(first) = heap.arena[h].child {
                let mut c = first;
                loop {
                    assert!(
                        heap.arena[c].key >= heap.arena[h].key,
                        "child {} with key {} under parent {} with key {}",
                        c,
                        heap.arena[c].key,
                        h,
                        heap.arena[h].key
                    );
                    stack.push(c);
                    c = heap.arena[c].left;
                    if c == first {
                        break;
                    }
                }
            }
        }
    }

    #[test]
    fn fifty_inserts_keep_min_and_ring_order() {
        let heap = fibonacci_heap_of(50);
        assert_eq!(heap.len(), 50);
        assert_eq!(heap.root_count(), 50);

        let (min_key, min_index) = heap.find_min().unwrap();
        assert_eq!(min_key, 0.0);
        assert_eq!(min_index, 0);

        // inserts splice in as min.left, so the most recent insert sits
        // directly left of the minimum
        let last = heap.arena[heap.min.unwrap()].left;
        assert_eq!(heap.arena[last].key, 12586269025.0);
    }

    #[test]
    fn find_min_on_empty_heap_fails() {
        let heap: FibonacciHeap<f64> = FibonacciHeap::new();
        assert!(matches!(heap.find_min(), Err(Error::EmptyHeap)));
    }

    #[test]
    fn extract_min_on_empty_heap_fails() {
        let mut heap: FibonacciHeap<f64> = FibonacciHeap::new();
        assert!(matches!(heap.extract_min(), Err(Error::EmptyHeap)));
    }

    #[test]
    fn detach_closes_the_ring_over_the_node() {
        let mut heap = fibonacci_heap_of(10);
        let m = heap.min.unwrap();
        let node = heap.arena[m].right;
        heap.detach(node);
        // a detached node is its own sibling
        assert_eq!(heap.arena[node].left, node);
        assert_eq!(heap.arena[node].right, node);
        // the ring closed over it
        assert_eq!(heap.arena[heap.arena[m].right].index, 2);
    }

    #[test]
    fn consolidation_of_ten_roots_leaves_two_trees() {
        let mut heap = fibonacci_heap_of(10);
        heap.consolidate();
        let (min_key, _) = heap.find_min().unwrap();
        assert_eq!(min_key, 0.0);
        assert_eq!(heap.root_count(), 2);
        assert_heap_order(&heap);
    }

    #[test]
    fn extract_min_after_consolidation_yields_next_key() {
        let mut heap = fibonacci_heap_of(10);
        heap.consolidate();
        let (popped, _) = heap.extract_min().unwrap();
        assert_eq!(popped, 0.0);
        let (min_key, _) = heap.find_min().unwrap();
        assert_eq!(min_key, 1.0);
        assert_eq!(heap.len(), 9);
    }

    #[test]
    fn no_two_roots_share_a_degree_after_extract_min() {
        let mut heap = fibonacci_heap_of(32);
        while !heap.is_empty() {
            heap.extract_min().unwrap();
            let mut degrees = degrees_of_roots(&heap);
            assert_eq!(degrees.len(), heap.root_count());
            degrees.sort_unstable();
            degrees.dedup();
            assert_eq!(degrees.len(), heap.root_count(), "duplicate root degree");
            assert_heap_order(&heap);
        }
    }

    #[test]
    fn extraction_is_monotonic() {
        let mut heap = FibonacciHeap::new();
        let keys = [5.0, 3.0, 8.0, 1.0, 9.0, 2.0, 7.0, 4.0, 6.0, 0.0];
        for (i, &k) in keys.iter().enumerate() {
            heap.insert(i, k);
        }
        let mut popped = Vec::new();
        while let Ok((k, _)) = heap.extract_min() {
            popped.push(k);
        }
        assert_eq!(popped, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn decrease_key_moves_the_min() {
        let mut heap = FibonacciHeap::new();
        let a = heap.insert(0, 10.0);
        let b = heap.insert(1, 20.0);
        let c = heap.insert(2, 30.0);
        assert_eq!(heap.find_min().unwrap(), (10.0, 0));

        heap.decrease_key(b, 5.0).unwrap();
        assert_eq!(heap.find_min().unwrap(), (5.0, 1));

        heap.decrease_key(c, 1.0).unwrap();
        assert_eq!(heap.find_min().unwrap(), (1.0, 2));
        assert_eq!(heap.key_of(a), 10.0);
    }

    #[test]
    fn non_decreasing_key_is_rejected_and_heap_unchanged() {
        let mut heap = fibonacci_heap_of(10);
        heap.consolidate();
        let before_roots = heap.root_count();

        assert!(matches!(
            heap.decrease_key(3, 3.0),
            Err(Error::KeyMustDecrease)
        ));
        assert!(matches!(
            heap.decrease_key(3, 99.0),
            Err(Error::KeyMustDecrease)
        ));

        assert_eq!(heap.key_of(3), 3.0);
        assert_eq!(heap.root_count(), before_roots);
        assert_eq!(heap.find_min().unwrap(), (0.0, 0));
        assert_heap_order(&heap);
    }

    #[test]
    fn decrease_key_below_parent_cuts_the_node() {
        let mut heap = fibonacci_heap_of(10);
        heap.consolidate();
        // key 34 (handle 9) sits somewhere below a smaller key; dropping
        // it under the minimum must promote it to the root ring
        heap.decrease_key(9, -1.0).unwrap();
        assert_eq!(heap.find_min().unwrap(), (-1.0, 9));
        assert!(heap.arena[9].parent.is_none());
        assert_heap_order(&heap);
    }

    #[test]
    fn cascading_cuts_preserve_order_under_churn() {
        let mut heap = FibonacciHeap::new();
        for i in 0..64 {
            heap.insert(i, 1000.0 + i as f64);
        }
        // force tree shapes, then repeatedly carve nodes out from below
        heap.extract_min().unwrap();
        for i in (8..64).rev() {
            heap.decrease_key(i, i as f64).unwrap();
            assert_heap_order(&heap);
        }
        let mut last = f64::NEG_INFINITY;
        while let Ok((k, _)) = heap.extract_min() {
            assert!(k >= last);
            last = k;
            assert_heap_order(&heap);
        }
    }

    #[test]
    fn interleaved_operations_keep_min_correct() {
        let mut heap = FibonacciHeap::new();
        for i in 0..20 {
            heap.insert(i, (40 - i) as f64);
        }
        assert_eq!(heap.find_min().unwrap(), (21.0, 19));

        heap.extract_min().unwrap();
        heap.decrease_key(0, 2.0).unwrap();
        assert_eq!(heap.find_min().unwrap(), (2.0, 0));

        heap.extract_min().unwrap();
        // remaining smallest is handle 18 with key 22
        assert_eq!(heap.find_min().unwrap(), (22.0, 18));
        assert_eq!(heap.len(), 18);
    }
}
