//! The persistent chunk tree and its merge/fold algorithms.

use std::fmt;

use crate::{Chunk, Error, Result};

/// The fields of a non-empty tree node, stored on the heap.
///
/// Each node carries exactly one chunk and uniquely owns its two subtrees,
/// so merging moves subtrees into new parents without reference counting.
struct Node {
    left: Tree,
    chunk: Chunk,
    right: Tree,
}

#[derive(Default)]
enum Tree {
    #[default]
    Empty,
    Node(Box<Node>),
}

impl Tree {
    fn node(left: Tree, chunk: Chunk, right: Tree) -> Self {
        Tree::Node(Box::new(Node { left, chunk, right }))
    }

    fn is_empty(&self) -> bool {
        matches!(self, Tree::Empty)
    }

    /// Merge rules, most specific first. `other` always ends up after
    /// `self` in traversal order.
    fn merge(self, other: Tree) -> Tree {
        match (self, other) {
            (Tree::Empty, b) => b,
            (a, Tree::Empty) => a,
            // append-to-end fast path: other's leftmost position is empty,
            // so the whole of `a` slides into that slot
            (a, Tree::Node(n)) if n.left.is_empty() => {
                let Node { chunk, right, .. } = *n;
                Tree::node(a, chunk, right)
            }
            (a, b) => {
                // walk a's right spine to its empty end, iteratively so an
                // unbalanced spine cannot exhaust the call stack
                let mut spine = Vec::new();
                let mut cur = a;
                while let Tree::Node(n) = cur {
                    let Node { left, chunk, right } = *n;
                    spine.push((left, chunk));
                    cur = right;
                }
                let mut merged = b;
                while let Some((left, chunk)) = spine.pop() {
                    merged = Tree::node(left, chunk, merged);
                }
                merged
            }
        }
    }
}

/// A persistent binary-tree accumulator of [`Chunk`]s.
///
/// `Builder` is a monoid: [`Builder::merge`] is associative as observed
/// through in-order traversal, and [`Builder::empty`] is a two-sided
/// identity. In-order traversal (left subtree, own chunk, right subtree)
/// always yields chunks in the order they were logically appended,
/// regardless of how merges shaped the tree internally; the shape itself is
/// not observable.
///
/// Repeated left-leaning appends (`acc.merge(singleton)`) cost O(1) each,
/// so the common incremental build of n chunks is O(n) total. Deeply
/// interleaved non-append-style merges can make a single merge walk the
/// right spine, up to O(n); callers composing large builders should prefer
/// appending onto one accumulator.
#[derive(Default)]
pub struct Builder {
    root: Tree,
}

impl Clone for Builder {
    /// Deep-copies every chunk. The clone is rebuilt as the left-leaning
    /// append chain: tree shape is not observable through any public
    /// operation, and rebuilding keeps the copy iterative however deep the
    /// source's spines are, while leaving the clone in the best shape for
    /// further appends.
    fn clone(&self) -> Builder {
        self.fold(Builder::empty(), |acc, chunk| {
            acc.merge(Builder::singleton(chunk.clone()))
        })
    }
}

impl fmt::Debug for Builder {
    // a derived impl would recurse through spines as deep as the append
    // count; the shape is private anyway, so print a summary
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.fold(0usize, |n, chunk| n.saturating_add(chunk.len()));
        f.debug_struct("Builder")
            .field("chunks", &self.chunk_count())
            .field("bytes", &bytes)
            .finish()
    }
}

impl Builder {
    /// The empty builder, identity of [`Builder::merge`].
    pub fn empty() -> Self {
        Builder { root: Tree::Empty }
    }

    /// Lift one chunk into a single-node tree.
    pub fn singleton(chunk: Chunk) -> Self {
        Builder {
            root: Tree::node(Tree::Empty, chunk, Tree::Empty),
        }
    }

    /// `true` if this builder holds no chunks at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Concatenate two builders: every chunk of `self`, then every chunk of
    /// `other`.
    ///
    /// Associative, with [`Builder::empty`] as identity. When `other`'s
    /// leftmost slot is empty (in particular whenever it is a fresh
    /// singleton), this is O(1): the fast path that makes repeated
    /// append-to-end linear overall. Otherwise the right spine of `self` is
    /// walked to find the grafting point, which is where adversarial merge
    /// interleavings pay their O(n) worst case.
    pub fn merge(mut self, mut other: Builder) -> Builder {
        let a = std::mem::take(&mut self.root);
        let b = std::mem::take(&mut other.root);
        Builder { root: a.merge(b) }
    }

    /// In-order fold: visit every chunk left to right, in append order.
    ///
    /// The traversal is iterative with an explicit stack, so a tree built by
    /// millions of repeated appends (a long left spine) folds without
    /// recursion-depth limits. `f` may be effectful; calls happen strictly
    /// sequentially in traversal order.
    pub fn fold<A, F>(&self, seed: A, mut f: F) -> A
    where
        F: FnMut(A, &Chunk) -> A,
    {
        let mut acc = seed;
        let mut stack: Vec<&Node> = Vec::new();
        let mut cur = &self.root;
        loop {
            while let Tree::Node(n) = cur {
                stack.push(n);
                cur = &n.left;
            }
            match stack.pop() {
                Some(n) => {
                    acc = f(acc, &n.chunk);
                    cur = &n.right;
                }
                None => return acc,
            }
        }
    }

    /// How many chunks this builder holds.
    pub fn chunk_count(&self) -> usize {
        self.fold(0, |n, _| n + 1)
    }

    /// Total byte length of all held chunks, i.e. the exact length of the
    /// buffer [`Builder::realize`] would return.
    pub fn total_len(&self) -> Result<usize> {
        self.fold(Some(0usize), |acc, chunk| {
            acc.and_then(|n| n.checked_add(chunk.len()))
        })
        .ok_or(Error::Overflow("total builder length exceeds usize"))
    }

    /// Consume the builder and produce the single contiguous output buffer.
    ///
    /// See [`crate::realize`].
    pub fn realize(self) -> Result<Vec<u8>> {
        crate::realize(self)
    }
}

impl Drop for Builder {
    // the left spine of a tree built by repeated appends is as deep as the
    // append count, so the compiler's recursive drop glue cannot be used
    fn drop(&mut self) {
        let mut stack = vec![std::mem::take(&mut self.root)];
        while let Some(tree) = stack.pop() {
            if let Tree::Node(n) = tree {
                let Node { left, right, .. } = *n;
                stack.push(left);
                stack.push(right);
            }
        }
    }
}

impl From<Chunk> for Builder {
    fn from(chunk: Chunk) -> Self {
        Builder::singleton(chunk)
    }
}

impl Extend<Chunk> for Builder {
    fn extend<T: IntoIterator<Item = Chunk>>(&mut self, iter: T) {
        for chunk in iter {
            let acc = std::mem::take(self);
            *self = acc.merge(Builder::singleton(chunk));
        }
    }
}

impl FromIterator<Chunk> for Builder {
    fn from_iter<T: IntoIterator<Item = Chunk>>(iter: T) -> Self {
        let mut builder = Builder::empty();
        builder.extend(iter);
        builder
    }
}
