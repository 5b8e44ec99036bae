use crate::graph::VertexId;

/// Growable sequence of ranks attached to a vertex during lex-BFS.
///
/// Labels compare lexicographically: element-wise up to the length of the shorter label, and on a
/// tie the shorter label is the smaller one. Two labels with equal elements and equal length are
/// equal. This is exactly the ordering of `Vec<u32>`, so it is derived.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(Vec<u32>);

impl Label {
    pub fn new() -> Label {
        Label(Vec::new())
    }

    /// Appends a rank. Ranks are positive, labels only ever grow.
    pub fn push(&mut self, rank: u32) {
        debug_assert!(rank > 0);
        self.0.push(rank);
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fixed-capacity binary heap of vertices keyed by their labels.
///
/// The heap does not own the labels: every operation that compares takes the label table indexed
/// by vertex id. Heap order puts the greatest label first, so [`LabelHeap::pop`] yields the
/// vertex whose label sorts last lexicographically.
///
/// Labels may change while a vertex is resident. The heap does not notice; the caller must
/// restore the heap property with [`LabelHeap::heapify`]. The heap performs no liveness check
/// either: a caller that finalizes vertices out of band must skip stale entries after `pop`.
#[derive(Clone, Debug)]
pub struct LabelHeap {
    slots: Vec<VertexId>,
    capacity: usize,
}

#[inline(always)]
fn parent(k: usize) -> usize {
    (k - 1) >> 1
}

#[inline(always)]
fn left(k: usize) -> usize {
    (k << 1) + 1
}

// `a` has to sit above `b` in the heap.
#[inline(always)]
fn precedes(labels: &[Label], a: VertexId, b: VertexId) -> bool {
    labels[a] > labels[b]
}

impl LabelHeap {
    pub fn with_capacity(capacity: usize) -> LabelHeap {
        LabelHeap { slots: Vec::with_capacity(capacity), capacity }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Inserts `v` and sifts it up. Returns `false` and leaves the heap untouched when it is full.
    pub fn push(&mut self, v: VertexId, labels: &[Label]) -> bool {
        if self.slots.len() == self.capacity {
            return false;
        }
        self.slots.push(v);
        let mut z = self.slots.len() - 1;
        while z > 0 {
            let u = parent(z);
            if !precedes(labels, self.slots[z], self.slots[u]) {
                break;
            }
            self.slots.swap(u, z);
            z = u;
        }
        true
    }

    /// Removes and returns the first vertex in heap order.
    pub fn pop(&mut self, labels: &[Label]) -> Option<VertexId> {
        if self.slots.is_empty() {
            return None;
        }
        let top = self.slots.swap_remove(0);
        if !self.slots.is_empty() {
            self.sift_down(0, labels);
        }
        Some(top)
    }

    pub fn peek(&self) -> Option<VertexId> {
        self.slots.first().copied()
    }

    /// Rebuilds the heap property bottom-up after labels of resident vertices changed.
    pub fn heapify(&mut self, labels: &[Label]) {
        for k in (0..self.slots.len() / 2).rev() {
            self.sift_down(k, labels);
        }
    }

    fn sift_down(&mut self, mut k: usize, labels: &[Label]) {
        let n = self.slots.len();
        loop {
            let l = left(k);
            if l >= n {
                break;
            }
            let r = l + 1;
            let child = if r < n && precedes(labels, self.slots[r], self.slots[l]) { r } else { l };
            if !precedes(labels, self.slots[child], self.slots[k]) {
                break;
            }
            self.slots.swap(k, child);
            k = child;
        }
    }
}
