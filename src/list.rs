use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

// Every list gets its own id so a handle can never be mistaken for a node of another list.
static NEXT_LIST_ID: AtomicU32 = AtomicU32::new(0);

/// Handle to a node of an [`OrderedList`], returned by [`OrderedList::insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle {
    list: u32,
    slot: usize,
    generation: u32,
}

struct Node<T> {
    value: Option<T>,
    next: Option<usize>,
    generation: u32,
}

/// Singly linked list whose nodes live in a slot arena.
///
/// Insertion always prepends, so iteration visits elements in the reverse order of insertion.
/// Traversal is forward only. Removing an arbitrary element walks the chain from the head and is
/// therefore linear in the length of the list.
pub struct OrderedList<T> {
    id: u32,
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    len: usize,
}

impl<T> OrderedList<T> {
    pub fn new() -> OrderedList<T> {
        OrderedList {
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Prepends `value` and returns the handle of its node, which is the new head.
    pub fn insert(&mut self, value: T) -> Handle {
        let slot = match self.free.pop() {
            Some(slot) => {
                let node = &mut self.nodes[slot];
                node.value = Some(value);
                node.next = self.head;
                slot
            }
            None => {
                self.nodes.push(Node { value: Some(value), next: self.head, generation: 0 });
                self.nodes.len() - 1
            }
        };
        self.head = Some(slot);
        self.len += 1;
        Handle { list: self.id, slot, generation: self.nodes[slot].generation }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first(&self) -> Option<Handle> {
        self.head.map(|slot| self.handle(slot))
    }

    /// Successor of `handle`, or `None` at the end of the list or for a stale handle.
    pub fn next(&self, handle: Handle) -> Option<Handle> {
        if !self.owns(handle) {
            return None;
        }
        self.nodes[handle.slot].next.map(|slot| self.handle(slot))
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        if !self.owns(handle) {
            return None;
        }
        self.nodes[handle.slot].value.as_ref()
    }

    /// Unlinks the node behind `handle` and hands back its payload.
    /// Returns `None` when the handle does not belong to this list.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        if !self.owns(handle) {
            return None;
        }
        let mut prev: Option<usize> = None;
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            if slot == handle.slot {
                break;
            }
            prev = Some(slot);
            cursor = self.nodes[slot].next;
        }
        cursor?;
        let next = self.nodes[handle.slot].next;
        match prev {
            None => self.head = next,
            Some(p) => self.nodes[p].next = next,
        }
        let node = &mut self.nodes[handle.slot];
        node.next = None;
        node.generation = node.generation.wrapping_add(1);
        let value = node.value.take();
        self.free.push(handle.slot);
        self.len -= 1;
        value
    }

    /// Consumes the list, passing every payload to `destroy` in list order.
    ///
    /// Teardown never stops early: the result is `false` if any call to `destroy` returned
    /// `false`, but every payload is still visited.
    pub fn destroy(mut self, mut destroy: impl FnMut(T) -> bool) -> bool {
        let mut ok = true;
        let mut cursor = self.head.take();
        while let Some(slot) = cursor {
            let node = &mut self.nodes[slot];
            cursor = node.next.take();
            if let Some(value) = node.value.take() {
                ok &= destroy(value);
            }
        }
        ok
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { list: self, cursor: self.head }
    }

    fn handle(&self, slot: usize) -> Handle {
        Handle { list: self.id, slot, generation: self.nodes[slot].generation }
    }

    fn owns(&self, handle: Handle) -> bool {
        handle.list == self.id
            && self.nodes.get(handle.slot).map_or(false, |node| {
                node.generation == handle.generation && node.value.is_some()
            })
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        OrderedList::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    list: &'a OrderedList<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let slot = self.cursor?;
        let list = self.list;
        let node = &list.nodes[slot];
        self.cursor = node.next;
        node.value.as_ref()
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
