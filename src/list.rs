use std::ptr;

use crate::node::Node;
use crate::node_allocator::NodeAllocator;

/// A singly-linked chain of padded nodes whose tail may point back into the
/// chain.
///
/// Every node is owned by its predecessor and the head by the list itself.
/// When a cycle is closed, the tail's link is a non-owning back-edge that is
/// severed before the nodes are released.
pub struct CycleList {
    head: *mut Node,
    len: usize,
    entry: Option<usize>,
    allocator: NodeAllocator,
}

impl CycleList {
    /// Build a chain of `n` nodes valued `0..n`.
    ///
    /// When `entry` is `Some(e)` with `e < n`, the tail is linked to the node
    /// at index `e`. Any other entry leaves the chain acyclic.
    pub fn build(n: usize, entry: Option<usize>) -> Self {
        let mut allocator = NodeAllocator::new();

        if n == 0 {
            return CycleList {
                head: ptr::null_mut(),
                len: 0,
                entry,
                allocator,
            };
        }

        let nodes: Vec<*mut Node> = (0..n as u64).map(|i| allocator.allocate(i)).collect();

        unsafe {
            for pair in nodes.windows(2) {
                (*pair[0]).next = pair[1];
            }

            if let Some(e) = entry.filter(|&e| e < n) {
                let tail = nodes[n - 1];
                (*tail).next = nodes[e];
            }
        }

        CycleList {
            head: nodes[0],
            len: n,
            entry,
            allocator,
        }
    }

    pub fn acyclic(n: usize) -> Self {
        CycleList::build(n, None)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The entry index the list was built with, valid or not.
    pub fn entry(&self) -> Option<usize> {
        self.entry
    }

    /// The entry index of the closed cycle, if there is one.
    pub fn cycle_entry(&self) -> Option<usize> {
        self.entry.filter(|&e| e < self.len)
    }

    pub fn is_cyclic(&self) -> bool {
        self.cycle_entry().is_some()
    }

    pub fn cycle_len(&self) -> usize {
        self.cycle_entry().map_or(0, |e| self.len - e)
    }

    pub fn head(&self) -> Option<&Node> {
        unsafe { self.head.as_ref() }
    }

    pub(crate) fn head_ptr(&self) -> *const Node {
        self.head
    }

    /// Nodes still owned by this list.
    pub fn live_nodes(&self) -> usize {
        self.allocator.live()
    }

    /// Sever the cycle (if any) and release every node exactly once.
    ///
    /// Returns the number of nodes released; a second call releases nothing.
    pub fn teardown(&mut self) -> usize {
        if self.head.is_null() {
            return 0;
        }

        let released_before = self.allocator.released();

        unsafe {
            if self.entry.is_some() {
                // Walk to the tail and cut its outgoing link
                let mut tail = self.head;
                for _ in 0..self.len - 1 {
                    tail = (*tail).next;
                }
                (*tail).next = ptr::null_mut();
            }

            let mut current = self.head;
            while !current.is_null() {
                let next = (*current).next;
                self.allocator.deallocate(current);
                current = next;
            }
        }

        self.head = ptr::null_mut();
        self.len = 0;
        self.allocator.released() - released_before
    }
}

impl Drop for CycleList {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for CycleList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CycleList")
            .field("len", &self.len)
            .field("entry", &self.entry)
            .field("live_nodes", &self.live_nodes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    // Walks `steps` links from the head
    fn node_at(list: &CycleList, steps: usize) -> *const Node {
        let mut current = list.head_ptr();
        for _ in 0..steps {
            current = unsafe { (*current).next };
        }
        current
    }

    #[test]
    fn empty_list() {
        let mut list = CycleList::build(0, Some(0));
        assert!(list.is_empty());
        assert!(list.head().is_none());
        assert!(!list.is_cyclic());
        assert_eq!(list.cycle_len(), 0);
        assert_eq!(list.teardown(), 0);
    }

    #[test]
    fn acyclic_chain_values() {
        let list = CycleList::acyclic(5);
        assert_eq!(list.len(), 5);
        assert!(!list.is_cyclic());

        let mut current = list.head_ptr();
        let mut values = Vec::new();
        while !current.is_null() {
            unsafe {
                values.push((*current).value);
                current = (*current).next;
            }
        }
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn tail_links_back_to_entry() {
        let list = CycleList::build(10, Some(3));
        assert!(list.is_cyclic());
        assert_eq!(list.cycle_len(), 7);

        let tail = node_at(&list, 9);
        unsafe {
            assert_eq!((*tail).value, 9);
            assert_eq!((*tail).next as *const Node, node_at(&list, 3));
            assert_eq!((*(*tail).next).value, 3);
        }
    }

    #[test]
    fn tail_entry_is_a_self_loop() {
        let list = CycleList::build(4, Some(3));
        assert_eq!(list.cycle_len(), 1);

        let tail = node_at(&list, 3);
        unsafe { assert_eq!((*tail).next as *const Node, tail) };
    }

    #[test]
    fn out_of_range_entry_stays_acyclic() {
        let mut list = CycleList::build(6, Some(6));
        assert_eq!(list.entry(), Some(6));
        assert_eq!(list.cycle_entry(), None);
        assert!(!list.is_cyclic());
        assert!(node_at(&list, 6).is_null());
        assert_eq!(list.teardown(), 6);
    }

    #[test]
    fn single_node_self_cycle() {
        let mut list = CycleList::build(1, Some(0));
        let head = list.head_ptr();
        unsafe { assert_eq!((*head).next as *const Node, head) };

        assert_eq!(list.live_nodes(), 1);
        assert_eq!(list.teardown(), 1);
        assert_eq!(list.live_nodes(), 0);
    }

    #[test]
    fn teardown_is_idempotent() {
        let mut list = CycleList::build(100, Some(10));
        assert_eq!(list.teardown(), 100);
        assert_eq!(list.teardown(), 0);
        assert!(list.is_empty());
        assert_eq!(list.live_nodes(), 0);
    }

    #[test]
    fn accessors_after_teardown() {
        let mut list = CycleList::build(100, Some(10));
        assert_eq!(list.cycle_len(), 90);

        list.teardown();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert!(list.head().is_none());
        assert!(!list.is_cyclic());
        assert_eq!(list.cycle_entry(), None);
        assert_eq!(list.cycle_len(), 0);
        // The requested entry is still reported as given
        assert_eq!(list.entry(), Some(10));
    }

    #[test]
    fn single_node_lists_build() {
        for entry in [None, Some(0), Some(1)] {
            let mut list = CycleList::build(1, entry);
            assert_eq!(list.len(), 1);
            assert!(!list.is_empty());
            assert_eq!(list.is_cyclic(), entry == Some(0));
            assert_eq!(list.teardown(), 1);
        }
    }

    #[test]
    fn teardown_releases_every_node() {
        let mut rng = rand::rng();

        for _ in 0..200 {
            let n = rng.random_range(1..300);
            let entry = match rng.random_range(0..3) {
                0 => None,
                1 => Some(rng.random_range(0..n)),
                _ => Some(n + rng.random_range(0..5)),
            };

            let mut list = CycleList::build(n, entry);
            assert_eq!(list.live_nodes(), n);
            assert_eq!(list.teardown(), n, "n={n} entry={entry:?}");
            assert_eq!(list.live_nodes(), 0);
        }
    }
}
