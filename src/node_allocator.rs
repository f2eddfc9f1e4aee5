use std::alloc::{Layout, alloc, dealloc, handle_alloc_error};

use once_cell::sync::Lazy;

use crate::{CACHE_LINE_SIZE, node::Node};

/// Layout used for every node: rounded up to whole cache lines and aligned
/// to at least the cache line.
static NODE_LAYOUT: Lazy<Layout> = Lazy::new(|| {
    let align = (*CACHE_LINE_SIZE).max(std::mem::align_of::<Node>());
    let node_size = std::mem::size_of::<Node>();

    // Round up to cache line size
    let aligned_size = (node_size + align - 1) & !(align - 1);

    Layout::from_size_align(aligned_size, align).unwrap_or_else(|_| Layout::new::<Node>())
});

/// Memory manager for [`Node`] allocation
#[derive(Debug, Default)]
pub struct NodeAllocator {
    allocated: usize,
    released: usize,
}

impl NodeAllocator {
    pub fn new() -> Self {
        NodeAllocator::default()
    }

    pub fn layout() -> Layout {
        *NODE_LAYOUT
    }

    /// Allocate an unlinked node holding `value`
    pub(crate) fn allocate(&mut self, value: u64) -> *mut Node {
        let layout = Self::layout();

        let ptr = unsafe { alloc(layout) as *mut Node };
        if ptr.is_null() {
            handle_alloc_error(layout);
        }

        unsafe { ptr.write(Node::new(value)) };

        self.allocated += 1;
        ptr
    }

    /// Release a node previously returned by [`NodeAllocator::allocate`].
    ///
    /// # Safety
    ///
    /// `node` must come from this allocator and must not be released twice.
    pub(crate) unsafe fn deallocate(&mut self, node: *mut Node) {
        unsafe { dealloc(node as *mut u8, Self::layout()) };
        self.released += 1;
    }

    pub fn allocated(&self) -> usize {
        self.allocated
    }

    pub fn released(&self) -> usize {
        self.released
    }

    pub fn live(&self) -> usize {
        self.allocated - self.released
    }
}
