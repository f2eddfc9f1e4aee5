use std::ptr;

/// Size of the opaque block that inflates every node so traversal touches
/// more than one cache line per hop.
pub const NODE_PADDING: usize = 128;

// Node structure for the benchmark chain
#[repr(C, align(64))] // Align to cache line boundaries
pub struct Node {
    pub(crate) value: u64,
    // Owning link along the chain, or the non-owning back-edge when the tail
    // closes a cycle
    pub(crate) next: *mut Node,
    // Simulates a heavy payload
    pub(crate) _padding: [u8; NODE_PADDING],
}

impl Node {
    pub(crate) fn new(value: u64) -> Self {
        Node {
            value,
            next: ptr::null_mut(),
            _padding: [0; NODE_PADDING],
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn has_next(&self) -> bool {
        !self.next.is_null()
    }
}
