//! Generalized Floyd cycle detection.
//!
//! Each round the slow pointer advances `k` links and the fast pointer `2k`
//! links. The round is abandoned as soon as either pointer reaches a node with
//! no successor. Every single-link advance counts as one access.

use crate::list::CycleList;
use crate::node::Node;

/// Outcome of one detector run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub cycle_found: bool,
    pub accesses: u64,
}

/// Number of link dereferences one run with step multiplier `k` performs.
pub fn access_count(list: &CycleList, k: usize) -> u64 {
    run_floyd(list.head_ptr(), k).accesses
}

/// Run the detector and report whether the pointers met.
pub fn detect(list: &CycleList, k: usize) -> Detection {
    run_floyd(list.head_ptr(), k)
}

// Advance `ptr` by up to `steps` links, counting each one. Returns false when
// a missing successor cut the advance short.
#[inline(always)]
fn advance(ptr: &mut *const Node, steps: usize, accesses: &mut u64) -> bool {
    for _ in 0..steps {
        let next = unsafe { (**ptr).next };
        if next.is_null() {
            return false;
        }
        *ptr = next;
        *accesses += 1;
    }
    true
}

fn run_floyd(head: *const Node, k: usize) -> Detection {
    let mut accesses = 0;

    // A zero step never moves either pointer
    if head.is_null() || k == 0 {
        return Detection {
            cycle_found: false,
            accesses,
        };
    }

    let mut slow = head;
    let mut fast = head;

    loop {
        if !advance(&mut slow, k, &mut accesses)
            || !advance(&mut fast, k.saturating_mul(2), &mut accesses)
        {
            return Detection {
                cycle_found: false,
                accesses,
            };
        }

        if std::ptr::eq(slow, fast) {
            return Detection {
                cycle_found: true,
                accesses,
            };
        }
    }
}
