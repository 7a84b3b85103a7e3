use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};

pub struct OpenSetElement<V, C>(pub V, pub C);

impl<V, C: Ord> PartialEq for OpenSetElement<V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.1 == other.1
    }
}

impl<V, C: Ord> PartialOrd for OpenSetElement<V, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // Reverse the order so that cost is minimized when popping from the heap
        Some(other.1.cmp(&self.1))
    }
}

impl<V, C: Ord> Eq for OpenSetElement<V, C> {}

impl<V, C: Ord> Ord for OpenSetElement<V, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse the order so that cost is minimized when popping from the heap
        other.1.cmp(&self.1)
    }
}

/// A min-priority queue over `OpenSetElement`s. The backing heap grows on demand, but
/// `with_state_bound` preallocates for searches whose state space size is known up front.
pub struct MinCostQueue<V, C> {
    heap: BinaryHeap<OpenSetElement<V, C>>,
}

impl<V, C: Ord> MinCostQueue<V, C> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_state_bound(state_bound: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(state_bound),
        }
    }

    pub fn push(&mut self, vertex: V, cost: C) {
        self.heap.push(OpenSetElement(vertex, cost));
    }

    pub fn pop(&mut self) -> Option<OpenSetElement<V, C>> {
        self.heap.pop()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, C: Ord> Default for MinCostQueue<V, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// A first-in first-out queue, `with_state_bound` preallocating as for `MinCostQueue`.
pub struct FifoQueue<V> {
    queue: VecDeque<V>,
}

impl<V> FifoQueue<V> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn with_state_bound(state_bound: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(state_bound),
        }
    }

    pub fn enqueue(&mut self, vertex: V) {
        self.queue.push_back(vertex);
    }

    pub fn dequeue(&mut self) -> Option<V> {
        self.queue.pop_front()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl<V> Default for FifoQueue<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, rand::prelude::*};

    #[test]
    fn test_min_cost_queue_pops_in_cost_order() {
        let mut min_cost_queue: MinCostQueue<usize, u32> = MinCostQueue::with_state_bound(8_usize);

        for (vertex, cost) in [(0_usize, 30_u32), (1_usize, 10_u32), (2_usize, 20_u32)] {
            min_cost_queue.push(vertex, cost);
        }

        assert_eq!(min_cost_queue.len(), 3_usize);

        let mut popped: Vec<(usize, u32)> = Vec::new();

        while let Some(OpenSetElement(vertex, cost)) = min_cost_queue.pop() {
            popped.push((vertex, cost));
        }

        assert_eq!(
            popped,
            vec![(1_usize, 10_u32), (2_usize, 20_u32), (0_usize, 30_u32)]
        );
        assert!(min_cost_queue.is_empty());
    }

    #[test]
    fn test_min_cost_queue_matches_sorted_reference() {
        const ELEMENT_COUNT: usize = 1000_usize;

        let mut rng: StdRng = StdRng::seed_from_u64(0xC0FFEE_u64);
        let mut min_cost_queue: MinCostQueue<usize, u32> =
            MinCostQueue::with_state_bound(ELEMENT_COUNT);
        let mut costs: Vec<u32> = Vec::with_capacity(ELEMENT_COUNT);

        for vertex in 0_usize..ELEMENT_COUNT {
            let cost: u32 = rng.gen_range(0_u32..100_u32);

            min_cost_queue.push(vertex, cost);
            costs.push(cost);
        }

        costs.sort();

        for expected_cost in costs {
            assert_eq!(min_cost_queue.pop().unwrap().1, expected_cost);
        }

        assert!(min_cost_queue.pop().is_none());
    }

    #[test]
    fn test_fifo_queue_order() {
        let mut fifo_queue: FifoQueue<u32> = FifoQueue::with_state_bound(4_usize);

        for vertex in 0_u32..4_u32 {
            fifo_queue.enqueue(vertex);
        }

        for vertex in 0_u32..4_u32 {
            assert_eq!(fifo_queue.dequeue(), Some(vertex));
        }

        assert_eq!(fifo_queue.dequeue(), None);

        fifo_queue.enqueue(5_u32);
        fifo_queue.clear();

        assert!(fifo_queue.is_empty());
    }
}
