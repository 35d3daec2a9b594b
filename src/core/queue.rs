/// A minimum-ordered priority queue with two insertion disciplines.
///
/// `insert` pays O(log n) immediately to keep the heap ordered; `toss`
/// appends in O(1) and marks the order stale, deferring the cost to the
/// next extraction, which restores the whole heap in O(n) (Floyd's
/// bottom-up heapify). Both disciplines are externally equivalent:
/// `delete_min` always returns the true minimum. The simulation tosses,
/// because it inserts events in bursts between extractions.
///
/// The queue may hold entries that the producer has since invalidated;
/// it neither knows nor cares. Removing arbitrary entries from a binary
/// heap is not efficiently supported, which is exactly why the consumer
/// validates lazily on extraction instead.
#[derive(Debug, Clone)]
pub struct EventQueue<T> {
    heap: Vec<T>,
    order_ok: bool,
}

impl<T: Ord> EventQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            order_ok: true,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            order_ok: true,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Append without restoring heap order. O(1).
    pub fn toss(&mut self, x: T) {
        self.heap.push(x);
        self.order_ok = false;
    }

    /// Ordered insertion: sift the new element up in O(log n). While the
    /// order is stale a sift-up proves nothing, so this degrades to a
    /// toss and lets the next extraction's heapify absorb it.
    pub fn insert(&mut self, x: T) {
        if !self.order_ok {
            self.toss(x);
            return;
        }
        self.heap.push(x);
        self.sift_up(self.heap.len() - 1);
    }

    /// Borrow the minimum element, restoring heap order first if needed.
    pub fn peek_min(&mut self) -> Option<&T> {
        if !self.order_ok {
            self.heapify();
        }
        self.heap.first()
    }

    /// Remove and return the minimum element, or `None` if the queue is
    /// empty. Restores heap order first if a toss left it stale; always
    /// leaves the remaining elements heap-ordered.
    pub fn delete_min(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        if !self.order_ok {
            self.heapify();
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Bottom-up heapify: O(n) restoration of the heap property.
    fn heapify(&mut self) {
        for i in (0..self.heap.len() / 2).rev() {
            self.sift_down(i);
        }
        self.order_ok = true;
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let mut child = left;
            if left + 1 < len && self.heap[left + 1] < self.heap[left] {
                child = left + 1;
            }
            if self.heap[child] < self.heap[i] {
                self.heap.swap(child, i);
                i = child;
            } else {
                break;
            }
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i] < self.heap[parent] {
                self.heap.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    #[cfg(test)]
    fn is_min_heap(&self) -> bool {
        (1..self.heap.len()).all(|i| self.heap[(i - 1) / 2] <= self.heap[i])
    }
}

impl<T: Ord> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
