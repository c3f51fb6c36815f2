use thiserror::Error;

/// Binary min-heap over a zero-based `Vec`.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { elements: vec![] }
    }

    pub fn heap_size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(i: usize) -> usize {
        2 * i + 1
    }

    fn right(i: usize) -> usize {
        2 * i + 2
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapErr {
    #[error("index {0} out of range for heap of size {1}")]
    KeyError(usize, usize),
    #[error("extract from an empty heap")]
    HeapUnderflow,
}

impl<T: Ord> MinHeap<T> {
    pub fn build(source: Vec<T>) -> Self {
        let mut heap = MinHeap { elements: source };
        let n = heap.heap_size();
        for i in (0..n / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    pub fn valid_min_heap(&self) -> bool {
        (1..self.heap_size()).all(|i| self.elements[Self::parent(i)] <= self.elements[i])
    }

    pub fn min_heapify(&mut self, i: usize) -> Result<(), HeapErr> {
        if i >= self.heap_size() {
            return Err(HeapErr::KeyError(i, self.heap_size()));
        }
        self.sift_down(i);
        Ok(())
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap_size();
        loop {
            let l = Self::left(i);
            let r = Self::right(i);
            let mut smallest = i;

            if l < n && self.elements[l] < self.elements[smallest] {
                smallest = l;
            }
            if r < n && self.elements[r] < self.elements[smallest] {
                smallest = r;
            }
            if smallest == i {
                return;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        let mut i = self.heap_size() - 1;
        while i > 0 {
            let p = Self::parent(i);
            if self.elements[i] >= self.elements[p] {
                break;
            }
            self.elements.swap(i, p);
            i = p;
        }
        debug_assert!(self.valid_min_heap());
    }

    pub fn extract_min(&mut self) -> Result<T, HeapErr> {
        if self.is_empty() {
            return Err(HeapErr::HeapUnderflow);
        }
        let n = self.heap_size() - 1;
        self.elements.swap(0, n);
        let result = self.elements.swap_remove(n);
        if !self.is_empty() {
            self.min_heapify(0)?;
        }
        Ok(result)
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn extracts_in_ascending_order() {
        let mut heap = MinHeap::build(vec![9, 4, 7, 1, 8, 2, 2, 6]);
        assert!(heap.valid_min_heap());
        heap.insert(3);
        heap.insert(0);

        let mut out = Vec::new();
        while let Ok(x) = heap.extract_min() {
            out.push(x);
        }
        assert_eq!(out, vec![0, 1, 2, 2, 3, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn underflow_is_an_error() {
        let mut heap: MinHeap<u32> = MinHeap::new();
        assert_eq!(heap.extract_min(), Err(HeapErr::HeapUnderflow));
        assert_eq!(heap.min_heapify(0), Err(HeapErr::KeyError(0, 0)));
    }
}
