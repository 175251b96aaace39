//! Linked FIFO queue for feedlab.
//!
//! Nodes live in a slot arena and link to their successor by index, which
//! gives O(1) enqueue at the tail without shared ownership of the last node.
//! Vacated slots are recycled through a free list.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone)]
struct Slot<T> {
    value: Option<T>,
    next: Option<usize>,
}

/// A FIFO queue with head and tail links.
///
/// The tail never has a successor; an empty queue has neither head nor tail.
#[derive(Debug, Clone)]
pub struct LinkedQueue<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    length: usize,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Append at the tail.
    pub fn enqueue(&mut self, value: T) {
        let slot = Slot {
            value: Some(value),
            next: None,
        };
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index] = slot;
                index
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        };

        match self.tail {
            Some(tail) => self.slots[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.length += 1;
    }

    /// Remove from the head. An empty queue yields `None`.
    pub fn dequeue(&mut self) -> Option<T> {
        let index = self.head?;
        let slot = &mut self.slots[index];
        let value = slot.value.take();
        self.head = slot.next.take();
        if self.head.is_none() {
            self.tail = None;
        }
        self.free.push(index);
        self.length -= 1;
        value
    }

    pub fn peek(&self) -> Option<&T> {
        self.head.and_then(|index| self.slots[index].value.as_ref())
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    /// Iterates head to tail, i.e. in dequeue order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            next: self.head,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = LinkedQueue::new();
        for item in iter {
            queue.enqueue(item);
        }
        queue
    }
}

/// Serializes as a sequence in dequeue order.
impl<T: Serialize> Serialize for LinkedQueue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

pub struct Iter<'a, T> {
    queue: &'a LinkedQueue<T>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let slot = &self.queue.slots[index];
        self.next = slot.next;
        slot.value.as_ref()
    }
}
