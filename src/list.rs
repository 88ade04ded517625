//! A singly linked list used as a traversal fixture.
//!
//! Traversal comes in both flavors the crate is about: `iter` hands out a
//! pull-style cursor, `each` pushes values into a callback that can stop
//! the walk early.

pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prepends a node holding `value` to the front of the list.
    pub fn push_front(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Appends a node holding `value` to the end of the list. Walks the
    /// whole list to find the tail.
    pub fn push_back(&mut self, value: T) {
        let node = Box::new(Node { value, next: None });
        let mut cursor = &mut self.head;
        while let Some(existing) = cursor {
            cursor = &mut existing.next;
        }
        *cursor = Some(node);
        self.len += 1;
    }

    /// Push-style traversal: `visit` sees each value in list order and
    /// answers whether the walk continues.
    pub fn each<F>(&self, mut visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            if !visit(&node.value) {
                return;
            }
            current = node.next.as_deref();
        }
    }

    /// Pull-style traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

// The derived drop would recurse node by node and can blow the stack on a
// long list; unlink iteratively instead.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LinkedList<i32> {
        let mut list = LinkedList::new();
        for value in [3, 2, 45, 4, 6, 7] {
            list.push_back(value);
        }
        list
    }

    #[test]
    fn traverses_in_insertion_order() {
        let list = sample();
        assert_eq!(list.len(), 6);

        let mut seen = Vec::new();
        list.each(|value| {
            seen.push(*value);
            true
        });
        assert_eq!(seen, vec![3, 2, 45, 4, 6, 7]);
    }

    #[test]
    fn each_honors_the_stop_signal() {
        let list = sample();
        let mut seen = Vec::new();
        list.each(|value| {
            seen.push(*value);
            *value != 45
        });
        assert_eq!(seen, vec![3, 2, 45]);
    }

    #[test]
    fn iter_matches_each() {
        let list = sample();
        let pulled: Vec<i32> = list.iter().copied().collect();
        assert_eq!(pulled, vec![3, 2, 45, 4, 6, 7]);
    }

    #[test]
    fn push_front_prepends() {
        let mut list = LinkedList::new();
        list.push_front(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn empty_list_has_nothing_to_say() {
        let list: LinkedList<i32> = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.iter().next(), None);
        list.each(|_| panic!("must not be called"));
    }

    #[test]
    fn long_lists_drop_without_recursing() {
        let mut list = LinkedList::new();
        for n in 0..200_000 {
            list.push_front(n);
        }
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
