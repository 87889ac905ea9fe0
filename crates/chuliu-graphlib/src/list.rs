//! Ordered sequence containers.
//!
//! [`List`] is the storage behind every adjacency record of a
//! [`Graph`](crate::Graph). [`Stack`] and [`Queue`] are thin disciplines over it: the stack is
//! the workspace for parent-pointer cycle detection, the queue is a FIFO kept for callers.
//!
//! A [`Position`] is an offset from the head. Inserting or removing at or before a position
//! shifts every element after it, so positions should not be held across mutations.

use crate::error::{Error, Result};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct List<T> {
    items: VecDeque<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn head(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn tail(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn head_position(&self) -> Option<Position> {
        (!self.items.is_empty()).then_some(Position(0))
    }

    pub fn tail_position(&self) -> Option<Position> {
        self.items.len().checked_sub(1).map(Position)
    }

    pub fn next(&self, position: Position) -> Option<Position> {
        let next = position.0 + 1;
        (next < self.items.len()).then_some(Position(next))
    }

    pub fn get(&self, position: Position) -> Option<&T> {
        self.items.get(position.0)
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        self.items.get_mut(position.0)
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::collections::vec_deque::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Inserts `value` right after `after`, or at the head when `after` is `None`.
    pub fn insert_after(&mut self, after: Option<Position>, value: T) -> Result<Position> {
        let at = match after {
            None => 0,
            Some(p) if p.0 < self.items.len() => p.0 + 1,
            Some(p) => {
                return Err(Error::InvalidPosition {
                    index: p.0,
                    len: self.items.len(),
                });
            }
        };
        self.items
            .try_reserve(1)
            .map_err(|_| Error::AllocationFailure)?;
        self.items.insert(at, value);
        Ok(Position(at))
    }

    pub fn push_back(&mut self, value: T) -> Result<Position> {
        let tail = self.tail_position();
        self.insert_after(tail, value)
    }

    /// Removes the element following `after`, or the head when `after` is `None`.
    pub fn remove_after(&mut self, after: Option<Position>) -> Result<T> {
        let at = after.map_or(0, |p| p.0 + 1);
        self.remove_at(Position(at))
    }

    pub fn remove_at(&mut self, position: Position) -> Result<T> {
        let len = self.items.len();
        self.items.remove(position.0).ok_or(Error::InvalidPosition {
            index: position.0,
            len,
        })
    }

    /// Linear scan for the first element `eq` considers equal to `value`.
    pub fn search<Q, F>(&self, value: &Q, eq: F) -> Option<Position>
    where
        Q: ?Sized,
        F: Fn(&T, &Q) -> bool,
    {
        self.items.iter().position(|t| eq(t, value)).map(Position)
    }

    /// Releases the storage. Elements are dropped; no release hook is involved.
    pub fn clear(&mut self) {
        self.items.clear();
        self.items.shrink_to_fit();
    }

    pub(crate) fn drain(&mut self) -> std::collections::vec_deque::Drain<'_, T> {
        self.items.drain(..)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// LIFO discipline over [`List`]: the top of the stack is the head.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    list: List<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn push(&mut self, value: T) -> Result<()> {
        self.list.insert_after(None, value).map(|_| ())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.list.remove_after(None).ok()
    }

    pub fn peek(&self) -> Option<&T> {
        self.list.head()
    }

    pub fn contains<Q, F>(&self, value: &Q, eq: F) -> bool
    where
        Q: ?Sized,
        F: Fn(&T, &Q) -> bool,
    {
        self.list.search(value, eq).is_some()
    }

    /// Pops down to and including the first element matching `value`, returning the popped
    /// elements top first. Returns `None` and leaves the stack untouched when nothing matches.
    pub fn drain_until<Q, F>(&mut self, value: &Q, eq: F) -> Option<Vec<T>>
    where
        Q: ?Sized,
        F: Fn(&T, &Q) -> bool,
    {
        let depth = self.list.search(value, &eq)?.index() + 1;
        let mut out = Vec::with_capacity(depth);
        for _ in 0..depth {
            out.extend(self.pop());
        }
        Some(out)
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.list.iter()
    }
}

/// FIFO discipline over [`List`]: enqueue at the tail, dequeue from the head.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    list: List<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn enqueue(&mut self, value: T) -> Result<()> {
        self.list.push_back(value).map(|_| ())
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.list.remove_after(None).ok()
    }

    pub fn peek(&self) -> Option<&T> {
        self.list.head()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &List<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn insert_after_none_prepends() {
        let mut list = List::new();
        list.insert_after(None, 2).unwrap();
        list.insert_after(None, 1).unwrap();
        assert_eq!(collect(&list), vec![1, 2]);
        assert_eq!(list.head(), Some(&1));
        assert_eq!(list.tail(), Some(&2));
    }

    #[test]
    fn insert_after_position_places_value_behind_it() {
        let mut list = List::new();
        let first = list.push_back(1).unwrap();
        list.push_back(3).unwrap();
        list.insert_after(Some(first), 2).unwrap();
        assert_eq!(collect(&list), vec![1, 2, 3]);
    }

    #[test]
    fn insert_after_rejects_a_dangling_position() {
        let mut list = List::new();
        list.push_back(1).unwrap();
        let err = list.insert_after(Some(Position(4)), 2).unwrap_err();
        assert!(matches!(err, Error::InvalidPosition { index: 4, len: 1 }));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_after_takes_the_following_element() {
        let mut list = List::new();
        for v in [1, 2, 3] {
            list.push_back(v).unwrap();
        }
        let head = list.head_position().unwrap();
        assert_eq!(list.remove_after(Some(head)).unwrap(), 2);
        assert_eq!(list.remove_after(None).unwrap(), 1);
        assert_eq!(collect(&list), vec![3]);
    }

    #[test]
    fn remove_from_an_empty_list_fails() {
        let mut list: List<i32> = List::new();
        assert!(list.remove_after(None).is_err());
        assert!(list.tail_position().is_none());
    }

    #[test]
    fn search_uses_the_supplied_predicate() {
        let mut list = List::new();
        for v in [10, 21, 32] {
            list.push_back(v).unwrap();
        }
        let pos = list.search(&1, |item, last_digit| item % 10 == *last_digit);
        assert_eq!(pos.map(Position::index), Some(1));
        assert_eq!(list.search(&9, |item, d| item % 10 == *d), None);
    }

    #[test]
    fn next_walks_to_the_end() {
        let mut list = List::new();
        list.push_back('a').unwrap();
        list.push_back('b').unwrap();
        let head = list.head_position().unwrap();
        let second = list.next(head).unwrap();
        assert_eq!(list.get(second), Some(&'b'));
        assert_eq!(list.next(second), None);
    }

    #[test]
    fn stack_is_last_in_first_out() {
        let mut stack = Stack::new();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn stack_drain_until_pops_through_the_match() {
        let mut stack = Stack::new();
        for v in [1, 2, 3, 4] {
            stack.push(v).unwrap();
        }
        assert!(stack.contains(&2, |a, b| a == b));
        assert_eq!(stack.drain_until(&2, |a, b| a == b), Some(vec![4, 3, 2]));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!(stack.drain_until(&9, |a, b| a == b), None);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn queue_is_first_in_first_out() {
        let mut queue = Queue::new();
        assert!(queue.dequeue().is_none());
        queue.enqueue("a").unwrap();
        queue.enqueue("b").unwrap();
        assert_eq!(queue.peek(), Some(&"a"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue(), Some("a"));
        assert_eq!(queue.dequeue(), Some("b"));
        assert!(queue.is_empty());
    }
}
