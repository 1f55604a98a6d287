use core::fmt::{Debug, Formatter};

/// A growable, index-addressable array.
///
/// This is a thin layer over `Vec<T>`. It exists so that the heap code can be
/// written purely in terms of size / append / get / set / remove-last, and so
/// that every out-of-range access fails loudly with a useful message.
#[derive(Clone, Eq, PartialEq)]
pub struct DynArray<T> {
    items: Vec<T>,
}

impl<T> DynArray<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements currently stored.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    fn check_index(&self, index: usize) {
        let len = self.items.len();
        assert!(index < len, "index {} out of range for array of size {}", index, len);
    }

    /// Adds an element at the logical end of the array.
    pub fn append(&mut self, value: T) {
        self.items.push(value);
    }

    /// Inserts an element before `index`, shifting later elements up.
    /// `index == size()` appends.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.items.len(),
            "insert index {} out of range for array of size {}",
            index,
            self.items.len()
        );
        self.items.insert(index, value);
    }

    pub fn get(&self, index: usize) -> &T {
        self.check_index(index);
        &self.items[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.check_index(index);
        &mut self.items[index]
    }

    /// Returns the element at the end of the array, if any.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Stores `value` at `index` and returns the value it displaced.
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.check_index(index);
        core::mem::replace(&mut self.items[index], value)
    }

    /// Removes the last element. Returns `None` if the array is empty.
    pub fn remove_last(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Exchanges two elements in place.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.check_index(a);
        self.check_index(b);
        self.items.swap(a, b);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for DynArray<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        fmt.debug_list().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_size() {
        let mut a: DynArray<u32> = DynArray::with_capacity(4);
        assert!(a.is_empty());
        assert!(a.capacity() >= 4);
        for i in 0..10 {
            a.append(i * 10);
            assert_eq!(a.size(), i as usize + 1);
        }
        // grows past the initial capacity
        assert!(a.capacity() >= 10);
        assert_eq!(*a.get(0), 0);
        assert_eq!(*a.get(9), 90);
        assert_eq!(a.last(), Some(&90));
    }

    #[test]
    fn set_returns_displaced_value() {
        let mut a = DynArray::new();
        a.append("a");
        a.append("b");
        assert_eq!(a.set(0, "x"), "a");
        assert_eq!(a.set(1, "y"), "b");
        assert_eq!(a.as_slice(), &["x", "y"]);
    }

    #[test]
    fn remove_last() {
        let mut a = DynArray::new();
        assert_eq!(a.remove_last(), None::<i32>);
        a.append(1);
        a.append(2);
        assert_eq!(a.remove_last(), Some(2));
        assert_eq!(a.size(), 1);
        assert_eq!(a.remove_last(), Some(1));
        assert!(a.is_empty());
    }

    #[test]
    fn insert_positions() {
        let mut a = DynArray::new();
        a.insert(0, 3);
        a.insert(0, 1);
        a.insert(1, 2);
        a.insert(3, 4);
        assert_eq!(a.iter().cloned().collect::<Vec<i32>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn swap_and_get_mut() {
        let mut a = DynArray::new();
        a.append(1);
        a.append(2);
        a.append(3);
        a.swap(0, 2);
        *a.get_mut(1) += 10;
        assert_eq!(a.as_slice(), &[3, 12, 1]);
        assert_eq!(format!("{:?}", a), "[3, 12, 1]");
        a.clear();
        assert_eq!(a.size(), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_out_of_range() {
        let mut a = DynArray::new();
        a.append(1);
        a.get(1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn swap_out_of_range() {
        let mut a = DynArray::new();
        a.append(1);
        a.swap(0, 1);
    }
}
