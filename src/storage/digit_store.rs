// ============================================================================
// Digit Store
// Growable, index-addressable buffer of single decimal digits
// ============================================================================

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

/// Growable sequence of decimal digits (0-9), one byte each.
///
/// The store keeps its own notion of allocated capacity so the growth policy
/// is deterministic: the first allocation reserves [`DigitStore::MIN_CAPACITY`]
/// slots and every later reallocation doubles until the request fits.
/// Existing digits are moved into the new buffer and the old one is released.
///
/// # Preconditions
/// `get`, `set`, indexing, `insert` and `swap_elements` panic on an
/// out-of-range index. `erase` with an out-of-range index does nothing.
///
/// # Example
/// ```
/// use decimal_bigint::storage::DigitStore;
///
/// let mut store = DigitStore::new();
/// store.push(3);
/// store.push(1);
/// store.insert(1, 2);
/// assert_eq!(store.as_slice(), &[3, 2, 1]);
/// assert_eq!(store.capacity(), DigitStore::MIN_CAPACITY);
/// ```
pub struct DigitStore {
    data: Vec<u8>,
    allocated: usize,
}

impl DigitStore {
    /// Smallest capacity reserved by the first reallocation.
    pub const MIN_CAPACITY: usize = 8;

    /// Multiplier applied to the capacity on every reallocation.
    pub const GROWTH_FACTOR: usize = 2;

    /// Create an empty store without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            allocated: 0,
        }
    }

    /// Create an empty store with room for `capacity` digits.
    ///
    /// Use this when the final length is known up front (e.g. parsing).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            allocated: capacity,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Allocated capacity. Always `>= len()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.allocated
    }

    /// Digit at `index`.
    ///
    /// # Panics
    /// If `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.check_index(index);
        self.data[index]
    }

    /// Overwrite the digit at `index`.
    ///
    /// # Panics
    /// If `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: u8) {
        self.check_index(index);
        debug_assert!(value <= 9, "digit out of range: {}", value);
        self.data[index] = value;
    }

    /// Highest-index digit, if any.
    #[inline]
    pub fn last(&self) -> Option<u8> {
        self.data.last().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Iterate digits from index 0 upwards.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u8>> {
        self.data.iter().copied()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Append a digit at the end. Amortized O(1).
    #[inline]
    pub fn push(&mut self, value: u8) {
        debug_assert!(value <= 9, "digit out of range: {}", value);
        self.grow_if_needed(1);
        self.data.push(value);
    }

    /// Insert `value` at `index`, shifting later digits one slot right.
    ///
    /// # Panics
    /// If `index > len()`.
    pub fn insert(&mut self, index: usize, value: u8) {
        assert!(
            index <= self.len(),
            "insert index {} out of range for digit store of length {}",
            index,
            self.len()
        );
        debug_assert!(value <= 9, "digit out of range: {}", value);
        self.grow_if_needed(1);
        self.data.insert(index, value);
    }

    /// Remove the digit at `index`, shifting later digits one slot left.
    ///
    /// Does nothing when `index >= len()`.
    pub fn erase(&mut self, index: usize) {
        if index >= self.len() {
            return;
        }
        self.data.remove(index);
    }

    /// Drop every digit. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Exchange the digits at `i` and `j`.
    ///
    /// # Panics
    /// If either index is out of range.
    #[inline]
    pub fn swap_elements(&mut self, i: usize, j: usize) {
        self.check_index(i);
        self.check_index(j);
        self.data.swap(i, j);
    }

    /// Exchange the whole contents (digits and capacity) with `other`.
    #[inline]
    pub fn swap_with(&mut self, other: &mut DigitStore) {
        mem::swap(self, other);
    }

    // ========================================================================
    // Growth
    // ========================================================================

    /// Reallocate so that `additional` more digits fit.
    fn grow_if_needed(&mut self, additional: usize) {
        let required = self.len() + additional;
        if required <= self.allocated {
            return;
        }

        let mut new_capacity = self.allocated.max(Self::MIN_CAPACITY);
        while required > new_capacity {
            new_capacity *= Self::GROWTH_FACTOR;
        }

        tracing::trace!(
            len = self.len(),
            old_capacity = self.allocated,
            new_capacity,
            "digit store reallocating"
        );

        let mut next = Vec::with_capacity(new_capacity);
        next.append(&mut self.data);
        self.data = next;
        self.allocated = new_capacity;
    }

    #[inline]
    fn check_index(&self, index: usize) {
        assert!(
            index < self.len(),
            "index {} out of range for digit store of length {}",
            index,
            self.len()
        );
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DigitStore {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DigitStore {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.allocated);
        data.extend_from_slice(&self.data);
        Self {
            data,
            allocated: self.allocated,
        }
    }
}

// Contents only; two stores holding the same digits are equal regardless of capacity.
impl PartialEq for DigitStore {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for DigitStore {}

impl Index<usize> for DigitStore {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &u8 {
        self.check_index(index);
        &self.data[index]
    }
}

impl IndexMut<usize> for DigitStore {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        self.check_index(index);
        &mut self.data[index]
    }
}

impl FromIterator<u8> for DigitStore {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut store = Self::new();
        for value in iter {
            store.push(value);
        }
        store
    }
}

impl From<&[u8]> for DigitStore {
    fn from(values: &[u8]) -> Self {
        let mut store = Self::with_capacity(values.len());
        for &value in values {
            store.push(value);
        }
        store
    }
}

impl<'a> IntoIterator for &'a DigitStore {
    type Item = u8;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u8>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for DigitStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitStore")
            .field("digits", &self.data)
            .field("capacity", &self.allocated)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(values: &[u8]) -> DigitStore {
        DigitStore::from(values)
    }

    #[test]
    fn test_new_is_empty() {
        let store = DigitStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.capacity(), 0);
    }

    #[test]
    fn test_first_push_allocates_minimum() {
        let mut store = DigitStore::new();
        store.push(7);
        assert_eq!(store.capacity(), DigitStore::MIN_CAPACITY);
        assert_eq!(store.get(0), 7);
    }

    #[test]
    fn test_growth_doubles() {
        let mut store = DigitStore::new();
        for i in 0..8 {
            store.push(i % 10);
        }
        assert_eq!(store.capacity(), 8);

        store.push(1);
        assert_eq!(store.capacity(), 16);

        for _ in 0..8 {
            store.push(2);
        }
        assert_eq!(store.len(), 17);
        assert_eq!(store.capacity(), 32);
    }

    #[test]
    fn test_small_preallocation_grows_to_minimum() {
        let mut store = DigitStore::with_capacity(2);
        store.push(1);
        store.push(2);
        assert_eq!(store.capacity(), 2);

        store.push(3);
        assert_eq!(store.capacity(), 8);
        assert_eq!(store.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_insert_shifts_right() {
        let mut store = store_of(&[1, 2, 4]);
        store.insert(2, 3);
        assert_eq!(store.as_slice(), &[1, 2, 3, 4]);

        store.insert(0, 0);
        assert_eq!(store.as_slice(), &[0, 1, 2, 3, 4]);

        // Insert at len appends
        store.insert(5, 5);
        assert_eq!(store.as_slice(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "insert index 4 out of range")]
    fn test_insert_past_end_panics() {
        let mut store = store_of(&[1, 2, 3]);
        store.insert(4, 9);
    }

    #[test]
    fn test_erase_shifts_left() {
        let mut store = store_of(&[1, 2, 3, 4]);
        store.erase(1);
        assert_eq!(store.as_slice(), &[1, 3, 4]);

        store.erase(2);
        assert_eq!(store.as_slice(), &[1, 3]);
    }

    #[test]
    fn test_erase_out_of_range_is_noop() {
        let mut store = store_of(&[1, 2]);
        store.erase(2);
        store.erase(100);
        assert_eq!(store.as_slice(), &[1, 2]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range_panics() {
        let store = store_of(&[1]);
        store.get(1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_out_of_range_panics() {
        let mut store = DigitStore::new();
        store.set(0, 1);
    }

    #[test]
    fn test_set_and_index() {
        let mut store = store_of(&[1, 2, 3]);
        store.set(1, 9);
        store[2] = 8;
        assert_eq!(store[0], 1);
        assert_eq!(store[1], 9);
        assert_eq!(store.get(2), 8);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut store: DigitStore = (0..10).collect();
        let capacity = store.capacity();
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.capacity(), capacity);
    }

    #[test]
    fn test_swap_elements() {
        let mut store = store_of(&[1, 2, 3]);
        store.swap_elements(0, 2);
        assert_eq!(store.as_slice(), &[3, 2, 1]);
    }

    #[test]
    fn test_swap_with() {
        let mut a = store_of(&[1, 2, 3]);
        let mut b: DigitStore = (0..9).collect();
        let b_capacity = b.capacity();

        a.swap_with(&mut b);
        assert_eq!(a.len(), 9);
        assert_eq!(a.capacity(), b_capacity);
        assert_eq!(b.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_clone_preserves_capacity() {
        let store: DigitStore = (0..9).collect();
        let copy = store.clone();
        assert_eq!(copy, store);
        assert_eq!(copy.capacity(), store.capacity());
    }

    #[test]
    fn test_equality_ignores_capacity() {
        let a = DigitStore::from(&[1u8, 2][..]);
        let mut b = DigitStore::with_capacity(64);
        b.push(1);
        b.push(2);
        assert_eq!(a, b);
    }

    quickcheck::quickcheck! {
        fn prop_push_preserves_order_and_capacity(values: Vec<u8>) -> bool {
            let digits: Vec<u8> = values.iter().map(|v| v % 10).collect();
            let mut store = DigitStore::new();
            for &d in &digits {
                store.push(d);
                if store.capacity() < store.len() {
                    return false;
                }
            }
            store.as_slice() == digits.as_slice()
        }

        fn prop_insert_then_erase_restores(values: Vec<u8>, at: usize) -> bool {
            let digits: Vec<u8> = values.iter().map(|v| v % 10).collect();
            let mut store: DigitStore = digits.iter().copied().collect();
            let index = at % (digits.len() + 1);
            store.insert(index, 5);
            store.erase(index);
            store.as_slice() == digits.as_slice()
        }
    }
}
