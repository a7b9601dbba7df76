//! Fixed-capacity backing buffer.
//!
//! [`Storage`] owns one allocation of exactly `capacity` slots. It never
//! grows on its own: pushing into a full buffer is a logic error caught by
//! `debug_assert!`. The only way to change capacity is [`Storage::relocate`],
//! which allocates a fresh buffer and moves the live elements across.

use crate::error::ArrayError;

/// Contiguous storage with a caller-controlled slot count.
///
/// Slots `[0, len)` hold live values. Slots `[len, capacity)` are spare
/// capacity of the backing `Vec` and are never read.
pub(crate) struct Storage<T> {
    /// Live elements. The allocation is made once per relocation.
    data: Vec<T>,
    /// Slot count requested at the last relocation.
    capacity: usize,
}

impl<T> Storage<T> {
    /// Allocate an empty buffer with `capacity` slots.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of live elements.
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Allocated slot count.
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether every slot is occupied.
    pub(crate) fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    pub(crate) fn live(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn live_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Place `value` in slot `len`.
    pub(crate) fn push(&mut self, value: T) {
        debug_assert!(!self.is_full(), "push into full storage");
        self.data.push(value);
    }

    /// Shift `[index, len)` one slot right and place `value` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub(crate) fn shift_in(&mut self, index: usize, value: T) {
        debug_assert!(!self.is_full(), "shift into full storage");
        self.data.insert(index, value);
    }

    /// Take the value at `index` and shift `(index, len)` one slot left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub(crate) fn shift_out(&mut self, index: usize) -> T {
        self.data.remove(index)
    }

    /// Consume the buffer, yielding the live elements.
    pub(crate) fn into_live(self) -> Vec<T> {
        self.data
    }

    /// Drop every live element. Capacity is unchanged.
    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }

    /// Move the live elements into a new buffer of exactly `new_capacity`
    /// slots and release the old one.
    ///
    /// Returns the number of elements moved, or
    /// `Err(ArrayError::InvalidCapacity)` if `new_capacity` is zero or
    /// smaller than the live length. On error nothing changes.
    pub(crate) fn relocate(&mut self, new_capacity: usize) -> Result<usize, ArrayError> {
        let len = self.data.len();
        if new_capacity == 0 || new_capacity < len {
            return Err(ArrayError::InvalidCapacity {
                requested: new_capacity,
                length: len,
            });
        }
        let mut next = Vec::with_capacity(new_capacity);
        next.extend(self.data.drain(..));
        self.data = next;
        self.capacity = new_capacity;
        Ok(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, len: usize) -> Storage<usize> {
        let mut s = Storage::new(capacity);
        for i in 0..len {
            s.push(i);
        }
        s
    }

    #[test]
    fn new_storage_is_empty() {
        let s: Storage<u8> = Storage::new(4);
        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), 4);
        assert!(!s.is_full());
    }

    #[test]
    fn push_until_full() {
        let s = filled(3, 3);
        assert!(s.is_full());
        assert_eq!(s.live(), &[0, 1, 2]);
    }

    #[test]
    fn shift_in_moves_tail_right() {
        let mut s = filled(4, 3);
        s.shift_in(1, 9);
        assert_eq!(s.live(), &[0, 9, 1, 2]);
    }

    #[test]
    fn shift_out_moves_tail_left() {
        let mut s = filled(4, 4);
        assert_eq!(s.shift_out(1), 1);
        assert_eq!(s.live(), &[0, 2, 3]);
        assert_eq!(s.capacity(), 4);
    }

    #[test]
    fn relocate_preserves_order() {
        let mut s = filled(2, 2);
        assert_eq!(s.relocate(8), Ok(2));
        assert_eq!(s.capacity(), 8);
        assert_eq!(s.live(), &[0, 1]);
        assert_eq!(s.relocate(2), Ok(2));
        assert_eq!(s.capacity(), 2);
    }

    #[test]
    fn relocate_below_length_is_rejected() {
        let mut s = filled(4, 3);
        assert_eq!(
            s.relocate(2),
            Err(ArrayError::InvalidCapacity {
                requested: 2,
                length: 3
            })
        );
        // Unchanged on error.
        assert_eq!(s.capacity(), 4);
        assert_eq!(s.live(), &[0, 1, 2]);
    }

    #[test]
    fn relocate_to_zero_is_rejected() {
        let mut s: Storage<u8> = Storage::new(1);
        assert!(matches!(
            s.relocate(0),
            Err(ArrayError::InvalidCapacity { requested: 0, .. })
        ));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut s = filled(4, 4);
        s.clear();
        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), 4);
    }
}
