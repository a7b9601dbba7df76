//! Concatenation (`+`) and repetition (`*`) operators.
//!
//! The binary forms borrow both operands and return a new array; the
//! compound-assignment forms replace the left operand.

use std::ops::{Add, AddAssign, Mul, MulAssign};

use crate::array::GrowableArray;

impl<T: Clone> Add<&GrowableArray<T>> for &GrowableArray<T> {
    type Output = GrowableArray<T>;

    fn add(self, rhs: &GrowableArray<T>) -> GrowableArray<T> {
        self.concat(rhs)
    }
}

impl<T: Clone> AddAssign<&GrowableArray<T>> for GrowableArray<T> {
    fn add_assign(&mut self, rhs: &GrowableArray<T>) {
        self.extend(rhs.iter().cloned());
    }
}

impl<T: Clone> Mul<isize> for &GrowableArray<T> {
    type Output = GrowableArray<T>;

    fn mul(self, n: isize) -> GrowableArray<T> {
        self.repeat(n)
    }
}

impl<T: Clone> MulAssign<isize> for GrowableArray<T> {
    fn mul_assign(&mut self, n: isize) {
        *self = self.repeat(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_array(range: std::ops::Range<i32>) -> GrowableArray<i32> {
        range.collect()
    }

    #[test]
    fn add_concatenates() {
        let a = range_array(0..5);
        let b = range_array(5..25);
        let c = &a + &b;
        assert_eq!(c, (0..25).collect::<Vec<_>>());
        assert_eq!(a.len(), 5);
        assert_eq!(b.len(), 20);
    }

    #[test]
    fn add_assign_extends() {
        let mut a = range_array(0..2);
        a += &range_array(2..4);
        assert_eq!(a, [0, 1, 2, 3]);
    }

    #[test]
    fn mul_repeats() {
        let a = range_array(0..5);
        let expected: Vec<i32> = (0..5).cycle().take(25).collect();
        assert_eq!(&a * 5, expected);
        assert!((&a * 0).is_empty());
        assert!((&a * -3).is_empty());
    }

    #[test]
    fn mul_assign_replaces() {
        let mut a = range_array(0..5);
        a *= 5;
        assert_eq!(a.len(), 25);
        assert_eq!(a.get(-1), Ok(&4));
        a *= 0;
        assert!(a.is_empty());
    }
}
