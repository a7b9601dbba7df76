//! Iteration, collection and formatting for [`GrowableArray`].

use std::fmt;

use crate::array::GrowableArray;

/// Owning iterator over the elements of a [`GrowableArray`].
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_live().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = GrowableArray::new();
        arr.extend(iter);
        arr
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        GrowableArray::extend(self, iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        GrowableArray::extend(self, iter.into_iter().copied());
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for GrowableArray<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `[a, b, c]` using each element's `Display`.
impl<T: fmt::Display> fmt::Display for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_and_into_iter() {
        let arr: GrowableArray<i32> = (0..5).collect();
        assert_eq!(arr.len(), 5);
        assert_eq!(arr.capacity(), 8);
        let back: Vec<i32> = arr.into_iter().collect();
        assert_eq!(back, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn into_iter_reverses() {
        let arr = GrowableArray::from([1, 2, 3]);
        let rev: Vec<_> = arr.into_iter().rev().collect();
        assert_eq!(rev, vec![3, 2, 1]);
    }

    #[test]
    fn borrowed_iteration() {
        let mut arr = GrowableArray::from(vec![1, 2, 3]);
        for v in &mut arr {
            *v += 1;
        }
        let sum: i32 = (&arr).into_iter().sum();
        assert_eq!(sum, 9);
    }

    #[test]
    fn extend_by_reference() {
        let mut arr = GrowableArray::from([1]);
        let more = [2, 3];
        Extend::extend(&mut arr, more.iter());
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.get(-1), Ok(&3));
    }

    #[test]
    fn display_matches_list_rendering() {
        let arr: GrowableArray<i32> = (0..5).collect();
        assert_eq!(arr.to_string(), "[0, 1, 2, 3, 4]");
        let empty: GrowableArray<i32> = GrowableArray::new();
        assert_eq!(empty.to_string(), "[]");
    }

    #[test]
    fn debug_uses_element_debug() {
        let arr = GrowableArray::from(["a", "b"]);
        assert_eq!(format!("{arr:?}"), r#"["a", "b"]"#);
    }
}
