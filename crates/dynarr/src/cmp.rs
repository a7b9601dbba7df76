//! Value-semantics comparison.
//!
//! Arrays compare element-wise against other arrays and against any
//! ordered sequence (`[T]`, `Vec<T>`, `[T; N]`), in both directions.
//!
//! Ordering is lexicographic: the first position whose elements differ
//! decides by `<` (or `>`); if one sequence is a prefix of the other the
//! shorter one is less. The non-strict operators are derived by negation,
//! `a <= b` as `!(a > b)` and `a >= b` as `!(a < b)`, so for partially
//! ordered elements (NaN) `<=` can hold where neither `<` nor `==` does.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::array::GrowableArray;

fn seq_eq<'a, 'b, A, B, I, J>(a: I, b: J) -> bool
where
    A: PartialEq<B> + 'a,
    B: 'b,
    I: IntoIterator<Item = &'a A>,
    J: IntoIterator<Item = &'b B>,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) if x == y => {}
            (None, None) => return true,
            _ => return false,
        }
    }
}

fn seq_lt<'a, 'b, A, B, I, J>(a: I, b: J) -> bool
where
    A: PartialOrd<B> + 'a,
    B: 'b,
    I: IntoIterator<Item = &'a A>,
    J: IntoIterator<Item = &'b B>,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => {
                if x != y {
                    return x < y;
                }
            }
            (None, Some(_)) => return true,
            _ => return false,
        }
    }
}

fn seq_gt<'a, 'b, A, B, I, J>(a: I, b: J) -> bool
where
    A: PartialOrd<B> + 'a,
    B: 'b,
    I: IntoIterator<Item = &'a A>,
    J: IntoIterator<Item = &'b B>,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => {
                if x != y {
                    return x > y;
                }
            }
            (Some(_), None) => return true,
            _ => return false,
        }
    }
}

fn seq_partial_cmp<A: PartialOrd<B>, B>(a: &[A], b: &[B]) -> Option<Ordering> {
    if seq_lt(a, b) {
        Some(Ordering::Less)
    } else if seq_gt(a, b) {
        Some(Ordering::Greater)
    } else if seq_eq(a, b) {
        Some(Ordering::Equal)
    } else {
        None
    }
}

impl<T> GrowableArray<T> {
    /// Same length and every positional pair equal.
    pub fn equals<'b, U, I>(&self, other: I) -> bool
    where
        T: PartialEq<U>,
        U: 'b,
        I: IntoIterator<Item = &'b U>,
    {
        seq_eq(self.iter(), other)
    }

    /// Lexicographically less than `other`.
    pub fn less_than<'b, U, I>(&self, other: I) -> bool
    where
        T: PartialOrd<U>,
        U: 'b,
        I: IntoIterator<Item = &'b U>,
    {
        seq_lt(self.iter(), other)
    }

    /// Not greater than `other`.
    pub fn less_equal<'b, U, I>(&self, other: I) -> bool
    where
        T: PartialOrd<U>,
        U: 'b,
        I: IntoIterator<Item = &'b U>,
    {
        !seq_gt(self.iter(), other)
    }

    /// Lexicographically greater than `other`.
    pub fn greater_than<'b, U, I>(&self, other: I) -> bool
    where
        T: PartialOrd<U>,
        U: 'b,
        I: IntoIterator<Item = &'b U>,
    {
        seq_gt(self.iter(), other)
    }

    /// Not less than `other`.
    pub fn greater_equal<'b, U, I>(&self, other: I) -> bool
    where
        T: PartialOrd<U>,
        U: 'b,
        I: IntoIterator<Item = &'b U>,
    {
        !seq_lt(self.iter(), other)
    }
}

impl<T: PartialEq<U>, U> PartialEq<GrowableArray<U>> for GrowableArray<T> {
    fn eq(&self, other: &GrowableArray<U>) -> bool {
        seq_eq(self.live(), other.live())
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: PartialOrd<U>, U> PartialOrd<GrowableArray<U>> for GrowableArray<T> {
    fn partial_cmp(&self, other: &GrowableArray<U>) -> Option<Ordering> {
        seq_partial_cmp(self.live(), other.live())
    }

    fn lt(&self, other: &GrowableArray<U>) -> bool {
        seq_lt(self.live(), other.live())
    }

    fn le(&self, other: &GrowableArray<U>) -> bool {
        !seq_gt(self.live(), other.live())
    }

    fn gt(&self, other: &GrowableArray<U>) -> bool {
        seq_gt(self.live(), other.live())
    }

    fn ge(&self, other: &GrowableArray<U>) -> bool {
        !seq_lt(self.live(), other.live())
    }
}

impl<T: Ord> Ord for GrowableArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.live().cmp(other.live())
    }
}

impl<T: Hash> Hash for GrowableArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.live().hash(state);
    }
}

/// Equality and ordering against a foreign sequence type, both ways round.
macro_rules! impl_seq_cmp {
    ($([$($gen:tt)*] $seq:ty;)*) => {$(
        impl<T: PartialEq<U>, U, $($gen)*> PartialEq<$seq> for GrowableArray<T> {
            fn eq(&self, other: &$seq) -> bool {
                seq_eq(self.live(), &other[..])
            }
        }

        impl<T, U: PartialEq<T>, $($gen)*> PartialEq<GrowableArray<T>> for $seq {
            fn eq(&self, other: &GrowableArray<T>) -> bool {
                seq_eq(&self[..], other.live())
            }
        }

        impl<T: PartialOrd<U>, U, $($gen)*> PartialOrd<$seq> for GrowableArray<T> {
            fn partial_cmp(&self, other: &$seq) -> Option<Ordering> {
                seq_partial_cmp(self.live(), &other[..])
            }
            fn lt(&self, other: &$seq) -> bool {
                seq_lt(self.live(), &other[..])
            }
            fn le(&self, other: &$seq) -> bool {
                !seq_gt(self.live(), &other[..])
            }
            fn gt(&self, other: &$seq) -> bool {
                seq_gt(self.live(), &other[..])
            }
            fn ge(&self, other: &$seq) -> bool {
                !seq_lt(self.live(), &other[..])
            }
        }

        impl<T, U: PartialOrd<T>, $($gen)*> PartialOrd<GrowableArray<T>> for $seq {
            fn partial_cmp(&self, other: &GrowableArray<T>) -> Option<Ordering> {
                seq_partial_cmp(&self[..], other.live())
            }
            fn lt(&self, other: &GrowableArray<T>) -> bool {
                seq_lt(&self[..], other.live())
            }
            fn le(&self, other: &GrowableArray<T>) -> bool {
                !seq_gt(&self[..], other.live())
            }
            fn gt(&self, other: &GrowableArray<T>) -> bool {
                seq_gt(&self[..], other.live())
            }
            fn ge(&self, other: &GrowableArray<T>) -> bool {
                !seq_lt(&self[..], other.live())
            }
        }
    )*};
}

impl_seq_cmp! {
    [] [U];
    [] Vec<U>;
    [const N: usize] [U; N];
}
