use std::collections::VecDeque;

/// A finite, ordered, mutable collection whose elements are addressed by position.
///
/// Positions are plain `usize` offsets from the front: the successor of `pos` is `pos + 1` and
/// the distance between two positions is their difference. The algorithms in this crate only
/// ever read single elements through [`Sequence::get`] and reorder them through
/// [`Sequence::swap`], so every implementor keeps exactly its original elements, also when a
/// caller supplied predicate panics half way through.
pub trait Sequence {
    type Item;

    /// Whether `get` on an arbitrary position is O(1). Sequences that have to walk to a position
    /// set this to `false` and the partition point search falls back to a single linear pass.
    const RANDOM_ACCESS: bool = true;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Panics if `pos >= self.len()`.
    fn get(&self, pos: usize) -> &Self::Item;

    /// Panics if either position is out of bounds.
    fn swap(&mut self, a: usize, b: usize);
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, pos: usize) -> &T {
        &self[pos]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, pos: usize) -> &T {
        &self[pos]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, pos: usize) -> &T {
        &self[pos]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, pos: usize) -> &T {
        &self[pos]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    const RANDOM_ACCESS: bool = S::RANDOM_ACCESS;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, pos: usize) -> &S::Item {
        (**self).get(pos)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        (**self).swap(a, b);
    }
}
