//! A slice paired with the index where one sorted run ends and the next begins.

/// A sequence (`S`) divided in two at index `at`.
#[derive(Clone, Copy, Debug)]
pub struct Split<S> {
    pub seq: S,
    pub at: usize,
}

impl<S> Split<S> {
    pub fn new(seq: S, at: usize) -> Self {
        Split { seq, at }
    }

    pub fn split<T>(&self) -> (&[T], &[T])
    where
        S: AsRef<[T]>,
    {
        self.seq.as_ref().split_at(self.at)
    }

    #[cfg(test)]
    pub fn is_each_side_sorted_by<T>(&self, is_less: &mut impl FnMut(&T, &T) -> bool) -> bool
    where
        S: AsRef<[T]>,
    {
        use crate::test_utils::is_sorted_by;

        let (l, r) = self.split();
        is_sorted_by(l, is_less) && is_sorted_by(r, is_less)
    }

    #[cfg(test)]
    pub fn split_mut<T>(&mut self) -> (&mut [T], &mut [T])
    where
        S: AsMut<[T]>,
    {
        self.seq.as_mut().split_at_mut(self.at)
    }

    #[cfg(test)]
    pub fn map_seq<R>(self, f: impl FnOnce(S) -> R) -> Split<R> {
        Split {
            seq: f(self.seq),
            at: self.at,
        }
    }
}
