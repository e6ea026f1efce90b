use core::{fmt, iter::FusedIterator, marker::PhantomData};

use crate::Deque;

/// Front-to-back iterator over shared references, created by [`Deque::iter`].
///
/// Walks the logical positions `front..back` and translates each one to its
/// buffer slot, so a window that wraps past the end of the buffer is visited
/// in order without special casing.
pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(deque: &'a Deque<T>) -> Self {
        Self { deque, front: 0, back: deque.len() }
    }

    #[inline]
    fn get(&self, logical: usize) -> &'a T {
        let deque = self.deque;
        // SAFETY: callers only pass positions in `front..back`, all of them live.
        unsafe { deque.buf[deque.to_buffer_index(logical)].assume_init_ref() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.get(self.front);
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.get(self.back))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

// Not derived: a derive would require `T: Clone`.
impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { deque: self.deque, front: self.front, back: self.back }
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Front-to-back iterator over mutable references, created by [`Deque::iter_mut`].
///
/// Holds the buffer as a raw pointer so that references to distinct slots can
/// be handed out while the iterator itself is still borrowed mutably.
pub struct IterMut<'a, T> {
    slots: *mut T,
    start: usize,
    mask: usize,
    front: usize,
    back: usize,
    marker: PhantomData<&'a mut T>,
}

// SAFETY: an `IterMut` is a `&mut Deque<T>` split into per-slot borrows.
unsafe impl<'a, T: Send> Send for IterMut<'a, T> {}
unsafe impl<'a, T: Sync> Sync for IterMut<'a, T> {}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(deque: &'a mut Deque<T>) -> Self {
        Self {
            slots: deque.buf.as_mut_ptr().cast::<T>(),
            start: deque.start,
            mask: deque.mask(),
            front: 0,
            back: deque.len(),
            marker: PhantomData,
        }
    }

    /// Each logical position is yielded at most once, so the returned
    /// references never alias.
    #[inline]
    unsafe fn get(&mut self, logical: usize) -> &'a mut T {
        let slot = self.start.wrapping_add(logical) & self.mask;
        &mut *self.slots.add(slot)
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: `front` is live and is advanced past before it can be read again.
        let item = unsafe { self.get(self.front) };
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: `back` is live and now lies outside `front..back`.
        Some(unsafe { self.get(self.back) })
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("remaining", &(self.back - self.front)).finish()
    }
}

/// Owning iterator, created by calling `into_iter` on a [`Deque`].
#[derive(Clone, Debug)]
pub struct IntoIter<T>(pub(crate) Deque<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.remove_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.remove_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
