//! A double-ended queue backed by one contiguous, circularly indexed buffer.
//!
//! [`Deque`] keeps its elements in a buffer whose length is always a power of
//! two. Two offsets mark the physical slots of the first and the last live
//! element, and every logical index is translated to a physical slot by
//! adding the start offset and masking with `capacity - 1`:
//!
//! ```text
//!            end        start
//!             |           |
//!             v           v
//! +---+---+---+---+---+---+---+---+
//! | 5 | 6 | 7 |   |   | 0 | 1 | 2 |   <- physical slots
//! +---+---+---+---+---+---+---+---+
//!   logical order: 0 1 2 5 6 7
//! ```
//!
//! Pushing and popping at either end is amortized *O(1)*. Inserting or
//! removing in the middle moves whichever side of the insertion point is
//! shorter, so it costs at most half the length of the deque.
//!
//! ```
//! use circular_deque::Deque;
//!
//! let mut deque = Deque::new();
//! assert_eq!(deque.capacity(), 16);
//!
//! deque.add(1);
//! deque.add_front(-1);
//! assert_eq!(deque, [-1, 1]);
//!
//! deque.insert(1, 0).unwrap();
//! assert_eq!(deque, [-1, 0, 1]);
//! assert_eq!(deque.remove_back(), Ok(1));
//! ```
//!
//! Iterators borrow the deque, so it cannot be changed structurally while an
//! iteration is in progress. The deque carries no locking of its own; share
//! it between threads only behind external synchronization.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Index, IndexMut},
    ptr, slice,
};

mod error;
mod iter;


pub use error::{Error, Result};
pub use iter::{IntoIter, Iter, IterMut};

/// Capacity of a deque created by [`Deque::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Largest capacity a deque will ever allocate. Keeping it below `isize::MAX`
/// lets offset deltas travel as `isize`.
pub const MAX_CAPACITY: usize = 1 << (usize::BITS - 2);

const CAPACITY_OVERFLOW: &str = "capacity overflow";
const EMPTY: &str = "the deque is empty";

/// Returns the smallest power of two that is `>= requested`, with a minimum
/// of 1, or `None` if that would exceed [`MAX_CAPACITY`].
#[inline]
fn round_capacity(requested: usize) -> Option<usize> {
    if requested > MAX_CAPACITY {
        None
    } else {
        Some(requested.max(1).next_power_of_two())
    }
}

/// A double-ended queue over a circular buffer. See the [crate docs](crate)
/// for the layout.
pub struct Deque<T> {
    buf: Box<[MaybeUninit<T>]>,
    // physical slot of the front element
    start: usize,
    // physical slot of the back element; one before `start` when empty
    end: usize,
    len: usize,
}

/// Runs the destructors of a slice of live elements when dropped, so the
/// second half of a split window is still dropped if the first half panics.
struct Dropper<T>(*mut [T]);

impl<T> Drop for Dropper<T> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.0) }
    }
}

impl<T> Deque<T> {
    /// Creates an empty deque with room for [`DEFAULT_CAPACITY`] elements.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty deque whose capacity is `cap` rounded up to a power of
    /// two (at least 1).
    ///
    /// # Panics
    /// Panics if the rounded capacity would exceed [`MAX_CAPACITY`].
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        match Self::try_with_capacity(cap) {
            Ok(deque) => deque,
            Err(err) => panic!("{err}"),
        }
    }

    /// Like [`with_capacity`](Self::with_capacity), but reports an oversized
    /// request as [`Error::InvalidArgument`].
    pub fn try_with_capacity(cap: usize) -> Result<Self> {
        let cap = round_capacity(cap).ok_or(Error::InvalidArgument(CAPACITY_OVERFLOW))?;
        Ok(Self { buf: Self::alloc_buffer(cap), start: 0, end: cap - 1, len: 0 })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the next insertion has to grow the buffer.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Moves the elements into a new buffer of `new_capacity` rounded up to a
    /// power of two. Both growing and shrinking are allowed, as long as every
    /// live element still fits.
    ///
    /// Fails with [`Error::InvalidState`] if `new_capacity < self.len()` and
    /// with [`Error::InvalidArgument`] if the rounded capacity would exceed
    /// [`MAX_CAPACITY`].
    pub fn set_capacity(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity < self.len {
            return Err(Error::InvalidState("capacity cannot be set below the current length"));
        }
        let new_capacity =
            round_capacity(new_capacity).ok_or(Error::InvalidArgument(CAPACITY_OVERFLOW))?;
        if new_capacity != self.capacity() {
            self.resize_buffer(new_capacity);
        }
        Ok(())
    }

    /// Makes sure at least `additional` more elements fit without another
    /// reallocation.
    ///
    /// # Panics
    /// Panics if the required capacity would exceed [`MAX_CAPACITY`].
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.ensure_capacity_for(additional);
    }

    #[inline]
    fn ensure_capacity_for(&mut self, additional: usize) {
        let required = self.len.checked_add(additional).expect(CAPACITY_OVERFLOW);
        if required > self.capacity() {
            match round_capacity(required) {
                Some(new_capacity) => self.resize_buffer(new_capacity),
                None => panic!("{CAPACITY_OVERFLOW}"),
            }
        }
    }

    fn alloc_buffer(cap: usize) -> Box<[MaybeUninit<T>]> {
        let mut buf = Vec::with_capacity(cap);
        // SAFETY: `MaybeUninit<T>` needs no initialization.
        unsafe { buf.set_len(cap) };
        buf.into_boxed_slice()
    }

    /// Copies the live elements, in logical order, to the front of a fresh
    /// buffer of `new_capacity` slots.
    #[cold]
    fn resize_buffer(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity.is_power_of_two() && new_capacity >= self.len);

        let mut buf = Self::alloc_buffer(new_capacity);
        let (a, b) = self.as_slices();
        // SAFETY: the new buffer has room for `self.len == a.len() + b.len()`
        // elements and is a separate allocation. The old buffer only holds
        // `MaybeUninit`s, so dropping it below does not drop the moved elements.
        unsafe {
            let dst = buf.as_mut_ptr().cast::<T>();
            ptr::copy_nonoverlapping(a.as_ptr(), dst, a.len());
            ptr::copy_nonoverlapping(b.as_ptr(), dst.add(a.len()), b.len());
        }

        self.buf = buf;
        self.start = 0;
        self.end = self.len.wrapping_sub(1) & (new_capacity - 1);
        self.assert_offsets();
    }

    #[inline]
    fn mask(&self) -> usize {
        self.capacity() - 1
    }

    /// Translates a logical index to its physical slot. `logical` may run past
    /// `capacity`, it is wrapped like any other index.
    #[inline]
    fn to_buffer_index(&self, logical: usize) -> usize {
        self.start.wrapping_add(logical) & self.mask()
    }

    /// Moves the start offset by `delta` slots and returns the new offset.
    #[inline]
    fn shift_start(&mut self, delta: isize) -> usize {
        self.start = self.start.wrapping_add_signed(delta) & self.mask();
        self.start
    }

    /// Moves the start offset by `delta` slots and returns the old offset.
    #[inline]
    fn pre_shift_start(&mut self, delta: isize) -> usize {
        let old = self.start;
        self.shift_start(delta);
        old
    }

    /// Moves the end offset by `delta` slots and returns the new offset.
    #[inline]
    fn shift_end(&mut self, delta: isize) -> usize {
        self.end = self.end.wrapping_add_signed(delta) & self.mask();
        self.end
    }

    /// Moves the end offset by `delta` slots and returns the old offset.
    #[inline]
    fn pre_shift_end(&mut self, delta: isize) -> usize {
        let old = self.end;
        self.shift_end(delta);
        old
    }

    #[inline]
    fn assert_offsets(&self) {
        debug_assert_eq!(
            self.end,
            self.to_buffer_index(self.len.wrapping_sub(1)),
            "end offset drifted away from start + len"
        );
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, len: self.len })
        }
    }

    #[inline]
    fn check_insert_index(&self, index: usize) -> Result<()> {
        if index <= self.len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, len: self.len })
        }
    }

    // this will never underflow, as self.capacity() >= self.len is guaranteed.
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.start <= self.capacity() - self.len
    }

    /// Returns the live elements as two slices in logical order. The second
    /// slice is empty unless the elements wrap around the end of the buffer.
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let ptr = self.buf.as_ptr().cast::<T>();
        // SAFETY: both spans cover exactly the `self.len` initialized slots.
        unsafe {
            if self.is_contiguous() {
                (slice::from_raw_parts(ptr.add(self.start), self.len), &[])
            } else {
                let head_len = self.capacity() - self.start;
                (
                    slice::from_raw_parts(ptr.add(self.start), head_len),
                    slice::from_raw_parts(ptr, self.len - head_len),
                )
            }
        }
    }

    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let ptr = self.buf.as_mut_ptr().cast::<T>();
        // SAFETY: see `as_slices`; the two spans never overlap.
        unsafe {
            if self.is_contiguous() {
                (slice::from_raw_parts_mut(ptr.add(self.start), self.len), &mut [])
            } else {
                let head_len = self.capacity() - self.start;
                (
                    slice::from_raw_parts_mut(ptr.add(self.start), head_len),
                    slice::from_raw_parts_mut(ptr, self.len - head_len),
                )
            }
        }
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(unsafe { self.buf[self.start].assume_init_ref() })
        }
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(unsafe { self.buf[self.end].assume_init_ref() })
        }
    }

    /// Appends `item` to the back. Same as [`add_back`](Self::add_back).
    #[inline]
    pub fn add(&mut self, item: T) {
        self.add_back(item)
    }

    /// # Panics
    /// Panics if growing the buffer would exceed [`MAX_CAPACITY`].
    #[inline]
    pub fn add_front(&mut self, item: T) {
        self.ensure_capacity_for(1);
        let slot = self.shift_start(-1);
        self.buf[slot].write(item);
        self.len += 1;
        self.assert_offsets();
    }

    /// # Panics
    /// Panics if growing the buffer would exceed [`MAX_CAPACITY`].
    #[inline]
    pub fn add_back(&mut self, item: T) {
        self.ensure_capacity_for(1);
        let slot = self.shift_end(1);
        self.buf[slot].write(item);
        self.len += 1;
        self.assert_offsets();
    }

    /// Removes and returns the front element, or fails with
    /// [`Error::InvalidState`] if the deque is empty.
    #[inline]
    pub fn remove_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::InvalidState(EMPTY));
        }
        let slot = self.pre_shift_start(1);
        self.len -= 1;
        // SAFETY: `slot` held the front element and is no longer part of the window.
        Ok(unsafe { self.buf[slot].assume_init_read() })
    }

    /// Removes and returns the back element, or fails with
    /// [`Error::InvalidState`] if the deque is empty.
    #[inline]
    pub fn remove_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::InvalidState(EMPTY));
        }
        let slot = self.pre_shift_end(-1);
        self.len -= 1;
        // SAFETY: `slot` held the back element and is no longer part of the window.
        Ok(unsafe { self.buf[slot].assume_init_read() })
    }

    /// Appends every item of `items` to the back, in order.
    #[inline]
    pub fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.add_back_range(items)
    }

    /// Prepends the items of `items` so that the first item becomes the new
    /// front element.
    pub fn add_front_range<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.insert_vec(0, items.into_iter().collect())
    }

    pub fn add_back_range<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.insert_vec(self.len, items.into_iter().collect())
    }

    /// Prepends clones of `source[from_index..from_index + count]`.
    pub fn add_front_slice(&mut self, source: &[T], from_index: usize, count: usize) -> Result<()>
    where
        T: Clone,
    {
        self.insert_slice(0, source, from_index, count)
    }

    /// Appends clones of `source[from_index..from_index + count]`.
    pub fn add_back_slice(&mut self, source: &[T], from_index: usize, count: usize) -> Result<()>
    where
        T: Clone,
    {
        self.insert_slice(self.len, source, from_index, count)
    }

    /// Inserts `item` so that it ends up at logical `index`. `index == len()`
    /// appends.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        self.check_insert_index(index)?;
        if index == 0 {
            self.add_front(item);
        } else if index == self.len {
            self.add_back(item);
        } else {
            self.ensure_capacity_for(1);
            unsafe { self.open_gap(index, 1) };
            let slot = self.to_buffer_index(index);
            self.buf[slot].write(item);
        }
        Ok(())
    }

    /// Inserts all items of `items` as one run starting at logical `index`,
    /// keeping their order. Only the side of `index` with fewer elements is
    /// moved.
    ///
    /// The source is consumed before the deque is touched, so a panicking
    /// iterator leaves the deque unchanged.
    pub fn insert_range<I: IntoIterator<Item = T>>(&mut self, index: usize, items: I) -> Result<()> {
        self.check_insert_index(index)?;
        self.insert_vec(index, items.into_iter().collect());
        Ok(())
    }

    /// Inserts clones of `source[from_index..from_index + count]` at logical
    /// `index`.
    ///
    /// Fails with [`Error::InvalidArgument`] if the source range does not fit
    /// `source`, and with [`Error::IndexOutOfRange`] if `index > len()`.
    pub fn insert_slice(
        &mut self,
        index: usize,
        source: &[T],
        from_index: usize,
        count: usize,
    ) -> Result<()>
    where
        T: Clone,
    {
        let run = from_index
            .checked_add(count)
            .and_then(|end| source.get(from_index..end))
            .ok_or(Error::InvalidArgument("source range does not fit the source slice"))?;
        self.insert_range(index, run.iter().cloned())
    }

    fn insert_vec(&mut self, index: usize, items: Vec<T>) {
        debug_assert!(index <= self.len);
        if items.is_empty() {
            return;
        }
        self.ensure_capacity_for(items.len());
        unsafe { self.open_gap(index, items.len()) };
        for (i, item) in items.into_iter().enumerate() {
            let slot = self.to_buffer_index(index + i);
            self.buf[slot].write(item);
        }
    }

    /// Opens `count` uninitialized slots at logical `index` by moving either
    /// the elements before `index` towards the front or the ones after it
    /// towards the back, whichever side is shorter.
    ///
    /// # Safety
    /// `index <= self.len` and `self.len + count <= self.capacity()` must hold.
    /// The opened slots are counted in `self.len` and must be written before
    /// anything reads them or the deque is dropped.
    unsafe fn open_gap(&mut self, index: usize, count: usize) {
        let delta = count as isize;
        if index == self.len {
            self.shift_end(delta);
        } else if index == 0 {
            self.shift_start(-delta);
        } else if index < self.len / 2 {
            // [0, index) moves `count` slots towards the front. Once the start
            // offset moved, that prefix sits at [count, count + index).
            self.shift_start(-delta);
            self.copy_run(count, 0, index);
        } else {
            self.copy_run(index, index + count, self.len - index);
            self.shift_end(delta);
        }
        self.len += count;
        self.assert_offsets();
    }

    /// Closes the `count` slots at logical `index`, whose elements must
    /// already have been moved out, by moving the shorter side over them.
    ///
    /// # Safety
    /// `index + count <= self.len` must hold and the slots in
    /// `[index, index + count)` must not hold live elements anymore.
    unsafe fn close_gap(&mut self, index: usize, count: usize) {
        let delta = count as isize;
        if index == 0 {
            self.shift_start(delta);
        } else if index + count == self.len {
            self.shift_end(-delta);
        } else if index + count / 2 < self.len / 2 {
            self.copy_run(0, count, index);
            self.shift_start(delta);
        } else {
            self.copy_run(index + count, index, self.len - index - count);
            self.shift_end(-delta);
        }
        self.len -= count;
        self.assert_offsets();
    }

    /// Moves the logical run `[from, from + len)` to `[to, to + len)`.
    ///
    /// The run is copied in pieces that do not wrap around the physical end of
    /// the buffer. Pieces are taken front to back when the destination trails
    /// the source and back to front when it leads, so no source slot is
    /// overwritten before it has been read.
    ///
    /// # Safety
    /// Both runs must lie within the first `capacity` logical slots, so that
    /// every physical slot involved is named by exactly one logical index.
    unsafe fn copy_run(&mut self, from: usize, to: usize, len: usize) {
        if from == to || len == 0 {
            return;
        }

        let cap = self.capacity();
        let buf = self.buf.as_mut_ptr();

        if to < from {
            let mut done = 0;
            while done < len {
                let src = self.to_buffer_index(from + done);
                let dst = self.to_buffer_index(to + done);
                let piece = (len - done).min(cap - src).min(cap - dst);
                ptr::copy(buf.add(src), buf.add(dst), piece);
                done += piece;
            }
        } else {
            let mut left = len;
            while left > 0 {
                // one past the physical slot of the last element still to move
                let src = self.to_buffer_index(from + left - 1) + 1;
                let dst = self.to_buffer_index(to + left - 1) + 1;
                let piece = left.min(src).min(dst);
                ptr::copy(buf.add(src - piece), buf.add(dst - piece), piece);
                left -= piece;
            }
        }
    }

    /// Removes and returns the element at logical `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        if index == 0 {
            return self.remove_front();
        }
        if index == self.len - 1 {
            return self.remove_back();
        }
        let slot = self.to_buffer_index(index);
        // SAFETY: `index` is live; its slot is closed over right after the read.
        unsafe {
            let item = self.buf[slot].assume_init_read();
            self.close_gap(index, 1);
            Ok(item)
        }
    }

    /// Removes and drops the `count` elements starting at logical `index`.
    ///
    /// Fails with [`Error::InvalidState`] on an empty deque and with
    /// [`Error::IndexOutOfRange`] if `index + count > len()`. Removing zero
    /// elements from a non-empty deque does nothing.
    pub fn remove_range(&mut self, index: usize, count: usize) -> Result<()> {
        if self.is_empty() {
            return Err(Error::InvalidState(EMPTY));
        }
        if index.checked_add(count).map_or(true, |end| end > self.len) {
            return Err(Error::IndexOutOfRange { index, len: self.len });
        }
        if count == 0 {
            return Ok(());
        }

        /// Closes the gap once the run is dropped, even if a destructor panics.
        struct CloseGap<'a, T> {
            deque: &'a mut Deque<T>,
            index: usize,
            count: usize,
        }

        impl<'a, T> Drop for CloseGap<'a, T> {
            fn drop(&mut self) {
                // SAFETY: every slot of the run has been dropped by now.
                unsafe { self.deque.close_gap(self.index, self.count) }
            }
        }

        let (front, back) = self.run_spans(index, count);
        let _guard = CloseGap { deque: self, index, count };
        // SAFETY: both spans are live and disjoint, and `_guard` takes them out
        // of the window afterwards, so each element is dropped exactly once.
        unsafe {
            let _back = Dropper(back);
            ptr::drop_in_place(front);
        }
        Ok(())
    }

    /// Raw views of the `count` live slots starting at logical `index`, split
    /// where the run wraps past the end of the buffer.
    fn run_spans(&mut self, index: usize, count: usize) -> (*mut [T], *mut [T]) {
        let first = self.to_buffer_index(index);
        let head = count.min(self.capacity() - first);
        let slots = self.buf.as_mut_ptr().cast::<T>();
        // SAFETY: `first + head <= capacity` and `count - head <= first`.
        unsafe {
            (
                ptr::slice_from_raw_parts_mut(slots.add(first), head),
                ptr::slice_from_raw_parts_mut(slots, count - head),
            )
        }
    }

    /// Removes the first element equal to `item`. Returns whether one was
    /// found.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(item) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(unsafe { self.buf[self.to_buffer_index(index)].assume_init_ref() })
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        let slot = self.to_buffer_index(index);
        Ok(unsafe { self.buf[slot].assume_init_mut() })
    }

    /// Replaces the element at logical `index` and returns the old one.
    #[inline]
    pub fn set(&mut self, index: usize, item: T) -> Result<T> {
        self.get_mut(index).map(|slot| core::mem::replace(slot, item))
    }

    /// Returns the logical index of the first element equal to `item`.
    ///
    /// Elements are compared with their own `PartialEq`. For types whose
    /// equality is not meaningful (`f64::NAN`, for one) the answer is only as
    /// good as that implementation.
    #[inline]
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|t| t == item)
    }

    #[inline]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let (a, b) = self.as_slices();
        a.contains(item) || b.contains(item)
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        let (a, b) = self.as_mut_slices();
        let (a, b) = (a as *mut [T], b as *mut [T]);
        self.len = 0;
        self.start = 0;
        self.end = self.mask();
        let _back_dropper = Dropper(b);
        unsafe { ptr::drop_in_place(a) }
    }

    /// Clones the elements, in logical order, into `dest[offset..offset + len()]`.
    ///
    /// Fails with [`Error::InvalidArgument`] if `dest` has fewer than `len()`
    /// slots from `offset` on.
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone,
    {
        if offset > dest.len() || dest.len() - offset < self.len {
            return Err(Error::InvalidArgument("destination slice is too small"));
        }
        let (a, b) = self.as_slices();
        let (da, db) = dest[offset..offset + self.len].split_at_mut(a.len());
        da.clone_from_slice(a);
        db.clone_from_slice(b);
        Ok(())
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T> Default for Deque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    /// Builds a deque whose capacity is the length of `v` rounded up to a
    /// power of two.
    fn from(v: Vec<T>) -> Self {
        let mut deque = Self::with_capacity(v.len());
        deque.insert_vec(0, v);
        deque
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    #[inline]
    fn from(arr: [T; N]) -> Self {
        Self::from(Vec::from(arr))
    }
}

impl<T> FromIterator<T> for Deque<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(Vec::from_iter(iter))
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        iter.for_each(|item| self.add_back(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for Deque<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Clone> Clone for Deque<T> {
    /// Produces an independent deque with the same elements and capacity.
    fn clone(&self) -> Self {
        let mut deque = Self::with_capacity(self.capacity());
        deque.extend(self.iter().cloned());
        deque
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Deque<U>> for Deque<T> {
    fn eq(&self, other: &Deque<U>) -> bool {
        if self.len != other.len {
            return false;
        }
        let (a, b) = self.as_slices();
        let (c, d) = other.as_slices();
        match a.len().cmp(&c.len()) {
            Ordering::Equal => a == c && b == d,
            Ordering::Less => {
                let (c_front, c_mid) = c.split_at(a.len());
                let (b_mid, b_back) = b.split_at(c_mid.len());
                a == c_front && b_mid == c_mid && b_back == d
            }
            Ordering::Greater => {
                let (a_front, a_mid) = a.split_at(c.len());
                let (d_mid, d_back) = d.split_at(a_mid.len());
                a_front == c && a_mid == d_mid && b == d_back
            }
        }
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Deque<T> {
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        if self.len != other.len() {
            return false;
        }
        let (a, b) = self.as_slices();
        let (c, d) = other.split_at(a.len());
        a == c && b == d
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Deque<T> {
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for Deque<T> {
    #[inline]
    fn eq(&self, other: &Vec<U>) -> bool {
        self == other.as_slice()
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: PartialOrd> PartialOrd for Deque<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for Deque<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for Deque<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|t| t.hash(state));
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
